use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{MathError, Operation, Vec3};

use super::{MatDims, MatIndex};

/// 3x3 matrix, stored row-major
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mat33(pub [f32; 9]);

#[cfg(feature="approx")]
impl float_cmp::ApproxEq for Mat33 {
    type Margin = float_cmp::F32Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin: Self::Margin = margin.into();
        self.0.iter()
            .zip(other.0.iter())
            .all(|(u, v)| <f32 as float_cmp::ApproxEq>::approx_eq(*u, *v, margin))
    }
}

impl Mat33 {
    pub const DIMS: MatDims = MatDims::square(3);

    /// Create from cells, row by row
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        n00: f32, n01: f32, n02: f32,
        n10: f32, n11: f32, n12: f32,
        n20: f32, n21: f32, n22: f32,
    ) -> Self {
        Self([
            n00, n01, n02,
            n10, n11, n12,
            n20, n21, n22,
        ])
    }

    /// Create from array
    pub const fn of(v: [f32; 9]) -> Self {
        Self(v)
    }

    /// Copy a 3x3 buffer
    pub const fn from_rows_array(rows: &[[f32; 3]; 3]) -> Self {
        Self::new(
            rows[0][0], rows[0][1], rows[0][2],
            rows[1][0], rows[1][1], rows[1][2],
            rows[2][0], rows[2][1], rows[2][2],
        )
    }

    /// Create from three row vectors
    pub const fn from_rows(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self::new(
            a.x, a.y, a.z,
            b.x, b.y, b.z,
            c.x, c.y, c.z,
        )
    }

    /// Create matrix with all zeroes
    pub const fn zero() -> Self {
        Self([0.; 9])
    }

    /// Create an identity matrix
    pub const fn identity() -> Self {
        Self([
            1., 0., 0.,
            0., 1., 0.,
            0., 0., 1.,
        ])
    }

    pub const fn data(&self) -> &[f32] {
        &self.0
    }

    pub const fn rows(&self) -> [Vec3; 3] {
        [
            Vec3::new(self.0[0], self.0[1], self.0[2]),
            Vec3::new(self.0[3], self.0[4], self.0[5]),
            Vec3::new(self.0[6], self.0[7], self.0[8]),
        ]
    }

    /// Cell at `index`
    pub fn get(&self, index: impl Into<MatIndex>) -> Result<f32, MathError> {
        let offset = Self::DIMS.compute_offset(index.into())?;
        Ok(self.0[offset])
    }

    pub fn get_mut(&mut self, index: impl Into<MatIndex>) -> Result<&mut f32, MathError> {
        let offset = Self::DIMS.compute_offset(index.into())?;
        Ok(&mut self.0[offset])
    }

    /// Overwrite the cell at `index`
    pub fn set(&mut self, index: impl Into<MatIndex>, value: f32) -> Result<(), MathError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Iterate over the upper-triangle cells paired with their mirror below the diagonal
    fn off_diagonal_pairs(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        [(0, 1), (0, 2), (1, 2)]
            .into_iter()
            .map(|(row, col)| {
                let upper = MatIndex { row, col };
                let lower = upper.transposed();
                (
                    self.0[Self::DIMS.compute_offset_unchecked(upper)],
                    self.0[Self::DIMS.compute_offset_unchecked(lower)],
                )
            })
    }

    /// True if all six off-diagonal cells are zero
    pub fn is_diagonal(&self) -> bool {
        self.off_diagonal_pairs().all(|(u, l)| u == 0. && l == 0.)
    }

    pub fn is_symmetric(&self) -> bool {
        self.off_diagonal_pairs().all(|(u, l)| u == l)
    }

    /// True if `Mᵀ = -M` (which forces a zero diagonal)
    pub fn is_antisymmetric(&self) -> bool {
        self.0[0] == 0. && self.0[4] == 0. && self.0[8] == 0.
            && self.off_diagonal_pairs().all(|(u, l)| u == -l)
    }

    /// Determinant
    pub fn det(&self) -> f32 {
		0.
			+ self.0[0] * self.0[4] * self.0[8]
			- self.0[0] * self.0[5] * self.0[7]
			+ self.0[1] * self.0[5] * self.0[6]
			- self.0[1] * self.0[3] * self.0[8]
			+ self.0[2] * self.0[3] * self.0[7]
			- self.0[2] * self.0[4] * self.0[6]
    }

    pub fn trace(&self) -> f32 {
        self.0[0] + self.0[4] + self.0[8]
    }

    /// Transpose
    pub const fn transposed(&self) -> Self {
        Self([
            self.0[0], self.0[3], self.0[6],
            self.0[1], self.0[4], self.0[7],
            self.0[2], self.0[5], self.0[8],
        ])
    }

    /// In-place transpose
    pub fn transpose_mut(&mut self) {
        self.0.swap(1, 3); // (0, 1) <-> (1, 0)
        self.0.swap(2, 6); // (0, 2) <-> (2, 0)
        self.0.swap(5, 7); // (1, 2) <-> (2, 1)
    }

    /// Matrix multipliation
    pub fn matmul(&self, rhs: &Mat33) -> Self {
        Self([
            self.0[0]*rhs.0[0] + self.0[1]*rhs.0[3] + self.0[2]*rhs.0[6], self.0[0]*rhs.0[1] + self.0[1]*rhs.0[4] + self.0[2]*rhs.0[7], self.0[0]*rhs.0[2] + self.0[1]*rhs.0[5] + self.0[2]*rhs.0[8],
            self.0[3]*rhs.0[0] + self.0[4]*rhs.0[3] + self.0[5]*rhs.0[6], self.0[3]*rhs.0[1] + self.0[4]*rhs.0[4] + self.0[5]*rhs.0[7], self.0[3]*rhs.0[2] + self.0[4]*rhs.0[5] + self.0[5]*rhs.0[8],
            self.0[6]*rhs.0[0] + self.0[7]*rhs.0[3] + self.0[8]*rhs.0[6], self.0[6]*rhs.0[1] + self.0[7]*rhs.0[4] + self.0[8]*rhs.0[7], self.0[6]*rhs.0[2] + self.0[7]*rhs.0[5] + self.0[8]*rhs.0[8],
        ])
    }

    /// Matrix-vector product, `result[i] = Σ_j m[i,j] * v[j]`
    pub fn mul_vec(&self, rhs: &Vec3) -> Vec3 {
        Vec3::new(
            self.0[0] * rhs.x + self.0[1] * rhs.y + self.0[2] * rhs.z,
            self.0[3] * rhs.x + self.0[4] * rhs.y + self.0[5] * rhs.z,
            self.0[6] * rhs.x + self.0[7] * rhs.y + self.0[8] * rhs.z,
        )
    }

    pub fn scale(&self, scalar: f32) -> Self {
        Self(self.0.map(|e| e * scalar))
    }

    pub fn scale_inplace(&mut self, scalar: f32) {
        for e in self.0.iter_mut() {
            *e *= scalar;
        }
    }

    /// Matrix division.
    ///
    /// Not supported: this would need an inverse, which this crate does not provide.
    pub fn div(&self, _rhs: &Mat33) -> Result<Mat33, MathError> {
        Err(MathError::unsupported(Operation::MatrixDivision))
    }
}

impl From<[[f32; 3]; 3]> for Mat33 {
    fn from(value: [[f32; 3]; 3]) -> Self {
        Self::from_rows_array(&value)
    }
}

impl TryFrom<&[f32]> for Mat33 {
    type Error = MathError;

    fn try_from(value: &[f32]) -> Result<Self, Self::Error> {
        let cells: [f32; 9] = value.try_into()
            .map_err(|_| MathError::InvalidLength { actual: value.len(), expected: Self::DIMS.len() })?;
        Ok(Self(cells))
    }
}

impl Index<(usize, usize)> for Mat33 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < 3 && col < 3, "Mat33 index out of bounds: ({row}, {col})");
        let idx = row * 3 + col;
        &self.0[idx]
    }
}

impl IndexMut<(usize, usize)> for Mat33 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(row < 3 && col < 3, "Mat33 index out of bounds: ({row}, {col})");
        let idx = row * 3 + col;
        &mut self.0[idx]
    }
}

impl Add<Mat33> for Mat33 {
    type Output = Mat33;

    fn add(mut self, rhs: Mat33) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sub<Mat33> for Mat33 {
    type Output = Mat33;

    fn sub(mut self, rhs: Mat33) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Neg for Mat33 {
    type Output = Mat33;

    fn neg(self) -> Self::Output {
        self.scale(-1.)
    }
}

impl Mul<Mat33> for Mat33 {
    type Output = Mat33;

    fn mul(self, rhs: Mat33) -> Self::Output {
        self.matmul(&rhs)
    }
}

impl Mul<&Mat33> for &Mat33 {
    type Output = Mat33;

    fn mul(self, rhs: &Mat33) -> Self::Output {
        self.matmul(rhs)
    }
}

impl Mul<f32> for Mat33 {
    type Output = Mat33;

    fn mul(mut self, rhs: f32) -> Self::Output {
        self.scale_inplace(rhs);
        self
    }
}

impl Mul<Mat33> for f32 {
    type Output = Mat33;

    fn mul(self, rhs: Mat33) -> Self::Output {
        rhs.scale(self)
    }
}

impl AddAssign<Mat33> for Mat33 {
    fn add_assign(&mut self, rhs: Mat33) {
        for (e, r) in self.0.iter_mut().zip(rhs.0) {
            *e += r;
        }
    }
}

impl SubAssign<Mat33> for Mat33 {
    fn sub_assign(&mut self, rhs: Mat33) {
        for (e, r) in self.0.iter_mut().zip(rhs.0) {
            *e -= r;
        }
    }
}

impl MulAssign<f32> for Mat33 {
    fn mul_assign(&mut self, rhs: f32) {
        self.scale_inplace(rhs);
    }
}
