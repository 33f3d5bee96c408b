use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{MathError, Operation, Vec2};

use super::{MatDims, MatIndex};

/// 2x2 matrix, stored row-major
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mat22(pub [f32; 4]);

#[cfg(feature="approx")]
impl float_cmp::ApproxEq for Mat22 {
    type Margin = float_cmp::F32Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin: Self::Margin = margin.into();
        self.0.iter()
            .zip(other.0.iter())
            .all(|(u, v)| <f32 as float_cmp::ApproxEq>::approx_eq(*u, *v, margin))
    }
}

impl Mat22 {
    pub const DIMS: MatDims = MatDims::square(2);

    /// Create from cells, row by row
    pub const fn new(n00: f32, n01: f32, n10: f32, n11: f32) -> Self {
        Self([n00, n01, n10, n11])
    }

    /// Create from row-major array
    pub const fn of(v: [f32; 4]) -> Self {
        Self(v)
    }

    /// Copy a 2x2 buffer
    pub const fn from_rows_array(rows: &[[f32; 2]; 2]) -> Self {
        Self::new(rows[0][0], rows[0][1], rows[1][0], rows[1][1])
    }

    /// Create from two row vectors
    pub const fn from_rows(a: Vec2, b: Vec2) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Create matrix with all zeroes
    pub const fn zero() -> Self {
        Self([0.; 4])
    }

    /// Create an identity matrix
    pub const fn identity() -> Self {
        Self::new(
            1., 0.,
            0., 1.,
        )
    }

    pub const fn data(&self) -> &[f32] {
        &self.0
    }

    /// Row vectors
    pub const fn rows(&self) -> [Vec2; 2] {
        [
            Vec2::new(self.0[0], self.0[1]),
            Vec2::new(self.0[2], self.0[3]),
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

    /// True if both off-diagonal cells are zero
    pub fn is_diagonal(&self) -> bool {
        self.0[1] == 0. && self.0[2] == 0.
    }

    pub fn is_symmetric(&self) -> bool {
        self.0[1] == self.0[2]
    }

    /// True if `Mᵀ = -M` (which forces a zero diagonal)
    pub fn is_antisymmetric(&self) -> bool {
        self.0[0] == 0. && self.0[3] == 0. && self.0[1] == -self.0[2]
    }

    /// Compute matrix determinant
    pub fn det(&self) -> f32 {
        self.0[0] * self.0[3] - self.0[1] * self.0[2]
    }

    pub fn trace(&self) -> f32 {
        self.0[0] + self.0[3]
    }

    /// Transpose
    pub const fn transposed(&self) -> Self {
        Self::new(
            self.0[0], self.0[2],
            self.0[1], self.0[3],
        )
    }

    /// In-place transpose
    pub fn transpose_mut(&mut self) {
        self.0.swap(1, 2);
    }

    /// Matrix multiplication
    pub fn matmul(&self, rhs: &Mat22) -> Self {
        Self::new(
            self.0[0]*rhs.0[0] + self.0[1]*rhs.0[2], self.0[0]*rhs.0[1] + self.0[1]*rhs.0[3],
            self.0[2]*rhs.0[0] + self.0[3]*rhs.0[2], self.0[2]*rhs.0[1] + self.0[3]*rhs.0[3],
        )
    }

    /// Matrix-vector product
    pub fn mul_vec(&self, rhs: &Vec2) -> Vec2 {
        Vec2::new(
            self.0[0] * rhs.x + self.0[1] * rhs.y,
            self.0[2] * rhs.x + self.0[3] * rhs.y,
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
    pub fn div(&self, _rhs: &Mat22) -> Result<Mat22, MathError> {
        Err(MathError::unsupported(Operation::MatrixDivision))
    }
}

impl From<[[f32; 2]; 2]> for Mat22 {
    fn from(value: [[f32; 2]; 2]) -> Self {
        Self::from_rows_array(&value)
    }
}

impl TryFrom<&[f32]> for Mat22 {
    type Error = MathError;

    fn try_from(value: &[f32]) -> Result<Self, Self::Error> {
        let cells: [f32; 4] = value.try_into()
            .map_err(|_| MathError::InvalidLength { actual: value.len(), expected: Self::DIMS.len() })?;
        Ok(Self(cells))
    }
}

impl Index<(usize, usize)> for Mat22 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < 2 && col < 2, "Mat22 index out of bounds: ({row}, {col})");
        &self.0[row * 2 + col]
    }
}

impl IndexMut<(usize, usize)> for Mat22 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(row < 2 && col < 2, "Mat22 index out of bounds: ({row}, {col})");
        &mut self.0[row * 2 + col]
    }
}

impl Add<Mat22> for Mat22 {
    type Output = Mat22;

    fn add(self, rhs: Mat22) -> Self::Output {
        Self::new(
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
            self.0[3] + rhs.0[3],
        )
    }
}

impl Sub<Mat22> for Mat22 {
    type Output = Mat22;

    fn sub(self, rhs: Mat22) -> Self::Output {
        Self::new(
            self.0[0] - rhs.0[0],
            self.0[1] - rhs.0[1],
            self.0[2] - rhs.0[2],
            self.0[3] - rhs.0[3],
        )
    }
}

impl Neg for Mat22 {
    type Output = Mat22;

    fn neg(self) -> Self::Output {
        self.scale(-1.)
    }
}

impl Mul<Mat22> for Mat22 {
    type Output = Mat22;

    fn mul(self, rhs: Mat22) -> Self::Output {
        self.matmul(&rhs)
    }
}

impl Mul<&Mat22> for &Mat22 {
    type Output = Mat22;

    fn mul(self, rhs: &Mat22) -> Self::Output {
        self.matmul(rhs)
    }
}

impl Mul<Vec2> for Mat22 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        self.mul_vec(&rhs)
    }
}

impl Mul<&Vec2> for &Mat22 {
    type Output = Vec2;

    fn mul(self, rhs: &Vec2) -> Self::Output {
        self.mul_vec(rhs)
    }
}

impl Mul<f32> for Mat22 {
    type Output = Mat22;

    fn mul(mut self, rhs: f32) -> Self::Output {
        self.scale_inplace(rhs);
        self
    }
}

impl Mul<Mat22> for f32 {
    type Output = Mat22;

    fn mul(self, rhs: Mat22) -> Self::Output {
        rhs.scale(self)
    }
}

impl AddAssign<Mat22> for Mat22 {
    fn add_assign(&mut self, rhs: Mat22) {
        for (e, r) in self.0.iter_mut().zip(rhs.0) {
            *e += r;
        }
    }
}

impl SubAssign<Mat22> for Mat22 {
    fn sub_assign(&mut self, rhs: Mat22) {
        for (e, r) in self.0.iter_mut().zip(rhs.0) {
            *e -= r;
        }
    }
}

impl MulAssign<f32> for Mat22 {
    fn mul_assign(&mut self, rhs: f32) {
        self.scale_inplace(rhs);
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::{MathError, Operation, Vec2};
    use super::Mat22;

    #[test]
    fn construct() {
        let m = Mat22::new(1., 2., 3., 4.);
        assert_eq!(Mat22::from([[1., 2.], [3., 4.]]), m);
        assert_eq!(Mat22::from_rows(Vec2::new(1., 2.), Vec2::new(3., 4.)), m);
        assert_eq!(Mat22::try_from(&[1f32, 2., 3., 4.][..]), Ok(m));
        assert_eq!(m.rows(), [Vec2::new(1., 2.), Vec2::new(3., 4.)]);
        assert_eq!(Mat22::default(), Mat22::zero());

        let err = Mat22::try_from(&[1f32, 2., 3.][..]).unwrap_err();
        assert_eq!(err, MathError::InvalidLength { actual: 3, expected: 4 });
    }

    #[test]
    fn buffer_is_copied() {
        let mut buf = [[1., 2.], [3., 4.]];
        let m = Mat22::from_rows_array(&buf);
        buf[0][0] = 100.;
        assert_eq!(m[(0, 0)], 1.);
        assert_eq!(buf[0][0], 100.);
    }

    #[test]
    fn indexing() {
        let mut m = Mat22::new(1., 2., 3., 4.);
        assert_eq!(m[(0, 1)], 2.);
        assert_eq!(m[(1, 0)], 3.);
        assert_eq!(m.get((1, 1)), Ok(4.));

        m[(0, 0)] = 9.;
        m.set((1, 0), 8.).unwrap();
        assert_eq!(m, Mat22::new(9., 2., 8., 4.));

        assert!(matches!(m.get((2, 0)), Err(MathError::CellOutOfBounds(_))));
        assert!(matches!(m.set((0, 2), 1.), Err(MathError::CellOutOfBounds(_))));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let m = Mat22::zero();
        let _ = m[(0, 2)];
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat22::zero().det(), 0.);
        assert_eq!(Mat22::new(1., 0., 0., 1.).det(), 1.);
        assert_eq!(Mat22::new(1., 2., 3., 4.).det(), -2.);
    }

    #[test]
    fn diagonal() {
        assert!(Mat22::new(1., 0., 0., 1.).is_diagonal());
        assert!(!Mat22::new(1., 2., 0., 1.).is_diagonal());
        assert!(!Mat22::new(1., 0., 2., 1.).is_diagonal());
    }

    #[test]
    fn symmetric() {
        assert!(Mat22::new(1., 2., 2., 1.).is_symmetric());
        assert!(!Mat22::new(1., 2., 3., 1.).is_symmetric());
    }

    #[test]
    fn antisymmetric() {
        assert!(Mat22::new(0., 2., -2., 0.).is_antisymmetric());
        assert!(Mat22::zero().is_antisymmetric());
        assert!(!Mat22::new(1., 2., -2., 0.).is_antisymmetric());
        assert!(!Mat22::new(0., 2., 2., 0.).is_antisymmetric());
    }

    #[test]
    fn transpose() {
        let m = Mat22::new(1., 2., 3., 4.);
        assert_eq!(m.transposed(), Mat22::new(1., 3., 2., 4.));

        let mut n = m;
        n.transpose_mut();
        assert_eq!(n, m.transposed());

        let mut rng = StdRng::seed_from_u64(22);
        for _ in 0..32 {
            let m = Mat22::of(std::array::from_fn(|_| rng.gen_range(-10.0..10.0)));
            assert_eq!(m.transposed().transposed(), m);
        }
    }

    #[test]
    fn addition() {
        let sum = Mat22::new(1., 0., 0., 1.) + Mat22::new(2., 3., 4., 5.);
        assert_eq!(sum, Mat22::new(3., 3., 4., 6.));
        assert_eq!(sum - Mat22::new(2., 3., 4., 5.), Mat22::identity());

        let mut acc = Mat22::identity();
        acc += Mat22::new(2., 3., 4., 5.);
        assert_eq!(acc, sum);
        acc -= Mat22::identity();
        assert_eq!(acc, Mat22::new(2., 3., 4., 5.));
    }

    #[test]
    fn matrix_product() {
        let a = Mat22::new(1., 2., 3., 4.);
        let b = Mat22::new(5., 6., 7., 8.);
        assert_eq!(a * b, Mat22::new(19., 22., 43., 50.));
        assert_eq!(&b * &a, Mat22::new(23., 34., 31., 46.));
        assert_eq!(a * Mat22::identity(), a);
    }

    #[test]
    fn matrix_vector_product() {
        let a = Mat22::new(1., 2., 3., 4.);
        assert_eq!(a * Vec2::new(1., 1.), Vec2::new(3., 7.));
        assert_eq!(&a * &Vec2::new(2., -1.), Vec2::new(0., 2.));
    }

    #[test]
    fn scalar_product() {
        let a = Mat22::new(1., 2., 3., 4.);
        assert_eq!(a * 2., Mat22::new(2., 4., 6., 8.));
        assert_eq!(2. * a, a * 2.);
        assert_eq!(-a, a * -1.);

        let mut b = a;
        b *= 0.5;
        assert_eq!(b, Mat22::new(0.5, 1., 1.5, 2.));
        assert_eq!(a.trace(), 5.);
    }

    #[test]
    #[cfg(feature="approx")]
    fn approx_equality() {
        use float_cmp::approx_eq;
        let a = Mat22::new(1., 2., 3., 4.);
        let b = a * (1. + f32::EPSILON);
        assert!(approx_eq!(Mat22, a, b, ulps = 2));
        assert!(!approx_eq!(Mat22, a, a * 1.5, epsilon = 1e-3));
    }

    #[test]
    fn division_unsupported() {
        let a = Mat22::identity();
        assert_eq!(a.div(&a), Err(MathError::Unsupported(Operation::MatrixDivision)));
    }
}
