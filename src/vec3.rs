use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{Mat33, MathError, Vec2};

/// Classification of the angle between two vectors, from the sign of its cosine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleType {
    /// Cosine is negative
    Obtuse,
    /// Cosine is (within `f32::EPSILON` of) zero
    Right,
    /// Cosine is positive
    Acute,
}

impl AngleType {
    /// Classify a cosine-like value (NaN classifies as [Acute](Self::Acute))
    pub fn classify(cosine: f32) -> Self {
        if cosine.abs() <= f32::EPSILON {
            Self::Right
        } else if cosine < 0. {
            Self::Obtuse
        } else {
            Self::Acute
        }
    }
}

/// `-1` for obtuse, `0` for right, `1` for acute
impl From<AngleType> for i8 {
    fn from(value: AngleType) -> Self {
        match value {
            AngleType::Obtuse => -1,
            AngleType::Right => 0,
            AngleType::Acute => 1,
        }
    }
}

/// 3 element vector
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[cfg(feature="approx")]
impl float_cmp::ApproxEq for Vec3 {
    type Margin = float_cmp::F32Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin: Self::Margin = margin.into();
        <f32 as float_cmp::ApproxEq>::approx_eq(self.x, other.x, margin)
            && <f32 as float_cmp::ApproxEq>::approx_eq(self.y, other.y, margin)
            && <f32 as float_cmp::ApproxEq>::approx_eq(self.z, other.z, margin)
    }
}

impl Vec3 {
    /// Number of components
    pub const LEN: usize = 3;

    /// Create from constant values
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Vector of all zeroes
    pub const fn zero() -> Self {
        Self::new(0., 0., 0.)
    }

    /// Component at `index` (0, 1, 2 are x, y, z)
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(MathError::ComponentOutOfRange { index, len: Self::LEN }),
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut f32, MathError> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            2 => Ok(&mut self.z),
            _ => Err(MathError::ComponentOutOfRange { index, len: Self::LEN }),
        }
    }

    /// Overwrite the component at `index`
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Sum of squares of three raw components
    #[inline]
    pub fn sum_of_squares(x: f32, y: f32, z: f32) -> f32 {
        (x * x) + (y * y) + (z * z)
    }

    /// Dot product
    pub fn dot(&self, rhs: &Vec3) -> f32 {
        (self.x * rhs.x) + (self.y * rhs.y) + (self.z * rhs.z)
    }

    /// Magnitude squared
    pub fn mag_sq(&self) -> f32 {
        Self::sum_of_squares(self.x, self.y, self.z)
    }

    /// Vector magnitude
    pub fn mag(&self) -> f32 {
        self.mag_sq().sqrt()
    }

    /// Square root of the dot product of `a` and `b`.
    ///
    /// This is *not* the distance between them (see [distance_between](Self::distance_between)),
    /// and is NaN when the vectors point away from each other.
    pub fn sqrt_dot(a: &Vec3, b: &Vec3) -> f32 {
        a.dot(b).sqrt()
    }

    /// Cross product
    pub fn cross(&self, rhs: &Vec3) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Outer product
    pub fn outer(&self, rhs: &Vec3) -> Mat33 {
        Mat33::of([
            self.x * rhs.x, self.x * rhs.y, self.x * rhs.z,
            self.y * rhs.x, self.y * rhs.y, self.y * rhs.z,
            self.z * rhs.x, self.z * rhs.y, self.z * rhs.z,
        ])
    }

    /// Scale vector
    ///
    /// See also: [scale_mut](Self::scale_mut)
    pub fn scale(&self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }

    /// Scale vector, in place
    ///
    /// See also: [scale](Self::scale)
    pub fn scale_mut(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }

    /// Normalize vector
    ///
    /// The length is computed with `hypot`, so only an exactly-zero vector is rejected,
    /// even when the squared magnitude would under- or overflow.
    pub fn normalized(&self) -> Result<Vec3, MathError> {
        let mag = self.x.hypot(self.y).hypot(self.z);
        if mag == 0. {
            return Err(MathError::zero_magnitude());
        }
        Ok(self / mag)
    }

    /// Euclidean distance to `to`
    pub fn distance(&self, to: &Vec3) -> f32 {
        Self::distance_between(self, to)
    }

    /// Euclidean distance between two points
    pub fn distance_between(from: &Vec3, to: &Vec3) -> f32 {
        Self::sum_of_squares(to.x - from.x, to.y - from.y, to.z - from.z).sqrt()
    }

    /// Displacement from `self` to `to` (not normalized)
    pub fn direction_to(&self, to: &Vec3) -> Vec3 {
        to - self
    }

    /// Cosine of the angle between `self` and `to`
    pub fn cosine_between(&self, to: &Vec3) -> f32 {
        self.dot(to) / (self.mag() * to.mag())
    }

    /// Classify the angle between `self` and `to`
    ///
    /// If either vector is zero the cosine is NaN, which classifies as [Acute](AngleType::Acute).
    pub fn angle_type(&self, to: &Vec3) -> AngleType {
        AngleType::classify(self.cosine_between(to))
    }

    /// Projection of `self` onto `onto`
    pub fn project_onto(&self, onto: &Vec3) -> Vec3 {
        onto * (self.dot(onto) / onto.mag_sq())
    }

    /// Component of `self` perpendicular to `from`
    pub fn reject_from(&self, from: &Vec3) -> Vec3 {
        self - &self.project_onto(from)
    }
}

/// Raise dimension with `z = 0`
impl From<Vec2> for Vec3 {
    fn from(value: Vec2) -> Self {
        Self::new(value.x, value.y, 0.)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl TryFrom<&[f32]> for Vec3 {
    type Error = MathError;

    fn try_from(value: &[f32]) -> Result<Self, Self::Error> {
        match value {
            &[x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(MathError::InvalidLength { actual: value.len(), expected: Self::LEN }),
        }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        [value.x, value.y, value.z]
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of range: {index}"),
        }
    }
}

/// Vector addition
impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Vector addition
impl Add<&Vec3> for &Vec3 {
    type Output = Vec3;

    fn add(self, rhs: &Vec3) -> Self::Output {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Vector subtraction
impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Vector subtraction
impl Sub<&Vec3> for &Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: &Vec3) -> Self::Output {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Scale
impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

/// Scale
impl Mul<f32> for &Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

/// Scale
impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs.scale(self)
    }
}

/// Matrix-vector product
impl Mul<Vec3> for Mat33 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        self.mul_vec(&rhs)
    }
}

/// Matrix-vector product
impl Mul<&Vec3> for &Mat33 {
    type Output = Vec3;

    fn mul(self, rhs: &Vec3) -> Self::Output {
        self.mul_vec(rhs)
    }
}

/// Component-wise division
impl Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// Component-wise division
impl Div<f32> for &Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f32) -> Self::Output {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// Vector negative
impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Vector in-place addition
impl AddAssign<Vec3> for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

/// Vector in-place subtraction
impl SubAssign<Vec3> for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

/// Vector in-place scale
impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.scale_mut(rhs)
    }
}

impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}
