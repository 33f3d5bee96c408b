use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{MathError, Vec3};

/// 2 element vector
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[cfg(feature="approx")]
impl float_cmp::ApproxEq for Vec2 {
    type Margin = float_cmp::F32Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin: Self::Margin = margin.into();
        <f32 as float_cmp::ApproxEq>::approx_eq(self.x, other.x, margin)
            && <f32 as float_cmp::ApproxEq>::approx_eq(self.y, other.y, margin)
    }
}

impl Vec2 {
    /// Number of components
    pub const LEN: usize = 2;

    /// Create vector from values
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero vector
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0., 0.)
    }

    /// Component at `index` (0 is x, 1 is y)
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(MathError::ComponentOutOfRange { index, len: Self::LEN }),
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut f32, MathError> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            _ => Err(MathError::ComponentOutOfRange { index, len: Self::LEN }),
        }
    }

    /// Overwrite the component at `index`
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Vector dot product
    #[inline]
    pub fn dot(&self, other: &Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Magnitude squared
    #[inline]
    pub fn mag_sq(&self) -> f32 {
        self.dot(self)
    }

    /// Vector magnitude
    #[inline]
    pub fn mag(&self) -> f32 {
        f32::hypot(self.x, self.y)
    }

    /// Angle from the positive x axis, in radians
    #[inline]
    pub fn angle(&self) -> f32 {
        f32::atan2(self.y, self.x)
    }

    /// Z component of the cross product of `self` and `other` embedded in the xy plane
    #[inline]
    pub fn cross(&self, other: &Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// This vector, scaled to unit length
    pub fn normalized(&self) -> Result<Vec2, MathError> {
        let mag = self.mag();
        if mag == 0. {
            return Err(MathError::zero_magnitude());
        }
        Ok(self / mag)
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Vec2) -> f32 {
        (other - self).mag()
    }

    /// Displacement from `self` to `to` (not normalized)
    pub fn direction_to(&self, to: &Vec2) -> Vec2 {
        to - self
    }

    /// Cosine of the angle between `self` and `other`
    pub fn cosine_between(&self, other: &Vec2) -> f32 {
        self.dot(other) / (self.mag() * other.mag())
    }

    /// Projection of `self` onto `onto`
    pub fn project_onto(&self, onto: &Vec2) -> Vec2 {
        onto * (self.dot(onto) / onto.mag_sq())
    }

    /// Component of `self` perpendicular to `from`
    pub fn reject_from(&self, from: &Vec2) -> Vec2 {
        self - &self.project_onto(from)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl TryFrom<&[f32]> for Vec2 {
    type Error = MathError;

    fn try_from(value: &[f32]) -> Result<Self, Self::Error> {
        match value {
            &[x, y] => Ok(Self::new(x, y)),
            _ => Err(MathError::InvalidLength { actual: value.len(), expected: Self::LEN }),
        }
    }
}

/// Drops the z component
impl From<Vec3> for Vec2 {
    fn from(value: Vec3) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 index out of range: {index}"),
        }
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<&Vec2> for &Vec2 {
    type Output = Vec2;

    fn add(self, rhs: &Vec2) -> Self::Output {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<&Vec2> for &Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: &Vec2) -> Self::Output {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(mut self, rhs: f32) -> Self::Output {
        self *= rhs;
        self
    }
}

impl Mul<f32> for &Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Self::Output {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Div<f32> for &Vec2 {
    type Output = Vec2;
    fn div(self, rhs: f32) -> Self::Output {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use crate::{MathError, Vec2, Vec3};

    #[test]
    fn test_add() {
        let u = Vec2::new(1., 2.);
        let v = Vec2::new(-1., 5.);
        let w = u + v;
        assert_eq!(w.x, 0.);
        assert_eq!(w.y, 7.);
        assert_eq!(&u + &v, w);
    }

    #[test]
    fn indexing() {
        let mut v = Vec2::new(1., 2.);
        assert_eq!(v.get(0), Ok(1.));
        assert_eq!(v[1], 2.);

        v.set(0, 5.).unwrap();
        v[1] = 6.;
        assert_eq!(v, Vec2::new(5., 6.));

        assert_eq!(v.get(2), Err(MathError::ComponentOutOfRange { index: 2, len: 2 }));
        assert!(v.set(7, 0.).is_err());
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let v = Vec2::zero();
        let _ = v[2];
    }

    #[test]
    fn from_slice() {
        let v = Vec2::try_from(&[3f32, 4.][..]).unwrap();
        assert_eq!(v, Vec2::from([3., 4.]));

        let err = Vec2::try_from(&[1f32, 2., 3.][..]).unwrap_err();
        assert_eq!(err, MathError::InvalidLength { actual: 3, expected: 2 });
    }

    #[test]
    fn drop_z() {
        let v = Vec2::from(Vec3::new(1., 2., 3.));
        assert_eq!(v, Vec2::new(1., 2.));
    }

    #[test]
    fn magnitude() {
        let v = Vec2::new(3., 4.);
        assert_eq!(v.mag(), 5.);
        assert_eq!(v.mag_sq(), 25.);
        assert_eq!(v.distance(&Vec2::zero()), 5.);
    }

    #[test]
    #[cfg(feature="approx")]
    fn normalize() {
        let n = Vec2::new(3., 4.).normalized().unwrap();
        assert_approx_eq!(Vec2, n, Vec2::new(0.6, 0.8), epsilon = 1e-6);
        assert_eq!(Vec2::zero().normalized(), Err(MathError::ZeroMagnitude));
    }

    #[test]
    fn cross_is_signed_area() {
        let x = Vec2::new(1., 0.);
        let y = Vec2::new(0., 1.);
        assert_eq!(x.cross(&y), 1.);
        assert_eq!(y.cross(&x), -1.);
        assert_eq!(x.cross(&x), 0.);
    }

    #[test]
    fn projection() {
        let a = Vec2::new(2., 3.);
        let b = Vec2::new(4., 0.);
        assert_eq!(a.project_onto(&b), Vec2::new(2., 0.));
        assert_eq!(a.reject_from(&b), Vec2::new(0., 3.));
        assert_eq!(a.direction_to(&b), Vec2::new(2., -3.));
    }

    #[test]
    fn angle() {
        assert_approx_eq!(f32, Vec2::new(0., 2.).angle(), std::f32::consts::FRAC_PI_2);
        assert_approx_eq!(f32, Vec2::new(1., 1.).cosine_between(&Vec2::new(1., 0.)), std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-6);
    }

    #[test]
    fn compound_assignment() {
        let mut v = Vec2::new(1., 2.);
        v += Vec2::new(1., 1.);
        v *= 2.;
        v -= Vec2::new(1., 0.);
        v /= 2.;
        assert_eq!(v, Vec2::new(1.5, 3.));
        assert_eq!(-v, Vec2::new(-1.5, -3.));
        assert_eq!(2. * v, v * 2.);
    }
}
