use std::{
    fmt::Display,
    ops::{Add, AddAssign, BitXor, Div, DivAssign, Mul, MulAssign, Neg, Not, Sub, SubAssign},
};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{GeometryError, Result};

use super::FloatNum;

/// 2d vector, also used as position
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub(crate) x: FloatNum,
    pub(crate) y: FloatNum,
}

impl Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ x: {}, y: {} }}", self.x, self.y)
    }
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0., 0.);

    #[inline]
    pub const fn new(x: FloatNum, y: FloatNum) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> FloatNum {
        self.x
    }

    #[inline]
    pub fn y(&self) -> FloatNum {
        self.y
    }

    #[inline]
    pub fn abs(&self) -> FloatNum {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn abs_sqr(&self) -> FloatNum {
        self.x * self.x + self.y * self.y
    }

    pub fn normalize(&self) -> Result<Vector> {
        let size = self.abs();
        if size == 0. || !size.is_finite() {
            return Err(GeometryError::DegenerateInput(format!(
                "can't normalize vector {self}"
            )));
        }
        Ok(*self * size.recip())
    }

    #[inline]
    pub fn distance(&self, other: &Vector) -> FloatNum {
        (*other - *self).abs()
    }

    /// counter-clockwise perpendicular, `!v` is the clockwise one
    #[inline]
    pub fn perp(&self) -> Vector {
        Vector::new(-self.y, self.x)
    }

    /// counter-clockwise rotation by `rad`
    #[inline]
    pub fn rotate(&self, rad: FloatNum) -> Vector {
        let (s, c) = rad.sin_cos();
        Vector::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// component-wise equality without tolerance
    #[inline]
    pub fn exact_eq(&self, other: &Vector) -> bool {
        self.x == other.x && self.y == other.y
    }

    #[inline]
    pub fn middle(&self, other: &Vector) -> Vector {
        (*self + *other) * 0.5
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < FloatNum::EPSILON && (self.y - other.y).abs() < FloatNum::EPSILON
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = FloatNum;

    fn default_epsilon() -> FloatNum {
        FloatNum::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: FloatNum) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> FloatNum {
        FloatNum::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: FloatNum, max_relative: FloatNum) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl From<(FloatNum, FloatNum)> for Vector {
    fn from((x, y): (FloatNum, FloatNum)) -> Self {
        Self { x, y }
    }
}

impl From<[FloatNum; 2]> for Vector {
    fn from([x, y]: [FloatNum; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vector> for (FloatNum, FloatNum) {
    fn from(value: Vector) -> Self {
        (value.x, value.y)
    }
}

impl Add for Vector {
    type Output = Self;
    fn add(self, rhs: Vector) -> Self::Output {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<&Vector> for Vector {
    type Output = Self;
    fn add(self, rhs: &Vector) -> Self::Output {
        self + *rhs
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl AddAssign<&Vector> for Vector {
    fn add_assign(&mut self, rhs: &Vector) {
        *self += *rhs;
    }
}

impl Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Vector) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<&Vector> for Vector {
    type Output = Self;
    fn sub(self, rhs: &Vector) -> Self::Output {
        self - *rhs
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl SubAssign<&Vector> for Vector {
    fn sub_assign(&mut self, rhs: &Vector) {
        *self -= *rhs;
    }
}

impl Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Vector::new(-self.x, -self.y)
    }
}

// dot product
impl Mul for Vector {
    type Output = FloatNum;
    fn mul(self, rhs: Vector) -> Self::Output {
        self.x * rhs.x + self.y * rhs.y
    }
}

impl Mul<FloatNum> for Vector {
    type Output = Vector;
    fn mul(self, rhs: FloatNum) -> Self::Output {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<FloatNum> for Vector {
    fn mul_assign(&mut self, rhs: FloatNum) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<FloatNum> for Vector {
    type Output = Vector;
    fn div(self, rhs: FloatNum) -> Self::Output {
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

impl DivAssign<FloatNum> for Vector {
    fn div_assign(&mut self, rhs: FloatNum) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

// clockwise perpendicular, the outward normal of a counter-clockwise edge
impl Not for Vector {
    type Output = Self;
    fn not(self) -> Self::Output {
        Vector::new(self.y, -self.x)
    }
}

// z component of the 3d cross product
impl BitXor for Vector {
    type Output = FloatNum;
    fn bitxor(self, rhs: Vector) -> Self::Output {
        self.x * rhs.y - self.y * rhs.x
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_dot_and_cross() {
        let a = Vector::new(1., 2.);
        let b = Vector::new(3., 4.);
        assert_eq!(a * b, 11.);
        assert_eq!(a ^ b, -2.);
        assert_eq!(b ^ a, 2.);
    }

    #[test]
    fn test_perpendicular() {
        let v = Vector::new(1., 0.);
        assert_eq!(v.perp(), Vector::new(0., 1.));
        assert_eq!(!v, Vector::new(0., -1.));
        assert_eq!(v.perp() * v, 0.);
    }

    #[test]
    fn test_normalize() {
        let v = Vector::new(3., 4.).normalize().unwrap();
        assert_relative_eq!(v, Vector::new(0.6, 0.8));
        assert_relative_eq!(v.abs(), 1.);
    }

    #[test]
    fn test_normalize_zero_vector_is_degenerate() {
        let err = Vector::ZERO.normalize().unwrap_err();
        assert!(matches!(err, GeometryError::DegenerateInput(_)));
    }

    #[test]
    fn test_rotate_counter_clockwise() {
        let v = Vector::new(1., 0.).rotate(std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(v, Vector::new(0., 1.), epsilon = 1e-12);
    }

    #[test]
    fn test_eq_uses_tolerance() {
        let a = Vector::new(0.1 + 0.2, 1.);
        let b = Vector::new(0.3, 1.);
        assert_eq!(a, b);
        assert!(!a.exact_eq(&b));
    }
}
