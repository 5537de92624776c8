//! 平面回转用复数

use bytemuck::{Pod, Zeroable};
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use engine_math_simd::Lane;
use serde::{Deserialize, Serialize};

use crate::kernel::{NumericKernel, Summation};
use crate::structs::Float2;

/// 单精度复数
///
/// 表示平面内的回转与拡縮。乘法为标准复数积。
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Complex(pub Float2);

unsafe impl Zeroable for Complex {}
unsafe impl Pod for Complex {}

impl Complex {
    /// 零元
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// 单位元
    pub const UNIT: Self = Self::new(1.0, 0.0);

    /// 按分量构造（实部x、虚部y）
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Float2::new(x, y))
    }

    /// 共轭元
    pub fn conjugate(&self) -> Self {
        let mut result = *self;
        result.y *= -1.0;
        result
    }

    /// 正规化
    ///
    /// 大小与零比较为`Greater`时才除以大小，否则原样返回。
    pub fn normalize(&self) -> Self {
        let mut result = *self;
        let length = self.magnitude();
        if f32::compare(length, 0.0) == Ordering::Greater {
            result /= length;
        }
        result
    }

    /// 逆元：共轭 / 大小平方
    ///
    /// 大小平方与零比较不为`Greater`时返回未除的共轭元。
    pub fn inverse(&self) -> Self {
        let mut result = self.conjugate();
        let length = self.sqr_magnitude();
        if f32::compare(length, 0.0) == Ordering::Greater {
            result /= length;
        }
        result
    }

    /// 大小的平方
    pub fn sqr_magnitude(&self) -> f32 {
        (*self * self.conjugate()).x
    }

    /// 大小
    pub fn magnitude(&self) -> f32 {
        <f32 as NumericKernel>::sqrt(self.sqr_magnitude(), false)
    }

    #[inline]
    fn to_lane(self) -> Lane {
        Lane::set(self.x, self.y, 0.0, 0.0)
    }

    #[inline]
    fn from_lane(lane: Lane) -> Self {
        let a = lane.to_array();
        Self::new(a[0], a[1])
    }
}

impl From<Float2> for Complex {
    fn from(arg: Float2) -> Self {
        Self(arg)
    }
}

impl Deref for Complex {
    type Target = Float2;

    #[inline]
    fn deref(&self) -> &Float2 {
        &self.0
    }
}

impl DerefMut for Complex {
    #[inline]
    fn deref_mut(&mut self) -> &mut Float2 {
        &mut self.0
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::from_lane(self.to_lane() + rhs.to_lane());
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl MulAssign<f32> for Complex {
    fn mul_assign(&mut self, rhs: f32) {
        *self = Self::from_lane(self.to_lane() * Lane::splat(rhs));
    }
}

impl DivAssign<f32> for Complex {
    fn div_assign(&mut self, rhs: f32) {
        *self *= 1.0 / rhs;
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut result = self;
        result += rhs;
        result
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut result = self;
        result -= rhs;
        result
    }
}

/// 复数积
impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let temps = [
            Lane::set(self.x * rhs.x, self.x * rhs.y, 0.0, 0.0),
            Lane::set(-(self.y * rhs.y), self.y * rhs.x, 0.0, 0.0),
        ];
        Self::from_lane(Lane::sum(&temps, false))
    }
}

impl Mul<f32> for Complex {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        let mut result = self;
        result *= rhs;
        result
    }
}

impl Mul<Complex> for f32 {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        rhs * self
    }
}

impl Div for Complex {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl Div<f32> for Complex {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        let mut result = self;
        result /= rhs;
        result
    }
}

impl Div<Complex> for f32 {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Complex {
        rhs.inverse() * self
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        (0..2).all(|idx| f32::compare(self[idx], other[idx]) == Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product() {
        // i * i = -1
        let i = Complex::new(0.0, 1.0);
        assert_eq!(i * i, Complex::new(-1.0, 0.0));

        // (1+2i)(3+4i) = -5+10i
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);
        assert_eq!(a * b, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_unit_is_identity() {
        let a = Complex::new(0.5, -1.5);
        assert_eq!(a * Complex::UNIT, a);
        assert_eq!(Complex::UNIT * a, a);
    }

    #[test]
    fn test_inverse() {
        let a = Complex::new(3.0, 4.0);
        assert_eq!(a * a.inverse(), Complex::UNIT);

        // 零元逆元不做除法
        assert_eq!(Complex::ZERO.inverse(), Complex::ZERO.conjugate());
    }

    #[test]
    fn test_magnitude_normalize() {
        let a = Complex::new(3.0, 4.0);
        assert!((a.magnitude() - 5.0).abs() < 1e-5);
        assert!((a.normalize().magnitude() - 1.0).abs() < 1e-5);
        assert_eq!(Complex::ZERO.normalize(), Complex::ZERO);
    }
}
