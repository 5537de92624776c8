//! 四维向量

use bytemuck::{Pod, Zeroable};
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use engine_math_simd::Lane;
use serde::{Deserialize, Serialize};

use super::VectorOps;
use crate::kernel::{NumericKernel, Summation};
use crate::structs::Float4;

/// 单精度四维向量
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Vec4(pub Float4);

unsafe impl Zeroable for Vec4 {}
unsafe impl Pod for Vec4 {}

impl Vec4 {
    /// 零向量
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// 按分量构造
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(Float4::new(x, y, z, w))
    }

    /// 广义外积（三参数）
    ///
    /// 求与三个输入都正交的唯一四维向量，按余因子展开逐项合成，
    /// 六组乘积通道经补偿求和。
    pub fn cross(vt1: &Self, vt2: &Self, vt3: &Self) -> Self {
        let temps = [
            Lane::set(
                vt1.z * vt2.w * vt3.y,
                vt1.z * vt2.x * vt3.w,
                vt1.y * vt2.w * vt3.x,
                vt1.z * vt2.y * vt3.x,
            ),
            Lane::set(
                vt1.y * vt2.z * vt3.w,
                vt1.x * vt2.w * vt3.z,
                vt1.x * vt2.y * vt3.w,
                vt1.y * vt2.x * vt3.z,
            ),
            Lane::set(
                vt1.w * vt2.y * vt3.z,
                vt1.w * vt2.z * vt3.x,
                vt1.w * vt2.x * vt3.y,
                vt1.x * vt2.z * vt3.y,
            ),
            Lane::set(
                -(vt1.z * vt2.y * vt3.w),
                -(vt1.z * vt2.w * vt3.x),
                -(vt1.y * vt2.x * vt3.w),
                -(vt1.z * vt2.x * vt3.y),
            ),
            Lane::set(
                -(vt1.y * vt2.w * vt3.z),
                -(vt1.x * vt2.z * vt3.w),
                -(vt1.x * vt2.w * vt3.y),
                -(vt1.y * vt2.z * vt3.x),
            ),
            Lane::set(
                -(vt1.w * vt2.z * vt3.y),
                -(vt1.w * vt2.x * vt3.z),
                -(vt1.w * vt2.y * vt3.x),
                -(vt1.x * vt2.y * vt3.z),
            ),
        ];
        Self::from_lane(Lane::sum(&temps, false))
    }

    #[inline]
    pub(crate) fn to_lane(self) -> Lane {
        Lane::load(self.as_array())
    }

    #[inline]
    pub(crate) fn from_lane(lane: Lane) -> Self {
        let mut result = Self::ZERO;
        lane.store(result.as_array_mut());
        result
    }
}

impl From<Float4> for Vec4 {
    fn from(arg: Float4) -> Self {
        Self(arg)
    }
}

impl Deref for Vec4 {
    type Target = Float4;

    #[inline]
    fn deref(&self) -> &Float4 {
        &self.0
    }
}

impl DerefMut for Vec4 {
    #[inline]
    fn deref_mut(&mut self) -> &mut Float4 {
        &mut self.0
    }
}

impl VectorOps for Vec4 {
    fn dot(&self, other: &Self) -> f32 {
        // 通道逐元素乘积后补偿求和
        let temps = (self.to_lane() * other.to_lane()).to_array();
        f32::sum(&temps, false)
    }

    fn normalize(&self) -> Self {
        let length = self.magnitude();
        if f32::compare(length, 0.0) == Ordering::Greater {
            *self / length
        } else {
            *self
        }
    }
}

impl AddAssign for Vec4 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::from_lane(self.to_lane() + rhs.to_lane());
    }
}

impl SubAssign for Vec4 {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl MulAssign<f32> for Vec4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = Self::from_lane(self.to_lane() * Lane::splat(rhs));
    }
}

impl DivAssign<f32> for Vec4 {
    fn div_assign(&mut self, rhs: f32) {
        *self *= 1.0 / rhs;
    }
}

impl Add for Vec4 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut result = self;
        result += rhs;
        result
    }
}

impl Sub for Vec4 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut result = self;
        result -= rhs;
        result
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        let mut result = self;
        result *= rhs;
        result
    }
}

impl Mul<Vec4> for f32 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Vec4 {
        rhs * self
    }
}

impl Div<f32> for Vec4 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        let mut result = self;
        result /= rhs;
        result
    }
}

impl Neg for Vec4 {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl PartialEq for Vec4 {
    fn eq(&self, other: &Self) -> bool {
        (0..4).all(|idx| f32::compare(self[idx], other[idx]) == Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);

        assert_eq!(a + b, Vec4::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(b - a, Vec4::new(4.0, 4.0, 4.0, 4.0));
        assert_eq!(a * 2.0, Vec4::new(2.0, 4.0, 6.0, 8.0));
    }

    #[test]
    fn test_dot() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert!((a.dot(&b) - 70.0).abs() < 1e-5);
    }

    #[test]
    fn test_generalized_cross() {
        let e1 = Vec4::new(1.0, 0.0, 0.0, 0.0);
        let e2 = Vec4::new(0.0, 1.0, 0.0, 0.0);
        let e3 = Vec4::new(0.0, 0.0, 1.0, 0.0);

        let c = Vec4::cross(&e1, &e2, &e3);
        // 与三个输入都正交
        assert!(c.dot(&e1).abs() < 1e-5);
        assert!(c.dot(&e2).abs() < 1e-5);
        assert!(c.dot(&e3).abs() < 1e-5);
        assert!((c.magnitude() - 1.0).abs() < 1e-5);

        // 一般输入下仍正交
        let u = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let v = Vec4::new(-1.0, 0.5, 2.0, 0.0);
        let w = Vec4::new(0.0, 1.0, -1.0, 3.0);
        let c = Vec4::cross(&u, &v, &w);
        assert!(c.dot(&u).abs() < 1e-3);
        assert!(c.dot(&v).abs() < 1e-3);
        assert!(c.dot(&w).abs() < 1e-3);
    }

    #[test]
    fn test_normalize() {
        let v = Vec4::new(0.0, 3.0, 0.0, 4.0);
        assert!((v.normalize().magnitude() - 1.0).abs() < 1e-5);
        assert_eq!(Vec4::ZERO.normalize(), Vec4::ZERO);
    }
}
