//! 三维向量

use bytemuck::{Pod, Zeroable};
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use engine_math_simd::Lane;
use serde::{Deserialize, Serialize};

use super::VectorOps;
use crate::kernel::{NumericKernel, Summation};
use crate::structs::Float3;

/// 单精度三维向量
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Vec3(pub Float3);

unsafe impl Zeroable for Vec3 {}
unsafe impl Pod for Vec3 {}

impl Vec3 {
    /// 零向量
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// 按分量构造
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Float3::new(x, y, z))
    }

    /// 外积（右手系）
    ///
    /// 两组洗牌乘积通道经补偿求和合成。
    pub fn cross(&self, other: &Self) -> Self {
        let temps = [
            Lane::set(
                self.y * other.z,
                self.z * other.x,
                self.x * other.y,
                0.0,
            ),
            Lane::set(
                -(self.z * other.y),
                -(self.x * other.z),
                -(self.y * other.x),
                0.0,
            ),
        ];
        Self::from_lane(Lane::sum(&temps, false))
    }

    #[inline]
    fn to_lane(self) -> Lane {
        Lane::set(self.x, self.y, self.z, 0.0)
    }

    #[inline]
    fn from_lane(lane: Lane) -> Self {
        let a = lane.to_array();
        Self::new(a[0], a[1], a[2])
    }
}

impl From<Float3> for Vec3 {
    fn from(arg: Float3) -> Self {
        Self(arg)
    }
}

impl Deref for Vec3 {
    type Target = Float3;

    #[inline]
    fn deref(&self) -> &Float3 {
        &self.0
    }
}

impl DerefMut for Vec3 {
    #[inline]
    fn deref_mut(&mut self) -> &mut Float3 {
        &mut self.0
    }
}

impl VectorOps for Vec3 {
    fn dot(&self, other: &Self) -> f32 {
        // 通道逐元素乘积后补偿求和，未用通道为零
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

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::from_lane(self.to_lane() + rhs.to_lane());
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = Self::from_lane(self.to_lane() * Lane::splat(rhs));
    }
}

impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        *self *= 1.0 / rhs;
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut result = self;
        result += rhs;
        result
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut result = self;
        result -= rhs;
        result
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        let mut result = self;
        result *= rhs;
        result
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        let mut result = self;
        result /= rhs;
        result
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl PartialEq for Vec3 {
    fn eq(&self, other: &Self) -> bool {
        (0..3).all(|idx| f32::compare(self[idx], other[idx]) == Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Vec3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert!((a.dot(&b) - 32.0).abs() < 1e-5);
    }

    #[test]
    fn test_cross_orthogonal() {
        let u = Vec3::new(1.0, 2.0, 3.0);
        let v = Vec3::new(-2.0, 0.5, 4.0);
        let c = u.cross(&v);

        // 外积与两个输入都正交
        assert!(c.dot(&u).abs() < 1e-4);
        assert!(c.dot(&v).abs() < 1e-4);

        // 基向量：x × y = z
        let z = Vec3::new(1.0, 0.0, 0.0).cross(&Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(z, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_magnitude_normalize() {
        let v = Vec3::new(2.0, 3.0, 6.0);
        assert!((v.magnitude() - 7.0).abs() < 1e-5);
        assert!((v.normalize().magnitude() - 1.0).abs() < 1e-5);
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    }
}
