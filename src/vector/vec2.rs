//! 二维向量

use bytemuck::{Pod, Zeroable};
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use engine_math_simd::Lane;
use serde::{Deserialize, Serialize};

use super::VectorOps;
use crate::kernel::{NumericKernel, Summation};
use crate::structs::Float2;

/// 单精度二维向量
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Vec2(pub Float2);

unsafe impl Zeroable for Vec2 {}
unsafe impl Pod for Vec2 {}

impl Vec2 {
    /// 零向量
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// 按分量构造
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Float2::new(x, y))
    }

    /// 垂直算子（二维外积）：`(x, y) -> (-y, x)`
    pub fn cross(&self) -> Self {
        Self::new(-self.y, self.x)
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

impl From<Float2> for Vec2 {
    fn from(arg: Float2) -> Self {
        Self(arg)
    }
}

impl Deref for Vec2 {
    type Target = Float2;

    #[inline]
    fn deref(&self) -> &Float2 {
        &self.0
    }
}

impl DerefMut for Vec2 {
    #[inline]
    fn deref_mut(&mut self) -> &mut Float2 {
        &mut self.0
    }
}

impl VectorOps for Vec2 {
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

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::from_lane(self.to_lane() + rhs.to_lane());
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = Self::from_lane(self.to_lane() * Lane::splat(rhs));
    }
}

impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        *self *= 1.0 / rhs;
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut result = self;
        result += rhs;
        result
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut result = self;
        result -= rhs;
        result
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        let mut result = self;
        result *= rhs;
        result
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        let mut result = self;
        result /= rhs;
        result
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        (0..2).all(|idx| f32::compare(self[idx], other[idx]) == Ordering::Equal)
    }
}
