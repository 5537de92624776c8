//! 三维回转用四元数

use bytemuck::{Pod, Zeroable};
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use engine_math_simd::Lane;
use serde::{Deserialize, Serialize};

use crate::kernel::{NumericKernel, Summation};
use crate::structs::Float4;

/// 单精度四元数
///
/// `x`/`y`/`z`为虚部、`w`为实部，乘法为标准哈密顿积。
/// 共轭只反转虚部，逆元为共轭除以大小平方。
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Quat(pub Float4);

unsafe impl Zeroable for Quat {}
unsafe impl Pod for Quat {}

impl Quat {
    /// 零元
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// 单位元
    pub const UNIT: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// 按分量构造
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(Float4::new(x, y, z, w))
    }

    /// 共轭元（只反转虚部）
    pub fn conjugate(&self) -> Self {
        let mut result = -*self;
        result.w *= -1.0;
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
        (*self * self.conjugate()).w
    }

    /// 大小
    pub fn magnitude(&self) -> f32 {
        <f32 as NumericKernel>::sqrt(self.sqr_magnitude(), false)
    }

    /// 内积
    pub fn dot(&self, other: &Self) -> f32 {
        let temps = (self.to_lane() * other.to_lane()).to_array();
        f32::sum(&temps, false)
    }

    #[inline]
    fn to_lane(self) -> Lane {
        Lane::load(self.as_array())
    }

    #[inline]
    fn from_lane(lane: Lane) -> Self {
        let mut result = Self::ZERO;
        lane.store(result.as_array_mut());
        result
    }
}

impl From<Float4> for Quat {
    fn from(arg: Float4) -> Self {
        Self(arg)
    }
}

impl Deref for Quat {
    type Target = Float4;

    #[inline]
    fn deref(&self) -> &Float4 {
        &self.0
    }
}

impl DerefMut for Quat {
    #[inline]
    fn deref_mut(&mut self) -> &mut Float4 {
        &mut self.0
    }
}

impl AddAssign for Quat {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::from_lane(self.to_lane() + rhs.to_lane());
    }
}

impl SubAssign for Quat {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl MulAssign<f32> for Quat {
    fn mul_assign(&mut self, rhs: f32) {
        *self = Self::from_lane(self.to_lane() * Lane::splat(rhs));
    }
}

impl DivAssign<f32> for Quat {
    fn div_assign(&mut self, rhs: f32) {
        *self *= 1.0 / rhs;
    }
}

impl Add for Quat {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut result = self;
        result += rhs;
        result
    }
}

impl Sub for Quat {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut result = self;
        result -= rhs;
        result
    }
}

/// 哈密顿积
///
/// 四组乘积通道经补偿求和合成。
impl Mul for Quat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let temps = [
            Lane::set(
                self.x * rhs.w,
                self.y * rhs.w,
                self.z * rhs.w,
                self.w * rhs.w,
            ),
            Lane::set(
                self.w * rhs.x,
                self.w * rhs.y,
                self.w * rhs.z,
                -(self.x * rhs.x),
            ),
            Lane::set(
                self.y * rhs.z,
                self.z * rhs.x,
                self.x * rhs.y,
                -(self.y * rhs.y),
            ),
            Lane::set(
                -(self.z * rhs.y),
                -(self.x * rhs.z),
                -(self.y * rhs.x),
                -(self.z * rhs.z),
            ),
        ];
        Self::from_lane(Lane::sum(&temps, false))
    }
}

impl Mul<f32> for Quat {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        let mut result = self;
        result *= rhs;
        result
    }
}

impl Mul<Quat> for f32 {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Quat {
        rhs * self
    }
}

impl Div for Quat {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl Div<f32> for Quat {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        let mut result = self;
        result /= rhs;
        result
    }
}

impl Div<Quat> for f32 {
    type Output = Quat;

    fn div(self, rhs: Quat) -> Quat {
        rhs.inverse() * self
    }
}

impl Neg for Quat {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl PartialEq for Quat {
    fn eq(&self, other: &Self) -> bool {
        (0..4).all(|idx| f32::compare(self[idx], other[idx]) == Ordering::Equal)
    }
}
