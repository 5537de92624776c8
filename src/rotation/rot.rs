//! 标量回转量

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::kernel::{NumericKernel, Summation};

/// 单精度回转量
///
/// 内部以归一化单位（角度 / π）存储，读取时换算为弧度或度数。
/// 比较与大小关系经过容差比较，构成全序的标量型。
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Rotation {
    angle: f32,
}

impl Rotation {
    /// 从弧度构造
    pub fn from_radian(arg: f32) -> Self {
        Self { angle: arg / PI }
    }

    /// 从度数构造
    pub fn from_degree(arg: f32) -> Self {
        Self { angle: arg / 180.0 }
    }

    /// 反正弦
    pub fn asin(arg: f32) -> Self {
        Self::from_radian(arg.asin())
    }

    /// 反余弦
    pub fn acos(arg: f32) -> Self {
        Self::from_radian(arg.acos())
    }

    /// 反正切
    pub fn atan(arg: f32) -> Self {
        Self::from_radian(arg.atan())
    }

    /// 反正切（坐标形式，求点`(x, y)`的方位角）
    pub fn atan2(x: f32, y: f32) -> Self {
        Self::from_radian(y.atan2(x))
    }

    /// 以弧度读取
    pub fn radian(&self) -> f32 {
        self.angle * PI
    }

    /// 以度数读取
    pub fn degree(&self) -> f32 {
        self.angle * 180.0
    }

    /// 以弧度设置
    pub fn set_radian(&mut self, arg: f32) -> &mut Self {
        self.angle = arg / PI;
        self
    }

    /// 以度数设置
    pub fn set_degree(&mut self, arg: f32) -> &mut Self {
        self.angle = arg / 180.0;
        self
    }

    /// 正弦值
    pub fn sin(&self) -> f32 {
        self.radian().sin()
    }

    /// 余弦值
    pub fn cos(&self) -> f32 {
        self.radian().cos()
    }

    /// 正切值
    pub fn tan(&self) -> f32 {
        self.radian().tan()
    }

    /// 归约到主值域`(-π, π]`
    pub fn normalized(&self) -> Self {
        let mut rad = self.radian();

        while rad < -PI {
            rad = f32::sum(&[rad, 2.0 * PI], false);
        }
        while rad > PI {
            rad = f32::sum(&[rad, -2.0 * PI], false);
        }

        Self::from_radian(rad)
    }

    /// 整数圈数
    pub fn round(&self) -> i32 {
        let rad = self.radian() / PI;
        (rad * 0.5) as i32
    }
}

impl AddAssign for Rotation {
    fn add_assign(&mut self, rhs: Self) {
        self.angle = f32::sum(&[self.angle, rhs.angle], false);
    }
}

impl SubAssign for Rotation {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl MulAssign<f32> for Rotation {
    fn mul_assign(&mut self, rhs: f32) {
        self.angle *= rhs;
    }
}

impl DivAssign<f32> for Rotation {
    fn div_assign(&mut self, rhs: f32) {
        *self *= 1.0 / rhs;
    }
}

impl Add for Rotation {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut result = self;
        result += rhs;
        result
    }
}

impl Sub for Rotation {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut result = self;
        result -= rhs;
        result
    }
}

impl Mul<f32> for Rotation {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        let mut result = self;
        result *= rhs;
        result
    }
}

impl Mul<Rotation> for f32 {
    type Output = Rotation;

    fn mul(self, rhs: Rotation) -> Rotation {
        rhs * self
    }
}

impl Div<f32> for Rotation {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        let mut result = self;
        result /= rhs;
        result
    }
}

impl Neg for Rotation {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl PartialEq for Rotation {
    fn eq(&self, other: &Self) -> bool {
        f32::compare(self.radian(), other.radian()) == Ordering::Equal
    }
}

impl PartialOrd for Rotation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(f32::compare(self.radian(), other.radian()))
    }
}
