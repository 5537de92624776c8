//! 欧拉角

use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use super::Rotation;

/// 单精度欧拉角
///
/// 三个回转量的向量空间代数（加减与标量倍）。回转的合成不在此定义，
/// 先变换为四元数或行列后再合成。
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EulerRot {
    /// 俯仰（绕X轴）
    pub x: Rotation,
    /// 偏航（绕Y轴）
    pub y: Rotation,
    /// 翻滚（绕Z轴）
    pub z: Rotation,
}

impl EulerRot {
    /// 按分量构造
    pub fn new(x: Rotation, y: Rotation, z: Rotation) -> Self {
        Self { x, y, z }
    }

    /// 从弧度三元组构造
    pub fn from_radians(x: f32, y: f32, z: f32) -> Self {
        Self::new(
            Rotation::from_radian(x),
            Rotation::from_radian(y),
            Rotation::from_radian(z),
        )
    }

    /// 从度数三元组构造
    pub fn from_degrees(x: f32, y: f32, z: f32) -> Self {
        Self::new(
            Rotation::from_degree(x),
            Rotation::from_degree(y),
            Rotation::from_degree(z),
        )
    }
}

impl Index<usize> for EulerRot {
    type Output = Rotation;

    fn index(&self, idx: usize) -> &Rotation {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("EulerRot index out of range: {idx}"),
        }
    }
}

impl IndexMut<usize> for EulerRot {
    fn index_mut(&mut self, idx: usize) -> &mut Rotation {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("EulerRot index out of range: {idx}"),
        }
    }
}

impl AddAssign for EulerRot {
    fn add_assign(&mut self, rhs: Self) {
        for idx in 0..3 {
            self[idx] += rhs[idx];
        }
    }
}

impl SubAssign for EulerRot {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl MulAssign<f32> for EulerRot {
    fn mul_assign(&mut self, rhs: f32) {
        for idx in 0..3 {
            self[idx] *= rhs;
        }
    }
}

impl DivAssign<f32> for EulerRot {
    fn div_assign(&mut self, rhs: f32) {
        *self *= 1.0 / rhs;
    }
}

impl Add for EulerRot {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut result = self;
        result += rhs;
        result
    }
}

impl Sub for EulerRot {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut result = self;
        result -= rhs;
        result
    }
}

impl Mul<f32> for EulerRot {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        let mut result = self;
        result *= rhs;
        result
    }
}

impl Mul<EulerRot> for f32 {
    type Output = EulerRot;

    fn mul(self, rhs: EulerRot) -> EulerRot {
        rhs * self
    }
}

impl Div<f32> for EulerRot {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        let mut result = self;
        result /= rhs;
        result
    }
}

impl Neg for EulerRot {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}
