//! 光线

use core::cmp::Ordering;
use core::ops::{Add, Mul};
use serde::{Deserialize, Serialize};

use super::GeometryError;
use crate::kernel::NumericKernel;
use crate::vector::{Vec3, VectorOps};

/// 三维光线
///
/// 原点加正规化方向。`at(t)`惰性求值参数化直线上的点，
/// 纯函数、无缓存。
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ray3 {
    /// 中心点
    pub position: Vec3,
    /// 方向（构造时正规化）
    pub direction: Vec3,
}

impl Default for Ray3 {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::new(1.0, 0.0, 0.0),
        }
    }
}

impl Ray3 {
    /// 构造（方向被正规化，零方向静默保持为零）
    pub fn new(pos: Vec3, dir: Vec3) -> Self {
        Self {
            position: pos,
            direction: dir.normalize(),
        }
    }

    /// 带校验的构造
    ///
    /// 零长度方向返回[`GeometryError::ZeroLengthDirection`]。
    pub fn try_new(pos: Vec3, dir: Vec3) -> Result<Self, GeometryError> {
        if f32::compare(dir.magnitude(), 0.0) != Ordering::Greater {
            return Err(GeometryError::ZeroLengthDirection);
        }
        Ok(Self::new(pos, dir))
    }

    /// 光线点取得：`position + direction * rate`
    pub fn at(&self, rate: f32) -> Vec3 {
        self.position + self.direction * rate
    }
}

/// 泛型光线
///
/// 中心点、方向与半径，对任意元数的向量类型参数化。
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Ray<T> {
    center: T,
    direction: T,
    radius: f32,
}

impl<T> Ray<T>
where
    T: Copy + Add<Output = T> + Mul<f32, Output = T>,
{
    /// 光线点取得：`center + direction * rate`
    pub fn at(&self, rate: f32) -> T {
        self.center + self.direction * rate
    }
}

impl<T: Copy> Ray<T> {
    /// 中心点设置
    pub fn set_center(&mut self, arg: T) -> &mut Self {
        self.center = arg;
        self
    }

    /// 方向设置
    pub fn set_direction(&mut self, arg: T) -> &mut Self {
        self.direction = arg;
        self
    }

    /// 半径设置
    pub fn set_radius(&mut self, arg: f32) -> &mut Self {
        self.radius = arg;
        self
    }

    /// 中心点取得
    pub fn center(&self) -> &T {
        &self.center
    }

    /// 方向取得
    pub fn direction(&self) -> &T {
        &self.direction
    }

    /// 半径取得
    pub fn radius(&self) -> f32 {
        self.radius
    }
}
