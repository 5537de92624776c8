//! 统一的SIMD寄存器类型
//!
//! 根据目标架构在编译期选择后端，向上层提供唯一的调用面。

use core::ops::{Add, Mul, Sub};

#[cfg(target_arch = "x86_64")]
use crate::x86 as backend;

#[cfg(target_arch = "aarch64")]
use crate::arm as backend;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
use crate::scalar as backend;

/// 4宽度浮点SIMD寄存器
///
/// 持有一个硬件寄存器（SSE的`__m128`、NEON的`float32x4_t`，
/// 或标量回退的`[f32; 4]`），所有运算逐元素执行。
#[derive(Clone, Copy)]
pub struct Lane(backend::Repr);

impl Lane {
    /// 按分量构造
    #[inline]
    pub fn set(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(backend::set(x, y, z, w))
    }

    /// 所有分量为同一个值
    #[inline]
    pub fn splat(v: f32) -> Self {
        Self(backend::set1(v))
    }

    /// 从数组读取
    #[inline]
    pub fn load(src: &[f32; 4]) -> Self {
        Self(backend::load(src))
    }

    /// 写回数组（恰好写4个浮点数）
    #[inline]
    pub fn store(self, dst: &mut [f32; 4]) {
        backend::store(dst, self.0);
    }

    /// 取出为数组
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        backend::store(&mut out, self.0);
        out
    }
}

impl Default for Lane {
    #[inline]
    fn default() -> Self {
        Self::splat(0.0)
    }
}

impl Add for Lane {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(backend::add(self.0, rhs.0))
    }
}

impl Sub for Lane {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(backend::sub(self.0, rhs.0))
    }
}

impl Mul for Lane {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(backend::mul(self.0, rhs.0))
    }
}

impl core::fmt::Debug for Lane {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Lane").field(&self.to_array()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_set_splat() {
        let v = Lane::set(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);

        let s = Lane::splat(7.0);
        assert_eq!(s.to_array(), [7.0; 4]);
    }

    #[test]
    fn test_lane_load_store() {
        let src = [0.5, -1.5, 2.5, -3.5];
        let v = Lane::load(&src);
        let mut dst = [0.0f32; 4];
        v.store(&mut dst);
        assert_eq!(dst, src);
    }

    #[test]
    fn test_lane_arithmetic() {
        let a = Lane::set(1.0, 2.0, 3.0, 4.0);
        let b = Lane::set(4.0, 3.0, 2.0, 1.0);

        assert_eq!((a + b).to_array(), [5.0; 4]);
        assert_eq!((a - b).to_array(), [-3.0, -1.0, 1.0, 3.0]);
        assert_eq!((a * b).to_array(), [4.0, 6.0, 6.0, 4.0]);
    }
}
