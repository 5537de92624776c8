//! ARM NEON SIMD后端
//!
//! NEON是ARM的128位SIMD指令集，在aarch64上是强制支持的，
//! 因此这些封装可以安全调用，无需运行时检测。

use std::arch::aarch64::*;

/// 后端寄存器类型
pub type Repr = float32x4_t;

/// 从数组读取4个浮点数
#[inline]
pub fn load(src: &[f32; 4]) -> Repr {
    // vld1q_f32可处理未对齐内存
    unsafe { vld1q_f32(src.as_ptr()) }
}

/// 将4个浮点数写回数组
#[inline]
pub fn store(dst: &mut [f32; 4], v: Repr) {
    unsafe { vst1q_f32(dst.as_mut_ptr(), v) }
}

/// 按分量设置
#[inline]
pub fn set(x: f32, y: f32, z: f32, w: f32) -> Repr {
    let tmp = [x, y, z, w];
    unsafe { vld1q_f32(tmp.as_ptr()) }
}

/// 所有分量设置为同一个值
#[inline]
pub fn set1(v: f32) -> Repr {
    unsafe { vdupq_n_f32(v) }
}

/// 逐元素加法
#[inline]
pub fn add(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { vaddq_f32(lhs, rhs) }
}

/// 逐元素减法
#[inline]
pub fn sub(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { vsubq_f32(lhs, rhs) }
}

/// 逐元素乘法
#[inline]
pub fn mul(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { vmulq_f32(lhs, rhs) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = set(1.0, 2.0, 3.0, 4.0);
        let b = set(5.0, 6.0, 7.0, 8.0);
        let mut out = [0.0f32; 4];

        store(&mut out, add(a, b));
        assert_eq!(out, [6.0, 8.0, 10.0, 12.0]);

        store(&mut out, sub(a, b));
        assert_eq!(out, [-4.0, -4.0, -4.0, -4.0]);

        store(&mut out, mul(a, b));
        assert_eq!(out, [5.0, 12.0, 21.0, 32.0]);
    }
}
