//! x86/x64 SIMD后端
//!
//! 基于SSE指令集的4宽度浮点运算。SSE2在x86_64上是强制支持的，
//! 因此这些封装可以安全调用，无需运行时检测。

use std::arch::x86_64::*;

/// 后端寄存器类型
pub type Repr = __m128;

/// 从数组读取4个浮点数
#[inline]
pub fn load(src: &[f32; 4]) -> Repr {
    // _mm_loadu_ps可处理未对齐内存
    unsafe { _mm_loadu_ps(src.as_ptr()) }
}

/// 将4个浮点数写回数组
#[inline]
pub fn store(dst: &mut [f32; 4], v: Repr) {
    unsafe { _mm_storeu_ps(dst.as_mut_ptr(), v) }
}

/// 按分量设置
#[inline]
pub fn set(x: f32, y: f32, z: f32, w: f32) -> Repr {
    // _mm_set_ps参数顺序为从高位到低位
    unsafe { _mm_set_ps(w, z, y, x) }
}

/// 所有分量设置为同一个值
#[inline]
pub fn set1(v: f32) -> Repr {
    unsafe { _mm_set1_ps(v) }
}

/// 逐元素加法
#[inline]
pub fn add(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { _mm_add_ps(lhs, rhs) }
}

/// 逐元素减法
#[inline]
pub fn sub(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { _mm_sub_ps(lhs, rhs) }
}

/// 逐元素乘法
#[inline]
pub fn mul(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { _mm_mul_ps(lhs, rhs) }
}
