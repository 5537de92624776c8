//! 向量类型
//!
//! 在聚合结构体之上提供代数运算。算术运算经由SIMD通道执行，
//! 三维以下的运算补零扩展到4宽度通道。

mod vec2;
mod vec3;
mod vec4;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

use crate::kernel::NumericKernel;

/// 向量公共运算接口
///
/// 内积、大小、正规化的统一调用面，供插值等泛型工具使用。
pub trait VectorOps: Copy {
    /// 内积
    fn dot(&self, other: &Self) -> f32;

    /// 正规化
    ///
    /// 大小与零比较为`Greater`时才除以大小，否则原样返回（绝不除零）。
    fn normalize(&self) -> Self;

    /// 大小的平方
    #[inline]
    fn sqr_magnitude(&self) -> f32 {
        self.dot(self)
    }

    /// 大小
    #[inline]
    fn magnitude(&self) -> f32 {
        <f32 as NumericKernel>::sqrt(self.sqr_magnitude(), false)
    }
}
