//! 正方行列聚合结构体
//!
//! 行主序存储：`mRC`为第R行第C列的分量，平铺下标为`R * N + C`。

use bytemuck::{Pod, Zeroable};
use core::ops::{Index, IndexMut};
use serde::{Deserialize, Serialize};

/// 二次正方行列结构体
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Float2x2 {
    pub m00: f32,
    pub m01: f32,
    pub m10: f32,
    pub m11: f32,
}

/// 三次正方行列结构体
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Float3x3 {
    pub m00: f32,
    pub m01: f32,
    pub m02: f32,
    pub m10: f32,
    pub m11: f32,
    pub m12: f32,
    pub m20: f32,
    pub m21: f32,
    pub m22: f32,
}

/// 四次正方行列结构体
///
/// 16字节对齐以满足SIMD按行读写要求。
#[repr(C, align(16))]
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Float4x4 {
    pub m00: f32,
    pub m01: f32,
    pub m02: f32,
    pub m03: f32,
    pub m10: f32,
    pub m11: f32,
    pub m12: f32,
    pub m13: f32,
    pub m20: f32,
    pub m21: f32,
    pub m22: f32,
    pub m23: f32,
    pub m30: f32,
    pub m31: f32,
    pub m32: f32,
    pub m33: f32,
}

// derive(Pod)不接受repr(align)，这里尺寸恰为64字节且无填充，手动实现是安全的
unsafe impl Zeroable for Float4x4 {}
unsafe impl Pod for Float4x4 {}

impl Float2x2 {
    /// 平铺下标视图
    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    /// 可变平铺下标视图
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 4] {
        bytemuck::cast_mut(self)
    }

    /// 行×列二维视图
    #[inline]
    pub fn as_rows(&self) -> &[[f32; 2]; 2] {
        bytemuck::cast_ref(self)
    }
}

impl Float3x3 {
    /// 平铺下标视图
    #[inline]
    pub fn as_array(&self) -> &[f32; 9] {
        bytemuck::cast_ref(self)
    }

    /// 可变平铺下标视图
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 9] {
        bytemuck::cast_mut(self)
    }

    /// 行×列二维视图
    #[inline]
    pub fn as_rows(&self) -> &[[f32; 3]; 3] {
        bytemuck::cast_ref(self)
    }
}

impl Float4x4 {
    /// 平铺下标视图
    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    /// 可变平铺下标视图
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 16] {
        bytemuck::cast_mut(self)
    }

    /// 行×列二维视图
    #[inline]
    pub fn as_rows(&self) -> &[[f32; 4]; 4] {
        bytemuck::cast_ref(self)
    }
}

impl Index<usize> for Float2x2 {
    type Output = f32;

    #[inline]
    fn index(&self, idx: usize) -> &f32 {
        &self.as_array()[idx]
    }
}

impl IndexMut<usize> for Float2x2 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut f32 {
        &mut self.as_array_mut()[idx]
    }
}

impl Index<usize> for Float3x3 {
    type Output = f32;

    #[inline]
    fn index(&self, idx: usize) -> &f32 {
        &self.as_array()[idx]
    }
}

impl IndexMut<usize> for Float3x3 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut f32 {
        &mut self.as_array_mut()[idx]
    }
}

impl Index<usize> for Float4x4 {
    type Output = f32;

    #[inline]
    fn index(&self, idx: usize) -> &f32 {
        &self.as_array()[idx]
    }
}

impl IndexMut<usize> for Float4x4 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut f32 {
        &mut self.as_array_mut()[idx]
    }
}
