//! 固定元数聚合结构体
//!
//! 渲染层常量缓冲区直接按字节上传这些结构体，字段顺序与大小
//! 必须保持字节级稳定。所有类型同时支持按名访问（`x`/`y`/`z`/`w`、
//! `m00`..`m33`）和按下标访问（`as_array` / `Index`），两种视图
//! 观察同一块内存。
//!
//! 聚合结构体不定义相等运算——浮点相等判断属于上层代数类型，
//! 统一经过数值核心的容差比较。

mod float;
mod matrix;
mod uint;

pub use float::{Float2, Float3, Float4};
pub use matrix::{Float2x2, Float3x3, Float4x4};
pub use uint::{UInt2, UInt3, UInt4};
