//! 回转表现类型
//!
//! 标量回转量（内部以角度/π的归一化单位存储）、欧拉角、
//! 平面回转用复数与三维回转用四元数。各表现之间的双向变换
//! 在[`crate::convert`]中实现。

mod complex;
mod euler;
mod quat;
mod rot;

pub use complex::Complex;
pub use euler::EulerRot;
pub use quat::Quat;
pub use rot::Rotation;
