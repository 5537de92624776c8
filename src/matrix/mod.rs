//! 正方行列类型
//!
//! 行主序存储，支持行/列抽取与初等行列变换、转置、余因子行列、
//! 行列式与逆行列。行列×向量同时提供行作用（`Vec * Mat`）和
//! 列作用（`Mat * Vec`）两个方向，左右手系惯例由此贯穿所有
//! 变换构造函数。

mod mat2;
mod mat3;
mod mat4;

pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat4::Mat4;
