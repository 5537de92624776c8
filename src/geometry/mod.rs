//! 几何基本图形
//!
//! 平面（三点构造、切线空间基底）、光线（原点+方向的参数化直线）
//! 与有理贝塞尔曲线。
//!
//! 构造函数保持静默降级的契约（退化输入产生零基底/零方向而不报错），
//! 需要正确性保证的调用方可以使用`try_`系构造函数获得显式的
//! [`GeometryError`]。

mod bezier;
mod plane;
mod ray;

pub use bezier::{BezierCurve, WeightedPoint};
pub use plane::Plane3;
pub use ray::{Ray, Ray3};

use thiserror::Error;

/// 几何构造错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// 三点共线或重合，无法张成平面
    #[error("plane points are collinear or coincident")]
    CollinearPoints,

    /// 方向向量长度为零
    #[error("ray direction has zero length")]
    ZeroLengthDirection,
}
