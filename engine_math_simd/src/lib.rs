//! # engine_math_simd
//!
//! 跨平台SIMD基础库，为engine_math提供统一的4宽度浮点寄存器抽象和CPU特性检测。
//!
//! ## 特性
//!
//! - **跨平台支持**: x86_64 (SSE) 和 aarch64 (NEON)，其他平台自动回退到标量实现
//! - **编译期选择**: 后端在编译期根据目标架构选定，三个后端模块签名完全一致
//! - **精确语义**: 所有运算逐元素执行，保持底层指令集的IEEE-754语义，无降精度
//! - **运行时检测**: `cpu_detect`模块报告当前CPU支持的指令集
//!
//! ## 快速开始
//!
//! ```rust
//! use engine_math_simd::Lane;
//!
//! let a = Lane::set(1.0, 2.0, 3.0, 4.0);
//! let b = Lane::splat(2.0);
//!
//! let sum = a + b;
//! let prod = a * b;
//!
//! assert_eq!(sum.to_array(), [3.0, 4.0, 5.0, 6.0]);
//! assert_eq!(prod.to_array(), [2.0, 4.0, 6.0, 8.0]);
//! ```
//!
//! ## 模块
//!
//! - [`lane`]: 统一的4宽度浮点寄存器类型 [`Lane`]
//! - [`cpu_detect`]: CPU特性检测
//! - `x86` / `arm` / `scalar`: 按架构选择的后端实现

pub mod cpu_detect;
pub mod lane;

#[cfg(target_arch = "x86_64")]
pub mod x86;

#[cfg(target_arch = "aarch64")]
pub mod arm;

pub mod scalar;

pub use cpu_detect::{detect_cpu_features, CpuFeatures, SimdBackend};
pub use lane::Lane;
