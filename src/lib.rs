//! # Engine Math
//!
//! SIMD-accelerated linear algebra and geometric transforms for a real-time
//! rendering engine.
//!
//! ## Features
//!
//! - **Scalar Kernel**: epsilon-tolerant comparison, Kahan-compensated summation,
//!   Newton / fast-inverse-sqrt square roots, clamp / wrap, Bernstein polynomials
//! - **SIMD Lanes**: x86 SSE and ARM NEON behind one 4-wide lane type
//!   (separated `engine_math_simd` crate)
//! - **Algebraic Types**: vectors, square matrices, complex numbers, quaternions,
//!   rotation scalars and Euler angles with epsilon-aware equality
//! - **Transform Builders**: translation / rotation / scale / shear matrices
//!   parameterized by handedness (行作用・列作用)
//! - **Geometry**: planes with tangent-space bases, parametric rays,
//!   rational Bézier curves
//!
//! ## Conventions
//!
//! - Matrices are stored row-major; `UNIT` is the identity
//! - `HandSide::RHS` builds column-acting transforms (`Mat * Vec`),
//!   `HandSide::LHS` is the transposed row-acting variant (`Vec * Mat`)
//! - No operation panics or divides by (near-)zero: degenerate input degrades
//!   silently to the documented fallback value
//! - Aggregate structs (`Float4`, `Float4x4`, ...) are `bytemuck::Pod` and keep
//!   a byte-for-byte stable layout for constant-buffer upload
//!
//! ### Example
//!
//! ```rust
//! use engine_math::{make_rotate_axis, make_transit3, HandSide, Rotation, Vec3, Vec4};
//!
//! // 先回转、后移动（列作用合成）
//! let model = make_transit3(HandSide::RHS, Vec3::new(0.0, 1.0, 0.0))
//!     * make_rotate_axis(
//!         HandSide::RHS,
//!         Vec3::new(0.0, 0.0, 1.0),
//!         Rotation::from_degree(90.0),
//!     );
//!
//! let p = model * Vec4::new(1.0, 0.0, 0.0, 1.0);
//! assert!((p.y - 2.0).abs() < 1e-5);
//! ```
//!
//! ## Modules
//!
//! - [`kernel`]: scalar numeric kernel (internal building block)
//! - [`structs`]: plain aggregates with stable GPU-payload layout
//! - [`vector`] / [`matrix`]: algebraic vector and matrix types
//! - [`rotation`]: rotation representations
//! - [`convert`]: representation conversions and transform builders
//! - [`geometry`]: planes, rays and Bézier curves

pub mod convert;
pub mod geometry;
pub mod kernel;
pub mod matrix;
pub mod rotation;
pub mod structs;
pub mod vector;

pub use convert::{
    angle, bounce, lerp, make_rotate2, make_rotate_axis, make_rotate_quat, make_scaler2,
    make_scaler3, make_skew2, make_skew3, make_transit2, make_transit3, slerp, HandSide,
    SkewType2, SkewType3,
};
pub use geometry::{BezierCurve, GeometryError, Plane3, Ray, Ray3, WeightedPoint};
pub use kernel::{NumericKernel, Summation};
pub use matrix::{Mat2, Mat3, Mat4};
pub use rotation::{Complex, EulerRot, Quat, Rotation};
pub use structs::{Float2, Float2x2, Float3, Float3x3, Float4, Float4x4, UInt2, UInt3, UInt4};
pub use vector::{Vec2, Vec3, Vec4, VectorOps};
