//! CPU特性检测模块
//!
//! 运行时检测CPU支持的SIMD指令集。`Lane`的后端在编译期选定，
//! 这里的检测结果用于诊断输出和基准测试报告。

use std::sync::OnceLock;

/// CPU特性标志
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuFeatures {
    // x86/x64特性
    pub sse2: bool,
    pub sse41: bool,
    pub avx: bool,
    pub avx2: bool,
    pub fma: bool,

    // ARM特性
    pub neon: bool,
}

impl CpuFeatures {
    /// 检测当前CPU特性
    fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            Self {
                sse2: is_x86_feature_detected!("sse2"),
                sse41: is_x86_feature_detected!("sse4.1"),
                avx: is_x86_feature_detected!("avx"),
                avx2: is_x86_feature_detected!("avx2"),
                fma: is_x86_feature_detected!("fma"),
                neon: false,
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            // NEON在aarch64上是强制支持的
            Self {
                neon: true,
                ..Self::default()
            }
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            Self::default()
        }
    }
}

/// SIMD后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdBackend {
    /// 标量回退
    Scalar,
    /// x86 SSE
    Sse,
    /// ARM NEON
    Neon,
}

impl SimdBackend {
    /// 当前编译目标使用的后端
    pub fn current() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            Self::Sse
        }

        #[cfg(target_arch = "aarch64")]
        {
            Self::Neon
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            Self::Scalar
        }
    }
}

/// 获取缓存的CPU特性检测结果
pub fn detect_cpu_features() -> CpuFeatures {
    static FEATURES: OnceLock<CpuFeatures> = OnceLock::new();
    *FEATURES.get_or_init(CpuFeatures::detect)
}
