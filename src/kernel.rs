//! 标量数值核心
//!
//! 提供带容差的比较、两种求和策略（朴素累加 / Kahan补偿求和）、
//! 两种平方根策略（牛顿迭代 / 快速逆平方根）以及夹取、环绕、
//! 伯恩斯坦多项式等基础数值运算。
//!
//! 所有浮点相等判断都必须经过[`NumericKernel::compare`]，
//! 本库其他模块不允许对浮点数使用原生`==`。

use core::cmp::Ordering;

use engine_math_simd::Lane;

/// 求和接口
///
/// 标量类型与SIMD通道类型共用的总和运算。`is_speedy`为真时使用
/// 朴素左折叠累加（更快、精度低），否则使用Kahan补偿求和
/// （默认，误差上界与元素个数无关）。空序列返回加法单位元。
pub trait Summation: Copy {
    /// 总和
    fn sum(values: &[Self], is_speedy: bool) -> Self;
}

/// 标量数值核心接口
///
/// 按具体标量类型（f32 / f64）各自实现，比较容差使用该类型的机器精度。
pub trait NumericKernel: Summation {
    /// 容差比较
    ///
    /// 当`|lhs - rhs| < ε · max(|lhs|, |rhs|, 1)`时返回`Equal`，
    /// 否则按普通大小关系返回`Less` / `Greater`。
    fn compare(lhs: Self, rhs: Self) -> Ordering;

    /// 平方根
    ///
    /// 负输入软失败返回0。默认路径为牛顿迭代，迭代到与上一次结果
    /// `compare`相等为止；`is_speedy`路径为快速逆平方根位技巧加
    /// 3步牛顿修正。两条路径在最后几个ULP上可能不一致。
    fn sqrt(arg: Self, is_speedy: bool) -> Self;

    /// 平均值（空序列返回0）
    fn average(values: &[Self], is_speedy: bool) -> Self;

    /// 方差（空序列返回0）
    fn variance(values: &[Self], is_speedy: bool) -> Self;

    /// 夹取到`[min, max]`，`min > max`时内部交换
    fn clamp(value: Self, min: Self, max: Self) -> Self;

    /// 环绕到`[min, max]`，`min > max`时内部交换
    fn wrap(value: Self, min: Self, max: Self) -> Self;

    /// 伯恩斯坦基多项式
    ///
    /// `t`先夹取到`[0, 1]`。`k > n`时返回1.0。
    fn bern(n: u32, k: u32, t: Self) -> Self;
}

impl Summation for f32 {
    fn sum(values: &[Self], is_speedy: bool) -> Self {
        let mut result = 0.0f32;

        if is_speedy {
            // 朴素累加
            for &v in values {
                result += v;
            }
        } else {
            // Kahan补偿求和
            let mut c = 0.0f32;
            for &v in values {
                let y = v - c;
                let t = result + y;
                c = (t - result) - y;
                result = t;
            }
        }

        result
    }
}

impl NumericKernel for f32 {
    fn compare(lhs: Self, rhs: Self) -> Ordering {
        if (lhs - rhs).abs() < f32::EPSILON * lhs.abs().max(rhs.abs()).max(1.0) {
            Ordering::Equal
        } else if lhs < rhs {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    fn sqrt(arg: Self, is_speedy: bool) -> Self {
        if arg < 0.0 {
            return 0.0;
        }

        if is_speedy {
            // 快速逆平方根，魔数 0x5F3759DF
            let half = 0.5 * arg;
            let bits = 0x5F37_59DFi32 - ((arg.to_bits() as i32) >> 1);
            let mut result = f32::from_bits(bits as u32);

            result *= 1.5 - half * result * result;
            result *= 1.5 - half * result * result;
            result *= 1.5 - half * result * result;
            result * arg
        } else {
            // 牛顿迭代，中点作为初值
            let mut temp = (arg + 1.0) * 0.5;
            loop {
                let result = (temp + arg / temp) * 0.5;
                if Self::compare(result, temp) == Ordering::Equal {
                    return result;
                }
                temp = result;
            }
        }
    }

    fn average(values: &[Self], is_speedy: bool) -> Self {
        if values.is_empty() {
            return 0.0;
        }
        Self::sum(values, is_speedy) / values.len() as f32
    }

    fn variance(values: &[Self], is_speedy: bool) -> Self {
        if values.is_empty() {
            return 0.0;
        }

        let average = Self::average(values, is_speedy);
        let mut squares = Vec::with_capacity(values.len());
        for &v in values {
            let dev = Self::sum(&[v, -average], false);
            squares.push(dev * dev);
        }
        Self::sum(&squares, is_speedy) / values.len() as f32
    }

    fn clamp(value: Self, min: Self, max: Self) -> Self {
        let (mn, mx) = if min > max { (max, min) } else { (min, max) };

        let mut result = value;
        if Self::compare(result, mn) == Ordering::Less {
            result = mn;
        }
        if Self::compare(result, mx) == Ordering::Greater {
            result = mx;
        }
        result
    }

    fn wrap(value: Self, min: Self, max: Self) -> Self {
        let (mn, mx) = if min > max { (max, min) } else { (min, max) };

        let mut result = value;
        let length = mx - mn;
        // 零长度区间无法环绕，原样返回
        if Self::compare(length, 0.0) != Ordering::Greater {
            return result;
        }
        while Self::compare(result, mn) == Ordering::Less {
            result = Self::sum(&[length, result], false);
        }
        while Self::compare(result, mx) == Ordering::Greater {
            result = Self::sum(&[-length, result], false);
        }
        result
    }

    fn bern(n: u32, k: u32, t: Self) -> Self {
        let mut result = 1.0f32;
        if k <= n {
            // 组合数，逐步乘除保持整数精确
            let mut comb = 1u64;
            for i in 1..=k as u64 {
                comb = comb * (n as u64 + 1 - i) / i;
            }
            let rate = Self::clamp(t, 0.0, 1.0);
            result = comb as f32 * rate.powi(k as i32) * (1.0 - rate).powi((n - k) as i32);
        }
        result
    }
}

impl Summation for f64 {
    fn sum(values: &[Self], is_speedy: bool) -> Self {
        let mut result = 0.0f64;

        if is_speedy {
            // 朴素累加
            for &v in values {
                result += v;
            }
        } else {
            // Kahan补偿求和
            let mut c = 0.0f64;
            for &v in values {
                let y = v - c;
                let t = result + y;
                c = (t - result) - y;
                result = t;
            }
        }

        result
    }
}

impl NumericKernel for f64 {
    fn compare(lhs: Self, rhs: Self) -> Ordering {
        if (lhs - rhs).abs() < f64::EPSILON * lhs.abs().max(rhs.abs()).max(1.0) {
            Ordering::Equal
        } else if lhs < rhs {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    fn sqrt(arg: Self, is_speedy: bool) -> Self {
        if arg < 0.0 {
            return 0.0;
        }

        if is_speedy {
            // 快速逆平方根的双精度魔数
            let half = 0.5 * arg;
            let bits = 0x5FE6_EB50_C7B5_37AAi64 - ((arg.to_bits() as i64) >> 1);
            let mut result = f64::from_bits(bits as u64);

            result *= 1.5 - half * result * result;
            result *= 1.5 - half * result * result;
            result *= 1.5 - half * result * result;
            result * arg
        } else {
            // 牛顿迭代，中点作为初值
            let mut temp = (arg + 1.0) * 0.5;
            loop {
                let result = (temp + arg / temp) * 0.5;
                if Self::compare(result, temp) == Ordering::Equal {
                    return result;
                }
                temp = result;
            }
        }
    }

    fn average(values: &[Self], is_speedy: bool) -> Self {
        if values.is_empty() {
            return 0.0;
        }
        Self::sum(values, is_speedy) / values.len() as f64
    }

    fn variance(values: &[Self], is_speedy: bool) -> Self {
        if values.is_empty() {
            return 0.0;
        }

        let average = Self::average(values, is_speedy);
        let mut squares = Vec::with_capacity(values.len());
        for &v in values {
            let dev = Self::sum(&[v, -average], false);
            squares.push(dev * dev);
        }
        Self::sum(&squares, is_speedy) / values.len() as f64
    }

    fn clamp(value: Self, min: Self, max: Self) -> Self {
        let (mn, mx) = if min > max { (max, min) } else { (min, max) };

        let mut result = value;
        if Self::compare(result, mn) == Ordering::Less {
            result = mn;
        }
        if Self::compare(result, mx) == Ordering::Greater {
            result = mx;
        }
        result
    }

    fn wrap(value: Self, min: Self, max: Self) -> Self {
        let (mn, mx) = if min > max { (max, min) } else { (min, max) };

        let mut result = value;
        let length = mx - mn;
        // 零长度区间无法环绕，原样返回
        if Self::compare(length, 0.0) != Ordering::Greater {
            return result;
        }
        while Self::compare(result, mn) == Ordering::Less {
            result = Self::sum(&[length, result], false);
        }
        while Self::compare(result, mx) == Ordering::Greater {
            result = Self::sum(&[-length, result], false);
        }
        result
    }

    fn bern(n: u32, k: u32, t: Self) -> Self {
        let mut result = 1.0f64;
        if k <= n {
            // 组合数，逐步乘除保持整数精确
            let mut comb = 1u64;
            for i in 1..=k as u64 {
                comb = comb * (n as u64 + 1 - i) / i;
            }
            let rate = Self::clamp(t, 0.0, 1.0);
            result = comb as f64 * rate.powi(k as i32) * (1.0 - rate).powi((n - k) as i32);
        }
        result
    }
}

/// SIMD通道的求和实现
///
/// 与标量实现同为两种策略，但Kahan补偿在4个通道上逐元素并行进行。
impl Summation for Lane {
    fn sum(values: &[Self], is_speedy: bool) -> Self {
        let mut result = Lane::splat(0.0);

        if is_speedy {
            // 朴素累加
            for &v in values {
                result = result + v;
            }
        } else {
            // Kahan补偿求和
            let mut c = Lane::splat(0.0);
            for &v in values {
                let y = v - c;
                let t = result + y;
                c = (t - result) - y;
                result = t;
            }
        }

        result
    }
}
