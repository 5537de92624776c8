//! 有理贝塞尔曲线

use core::cmp::Ordering;
use core::ops::{Add, Mul};
use serde::{Deserialize, Serialize};

use crate::kernel::{NumericKernel, Summation};

/// 带权重的控制点
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WeightedPoint<T> {
    /// 数据
    pub data: T,
    /// 权重
    pub weight: f32,
}

/// 有理贝塞尔曲线
///
/// 控制点带权重，求值提供伯恩斯坦基路径与德卡斯特里奥路径两种。
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BezierCurve<T> {
    /// 控制点列
    pub contents: Vec<WeightedPoint<T>>,
}

impl<T> BezierCurve<T>
where
    T: Copy + Default + Add<Output = T> + Mul<f32, Output = T>,
{
    /// 空曲线
    pub fn new() -> Self {
        Self {
            contents: Vec::new(),
        }
    }

    /// 控制点追加
    pub fn push(&mut self, data: T, weight: f32) -> &mut Self {
        self.contents.push(WeightedPoint { data, weight });
        self
    }

    /// 补间
    ///
    /// `t`夹取到`[0, 1]`。`use_bern`为真时按伯恩斯坦基函数求和，
    /// 否则在齐次坐标上执行德卡斯特里奥算法。权重和为零时
    /// 静默返回未除的分子。
    pub fn interpolate(&self, t: f32, use_bern: bool) -> T {
        if self.contents.is_empty() {
            return T::default();
        }

        let rate = f32::clamp(t, 0.0, 1.0);
        if use_bern {
            self.interpolate_bern(rate)
        } else {
            self.interpolate_casteljau(rate)
        }
    }

    fn interpolate_bern(&self, rate: f32) -> T {
        let n = (self.contents.len() - 1) as u32;

        let mut numerator = T::default();
        let mut weights = Vec::with_capacity(self.contents.len());
        for (k, point) in self.contents.iter().enumerate() {
            let basis = f32::bern(n, k as u32, rate) * point.weight;
            numerator = numerator + point.data * basis;
            weights.push(basis);
        }

        let denominator = f32::sum(&weights, false);
        if f32::compare(denominator, 0.0) == Ordering::Greater {
            numerator * (1.0 / denominator)
        } else {
            numerator
        }
    }

    fn interpolate_casteljau(&self, rate: f32) -> T {
        // 齐次坐标上的反复线形补间
        let mut points: Vec<(T, f32)> = self
            .contents
            .iter()
            .map(|p| (p.data * p.weight, p.weight))
            .collect();

        while points.len() > 1 {
            let mut next = Vec::with_capacity(points.len() - 1);
            for pair in points.windows(2) {
                let data = pair[0].0 * (1.0 - rate) + pair[1].0 * rate;
                let weight = pair[0].1 * (1.0 - rate) + pair[1].1 * rate;
                next.push((data, weight));
            }
            points = next;
        }

        let (data, weight) = points[0];
        if f32::compare(weight, 0.0) == Ordering::Greater {
            data * (1.0 / weight)
        } else {
            data
        }
    }
}
