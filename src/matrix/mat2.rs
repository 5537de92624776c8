//! 二次正方行列

use bytemuck::{Pod, Zeroable};
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use engine_math_simd::Lane;
use serde::{Deserialize, Serialize};

use crate::kernel::{NumericKernel, Summation};
use crate::structs::Float2x2;
use crate::vector::{Vec2, VectorOps};

/// 单精度二次正方行列
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Mat2(pub Float2x2);

unsafe impl Zeroable for Mat2 {}
unsafe impl Pod for Mat2 {}

impl Mat2 {
    /// 零行列
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// 单位行列
    pub const UNIT: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// 按分量构造（行主序）
    #[rustfmt::skip]
    pub const fn new(
        m00: f32, m01: f32,
        m10: f32, m11: f32,
    ) -> Self {
        Self(Float2x2 { m00, m01, m10, m11 })
    }

    /// 行成分设置（下标越界时静默不变）
    pub fn set_row(&mut self, idx: usize, vt: Vec2) -> &mut Self {
        if idx < 2 {
            for i in 0..2 {
                self.0[idx * 2 + i] = vt[i];
            }
        }
        self
    }

    /// 列成分设置（下标越界时静默不变）
    pub fn set_column(&mut self, idx: usize, vt: Vec2) -> &mut Self {
        if idx < 2 {
            for i in 0..2 {
                self.0[i * 2 + idx] = vt[i];
            }
        }
        self
    }

    /// 行成分抽取（下标越界时返回零向量）
    pub fn row(&self, idx: usize) -> Vec2 {
        let mut result = Vec2::ZERO;
        if idx < 2 {
            for i in 0..2 {
                result[i] = self.0[idx * 2 + i];
            }
        }
        result
    }

    /// 列成分抽取（下标越界时返回零向量）
    pub fn column(&self, idx: usize) -> Vec2 {
        let mut result = Vec2::ZERO;
        if idx < 2 {
            for i in 0..2 {
                result[i] = self.0[i * 2 + idx];
            }
        }
        result
    }

    /// 行交换
    pub fn row_swap(&mut self, from: usize, to: usize) -> &mut Self {
        if from < 2 && to < 2 {
            for i in 0..2 {
                self.0.as_array_mut().swap(from * 2 + i, to * 2 + i);
            }
        }
        self
    }

    /// 列交换
    pub fn column_swap(&mut self, from: usize, to: usize) -> &mut Self {
        if from < 2 && to < 2 {
            for i in 0..2 {
                self.0.as_array_mut().swap(i * 2 + from, i * 2 + to);
            }
        }
        self
    }

    /// 行定数倍
    pub fn row_scale(&mut self, idx: usize, rate: f32) -> &mut Self {
        if idx < 2 {
            for i in 0..2 {
                self.0[idx * 2 + i] *= rate;
            }
        }
        self
    }

    /// 列定数倍
    pub fn column_scale(&mut self, idx: usize, rate: f32) -> &mut Self {
        if idx < 2 {
            for i in 0..2 {
                self.0[i * 2 + idx] *= rate;
            }
        }
        self
    }

    /// 行定数倍加算：`to`行 += `from`行 × `rate`
    pub fn row_prosum(&mut self, from: usize, to: usize, rate: f32) -> &mut Self {
        if from < 2 && to < 2 {
            for i in 0..2 {
                let tmp = [self.0[to * 2 + i], self.0[from * 2 + i] * rate];
                self.0[to * 2 + i] = f32::sum(&tmp, false);
            }
        }
        self
    }

    /// 列定数倍加算：`to`列 += `from`列 × `rate`
    pub fn column_prosum(&mut self, from: usize, to: usize, rate: f32) -> &mut Self {
        if from < 2 && to < 2 {
            for i in 0..2 {
                let tmp = [self.0[i * 2 + to], self.0[i * 2 + from] * rate];
                self.0[i * 2 + to] = f32::sum(&tmp, false);
            }
        }
        self
    }

    /// 转置行列
    pub fn transpose(&self) -> Self {
        let mut result = *self;
        result.0.as_array_mut().swap(1, 2);
        result
    }

    /// 余因子行列（古典伴随）
    #[rustfmt::skip]
    pub fn adjoint(&self) -> Self {
        Self::new(
             self.m11, -self.m01,
            -self.m10,  self.m00,
        )
    }

    /// 行列式
    pub fn determinant(&self) -> f32 {
        f32::sum(&[self.m00 * self.m11, -(self.m01 * self.m10)], false)
    }

    /// 逆行列
    ///
    /// 行列式与零比较不为`Greater`时跳过除法，返回未除的余因子行列。
    pub fn inverse(&self) -> Self {
        let mut result = self.adjoint();
        let size = self.determinant();
        if f32::compare(size, 0.0) == Ordering::Greater {
            result /= size;
        } else {
            log::debug!("Mat2::inverse: determinant compares non-positive, returning adjoint");
        }
        result
    }

    /// 直积
    pub fn direct(lhs: Vec2, rhs: Vec2) -> Self {
        let mut result = Self::ZERO;
        for idx in 0..4 {
            result.0[idx] = lhs[idx % 2] * rhs[idx / 2];
        }
        result
    }

    /// 楔积
    pub fn wedge(lhs: Vec2, rhs: Vec2) -> Self {
        Self::direct(lhs, rhs) - Self::direct(rhs, lhs)
    }
}

impl From<Float2x2> for Mat2 {
    fn from(arg: Float2x2) -> Self {
        Self(arg)
    }
}

impl Deref for Mat2 {
    type Target = Float2x2;

    #[inline]
    fn deref(&self) -> &Float2x2 {
        &self.0
    }
}

impl DerefMut for Mat2 {
    #[inline]
    fn deref_mut(&mut self) -> &mut Float2x2 {
        &mut self.0
    }
}

impl AddAssign for Mat2 {
    fn add_assign(&mut self, rhs: Self) {
        // 4个分量恰好一条通道
        let result = Lane::load(self.0.as_array()) + Lane::load(rhs.0.as_array());
        result.store(self.0.as_array_mut());
    }
}

impl SubAssign for Mat2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl MulAssign<f32> for Mat2 {
    fn mul_assign(&mut self, rhs: f32) {
        let result = Lane::load(self.0.as_array()) * Lane::splat(rhs);
        result.store(self.0.as_array_mut());
    }
}

impl DivAssign<f32> for Mat2 {
    fn div_assign(&mut self, rhs: f32) {
        *self *= 1.0 / rhs;
    }
}

impl Add for Mat2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut result = self;
        result += rhs;
        result
    }
}

impl Sub for Mat2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut result = self;
        result -= rhs;
        result
    }
}

impl Mul for Mat2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;
        for idx in 0..4 {
            result.0[idx] = self.row(idx / 2).dot(&rhs.column(idx % 2));
        }
        result
    }
}

impl Mul<f32> for Mat2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        let mut result = self;
        result *= rhs;
        result
    }
}

impl Mul<Mat2> for f32 {
    type Output = Mat2;

    fn mul(self, rhs: Mat2) -> Mat2 {
        rhs * self
    }
}

impl Div for Mat2 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl Div<f32> for Mat2 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        let mut result = self;
        result /= rhs;
        result
    }
}

impl Div<Mat2> for f32 {
    type Output = Mat2;

    fn div(self, rhs: Mat2) -> Mat2 {
        self * rhs.inverse()
    }
}

impl Neg for Mat2 {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

/// 行作用：行向量×行列
impl Mul<Mat2> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: Mat2) -> Vec2 {
        let mut result = Vec2::ZERO;
        for idx in 0..2 {
            result[idx] = self.dot(&rhs.column(idx));
        }
        result
    }
}

/// 列作用：行列×列向量
impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        let mut result = Vec2::ZERO;
        for idx in 0..2 {
            result[idx] = self.row(idx).dot(&rhs);
        }
        result
    }
}

impl PartialEq for Mat2 {
    fn eq(&self, other: &Self) -> bool {
        (0..4).all(|idx| f32::compare(self.0[idx], other.0[idx]) == Ordering::Equal)
    }
}
