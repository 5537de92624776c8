//! 四次正方行列

use bytemuck::{Pod, Zeroable};
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use engine_math_simd::Lane;
use serde::{Deserialize, Serialize};

use super::Mat3;
use crate::kernel::{NumericKernel, Summation};
use crate::structs::Float4x4;
use crate::vector::{Vec4, VectorOps};

/// 单精度四次正方行列
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Mat4(pub Float4x4);

unsafe impl Zeroable for Mat4 {}
unsafe impl Pod for Mat4 {}

impl Mat4 {
    /// 零行列
    #[rustfmt::skip]
    pub const ZERO: Self = Self::new(
        0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0,
    );

    /// 单位行列
    #[rustfmt::skip]
    pub const UNIT: Self = Self::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    /// 按分量构造（行主序）
    #[rustfmt::skip]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self(Float4x4 {
            m00, m01, m02, m03,
            m10, m11, m12, m13,
            m20, m21, m22, m23,
            m30, m31, m32, m33,
        })
    }

    /// 行成分设置（下标越界时静默不变）
    pub fn set_row(&mut self, idx: usize, vt: Vec4) -> &mut Self {
        if idx < 4 {
            for i in 0..4 {
                self.0[idx * 4 + i] = vt[i];
            }
        }
        self
    }

    /// 列成分设置（下标越界时静默不变）
    pub fn set_column(&mut self, idx: usize, vt: Vec4) -> &mut Self {
        if idx < 4 {
            for i in 0..4 {
                self.0[i * 4 + idx] = vt[i];
            }
        }
        self
    }

    /// 行成分抽取（下标越界时返回零向量）
    pub fn row(&self, idx: usize) -> Vec4 {
        let mut result = Vec4::ZERO;
        if idx < 4 {
            for i in 0..4 {
                result[i] = self.0[idx * 4 + i];
            }
        }
        result
    }

    /// 列成分抽取（下标越界时返回零向量）
    pub fn column(&self, idx: usize) -> Vec4 {
        let mut result = Vec4::ZERO;
        if idx < 4 {
            for i in 0..4 {
                result[i] = self.0[i * 4 + idx];
            }
        }
        result
    }

    /// 行交换
    pub fn row_swap(&mut self, from: usize, to: usize) -> &mut Self {
        if from < 4 && to < 4 {
            for i in 0..4 {
                self.0.as_array_mut().swap(from * 4 + i, to * 4 + i);
            }
        }
        self
    }

    /// 列交换
    pub fn column_swap(&mut self, from: usize, to: usize) -> &mut Self {
        if from < 4 && to < 4 {
            for i in 0..4 {
                self.0.as_array_mut().swap(i * 4 + from, i * 4 + to);
            }
        }
        self
    }

    /// 行定数倍
    pub fn row_scale(&mut self, idx: usize, rate: f32) -> &mut Self {
        if idx < 4 {
            for i in 0..4 {
                self.0[idx * 4 + i] *= rate;
            }
        }
        self
    }

    /// 列定数倍
    pub fn column_scale(&mut self, idx: usize, rate: f32) -> &mut Self {
        if idx < 4 {
            for i in 0..4 {
                self.0[i * 4 + idx] *= rate;
            }
        }
        self
    }

    /// 行定数倍加算：`to`行 += `from`行 × `rate`
    pub fn row_prosum(&mut self, from: usize, to: usize, rate: f32) -> &mut Self {
        if from < 4 && to < 4 {
            for i in 0..4 {
                let tmp = [self.0[to * 4 + i], self.0[from * 4 + i] * rate];
                self.0[to * 4 + i] = f32::sum(&tmp, false);
            }
        }
        self
    }

    /// 列定数倍加算：`to`列 += `from`列 × `rate`
    pub fn column_prosum(&mut self, from: usize, to: usize, rate: f32) -> &mut Self {
        if from < 4 && to < 4 {
            for i in 0..4 {
                let tmp = [self.0[i * 4 + to], self.0[i * 4 + from] * rate];
                self.0[i * 4 + to] = f32::sum(&tmp, false);
            }
        }
        self
    }

    /// 转置行列
    pub fn transpose(&self) -> Self {
        let mut result = *self;
        let p = result.0.as_array_mut();
        p.swap(1, 4);
        p.swap(2, 8);
        p.swap(3, 12);
        p.swap(6, 9);
        p.swap(7, 13);
        p.swap(11, 14);
        result
    }

    /// 余因子行列（古典伴随）
    ///
    /// 二重循环抽取三次小行列式，按`(-1)^(行+列)`符号合成。
    pub fn adjoint(&self) -> Self {
        let mut result = Self::ZERO;

        for idx1 in 0..16 {
            let dx1 = idx1 / 4;
            let dy1 = idx1 % 4;

            let mut tmp = Mat3::ZERO;
            let mut idx3 = 0;
            for idx2 in 0..16 {
                let dx2 = idx2 / 4;
                let dy2 = idx2 % 4;
                if dx1 != dx2 && dy1 != dy2 {
                    tmp.0[idx3] = self.0[dy2 * 4 + dx2];
                    idx3 += 1;
                }
            }

            let mut value = tmp.determinant();
            if (dx1 + dy1) % 2 == 1 {
                value = -value;
            }
            result.0[idx1] = value;
        }

        result
    }

    /// 行列式（四次展开式、24项手动展开）
    pub fn determinant(&self) -> f32 {
        let terms = [
            self.m00 * self.m11 * self.m22 * self.m33,
            self.m00 * self.m12 * self.m23 * self.m31,
            self.m00 * self.m13 * self.m21 * self.m32,
            self.m01 * self.m10 * self.m23 * self.m32,
            self.m01 * self.m12 * self.m20 * self.m33,
            self.m01 * self.m13 * self.m22 * self.m30,
            self.m02 * self.m10 * self.m21 * self.m33,
            self.m02 * self.m11 * self.m23 * self.m30,
            self.m02 * self.m13 * self.m20 * self.m31,
            self.m03 * self.m10 * self.m22 * self.m31,
            self.m03 * self.m11 * self.m20 * self.m32,
            self.m03 * self.m12 * self.m21 * self.m30,
            -(self.m00 * self.m11 * self.m23 * self.m32),
            -(self.m00 * self.m12 * self.m21 * self.m33),
            -(self.m00 * self.m13 * self.m22 * self.m31),
            -(self.m01 * self.m10 * self.m22 * self.m33),
            -(self.m01 * self.m12 * self.m23 * self.m30),
            -(self.m01 * self.m13 * self.m20 * self.m32),
            -(self.m02 * self.m10 * self.m23 * self.m31),
            -(self.m02 * self.m11 * self.m20 * self.m33),
            -(self.m02 * self.m13 * self.m21 * self.m30),
            -(self.m03 * self.m10 * self.m21 * self.m32),
            -(self.m03 * self.m11 * self.m22 * self.m30),
            -(self.m03 * self.m12 * self.m20 * self.m31),
        ];
        f32::sum(&terms, false)
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
            log::debug!("Mat4::inverse: determinant compares non-positive, returning adjoint");
        }
        result
    }

    /// 直积
    pub fn direct(lhs: Vec4, rhs: Vec4) -> Self {
        let mut result = Self::ZERO;
        for idx in 0..16 {
            result.0[idx] = lhs[idx % 4] * rhs[idx / 4];
        }
        result
    }

    /// 楔积
    pub fn wedge(lhs: Vec4, rhs: Vec4) -> Self {
        Self::direct(lhs, rhs) - Self::direct(rhs, lhs)
    }
}

impl From<Float4x4> for Mat4 {
    fn from(arg: Float4x4) -> Self {
        Self(arg)
    }
}

impl Deref for Mat4 {
    type Target = Float4x4;

    #[inline]
    fn deref(&self) -> &Float4x4 {
        &self.0
    }
}

impl DerefMut for Mat4 {
    #[inline]
    fn deref_mut(&mut self) -> &mut Float4x4 {
        &mut self.0
    }
}

impl AddAssign for Mat4 {
    fn add_assign(&mut self, rhs: Self) {
        // 每行恰好一条通道
        for idx in 0..4 {
            let sum = self.row(idx).to_lane() + rhs.row(idx).to_lane();
            let row = Vec4::from_lane(sum);
            self.set_row(idx, row);
        }
    }
}

impl SubAssign for Mat4 {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl MulAssign<f32> for Mat4 {
    fn mul_assign(&mut self, rhs: f32) {
        let scale = Lane::splat(rhs);
        for idx in 0..4 {
            let row = Vec4::from_lane(self.row(idx).to_lane() * scale);
            self.set_row(idx, row);
        }
    }
}

impl DivAssign<f32> for Mat4 {
    fn div_assign(&mut self, rhs: f32) {
        *self *= 1.0 / rhs;
    }
}

impl Add for Mat4 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut result = self;
        result += rhs;
        result
    }
}

impl Sub for Mat4 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut result = self;
        result -= rhs;
        result
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;
        for idx in 0..16 {
            result.0[idx] = self.row(idx / 4).dot(&rhs.column(idx % 4));
        }
        result
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        let mut result = self;
        result *= rhs;
        result
    }
}

impl Mul<Mat4> for f32 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        rhs * self
    }
}

impl Div for Mat4 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl Div<f32> for Mat4 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        let mut result = self;
        result /= rhs;
        result
    }
}

impl Div<Mat4> for f32 {
    type Output = Mat4;

    fn div(self, rhs: Mat4) -> Mat4 {
        self * rhs.inverse()
    }
}

impl Neg for Mat4 {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

/// 行作用：行向量×行列
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: Mat4) -> Vec4 {
        let mut result = Vec4::ZERO;
        for idx in 0..4 {
            result[idx] = self.dot(&rhs.column(idx));
        }
        result
    }
}

/// 列作用：行列×列向量
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Vec4 {
        let mut result = Vec4::ZERO;
        for idx in 0..4 {
            result[idx] = self.row(idx).dot(&rhs);
        }
        result
    }
}

impl PartialEq for Mat4 {
    fn eq(&self, other: &Self) -> bool {
        (0..16).all(|idx| f32::compare(self.0[idx], other.0[idx]) == Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    fn sample() -> Mat4 {
        Mat4::new(
            2.0, 0.0, 0.0, 1.0,
            0.0, 3.0, 1.0, 0.0,
            1.0, 0.0, 4.0, 0.0,
            0.0, 1.0, 0.0, 5.0,
        )
    }

    #[test]
    fn test_transpose_involution() {
        let m = sample();
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().m30, m.m03);
    }

    #[test]
    fn test_determinant_identity_and_scale() {
        assert!((Mat4::UNIT.determinant() - 1.0).abs() < 1e-6);

        let mut scale = Mat4::UNIT;
        scale.m00 = 2.0;
        scale.m11 = 3.0;
        scale.m22 = 4.0;
        assert!((scale.determinant() - 24.0).abs() < 1e-4);

        // 交换两行翻转符号
        let mut swapped = Mat4::UNIT;
        swapped.row_swap(0, 1);
        assert!((swapped.determinant() + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let m = sample();
        assert!(f32::compare(m.determinant(), 0.0) == core::cmp::Ordering::Greater);
        assert_eq!(m * m.inverse(), Mat4::UNIT);
        assert_eq!(m.inverse() * m, Mat4::UNIT);
    }

    #[test]
    fn test_inverse_degenerate_returns_adjoint() {
        let mut m = sample();
        // 将一行置为另一行的倍数使行列式为零
        let row = m.row(0);
        m.set_row(1, row * 2.0);
        assert_eq!(m.inverse(), m.adjoint());
    }

    #[test]
    fn test_matrix_product_with_translation() {
        // 平移×拡縮的合成（列作用惯例）
        let mut translate = Mat4::UNIT;
        translate.m03 = 1.0;
        translate.m13 = 2.0;
        translate.m23 = 3.0;

        let mut scale = Mat4::UNIT;
        scale.m00 = 2.0;
        scale.m11 = 2.0;
        scale.m22 = 2.0;

        let m = translate * scale;
        let p = m * Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(p, Vec4::new(3.0, 4.0, 5.0, 1.0));
    }

    #[test]
    fn test_out_of_range_is_silent() {
        let mut m = sample();
        let before = m;
        m.row_swap(4, 0).column_scale(7, 2.0).row_prosum(0, 9, 1.0);
        assert_eq!(m, before);
        assert_eq!(m.row(4), Vec4::ZERO);
        assert_eq!(m.column(11), Vec4::ZERO);
    }

    #[test]
    fn test_wedge_antisymmetric() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(-1.0, 0.5, 2.0, 1.0);
        let w = Mat4::wedge(a, b);
        assert_eq!(w, -Mat4::wedge(b, a));
        for i in 0..4 {
            assert!(w.0[i * 4 + i].abs() < 1e-5);
        }
    }
}
