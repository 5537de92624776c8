//! 三次正方行列

use bytemuck::{Pod, Zeroable};
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use engine_math_simd::Lane;
use serde::{Deserialize, Serialize};

use super::Mat2;
use crate::kernel::{NumericKernel, Summation};
use crate::structs::Float3x3;
use crate::vector::{Vec3, VectorOps};

/// 单精度三次正方行列
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Mat3(pub Float3x3);

unsafe impl Zeroable for Mat3 {}
unsafe impl Pod for Mat3 {}

impl Mat3 {
    /// 零行列
    #[rustfmt::skip]
    pub const ZERO: Self = Self::new(
        0.0, 0.0, 0.0,
        0.0, 0.0, 0.0,
        0.0, 0.0, 0.0,
    );

    /// 单位行列
    #[rustfmt::skip]
    pub const UNIT: Self = Self::new(
        1.0, 0.0, 0.0,
        0.0, 1.0, 0.0,
        0.0, 0.0, 1.0,
    );

    /// 按分量构造（行主序）
    #[rustfmt::skip]
    pub const fn new(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Self {
        Self(Float3x3 {
            m00, m01, m02,
            m10, m11, m12,
            m20, m21, m22,
        })
    }

    /// 行成分设置（下标越界时静默不变）
    pub fn set_row(&mut self, idx: usize, vt: Vec3) -> &mut Self {
        if idx < 3 {
            for i in 0..3 {
                self.0[idx * 3 + i] = vt[i];
            }
        }
        self
    }

    /// 列成分设置（下标越界时静默不变）
    pub fn set_column(&mut self, idx: usize, vt: Vec3) -> &mut Self {
        if idx < 3 {
            for i in 0..3 {
                self.0[i * 3 + idx] = vt[i];
            }
        }
        self
    }

    /// 行成分抽取（下标越界时返回零向量）
    pub fn row(&self, idx: usize) -> Vec3 {
        let mut result = Vec3::ZERO;
        if idx < 3 {
            for i in 0..3 {
                result[i] = self.0[idx * 3 + i];
            }
        }
        result
    }

    /// 列成分抽取（下标越界时返回零向量）
    pub fn column(&self, idx: usize) -> Vec3 {
        let mut result = Vec3::ZERO;
        if idx < 3 {
            for i in 0..3 {
                result[i] = self.0[i * 3 + idx];
            }
        }
        result
    }

    /// 行交换
    pub fn row_swap(&mut self, from: usize, to: usize) -> &mut Self {
        if from < 3 && to < 3 {
            for i in 0..3 {
                self.0.as_array_mut().swap(from * 3 + i, to * 3 + i);
            }
        }
        self
    }

    /// 列交换
    pub fn column_swap(&mut self, from: usize, to: usize) -> &mut Self {
        if from < 3 && to < 3 {
            for i in 0..3 {
                self.0.as_array_mut().swap(i * 3 + from, i * 3 + to);
            }
        }
        self
    }

    /// 行定数倍
    pub fn row_scale(&mut self, idx: usize, rate: f32) -> &mut Self {
        if idx < 3 {
            for i in 0..3 {
                self.0[idx * 3 + i] *= rate;
            }
        }
        self
    }

    /// 列定数倍
    pub fn column_scale(&mut self, idx: usize, rate: f32) -> &mut Self {
        if idx < 3 {
            for i in 0..3 {
                self.0[i * 3 + idx] *= rate;
            }
        }
        self
    }

    /// 行定数倍加算：`to`行 += `from`行 × `rate`
    pub fn row_prosum(&mut self, from: usize, to: usize, rate: f32) -> &mut Self {
        if from < 3 && to < 3 {
            for i in 0..3 {
                let tmp = [self.0[to * 3 + i], self.0[from * 3 + i] * rate];
                self.0[to * 3 + i] = f32::sum(&tmp, false);
            }
        }
        self
    }

    /// 列定数倍加算：`to`列 += `from`列 × `rate`
    pub fn column_prosum(&mut self, from: usize, to: usize, rate: f32) -> &mut Self {
        if from < 3 && to < 3 {
            for i in 0..3 {
                let tmp = [self.0[i * 3 + to], self.0[i * 3 + from] * rate];
                self.0[i * 3 + to] = f32::sum(&tmp, false);
            }
        }
        self
    }

    /// 转置行列
    pub fn transpose(&self) -> Self {
        let mut result = *self;
        let p = result.0.as_array_mut();
        p.swap(1, 3);
        p.swap(2, 6);
        p.swap(5, 7);
        result
    }

    /// 余因子行列（古典伴随）
    ///
    /// 二重循环抽取二次小行列式，按`(-1)^(行+列)`符号合成。
    pub fn adjoint(&self) -> Self {
        let mut result = Self::ZERO;

        for idx1 in 0..9 {
            let dx1 = idx1 / 3;
            let dy1 = idx1 % 3;

            let mut tmp = Mat2::ZERO;
            let mut idx3 = 0;
            for idx2 in 0..9 {
                let dx2 = idx2 / 3;
                let dy2 = idx2 % 3;
                if dx1 != dx2 && dy1 != dy2 {
                    tmp.0[idx3] = self.0[dy2 * 3 + dx2];
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

    /// 行列式（三次展开式）
    pub fn determinant(&self) -> f32 {
        let terms = [
            self.m00 * self.m11 * self.m22,
            self.m01 * self.m12 * self.m20,
            self.m02 * self.m10 * self.m21,
            -(self.m00 * self.m12 * self.m21),
            -(self.m01 * self.m10 * self.m22),
            -(self.m02 * self.m11 * self.m20),
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
            log::debug!("Mat3::inverse: determinant compares non-positive, returning adjoint");
        }
        result
    }

    /// 直积
    pub fn direct(lhs: Vec3, rhs: Vec3) -> Self {
        let mut result = Self::ZERO;
        for idx in 0..9 {
            result.0[idx] = lhs[idx % 3] * rhs[idx / 3];
        }
        result
    }

    /// 楔积
    pub fn wedge(lhs: Vec3, rhs: Vec3) -> Self {
        Self::direct(lhs, rhs) - Self::direct(rhs, lhs)
    }
}

impl From<Float3x3> for Mat3 {
    fn from(arg: Float3x3) -> Self {
        Self(arg)
    }
}

impl Deref for Mat3 {
    type Target = Float3x3;

    #[inline]
    fn deref(&self) -> &Float3x3 {
        &self.0
    }
}

impl DerefMut for Mat3 {
    #[inline]
    fn deref_mut(&mut self) -> &mut Float3x3 {
        &mut self.0
    }
}

impl AddAssign for Mat3 {
    fn add_assign(&mut self, rhs: Self) {
        // 按行补零扩展到4宽度通道
        for idx in 0..3 {
            let lhs_row = self.row(idx);
            let rhs_row = rhs.row(idx);
            let sum = Lane::set(lhs_row.x, lhs_row.y, lhs_row.z, 0.0)
                + Lane::set(rhs_row.x, rhs_row.y, rhs_row.z, 0.0);
            let a = sum.to_array();
            self.set_row(idx, Vec3::new(a[0], a[1], a[2]));
        }
    }
}

impl SubAssign for Mat3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl MulAssign<f32> for Mat3 {
    fn mul_assign(&mut self, rhs: f32) {
        let scale = Lane::splat(rhs);
        for idx in 0..3 {
            let row = self.row(idx);
            let a = (Lane::set(row.x, row.y, row.z, 0.0) * scale).to_array();
            self.set_row(idx, Vec3::new(a[0], a[1], a[2]));
        }
    }
}

impl DivAssign<f32> for Mat3 {
    fn div_assign(&mut self, rhs: f32) {
        *self *= 1.0 / rhs;
    }
}

impl Add for Mat3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut result = self;
        result += rhs;
        result
    }
}

impl Sub for Mat3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut result = self;
        result -= rhs;
        result
    }
}

impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;
        for idx in 0..9 {
            result.0[idx] = self.row(idx / 3).dot(&rhs.column(idx % 3));
        }
        result
    }
}

impl Mul<f32> for Mat3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        let mut result = self;
        result *= rhs;
        result
    }
}

impl Mul<Mat3> for f32 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        rhs * self
    }
}

impl Div for Mat3 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl Div<f32> for Mat3 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        let mut result = self;
        result /= rhs;
        result
    }
}

impl Div<Mat3> for f32 {
    type Output = Mat3;

    fn div(self, rhs: Mat3) -> Mat3 {
        self * rhs.inverse()
    }
}

impl Neg for Mat3 {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

/// 行作用：行向量×行列
impl Mul<Mat3> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Mat3) -> Vec3 {
        let mut result = Vec3::ZERO;
        for idx in 0..3 {
            result[idx] = self.dot(&rhs.column(idx));
        }
        result
    }
}

/// 列作用：行列×列向量
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        let mut result = Vec3::ZERO;
        for idx in 0..3 {
            result[idx] = self.row(idx).dot(&rhs);
        }
        result
    }
}

impl PartialEq for Mat3 {
    fn eq(&self, other: &Self) -> bool {
        (0..9).all(|idx| f32::compare(self.0[idx], other.0[idx]) == Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    fn sample() -> Mat3 {
        Mat3::new(
            2.0, 0.0, 1.0,
            1.0, 3.0, 0.0,
            0.0, 1.0, 4.0,
        )
    }

    #[test]
    fn test_transpose_involution() {
        let m = sample();
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().m01, m.m10);
    }

    #[test]
    fn test_determinant() {
        // det = 2*(12-0) - 0 + 1*(1-0) = 25
        assert!((sample().determinant() - 25.0).abs() < 1e-4);
        assert!((Mat3::UNIT.determinant() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let m = sample();
        assert_eq!(m * m.inverse(), Mat3::UNIT);
        assert_eq!(m.inverse() * m, Mat3::UNIT);
    }

    #[test]
    fn test_inverse_degenerate_returns_adjoint() {
        #[rustfmt::skip]
        let m = Mat3::new(
            1.0, 2.0, 3.0,
            2.0, 4.0, 6.0,
            0.0, 1.0, 1.0,
        );
        assert_eq!(m.inverse(), m.adjoint());
    }

    #[test]
    fn test_matrix_product() {
        let m = sample();
        assert_eq!(m * Mat3::UNIT, m);
        assert_eq!(Mat3::UNIT * m, m);
    }

    #[test]
    fn test_elementary_ops() {
        let mut m = Mat3::UNIT;
        m.column_swap(0, 2);
        assert_eq!(m.column(0), Vec3::new(0.0, 0.0, 1.0));

        let mut m = Mat3::UNIT;
        m.column_prosum(0, 1, 5.0);
        assert_eq!(m.column(1), Vec3::new(5.0, 1.0, 0.0));

        // 越界静默
        let mut m = sample();
        let before = m;
        m.row_swap(0, 3).column_prosum(4, 0, 1.0);
        assert_eq!(m, before);
        assert_eq!(m.column(3), Vec3::ZERO);
    }

    #[test]
    fn test_vector_application_orientations() {
        // 绕平面的90度回转块
        #[rustfmt::skip]
        let m = Mat3::new(
            0.0, -1.0, 0.0,
            1.0,  0.0, 0.0,
            0.0,  0.0, 1.0,
        );
        let v = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(m * v, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(v * m, Vec3::new(0.0, -1.0, 0.0));
    }
}
