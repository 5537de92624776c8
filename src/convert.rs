//! 回转表现变换与变换行列构造
//!
//! 各回转表现（复数 ↔ 回转量 ↔ 三次行列、四元数 ↔ 欧拉角 ↔ 四次行列）
//! 之间的纯函数变换，以及带左右手系参数的移动、回转、拡縮、剪断
//! 行列构造函数。
//!
//! 右手系（列作用）为规范构造，左手系变体由规范构造转置得到。
//! 渲染层在上传常量缓冲区前用这些构造函数合成每帧变换。

use core::cmp::Ordering;
use core::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::kernel::{NumericKernel, Summation};
use crate::matrix::{Mat3, Mat4};
use crate::rotation::{Complex, EulerRot, Quat, Rotation};
use crate::vector::{Vec2, Vec3, VectorOps};

/// 作用方向一览
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandSide {
    /// 左手系（行作用：行向量×行列）
    LHS,
    /// 右手系（列作用：行列×列向量）
    RHS,
}

/// 二维空间剪断方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkewType2 {
    /// 第一分量基准（X轴）
    PRI,
    /// 第二分量基准（Y轴）
    SEC,
}

/// 三维空间剪断方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkewType3 {
    /// XY平面上的第一分量基准（X轴）
    XYP,
    /// XY平面上的第二分量基准（Y轴）
    XYS,
    /// XZ平面上的第一分量基准（X轴）
    XZP,
    /// XZ平面上的第二分量基准（Z轴）
    XZS,
    /// YZ平面上的第一分量基准（Y轴）
    YZP,
    /// YZ平面上的第二分量基准（Z轴）
    YZS,
}

impl Complex {
    /// 复数→行列变换
    ///
    /// 二维回转块嵌入单位行列左上角。
    pub fn to_mtx(&self) -> Mat3 {
        let mut result = Mat3::UNIT;

        let sin = self.y;
        let cos = self.x;

        result.m00 = cos;
        result.m11 = cos;
        result.m01 = -sin;
        result.m10 = sin;

        result
    }

    /// 复数→回转量变换
    pub fn to_rot(&self) -> Rotation {
        Rotation::atan2(self.x, self.y)
    }
}

impl Rotation {
    /// 回转量→行列变换
    pub fn to_mtx(&self) -> Mat3 {
        let mut result = Mat3::UNIT;

        let s = self.sin();
        let c = self.cos();

        result.m00 = c;
        result.m11 = c;
        result.m01 = -s;
        result.m10 = s;

        result
    }

    /// 回转量→复数变换
    pub fn to_cmp(&self) -> Complex {
        Complex::new(self.cos(), self.sin())
    }
}

impl Quat {
    /// 四元数→行列变换
    pub fn to_mtx(&self) -> Mat4 {
        let mut result = Mat4::UNIT;

        let xx = self.x * self.x;
        let yy = self.y * self.y;
        let zz = self.z * self.z;
        let ww = self.w * self.w;

        result.m00 = f32::sum(&[xx, -yy, -zz, ww], false);
        result.m11 = f32::sum(&[-xx, yy, -zz, ww], false);
        result.m22 = f32::sum(&[-xx, -yy, zz, ww], false);

        result.m21 = 2.0 * f32::sum(&[self.y * self.z, self.x * self.w], false);
        result.m10 = 2.0 * f32::sum(&[self.x * self.y, self.z * self.w], false);
        result.m02 = 2.0 * f32::sum(&[self.x * self.z, self.y * self.w], false);

        result.m01 = 2.0 * f32::sum(&[self.x * self.y, -(self.z * self.w)], false);
        result.m12 = 2.0 * f32::sum(&[self.y * self.z, -(self.x * self.w)], false);
        result.m20 = 2.0 * f32::sum(&[self.x * self.z, -(self.y * self.w)], false);

        result
    }

    /// 四元数→欧拉角变换
    pub fn to_euler(&self) -> EulerRot {
        self.to_mtx().to_euler()
    }
}

impl EulerRot {
    /// 欧拉角→行列变换
    ///
    /// 合成顺序为俯仰×偏航×翻滚（X·Y·Z）。
    pub fn to_mtx(&self) -> Mat4 {
        let mut pitch = Mat4::UNIT;
        let mut yaw = Mat4::UNIT;
        let mut roll = Mat4::UNIT;

        pitch.m11 = self.x.cos();
        pitch.m22 = self.x.cos();
        pitch.m12 = -self.x.sin();
        pitch.m21 = self.x.sin();

        yaw.m00 = self.y.cos();
        yaw.m22 = self.y.cos();
        yaw.m02 = self.y.sin();
        yaw.m20 = -self.y.sin();

        roll.m00 = self.z.cos();
        roll.m11 = self.z.cos();
        roll.m01 = -self.z.sin();
        roll.m10 = self.z.sin();

        pitch * yaw * roll
    }

    /// 欧拉角→四元数变换
    ///
    /// 各轴半角四元数按俯仰×偏航×翻滚合成，
    /// 与[`EulerRot::to_mtx`]的行列合成一致。
    pub fn to_qt(&self) -> Quat {
        let half_x = self.x * 0.5;
        let half_y = self.y * 0.5;
        let half_z = self.z * 0.5;

        let pitch = Quat::new(half_x.sin(), 0.0, 0.0, half_x.cos());
        let yaw = Quat::new(0.0, half_y.sin(), 0.0, half_y.cos());
        let roll = Quat::new(0.0, 0.0, half_z.sin(), half_z.cos());

        pitch * yaw * roll
    }
}

impl Mat3 {
    /// 行列→回转量变换
    pub fn to_rot(&self) -> Rotation {
        Rotation::atan2(self.m00, self.m10)
    }

    /// 行列→复数变换
    ///
    /// 取左上回转块的第一列并正规化，剥离可能嵌入的拡縮。
    pub fn to_cmp(&self) -> Complex {
        Complex::new(self.m00, self.m10).normalize()
    }
}

impl Mat4 {
    /// 行列→四元数变换
    ///
    /// 从四个对角导出量中取最大者作为枢轴再开方，回避相消误差。
    /// 枢轴为负（退化、非正交输入）时返回零四元数。
    pub fn to_qt(&self) -> Quat {
        let candidates = [
            f32::sum(&[self.m00, -self.m11, -self.m22, 1.0], false),
            f32::sum(&[-self.m00, self.m11, -self.m22, 1.0], false),
            f32::sum(&[-self.m00, -self.m11, self.m22, 1.0], false),
            f32::sum(&[self.m00, self.m11, self.m22, 1.0], false),
        ];

        let mut biggest = candidates[0];
        let mut i = 0;
        for (idx, &candidate) in candidates.iter().enumerate().skip(1) {
            if candidate > biggest {
                biggest = candidate;
                i = idx;
            }
        }
        if biggest < 0.0 {
            return Quat::ZERO;
        }

        let v = <f32 as NumericKernel>::sqrt(biggest, false) * 0.5;
        let mult = 0.25 / v;

        let mut result = Quat::ZERO;
        result[i] = v;
        match i {
            0 => {
                result.y = f32::sum(&[self.m01, self.m10], false) * mult;
                result.z = f32::sum(&[self.m20, self.m02], false) * mult;
                result.w = f32::sum(&[self.m21, -self.m12], false) * mult;
            }
            1 => {
                result.x = f32::sum(&[self.m01, self.m10], false) * mult;
                result.z = f32::sum(&[self.m12, self.m21], false) * mult;
                result.w = f32::sum(&[self.m02, -self.m20], false) * mult;
            }
            2 => {
                result.x = f32::sum(&[self.m20, self.m02], false) * mult;
                result.y = f32::sum(&[self.m12, self.m21], false) * mult;
                result.w = f32::sum(&[self.m10, -self.m01], false) * mult;
            }
            _ => {
                result.x = f32::sum(&[self.m21, -self.m12], false) * mult;
                result.y = f32::sum(&[self.m02, -self.m20], false) * mult;
                result.z = f32::sum(&[self.m10, -self.m01], false) * mult;
            }
        }

        result
    }

    /// 行列→欧拉角变换
    ///
    /// 按俯仰×偏航×翻滚（X·Y·Z）合成顺序抽取，`|m02| ≈ 1`的
    /// 万向节锁情形下翻滚固定为零。
    pub fn to_euler(&self) -> EulerRot {
        if f32::compare(self.m02.abs(), 1.0) == Ordering::Less {
            EulerRot::new(
                Rotation::atan2(self.m22, -self.m12),
                Rotation::asin(self.m02),
                Rotation::atan2(self.m00, -self.m01),
            )
        } else {
            // 万向节锁：只剩俯仰与偏航之和可辨
            let y = if self.m02 > 0.0 {
                Rotation::from_degree(90.0)
            } else {
                Rotation::from_degree(-90.0)
            };
            EulerRot::new(Rotation::atan2(self.m11, self.m10), y, Rotation::default())
        }
    }
}

/// 移动行列生成（二维、三次行列）
pub fn make_transit2(hs: HandSide, vt: Vec2) -> Mat3 {
    let mut result = Mat3::UNIT;

    match hs {
        HandSide::RHS => {
            result.m02 = vt.x;
            result.m12 = vt.y;
        }
        HandSide::LHS => {
            result.m20 = vt.x;
            result.m21 = vt.y;
        }
    }

    result
}

/// 移动行列生成（三维、四次行列）
pub fn make_transit3(hs: HandSide, vt: Vec3) -> Mat4 {
    let mut result = Mat4::UNIT;

    match hs {
        HandSide::RHS => {
            result.m03 = vt.x;
            result.m13 = vt.y;
            result.m23 = vt.z;
        }
        HandSide::LHS => {
            result.m30 = vt.x;
            result.m31 = vt.y;
            result.m32 = vt.z;
        }
    }

    result
}

/// 回转行列生成（平面回转）
pub fn make_rotate2(hs: HandSide, rot: Rotation) -> Mat3 {
    let result = rot.to_mtx();

    match hs {
        HandSide::LHS => result.transpose(),
        HandSide::RHS => result,
    }
}

/// 回转行列生成（四元数）
pub fn make_rotate_quat(hs: HandSide, qt: Quat) -> Mat4 {
    let result = qt.to_mtx();

    match hs {
        HandSide::LHS => result.transpose(),
        HandSide::RHS => result,
    }
}

/// 回转行列生成（任意轴+回转量、罗德里格斯公式）
pub fn make_rotate_axis(hs: HandSide, axis: Vec3, rot: Rotation) -> Mat4 {
    let mut result = Mat4::UNIT;

    let s = rot.sin();
    let c = rot.cos();
    let n = axis.normalize();

    result.m00 = c + n.x * n.x * (1.0 - c);
    result.m11 = c + n.y * n.y * (1.0 - c);
    result.m22 = c + n.z * n.z * (1.0 - c);

    result.m01 = n.x * n.y * (1.0 - c) - n.z * s;
    result.m12 = n.y * n.z * (1.0 - c) - n.x * s;
    result.m20 = n.x * n.z * (1.0 - c) - n.y * s;

    result.m10 = n.x * n.y * (1.0 - c) + n.z * s;
    result.m21 = n.y * n.z * (1.0 - c) + n.x * s;
    result.m02 = n.x * n.z * (1.0 - c) + n.y * s;

    match hs {
        HandSide::LHS => result.transpose(),
        HandSide::RHS => result,
    }
}

/// 拡縮行列生成（二维）
pub fn make_scaler2(vt: Vec2) -> Mat3 {
    let mut result = Mat3::UNIT;
    result.m00 = vt.x;
    result.m11 = vt.y;
    result
}

/// 拡縮行列生成（三维）
pub fn make_scaler3(vt: Vec3) -> Mat4 {
    let mut result = Mat4::UNIT;
    result.m00 = vt.x;
    result.m11 = vt.y;
    result.m22 = vt.z;
    result
}

/// 剪断行列生成（二维）
pub fn make_skew2(hs: HandSide, st: SkewType2, rot: Rotation) -> Mat3 {
    let mut result = Mat3::UNIT;

    match hs {
        HandSide::LHS => match st {
            SkewType2::PRI => result.m10 = rot.tan(),
            SkewType2::SEC => result.m01 = rot.tan(),
        },
        HandSide::RHS => match st {
            SkewType2::PRI => result.m01 = rot.tan(),
            SkewType2::SEC => result.m10 = rot.tan(),
        },
    }

    result
}

/// 剪断行列生成（三维）
pub fn make_skew3(hs: HandSide, st: SkewType3, rot: Rotation) -> Mat4 {
    let mut result = Mat4::UNIT;

    match hs {
        HandSide::LHS => match st {
            SkewType3::XYP => result.m10 = rot.tan(),
            SkewType3::XYS => result.m01 = rot.tan(),
            SkewType3::XZP => result.m20 = rot.tan(),
            SkewType3::XZS => result.m02 = rot.tan(),
            SkewType3::YZP => result.m12 = rot.tan(),
            SkewType3::YZS => result.m21 = rot.tan(),
        },
        HandSide::RHS => match st {
            SkewType3::XYP => result.m01 = rot.tan(),
            SkewType3::XYS => result.m10 = rot.tan(),
            SkewType3::XZP => result.m02 = rot.tan(),
            SkewType3::XZS => result.m20 = rot.tan(),
            SkewType3::YZP => result.m21 = rot.tan(),
            SkewType3::YZS => result.m12 = rot.tan(),
        },
    }

    result
}

/// 线性插值
pub fn lerp<T>(begin: T, end: T, rate: f32) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    begin + (end - begin) * rate
}

/// 球面线性插值（四元数）
///
/// 弧近退化时退回线性插值。
pub fn slerp(begin: Quat, end: Quat, rate: f32) -> Quat {
    let mut cosom = begin.dot(&end);
    let mut target = end;

    // 双重被覆：取较近的半球
    if cosom < 0.0 {
        cosom = -cosom;
        target = -end;
    }

    if f32::compare(cosom, 1.0) == Ordering::Less {
        let omega = cosom.acos();
        let sinom = omega.sin();
        let s0 = ((1.0 - rate) * omega).sin() / sinom;
        let s1 = (rate * omega).sin() / sinom;
        begin * s0 + target * s1
    } else {
        lerp(begin, target, rate)
    }
}

/// 跳弹向量生成
///
/// 方向`dir`对法线`nor`反射，`rate`为弹性率（1为完全反射）。
pub fn bounce<T>(dir: T, nor: T, rate: f32) -> T
where
    T: VectorOps + Sub<Output = T> + Mul<f32, Output = T>,
{
    let n = nor.normalize();
    dir - n * ((1.0 + rate) * dir.dot(&n))
}

/// 两向量夹角生成
pub fn angle<T: VectorOps>(base: T, tar: T) -> Rotation {
    let cos = base.normalize().dot(&tar.normalize());
    Rotation::acos(f32::clamp(cos, -1.0, 1.0))
}
