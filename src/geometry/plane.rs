//! 三维平面方程・切线空间基底

use core::cmp::Ordering;
use serde::{Deserialize, Serialize};

use super::GeometryError;
use crate::convert::HandSide;
use crate::kernel::NumericKernel;
use crate::matrix::Mat3;
use crate::vector::{Vec3, VectorOps};

/// 三维平面
///
/// 由三个不共线的点构造，保存正交的切线/从法线/法线基底
/// （三次行列形式）与平面方程的D项。基底的读取方向由构造时的
/// 左右手系参数决定。
///
/// 共线输入产生零基底（静默降级），需要显式失败的调用方使用
/// [`Plane3::try_init`]。
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Plane3 {
    d: f32,
    mtx: Mat3,
    side: HandSide,
}

impl Default for Plane3 {
    fn default() -> Self {
        Self {
            d: 0.0,
            mtx: Mat3::ZERO,
            side: HandSide::RHS,
        }
    }
}

impl Plane3 {
    /// 初始化
    ///
    /// 切线 = normalize(normalize(p1-p2) + normalize(p3-p2))，
    /// 法线为两条边方向的外积（不再正规化），从法线 = 法线×切线。
    /// 调用方必须保证三点不退化、不共线，否则法线未定义（零向量）。
    pub fn init(&mut self, hs: HandSide, pt1: Vec3, pt2: Vec3, pt3: Vec3) -> &mut Self {
        self.side = hs;

        let vt21 = (pt1 - pt2).normalize();
        let vt23 = (pt3 - pt2).normalize();

        let n = vt21.cross(&vt23);
        let t = (vt21 + vt23).normalize();
        let b = n.cross(&t);

        if f32::compare(n.magnitude(), 0.0) != Ordering::Greater {
            log::debug!("Plane3::init: degenerate input, basis is undefined");
        }

        self.d = -n.magnitude();

        self.mtx = Mat3::ZERO;
        self.mtx.set_row(0, t).set_row(1, b).set_row(2, n);
        if self.side == HandSide::RHS {
            self.mtx = self.mtx.transpose();
        }

        self
    }

    /// 带校验的构造
    ///
    /// 三点共线或重合时返回[`GeometryError::CollinearPoints`]。
    pub fn try_init(
        hs: HandSide,
        pt1: Vec3,
        pt2: Vec3,
        pt3: Vec3,
    ) -> Result<Self, GeometryError> {
        let vt21 = (pt1 - pt2).normalize();
        let vt23 = (pt3 - pt2).normalize();
        let n = vt21.cross(&vt23);

        if f32::compare(n.magnitude(), 0.0) != Ordering::Greater {
            return Err(GeometryError::CollinearPoints);
        }

        let mut result = Self::default();
        result.init(hs, pt1, pt2, pt3);
        Ok(result)
    }

    /// 法线取得
    pub fn normal(&self) -> Vec3 {
        const ELEMENT: Vec3 = Vec3::new(0.0, 0.0, 1.0);
        match self.side {
            HandSide::LHS => ELEMENT * self.mtx,
            HandSide::RHS => self.mtx * ELEMENT,
        }
    }

    /// 从法线取得
    pub fn binormal(&self) -> Vec3 {
        const ELEMENT: Vec3 = Vec3::new(0.0, 1.0, 0.0);
        match self.side {
            HandSide::LHS => ELEMENT * self.mtx,
            HandSide::RHS => self.mtx * ELEMENT,
        }
    }

    /// 切线取得
    pub fn tangent(&self) -> Vec3 {
        const ELEMENT: Vec3 = Vec3::new(1.0, 0.0, 0.0);
        match self.side {
            HandSide::LHS => ELEMENT * self.mtx,
            HandSide::RHS => self.mtx * ELEMENT,
        }
    }

    /// 平面方程的D项
    pub fn d(&self) -> f32 {
        self.d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_from_axis_points() {
        let mut plane = Plane3::default();
        plane.init(
            HandSide::RHS,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );

        let n = plane.normal();
        // 法线按卷绕方向为±z
        assert!((n.z.abs() - 1.0).abs() < 1e-5);
        assert!(n.x.abs() < 1e-5);
        assert!(n.y.abs() < 1e-5);

        // 基底正交
        assert!(n.dot(&plane.tangent()).abs() < 1e-5);
        assert!(n.dot(&plane.binormal()).abs() < 1e-5);

        // 切线为两条边方向和的正规化
        let t = plane.tangent();
        let expected = (Vec3::new(1.0, 0.0, 0.0) + Vec3::new(0.0, 1.0, 0.0)).normalize();
        assert!((t.dot(&expected) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_both_hand_sides_agree() {
        let p1 = Vec3::new(2.0, 0.0, 1.0);
        let p2 = Vec3::new(0.0, 1.0, 0.0);
        let p3 = Vec3::new(-1.0, 0.0, 3.0);

        let mut lhs = Plane3::default();
        lhs.init(HandSide::LHS, p1, p2, p3);
        let mut rhs = Plane3::default();
        rhs.init(HandSide::RHS, p1, p2, p3);

        // 基底向量与读取方向无关
        assert_eq!(lhs.normal(), rhs.normal());
        assert_eq!(lhs.tangent(), rhs.tangent());
        assert_eq!(lhs.binormal(), rhs.binormal());
    }

    #[test]
    fn test_try_init_rejects_collinear() {
        let result = Plane3::try_init(
            HandSide::RHS,
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        );
        assert_eq!(result.unwrap_err(), GeometryError::CollinearPoints);

        let result = Plane3::try_init(
            HandSide::RHS,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_degenerate_init_is_silent() {
        // 共线三点：静默得到零基底
        let mut plane = Plane3::default();
        plane.init(
            HandSide::RHS,
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        );
        assert_eq!(plane.normal(), Vec3::ZERO);
    }
}
