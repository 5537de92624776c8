//! 数值性质的随机测试
//!
//! 用proptest验证比较、求和、向量代数与行列运算的代数性质。

use core::cmp::Ordering;
use proptest::prelude::*;

use engine_math::{Mat4, NumericKernel, Ray3, Summation, Vec3, Vec4, VectorOps};

fn vec3_strategy() -> impl Strategy<Value = Vec3> {
    (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0)
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn mat4_strategy() -> impl Strategy<Value = Mat4> {
    prop::array::uniform16(-2.0f32..2.0).prop_map(|p| {
        let mut m = Mat4::ZERO;
        for (idx, v) in p.into_iter().enumerate() {
            m.0[idx] = v;
        }
        m
    })
}

proptest! {
    #[test]
    fn compare_is_reflexive(a in -1.0e6f32..1.0e6) {
        prop_assert_eq!(f32::compare(a, a), Ordering::Equal);
    }

    #[test]
    fn compare_is_antisymmetric(a in -1.0e3f32..1.0e3, b in -1.0e3f32..1.0e3) {
        let forward = f32::compare(a, b);
        let backward = f32::compare(b, a);
        prop_assert_eq!(forward, backward.reverse());
    }

    #[test]
    fn sum_paths_stay_close(values in prop::collection::vec(-1000.0f32..1000.0, 0..64)) {
        let kahan = f32::sum(&values, false);
        let speedy = f32::sum(&values, true);

        // 相对f64参照值，Kahan和的误差上界与元素个数无关
        let exact: f64 = values.iter().map(|&v| v as f64).sum();
        let abs_sum: f64 = values.iter().map(|&v| v.abs() as f64).sum();

        let kahan_bound = 4.0 * f32::EPSILON as f64 * abs_sum + 1e-3;
        let speedy_bound = values.len().max(1) as f64 * f32::EPSILON as f64 * abs_sum + 1e-3;
        prop_assert!((kahan as f64 - exact).abs() <= kahan_bound);
        prop_assert!((speedy as f64 - exact).abs() <= speedy_bound);
    }

    #[test]
    fn sum_empty_is_zero(is_speedy in any::<bool>()) {
        prop_assert_eq!(f32::sum(&[], is_speedy), 0.0);
    }

    #[test]
    fn sqrt_matches_std(v in 0.0f32..1.0e6) {
        let newton = <f32 as NumericKernel>::sqrt(v, false);
        prop_assert!((newton - v.sqrt()).abs() <= v.sqrt() * 1e-4 + 1e-4);

        let speedy = <f32 as NumericKernel>::sqrt(v, true);
        prop_assert!((speedy - v.sqrt()).abs() <= v.sqrt() * 1e-3 + 1e-3);
    }

    #[test]
    fn clamp_stays_in_bounds(v in -100.0f32..100.0, lo in -10.0f32..10.0, hi in -10.0f32..10.0) {
        let clamped = <f32 as NumericKernel>::clamp(v, lo, hi);
        let (mn, mx) = if lo > hi { (hi, lo) } else { (lo, hi) };
        prop_assert!(clamped >= mn - 1e-4 && clamped <= mx + 1e-4);
    }

    #[test]
    fn wrap_stays_in_bounds(v in -100.0f32..100.0, lo in -10.0f32..0.0, span in 0.5f32..10.0) {
        let hi = lo + span;
        let wrapped = f32::wrap(v, lo, hi);
        prop_assert!(wrapped >= lo - 1e-3 && wrapped <= hi + 1e-3);
    }

    #[test]
    fn normalize_yields_unit_vector(v in vec3_strategy()) {
        prop_assume!(v.magnitude() > 1e-2);
        prop_assert!((v.normalize().magnitude() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn cross_is_orthogonal(u in vec3_strategy(), v in vec3_strategy()) {
        let c = u.cross(&v);
        let tol = 1e-3 * u.magnitude() * v.magnitude() + 1e-3;
        prop_assert!(c.dot(&u).abs() <= tol);
        prop_assert!(c.dot(&v).abs() <= tol);
    }

    #[test]
    fn transpose_is_involution(m in mat4_strategy()) {
        let back = m.transpose().transpose();
        prop_assert_eq!(back.0.as_array(), m.0.as_array());
    }

    #[test]
    fn inverse_roundtrips_for_regular_matrices(m in mat4_strategy()) {
        let det = m.determinant();
        prop_assume!(det > 0.5);

        let product = m * m.inverse();
        for idx in 0..16 {
            let expected = if idx % 5 == 0 { 1.0 } else { 0.0 };
            prop_assert!(
                (product.0[idx] - expected).abs() < 1e-2,
                "entry {} = {}", idx, product.0[idx]
            );
        }
    }

    #[test]
    fn ray_parametrization(t in -100.0f32..100.0, v in vec3_strategy()) {
        prop_assume!(v.magnitude() > 1e-2);
        let ray = Ray3::new(Vec3::new(1.0, 2.0, 3.0), v);

        // 原点与正规化后的方向决定参数化
        let expected = ray.position + ray.direction * t;
        prop_assert_eq!(ray.at(t), expected);
        prop_assert!((ray.direction.magnitude() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn vec4_scalar_algebra(x in -50.0f32..50.0, y in -50.0f32..50.0, s in 0.1f32..10.0) {
        let v = Vec4::new(x, y, -x, -y);
        let scaled = v * s / s;
        for idx in 0..4 {
            prop_assert!((scaled[idx] - v[idx]).abs() < 1e-3);
        }
    }
}
