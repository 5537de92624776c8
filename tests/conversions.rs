//! 回转表现变换的往返测试、布局保证与glam对照
//!
//! 渲染层照搬字节上传聚合结构体，序列化与内存布局在此锁定。

use std::f32::consts::PI;

use engine_math::{
    make_rotate_axis, make_scaler3, make_transit3, EulerRot, HandSide, Mat4, Quat, Rotation,
    Vec3, Vec4, VectorOps,
};

fn assert_near(lhs: f32, rhs: f32, tol: f32) {
    assert!((lhs - rhs).abs() < tol, "{lhs} != {rhs}");
}

#[test]
fn rotation_complex_roundtrip_at_sample_angles() {
    for radian in [0.0f32, PI / 6.0, PI / 4.0, PI / 2.0, PI] {
        let rot = Rotation::from_radian(radian);
        let back = rot.to_cmp().to_rot();

        // 模2π等价
        let diff = (back.radian() - radian).rem_euclid(2.0 * PI);
        assert!(diff < 1e-4 || (2.0 * PI - diff) < 1e-4, "radian {radian}");
    }
}

#[test]
fn quat_matrix_roundtrip_double_cover() {
    let samples = [
        Quat::UNIT,
        Quat::new(0.5, 0.5, 0.5, 0.5),
        Quat::new(0.0, 1.0, 0.0, 0.0),
        Quat::new(2.0, -1.0, 0.5, 3.0).normalize(),
        Quat::new(-0.2, 0.8, -0.4, 0.4).normalize(),
    ];

    for q in samples {
        let back = q.to_mtx().to_qt();
        let same = (0..4).all(|i| (back[i] - q[i]).abs() < 1e-4);
        let flipped = (0..4).all(|i| (back[i] + q[i]).abs() < 1e-4);
        assert!(same || flipped, "{back:?} vs {q:?}");
    }
}

#[test]
fn axis_angle_matrix_matches_glam() {
    let cases = [
        (Vec3::new(0.0, 0.0, 1.0), PI / 2.0),
        (Vec3::new(0.0, 1.0, 0.0), PI / 3.0),
        (Vec3::new(1.0, 1.0, 1.0), 1.2),
        (Vec3::new(-1.0, 2.0, 0.5), -0.7),
    ];
    let probes = [
        Vec4::new(1.0, 0.0, 0.0, 1.0),
        Vec4::new(0.0, 1.0, 0.0, 1.0),
        Vec4::new(1.0, 2.0, 3.0, 1.0),
    ];

    for (axis, radian) in cases {
        let ours = make_rotate_axis(HandSide::RHS, axis, Rotation::from_radian(radian));

        let n = axis.normalize();
        let theirs =
            glam::Mat4::from_axis_angle(glam::Vec3::new(n.x, n.y, n.z), radian);

        for probe in probes {
            let a = ours * probe;
            let b = theirs * glam::Vec4::new(probe.x, probe.y, probe.z, probe.w);
            assert_near(a.x, b.x, 1e-4);
            assert_near(a.y, b.y, 1e-4);
            assert_near(a.z, b.z, 1e-4);
            assert_near(a.w, b.w, 1e-4);
        }
    }
}

#[test]
fn composed_transform_matches_glam() {
    let ours = make_transit3(HandSide::RHS, Vec3::new(1.0, -2.0, 0.5))
        * make_rotate_axis(
            HandSide::RHS,
            Vec3::new(0.0, 1.0, 0.0),
            Rotation::from_radian(0.9),
        )
        * make_scaler3(Vec3::new(2.0, 3.0, 4.0));

    let theirs = glam::Mat4::from_translation(glam::Vec3::new(1.0, -2.0, 0.5))
        * glam::Mat4::from_rotation_y(0.9)
        * glam::Mat4::from_scale(glam::Vec3::new(2.0, 3.0, 4.0));

    let probe = Vec4::new(0.3, -1.2, 2.0, 1.0);
    let a = ours * probe;
    let b = theirs * glam::Vec4::new(probe.x, probe.y, probe.z, probe.w);
    assert_near(a.x, b.x, 1e-4);
    assert_near(a.y, b.y, 1e-4);
    assert_near(a.z, b.z, 1e-4);
    assert_near(a.w, b.w, 1e-4);
}

#[test]
fn serde_roundtrip() -> anyhow::Result<()> {
    let v = Vec3::new(1.0, -2.5, 0.125);
    let json = serde_json::to_string(&v)?;
    let back: Vec3 = serde_json::from_str(&json)?;
    assert_eq!(back, v);

    let q = Quat::new(0.1, 0.2, 0.3, 0.9);
    let back: Quat = serde_json::from_str(&serde_json::to_string(&q)?)?;
    assert_eq!(back, q);

    let e = EulerRot::from_degrees(10.0, 20.0, 30.0);
    let back: EulerRot = serde_json::from_str(&serde_json::to_string(&e)?)?;
    assert_eq!(back, e);

    let m = make_transit3(HandSide::RHS, Vec3::new(1.0, 2.0, 3.0));
    let back: Mat4 = serde_json::from_str(&serde_json::to_string(&m)?)?;
    assert_eq!(back, m);

    Ok(())
}

#[test]
fn constant_buffer_byte_layout() {
    // 行主序16个连续浮点数：m03位于第3..4个浮点数
    let m = make_transit3(HandSide::RHS, Vec3::new(7.0, 8.0, 9.0));
    let bytes: &[u8] = bytemuck::bytes_of(&m.0);
    assert_eq!(bytes.len(), 64);

    let m03 = f32::from_ne_bytes(bytes[12..16].try_into().unwrap());
    let m13 = f32::from_ne_bytes(bytes[28..32].try_into().unwrap());
    let m23 = f32::from_ne_bytes(bytes[44..48].try_into().unwrap());
    assert_eq!((m03, m13, m23), (7.0, 8.0, 9.0));

    // 连续上传多个负载
    let payload = [m.0, Mat4::UNIT.0];
    let slice: &[u8] = bytemuck::cast_slice(&payload);
    assert_eq!(slice.len(), 128);

    let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(bytemuck::bytes_of(&v.0).len(), 16);
}

#[test]
fn euler_quat_agree_with_matrix_route() {
    for (x, y, z) in [(15.0f32, -30.0, 45.0), (0.0, 90.0, 0.0), (10.0, 0.0, -80.0)] {
        let e = EulerRot::from_degrees(x, y, z);

        let via_quat = e.to_qt().to_mtx();
        let direct = e.to_mtx();
        for idx in 0..16 {
            assert_near(via_quat.0[idx], direct.0[idx], 1e-4);
        }
    }
}
