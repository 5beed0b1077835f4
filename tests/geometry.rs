use tabula::prelude::*;

fn init() {
    env_logger::builder().is_test(true).try_init().ok();
}

#[test]
fn rigid_chain_roundtrip() -> anyhow::Result<()> {
    init();
    let mut chain = Transform3::<f64>::from_translation(vec3(1.0, 2.0, 3.0));
    chain *= Transform3::from_rotation_z(30.0_f64.deg());
    chain *= Transform3::from_rotation_x(0.125_f64.rnd());
    chain *= Transform3::from_rotation_y(1.0_f64.rad());

    let inverse = chain.inverse()?;
    assert_approx_eq!(inverse, chain.quick_inverse()).abs(1e-12);
    assert_approx_eq!(chain * inverse, Transform3::identity()).abs(1e-12);

    let point = vec3(-4.0, 0.5, 9.0);
    let moved = chain.transform_point(point);
    assert_approx_eq!(inverse.transform_point(moved), point).abs(1e-12);

    // Rigid transforms preserve lengths and angles.
    let a = vec3(1.0, 1.0, 0.0);
    let b = vec3(0.0, 2.0, -1.0);
    let ta = chain.transform_direction(a);
    let tb = chain.transform_direction(b);
    assert_approx_eq!(ta.length(), a.length()).abs(1e-12);
    assert_approx_eq!(ta | tb, a | b).abs(1e-12);
    assert_approx_eq!(ta ^ tb, chain.transform_direction(a ^ b)).abs(1e-12);
    Ok(())
}

#[test]
fn axes_are_orthonormal() {
    let t = Transform3::<f64>::from_rotation_x(45.0_f64.deg())
        * Transform3::from_rotation_z(10.0_f64.deg());
    let (u, v, w) = (t.ru(), t.rv(), t.rw());
    assert_approx_eq!(u.length(), 1.0).abs(1e-12);
    assert_approx_eq!(v.length(), 1.0).abs(1e-12);
    assert_approx_eq!(u | v, 0.0).abs(1e-12);
    assert_approx_eq!(u ^ v, w).abs(1e-12);
    assert_approx_eq!(t.rotation_block().determinant().unwrap(), 1.0).abs(1e-12);
}

#[test]
fn points_and_directions() {
    init();
    let t = Transform2::from_translation_rotation(vec2(10.0, 0.0), 90.0_f64.deg());

    let point = HVec2::point(vec2(1.0, 0.0));
    let direction = HVec2::direction(vec2(1.0, 0.0));
    assert_approx_eq!(t * point, HVec2::point(vec2(10.0, 1.0))).abs(1e-12);
    assert_approx_eq!(t * direction, HVec2::direction(vec2(0.0, 1.0))).abs(1e-12);

    // point - point = direction, point + direction = point
    let a = HVec2::point(vec2(3.0, 4.0));
    let b = HVec2::point(vec2(1.0, 1.0));
    let d = a - b;
    assert!(d.is_direction());
    assert_eq!(d.norm(), 13.0_f64.sqrt());
    assert_eq!(b + d, a);

    let mut scaled = HVec2::new(vec2(6.0, 3.0), 3.0);
    scaled.homogenize();
    assert_eq!(scaled, HVec2::point(vec2(2.0, 1.0)));
}

#[test]
fn rotation_angle_roundtrip() {
    let mut t = Transform2::<f32>::identity();
    t.set_rotation_angle(-45_i32.deg());
    assert_approx_eq!(t.rotation_angle().to::<Degree<f64>>().count(), -45.0).abs(1e-4);

    t.set_translation(vec2(1.0, -1.0));
    assert_eq!(t.translation(), vec2(1.0, -1.0));
    assert_approx_eq!(t.rotation_angle().radians(), -std::f64::consts::FRAC_PI_4).abs(1e-6);
}

#[test]
fn matrix_and_transform_interop() {
    let t = Transform2::<f64>::from_translation(vec2(2.0, 3.0));
    let m: Mat3d = t.into_matrix();
    let point = vec3(1.0, 1.0, 1.0);
    assert_eq!(m * point, vec3(3.0, 4.0, 1.0));
    assert_eq!(Vector::from_expr(&m * HVec2::point(vec2(1.0, 1.0))), vec3(3.0, 4.0, 1.0));
}
