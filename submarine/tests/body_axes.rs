use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use submarine::{catalog, Quatf, Vec3f, Vehicle};

fn random_unit_quat(rng: &mut StdRng) -> Quatf {
    loop {
        let q = Quatf::from_xyzw(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let n2 = q.length_squared();
        if n2 > 0.01 && n2 <= 1.0 {
            return q.normalize();
        }
    }
}

#[test]
fn axes_are_orthonormal_for_random_orientations() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0b10);
    let mut vehicle = Vehicle::new(catalog::OHIO, catalog::ohio().unwrap());

    for _ in 0..1_000 {
        let q = random_unit_quat(&mut rng);
        vehicle.state_mut().set_orientation(q);
        let state = vehicle.state();

        let fwd = state.forward_axis();
        let up = state.up_axis();
        let right = state.right_axis();

        for axis in [fwd, up, right] {
            assert_abs_diff_eq!(axis.length(), 1.0, epsilon = 1e-4);
        }
        assert_abs_diff_eq!(fwd.dot(up), 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(fwd.dot(right), 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(up.dot(right), 0.0, epsilon = 1e-4);

        // right is exactly up × forward, and therefore opposite forward × up
        assert_eq!(right, up.cross(fwd));
        assert!(right.abs_diff_eq(-fwd.cross(up), 1e-6));
        // and matches the rotated body +X
        assert!(right.abs_diff_eq(q * Vec3f::X, 1e-4));
    }
}

#[test]
fn axes_follow_a_quarter_turn_yaw() {
    let mut vehicle = Vehicle::new(catalog::OHIO, catalog::ohio().unwrap());
    vehicle
        .state_mut()
        .set_orientation(Quatf::from_rotation_y(std::f32::consts::FRAC_PI_2));
    let state = vehicle.state();
    assert!(state.forward_axis().abs_diff_eq(Vec3f::X, 1e-6));
    assert!(state.up_axis().abs_diff_eq(Vec3f::Y, 1e-6));
    assert!(state.right_axis().abs_diff_eq(-Vec3f::Z, 1e-6));
}

#[test]
fn axes_track_latest_orientation() {
    let mut vehicle = Vehicle::new(catalog::OHIO, catalog::ohio().unwrap());
    let before = vehicle.state().forward_axis();
    vehicle
        .state_mut()
        .set_orientation(Quatf::from_rotation_x(-0.3));
    let after = vehicle.state().forward_axis();
    assert_ne!(before, after);
    // Negative rotation about +X lifts the nose.
    assert!(after.y > 0.0);
}
