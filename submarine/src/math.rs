// Shared math types are Bevy's (glam) f32 types re-exported under the names
// the rest of the workspace uses.
pub use bevy_math::{Mat3 as Mat3f, Quat as Quatf, Vec3 as Vec3f};

// Basis: standard RHS with +Z forward, +Y up, +X right
pub const BODY_FWD: Vec3f = Vec3f::new(0.0, 0.0, 1.0);
pub const BODY_RIGHT: Vec3f = Vec3f::new(1.0, 0.0, 0.0);
pub const BODY_UP: Vec3f = Vec3f::new(0.0, 1.0, 0.0);

/// Unit-length copy of `q`. Degenerate input (zero or non-finite length)
/// collapses to identity instead of producing NaNs.
pub fn normalize_or_identity(q: Quatf) -> Quatf {
    let n2 = q.length_squared();
    if !(n2 > 0.0 && n2.is_finite()) {
        return Quatf::IDENTITY;
    }
    q * n2.sqrt().recip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_scaled_quaternion() {
        let q = Quatf::from_xyzw(0.0, 2.0, 0.0, 2.0);
        let n = normalize_or_identity(q);
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!(n.abs_diff_eq(Quatf::from_rotation_y(std::f32::consts::FRAC_PI_2), 1e-6));
    }

    #[test]
    fn small_but_valid_quaternion_keeps_its_rotation() {
        let q = Quatf::from_xyzw(0.0, 1e-4, 0.0, 1e-4);
        let n = normalize_or_identity(q);
        assert!((n.length() - 1.0).abs() < 1e-5);
        assert!(n.abs_diff_eq(Quatf::from_rotation_y(std::f32::consts::FRAC_PI_2), 1e-5));
    }

    #[test]
    fn zero_quaternion_becomes_identity() {
        let n = normalize_or_identity(Quatf::from_xyzw(0.0, 0.0, 0.0, 0.0));
        assert_eq!(n, Quatf::IDENTITY);
        let n = normalize_or_identity(Quatf::from_xyzw(f32::NAN, 0.0, 0.0, 1.0));
        assert_eq!(n, Quatf::IDENTITY);
    }
}
