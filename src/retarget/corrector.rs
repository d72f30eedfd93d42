//! Coordinate and unit correction between authoring conventions.
//!
//! Mixamo clips are authored in centimeters; target rigs are in meters.
//! Legacy-schema rigs additionally disagree with the source on X/Z
//! handedness, so their rotation and translation channels need a sign flip
//! on those axes. The policy is a fixed table keyed by schema version and
//! component index; it never inspects clip content to infer handedness.

use glam::{Quat, Vec3};

use crate::humanoid::SchemaVersion;

/// Unit conversion applied to every translation component (cm → m).
pub const POSITION_UNIT_SCALE: f32 = 0.01;

/// Corrects one quaternion component at `index` (x=0, y=1, z=2, w=3).
///
/// Legacy rigs flip the sign at even component indices, i.e. x and z.
#[must_use]
pub fn correct_rotation_component(raw: f32, index: usize, version: SchemaVersion) -> f32 {
    if version.is_legacy() && index % 2 == 0 {
        -raw
    } else {
        raw
    }
}

/// Corrects one translation component at `index` (x=0, y=1, z=2).
///
/// The unit scale is unconditional; legacy rigs additionally negate every
/// component except y, with the negation applied before the scale.
#[must_use]
pub fn correct_translation_component(raw: f32, index: usize, version: SchemaVersion) -> f32 {
    let signed = if version.is_legacy() && index % 3 != 1 {
        -raw
    } else {
        raw
    };
    signed * POSITION_UNIT_SCALE
}

/// Corrects a full rotation sample.
#[must_use]
pub fn correct_rotation(sample: Quat, version: SchemaVersion) -> Quat {
    Quat::from_xyzw(
        correct_rotation_component(sample.x, 0, version),
        correct_rotation_component(sample.y, 1, version),
        correct_rotation_component(sample.z, 2, version),
        correct_rotation_component(sample.w, 3, version),
    )
}

/// Corrects a full translation sample.
#[must_use]
pub fn correct_translation(sample: Vec3, version: SchemaVersion) -> Vec3 {
    Vec3::new(
        correct_translation_component(sample.x, 0, version),
        correct_translation_component(sample.y, 1, version),
        correct_translation_component(sample.z, 2, version),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_current_passes_through() {
        let q = Quat::from_xyzw(1.0, 2.0, 3.0, 4.0);
        assert_eq!(correct_rotation(q, SchemaVersion::Current), q);
    }

    #[test]
    fn test_rotation_legacy_flips_x_and_z() {
        let q = Quat::from_xyzw(1.0, 2.0, 3.0, 4.0);
        let corrected = correct_rotation(q, SchemaVersion::Legacy);
        assert_eq!(corrected, Quat::from_xyzw(-1.0, 2.0, -3.0, 4.0));
    }

    #[test]
    fn test_translation_current_scales_only() {
        let v = Vec3::new(100.0, 200.0, 300.0);
        let corrected = correct_translation(v, SchemaVersion::Current);
        assert_eq!(corrected, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_translation_legacy_flips_x_and_z_then_scales() {
        let v = Vec3::new(2.0, 3.0, 4.0);
        let corrected = correct_translation(v, SchemaVersion::Legacy);
        assert_eq!(corrected, Vec3::new(-0.02, 0.03, -0.04));
    }

    #[test]
    fn test_translation_zero_is_fixed_point() {
        for version in [SchemaVersion::Legacy, SchemaVersion::Current] {
            assert_eq!(correct_translation(Vec3::ZERO, version), Vec3::ZERO);
        }
    }
}
