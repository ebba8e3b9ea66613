//! Pure computation helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `Vec3` inputs, making them straightforward to unit-test.

use bevy::prelude::{BVec3, Vec3};

/// Maps a noise value from the standard `[-1, 1]` range into `[min, max]`.
///
/// Noise generators (e.g. `Fbm<Perlin>`) produce values centred around zero.
/// This linearly rescales to an arbitrary output range.
///
/// # Examples
/// ```
/// # use free_roam::math::map_noise_to_range;
/// assert_eq!(map_noise_to_range(-1.0, 0.0, 10.0), 0.0);
/// assert_eq!(map_noise_to_range( 1.0, 0.0, 10.0), 10.0);
/// assert_eq!(map_noise_to_range( 0.0, 2.0, 6.0),  4.0);
/// ```
pub fn map_noise_to_range(noise_val: f64, min: f32, max: f32) -> f32 {
    min + ((noise_val as f32 + 1.0) / 2.0) * (max - min)
}

/// Applies a pitch change and clamps the result to `[min, max]` radians.
///
/// `current` is the existing pitch (from `Quat::to_euler`), `delta` the
/// desired change. Returns the new pitch, never outside the range, so the
/// camera cannot flip past its configured limits.
pub fn clamp_pitch(current: f32, delta: f32, min: f32, max: f32) -> f32 {
    (current + delta).clamp(min, max)
}

/// Projects a direction onto the XZ plane and renormalizes.
///
/// This is the "always parallel with the ground" forward: the camera can
/// look up or down freely, but W/S movement follows this flattened heading.
/// Returns `Vec3::ZERO` for straight-up/straight-down inputs.
pub fn flatten_to_xz(dir: Vec3) -> Vec3 {
    Vec3::new(dir.x, 0.0, dir.z).normalize_or_zero()
}

/// Interpolation fraction for the catch-up lerp toward the target position.
///
/// `dt * speed`, clamped to `[0, 1]` so large frame spikes cannot overshoot
/// the target.
pub fn catchup_t(dt: f32, speed: f32) -> f32 {
    (dt * speed).clamp(0.0, 1.0)
}

/// Overwrites the flagged axes of `current` with the matching axes of
/// `target`, leaving the rest untouched.
pub fn pin_axes(current: Vec3, target: Vec3, axes: BVec3) -> Vec3 {
    Vec3::new(
        if axes.x { target.x } else { current.x },
        if axes.y { target.y } else { current.y },
        if axes.z { target.z } else { current.z },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── map_noise_to_range ──────────────────────────────────────────

    #[test]
    fn noise_min_maps_to_range_min() {
        assert_eq!(map_noise_to_range(-1.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn noise_max_maps_to_range_max() {
        assert_eq!(map_noise_to_range(1.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn noise_zero_maps_to_midpoint() {
        let result = map_noise_to_range(0.0, 2.0, 6.0);
        assert!((result - 4.0).abs() < 1e-6);
    }

    // ── clamp_pitch ─────────────────────────────────────────────────

    #[test]
    fn small_delta_passes_through() {
        let pitch = clamp_pitch(0.0, 0.1, -1.4, 1.4);
        assert!((pitch - 0.1).abs() < 1e-6);
    }

    #[test]
    fn clamps_at_upper_limit() {
        let pitch = clamp_pitch(1.39, 0.5, -1.4, 1.4);
        assert!((pitch - 1.4).abs() < 1e-6);
    }

    #[test]
    fn clamps_at_lower_limit() {
        let pitch = clamp_pitch(-1.39, -0.5, -1.4, 1.4);
        assert!((pitch - (-1.4)).abs() < 1e-6);
    }

    // ── flatten_to_xz ───────────────────────────────────────────────

    #[test]
    fn level_direction_is_unchanged() {
        let f = flatten_to_xz(Vec3::new(0.0, 0.0, -1.0));
        assert!((f - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn pitched_direction_flattens_to_unit_length() {
        let f = flatten_to_xz(Vec3::new(1.0, -1.0, 0.0).normalize());
        assert!((f - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn straight_down_flattens_to_zero() {
        assert_eq!(flatten_to_xz(Vec3::NEG_Y), Vec3::ZERO);
    }

    // ── catchup_t ───────────────────────────────────────────────────

    #[test]
    fn normal_frame_scales_by_speed() {
        let t = catchup_t(0.016, 10.0);
        assert!((t - 0.16).abs() < 1e-6);
    }

    #[test]
    fn frame_spike_clamps_to_one() {
        assert_eq!(catchup_t(0.5, 10.0), 1.0);
    }

    #[test]
    fn never_negative() {
        assert_eq!(catchup_t(-0.1, 10.0), 0.0);
    }

    // ── pin_axes ────────────────────────────────────────────────────

    #[test]
    fn no_axes_flagged_keeps_current() {
        let c = Vec3::new(1.0, 2.0, 3.0);
        let t = Vec3::new(9.0, 9.0, 9.0);
        assert_eq!(pin_axes(c, t, BVec3::new(false, false, false)), c);
    }

    #[test]
    fn all_axes_flagged_takes_target() {
        let c = Vec3::new(1.0, 2.0, 3.0);
        let t = Vec3::new(9.0, 8.0, 7.0);
        assert_eq!(pin_axes(c, t, BVec3::new(true, true, true)), t);
    }

    #[test]
    fn xz_pin_leaves_height_alone() {
        let c = Vec3::new(1.0, 2.0, 3.0);
        let t = Vec3::new(9.0, 8.0, 7.0);
        assert_eq!(
            pin_axes(c, t, BVec3::new(true, false, true)),
            Vec3::new(9.0, 2.0, 7.0)
        );
    }
}
