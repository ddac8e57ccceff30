//! Pure computation helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `Vec3` inputs, making them straightforward to unit-test.

use bevy::prelude::Vec3;

/// Maps a noise value from the standard `[-1, 1]` range into `[min, max]`.
///
/// Noise generators (e.g. `Fbm<Perlin>`) produce values centred around zero.
/// This linearly rescales to an arbitrary output range.
///
/// # Examples
/// ```
/// # use hex_map::math::map_noise_to_range;
/// assert_eq!(map_noise_to_range(-1.0, 0.0, 10.0), 0.0);
/// assert_eq!(map_noise_to_range( 1.0, 0.0, 10.0), 10.0);
/// assert_eq!(map_noise_to_range( 0.0, 2.0, 6.0),  4.0);
/// ```
pub fn map_noise_to_range(noise_val: f64, min: f32, max: f32) -> f32 {
    min + ((noise_val as f32 + 1.0) / 2.0) * (max - min)
}

/// Splits `[0, 1]` into `levels` equal bands and returns the band `value` falls in.
///
/// Out-of-range input is clamped, so the result is always in `0..levels`.
/// Returns 0 when `levels` is 0.
///
/// # Examples
/// ```
/// # use hex_map::math::quantize_unit;
/// assert_eq!(quantize_unit(0.0, 4), 0);
/// assert_eq!(quantize_unit(0.3, 4), 1);
/// assert_eq!(quantize_unit(1.0, 4), 3);
/// ```
pub fn quantize_unit(value: f32, levels: u32) -> u32 {
    if levels == 0 {
        return 0;
    }
    let band = (value.clamp(0.0, 1.0) * levels as f32) as u32;
    band.min(levels - 1)
}

/// Computes the face normal of a triangle defined by three vertices.
///
/// Uses the cross product of edges `(v1 - v0)` and `(v2 - v0)`.
/// Returns `Vec3::ZERO` if the triangle is degenerate (collinear points).
pub fn compute_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    edge1.cross(edge2).normalize_or_zero()
}

/// Clamps a pitch angle so the camera cannot flip past vertical.
///
/// `current` is the existing pitch in radians (from `Quat::to_euler`).
/// `delta` is the desired change. The result is clamped to
/// `(-PI/2 + margin, PI/2 - margin)` and the *effective* delta is returned
/// (i.e. how much to actually rotate).
pub fn clamp_pitch(current: f32, delta: f32, margin: f32) -> f32 {
    let limit = std::f32::consts::FRAC_PI_2 - margin;
    let clamped = (current + delta).clamp(-limit, limit);
    clamped - current
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

    #[test]
    fn noise_works_with_negative_range() {
        let result = map_noise_to_range(0.0, -10.0, 10.0);
        assert!((result - 0.0).abs() < 1e-6);
    }

    // ── quantize_unit ───────────────────────────────────────────────

    #[test]
    fn quantize_covers_every_band() {
        let bands: Vec<u32> = (0..=100).map(|i| quantize_unit(i as f32 / 100.0, 5)).collect();
        for b in 0..5 {
            assert!(bands.contains(&b), "band {b} never hit");
        }
        for w in bands.windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn quantize_clamps_out_of_range() {
        assert_eq!(quantize_unit(-3.0, 4), 0);
        assert_eq!(quantize_unit(7.0, 4), 3);
        assert_eq!(quantize_unit(0.5, 0), 0);
    }

    // ── compute_normal ──────────────────────────────────────────────

    #[test]
    fn normal_of_xy_plane_triangle() {
        let n = compute_normal(Vec3::ZERO, Vec3::X, Vec3::Y);
        // Cross of X × Y = Z
        assert!((n - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn normal_of_xz_plane_triangle() {
        let n = compute_normal(Vec3::ZERO, Vec3::X, Vec3::Z);
        // Cross of X × Z = -Y
        assert!((n - Vec3::NEG_Y).length() < 1e-6);
    }

    #[test]
    fn degenerate_triangle_returns_zero() {
        // Collinear points
        let n = compute_normal(Vec3::ZERO, Vec3::X, Vec3::X * 2.0);
        assert_eq!(n, Vec3::ZERO);
    }

    // ── clamp_pitch ─────────────────────────────────────────────────

    #[test]
    fn small_delta_passes_through() {
        let delta = clamp_pitch(0.0, 0.1, 0.05);
        assert!((delta - 0.1).abs() < 1e-6);
    }

    #[test]
    fn clamps_at_upper_limit() {
        let limit = std::f32::consts::FRAC_PI_2 - 0.05;
        // Already near limit, trying to push past
        let delta = clamp_pitch(limit - 0.01, 0.1, 0.05);
        assert!(
            (delta - 0.01).abs() < 1e-4,
            "should clamp to remaining room"
        );
    }

    #[test]
    fn clamps_at_lower_limit() {
        let limit = -(std::f32::consts::FRAC_PI_2 - 0.05);
        let delta = clamp_pitch(limit + 0.01, -0.1, 0.05);
        assert!((delta - (-0.01)).abs() < 1e-4);
    }
}
