use bevy::prelude::*;
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::hex::HexGrid;
use crate::math;

/// Initial elevations sampled from a heightfield.
#[derive(Clone, Debug, Reflect)]
pub struct ReliefSettings {
    /// When `false` the map starts flat.
    pub enabled: bool,
    /// Seed for the height noise generator.
    pub seed: u32,
    /// Number of octaves for height noise.
    pub octaves: usize,
    /// Spatial scale divisor for height noise sampling.
    pub scale: f64,
    /// Highest elevation produced; also the brush's upper bound.
    pub max_elevation: i32,
}

impl Default for ReliefSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            seed: 42,
            octaves: 4,
            scale: 80.0,
            max_elevation: 5,
        }
    }
}

/// Palette entry for `elevation` when `0..=max_elevation` is spread evenly over the palette.
pub fn band_color(palette: &[Color], elevation: i32, max_elevation: i32) -> Option<Color> {
    if palette.is_empty() {
        return None;
    }
    let levels = max_elevation.max(0) + 1;
    let band = elevation.clamp(0, levels - 1) as usize * palette.len() / levels as usize;
    palette.get(band).copied()
}

/// Assigns every cell an elevation from the heightfield and a color by elevation band.
pub fn apply_relief(grid: &mut HexGrid, relief: &ReliefSettings, palette: &[Color]) {
    let height_fbm: Fbm<Perlin> = Fbm::new(relief.seed).set_octaves(relief.octaves);
    let levels = (relief.max_elevation.max(0) + 1) as u32;

    for i in 0..grid.len() {
        let Some(pos) = grid.cell(i).map(|cell| cell.position()) else {
            continue;
        };
        let noise_val = height_fbm.get([pos.x as f64 / relief.scale, pos.z as f64 / relief.scale]);
        let height = math::map_noise_to_range(noise_val, 0.0, 1.0);
        let elevation = math::quantize_unit(height, levels) as i32;

        grid.set_elevation(i, elevation);
        if let Some(color) = band_color(palette, elevation, relief.max_elevation) {
            grid.set_color(i, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::{NoiseSampler, NoiseSettings};

    fn palette() -> Vec<Color> {
        vec![Color::BLACK, Color::srgb(0.5, 0.5, 0.5), Color::WHITE]
    }

    fn grid() -> HexGrid {
        HexGrid::new(10, 8, Color::WHITE, NoiseSampler::new(&NoiseSettings::default()))
    }

    // ── band_color ──────────────────────────────────────────────────

    #[test]
    fn bands_spread_over_palette() {
        let p = palette();
        assert_eq!(band_color(&p, 0, 5), Some(Color::BLACK));
        assert_eq!(band_color(&p, 5, 5), Some(Color::WHITE));
        assert_eq!(band_color(&p, 2, 5), Some(p[1]));
    }

    #[test]
    fn bands_clamp_out_of_range_elevations() {
        let p = palette();
        assert_eq!(band_color(&p, -3, 5), Some(Color::BLACK));
        assert_eq!(band_color(&p, 99, 5), Some(Color::WHITE));
        assert_eq!(band_color(&[], 1, 5), None);
    }

    // ── apply_relief ────────────────────────────────────────────────

    #[test]
    fn relief_stays_within_range() {
        let mut g = grid();
        let relief = ReliefSettings::default();
        apply_relief(&mut g, &relief, &palette());
        for cell in g.cells() {
            assert!((0..=relief.max_elevation).contains(&cell.elevation()));
        }
    }

    #[test]
    fn relief_colors_follow_elevation() {
        let mut g = grid();
        let relief = ReliefSettings::default();
        let p = palette();
        apply_relief(&mut g, &relief, &p);
        for cell in g.cells() {
            let expected = band_color(&p, cell.elevation(), relief.max_elevation)
                .map(|c| c.to_linear());
            assert_eq!(Some(cell.color()), expected);
        }
    }

    #[test]
    fn relief_is_deterministic() {
        let relief = ReliefSettings::default();
        let mut a = grid();
        let mut b = grid();
        apply_relief(&mut a, &relief, &palette());
        apply_relief(&mut b, &relief, &palette());
        let ea: Vec<i32> = a.cells().iter().map(|c| c.elevation()).collect();
        let eb: Vec<i32> = b.cells().iter().map(|c| c.elevation()).collect();
        assert_eq!(ea, eb);
    }

    #[test]
    fn zero_max_elevation_keeps_map_flat() {
        let mut g = grid();
        let relief = ReliefSettings {
            max_elevation: 0,
            ..ReliefSettings::default()
        };
        apply_relief(&mut g, &relief, &palette());
        assert!(g.cells().iter().all(|c| c.elevation() == 0));
    }
}
