//! Four-channel coherent noise used to break up straight hexagon edges.
//!
//! Each channel is an independent fbm over the XZ plane, sampled in `[0, 1]`.
//! Channels 0 and 2 jitter vertex X/Z, channel 1 offsets cell heights;
//! channel 3 is spare.

use bevy::prelude::{Reflect, Vec3, Vec4};
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::math;

/// Parameters of the perturbation noise.
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct NoiseSettings {
    /// Seed of channel 0; channel `i` uses `seed + i`.
    pub seed: u32,
    /// World-to-noise frequency multiplier.
    pub frequency: f64,
    /// Fbm octaves per channel.
    pub octaves: usize,
    /// Frequency multiplier between octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between octaves.
    pub persistence: f64,
    /// Maximum horizontal displacement of a mesh vertex.
    pub cell_perturb_strength: f32,
    /// Maximum vertical displacement of a cell's resting height.
    pub elevation_perturb_strength: f32,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            frequency: 0.01,
            octaves: 3,
            lacunarity: 2.0,
            persistence: 0.5,
            cell_perturb_strength: 4.0,
            elevation_perturb_strength: 1.5,
        }
    }
}

impl NoiseSettings {
    /// Same channels with both perturbations switched off; geometry comes out exact.
    #[cfg(test)]
    pub(crate) fn still() -> Self {
        Self {
            cell_perturb_strength: 0.0,
            elevation_perturb_strength: 0.0,
            ..Self::default()
        }
    }
}

/// Deterministic sampler built from [`NoiseSettings`].
#[derive(Clone)]
pub struct NoiseSampler {
    channels: [Fbm<Perlin>; 4],
    cell_perturb_strength: f32,
    elevation_perturb_strength: f32,
}

impl NoiseSampler {
    /// Builds the four fbm channels.
    pub fn new(settings: &NoiseSettings) -> Self {
        let channels = std::array::from_fn(|i| {
            Fbm::<Perlin>::new(settings.seed.wrapping_add(i as u32))
                .set_octaves(settings.octaves)
                .set_frequency(settings.frequency)
                .set_lacunarity(settings.lacunarity)
                .set_persistence(settings.persistence)
        });
        Self {
            channels,
            cell_perturb_strength: settings.cell_perturb_strength,
            elevation_perturb_strength: settings.elevation_perturb_strength,
        }
    }

    /// All four channels at `position`, each in `[0, 1]`. `Y` is ignored.
    pub fn sample(&self, position: Vec3) -> Vec4 {
        let point = [position.x as f64, position.z as f64];
        let [a, b, c, d] = self
            .channels
            .each_ref()
            .map(|fbm| math::map_noise_to_range(fbm.get(point), 0.0, 1.0).clamp(0.0, 1.0));
        Vec4::new(a, b, c, d)
    }

    /// Jitters `position` horizontally; `Y` is left untouched.
    pub fn perturb(&self, position: Vec3) -> Vec3 {
        let sample = self.sample(position);
        Vec3::new(
            position.x + (sample.x * 2.0 - 1.0) * self.cell_perturb_strength,
            position.y,
            position.z + (sample.z * 2.0 - 1.0) * self.cell_perturb_strength,
        )
    }

    /// Vertical offset applied once to a cell's resting height at `position`.
    pub fn elevation_offset(&self, position: Vec3) -> f32 {
        (self.sample(position).y * 2.0 - 1.0) * self.elevation_perturb_strength
    }
}
