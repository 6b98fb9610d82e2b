//! Utility functions.
//!
//! Helpers for driving the glottal source from a host: voiceness mapping,
//! contour upsampling and parameter ramps.

pub mod linear_ramp;

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::glottis::GlottisParameters;

/// Single voiceness control mapped to tenseness and loudness.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Voiceness {
    tenseness: f32,
    loudness: f32,
}

impl Voiceness {
    /// Voiceness is clamped to 0.0 - 1.0
    pub fn new(voiceness: f32) -> Self {
        let voiceness = voiceness.clamp(0.0, 1.0);
        let tenseness =
            (1.0 - (voiceness * core::f32::consts::FRAC_PI_2).cos()).clamp(0.0, 1.0);
        let loudness = tenseness.powf(0.25);

        Self {
            tenseness,
            loudness,
        }
    }

    #[inline]
    pub fn tenseness(&self) -> f32 {
        self.tenseness
    }

    #[inline]
    pub fn loudness(&self) -> f32 {
        self.loudness
    }

    pub fn apply(&self, parameters: &mut GlottisParameters) {
        parameters.tenseness = self.tenseness;
        parameters.loudness = self.loudness;
    }
}

/// Upsample a control contour by inserting `steps` linearly interpolated
/// values between each pair of neighbours.
pub fn interpolate_steps(values: &[f32], steps: usize) -> impl Iterator<Item = f32> + '_ {
    let inner = values.windows(2).flat_map(move |pair| {
        let (start, end) = (pair[0], pair[1]);
        let interval = (end - start) / (steps + 1) as f32;

        (0..=steps).map(move |j| start + interval * j as f32)
    });

    inner.chain(values.last().copied())
}
