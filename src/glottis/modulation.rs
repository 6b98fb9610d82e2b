//! Pitch and tenseness modulation.
//!
//! Besides the periodic vibrato, both controls receive slow random drift
//! taken from coherent noise at fixed rates. Since the noise is a function of
//! time only, the result is fully determined by the time and the parameters.

#[allow(unused_imports)]
use num_traits::float::Float;

use super::GlottisParameters;
use crate::noise::CoherentNoise;

/// Coherent noise sampled at a fixed rate and scaled by a fixed weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseTap {
    /// Rate in Hz
    pub rate: f64,
    pub weight: f32,
}

impl NoiseTap {
    pub const fn new(rate: f64, weight: f32) -> Self {
        Self { rate, weight }
    }

    #[inline]
    pub fn sample<N: CoherentNoise + ?Sized>(&self, noise: &N, seconds: f64) -> f32 {
        self.weight * noise.sample_1d(seconds * self.rate)
    }
}

/// Organic pitch drift, always present.
pub const PITCH_DRIFT: [NoiseTap; 2] = [NoiseTap::new(4.07, 0.02), NoiseTap::new(2.15, 0.04)];

/// Slow pitch wobble, scaled by the wobble amount.
pub const PITCH_WOBBLE: [NoiseTap; 2] = [NoiseTap::new(0.98, 0.2), NoiseTap::new(0.50, 0.4)];

/// Natural fluctuation of tenseness.
pub const TENSENESS_DRIFT: [NoiseTap; 2] = [NoiseTap::new(0.46, 0.10), NoiseTap::new(0.36, 0.05)];

/// Value tenseness relaxes towards as intensity drops.
pub const RELAXED_TENSENESS: f32 = 3.0;

#[inline]
fn sum_taps<N: CoherentNoise + ?Sized>(taps: &[NoiseTap], noise: &N, seconds: f64) -> f32 {
    taps.iter().map(|tap| tap.sample(noise, seconds)).sum()
}

/// Relative frequency deviation. The effective frequency is
/// `frequency * (1.0 + vibrato)`.
#[inline]
pub fn vibrato<N: CoherentNoise + ?Sized>(
    noise: &N,
    parameters: &GlottisParameters,
    seconds: f64,
) -> f32 {
    let phase = 2.0 * core::f64::consts::PI * seconds * parameters.vibrato_frequency as f64;

    let mut vibrato = parameters.vibrato_gain * phase.sin() as f32;
    vibrato += sum_taps(&PITCH_DRIFT, noise, seconds);

    if parameters.vibrato_wobble > 0.0 {
        vibrato += sum_taps(&PITCH_WOBBLE, noise, seconds) * parameters.vibrato_wobble;
    }

    vibrato
}

/// Tenseness after drift and intensity relaxation.
///
/// At full intensity only the drift is applied. Lower intensity pulls the
/// value towards `RELAXED_TENSENESS`, which lies outside the nominal range
/// on purpose. Clamping is left to the shape solver.
#[inline]
pub fn tenseness<N: CoherentNoise + ?Sized>(
    noise: &N,
    parameters: &GlottisParameters,
    seconds: f64,
) -> f32 {
    let mut tenseness = parameters.tenseness;
    tenseness += sum_taps(&TENSENESS_DRIFT, noise, seconds);
    tenseness += (RELAXED_TENSENESS - tenseness) * (1.0 - parameters.intensity);

    tenseness
}
