//! Glottal source.
//!
//! Generates the pressure wave leaving the vocal folds, one sample per call.
//! The voiced part follows the Liljencrants-Fant model. Its shape is solved
//! from tenseness once per glottal cycle and stays frozen until the next
//! cycle starts, even when tenseness changes in between. Aspiration noise
//! is mixed in according to tenseness.
//!
//! The output is meant to excite a vocal tract filter. The tract also reads
//! `GlottisParameters::noise_modulator` to scale turbulence at constrictions.

pub mod modulation;
pub mod shape;

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::noise::white_noise::WhiteNoise;
use crate::noise::CoherentNoise;
use crate::SampleClock;
use shape::ShapeCoefficients;

/// Tenseness the shape is primed with before the first cycle boundary.
pub const DEFAULT_TENSENESS: f32 = 0.6;

/// Gain of the aspiration noise.
const ASPIRATION_GAIN: f32 = 0.04;

/// Gain of the turbulence side channel at zero intensity.
const TRACT_NOISE_GAIN: f32 = 0.1;

/// Per-sample control snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlottisParameters {
    /// Fundamental frequency in Hz.
    /// Must be finite and positive, this is not checked.
    pub frequency: f32,

    /// Vocal fold tension, lax to tense.
    /// Range: 0.0 - 1.0
    pub tenseness: f32,

    /// Voicing level. Lower values also relax the fold tension.
    /// Range: 0.0 - 1.0
    pub intensity: f32,

    /// Gain of the voiced part.
    pub loudness: f32,

    /// Depth of the periodic vibrato, relative to frequency.
    pub vibrato_gain: f32,

    /// Rate of the periodic vibrato in Hz.
    pub vibrato_frequency: f32,

    /// Amount of slow random pitch wobble. Disabled at 0.0.
    pub vibrato_wobble: f32,

    /// White noise input for the aspiration.
    /// Range: -1.0 - 1.0
    pub noise: f32,

    /// Written by the glottal source: turbulence gain for the vocal tract.
    pub noise_modulator: f32,
}

impl Default for GlottisParameters {
    fn default() -> Self {
        Self {
            frequency: 140.0,
            tenseness: DEFAULT_TENSENESS,
            intensity: 1.0,
            loudness: 1.0,
            vibrato_gain: 0.005,
            vibrato_frequency: 6.0,
            vibrato_wobble: 0.0,
            noise: 0.0,
            noise_modulator: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GlottalSource<N> {
    noise: N,

    /// Time in seconds at which the current cycle started.
    cycle_start: f64,

    /// Shape of the current cycle.
    shape: ShapeCoefficients,
}

impl<N: CoherentNoise> GlottalSource<N> {
    pub fn new(noise: N) -> Self {
        let mut source = Self {
            noise,
            cycle_start: 0.0,
            shape: ShapeCoefficients::default(),
        };
        source.init(DEFAULT_TENSENESS);

        source
    }

    /// Restart the cycle clock at time 0 and prime the shape for a tenseness.
    pub fn init(&mut self, tenseness: f32) {
        self.cycle_start = 0.0;
        self.shape = ShapeCoefficients::resolve(tenseness);

        log::debug!("Glottal source primed with tenseness {tenseness}");
    }

    /// Shape of the current cycle.
    pub fn shape(&self) -> &ShapeCoefficients {
        &self.shape
    }

    /// Start time of the current cycle in seconds.
    pub fn cycle_start(&self) -> f64 {
        self.cycle_start
    }

    /// Coherent noise driving the pitch and tenseness drift.
    pub fn noise_source(&self) -> &N {
        &self.noise
    }

    /// Generate the sample at time `seconds`.
    ///
    /// Time must not decrease between calls. A jump over several periods is
    /// treated as a single cycle boundary. `parameters.noise_modulator` is
    /// updated as a side effect.
    pub fn process(&mut self, parameters: &mut GlottisParameters, seconds: f64) -> f32 {
        let intensity = parameters.intensity;

        let vibrato = modulation::vibrato(&self.noise, parameters, seconds);
        let frequency = parameters.frequency * (1.0 + vibrato);
        let tenseness = modulation::tenseness(&self.noise, parameters, seconds);

        let period = 1.0 / frequency as f64;
        let elapsed = seconds - self.cycle_start;
        let mut phase = elapsed / period;

        if phase >= 1.0 {
            // The new start carries the overshoot past the boundary, and the
            // phase of this sample is taken relative to time zero.
            self.cycle_start = seconds + elapsed % period;
            phase = self.cycle_start / period;
            self.shape = ShapeCoefficients::resolve(tenseness);
        }

        parameters.noise_modulator = (1.0 - intensity) * TRACT_NOISE_GAIN;

        // NaN tenseness passes through to the output.
        let tenseness = if tenseness < 0.0 { 0.0 } else { tenseness };
        let aspiration = parameters.noise * (1.0 - tenseness.sqrt()) * ASPIRATION_GAIN;
        let voice = self.shape.waveform(phase as f32) * intensity * parameters.loudness;

        aspiration + voice
    }

    /// Render a block, drawing the aspiration input from `white` and the
    /// time of each frame from `clock`.
    pub fn render(
        &mut self,
        parameters: &mut GlottisParameters,
        clock: &mut SampleClock,
        white: &mut WhiteNoise,
        out: &mut [f32],
    ) {
        for sample in out.iter_mut() {
            parameters.noise = white.next();
            *sample = self.process(parameters, clock.tick());
        }
    }
}
