//! Noise sources.
//!
//! Coherent noise drives the slow random modulations of pitch and tenseness.
//! White noise feeds the aspiration input of the glottal source.

pub mod simplex;
pub mod white_noise;

use alloc::boxed::Box;
use dyn_clone::DynClone;

/// Deterministic, band-limited noise as a continuous function of time.
pub trait CoherentNoise: DynClone {
    /// Sample the noise at `t`.
    ///
    /// The same `t` always yields the same value. The range is
    /// approximately -1.0..1.0.
    fn sample_1d(&self, t: f64) -> f32;
}

dyn_clone::clone_trait_object!(CoherentNoise);

impl CoherentNoise for Box<dyn CoherentNoise> {
    #[inline]
    fn sample_1d(&self, t: f64) -> f32 {
        (**self).sample_1d(t)
    }
}
