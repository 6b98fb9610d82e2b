#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod glottis;
pub mod noise;
pub mod utils;

/// Running clock converting frame counts into absolute time.
///
/// The glottal source keeps no clock of its own, the host passes the time
/// of every sample. This is the usual way of producing it.
#[derive(Debug, Clone, Copy)]
pub struct SampleClock {
    /// Sample rate in Hz
    pub sample_rate_hz: f64,
    /// Reciprocal of sample rate (1.0 / sample_rate_hz) for fast multiplication
    pub inv_sr: f64,
    /// Index of the next frame
    frame: u64,
}

impl SampleClock {
    /// Create a new clock starting at frame 0.
    pub fn new(sample_rate_hz: f64) -> Self {
        Self {
            sample_rate_hz,
            inv_sr: 1.0 / sample_rate_hz,
            frame: 0,
        }
    }

    /// Index of the frame returned by the next call to `tick`.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Time in seconds of the next frame.
    #[inline]
    pub fn seconds(&self) -> f64 {
        self.frame as f64 * self.inv_sr
    }

    /// Return the time of the current frame and advance by one.
    #[inline]
    pub fn tick(&mut self) -> f64 {
        let seconds = self.seconds();
        self.frame += 1;

        seconds
    }

    /// Move the clock to an arbitrary frame.
    pub fn seek(&mut self, frame: u64) {
        self.frame = frame;
    }
}
