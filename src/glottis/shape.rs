//! Liljencrants-Fant waveform shape.
//!
//! The shape of one glottal cycle is derived in closed form from a single
//! tenseness value. Tenseness is first mapped to the `Rd` shape parameter,
//! from which the timing fractions of the cycle follow. Those in turn give
//! the coefficients of the two branches of the flow derivative waveform.
//!
//! All timing values are fractions of one period.

#[allow(unused_imports)]
use num_traits::float::Float;

/// Lower bound of the `Rd` shape parameter (tense voice).
pub const RD_MIN: f32 = 0.5;

/// Upper bound of the `Rd` shape parameter (lax voice).
pub const RD_MAX: f32 = 2.7;

/// Timing of one cycle as derived from tenseness.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LfTiming {
    /// Shape parameter, clamped to `RD_MIN..=RD_MAX`.
    pub rd: f32,
    pub ra: f32,
    pub rk: f32,
    pub rg: f32,

    /// Return phase time constant.
    pub ta: f32,
    /// Instant of maximum flow.
    pub tp: f32,
    /// Instant of maximum excitation (negative peak).
    pub te: f32,
}

impl LfTiming {
    pub fn from_tenseness(tenseness: f32) -> Self {
        let rd = (3.0 * (1.0 - tenseness)).clamp(RD_MIN, RD_MAX);
        let ra = -0.01 + 0.048 * rd;
        let rk = 0.224 + 0.118 * rd;
        let rg = (rk / 4.0) * (0.5 + 1.2 * rk) / (0.11 * rd - ra * (0.5 + 1.2 * rk));

        let ta = ra;
        let tp = 1.0 / (2.0 * rg);
        let te = tp + tp * rk;

        Self {
            rd,
            ra,
            rk,
            rg,
            ta,
            tp,
            te,
        }
    }
}

/// Coefficients of the waveform for one glottal cycle.
///
/// The all-zero default is not a usable shape: the return branch divides by
/// `delta`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ShapeCoefficients {
    pub epsilon: f32,
    pub shift: f32,
    pub delta: f32,
    pub omega: f32,
    pub alpha: f32,
    pub e0: f32,
    pub te: f32,
}

impl ShapeCoefficients {
    /// Solve the shape for a tenseness value.
    ///
    /// Near the clamp limits of `Rd` the logarithm below may receive a
    /// non-positive argument. The resulting NaN or infinity is returned as is
    /// and stays in effect until the next cycle is resolved.
    pub fn resolve(tenseness: f32) -> Self {
        Self::from_timing(&LfTiming::from_tenseness(tenseness))
    }

    pub fn from_timing(timing: &LfTiming) -> Self {
        let LfTiming { ta, tp, te, .. } = *timing;

        let epsilon = 1.0 / ta;
        let shift = (-epsilon * (1.0 - te)).exp();
        let delta = 1.0 - shift;

        // Area under the return branch, used to balance the open phase so
        // that the flow returns to zero at the end of the cycle.
        let rhs = ((1.0 / epsilon) * (shift - 1.0) + (1.0 - te) * shift) / delta;
        let lower = -(te - tp) / 2.0 + rhs;
        let upper = -lower;

        let omega = core::f32::consts::PI / tp;
        let s = (omega * te).sin();
        let y = -core::f32::consts::PI * s * upper / (tp * 2.0);
        let alpha = y.ln() / (tp / 2.0 - te);
        let e0 = -1.0 / (s * (alpha * te).exp());

        Self {
            epsilon,
            shift,
            delta,
            omega,
            alpha,
            e0,
            te,
        }
    }

    /// Evaluate the waveform at a normalized phase.
    ///
    /// Both branches meet at `te` with a value of -1.
    #[inline]
    pub fn waveform(&self, phase: f32) -> f32 {
        if phase > self.te {
            (-(-self.epsilon * (phase - self.te)).exp() + self.shift) / self.delta
        } else {
            self.e0 * (self.alpha * phase).exp() * (self.omega * phase).sin()
        }
    }

    /// Returns `true` if all coefficients are finite.
    pub fn is_finite(&self) -> bool {
        [
            self.epsilon,
            self.shift,
            self.delta,
            self.omega,
            self.alpha,
            self.e0,
            self.te,
        ]
        .iter()
        .all(|c| c.is_finite())
    }
}
