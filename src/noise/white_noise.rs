//! Fast pseudo random white noise.

// LCG constants from Numerical Recipes, as used throughout the Mutable Instruments code.

#[derive(Debug, Clone)]
pub struct WhiteNoise {
    state: u32,
}

impl Default for WhiteNoise {
    fn default() -> Self {
        Self::new(0x21)
    }
}

impl WhiteNoise {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    #[inline]
    pub fn seed(&mut self, seed: u32) {
        self.state = seed;
    }

    #[inline]
    pub fn get_word(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in range 0.0..=1.0
    #[inline]
    pub fn get_float(&mut self) -> f32 {
        self.get_word() as f32 / 4294967296.0
    }

    /// Uniform value in range -1.0..=1.0
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f32 {
        self.get_float() * 2.0 - 1.0
    }
}
