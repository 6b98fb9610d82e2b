//! Linear ramping of control values in rendering loops.

#[derive(Debug, Default, Copy, Clone)]
pub struct LinearRamp {
    value: f32,
    target: f32,
    increment: f32,
    remaining: usize,
}

impl LinearRamp {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            target: value,
            increment: 0.0,
            remaining: 0,
        }
    }

    /// Ramp from the current value to `target` within `size` samples.
    pub fn set_target(&mut self, target: f32, size: usize) {
        self.target = target;
        self.remaining = size;

        if size == 0 {
            self.value = target;
            self.increment = 0.0;
        } else {
            self.increment = (target - self.value) / (size as f32);
        }
    }

    /// Jump to a value, cancelling any ramp in progress.
    pub fn set(&mut self, value: f32) {
        self.set_target(value, 0);
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn is_ramping(&self) -> bool {
        self.remaining != 0
    }

    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f32 {
        match self.remaining {
            0 => {}
            1 => {
                self.value = self.target;
                self.remaining = 0;
            }
            _ => {
                self.value += self.increment;
                self.remaining -= 1;
            }
        }

        self.value
    }

    #[inline]
    pub fn subsample(&self, t: f32) -> f32 {
        if self.remaining == 0 {
            self.value
        } else {
            self.value + self.increment * t
        }
    }
}
