// Wheel step accumulator
#[cfg(test)]
#[path = "wheel_test.rs"]
mod wheel_test;

#[derive(Debug, Clone, Default)]
pub struct WheelState {
    /// Fractional steps not yet applied.
    pub remainder: f64,
}

impl WheelState {
    /// Add `steps` and return the whole steps ready to apply, clamped to
    /// `±max_steps`. Small trackpad deltas add up across events.
    pub fn accumulate(&mut self, steps: f64, max_steps: i32) -> i32 {
        if !steps.is_finite() {
            return 0;
        }
        let total = self.remainder + steps;
        let whole = total.trunc();
        self.remainder = total - whole;
        #[allow(clippy::cast_possible_truncation)]
        let whole = whole.clamp(f64::from(-max_steps), f64::from(max_steps)) as i32;
        whole
    }

    pub fn reset(&mut self) {
        self.remainder = 0.0;
    }
}
