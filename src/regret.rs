/// Cumulative gap between the oracle, which always plays the best arm, and
/// the arms actually played. Every charge is non-negative so the total never
/// decreases over a run.
#[derive(Clone, Copy, Debug, Default)]
pub struct RegretAccumulator {
    total: f64,
}

impl RegretAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charge(&mut self, gap: f64) {
        debug_assert!(gap >= 0.0, "negative gap {gap}");
        self.total += gap;
    }

    // closed-form charge for `steps` plays of the same arm
    pub fn charge_many(&mut self, steps: usize, gap: f64) {
        debug_assert!(gap >= 0.0, "negative gap {gap}");
        self.total += (steps as f64) * gap;
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}
