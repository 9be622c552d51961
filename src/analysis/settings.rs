/// Runtime knobs for the equity half of an analysis.
///
/// Exhaustive enumeration is the default, matching what a final answer
/// should be. Preflop boards have 1.7 million completions per matchup, so
/// callers in a hurry switch to sampling with [`Settings::sampled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub exhaustive: bool,
    pub trials: usize,
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            exhaustive: true,
            trials: crate::MONTE_CARLO_TRIALS,
            seed: crate::MONTE_CARLO_SEED,
        }
    }
}

impl Settings {
    pub fn exhaustive(mut self) -> Self {
        self.exhaustive = true;
        self
    }
    pub fn sampled(mut self, trials: usize) -> Self {
        self.exhaustive = false;
        self.trials = trials;
        self
    }
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
