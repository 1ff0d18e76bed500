//! Simulation configuration options.

/// Configuration options for a simulation run.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use trips::SimulationOptions;
///
/// let options = SimulationOptions::default()
///     .with_trials(1_000)
///     .with_seed(7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimulationOptions {
    /// Number of trials (deals) to run.
    pub trials: usize,
    /// Seed for the shuffling RNG.
    pub seed: u64,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            trials: 30_000,
            seed: 0,
        }
    }
}

impl SimulationOptions {
    /// Sets the number of trials.
    ///
    /// # Example
    ///
    /// ```
    /// use trips::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_trials(500);
    /// assert_eq!(options.trials, 500);
    /// ```
    #[must_use]
    pub const fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the RNG seed.
    ///
    /// # Example
    ///
    /// ```
    /// use trips::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_seed(42);
    /// assert_eq!(options.seed, 42);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
