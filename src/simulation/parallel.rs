use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::error::DealError;
use crate::report::Report;

use super::{Simulation, log_report, trial};

impl Simulation {
    /// Runs all configured trials across the rayon thread pool.
    ///
    /// Trials are split into `chunks` contiguous ranges. Chunk `k` draws from
    /// its own RNG stream `k` of the configured seed, so results depend on
    /// the seed and the chunk count but not on thread scheduling. Outcomes
    /// are joined back in trial order before the series is built.
    ///
    /// # Errors
    ///
    /// Returns a dealing error if any trial fails.
    pub fn run_parallel(&self, chunks: usize) -> Result<Report, DealError> {
        let trials = self.options.trials;
        let seed = self.options.seed;
        let chunks = chunks.clamp(1, trials.max(1));
        let size = trials.div_ceil(chunks);

        log::debug!("running {trials} trials in {chunks} chunks with seed {seed}");

        let outcomes = (0..chunks)
            .into_par_iter()
            .map(|k| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                rng.set_stream(k as u64);
                let start = k * size;
                let end = (start + size).min(trials);
                (start..end)
                    .map(|_| trial(&mut rng))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        let report = Report::from_outcomes(outcomes.into_iter().flatten());

        log_report(&report);
        Ok(report)
    }
}
