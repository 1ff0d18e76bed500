//! Monte Carlo driver.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::SimulationOptions;
use crate::report::Report;

#[cfg(feature = "parallel")]
mod parallel;

/// Estimates how often a five-card deal holds a three of a kind.
///
/// Every trial builds a fresh deck, shuffles it, deals the top five cards and
/// classifies the hand. The simulation owns its RNG, so two simulations built
/// from the same [`SimulationOptions`] produce the same report.
pub struct Simulation {
    /// Simulation options.
    pub options: SimulationOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Creates a new simulation seeded from `options.seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use trips::{Simulation, SimulationOptions};
    ///
    /// let options = SimulationOptions::default().with_trials(100).with_seed(3);
    /// let report = Simulation::new(options).run().unwrap();
    /// assert_eq!(report.series.len(), 100);
    /// ```
    #[must_use]
    pub fn new(options: SimulationOptions) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(options.seed),
        }
    }

    /// Runs a single trial and returns whether the hand was a three of a kind.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand cannot be dealt from the deck.
    pub fn trial(&mut self) -> Result<bool, DealError> {
        trial(&mut self.rng)
    }

    /// Runs all configured trials in order.
    ///
    /// # Errors
    ///
    /// Returns the first dealing error; the run stops there.
    pub fn run(&mut self) -> Result<Report, DealError> {
        log::debug!(
            "running {} trials with seed {}",
            self.options.trials,
            self.options.seed
        );

        let outcomes = (0..self.options.trials)
            .map(|_| self.trial())
            .collect::<Result<Vec<_>, _>>()?;
        let report = Report::from_outcomes(outcomes);

        log_report(&report);
        Ok(report)
    }
}

/// Deals one hand from a freshly shuffled deck and classifies it.
fn trial<R: Rng + ?Sized>(rng: &mut R) -> Result<bool, DealError> {
    let mut deck = Deck::new();
    deck.shuffle(rng);
    let hand = Hand::deal(&deck)?;

    let hit = hand.is_three_of_a_kind();
    if hit {
        log::trace!("three of a kind: {:?}", hand.cards());
    }
    Ok(hit)
}

fn log_report(report: &Report) {
    if let Some(probability) = report.final_probability() {
        log::info!(
            "{} of {} hands held three of a kind ({probability:.4}%)",
            report.hits,
            report.trials
        );
    }
}
