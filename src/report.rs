//! Simulation result types.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// Result of a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Number of trials run.
    pub trials: usize,
    /// Number of trials whose hand was a three of a kind.
    pub hits: usize,
    /// Running probability (%) after each trial. Entry `i - 1` holds the value
    /// after exactly `i` trials.
    pub series: Vec<f64>,
}

impl Report {
    /// Builds a report from per-trial outcomes, in trial order.
    #[must_use]
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let outcomes = outcomes.into_iter();
        let mut series = Vec::with_capacity(outcomes.size_hint().0);
        let mut hits = 0;

        for (i, hit) in (1..).zip(outcomes) {
            if hit {
                hits += 1;
            }
            series.push(running_probability(hits, i));
        }

        Self {
            trials: series.len(),
            hits,
            series,
        }
    }

    /// Returns the running probability after the last trial, or `None` if no
    /// trials were run.
    #[must_use]
    pub fn final_probability(&self) -> Option<f64> {
        self.series.last().copied()
    }

    /// Returns the running probability after exactly `trial` trials
    /// (1-indexed).
    #[must_use]
    pub fn probability_after(&self, trial: usize) -> Option<f64> {
        trial.checked_sub(1).and_then(|i| self.series.get(i).copied())
    }
}

impl fmt::Display for Report {
    /// Writes the final probability with four decimal places.
    ///
    /// ```
    /// use trips::Report;
    ///
    /// let report = Report::from_outcomes([true, false, false, false]);
    /// assert_eq!(
    ///     report.to_string(),
    ///     "The final computed probability of drawing a Three of a Kind is approximately 25.0000%"
    /// );
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.final_probability() {
            Some(probability) => write!(
                f,
                "The final computed probability of drawing a Three of a Kind is approximately {probability:.4}%"
            ),
            None => f.write_str("No hands were dealt"),
        }
    }
}

/// Percentage of `hits` over `trials`.
#[must_use]
pub fn running_probability(hits: usize, trials: usize) -> f64 {
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for trial counts"
    )]
    let ratio = hits as f64 / trials as f64;
    ratio * 100.0
}
