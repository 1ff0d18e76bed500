//! Monte Carlo estimate of the probability that a five-card deal holds a three
//! of a kind, with optional `no_std` support.
//!
//! The crate provides [`Card`], [`Deck`] and [`Hand`] value types, a seeded
//! [`Simulation`] driver that records the running probability after every
//! trial, and a [`Chart`] that renders that series as an SVG line chart.
//!
//! # Example
//!
//! ```
//! use trips::{Simulation, SimulationOptions};
//!
//! let options = SimulationOptions::default().with_trials(1_000).with_seed(42);
//! let report = Simulation::new(options).run().unwrap();
//! assert_eq!(report.series.len(), 1_000);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod chart;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod report;
pub mod simulation;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use chart::Chart;
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::ChartError;
pub use error::{CardError, DealError, DeckError};
pub use hand::{HAND_SIZE, Hand};
pub use options::SimulationOptions;
pub use report::Report;
pub use simulation::Simulation;
