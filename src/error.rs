//! Error types for card, deck, and hand operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when constructing a card from untyped input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is not one of 2..10, J, Q, K, A.
    #[error("invalid rank, must be one of 2 3 4 5 6 7 8 9 10 J Q K A")]
    InvalidRank,
    /// Suit is not one of clubs, diamonds, hearts, spades.
    #[error("invalid suit, must be one of ♣ ♦ ♥ ♠")]
    InvalidSuit,
}

/// Errors that can occur when arranging a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card was placed on the deck twice.
    #[error("card {0} stacked more than once")]
    DuplicateCard(Card),
}

/// Errors that can occur when dealing a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Fewer cards than a hand needs.
    #[error("not enough cards to deal a hand ({available} available)")]
    InsufficientCards {
        /// Number of cards that were available.
        available: usize,
    },
}

/// Errors that can occur while exporting a chart.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum ChartError {
    /// Writing the chart file failed.
    #[error("failed to write chart")]
    Io(#[from] std::io::Error),
}
