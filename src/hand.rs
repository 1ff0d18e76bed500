//! Five-card hands and their classification.

use crate::card::{Card, Rank};
use crate::deck::Deck;
use crate::error::DealError;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// A five-card hand.
///
/// The hand keeps its own copies of the cards, so it never changes once dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Deals a hand from the top five cards of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if the deck holds fewer than
    /// five cards.
    pub fn deal(deck: &Deck) -> Result<Self, DealError> {
        Self::from_cards(deck.cards())
    }

    /// Builds a hand from the first five of `cards`.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if fewer than five cards are
    /// given.
    pub fn from_cards(cards: &[Card]) -> Result<Self, DealError> {
        let top = cards
            .first_chunk::<HAND_SIZE>()
            .ok_or_else(|| DealError::InsufficientCards {
                available: cards.len(),
            })?;

        Ok(Self { cards: *top })
    }

    /// Returns the cards in the hand, in dealing order.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns how many cards of each rank the hand holds, indexed by
    /// [`Rank::index`].
    #[must_use]
    pub fn rank_counts(&self) -> [u8; Rank::ALL.len()] {
        let mut counts = [0; Rank::ALL.len()];
        for card in &self.cards {
            counts[card.rank.index() as usize] += 1;
        }
        counts
    }

    /// Returns whether some rank appears exactly three times.
    ///
    /// This is a "contains a triplet" test: a full house also qualifies, four
    /// of a kind does not.
    #[must_use]
    pub fn is_three_of_a_kind(&self) -> bool {
        self.rank_counts().contains(&3)
    }
}
