//! The 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A full deck of 52 distinct cards.
///
/// The deck always holds every (rank, suit) pair exactly once. Only the order
/// changes, through [`Deck::shuffle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck in canonical order: ranks low to high, and within each
    /// rank clubs, diamonds, hearts, spades.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a deck with `top` as its first cards, followed by the remaining
    /// cards in canonical order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if `top` names a card twice.
    ///
    /// # Example
    ///
    /// ```
    /// use trips::{Card, Deck};
    ///
    /// let ace: Card = "A♠".parse().unwrap();
    /// let deck = Deck::stacked(&[ace]).unwrap();
    /// assert_eq!(deck.cards()[0], ace);
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn stacked(top: &[Card]) -> Result<Self, DeckError> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for (i, card) in top.iter().enumerate() {
            if top[..i].contains(card) {
                return Err(DeckError::DuplicateCard(*card));
            }
            cards.push(*card);
        }

        cards.extend(Self::new().cards.into_iter().filter(|c| !top.contains(c)));

        Ok(Self { cards })
    }

    /// Shuffles the deck into a uniformly random order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Returns the cards in their current order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
