//! Card types.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card rank, ordered from Two (lowest) to Ace (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the rank for an index in `0..13` (0 = Two, 12 = Ace).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] for any other index.
    pub const fn from_index(index: u8) -> Result<Self, CardError> {
        if (index as usize) < Self::ALL.len() {
            Ok(Self::ALL[index as usize])
        } else {
            Err(CardError::InvalidRank)
        }
    }

    /// Returns the index of this rank (0 = Two, 12 = Ace).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Parses a rank symbol: `2`..`10`, `T`, `J`, `Q`, `K` or `A`.
    ///
    /// Letters are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the symbol is not a rank.
    pub fn from_symbol(symbol: &str) -> Result<Self, CardError> {
        let rank = match symbol {
            "2" => Self::Two,
            "3" => Self::Three,
            "4" => Self::Four,
            "5" => Self::Five,
            "6" => Self::Six,
            "7" => Self::Seven,
            "8" => Self::Eight,
            "9" => Self::Nine,
            "10" | "T" | "t" => Self::Ten,
            "J" | "j" => Self::Jack,
            "Q" | "q" => Self::Queen,
            "K" | "k" => Self::King,
            "A" | "a" => Self::Ace,
            _ => return Err(CardError::InvalidRank),
        };
        Ok(rank)
    }

    /// Returns the display symbol of this rank.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit. Suits carry no order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit for an index in `0..4`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] for any other index.
    pub const fn from_index(index: u8) -> Result<Self, CardError> {
        if (index as usize) < Self::ALL.len() {
            Ok(Self::ALL[index as usize])
        } else {
            Err(CardError::InvalidSuit)
        }
    }

    /// Returns the index of this suit in canonical deck order.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Parses a suit symbol: `♣`, `♦`, `♥` or `♠` (optionally followed by the
    /// emoji variation selector), or one of the letters `c`, `d`, `h`, `s`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] if the symbol is not a suit.
    pub fn from_symbol(symbol: &str) -> Result<Self, CardError> {
        let symbol = symbol.strip_suffix('\u{fe0f}').unwrap_or(symbol);
        let suit = match symbol {
            "♣" | "c" | "C" => Self::Clubs,
            "♦" | "d" | "D" => Self::Diamonds,
            "♥" | "h" | "H" => Self::Hearts,
            "♠" | "s" | "S" => Self::Spades,
            _ => return Err(CardError::InvalidSuit),
        };
        Ok(suit)
    }

    /// Returns the display symbol of this suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card.
///
/// `==` compares card identity (rank and suit). Use [`Card::same_rank`] for
/// the suit-blind comparison and [`Card::outranks`] for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a card from a rank symbol and a suit symbol.
    ///
    /// The rank is validated first.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] or [`CardError::InvalidSuit`] if
    /// either symbol is outside its enumeration.
    ///
    /// # Example
    ///
    /// ```
    /// use trips::{Card, CardError, Rank, Suit};
    ///
    /// let card = Card::from_symbols("Q", "♥").unwrap();
    /// assert_eq!(card, Card::new(Rank::Queen, Suit::Hearts));
    /// assert_eq!(Card::from_symbols("1", "♥"), Err(CardError::InvalidRank));
    /// ```
    pub fn from_symbols(rank: &str, suit: &str) -> Result<Self, CardError> {
        let rank = Rank::from_symbol(rank)?;
        let suit = Suit::from_symbol(suit)?;
        Ok(Self::new(rank, suit))
    }

    /// Returns whether this card has a strictly higher rank than `other`.
    #[must_use]
    pub fn outranks(&self, other: &Self) -> bool {
        self.rank > other.rank
    }

    /// Returns whether both cards share a rank, ignoring suit.
    #[must_use]
    pub fn same_rank(&self, other: &Self) -> bool {
        self.rank == other.rank
    }

    /// Compares two cards by rank only.
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses `"<rank><suit>"`, e.g. `"7♣"`, `"10h"` or `"As"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = if s.starts_with("10") {
            2
        } else {
            s.chars().next().map_or(0, char::len_utf8)
        };
        if split == 0 {
            return Err(CardError::InvalidRank);
        }
        let (rank, suit) = s.split_at(split);
        Self::from_symbols(rank, suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Rank::ALL.len() * Suit::ALL.len();
