//! Card types and deck utilities.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        };
        write!(f, "{glyph}")
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when scoring.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the card's pip value for counting toward 15 and 31.
    ///
    /// Face cards count 10; every other card counts its rank.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{Card, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Hearts, 13).pip_value(), 10);
    /// assert_eq!(Card::new(Suit::Spades, 7).pip_value(), 7);
    /// ```
    #[must_use]
    pub const fn pip_value(&self) -> u8 {
        if self.rank > 10 { 10 } else { self.rank }
    }

    /// Returns whether this card is a jack.
    #[must_use]
    pub const fn is_jack(&self) -> bool {
        self.rank == 11
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            1 => write!(f, "A{}", self.suit),
            11 => write!(f, "J{}", self.suit),
            12 => write!(f, "Q{}", self.suit),
            13 => write!(f, "K{}", self.suit),
            rank => write!(f, "{rank}{}", self.suit),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Creates and shuffles a standard 52-card deck.
///
/// Cards are drawn by popping from the back of the returned `Vec`.
#[must_use]
pub fn standard_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
        for rank in 1..=13 {
            cards.push(Card::new(suit, rank));
        }
    }

    cards.shuffle(rng);
    cards
}
