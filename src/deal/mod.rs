//! Deal engine and state management.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, standard_deck};
use crate::error::{DealError, PlayError};
use crate::result::DealOutcome;

mod context;
mod play;
mod show;
pub mod state;

pub use context::{CribContext, TurnContext};
pub use state::{DealPhase, Side};

/// Cards needed for one deal: six per hand plus the starter.
const DEAL_SIZE: usize = 13;

/// The running count a round may never exceed.
pub const MAX_COUNT: u8 = 31;

/// A single cribbage deal.
///
/// The deal owns the deck, both hands, the crib, each side's personal pile of
/// played cards, and the combined round pile whose pip sum is the running
/// count. All state changes go through its own methods; every card movement
/// is validated before anything is mutated. [`Deal::play`] drives a whole
/// deal against a pair of [`Strategy`](crate::Strategy) implementations,
/// while the card-movement methods are public for custom drivers.
#[derive(Debug, Clone)]
pub struct Deal {
    /// Cards remaining in the deck. Draws pop from the back.
    pub deck: Vec<Card>,
    dealer_hand: Vec<Card>,
    player_hand: Vec<Card>,
    crib: Vec<Card>,
    dealer_pile: Vec<Card>,
    player_pile: Vec<Card>,
    round_pile: Vec<Card>,
    starter: Option<Card>,
    phase: DealPhase,
    outcome: DealOutcome,
}

impl Deal {
    /// Creates a deal with a freshly shuffled deck.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_deck(standard_deck(&mut rng))
    }

    /// Creates a deal over the given deck.
    ///
    /// Draws pop from the back of the deck, so the card drawn first is the
    /// last element.
    #[must_use]
    pub const fn with_deck(deck: Vec<Card>) -> Self {
        Self {
            deck,
            dealer_hand: Vec::new(),
            player_hand: Vec::new(),
            crib: Vec::new(),
            dealer_pile: Vec::new(),
            player_pile: Vec::new(),
            round_pile: Vec::new(),
            starter: None,
            phase: DealPhase::Dealing,
            outcome: DealOutcome {
                dealer_points: 0,
                player_points: 0,
                shows: Vec::new(),
            },
        }
    }

    fn draw(&mut self) -> Option<Card> {
        self.deck.pop()
    }

    /// Deals six cards to the player, then six to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if hands were already dealt or the deck cannot cover
    /// both hands and the starter.
    pub fn deal_hands(&mut self) -> Result<(), DealError> {
        if self.phase != DealPhase::Dealing
            || !self.dealer_hand.is_empty()
            || !self.player_hand.is_empty()
        {
            return Err(DealError::InvalidState);
        }
        if self.deck.len() < DEAL_SIZE {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..6 {
            let card = self.draw().ok_or(DealError::NotEnoughCards)?;
            self.player_hand.push(card);
        }
        for _ in 0..6 {
            let card = self.draw().ok_or(DealError::NotEnoughCards)?;
            self.dealer_hand.push(card);
        }
        Ok(())
    }

    /// Draws the starter card.
    ///
    /// # Errors
    ///
    /// Returns an error if the starter was already drawn or the deck is
    /// empty.
    pub fn draw_starter(&mut self) -> Result<Card, DealError> {
        if self.starter.is_some() {
            return Err(DealError::InvalidState);
        }
        let card = self.draw().ok_or(DealError::NotEnoughCards)?;
        self.starter = Some(card);
        Ok(card)
    }

    /// Moves the card at `index` from a side's hand into the crib.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of bounds or the contribution is
    /// already complete; nothing is mutated on error.
    pub fn transfer_to_crib(&mut self, side: Side, index: usize) -> Result<Card, PlayError> {
        if self.crib.len() >= 4 || self.hand(side).len() <= 4 {
            return Err(PlayError::CribComplete);
        }
        let hand = self.hand_mut(side);
        if index >= hand.len() {
            return Err(PlayError::InvalidCardIndex(index));
        }
        let card = hand.remove(index);
        self.crib.push(card);
        Ok(card)
    }

    /// Plays the card at `index` from a side's hand onto the piles.
    ///
    /// The card moves to the side's personal pile and the combined round
    /// pile; once played it never returns to a hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of bounds or the card would push
    /// the running count past 31; nothing is mutated on error.
    pub fn play_card(&mut self, side: Side, index: usize) -> Result<Card, PlayError> {
        let Some(card) = self.hand(side).get(index).copied() else {
            return Err(PlayError::InvalidCardIndex(index));
        };
        if self.count() + card.pip_value() > MAX_COUNT {
            return Err(PlayError::CountExceeded);
        }

        self.hand_mut(side).remove(index);
        match side {
            Side::Dealer => self.dealer_pile.push(card),
            Side::Player => self.player_pile.push(card),
        }
        self.round_pile.push(card);
        Ok(card)
    }

    /// Returns the indices a side could legally play at the current count.
    #[must_use]
    pub fn legal_plays(&self, side: Side) -> Vec<usize> {
        let count = self.count();
        self.hand(side)
            .iter()
            .enumerate()
            .filter(|(_, card)| count + card.pip_value() <= MAX_COUNT)
            .map(|(index, _)| index)
            .collect()
    }

    /// Returns the running count: the pip sum of the round pile.
    #[must_use]
    pub fn count(&self) -> u8 {
        self.round_pile.iter().map(Card::pip_value).sum()
    }

    /// Returns a side's hand.
    #[must_use]
    pub fn hand(&self, side: Side) -> &[Card] {
        match side {
            Side::Dealer => &self.dealer_hand,
            Side::Player => &self.player_hand,
        }
    }

    fn hand_mut(&mut self, side: Side) -> &mut Vec<Card> {
        match side {
            Side::Dealer => &mut self.dealer_hand,
            Side::Player => &mut self.player_hand,
        }
    }

    /// Returns a side's personal pile of played cards.
    #[must_use]
    pub fn pile(&self, side: Side) -> &[Card] {
        match side {
            Side::Dealer => &self.dealer_pile,
            Side::Player => &self.player_pile,
        }
    }

    /// Returns the combined round pile, in play order.
    #[must_use]
    pub fn round_pile(&self) -> &[Card] {
        &self.round_pile
    }

    /// Returns the crib.
    #[must_use]
    pub fn crib(&self) -> &[Card] {
        &self.crib
    }

    /// Returns the starter card, if drawn.
    #[must_use]
    pub const fn starter(&self) -> Option<Card> {
        self.starter
    }

    /// Returns the current phase of the deal.
    #[must_use]
    pub const fn phase(&self) -> DealPhase {
        self.phase
    }

    /// Returns the points pegged so far in this deal.
    #[must_use]
    pub const fn outcome(&self) -> &DealOutcome {
        &self.outcome
    }
}
