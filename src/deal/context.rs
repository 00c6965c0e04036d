//! Capability objects handed to strategies.
//!
//! A strategy never touches the deal directly; it receives a narrow context
//! that can read exactly the state the decision needs and execute exactly the
//! move being decided.

extern crate alloc;

use alloc::vec::Vec;

use log::info;

use crate::card::Card;
use crate::combo::score_playing;
use crate::error::PlayError;
use crate::result::PlayReport;

use super::{Deal, Side};

/// Context for forming the crib: read the hand, transfer cards to the crib.
pub struct CribContext<'a> {
    deal: &'a mut Deal,
    side: Side,
    discards: u8,
}

impl<'a> CribContext<'a> {
    pub(super) const fn new(deal: &'a mut Deal, side: Side) -> Self {
        Self {
            deal,
            side,
            discards: 0,
        }
    }

    /// The side forming its crib contribution.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// The side's current hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        self.deal.hand(self.side)
    }

    /// Transfers the card at `index` to the crib.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of bounds or two cards were
    /// already contributed.
    pub fn discard(&mut self, index: usize) -> Result<Card, PlayError> {
        if self.discards >= 2 {
            return Err(PlayError::CribComplete);
        }
        let card = self.deal.transfer_to_crib(self.side, index)?;
        self.discards += 1;
        Ok(card)
    }

    pub(super) const fn discards(&self) -> u8 {
        self.discards
    }
}

/// Context for one turn of play: read the hand, pile, and count; execute a
/// single play.
///
/// The context is consumed by [`TurnContext::play`], so a strategy can play
/// exactly one card per turn.
pub struct TurnContext<'a> {
    deal: &'a mut Deal,
    side: Side,
}

impl<'a> TurnContext<'a> {
    pub(super) const fn new(deal: &'a mut Deal, side: Side) -> Self {
        Self { deal, side }
    }

    /// The side to act.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// The side's current hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        self.deal.hand(self.side)
    }

    /// The combined round pile, in play order.
    #[must_use]
    pub fn pile(&self) -> &[Card] {
        self.deal.round_pile()
    }

    /// The running count.
    #[must_use]
    pub fn count(&self) -> u8 {
        self.deal.count()
    }

    /// The hand indices that can legally be played at the current count.
    #[must_use]
    pub fn legal_plays(&self) -> Vec<usize> {
        self.deal.legal_plays(self.side)
    }

    /// Plays the card at `index` and scores the resulting pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of bounds or the card would push
    /// the running count past 31; the deal is unchanged on error.
    pub fn play(self, index: usize) -> Result<PlayReport, PlayError> {
        let card = self.deal.play_card(self.side, index)?;
        let count = self.deal.count();
        let (points, combos) = score_playing(self.deal.round_pile());
        info!("{} plays {card} for {count}", self.side);
        for combo in &combos {
            info!("{} scores {} for {}", self.side, combo.score, combo.pattern);
        }
        Ok(PlayReport {
            card,
            count,
            points,
            combos,
        })
    }
}
