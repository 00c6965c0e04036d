//! The play-phase driver.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, info};

use crate::board::CribbageBoard;
use crate::card::Card;
use crate::error::{DealError, PlayError};
use crate::result::DealOutcome;
use crate::strategy::Strategy;

use super::context::{CribContext, TurnContext};
use super::state::{DealPhase, Side};
use super::Deal;

fn strategy_for<'a>(
    side: Side,
    dealer: &'a mut dyn Strategy,
    player: &'a mut dyn Strategy,
) -> &'a mut dyn Strategy {
    match side {
        Side::Dealer => dealer,
        Side::Player => player,
    }
}

fn hand_string(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(|card| format!("{card}")).collect();
    formatted.join(" ")
}

impl Deal {
    /// Adds points to the deal tally and pegs them on the board.
    ///
    /// A peg that reaches the end of the board converts into
    /// [`DealError::GameOver`] carrying the outcome accumulated so far,
    /// terminating peg included.
    pub(super) fn peg(
        &mut self,
        board: &mut CribbageBoard,
        side: Side,
        points: u32,
    ) -> Result<(), DealError> {
        if points == 0 {
            return Ok(());
        }
        match side {
            Side::Dealer => self.outcome.dealer_points += points,
            Side::Player => self.outcome.player_points += points,
        }
        match board.peg(side, points) {
            Ok(_) => Ok(()),
            Err(over) => Err(DealError::GameOver {
                winner: over.winner,
                outcome: self.outcome.clone(),
            }),
        }
    }

    fn form_crib_for(
        &mut self,
        side: Side,
        strategy: &mut dyn Strategy,
    ) -> Result<(), DealError> {
        let mut ctx = CribContext::new(self, side);
        strategy.form_crib(&mut ctx)?;
        if ctx.discards() != 2 {
            return Err(PlayError::CribIncomplete.into());
        }
        Ok(())
    }

    /// Plays out a whole deal: crib formation, starter, rounds of play, and
    /// the show, pegging both the board and the deal tally as it goes.
    ///
    /// The deal must be fresh. Hands may already be dealt through
    /// [`Deal::deal_hands`]; otherwise they are dealt here.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::GameOver`] when a peg reaches the end of the
    /// board (carrying the partial outcome), [`DealError::InputAborted`]
    /// when an interactive strategy's input source quits, and a
    /// [`DealError::Play`] when a strategy selects an impossible card.
    pub fn play(
        &mut self,
        dealer: &mut dyn Strategy,
        player: &mut dyn Strategy,
        board: &mut CribbageBoard,
    ) -> Result<DealOutcome, DealError> {
        if self.phase != DealPhase::Dealing || self.starter.is_some() || !self.crib.is_empty() {
            return Err(DealError::InvalidState);
        }
        if self.dealer_hand.is_empty() && self.player_hand.is_empty() {
            self.deal_hands()?;
        }
        if self.dealer_hand.len() != 6 || self.player_hand.len() != 6 {
            return Err(DealError::InvalidState);
        }
        debug!("dealt player hand: {}", hand_string(&self.player_hand));
        debug!("dealt dealer hand: {}", hand_string(&self.dealer_hand));

        self.form_crib_for(Side::Player, player)?;
        self.form_crib_for(Side::Dealer, dealer)?;
        debug!("crib formed: {}", hand_string(&self.crib));

        let starter = self.draw_starter()?;
        info!("starter: {starter}");
        if starter.is_jack() {
            info!("his heels: dealer pegs 2");
            self.peg(board, Side::Dealer, 2)?;
        }

        // The non-dealer leads the first round; afterwards the side that did
        // not play the last card of a round leads the next one.
        let mut leader = Side::Player;
        while !(self.dealer_hand.is_empty() && self.player_hand.is_empty()) {
            leader = self.play_round(leader, dealer, player, board)?;
            self.round_pile.clear();
        }

        self.phase = DealPhase::Showing;
        self.show(board)?;

        self.phase = DealPhase::DealComplete;
        Ok(self.outcome.clone())
    }

    /// Plays one round, from a lead until 31 is reached or neither side can
    /// play. Returns the side that leads the next round.
    fn play_round(
        &mut self,
        mut leader: Side,
        dealer: &mut dyn Strategy,
        player: &mut dyn Strategy,
        board: &mut CribbageBoard,
    ) -> Result<Side, DealError> {
        if self.hand(leader).is_empty() {
            leader = leader.opponent();
        }
        self.phase = DealPhase::AwaitingLead;
        let mut active = leader;
        let mut last_player = leader;

        loop {
            if self.hand(active).is_empty() {
                if self.hand(active.opponent()).is_empty() {
                    // Cards ran out; the last card pegs one.
                    info!("last card: {last_player} pegs 1");
                    self.peg(board, last_player, 1)?;
                    break;
                }
                active = active.opponent();
                continue;
            }

            if self.legal_plays(active).is_empty() {
                // Go is forced: no card in hand keeps the count within 31.
                self.phase = DealPhase::GoDeclared;
                info!("{active} says go at {}", self.count());
                let opponent = active.opponent();
                self.phase = DealPhase::PlayingOutGo;

                let mut reached_31 = false;
                while !self.legal_plays(opponent).is_empty() {
                    let report = strategy_for(opponent, &mut *dealer, &mut *player)
                        .go(TurnContext::new(self, opponent))?;
                    last_player = opponent;
                    self.peg(board, opponent, report.points)?;
                    if report.count == 31 {
                        info!("{opponent} reaches 31 and pegs 2");
                        self.peg(board, opponent, 2)?;
                        reached_31 = true;
                        break;
                    }
                }
                if !reached_31 {
                    info!("last card: {last_player} pegs 1");
                    self.peg(board, last_player, 1)?;
                }
                break;
            }

            let report = strategy_for(active, &mut *dealer, &mut *player)
                .follow(TurnContext::new(self, active))?;
            last_player = active;
            self.peg(board, active, report.points)?;
            if report.count == 31 {
                info!("{active} reaches 31 and pegs 2");
                self.peg(board, active, 2)?;
                break;
            }
            self.phase = DealPhase::Following;
            active = active.opponent();
        }

        self.phase = DealPhase::RoundComplete;
        Ok(last_player.opponent())
    }
}
