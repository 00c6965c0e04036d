//! The show-phase driver.

use log::{debug, info};

use crate::board::CribbageBoard;
use crate::card::Card;
use crate::combo::score_showing;
use crate::error::DealError;
use crate::result::{ShowOwner, ShowScore};

use super::state::Side;
use super::Deal;

impl Deal {
    /// Scores the show: dealer's hand, player's hand, then the crib, each
    /// with the starter and pegged immediately.
    ///
    /// A peg that ends the game stops the show; later hands are not scored.
    pub(super) fn show(&mut self, board: &mut CribbageBoard) -> Result<(), DealError> {
        let Some(starter) = self.starter else {
            return Err(DealError::InvalidState);
        };

        let order = [
            (ShowOwner::Dealer, Side::Dealer),
            (ShowOwner::Player, Side::Player),
            (ShowOwner::Crib, Side::Dealer),
        ];
        for (owner, side) in order {
            let (points, combos) = {
                let cards: &[Card] = match owner {
                    ShowOwner::Dealer => self.pile(Side::Dealer),
                    ShowOwner::Player => self.pile(Side::Player),
                    ShowOwner::Crib => self.crib(),
                };
                score_showing(cards, Some(starter), owner == ShowOwner::Crib)
            };

            info!("{owner} shows {points}");
            for combo in &combos {
                debug!("{owner}: {} for {} ({})", combo.pattern, combo.score, combo.instances);
            }
            self.outcome.shows.push(ShowScore {
                owner,
                points,
                combos,
            });
            self.peg(board, side, points)?;
        }
        Ok(())
    }
}
