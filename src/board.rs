//! The cribbage board.

use log::info;

use crate::deal::Side;
use crate::error::GameOver;

/// The peg position that ends the game.
pub const GAME_TARGET: u32 = 121;

/// A cribbage board tracking both sides' pegs.
///
/// Each side has a leading and a trailing peg; pegging leapfrogs the trailing
/// peg past the leading one. Reaching hole 121 ends the game.
///
/// # Example
///
/// ```
/// use cribrs::{CribbageBoard, Side};
///
/// let mut board = CribbageBoard::new();
/// board.peg(Side::Player, 8).unwrap();
/// assert_eq!(board.scores(), (0, 8));
/// assert_eq!(board.status(Side::Player), (8, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CribbageBoard {
    dealer_current: u32,
    dealer_previous: u32,
    player_current: u32,
    player_previous: u32,
}

impl CribbageBoard {
    /// Creates a board with both sides' pegs at the start.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dealer_current: 0,
            dealer_previous: 0,
            player_current: 0,
            player_previous: 0,
        }
    }

    /// Pegs points for a side.
    ///
    /// Pegging zero points is a no-op. Returns the side's new score.
    ///
    /// # Errors
    ///
    /// Returns [`GameOver`] when the peg reaches hole 121; the winning score
    /// is capped at exactly 121.
    pub fn peg(&mut self, side: Side, points: u32) -> Result<u32, GameOver> {
        if points == 0 {
            return Ok(self.score(side));
        }

        let (current, previous) = match side {
            Side::Dealer => (&mut self.dealer_current, &mut self.dealer_previous),
            Side::Player => (&mut self.player_current, &mut self.player_previous),
        };
        *previous = *current;
        *current += points;
        if *current >= GAME_TARGET {
            *current = GAME_TARGET;
            return Err(GameOver {
                winner: side,
                score: GAME_TARGET,
            });
        }

        info!("{side} pegs {points}: {current},{previous}");
        Ok(*current)
    }

    /// Returns a side's current score.
    #[must_use]
    pub const fn score(&self, side: Side) -> u32 {
        match side {
            Side::Dealer => self.dealer_current,
            Side::Player => self.player_current,
        }
    }

    /// Returns both scores as `(dealer, player)`.
    #[must_use]
    pub const fn scores(&self) -> (u32, u32) {
        (self.dealer_current, self.player_current)
    }

    /// Returns a side's leading and trailing peg positions.
    #[must_use]
    pub const fn status(&self, side: Side) -> (u32, u32) {
        match side {
            Side::Dealer => (self.dealer_current, self.dealer_previous),
            Side::Player => (self.player_current, self.player_previous),
        }
    }
}
