//! Result types for plays, shows, and whole deals.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::combo::ComboInfo;

/// Result of a single executed play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayReport {
    /// The card that was played.
    pub card: Card,
    /// The running count after the play.
    pub count: u8,
    /// Points scored by the play, before any 31 or last-card bonus.
    pub points: u32,
    /// The combinations that scored.
    pub combos: Vec<ComboInfo>,
}

/// The hand being scored at the show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOwner {
    /// The dealer's kept hand.
    Dealer,
    /// The player's kept hand.
    Player,
    /// The crib, scored for the dealer.
    Crib,
}

impl fmt::Display for ShowOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dealer => write!(f, "dealer hand"),
            Self::Player => write!(f, "player hand"),
            Self::Crib => write!(f, "crib"),
        }
    }
}

/// Score of one hand at the show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowScore {
    /// Whose hand was scored.
    pub owner: ShowOwner,
    /// Total points for the hand.
    pub points: u32,
    /// The combinations that scored.
    pub combos: Vec<ComboInfo>,
}

/// Outcome of a whole deal.
///
/// Tallies every point pegged during the deal. When a deal ends early because
/// a peg reached the end of the board, the outcome carries everything
/// recorded up to and including the terminating peg.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealOutcome {
    /// Points pegged for the dealer during this deal.
    pub dealer_points: u32,
    /// Points pegged for the player during this deal.
    pub player_points: u32,
    /// Show-phase breakdowns, in scoring order.
    pub shows: Vec<ShowScore>,
}
