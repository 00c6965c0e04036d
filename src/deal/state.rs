//! Deal state types.

use core::fmt;

/// The two sides of a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The side that dealt and owns the crib.
    Dealer,
    /// The non-dealing side, which leads the first round.
    Player,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Dealer => Self::Player,
            Self::Player => Self::Dealer,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dealer => write!(f, "dealer"),
            Self::Player => write!(f, "player"),
        }
    }
}

/// Phase of a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealPhase {
    /// Dealing hands, forming the crib, and revealing the starter.
    Dealing,
    /// Waiting for a lead onto an empty round pile.
    AwaitingLead,
    /// Sides are alternating follows.
    Following,
    /// One side cannot play and has said go.
    GoDeclared,
    /// The other side is playing out the go.
    PlayingOutGo,
    /// The round pile is complete and about to be cleared.
    RoundComplete,
    /// Hands are empty and the show is being scored.
    Showing,
    /// The deal has finished.
    DealComplete,
}
