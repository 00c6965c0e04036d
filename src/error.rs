//! Error types for deal operations.

use thiserror::Error;

use crate::deal::Side;
use crate::result::DealOutcome;

/// Errors raised by card-movement methods when a strategy selects an
/// impossible card.
///
/// These are precondition violations in a [`Strategy`](crate::Strategy)
/// implementation, not normal game flow: the deal rejects the selection
/// before any state is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The selected index is outside the current hand.
    #[error("card index {0} is out of bounds")]
    InvalidCardIndex(usize),
    /// The selected card would push the running count past 31.
    #[error("card would push the count past 31")]
    CountExceeded,
    /// A crib transfer was attempted after the contribution was complete.
    #[error("crib contribution is already complete")]
    CribComplete,
    /// A strategy finished forming the crib without contributing two cards.
    #[error("crib contribution is incomplete")]
    CribIncomplete,
}

/// Signal that a peg reached the end of the board.
///
/// This is a control-flow signal rather than a defect: the winning side's
/// score is capped at exactly 121 and the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{winner} reached {score} and the game is over")]
pub struct GameOver {
    /// The side whose peg reached the end of the board.
    pub winner: Side,
    /// The winning score, always exactly 121.
    pub score: u32,
}

/// Signal that an external input source quit instead of choosing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input source aborted")]
pub struct InputAborted;

/// Errors that can cross a strategy call boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// The strategy selected an impossible card.
    #[error(transparent)]
    Play(#[from] PlayError),
    /// The strategy's external input source quit.
    #[error("input source aborted")]
    InputAborted,
}

impl From<InputAborted> for StrategyError {
    fn from(_: InputAborted) -> Self {
        Self::InputAborted
    }
}

/// Errors and signals that end a deal.
///
/// Normal completion and early termination share this one explicit return
/// channel: [`crate::Deal::play`] returns `Result<DealOutcome, DealError>`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DealError {
    /// A peg reached the end of the board mid-deal.
    ///
    /// Carries the per-deal outcome accumulated up to and including the
    /// terminating peg, so the caller can still finalize statistics.
    #[error("game over: {winner} reached the end of the board")]
    GameOver {
        /// The winning side.
        winner: Side,
        /// Points and show breakdowns recorded before the deal was cut short.
        outcome: DealOutcome,
    },
    /// The external input source quit before the deal finished.
    #[error("input source aborted")]
    InputAborted,
    /// A strategy selected an impossible card.
    #[error(transparent)]
    Play(#[from] PlayError),
    /// The deal is not in a state where this operation is allowed.
    #[error("invalid deal state for this operation")]
    InvalidState,
    /// The deck has too few cards to deal hands and a starter.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

impl From<StrategyError> for DealError {
    fn from(err: StrategyError) -> Self {
        match err {
            StrategyError::Play(play) => Self::Play(play),
            StrategyError::InputAborted => Self::InputAborted,
        }
    }
}
