//! A cribbage deal engine with optional `no_std` support.
//!
//! The crate provides a [`Deal`] type that manages a full deal flow,
//! including crib formation, the starter, rounds of play to 31, and the
//! show, delegating every decision to a pluggable [`Strategy`] and pegging
//! a [`CribbageBoard`].
//!
//! # Example
//!
//! ```no_run
//! use cribrs::{CribbageBoard, Deal, FirstCard};
//!
//! let mut board = CribbageBoard::new();
//! let mut deal = Deal::new(42);
//! let outcome = deal.play(&mut FirstCard, &mut FirstCard, &mut board);
//! let _ = outcome;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod advisor;
pub mod board;
pub mod card;
pub mod combo;
pub mod deal;
pub mod error;
pub mod result;
pub mod strategy;

// Re-export main types
pub use advisor::{CribSplit, best_for_dealer, best_for_player, evaluate_splits, guaranteed_score};
pub use board::{CribbageBoard, GAME_TARGET};
pub use card::{Card, DECK_SIZE, Suit, standard_deck};
pub use combo::{
    ComboInfo, Combination, FifteenCombination, FlushCombination, HisNobsCombination,
    PairCombination, Pattern, RunCombination, score_playing, score_showing,
};
pub use deal::{CribContext, Deal, DealPhase, MAX_COUNT, Side, TurnContext};
pub use error::{DealError, GameOver, InputAborted, PlayError, StrategyError};
pub use result::{DealOutcome, PlayReport, ShowOwner, ShowScore};
pub use strategy::{FirstCard, Greedy, InputSource, Interactive, Strategy};
