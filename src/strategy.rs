//! Play strategies.
//!
//! The deal engine is polymorphic over [`Strategy`]: it asks the strategy for
//! every decision and hands it a narrow context to execute the chosen move.
//! Concrete strategies range from [`FirstCard`] (baseline and testing) to
//! [`Interactive`] (defers to an external input source) and [`Greedy`]
//! (crib formation through the advisor).

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::advisor::{best_for_dealer, best_for_player, evaluate_splits};
use crate::card::Card;
use crate::deal::{CribContext, Side, TurnContext};
use crate::error::{InputAborted, PlayError, StrategyError};
use crate::result::PlayReport;

/// A blocking source of choices, typically a human.
///
/// The deal engine suspends until the source answers. Quitting is signalled
/// as [`InputAborted`], never as a card choice.
pub trait InputSource {
    /// Asks for a choice among `options`, returning the chosen index.
    ///
    /// # Errors
    ///
    /// Returns [`InputAborted`] when the source quits instead of choosing.
    fn choose(&mut self, prompt: &str, options: &[String]) -> Result<usize, InputAborted>;
}

/// A cribbage playing strategy.
///
/// Each method receives a context scoped to the decision at hand: reading
/// the relevant state and executing the chosen move go through the context,
/// so a strategy can neither see hidden state nor make a move out of turn.
pub trait Strategy {
    /// Contributes two cards to the crib.
    ///
    /// # Errors
    ///
    /// Propagates context errors and input aborts.
    fn form_crib(&mut self, ctx: &mut CribContext<'_>) -> Result<(), StrategyError>;

    /// Plays one card. Called whenever the side has at least one legal play,
    /// including the lead onto an empty pile.
    ///
    /// # Errors
    ///
    /// Propagates context errors and input aborts.
    fn follow(&mut self, ctx: TurnContext<'_>) -> Result<PlayReport, StrategyError>;

    /// Plays one card after the opponent said go. Called once per card while
    /// the side can still play.
    ///
    /// # Errors
    ///
    /// Propagates context errors and input aborts.
    fn go(&mut self, ctx: TurnContext<'_>) -> Result<PlayReport, StrategyError> {
        self.follow(ctx)
    }
}

/// Baseline strategy: discards the first two cards and always plays the
/// first legal card.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCard;

impl Strategy for FirstCard {
    fn form_crib(&mut self, ctx: &mut CribContext<'_>) -> Result<(), StrategyError> {
        ctx.discard(0)?;
        ctx.discard(0)?;
        Ok(())
    }

    fn follow(&mut self, ctx: TurnContext<'_>) -> Result<PlayReport, StrategyError> {
        let index = ctx.legal_plays().first().copied().unwrap_or(0);
        Ok(ctx.play(index)?)
    }
}

/// Strategy that defers every decision to an [`InputSource`].
#[derive(Debug, Clone)]
pub struct Interactive<S> {
    source: S,
}

impl<S> Interactive<S> {
    /// Creates an interactive strategy around the given input source.
    pub const fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: InputSource> Interactive<S> {
    fn play_prompted(
        &mut self,
        ctx: TurnContext<'_>,
        prompt: &str,
    ) -> Result<PlayReport, StrategyError> {
        let legal = ctx.legal_plays();
        let options: Vec<String> = legal
            .iter()
            .map(|&index| format!("{}", ctx.hand()[index]))
            .collect();
        let choice = self.source.choose(prompt, &options)?;
        let index = legal
            .get(choice)
            .copied()
            .ok_or(PlayError::InvalidCardIndex(choice))?;
        Ok(ctx.play(index)?)
    }
}

impl<S: InputSource> Strategy for Interactive<S> {
    fn form_crib(&mut self, ctx: &mut CribContext<'_>) -> Result<(), StrategyError> {
        for _ in 0..2 {
            let options: Vec<String> =
                ctx.hand().iter().map(|card| format!("{card}")).collect();
            let choice = self.source.choose("choose a card for the crib", &options)?;
            ctx.discard(choice)?;
        }
        Ok(())
    }

    fn follow(&mut self, ctx: TurnContext<'_>) -> Result<PlayReport, StrategyError> {
        self.play_prompted(ctx, "choose a card to play")
    }

    fn go(&mut self, ctx: TurnContext<'_>) -> Result<PlayReport, StrategyError> {
        self.play_prompted(ctx, "opponent said go; choose a card to play")
    }
}

/// Heuristic strategy: forms the crib through the split advisor and
/// otherwise plays the first legal card.
///
/// Follow and go deliberately look no further than legality; holding cards
/// back for later counts is not attempted.
#[derive(Debug, Clone, Copy)]
pub struct Greedy {
    side: Side,
}

impl Greedy {
    /// Creates a greedy strategy for the given side.
    ///
    /// The side determines how crib splits are ranked: the dealer keeps
    /// points in its own crib, the player denies them.
    #[must_use]
    pub const fn new(side: Side) -> Self {
        Self { side }
    }

    /// Greedy strategy for the dealing side.
    #[must_use]
    pub const fn dealer() -> Self {
        Self::new(Side::Dealer)
    }

    /// Greedy strategy for the non-dealing side.
    #[must_use]
    pub const fn player() -> Self {
        Self::new(Side::Player)
    }
}

impl Strategy for Greedy {
    fn form_crib(&mut self, ctx: &mut CribContext<'_>) -> Result<(), StrategyError> {
        let Ok(six) = <[Card; 6]>::try_from(ctx.hand()) else {
            // Not a fresh six-card hand; contribute the first two cards.
            ctx.discard(0)?;
            ctx.discard(0)?;
            return Ok(());
        };

        let splits = evaluate_splits(&six);
        let best = match self.side {
            Side::Dealer => best_for_dealer(&splits),
            Side::Player => best_for_player(&splits),
        };
        let Some(split) = best else {
            ctx.discard(0)?;
            ctx.discard(0)?;
            return Ok(());
        };

        for card in split.discarded {
            if let Some(index) = ctx.hand().iter().position(|held| *held == card) {
                ctx.discard(index)?;
            }
        }
        Ok(())
    }

    fn follow(&mut self, ctx: TurnContext<'_>) -> Result<PlayReport, StrategyError> {
        let index = ctx.legal_plays().first().copied().unwrap_or(0);
        Ok(ctx.play(index)?)
    }
}
