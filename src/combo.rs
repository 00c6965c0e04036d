//! Scoring combinations for the show and play phases.
//!
//! Each combination is a stateless scorer implementing [`Combination`]. A
//! client holds a list of scorers and tallies a hand by calling each in turn;
//! the deal engine does exactly that through [`score_showing`] and
//! [`score_playing`].

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// A scoring pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Two cards of equal rank.
    Pair,
    /// Cards with pip values summing to fifteen.
    Fifteen,
    /// Three or more cards of consecutive rank.
    Run,
    /// Four hand cards of one suit.
    Flush,
    /// The jack matching the starter's suit.
    HisNobs,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pair => "pair",
            Self::Fifteen => "fifteen",
            Self::Run => "run",
            Self::Flush => "flush",
            Self::HisNobs => "his nobs",
        };
        write!(f, "{name}")
    }
}

/// Report of one pattern's presence in a set of cards.
///
/// A pure value, never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboInfo {
    /// The pattern that was searched for.
    pub pattern: Pattern,
    /// How many instances of the pattern were found.
    pub instances: u32,
    /// Total points scored across all instances.
    pub score: u32,
    /// The card groups that formed each instance.
    pub matches: Vec<Vec<Card>>,
}

impl ComboInfo {
    /// Creates an empty report for the given pattern.
    #[must_use]
    pub const fn none(pattern: Pattern) -> Self {
        Self {
            pattern,
            instances: 0,
            score: 0,
            matches: Vec::new(),
        }
    }
}

/// A cribbage scoring combination.
///
/// `showing` searches a hand (plus optional starter) the way hands are scored
/// at the show; `playing` searches the current round pile, where only the
/// trailing cards and the running count matter. Patterns that never score in
/// play keep the default empty `playing`.
pub trait Combination {
    /// The pattern this scorer searches for.
    fn pattern(&self) -> Pattern;

    /// Scores a hand at the show.
    fn showing(&self, cards: &[Card], starter: Option<Card>) -> ComboInfo;

    /// Scores the round pile after a play.
    fn playing(&self, pile: &[Card]) -> ComboInfo {
        let _ = pile;
        ComboInfo::none(self.pattern())
    }
}

fn gather(cards: &[Card], starter: Option<Card>) -> Vec<Card> {
    let mut all = cards.to_vec();
    if let Some(card) = starter {
        all.push(card);
    }
    all
}

/// Searches for pairs of equal-rank cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairCombination;

impl Combination for PairCombination {
    fn pattern(&self) -> Pattern {
        Pattern::Pair
    }

    /// Every unordered pair of equal-rank cards scores 2.
    fn showing(&self, cards: &[Card], starter: Option<Card>) -> ComboInfo {
        let all = gather(cards, starter);
        let mut info = ComboInfo::none(Pattern::Pair);

        for i in 0..all.len() {
            for j in (i + 1)..all.len() {
                if all[i].rank == all[j].rank {
                    info.instances += 1;
                    info.matches.push(vec![all[i], all[j]]);
                }
            }
        }

        info.score = info.instances * 2;
        info
    }

    /// Only the maximal equal-rank tail of the pile counts: a pair scores 2,
    /// a pair royal 6, a double pair royal 12.
    fn playing(&self, pile: &[Card]) -> ComboInfo {
        let mut info = ComboInfo::none(Pattern::Pair);
        let Some(last) = pile.last() else {
            return info;
        };

        let tail = pile
            .iter()
            .rev()
            .take_while(|card| card.rank == last.rank)
            .count();
        if tail >= 2 {
            info.instances = 1;
            info.score = (tail * (tail - 1)) as u32;
            info.matches.push(pile[pile.len() - tail..].to_vec());
        }
        info
    }
}

/// Searches for card sets whose pip values sum to fifteen.
#[derive(Debug, Clone, Copy, Default)]
pub struct FifteenCombination;

impl Combination for FifteenCombination {
    fn pattern(&self) -> Pattern {
        Pattern::Fifteen
    }

    /// Every subset summing to fifteen scores 2; subsets are independent, so
    /// one card may take part in several fifteens.
    fn showing(&self, cards: &[Card], starter: Option<Card>) -> ComboInfo {
        let all = gather(cards, starter);
        let mut info = ComboInfo::none(Pattern::Fifteen);

        for mask in 1u32..(1 << all.len()) {
            let mut sum = 0u32;
            for (i, card) in all.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    sum += u32::from(card.pip_value());
                }
            }
            if sum == 15 {
                info.instances += 1;
                info.matches.push(
                    all.iter()
                        .enumerate()
                        .filter(|(i, _)| mask & (1 << i) != 0)
                        .map(|(_, card)| *card)
                        .collect(),
                );
            }
        }

        info.score = info.instances * 2;
        info
    }

    /// During play a fifteen exists only when the running count is exactly 15.
    fn playing(&self, pile: &[Card]) -> ComboInfo {
        let mut info = ComboInfo::none(Pattern::Fifteen);
        let count: u32 = pile.iter().map(|card| u32::from(card.pip_value())).sum();
        if count == 15 {
            info.instances = 1;
            info.score = 2;
            info.matches.push(pile.to_vec());
        }
        info
    }
}

/// Searches for runs of three or more consecutive ranks.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunCombination;

impl RunCombination {
    /// Expands duplicate ranks inside a run window into the concrete card
    /// selections, one per parallel run.
    fn expand(groups: &[&[Card]]) -> Vec<Vec<Card>> {
        let mut runs: Vec<Vec<Card>> = vec![Vec::new()];
        for group in groups {
            let mut next = Vec::new();
            for prefix in &runs {
                for card in *group {
                    let mut run = prefix.clone();
                    run.push(*card);
                    next.push(run);
                }
            }
            runs = next;
        }
        runs
    }
}

impl Combination for RunCombination {
    fn pattern(&self) -> Pattern {
        Pattern::Run
    }

    /// The single longest stretch of consecutive ranks (length >= 3) scores
    /// its length once per parallel run formed by duplicate ranks.
    fn showing(&self, cards: &[Card], starter: Option<Card>) -> ComboInfo {
        let all = gather(cards, starter);
        let mut info = ComboInfo::none(Pattern::Run);

        let mut by_rank: [Vec<Card>; 14] = core::array::from_fn(|_| Vec::new());
        for card in &all {
            if (1..=13).contains(&card.rank) {
                by_rank[card.rank as usize].push(*card);
            }
        }

        // Longest stretch of consecutively present ranks. At most one stretch
        // of length >= 3 can exist in a five-card hand.
        let mut best: Option<(usize, usize)> = None;
        let mut start = None;
        for rank in 1..=14usize {
            if rank <= 13 && !by_rank[rank].is_empty() {
                start.get_or_insert(rank);
            } else if let Some(lo) = start.take() {
                let len = rank - lo;
                if best.is_none_or(|(_, best_len)| len > best_len) {
                    best = Some((lo, len));
                }
            }
        }

        if let Some((lo, len)) = best {
            if len >= 3 {
                let groups: Vec<&[Card]> = (lo..lo + len)
                    .map(|rank| by_rank[rank].as_slice())
                    .collect();
                info.matches = Self::expand(&groups);
                info.instances = info.matches.len() as u32;
                info.score = info.instances * len as u32;
            }
        }
        info
    }

    /// Only the longest run ending at the newest card scores; a run extended
    /// by the latest play never re-scores the shorter run it contains.
    fn playing(&self, pile: &[Card]) -> ComboInfo {
        let mut info = ComboInfo::none(Pattern::Run);

        for len in (3..=pile.len()).rev() {
            let tail = &pile[pile.len() - len..];
            let mut ranks: Vec<u8> = tail.iter().map(|card| card.rank).collect();
            ranks.sort_unstable();
            if ranks.windows(2).all(|pair| pair[1] == pair[0] + 1) {
                info.instances = 1;
                info.score = len as u32;
                info.matches.push(tail.to_vec());
                break;
            }
        }
        info
    }
}

/// Searches for four hand cards of a single suit.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlushCombination {
    crib: bool,
}

impl FlushCombination {
    /// Creates a flush scorer with ordinary hand rules.
    #[must_use]
    pub const fn new() -> Self {
        Self { crib: false }
    }

    /// Creates a flush scorer with crib rules: the starter must match the
    /// hand suit, so there is no four-point crib flush.
    #[must_use]
    pub const fn for_crib() -> Self {
        Self { crib: true }
    }
}

impl Combination for FlushCombination {
    fn pattern(&self) -> Pattern {
        Pattern::Flush
    }

    fn showing(&self, cards: &[Card], starter: Option<Card>) -> ComboInfo {
        let mut info = ComboInfo::none(Pattern::Flush);
        let Some(first) = cards.first() else {
            return info;
        };
        if cards.len() != 4 || cards.iter().any(|card| card.suit != first.suit) {
            return info;
        }

        let starter_matches = starter.is_some_and(|card| card.suit == first.suit);
        if self.crib && !starter_matches {
            return info;
        }

        let mut matched = cards.to_vec();
        if starter_matches {
            if let Some(card) = starter {
                matched.push(card);
            }
        }
        info.instances = 1;
        info.score = matched.len() as u32;
        info.matches.push(matched);
        info
    }
}

/// Searches for the jack matching the starter's suit.
#[derive(Debug, Clone, Copy, Default)]
pub struct HisNobsCombination;

impl Combination for HisNobsCombination {
    fn pattern(&self) -> Pattern {
        Pattern::HisNobs
    }

    fn showing(&self, cards: &[Card], starter: Option<Card>) -> ComboInfo {
        let mut info = ComboInfo::none(Pattern::HisNobs);
        let Some(starter) = starter else {
            return info;
        };

        for card in cards {
            if card.is_jack() && card.suit == starter.suit {
                info.instances += 1;
                info.matches.push(vec![*card]);
            }
        }
        info.score = info.instances;
        info
    }
}

/// Scores a hand at the show against the starter.
///
/// `crib` selects crib flush rules. Returns the total alongside the reports
/// of every pattern that scored.
#[must_use]
pub fn score_showing(cards: &[Card], starter: Option<Card>, crib: bool) -> (u32, Vec<ComboInfo>) {
    let flush = if crib {
        FlushCombination::for_crib()
    } else {
        FlushCombination::new()
    };
    let scorers: [&dyn Combination; 5] = [
        &PairCombination,
        &FifteenCombination,
        &RunCombination,
        &flush,
        &HisNobsCombination,
    ];

    let mut total = 0;
    let mut found = Vec::new();
    for scorer in scorers {
        let info = scorer.showing(cards, starter);
        if info.score > 0 {
            total += info.score;
            found.push(info);
        }
    }
    (total, found)
}

/// Scores the round pile after a play.
///
/// Flush and his nobs never score during play, so only pair, fifteen, and
/// run scorers are consulted.
#[must_use]
pub fn score_playing(pile: &[Card]) -> (u32, Vec<ComboInfo>) {
    let scorers: [&dyn Combination; 3] =
        [&PairCombination, &FifteenCombination, &RunCombination];

    let mut total = 0;
    let mut found = Vec::new();
    for scorer in scorers {
        let info = scorer.playing(pile);
        if info.score > 0 {
            total += info.score;
            found.push(info);
        }
    }
    (total, found)
}
