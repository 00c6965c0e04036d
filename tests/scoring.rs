//! Combination scorer and crib advisor tests.

use cribrs::{
    Card, Combination, FifteenCombination, FlushCombination, HisNobsCombination, PairCombination,
    RunCombination, Suit, best_for_dealer, best_for_player, evaluate_splits, guaranteed_score,
    score_playing, score_showing,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

#[test]
fn pair_counts_every_equal_rank_pair() {
    let hand = [
        card(Suit::Spades, 9),
        card(Suit::Clubs, 11),
        card(Suit::Hearts, 11),
    ];
    let info = PairCombination.showing(&hand, None);
    assert_eq!(info.instances, 1);
    assert_eq!(info.score, 2);

    let hand = [
        card(Suit::Spades, 11),
        card(Suit::Clubs, 11),
        card(Suit::Hearts, 11),
        card(Suit::Diamonds, 9),
    ];
    let info = PairCombination.showing(&hand, None);
    assert_eq!(info.instances, 3);
    assert_eq!(info.score, 6);
}

#[test]
fn fifteen_nine_and_six_scores_once() {
    let hand = [card(Suit::Spades, 9), card(Suit::Clubs, 6)];
    let info = FifteenCombination.showing(&hand, None);
    assert_eq!(info.instances, 1);
    assert_eq!(info.score, 2);
}

#[test]
fn fifteen_counts_independent_subsets() {
    // Three fives and a king: 5+5+5 plus three 5+K combinations.
    let hand = [
        card(Suit::Spades, 5),
        card(Suit::Clubs, 5),
        card(Suit::Hearts, 5),
        card(Suit::Diamonds, 13),
    ];
    let info = FifteenCombination.showing(&hand, None);
    assert_eq!(info.instances, 4);
    assert_eq!(info.score, 8);
}

#[test]
fn run_of_three_ignores_pile_order() {
    let hand = [
        card(Suit::Spades, 9),
        card(Suit::Clubs, 11),
        card(Suit::Hearts, 10),
    ];
    let info = RunCombination.showing(&hand, None);
    assert_eq!(info.instances, 1);
    assert_eq!(info.score, 3);
}

#[test]
fn double_run_scores_each_parallel_run() {
    let hand = [
        card(Suit::Spades, 9),
        card(Suit::Hearts, 9),
        card(Suit::Spades, 10),
        card(Suit::Spades, 11),
    ];
    let info = RunCombination.showing(&hand, None);
    assert_eq!(info.instances, 2);
    assert_eq!(info.score, 6);
}

#[test]
fn run_with_starter_scores_longest_only() {
    let hand = [
        card(Suit::Spades, 2),
        card(Suit::Clubs, 3),
        card(Suit::Hearts, 4),
        card(Suit::Diamonds, 5),
    ];
    let info = RunCombination.showing(&hand, Some(card(Suit::Clubs, 6)));
    assert_eq!(info.instances, 1);
    assert_eq!(info.score, 5);
}

#[test]
fn flush_scores_four_or_five() {
    let hand = [
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 4),
        card(Suit::Hearts, 8),
        card(Suit::Hearts, 13),
    ];
    let info = FlushCombination::new().showing(&hand, Some(card(Suit::Spades, 9)));
    assert_eq!(info.score, 4);

    let info = FlushCombination::new().showing(&hand, Some(card(Suit::Hearts, 9)));
    assert_eq!(info.score, 5);

    let mixed = [
        card(Suit::Hearts, 2),
        card(Suit::Spades, 4),
        card(Suit::Hearts, 8),
        card(Suit::Hearts, 13),
    ];
    let info = FlushCombination::new().showing(&mixed, Some(card(Suit::Hearts, 9)));
    assert_eq!(info.score, 0);
}

#[test]
fn crib_flush_requires_matching_starter() {
    let crib = [
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 4),
        card(Suit::Hearts, 8),
        card(Suit::Hearts, 13),
    ];
    let info = FlushCombination::for_crib().showing(&crib, Some(card(Suit::Spades, 9)));
    assert_eq!(info.score, 0);

    let info = FlushCombination::for_crib().showing(&crib, Some(card(Suit::Hearts, 9)));
    assert_eq!(info.score, 5);
}

#[test]
fn his_nobs_needs_the_matching_jack() {
    let hand = [
        card(Suit::Hearts, 11),
        card(Suit::Spades, 4),
        card(Suit::Clubs, 8),
        card(Suit::Diamonds, 13),
    ];
    let info = HisNobsCombination.showing(&hand, Some(card(Suit::Hearts, 5)));
    assert_eq!(info.score, 1);

    let info = HisNobsCombination.showing(&hand, Some(card(Suit::Spades, 5)));
    assert_eq!(info.score, 0);
}

#[test]
fn showing_score_is_order_insensitive() {
    // 4-5-6 triple run with three fives: fifteens 8, pairs 6, runs 9.
    let cards = [
        card(Suit::Spades, 4),
        card(Suit::Clubs, 6),
        card(Suit::Hearts, 5),
        card(Suit::Diamonds, 5),
    ];
    let starter = card(Suit::Clubs, 5);
    let (expected, _) = score_showing(&cards, Some(starter), false);
    assert_eq!(expected, 23);

    let mut shuffled = cards;
    shuffled.swap(0, 3);
    shuffled.swap(1, 2);
    assert_eq!(score_showing(&shuffled, Some(starter), false).0, expected);

    shuffled.swap(0, 1);
    assert_eq!(score_showing(&shuffled, Some(starter), false).0, expected);
}

#[test]
fn playing_scores_run_and_fifteen_together() {
    let pile = [
        card(Suit::Spades, 4),
        card(Suit::Clubs, 6),
        card(Suit::Hearts, 5),
    ];
    let (total, combos) = score_playing(&pile);
    assert_eq!(total, 5);
    assert_eq!(combos.len(), 2);
}

#[test]
fn playing_pair_royal_scores_by_tail_length() {
    let two = [card(Suit::Spades, 2), card(Suit::Hearts, 2)];
    assert_eq!(score_playing(&two).0, 2);

    let three = [
        card(Suit::Spades, 2),
        card(Suit::Hearts, 2),
        card(Suit::Diamonds, 2),
    ];
    assert_eq!(score_playing(&three).0, 6);

    let four = [
        card(Suit::Spades, 2),
        card(Suit::Hearts, 2),
        card(Suit::Diamonds, 2),
        card(Suit::Clubs, 2),
    ];
    assert_eq!(score_playing(&four).0, 12);
}

#[test]
fn playing_pair_needs_the_tail() {
    // The nines are buried; the tail card breaks the pair.
    let pile = [
        card(Suit::Spades, 9),
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 5),
    ];
    assert_eq!(score_playing(&pile).0, 0);
}

#[test]
fn playing_run_extension_does_not_rescore() {
    let pile = [
        card(Suit::Spades, 4),
        card(Suit::Clubs, 5),
        card(Suit::Hearts, 6),
        card(Suit::Diamonds, 7),
    ];
    let (total, combos) = score_playing(&pile);
    assert_eq!(total, 4);
    assert_eq!(combos.len(), 1);
    assert_eq!(combos[0].matches[0].len(), 4);
}

#[test]
fn playing_run_accepts_out_of_order_tail() {
    let pile = [
        card(Suit::Spades, 9),
        card(Suit::Clubs, 11),
        card(Suit::Hearts, 10),
    ];
    assert_eq!(score_playing(&pile).0, 3);
}

#[test]
fn evaluate_splits_is_exhaustive() {
    let six = [
        card(Suit::Spades, 10),
        card(Suit::Clubs, 5),
        card(Suit::Diamonds, 10),
        card(Suit::Clubs, 3),
        card(Suit::Hearts, 8),
        card(Suit::Hearts, 13),
    ];
    let splits = evaluate_splits(&six);
    assert_eq!(splits.len(), 15);

    for split in &splits {
        let mut combined: Vec<Card> = split.kept.to_vec();
        combined.extend_from_slice(&split.discarded);
        assert_eq!(combined.len(), 6);
        for original in &six {
            assert!(combined.contains(original));
        }
    }
}

#[test]
fn guaranteed_score_ignores_the_starter_patterns() {
    // Double run of three plus a pair; no flush with mixed suits.
    let hand = [
        card(Suit::Spades, 9),
        card(Suit::Hearts, 9),
        card(Suit::Spades, 10),
        card(Suit::Spades, 11),
    ];
    assert_eq!(guaranteed_score(&hand), 8);

    // A flush is guaranteed without any starter.
    let flush = [
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 4),
        card(Suit::Hearts, 8),
        card(Suit::Hearts, 13),
    ];
    assert_eq!(guaranteed_score(&flush), 4);
}

#[test]
fn dealer_keeps_the_tens_and_feeds_the_crib() {
    let six = [
        card(Suit::Spades, 10),
        card(Suit::Clubs, 5),
        card(Suit::Diamonds, 10),
        card(Suit::Clubs, 3),
        card(Suit::Hearts, 8),
        card(Suit::Hearts, 13),
    ];
    let splits = evaluate_splits(&six);
    let best = best_for_dealer(&splits).expect("fifteen splits");

    assert_eq!(best.kept_score, 8);
    assert_eq!(best.discarded, [card(Suit::Clubs, 3), card(Suit::Hearts, 8)]);
    assert_eq!(best.discarded_score, 0);
}

#[test]
fn dealer_and_player_rank_splits_differently() {
    let six = [
        card(Suit::Spades, 7),
        card(Suit::Clubs, 8),
        card(Suit::Diamonds, 9),
        card(Suit::Hearts, 2),
        card(Suit::Spades, 2),
        card(Suit::Clubs, 6),
    ];
    let splits = evaluate_splits(&six);

    // The dealer banks the pair of twos in its own crib.
    let dealer = best_for_dealer(&splits).expect("fifteen splits");
    assert_eq!(
        dealer.discarded,
        [card(Suit::Hearts, 2), card(Suit::Spades, 2)]
    );
    assert_eq!(dealer.kept_score + dealer.discarded_score, 9);

    // The player refuses to feed the crib and keeps the twos.
    let player = best_for_player(&splits).expect("fifteen splits");
    assert_eq!(
        player.kept,
        [
            card(Suit::Spades, 7),
            card(Suit::Hearts, 2),
            card(Suit::Spades, 2),
            card(Suit::Clubs, 6),
        ]
    );
    assert_eq!(player.kept_score, 6);
    assert_eq!(player.discarded_score, 0);
}
