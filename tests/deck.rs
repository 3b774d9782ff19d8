//! Deck, shuffle, and draw cursor tests.

use std::collections::HashMap;

use bjtable::deck::fisher_yates;
use bjtable::{
    Card, DECK_SIZE, Deck, DeckError, DrawCursor, DrawError, RandomShuffler, Shuffler, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn standard_deck_maps_regions_to_values() {
    let deck = Deck::new();

    for (index, card) in deck.cards().iter().enumerate() {
        assert_eq!(card.region() as usize, index);
    }

    for region in 0..4 {
        assert_eq!(Card::from_region(region).value(), 1);
    }
    assert_eq!(Card::from_region(4).value(), 2);
    assert_eq!(Card::from_region(35).value(), 9);
    for region in 36..52 {
        assert_eq!(Card::from_region(region).value(), 10);
    }

    let king = Card::new(Suit::Spades, 13);
    assert_eq!(king.region(), 51);
    assert_eq!(king.rank(), 13);
    assert_eq!(king.suit(), Suit::Spades);
    assert_eq!(king.value(), 10);

    let ace = Card::new(Suit::Diamonds, 1);
    assert_eq!(ace.region(), 1);
    assert!(ace.is_ace());

    assert_eq!(Card::try_from_region(52), None);
}

#[test]
fn from_regions_rejects_bad_orders() {
    let mut order: [u8; DECK_SIZE] = core::array::from_fn(|i| i as u8);
    order.reverse();
    let deck = Deck::from_regions(order).unwrap();
    assert_eq!(deck.get(0), Some(Card::from_region(51)));
    assert_eq!(deck.get(51), Some(Card::from_region(0)));

    let mut duplicate = order;
    duplicate[10] = duplicate[11];
    assert_eq!(
        Deck::from_regions(duplicate).unwrap_err(),
        DeckError::DuplicateCard(duplicate[11])
    );

    let mut invalid = order;
    invalid[0] = 60;
    assert_eq!(
        Deck::from_regions(invalid).unwrap_err(),
        DeckError::InvalidRegion(60)
    );
}

#[test]
fn shuffle_is_a_permutation_that_keeps_values_with_regions() {
    let mut shuffler = RandomShuffler::new(9);
    let mut deck = Deck::new();

    for _ in 0..100 {
        shuffler.shuffle(&mut deck);

        let mut regions: Vec<u8> = deck.cards().iter().map(Card::region).collect();
        regions.sort_unstable();
        assert_eq!(regions, (0..52).collect::<Vec<u8>>());

        for card in deck.cards() {
            assert_eq!(card.value(), Card::from_region(card.region()).value());
        }
    }
}

#[test]
fn shuffle_actually_moves_cards() {
    let mut deck = Deck::new();
    RandomShuffler::new(1).shuffle(&mut deck);
    assert_ne!(deck, Deck::new());
}

#[test]
fn seeded_shuffles_are_reproducible() {
    let mut first = Deck::new();
    let mut second = Deck::new();
    let mut third = Deck::new();

    RandomShuffler::new(42).shuffle(&mut first);
    RandomShuffler::new(42).shuffle(&mut second);
    RandomShuffler::new(43).shuffle(&mut third);

    assert_eq!(first, second);
    assert_ne!(first, third);
}

#[test]
fn fisher_yates_permutations_are_uniform() {
    const RUNS: u32 = 60_000;
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut counts: HashMap<[u8; 3], u32> = HashMap::new();

    for _ in 0..RUNS {
        let mut items = [0_u8, 1, 2];
        fisher_yates(&mut items, &mut rng);
        *counts.entry(items).or_default() += 1;
    }

    assert_eq!(counts.len(), 6);

    let expected = f64::from(RUNS) / 6.0;
    let chi_square: f64 = counts
        .values()
        .map(|&observed| {
            let diff = f64::from(observed) - expected;
            diff * diff / expected
        })
        .sum();

    // Five degrees of freedom.
    assert!(chi_square < 30.0, "chi-square {chi_square}");
}

#[test]
fn every_card_lands_in_every_position_evenly() {
    const RUNS: usize = 20_800;
    let expected = RUNS / DECK_SIZE;
    let mut counts = vec![[0_usize; DECK_SIZE]; DECK_SIZE];
    let mut shuffler = RandomShuffler::new(77);

    for _ in 0..RUNS {
        let mut deck = Deck::new();
        shuffler.shuffle(&mut deck);
        for (position, card) in deck.cards().iter().enumerate() {
            counts[card.region() as usize][position] += 1;
        }
    }

    for (region, positions) in counts.iter().enumerate() {
        for (position, &count) in positions.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < 130,
                "card {region} at position {position}: {count}"
            );
        }
    }
}

#[test]
fn fisher_yates_leaves_short_slices_alone() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut empty: [u8; 0] = [];
    fisher_yates(&mut empty, &mut rng);

    let mut single = [7_u8];
    fisher_yates(&mut single, &mut rng);
    assert_eq!(single, [7]);
}

#[test]
fn cursor_draws_from_both_ends() {
    let deck = Deck::new();
    let mut cursor = DrawCursor::new();

    assert_eq!(cursor.remaining(), 52);
    assert_eq!(cursor.draw_front(&deck).unwrap().region(), 0);
    assert_eq!(cursor.draw_front(&deck).unwrap().region(), 1);
    assert_eq!(cursor.draw_back(&deck).unwrap().region(), 51);
    assert_eq!(cursor.draw_back(&deck).unwrap().region(), 50);
    assert_eq!(cursor.remaining(), 48);

    cursor.reset();
    assert_eq!(cursor.remaining(), 52);
    assert_eq!(cursor.draw_back(&deck).unwrap().region(), 51);
}

#[test]
fn cursor_reports_exhaustion_instead_of_reading_past_the_deck() {
    let deck = Deck::new();
    let mut cursor = DrawCursor::new();
    let mut seen = Vec::new();

    for i in 0..DECK_SIZE {
        let card = if i % 2 == 0 {
            cursor.draw_front(&deck)
        } else {
            cursor.draw_back(&deck)
        };
        seen.push(card.unwrap().region());
    }

    seen.sort_unstable();
    assert_eq!(seen, (0..52).collect::<Vec<u8>>());
    assert_eq!(cursor.remaining(), 0);
    assert_eq!(cursor.draw_front(&deck), Err(DrawError::DeckExhausted));
    assert_eq!(cursor.draw_back(&deck), Err(DrawError::DeckExhausted));
}
