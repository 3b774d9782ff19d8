//! Hand scoring and sprite-sheet tests.

use bjtable::hand::score;
use bjtable::{AceRule, Card, ClipRect, DealerHand, Hand, SpriteSheet, Suit};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

#[test]
fn demoting_scores() {
    let rule = AceRule::Demoting;
    assert_eq!(score([1], rule), 11);
    assert_eq!(score([1, 1], rule), 12);
    assert_eq!(score([1, 9], rule), 20);
    assert_eq!(score([1, 1, 9], rule), 21);
    assert_eq!(score([10, 9, 3], rule), 22);
    assert_eq!(score([1, 5, 6], rule), 12);
    assert_eq!(score([1, 1, 1, 1], rule), 14);
    assert_eq!(score(core::iter::empty(), rule), 0);
}

#[test]
fn greedy_scores_keep_the_first_ace_decision() {
    let rule = AceRule::Greedy;
    assert_eq!(score([1], rule), 11);
    assert_eq!(score([1, 1], rule), 12);
    assert_eq!(score([1, 9], rule), 20);
    assert_eq!(score([1, 1, 9], rule), 21);
    assert_eq!(score([10, 9, 3], rule), 22);
    assert_eq!(score([1, 5, 6], rule), 22);
    assert_eq!(score([5, 6, 1], rule), 12);
}

#[test]
fn at_most_one_ace_counts_high() {
    for rule in [AceRule::Demoting, AceRule::Greedy] {
        for aces in 1..=4_u8 {
            let hand = vec![1; aces as usize];
            assert_eq!(score(hand, rule), 10 + aces, "{rule:?} with {aces} aces");
        }
    }
}

#[test]
fn hand_value_and_bust() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Clubs, 5));
    assert_eq!(hand.value(AceRule::Demoting), 16);

    hand.add_card(card(Suit::Spades, 6));
    assert_eq!(hand.len(), 3);
    assert_eq!(hand.value(AceRule::Demoting), 12);
    assert!(!hand.is_bust(AceRule::Demoting));
    assert!(hand.is_bust(AceRule::Greedy));

    hand.add_card(card(Suit::Diamonds, 12));
    assert_eq!(hand.value(AceRule::Demoting), 22);
    assert!(hand.is_bust(AceRule::Demoting));

    hand.clear();
    assert!(hand.is_empty());
}

#[test]
fn dealer_hand_up_card_and_drawn_cards() {
    let mut dealer = DealerHand::new();
    assert!(dealer.drawn().is_empty());

    dealer.add_card(card(Suit::Hearts, 13));
    dealer.add_card(card(Suit::Clubs, 6));
    dealer.add_card(card(Suit::Clubs, 3));

    assert_eq!(dealer.up_card(), Some(&card(Suit::Hearts, 13)));
    assert_eq!(
        dealer.drawn(),
        &[card(Suit::Clubs, 6), card(Suit::Clubs, 3)]
    );
    assert_eq!(dealer.value(AceRule::Demoting), 19);
    assert!(!dealer.is_hole_revealed());

    dealer.reveal_hole();
    assert!(dealer.is_hole_revealed());

    dealer.clear();
    assert!(dealer.is_empty());
    assert!(!dealer.is_hole_revealed());
}

#[test]
fn sprite_sheet_clips_by_rank_column_and_suit_row() {
    let sheet = SpriteSheet::default();

    assert_eq!(
        sheet.clip(Card::from_region(0)),
        ClipRect {
            x: 0,
            y: 0,
            width: 112,
            height: 156,
        }
    );
    assert_eq!(
        sheet.clip(Card::from_region(5)),
        ClipRect {
            x: 112,
            y: 156,
            width: 112,
            height: 156,
        }
    );

    let king = sheet.clip(card(Suit::Spades, 13));
    assert_eq!((king.x, king.y), (12 * 112, 3 * 156));

    let small = SpriteSheet::new(10, 20).clip(Card::from_region(7));
    assert_eq!((small.x, small.y, small.width, small.height), (10, 60, 10, 20));
}
