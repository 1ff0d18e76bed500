//! Card, deck and hand integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use trips::{
    Card, CardError, DECK_SIZE, DealError, Deck, DeckError, HAND_SIZE, Hand, Rank, Suit,
};

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

fn hand(cards: &[&str]) -> Hand {
    let cards: Vec<Card> = cards.iter().map(|s| card(s)).collect();
    Hand::from_cards(&cards).unwrap()
}

#[test]
fn every_rank_and_suit_builds_a_card() {
    for rank in 0..13 {
        for suit in 0..4 {
            let card = Card::new(
                Rank::from_index(rank).unwrap(),
                Suit::from_index(suit).unwrap(),
            );
            assert_eq!(card.rank.index(), rank);
            assert_eq!(card.suit.index(), suit);
        }
    }

    for rank in ["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"] {
        for suit in ["♣", "♦", "♥", "♠"] {
            assert!(Card::from_symbols(rank, suit).is_ok(), "{rank}{suit}");
        }
    }
}

#[test]
fn out_of_range_values_are_rejected() {
    assert_eq!(Rank::from_index(13), Err(CardError::InvalidRank));
    assert_eq!(Suit::from_index(4), Err(CardError::InvalidSuit));
    assert_eq!(Card::from_symbols("1", "♣"), Err(CardError::InvalidRank));
    assert_eq!(Card::from_symbols("11", "♣"), Err(CardError::InvalidRank));
    assert_eq!(Card::from_symbols("Z", "♣"), Err(CardError::InvalidRank));
    assert_eq!(Card::from_symbols("7", "x"), Err(CardError::InvalidSuit));
    assert_eq!(Card::from_symbols("7", ""), Err(CardError::InvalidSuit));
    // Rank is checked before suit.
    assert_eq!(Card::from_symbols("1", "x"), Err(CardError::InvalidRank));
}

#[test]
fn parse_and_display() {
    assert_eq!(card("7♣"), Card::new(Rank::Seven, Suit::Clubs));
    assert_eq!(card("10h"), Card::new(Rank::Ten, Suit::Hearts));
    assert_eq!(card("Td"), Card::new(Rank::Ten, Suit::Diamonds));
    assert_eq!(card("As"), Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(card("q♦\u{fe0f}"), Card::new(Rank::Queen, Suit::Diamonds));

    assert_eq!("".parse::<Card>(), Err(CardError::InvalidRank));
    assert_eq!("7".parse::<Card>(), Err(CardError::InvalidSuit));
    assert_eq!("10".parse::<Card>(), Err(CardError::InvalidSuit));

    assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
    assert_eq!(card("jc").to_string(), "J♣");
}

#[test]
fn ordering_follows_rank_regardless_of_suit() {
    for (low, high) in Rank::ALL.iter().zip(Rank::ALL.iter().skip(1)) {
        for a in Suit::ALL {
            for b in Suit::ALL {
                let low = Card::new(*low, a);
                let high = Card::new(*high, b);
                assert!(high.outranks(&low));
                assert!(!low.outranks(&high));
            }
        }
    }

    assert!(card("A♣").outranks(&card("2♠")));
    assert!(!card("7♣").outranks(&card("7♠")));
}

#[test]
fn rank_equality_ignores_suit() {
    assert!(card("7♣").same_rank(&card("7♦")));
    assert!(card("7♣").same_rank(&card("7♣")));
    assert!(!card("7♣").same_rank(&card("8♣")));
    assert_eq!(card("K♥").rank_cmp(&card("K♠")), core::cmp::Ordering::Equal);

    // Identity still distinguishes suits.
    assert_ne!(card("7♣"), card("7♦"));

    for a in Rank::ALL {
        for b in Rank::ALL {
            let same = Card::new(a, Suit::Hearts).same_rank(&Card::new(b, Suit::Spades));
            assert_eq!(same, a == b);
        }
    }
}

#[test]
fn new_deck_holds_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(DECK_SIZE, 52);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for rank in Rank::ALL {
        for suit in Suit::ALL {
            assert!(unique.contains(&Card::new(rank, suit)));
        }
    }

    assert_eq!(deck.cards()[0], card("2♣"));
    assert_eq!(deck.cards()[1], card("2♦"));
    assert_eq!(deck.cards()[51], card("A♠"));
    assert_eq!(Deck::default(), deck);
}

#[test]
fn shuffle_preserves_cards_and_changes_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let canonical = Deck::new();
    let mut reordered = 0;

    for _ in 0..20 {
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);

        let mut sorted = deck.cards().to_vec();
        sorted.sort_by_key(|c| (c.rank, c.suit.index()));
        assert_eq!(sorted, canonical.cards());

        if deck != canonical {
            reordered += 1;
        }
    }

    assert_eq!(reordered, 20);
}

#[test]
fn shuffle_is_repeatable() {
    let mut first = Deck::new();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(5));
    let mut second = Deck::new();
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(5));
    assert_eq!(first, second);

    // Shuffling an already shuffled deck keeps it whole.
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(6));
    let unique: HashSet<Card> = first.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn stacked_deck_puts_cards_on_top() {
    let top = [card("7♣"), card("7♦"), card("7♥"), card("2♠"), card("9♣")];
    let deck = Deck::stacked(&top).unwrap();

    assert_eq!(&deck.cards()[..5], &top);
    assert_eq!(deck.len(), DECK_SIZE);
    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    assert_eq!(Deck::stacked(&[]).unwrap(), Deck::new());
}

#[test]
fn stacked_deck_rejects_duplicates() {
    assert_eq!(
        Deck::stacked(&[card("7♣"), card("8♣"), card("7♣")]),
        Err(DeckError::DuplicateCard(card("7♣")))
    );
    assert!(Deck::stacked(&[card("7♣"), card("7♦")]).is_ok());
}

#[test]
fn hand_takes_top_five_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);

    let hand = Hand::deal(&deck).unwrap();
    assert_eq!(hand.cards().len(), HAND_SIZE);
    assert_eq!(hand.cards().as_slice(), &deck.cards()[..HAND_SIZE]);

    let dealt = *hand.cards();
    deck.shuffle(&mut rng);
    assert_eq!(*hand.cards(), dealt);
}

#[test]
fn hand_needs_five_cards() {
    let cards = [card("2♣"), card("3♣"), card("4♣"), card("5♣")];
    assert_eq!(
        Hand::from_cards(&cards),
        Err(DealError::InsufficientCards { available: 4 })
    );
    assert_eq!(
        Hand::from_cards(&[]),
        Err(DealError::InsufficientCards { available: 0 })
    );

    let six = [
        card("2♣"),
        card("3♣"),
        card("4♣"),
        card("5♣"),
        card("6♣"),
        card("7♣"),
    ];
    assert_eq!(Hand::from_cards(&six).unwrap().cards(), &six[..5]);
}

#[test]
fn three_of_a_kind_classification() {
    // {3, 1, 1}
    assert!(hand(&["7♣", "7♦", "7♥", "2♠", "9♣"]).is_three_of_a_kind());
    // {3, 2}: a full house still counts.
    assert!(hand(&["7♣", "7♦", "7♥", "2♠", "2♣"]).is_three_of_a_kind());

    // {1, 1, 1, 1, 1}
    assert!(!hand(&["2♣", "5♦", "7♥", "9♠", "J♣"]).is_three_of_a_kind());
    // {2, 2, 1}
    assert!(!hand(&["7♣", "7♦", "2♥", "2♠", "9♣"]).is_three_of_a_kind());
    // {2, 1, 1, 1}
    assert!(!hand(&["7♣", "7♦", "2♥", "3♠", "9♣"]).is_three_of_a_kind());
    // {4, 1}
    assert!(!hand(&["7♣", "7♦", "7♥", "7♠", "9♣"]).is_three_of_a_kind());
}

#[test]
fn rank_counts_group_by_rank() {
    let counts = hand(&["A♣", "A♦", "K♥", "A♠", "2♣"]).rank_counts();
    assert_eq!(counts[Rank::Ace.index() as usize], 3);
    assert_eq!(counts[Rank::King.index() as usize], 1);
    assert_eq!(counts[Rank::Two.index() as usize], 1);
    assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), HAND_SIZE);
}

#[test]
fn stacked_three_of_a_kind_is_detected() {
    let deck =
        Deck::stacked(&[card("7♣"), card("7♦"), card("7♥"), card("2♠"), card("9♣")]).unwrap();
    assert!(Hand::deal(&deck).unwrap().is_three_of_a_kind());
}

#[test]
fn stacked_two_pair_is_not_three_of_a_kind() {
    let deck =
        Deck::stacked(&[card("7♣"), card("7♦"), card("2♥"), card("2♠"), card("9♣")]).unwrap();
    assert!(!Hand::deal(&deck).unwrap().is_three_of_a_kind());
}
