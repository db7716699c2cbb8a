//! Hand scoring and rendering tests.

use bjlite::hand::score_cards;
use bjlite::{
    Card, DealerHand, Deck, DrawError, HIDDEN_CARD, Hand, Participant, PlayerHand, Rank, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn ranks(values: &[Rank]) -> Vec<Card> {
    values.iter().map(|&rank| card(Suit::Clubs, rank)).collect()
}

#[test]
fn scores_faces_and_numbers() {
    assert_eq!(
        score_cards(&ranks(&[Rank::King, Rank::Queen, Rank::Two])),
        22
    );
    assert_eq!(score_cards(&ranks(&[Rank::Jack, Rank::Nine])), 19);
    assert_eq!(
        score_cards(&ranks(&[Rank::Two, Rank::Three, Rank::Ten])),
        15
    );
    assert_eq!(score_cards(&[]), 0);
}

#[test]
fn aces_resolve_last_and_greedily() {
    assert_eq!(score_cards(&ranks(&[Rank::Ace, Rank::King])), 21);
    assert_eq!(score_cards(&ranks(&[Rank::Ace, Rank::Ace])), 12);
    assert_eq!(
        score_cards(&ranks(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Eight])),
        21
    );
    // The ace comes first but is still valued after the ten.
    assert_eq!(score_cards(&ranks(&[Rank::Ace, Rank::Ten, Rank::Five])), 16);
    assert_eq!(score_cards(&ranks(&[Rank::Nine, Rank::Ace])), 20);
    assert_eq!(score_cards(&ranks(&[Rank::Ten, Rank::Ace])), 21);
    assert_eq!(score_cards(&ranks(&[Rank::Jack, Rank::Ace])), 21);
    // An ace added once the total is past 10 counts 1.
    assert_eq!(
        score_cards(&ranks(&[Rank::Ace, Rank::Ace, Rank::Nine, Rank::Nine])),
        20
    );
    assert_eq!(score_cards(&ranks(&[Rank::Five, Rank::Ace, Rank::Ace])), 17);
}

#[test]
fn jokers_score_nothing() {
    assert_eq!(
        score_cards(&[Card::joker(), card(Suit::Hearts, Rank::Five)]),
        5
    );
}

#[test]
fn draw_moves_the_front_card() {
    let mut deck = Deck::from_cards(ranks(&[Rank::Ace, Rank::Six, Rank::Four]));
    let mut hand = Hand::new();

    let drawn = hand.draw(&mut deck).unwrap();
    assert_eq!(drawn.rank, Rank::Ace);
    assert_eq!(deck.len(), 2);
    assert_eq!(hand.len(), 1);
    assert_eq!(hand.points(), 11);

    hand.draw(&mut deck).unwrap();
    assert_eq!(hand.points(), 17);
    assert_eq!(deck.peek().map(|c| c.rank), Some(Rank::Four));
}

#[test]
fn draw_from_empty_deck_changes_nothing() {
    let mut deck = Deck::default();
    let mut player = PlayerHand::new(10);
    player.draw(&mut Deck::from_cards(ranks(&[Rank::Seven]))).unwrap();
    let before = player.clone();

    assert_eq!(player.draw(&mut deck), Err(DrawError::EmptyDeck));
    assert_eq!(player, before);
    assert!(deck.is_empty());
}

#[test]
fn blackjack_and_bust_helpers() {
    let mut deck = Deck::from_cards(ranks(&[Rank::Ace, Rank::Queen, Rank::Five]));
    let mut hand = Hand::new();
    hand.draw(&mut deck).unwrap();
    hand.draw(&mut deck).unwrap();
    assert!(hand.is_blackjack());
    assert!(!hand.is_bust());

    hand.draw(&mut deck).unwrap();
    assert_eq!(hand.score(), 16);
    assert!(!hand.is_blackjack());
}

#[test]
fn player_render_shows_everything() {
    let mut deck = Deck::from_cards(vec![
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::Nine),
    ]);
    let mut player = PlayerHand::new(250);
    player.draw(&mut deck).unwrap();
    player.draw(&mut deck).unwrap();

    let expected = vec![
        "Ace of Hearts".to_string(),
        "Nine of Spades".to_string(),
        "Score: 20".to_string(),
        "Money: 250".to_string(),
    ];
    assert_eq!(player.render(false), expected);
    assert_eq!(player.render(true), expected);
}

#[test]
fn dealer_render_hides_hole_card() {
    let mut deck = Deck::from_cards(vec![
        card(Suit::Diamonds, Rank::King),
        card(Suit::Clubs, Rank::Seven),
        card(Suit::Hearts, Rank::Two),
    ]);
    let mut dealer = DealerHand::new(0);
    for _ in 0..3 {
        dealer.draw(&mut deck).unwrap();
    }

    assert_eq!(
        dealer.render(false),
        vec!["King of Diamonds", HIDDEN_CARD, "Two of Hearts"]
    );
    assert_eq!(
        dealer.render(true),
        vec![
            "King of Diamonds",
            "Seven of Clubs",
            "Two of Hearts",
            "Score: 19",
            "Money: 0",
        ]
    );
    assert_eq!(dealer.up_card(), Some(&card(Suit::Diamonds, Rank::King)));
    assert_eq!(dealer.hole_card(), Some(&card(Suit::Clubs, Rank::Seven)));
}
