//! Full-game flow tests through the public command surface.
//!
//! These tests drive the engine the way a real client would:
//! - scripted dice via `roll_and_advance_with` for exact landings
//! - purchase decisions, jail sentences, doubles chains
//! - turn rotation and the game-over lock
//!
//! Cells referenced by number follow the standard layout: parcels at
//! 1 and 3 (Brown), the first railroad at 5, jail at 10, Free Parking
//! at 20, Go To Jail at 30.

use monopoly_engine::core::{DiceRoll, PlayerId, PropertyId, Token};
use monopoly_engine::engine::{GameBuilder, GameEvent, TurnPhase};
use monopoly_engine::error::GameError;

fn ann() -> PlayerId {
    PlayerId::new(0)
}

fn ben() -> PlayerId {
    PlayerId::new(1)
}

/// Test that passing Go pays the salary and the arriving player can buy
/// the first parcel at list price.
#[test]
fn test_wrap_salary_then_purchase() {
    let mut game = GameBuilder::new()
        .add_player("Ann", Token::Boot)
        .add_player("Ben", Token::Dog)
        .build(7);

    // Ann walks 11, 9, 11 around the top of the board, declining along
    // the way; Ben stays out of the story.
    game.roll_and_advance_with(DiceRoll::of(5, 6)).unwrap(); // Ann -> 11
    game.decide_purchase(false).unwrap();
    game.roll_and_advance_with(DiceRoll::of(2, 3)).unwrap(); // Ben -> 5
    game.decide_purchase(false).unwrap();
    game.roll_and_advance_with(DiceRoll::of(4, 5)).unwrap(); // Ann -> 20
    game.roll_and_advance_with(DiceRoll::of(4, 6)).unwrap(); // Ben -> 15
    game.decide_purchase(false).unwrap();
    game.roll_and_advance_with(DiceRoll::of(5, 6)).unwrap(); // Ann -> 31
    game.decide_purchase(false).unwrap();
    game.roll_and_advance_with(DiceRoll::of(2, 4)).unwrap(); // Ben -> 21
    game.decide_purchase(false).unwrap();

    // 31 + 10 wraps past Go onto cell 1, San Diego Drive.
    let snapshot = game.roll_and_advance_with(DiceRoll::of(4, 6)).unwrap();
    assert_eq!(
        snapshot.phase,
        TurnPhase::AwaitingDecision {
            property: PropertyId::new(0)
        }
    );
    assert!(game
        .events()
        .iter()
        .any(|event| matches!(event, GameEvent::SalaryCollected { amount: 200, .. })));

    game.decide_purchase(true).unwrap();

    let player = game.board().player(ann()).unwrap();
    assert_eq!(player.cash(), 1500 + 200 - 60);
    let parcel = game.board().property(PropertyId::new(0)).unwrap();
    assert_eq!(parcel.owner(), Some(ann()));
    assert!(parcel.is_purchased());
    assert!(game
        .events()
        .iter()
        .any(|event| matches!(event, GameEvent::PropertyPurchased { price: 60, .. })));
}

/// Test the doubles chain: two re-rolls, then the third double jails
/// without moving and hands the turn over.
#[test]
fn test_doubles_chain_ends_in_jail() {
    let mut game = GameBuilder::new()
        .add_player("Ann", Token::Boot)
        .add_player("Ben", Token::Dog)
        .build(7);

    let snapshot = game.roll_and_advance_with(DiceRoll::of(3, 3)).unwrap();
    assert!(matches!(snapshot.phase, TurnPhase::AwaitingDecision { .. }));
    let snapshot = game.decide_purchase(false).unwrap();
    assert_eq!(snapshot.current_player, ann(), "First double keeps the turn");

    let snapshot = game.roll_and_advance_with(DiceRoll::of(2, 2)).unwrap();
    assert_eq!(snapshot.current_player, ann(), "Second double keeps the turn");
    assert_eq!(game.board().player(ann()).unwrap().position().index(), 10);

    let snapshot = game.roll_and_advance_with(DiceRoll::of(1, 1)).unwrap();
    assert_eq!(snapshot.current_player, ben(), "Third double forfeits the turn");
    let player = game.board().player(ann()).unwrap();
    assert!(player.is_in_jail());
    assert_eq!(player.position().index(), 10, "Jailed without moving");
}

/// Test a full jail sentence: landing on Go To Jail, two failed escape
/// rolls, then the fine on the third and the roll walked out.
#[test]
fn test_jail_sentence_ends_with_fine() {
    let mut game = GameBuilder::new()
        .add_player("Ann", Token::Boot)
        .add_player("Ben", Token::Dog)
        .build(7);

    // Ann marches 10 at a time into the Go To Jail corner.
    game.roll_and_advance_with(DiceRoll::of(4, 6)).unwrap(); // Ann -> 10
    game.roll_and_advance_with(DiceRoll::of(2, 3)).unwrap(); // Ben -> 5
    game.decide_purchase(false).unwrap();
    game.roll_and_advance_with(DiceRoll::of(4, 6)).unwrap(); // Ann -> 20
    game.roll_and_advance_with(DiceRoll::of(5, 6)).unwrap(); // Ben -> 16
    game.decide_purchase(false).unwrap();
    game.roll_and_advance_with(DiceRoll::of(4, 6)).unwrap(); // Ann -> 30, jailed
    assert!(game.board().player(ann()).unwrap().is_in_jail());

    game.roll_and_advance_with(DiceRoll::of(1, 3)).unwrap(); // Ben -> 20

    game.roll_and_advance_with(DiceRoll::of(1, 2)).unwrap(); // Ann fails
    assert_eq!(game.board().player(ann()).unwrap().jail_turns(), 1);
    game.roll_and_advance_with(DiceRoll::of(1, 3)).unwrap(); // Ben -> 24
    game.decide_purchase(false).unwrap();

    game.roll_and_advance_with(DiceRoll::of(1, 2)).unwrap(); // Ann fails again
    assert_eq!(game.board().player(ann()).unwrap().jail_turns(), 2);
    game.roll_and_advance_with(DiceRoll::of(1, 4)).unwrap(); // Ben -> 29
    game.decide_purchase(false).unwrap();

    // Third failure pays the fine and walks the roll to cell 13.
    let snapshot = game.roll_and_advance_with(DiceRoll::of(1, 2)).unwrap();
    let player = game.board().player(ann()).unwrap();
    assert!(!player.is_in_jail());
    assert_eq!(player.cash(), 1450);
    assert_eq!(player.position().index(), 13);
    assert!(matches!(snapshot.phase, TurnPhase::AwaitingDecision { .. }));
    assert!(game
        .events()
        .iter()
        .any(|event| matches!(event, GameEvent::JailFinePaid { amount: 50, .. })));
    assert!(game
        .events()
        .iter()
        .any(|event| matches!(event, GameEvent::ReleasedFromJail { .. })));
}

/// Test that escape doubles move the player but earn no re-roll.
#[test]
fn test_jail_escape_doubles_earn_no_reroll() {
    let mut game = GameBuilder::new()
        .add_player("Ann", Token::Boot)
        .add_player("Ben", Token::Dog)
        .build(7);

    game.roll_and_advance_with(DiceRoll::of(4, 6)).unwrap(); // Ann -> 10
    game.roll_and_advance_with(DiceRoll::of(4, 6)).unwrap(); // Ben -> 10
    game.roll_and_advance_with(DiceRoll::of(4, 6)).unwrap(); // Ann -> 20
    game.roll_and_advance_with(DiceRoll::of(2, 3)).unwrap(); // Ben -> 15
    game.decide_purchase(false).unwrap();
    game.roll_and_advance_with(DiceRoll::of(4, 6)).unwrap(); // Ann -> 30, jailed

    game.roll_and_advance_with(DiceRoll::of(1, 3)).unwrap(); // Ben -> 19
    game.decide_purchase(false).unwrap();

    // Doubles escape: out to 14, and the turn ends after the decision.
    game.roll_and_advance_with(DiceRoll::of(2, 2)).unwrap();
    let player = game.board().player(ann()).unwrap();
    assert!(!player.is_in_jail());
    assert_eq!(player.position().index(), 14);
    let snapshot = game.decide_purchase(false).unwrap();
    assert_eq!(snapshot.current_player, ben(), "No re-roll from an escape double");
}

/// Test turn rotation across three players with benign landings.
#[test]
fn test_turn_order_rotates() {
    let mut game = GameBuilder::new()
        .add_player("Ann", Token::Boot)
        .add_player("Ben", Token::Dog)
        .add_player("Cora", Token::TopHat)
        .build(7);

    assert_eq!(game.current_player(), PlayerId::new(0));
    let snapshot = game.roll_and_advance_with(DiceRoll::of(4, 6)).unwrap();
    assert_eq!(snapshot.current_player, PlayerId::new(1));
    assert_eq!(snapshot.turn_number, 2);
    let snapshot = game.roll_and_advance_with(DiceRoll::of(4, 6)).unwrap();
    assert_eq!(snapshot.current_player, PlayerId::new(2));
    let snapshot = game.roll_and_advance_with(DiceRoll::of(4, 6)).unwrap();
    assert_eq!(snapshot.current_player, PlayerId::new(0), "Order wraps around");
    assert_eq!(snapshot.turn_number, 4);
}

/// Test that a penniless player bankrupts on the first tax and the
/// engine locks once the game is decided.
#[test]
fn test_game_over_locks_commands() {
    let mut game = GameBuilder::new()
        .add_player_with_cash("Ann", Token::Boot, 0)
        .add_player("Ben", Token::Dog)
        .build(7);

    // Income tax at cell 4 against an empty wallet.
    let snapshot = game.roll_and_advance_with(DiceRoll::of(1, 3)).unwrap();

    assert_eq!(snapshot.phase, TurnPhase::GameOver { winner: ben() });
    assert_eq!(game.winner(), Some(ben()));
    assert!(game.board().player(ann()).unwrap().is_bankrupt());

    assert_eq!(
        game.roll_and_advance_with(DiceRoll::of(1, 2)).unwrap_err(),
        GameError::InvalidTransition
    );
    assert_eq!(game.decide_purchase(true).unwrap_err(), GameError::InvalidTransition);
    assert_eq!(
        game.mortgage(PropertyId::new(0)).unwrap_err(),
        GameError::InvalidTransition
    );
    assert_eq!(game.declare_bankruptcy().unwrap_err(), GameError::InvalidTransition);
    assert!(game.legal_actions(ben()).unwrap().is_empty());
}

/// Test that two engines with the same seed and the same policy play
/// identical games.
#[test]
fn test_same_seed_same_policy_same_game() {
    let build = || {
        GameBuilder::new()
            .add_player("Ann", Token::Boot)
            .add_player("Ben", Token::Dog)
            .add_player("Cora", Token::TopHat)
            .build(99)
    };
    let mut game1 = build();
    let mut game2 = build();

    // Buy whenever the engine lists the purchase as legal.
    for _ in 0..40 {
        match game1.phase() {
            TurnPhase::AwaitingRoll => {
                game1.roll_and_advance().unwrap();
                game2.roll_and_advance().unwrap();
            }
            TurnPhase::AwaitingDecision { .. } => {
                let player = game1.current_player();
                let buy = game1
                    .legal_actions(player)
                    .unwrap()
                    .iter()
                    .any(|action| matches!(action, monopoly_engine::engine::PlayerAction::BuyProperty { .. }));
                game1.decide_purchase(buy).unwrap();
                game2.decide_purchase(buy).unwrap();
            }
            _ => break,
        }
    }

    assert_eq!(game1.events(), game2.events());
    assert_eq!(game1.rng_state(), game2.rng_state());
    assert_eq!(game1.pot(), game2.pot());
    for player in game1.board().players() {
        let twin = game2.board().player(player.id()).unwrap();
        assert_eq!(player.cash(), twin.cash());
        assert_eq!(player.position(), twin.position());
        assert_eq!(player.properties_sorted(), twin.properties_sorted());
    }
}
