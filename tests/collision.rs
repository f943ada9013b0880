use glam::Vec2;
use muncher::events::GameEvent;
use muncher::systems::{GamePhase, Outcome};
use pretty_assertions::assert_eq;

mod common;

#[test]
fn test_pellet_pickup_scores_ten() {
    let mut game = common::start(common::PELLET_ROW);

    game.tick(16.0);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.score, 10);
    assert_eq!(snapshot.remaining_pellets, 1);
    assert_eq!(snapshot.phase, GamePhase::Playing);

    let events = game.drain_events();
    assert!(events
        .iter()
        .any(|event| matches!(event, GameEvent::PelletEaten { score: 10, .. })));
}

#[test]
fn test_power_pellet_scores_fifty_and_frightens() {
    let mut game = common::start(common::POWER_PELLET);

    game.tick(16.0);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.score, 50);
    assert!(snapshot.adversary.frightened);
    assert_eq!(snapshot.adversary.color, "blue");

    let events = game.drain_events();
    assert!(events
        .iter()
        .any(|event| matches!(event, GameEvent::PowerPelletEaten { score: 50, .. })));
}

#[test]
fn test_frightened_contact_awards_capture() {
    let mut game = common::start(common::POWER_PELLET);
    game.tick(16.0);
    assert!(game.snapshot().adversary.frightened);

    // park the adversary on the player and resolve one zero-length tick
    let player = common::player_position(&mut game);
    common::set_adversary_position(&mut game, player);
    game.tick(0.0);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.score, 50 + 200);
    assert_eq!(snapshot.lives, 3);
    assert_eq!(snapshot.phase, GamePhase::Playing);
    // the adversary returns to its spawn, vulnerable no more
    assert_eq!(snapshot.adversary.position, Vec2::new(64.0, 16.0));
    assert!(!snapshot.adversary.frightened);
    // the player is not disturbed
    assert_eq!(snapshot.player.position, player);

    let events = game.drain_events();
    assert!(events
        .iter()
        .any(|event| matches!(event, GameEvent::AdversaryCaptured { score: 200 })));
}

#[test]
fn test_contact_with_lives_left_resets_positions() {
    let mut game = common::start(common::PELLET_ROW);

    let player = common::player_position(&mut game);
    common::set_adversary_position(&mut game, player);
    game.tick(0.0);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.lives, 2);
    assert_eq!(snapshot.phase, GamePhase::Playing);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.remaining_pellets, 2);
    // both actors return to their spawn cells and initial facing
    assert_eq!(snapshot.player.position, Vec2::new(16.0, 16.0));
    assert_eq!(snapshot.adversary.position, Vec2::new(64.0, 16.0));

    let events = game.drain_events();
    assert!(events
        .iter()
        .any(|event| matches!(event, GameEvent::LifeLost { remaining: 2 })));
}

#[test]
fn test_contact_on_last_life_is_defeat() {
    let mut game = common::start(common::PELLET_ROW);
    common::set_lives(&mut game, 1);

    let player = common::player_position(&mut game);
    common::set_adversary_position(&mut game, player);
    game.tick(0.0);

    assert_eq!(game.lives(), 0);
    assert_eq!(game.phase(), GamePhase::GameOver(Outcome::Defeat));

    let events = game.drain_events();
    assert_eq!(
        events
            .iter()
            .filter(|event| matches!(event, GameEvent::PhaseChanged(GamePhase::GameOver(Outcome::Defeat))))
            .count(),
        1
    );

    // the finished session no longer ticks
    game.tick(16.0);
    assert!(game.drain_events().is_empty());
}

#[test]
fn test_clearing_the_board_wins_on_the_same_tick() {
    let mut game = common::start(common::SINGLE_PELLET);

    game.set_player_intent(muncher::map::Direction::Left);
    game.tick(16.0);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.score, 10);
    assert_eq!(snapshot.remaining_pellets, 0);
    assert_eq!(snapshot.phase, GamePhase::GameOver(Outcome::Victory));
}

#[test]
fn test_win_check_runs_before_contact() {
    let mut game = common::start(common::SINGLE_PELLET);

    // the adversary shares the pellet cell; eating it must end the session
    // as a victory before any contact is resolved
    common::set_adversary_position(&mut game, Vec2::new(16.0, 16.0));
    common::set_player_position(&mut game, Vec2::new(16.0, 16.0));
    game.tick(0.0);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, GamePhase::GameOver(Outcome::Victory));
    assert_eq!(snapshot.lives, 3);

    let events = game.drain_events();
    assert!(!events.iter().any(|event| matches!(event, GameEvent::LifeLost { .. })));
}

#[test]
fn test_victory_outcome_message() {
    assert_eq!(Outcome::Victory.message(), "You Win!");
    assert_eq!(Outcome::Defeat.message(), "Game Over!");
}
