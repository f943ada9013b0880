#![allow(dead_code)]

use bevy_ecs::query::With;
use glam::Vec2;
use muncher::events::GameCommand;
use muncher::game::Game;
use muncher::systems::{Adversary, GameRng, PlayerControlled, PlayerLives, Position};

/// Straight corridor for the player. The adversary is sealed into a pocket
/// next to an unreachable pellet, so the session can end by neither victory
/// nor contact.
pub const CORRIDOR: &[&str] = &[
    "#######", //
    "#P    #",
    "#######",
    "##.#G##",
    "#######",
];

/// Corridor whose middle row is a tunnel, open at both edges.
pub const TUNNEL: &[&str] = &[
    "#######", //
    "   P   ",
    "#######",
    "##.#G##",
    "#######",
];

/// Corridor with a vertical arm the player can turn into at column 3.
pub const CROSS: &[&str] = &[
    "#######", //
    "### ###",
    "#P    #",
    "### ###",
    "#######",
    "##.#G##",
    "#######",
];

/// One reachable pellet at (1, 1), nothing else.
pub const SINGLE_PELLET: &[&str] = &[
    "######", //
    "#.P G#",
    "######",
];

/// A reachable pellet plus a sealed one, so eating it does not end the game.
pub const PELLET_ROW: &[&str] = &[
    "#######", //
    "#P. G##",
    "#######",
    "##.####",
    "#######",
];

/// A reachable power pellet plus a sealed regular pellet.
pub const POWER_PELLET: &[&str] = &[
    "#######", //
    "#Po G##",
    "#######",
    "##.####",
    "#######",
];

/// Builds a game on `rows`, seeds its RNG, and starts the session.
pub fn start(rows: &[&str]) -> Game {
    let mut game = Game::with_board(rows).expect("test board failed to parse");
    game.world.insert_resource(GameRng::seeded(7));
    game.handle_command(GameCommand::StartGame);
    game.drain_events();
    game
}

pub fn player_position(game: &mut Game) -> Vec2 {
    game.snapshot().player.position
}

pub fn adversary_position(game: &mut Game) -> Vec2 {
    game.snapshot().adversary.position
}

pub fn set_player_position(game: &mut Game, position: Vec2) {
    let mut query = game.world.query_filtered::<&mut Position, With<PlayerControlled>>();
    for mut actor in query.iter_mut(&mut game.world) {
        actor.0 = position;
    }
}

pub fn set_adversary_position(game: &mut Game, position: Vec2) {
    let mut query = game.world.query_filtered::<&mut Position, With<Adversary>>();
    for mut actor in query.iter_mut(&mut game.world) {
        actor.0 = position;
    }
}

pub fn frighten_adversary(game: &mut Game) {
    let mut query = game.world.query::<&mut Adversary>();
    for mut adversary in query.iter_mut(&mut game.world) {
        adversary.frighten();
    }
}

pub fn set_lives(game: &mut Game, lives: u8) {
    game.world.resource_mut::<PlayerLives>().0 = lives;
}

/// Runs `count` ticks of one reference frame each.
pub fn tick_frames(game: &mut Game, count: u32) {
    for _ in 0..count {
        game.tick(16.0);
    }
}
