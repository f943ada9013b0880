//! Pellet pickup, adversary contact, and win/lose resolution.
//!
//! Runs after both actors have moved, in the canonical order: pellet pickup,
//! then the win check, then adversary contact. A tick that ends the session
//! on the win check performs no contact resolution.

use bevy_ecs::event::EventWriter;
use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Query, ResMut};
use tracing::{debug, info, trace};

use crate::constants::{CAPTURE_SCORE, CELL_SIZE};
use crate::events::GameEvent;
use crate::map::{Consumed, Map};
use crate::systems::adversary::Adversary;
use crate::systems::components::{GamePhase, Outcome, PlayerControlled, PlayerLives, Position, ScoreResource, Spawn, Velocity};

fn respawn(position: &mut Position, velocity: &mut Velocity, spawn: &Spawn) {
    *position = Position::at_cell(spawn.cell);
    velocity.direction = spawn.facing;
    velocity.requested = None;
}

#[allow(clippy::type_complexity)]
pub fn collision_system(
    mut map: ResMut<Map>,
    mut score: ResMut<ScoreResource>,
    mut lives: ResMut<PlayerLives>,
    mut phase: ResMut<GamePhase>,
    mut events: EventWriter<GameEvent>,
    mut players: Query<(&mut Position, &mut Velocity, &Spawn), With<PlayerControlled>>,
    mut adversaries: Query<(&mut Adversary, &mut Position, &mut Velocity, &Spawn), Without<PlayerControlled>>,
) {
    let Ok((mut player_pos, mut player_vel, player_spawn)) = players.single_mut() else {
        return;
    };

    // Pellet pickup at the cell under the player's center.
    let cell = player_pos.cell();
    let consumed = map.consume_pellet(cell);
    match consumed {
        Consumed::None => {}
        Consumed::Pellet => {
            score.0 += consumed.score();
            trace!(cell = ?cell, score = score.0, "pellet eaten");
            events.write(GameEvent::PelletEaten { cell, score: score.0 });
        }
        Consumed::PowerPellet => {
            score.0 += consumed.score();
            debug!(cell = ?cell, score = score.0, "power pellet eaten, frightening adversary");
            events.write(GameEvent::PowerPelletEaten { cell, score: score.0 });
            for (mut adversary, _, _, _) in adversaries.iter_mut() {
                adversary.frighten();
            }
        }
    }

    // Win check, before any contact is resolved.
    if map.remaining_pellets() == 0 {
        info!(score = score.0, "board cleared");
        *phase = GamePhase::GameOver(Outcome::Victory);
        events.write(GameEvent::PhaseChanged(*phase));
        return;
    }

    // Adversary contact: centers closer than one cell edge.
    for (mut adversary, mut adversary_pos, mut adversary_vel, adversary_spawn) in adversaries.iter_mut() {
        let distance = player_pos.center().distance(adversary_pos.center());
        if distance >= CELL_SIZE as f32 {
            continue;
        }

        if adversary.is_frightened() {
            score.0 += CAPTURE_SCORE;
            debug!(score = score.0, "frightened adversary captured");
            respawn(&mut adversary_pos, &mut adversary_vel, adversary_spawn);
            adversary.clear_frightened();
            events.write(GameEvent::AdversaryCaptured { score: CAPTURE_SCORE });
        } else {
            lives.0 -= 1;
            events.write(GameEvent::LifeLost { remaining: lives.0 });
            if lives.0 == 0 {
                info!(score = score.0, "caught with no lives left");
                *phase = GamePhase::GameOver(Outcome::Defeat);
                events.write(GameEvent::PhaseChanged(*phase));
            } else {
                debug!(remaining = lives.0, "caught, returning actors to their spawns");
                respawn(&mut player_pos, &mut player_vel, player_spawn);
                respawn(&mut adversary_pos, &mut adversary_vel, adversary_spawn);
            }
        }
    }
}
