//! The shared movement resolver.
//!
//! One system serves both actors; the only difference between them is where
//! the requested direction comes from (player: the intent slot, adversary:
//! its controller).

use bevy_ecs::system::{Query, Res};
use glam::Vec2;

use crate::constants::{CELL_SIZE, REFERENCE_FRAME_MS};
use crate::map::Map;
use crate::systems::components::{DeltaTime, MouthAnimation, Position, Velocity};

/// Whether an actor centered over `cell` may stand there.
///
/// Columns past the canvas edges are legal: that overhang is how the tunnel
/// carries an actor out one side and in the other. Everything else defers to
/// the map, which reads out-of-bounds as walls.
fn passable(map: &Map, position: Vec2) -> bool {
    let cell = Map::cell_under(position + Vec2::splat(CELL_SIZE as f32 / 2.0));
    cell.x < 0 || cell.x >= map.size().x as i32 || !map.is_wall(cell)
}

/// Advances every actor by its velocity, respecting walls and the tunnel.
///
/// Each tick: commit a pending direction change if a step that way is clear,
/// step the current direction, wrap horizontally at the canvas bounds, and
/// keep the prior position when the candidate lands on a wall.
pub fn movement_system(
    map: Res<Map>,
    delta_time: Res<DeltaTime>,
    mut actors: Query<(&mut Position, &mut Velocity, Option<&mut MouthAnimation>)>,
) {
    for (mut position, mut velocity, mouth) in actors.iter_mut() {
        let displacement = velocity.speed * (delta_time.0 / REFERENCE_FRAME_MS);

        // A pending request stays buffered across ticks until a step in that
        // direction is legal from the current position.
        if let Some(requested) = velocity.requested {
            if requested == velocity.direction {
                velocity.requested = None;
            } else if passable(&map, position.0 + requested.as_vec2() * displacement) {
                velocity.direction = requested;
                velocity.requested = None;
            }
        }

        let mut candidate = position.0 + velocity.direction.as_vec2() * displacement;

        // Tunnel wrap: teleport to the opposite bound once past either edge.
        if candidate.x < -(CELL_SIZE as f32) {
            candidate.x = map.pixel_width();
        } else if candidate.x > map.pixel_width() {
            candidate.x = -(CELL_SIZE as f32);
        }

        if passable(&map, candidate) && candidate != position.0 {
            position.0 = candidate;
            if let Some(mut mouth) = mouth {
                mouth.open = !mouth.open;
            }
        }
    }
}
