//! The per-tick read-only view handed to render and UI collaborators.

use bevy_ecs::query::With;
use bevy_ecs::world::World;
use glam::{UVec2, Vec2};

use crate::constants::{MapTile, ADVERSARY_COLOR, CELL_SIZE, FRIGHTENED_COLOR, PLAYER_COLOR};
use crate::map::{Direction, Map};
use crate::systems::{Adversary, GamePhase, Mode, MouthAnimation, PlayerControlled, PlayerLives, Position, ScoreResource, Velocity};

/// Render state for the player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub position: Vec2,
    pub size: f32,
    pub facing: Direction,
    pub color: &'static str,
    pub mouth_open: bool,
}

/// Render state for the adversary.
#[derive(Debug, Clone, PartialEq)]
pub struct AdversaryView {
    pub position: Vec2,
    pub size: f32,
    pub facing: Direction,
    pub color: &'static str,
    pub frightened: bool,
    pub mode: Mode,
}

/// Everything a renderer or UI-text layer needs for one frame.
///
/// The renderer performs no simulation logic; it draws this and nothing
/// else.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    pub remaining_pellets: u32,
    /// Board dimensions, in cells.
    pub grid_size: UVec2,
    /// Row-major tile layout, `grid_size.x` wide.
    pub tiles: Vec<MapTile>,
    pub player: PlayerView,
    pub adversary: AdversaryView,
}

pub(crate) fn capture(world: &mut World) -> Snapshot {
    let player = {
        let mut query = world.query_filtered::<(&Position, &Velocity, &MouthAnimation), With<PlayerControlled>>();
        let (position, velocity, mouth) = query.single(world).expect("player entity missing from world");
        PlayerView {
            position: position.0,
            size: CELL_SIZE as f32,
            facing: velocity.direction,
            color: PLAYER_COLOR,
            mouth_open: mouth.open,
        }
    };

    let adversary = {
        let mut query = world.query::<(&Position, &Velocity, &Adversary)>();
        let (position, velocity, adversary) = query.single(world).expect("adversary entity missing from world");
        AdversaryView {
            position: position.0,
            size: CELL_SIZE as f32,
            facing: velocity.direction,
            color: if adversary.is_frightened() { FRIGHTENED_COLOR } else { ADVERSARY_COLOR },
            frightened: adversary.is_frightened(),
            mode: adversary.mode,
        }
    };

    let map = world.resource::<Map>();
    Snapshot {
        phase: *world.resource::<GamePhase>(),
        score: world.resource::<ScoreResource>().0,
        lives: world.resource::<PlayerLives>().0,
        remaining_pellets: map.remaining_pellets(),
        grid_size: map.size(),
        tiles: map.tiles().to_vec(),
        player,
        adversary,
    }
}
