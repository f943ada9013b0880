use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::{IVec2, Vec2};
use rand::{rngs::SmallRng, SeedableRng};
use strum_macros::AsRefStr;

use crate::constants::{CELL_SIZE, STARTING_LIVES};
use crate::map::{Direction, Map};
use crate::systems::adversary::Adversary;

/// A tag component for the entity controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// Continuous position of an actor, in pixels, anchored to its top-left
/// corner. Only the movement resolver and spawn resets write it.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

impl Position {
    /// An actor parked on `cell`.
    pub fn at_cell(cell: IVec2) -> Position {
        Position(Map::cell_origin(cell))
    }

    /// The actor's center point.
    pub fn center(&self) -> Vec2 {
        self.0 + Vec2::splat(CELL_SIZE as f32 / 2.0)
    }

    /// The cell under the actor's center point.
    pub fn cell(&self) -> IVec2 {
        Map::cell_under(self.center())
    }
}

/// Facing, pending direction change, and speed of an actor.
///
/// `requested` holds the most recent direction request; it survives across
/// ticks until the movement resolver can legally commit it, then clears.
#[derive(Component, Debug, Clone, Copy)]
pub struct Velocity {
    pub direction: Direction,
    pub requested: Option<Direction>,
    /// Pixels per reference frame.
    pub speed: f32,
}

/// Where an actor respawns, and which way it faces when it does.
#[derive(Component, Debug, Clone, Copy)]
pub struct Spawn {
    pub cell: IVec2,
    pub facing: Direction,
}

/// Mouth open/closed flag for the player, toggled as it moves. Render-only.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct MouthAnimation {
    pub open: bool,
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub velocity: Velocity,
    pub spawn: Spawn,
    pub mouth: MouthAnimation,
}

#[derive(Bundle)]
pub struct AdversaryBundle {
    pub adversary: Adversary,
    pub position: Position,
    pub velocity: Velocity,
    pub spawn: Spawn,
}

/// Elapsed simulation time for the current tick, in milliseconds.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct DeltaTime(pub f32);

/// The session score. Monotonic until a session reset zeroes it.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct ScoreResource(pub u32);

/// A resource to store the number of player lives.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PlayerLives(pub u8);

impl Default for PlayerLives {
    fn default() -> Self {
        Self(STARTING_LIVES)
    }
}

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum Outcome {
    Victory,
    Defeat,
}

impl Outcome {
    /// The message the menu collaborator shows for this outcome.
    pub const fn message(self) -> &'static str {
        match self {
            Outcome::Victory => "You Win!",
            Outcome::Defeat => "Game Over!",
        }
    }
}

/// Coarse phase of the session from a high-level perspective.
///
/// Core updates run only while `Playing`. A fresh session may begin only
/// from `Menu` or `GameOver`.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver(Outcome),
}

/// The single most-recent directional intent from the input collaborator.
///
/// Overwritten on every new key-style event; the core takes it once per tick
/// and never queues more than one.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PlayerIntent(pub Option<Direction>);

/// Randomness source for frightened movement. Seedable so tests are
/// deterministic.
#[derive(Resource)]
pub struct GameRng(pub SmallRng);

impl GameRng {
    pub fn from_os() -> GameRng {
        GameRng(SmallRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> GameRng {
        GameRng(SmallRng::seed_from_u64(seed))
    }
}
