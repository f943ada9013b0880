//! The adversary controller: mode state machine and next-step selection.

use bevy_ecs::component::Component;
use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Query, Res, ResMut};
use glam::IVec2;
use rand::seq::IndexedRandom;
use smallvec::SmallVec;
use strum_macros::AsRefStr;
use tracing::{debug, trace};

use crate::constants::{CHASE_DURATION_MS, FRIGHTENED_DURATION_MS, SCATTER_DURATION_MS};
use crate::map::{Direction, Map};
use crate::systems::components::{DeltaTime, GameRng, PlayerControlled, Position, Velocity};

/// The adversary's primary pursuit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Target the player's current cell.
    Chase,
    /// Target the fixed home corner.
    Scatter,
}

impl Mode {
    /// How long this mode runs before flipping, in milliseconds.
    pub const fn duration_ms(self) -> f32 {
        match self {
            Mode::Chase => CHASE_DURATION_MS,
            Mode::Scatter => SCATTER_DURATION_MS,
        }
    }

    pub const fn flipped(self) -> Mode {
        match self {
            Mode::Chase => Mode::Scatter,
            Mode::Scatter => Mode::Chase,
        }
    }
}

/// Mode machine and timers for the adversary.
///
/// Frightened is an overlay, not a third primary mode: the chase/scatter
/// timer keeps running underneath it, so expiry resumes whichever mode that
/// timer indicates. Both timers advance only inside the tick, which is what
/// freezes them while the game is paused.
#[derive(Component, Debug, Clone)]
pub struct Adversary {
    pub mode: Mode,
    /// Elapsed time in the current mode, in milliseconds.
    pub mode_timer: f32,
    /// Remaining frightened time, in milliseconds.
    frightened: Option<f32>,
    /// Home corner cell targeted while scattering.
    pub scatter_target: IVec2,
}

impl Adversary {
    pub fn new(scatter_target: IVec2) -> Adversary {
        Adversary {
            mode: Mode::Chase,
            mode_timer: 0.0,
            frightened: None,
            scatter_target,
        }
    }

    /// Advances the mode and frightened timers by `delta_ms`.
    pub fn tick_timers(&mut self, delta_ms: f32) {
        self.mode_timer += delta_ms;
        if self.mode_timer >= self.mode.duration_ms() {
            self.mode = self.mode.flipped();
            self.mode_timer = 0.0;
            debug!(mode = self.mode.as_ref(), "adversary mode flipped");
        }

        if let Some(remaining) = self.frightened.as_mut() {
            *remaining -= delta_ms;
            if *remaining <= 0.0 {
                self.frightened = None;
                debug!(mode = self.mode.as_ref(), "frightened overlay expired");
            }
        }
    }

    /// Arms (or re-arms) the frightened overlay for its full duration.
    pub fn frighten(&mut self) {
        self.frightened = Some(FRIGHTENED_DURATION_MS);
    }

    pub fn clear_frightened(&mut self) {
        self.frightened = None;
    }

    pub fn is_frightened(&self) -> bool {
        self.frightened.is_some()
    }

    /// The cell the adversary is steering towards.
    pub fn target(&self, player_cell: IVec2) -> IVec2 {
        match self.mode {
            Mode::Chase => player_cell,
            Mode::Scatter => self.scatter_target,
        }
    }

    /// Resets the machine to its initial state (chase, timers cleared).
    pub fn reset(&mut self) {
        self.mode = Mode::Chase;
        self.mode_timer = 0.0;
        self.frightened = None;
    }
}

/// Non-wall orthogonal neighbors of `cell`, in move-selection order.
pub fn legal_neighbors(map: &Map, cell: IVec2) -> SmallVec<[Direction; 4]> {
    Direction::DIRECTIONS
        .iter()
        .copied()
        .filter(|direction| !map.is_wall(cell + direction.as_ivec2()))
        .collect()
}

/// Greedy next step: the legal neighbor minimizing Manhattan distance to
/// `target`. Strict comparison keeps the first minimal candidate, so ties
/// resolve by the `Direction::DIRECTIONS` enumeration order.
pub fn choose_step(map: &Map, from: IVec2, target: IVec2) -> Option<Direction> {
    let mut best: Option<(Direction, i32)> = None;

    for direction in legal_neighbors(map, from) {
        let delta = (from + direction.as_ivec2() - target).abs();
        let distance = delta.x + delta.y;
        if best.is_none_or(|(_, shortest)| distance < shortest) {
            best = Some((direction, distance));
        }
    }

    best.map(|(direction, _)| direction)
}

/// Ticks the adversary's timers and writes its requested direction.
///
/// Frightened movement draws uniformly from the legal neighbors; otherwise
/// the greedy step towards the mode's target wins. With no legal neighbor
/// the request is left empty and the resolver holds the actor in place.
pub fn adversary_system(
    map: Res<Map>,
    delta_time: Res<DeltaTime>,
    mut rng: ResMut<GameRng>,
    players: Query<&Position, With<PlayerControlled>>,
    mut adversaries: Query<(&mut Adversary, &mut Velocity, &Position), Without<PlayerControlled>>,
) {
    let Ok(player_cell) = players.single().map(Position::cell) else {
        return;
    };

    for (mut adversary, mut velocity, position) in adversaries.iter_mut() {
        adversary.tick_timers(delta_time.0);

        let cell = position.cell();
        let step = if adversary.is_frightened() {
            legal_neighbors(&map, cell).choose(&mut rng.0).copied()
        } else {
            choose_step(&map, cell, adversary.target(player_cell))
        };

        match step {
            Some(direction) => velocity.requested = Some(direction),
            None => trace!(cell = ?cell, "adversary has no legal move, holding position"),
        }
    }
}
