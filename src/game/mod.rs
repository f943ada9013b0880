//! This module contains the main game façade and session control.

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use tracing::{debug, info};

use crate::constants::{ADVERSARY_SPEED, PLAYER_SPEED, RAW_BOARD, SCATTER_TARGET};
use crate::error::GameResult;
use crate::events::{GameCommand, GameEvent};
use crate::map::{Direction, Map};
use crate::systems::{
    adversary_system, collision_system, intent_system, movement_system, Adversary, AdversaryBundle, DeltaTime, GamePhase,
    GameRng, MouthAnimation, PlayerBundle, PlayerControlled, PlayerIntent, PlayerLives, Position, ScoreResource, Spawn,
    Velocity,
};

pub mod snapshot;

pub use snapshot::{AdversaryView, PlayerView, Snapshot};

/// The `Game` struct is the main entry point for the simulation core.
///
/// It owns the ECS world holding all session state and the schedule that
/// advances it one fixed step at a time. Collaborators feed it directional
/// intents and session commands, and read back per-tick snapshots and
/// drained events; nothing outside this struct mutates the world.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Creates a game on the reference board layout.
    pub fn new() -> GameResult<Game> {
        Self::with_board(&RAW_BOARD)
    }

    /// Creates a game on an arbitrary board layout.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the layout is malformed.
    pub fn with_board(rows: &[&str]) -> GameResult<Game> {
        let map = Map::parse(rows)?;

        let mut world = World::default();
        let mut schedule = Schedule::default();

        EventRegistry::register_event::<GameEvent>(&mut world);

        world.spawn(PlayerBundle {
            player: PlayerControlled,
            position: Position::at_cell(map.player_spawn),
            velocity: Velocity {
                direction: Direction::Right,
                requested: None,
                speed: PLAYER_SPEED,
            },
            spawn: Spawn {
                cell: map.player_spawn,
                facing: Direction::Right,
            },
            mouth: MouthAnimation::default(),
        });

        world.spawn(AdversaryBundle {
            adversary: Adversary::new(SCATTER_TARGET),
            position: Position::at_cell(map.adversary_spawn),
            velocity: Velocity {
                direction: Direction::Right,
                requested: None,
                speed: ADVERSARY_SPEED,
            },
            spawn: Spawn {
                cell: map.adversary_spawn,
                facing: Direction::Right,
            },
        });

        world.insert_resource(map);
        world.insert_resource(ScoreResource::default());
        world.insert_resource(PlayerLives::default());
        world.insert_resource(GamePhase::default());
        world.insert_resource(DeltaTime::default());
        world.insert_resource(PlayerIntent::default());
        world.insert_resource(GameRng::from_os());

        schedule.add_systems((intent_system, adversary_system, movement_system, collision_system).chain());

        Ok(Game { world, schedule })
    }

    /// Runs one core update with `delta_ms` of elapsed simulation time.
    ///
    /// Outside the Playing phase this is a no-op, which is what freezes
    /// movement and every gameplay timer while paused or in a menu.
    pub fn tick(&mut self, delta_ms: f32) {
        if self.phase() != GamePhase::Playing {
            return;
        }

        self.world.resource_mut::<DeltaTime>().0 = delta_ms;
        self.schedule.run(&mut self.world);
    }

    pub fn phase(&self) -> GamePhase {
        *self.world.resource::<GamePhase>()
    }

    pub fn score(&self) -> u32 {
        self.world.resource::<ScoreResource>().0
    }

    pub fn lives(&self) -> u8 {
        self.world.resource::<PlayerLives>().0
    }

    /// Overwrites the buffered directional intent from the input collaborator.
    pub fn set_player_intent(&mut self, direction: Direction) {
        self.world.resource_mut::<PlayerIntent>().0 = Some(direction);
    }

    /// Dispatches a discrete command from a key-bindings or menu layer.
    pub fn handle_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::StartGame => self.start(),
            GameCommand::TogglePause => self.toggle_pause(),
            GameCommand::ResetGame => self.reset(),
            GameCommand::MovePlayer(direction) => self.set_player_intent(direction),
        }
    }

    /// Begins a fresh session. Only honored from the menu or a finished game.
    pub fn start(&mut self) {
        match self.phase() {
            GamePhase::Menu | GamePhase::GameOver(_) => {
                self.reset_session();
                self.set_phase(GamePhase::Playing);
                info!("session started");
            }
            phase => debug!(phase = phase.as_ref(), "ignoring start request"),
        }
    }

    /// Toggles between Playing and Paused; ignored elsewhere.
    pub fn toggle_pause(&mut self) {
        match self.phase() {
            GamePhase::Playing => self.set_phase(GamePhase::Paused),
            GamePhase::Paused => self.set_phase(GamePhase::Playing),
            phase => debug!(phase = phase.as_ref(), "ignoring pause request"),
        }
    }

    /// Resets the session and goes straight back to Playing.
    pub fn reset(&mut self) {
        self.reset_session();
        self.set_phase(GamePhase::Playing);
        info!("session reset");
    }

    /// Captures the read-only view consumed by render collaborators.
    pub fn snapshot(&mut self) -> Snapshot {
        snapshot::capture(&mut self.world)
    }

    /// Drains the discrete transitions emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.world.resource_mut::<Events<GameEvent>>().drain().collect()
    }

    fn set_phase(&mut self, phase: GamePhase) {
        {
            let mut current = self.world.resource_mut::<GamePhase>();
            if *current == phase {
                return;
            }
            *current = phase;
        }
        debug!(phase = phase.as_ref(), "phase changed");
        self.world
            .resource_mut::<Events<GameEvent>>()
            .send(GameEvent::PhaseChanged(phase));
    }

    /// Restores score, lives, pellets, and both actors to their initial
    /// state. The pellet overlay is rebuilt from the original layout.
    fn reset_session(&mut self) {
        self.world.resource_mut::<Map>().reset_pellets();
        self.world.resource_mut::<ScoreResource>().0 = 0;
        *self.world.resource_mut::<PlayerLives>() = PlayerLives::default();
        self.world.resource_mut::<PlayerIntent>().0 = None;

        let mut actors = self.world.query::<(
            &mut Position,
            &mut Velocity,
            &Spawn,
            Option<&mut Adversary>,
            Option<&mut MouthAnimation>,
        )>();
        for (mut position, mut velocity, spawn, adversary, mouth) in actors.iter_mut(&mut self.world) {
            *position = Position::at_cell(spawn.cell);
            velocity.direction = spawn.facing;
            velocity.requested = None;
            if let Some(mut adversary) = adversary {
                adversary.reset();
            }
            if let Some(mut mouth) = mouth {
                mouth.open = false;
            }
        }
        debug!("session state reset");
    }
}
