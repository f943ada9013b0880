use bevy_ecs::event::Event;
use glam::IVec2;

use crate::map::Direction;
use crate::systems::components::GamePhase;

/// Discrete requests from the outside world (key bindings, menu buttons).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    StartGame,
    TogglePause,
    ResetGame,
    MovePlayer(Direction),
}

/// Discrete transitions the UI collaborators subscribe to.
///
/// Score and lives travel as plain integers so a text layer can render them
/// without touching the world.
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    PelletEaten { cell: IVec2, score: u32 },
    PowerPelletEaten { cell: IVec2, score: u32 },
    AdversaryCaptured { score: u32 },
    LifeLost { remaining: u8 },
    PhaseChanged(GamePhase),
}
