//! Maze-chase game library crate.
//!
//! The simulation core lives here: the grid map, the shared movement
//! resolver, the adversary controller, collision/scoring, and the fixed-step
//! clock. Rendering, UI text, and input capture are external collaborators
//! that talk to [`game::Game`] through intents, commands, snapshots, and
//! drained events.

pub mod clock;
pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod map;
pub mod systems;
