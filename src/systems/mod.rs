//! Systems and components driving the simulation.
//!
//! The schedule runs them in a fixed chain each tick: intent capture, the
//! adversary controller, the shared movement resolver, then collision and
//! scoring.

pub mod adversary;
pub mod collision;
pub mod components;
pub mod control;
pub mod movement;

pub use adversary::{adversary_system, Adversary, Mode};
pub use collision::collision_system;
pub use components::{
    AdversaryBundle, DeltaTime, GamePhase, GameRng, MouthAnimation, Outcome, PlayerBundle, PlayerControlled,
    PlayerIntent, PlayerLives, Position, ScoreResource, Spawn, Velocity,
};
pub use control::intent_system;
pub use movement::movement_system;
