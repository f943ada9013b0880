//! Headless demo driver for the simulation core.
//!
//! Stands in for the real collaborators: a random-walk pilot plays the role
//! of the input layer, and drained events / snapshots are logged where a
//! renderer and UI-text layer would consume them.

use muncher::clock::SimulationClock;
use muncher::constants::LOOP_TIME;
use muncher::events::{GameCommand, GameEvent};
use muncher::game::Game;
use muncher::map::Direction;
use muncher::systems::GamePhase;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;

fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber)?;

    let mut game = Game::new()?;
    game.handle_command(GameCommand::StartGame);

    let mut clock = SimulationClock::new();
    let mut rng = SmallRng::from_os_rng();

    info!("starting demo loop ({:.3}ms)", LOOP_TIME.as_secs_f32() * 1000.0);
    loop {
        // Wander randomly in place of a real input collaborator.
        if rng.random_range(0..8) == 0 {
            let direction = *Direction::DIRECTIONS.choose(&mut rng).unwrap();
            game.set_player_intent(direction);
        }

        if let Some(delta_ms) = clock.poll() {
            game.tick(delta_ms);
        }

        for event in game.drain_events() {
            match event {
                GameEvent::PhaseChanged(phase) => info!(phase = phase.as_ref(), "phase changed"),
                event => info!(event = ?event, "game event"),
            }
        }

        if let GamePhase::GameOver(outcome) = game.phase() {
            let snapshot = game.snapshot();
            info!(score = snapshot.score, lives = snapshot.lives, "{}", outcome.message());
            break;
        }

        spin_sleep::sleep(LOOP_TIME);
    }

    Ok(())
}
