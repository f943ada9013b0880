use bevy_ecs::query::With;
use bevy_ecs::system::{Query, ResMut};

use crate::systems::components::{PlayerControlled, PlayerIntent, Velocity};

/// Feeds the buffered directional intent into the player's velocity.
///
/// The intent slot is taken, not copied, so each key press is consumed by
/// exactly one tick; the request then lives on the velocity until the
/// movement resolver can commit it.
pub fn intent_system(mut intent: ResMut<PlayerIntent>, mut players: Query<&mut Velocity, With<PlayerControlled>>) {
    let Some(direction) = intent.0.take() else {
        return;
    };

    for mut velocity in players.iter_mut() {
        velocity.requested = Some(direction);
    }
}
