use bevy::prelude::*;

use simulation::notifications::{NotificationEvent, NotificationPriority};
use simulation::world_init::seed_world;
use simulation::SaveLoadState;

use crate::despawn::despawn_all_game_entities;

/// Exclusive system resetting the world to a fresh city. Runs on
/// `OnEnter(SaveLoadState::NewGame)`, then transitions back to `Idle`.
/// This is the external reset that clears a game-over state.
pub(crate) fn exclusive_new_game(world: &mut World) {
    despawn_all_game_entities(world);
    seed_world(world);

    world.send_event(NotificationEvent {
        text: "Started a new city.".to_string(),
        priority: NotificationPriority::Info,
    });

    world
        .resource_mut::<NextState<SaveLoadState>>()
        .set(SaveLoadState::Idle);
}
