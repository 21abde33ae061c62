use bevy::prelude::*;

use simulation::buildings::HouseSpawnTimer;
use simulation::ledger::CityLedger;
use simulation::lose_conditions::LoseConditionState;
use simulation::notifications::{NotificationEvent, NotificationPriority};
use simulation::time_of_day::GameClock;
use simulation::SaveLoadState;

use crate::despawn::despawn_all_game_entities;
use crate::save_error::SaveError;
use crate::save_plugin::PendingLoad;
use crate::save_types::SaveData;
use crate::serialization;
use crate::spawn_entities::spawn_entities_from_save;

/// Exclusive system performing the entire load operation with full world
/// access. Runs on `OnEnter(SaveLoadState::Loading)`, then transitions back
/// to `Idle`. Failures leave the current world untouched.
pub(crate) fn exclusive_load(world: &mut World) {
    if let Err(e) = exclusive_load_inner(world) {
        error!("Load failed: {e}");
        world.send_event(NotificationEvent {
            text: format!("Load failed: {e}"),
            priority: NotificationPriority::Warning,
        });
    }

    // Always transition back to Idle, even on error.
    world
        .resource_mut::<NextState<SaveLoadState>>()
        .set(SaveLoadState::Idle);
}

fn exclusive_load_inner(world: &mut World) -> Result<(), SaveError> {
    let pending = world.resource_mut::<PendingLoad>().0.take();
    let (slot, text) = pending.ok_or(SaveError::NoData)?;

    // Parse completely BEFORE mutating anything: a corrupt slot must never
    // leave a half-reset world behind.
    let save = serialization::decode(&text)?;

    despawn_all_game_entities(world);
    restore_resources(world, &save);
    spawn_entities_from_save(world, &save);

    info!(
        "Loaded {} buildings from slot {}",
        save.building_count(),
        slot
    );
    world.send_event(NotificationEvent {
        text: format!("Loaded slot {slot}."),
        priority: NotificationPriority::Positive,
    });
    Ok(())
}

/// Restore global state from the save and reset everything derived. Loading
/// is an external reset for the lose monitor: timers clear and a previously
/// lost game resumes frozen-free from the restored state.
fn restore_resources(world: &mut World, save: &SaveData) {
    *world.resource_mut::<CityLedger>() = CityLedger {
        money: save.manager_current_money,
        ..Default::default()
    };
    // The blob carries only the hour; day numbering restarts.
    *world.resource_mut::<GameClock>() = GameClock {
        day: 1,
        hour: save.time_of_day,
        paused: false,
    };
    *world.resource_mut::<LoseConditionState>() = LoseConditionState::default();
    world.resource_mut::<HouseSpawnTimer>().0 = 0.0;
}
