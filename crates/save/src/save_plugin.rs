use bevy::prelude::*;
use std::path::PathBuf;

use simulation::notifications::{NotificationEvent, NotificationPriority};
use simulation::SaveLoadState;

use crate::save_error::SaveError;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Request to save the world into the given slot (slots start at 1).
#[derive(Event, Debug, Clone, Copy)]
pub struct SaveGameEvent {
    pub slot: u32,
}

/// Request to load the world from the given slot.
#[derive(Event, Debug, Clone, Copy)]
pub struct LoadGameEvent {
    pub slot: u32,
}

/// Request to reset to a fresh city.
#[derive(Event, Debug, Clone, Copy)]
pub struct NewGameEvent;

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Directory holding the slot files. Defaults to `saves/` next to the
/// executable; tests point it at a scratch directory.
#[derive(Resource, Debug, Clone)]
pub struct SaveDirectory(pub PathBuf);

impl Default for SaveDirectory {
    fn default() -> Self {
        Self(PathBuf::from("saves"))
    }
}

impl SaveDirectory {
    /// File path for a slot number.
    pub fn slot_path(&self, slot: u32) -> PathBuf {
        self.0.join(format!("slot_{slot}.json"))
    }
}

/// Slot number waiting for the exclusive save system.
#[derive(Resource, Default)]
pub(crate) struct PendingSaveSlot(pub(crate) Option<u32>);

/// Slot number and raw file contents waiting for the exclusive load system.
#[derive(Resource, Default)]
pub(crate) struct PendingLoad(pub(crate) Option<(u32, String)>);

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SaveGameEvent>()
            .add_event::<LoadGameEvent>()
            .add_event::<NewGameEvent>()
            .init_resource::<SaveDirectory>()
            .init_resource::<PendingSaveSlot>()
            .init_resource::<PendingLoad>();

        // Event detection: lightweight systems that read events, do the
        // file read for loads, and trigger state transitions.
        app.add_systems(
            Update,
            (detect_save_event, detect_load_event, detect_new_game_event),
        );

        // Exclusive systems per state: run on state entry, perform all work
        // with full world access, and transition back to Idle.
        app.add_systems(
            OnEnter(SaveLoadState::Saving),
            crate::exclusive_save::exclusive_save,
        );
        app.add_systems(
            OnEnter(SaveLoadState::Loading),
            crate::exclusive_load::exclusive_load,
        );
        app.add_systems(
            OnEnter(SaveLoadState::NewGame),
            crate::exclusive_new_game::exclusive_new_game,
        );
    }
}

// ---------------------------------------------------------------------------
// Event detection systems
// ---------------------------------------------------------------------------

/// Detects `SaveGameEvent`, stashes the slot, and transitions to `Saving`.
fn detect_save_event(
    mut events: EventReader<SaveGameEvent>,
    mut pending: ResMut<PendingSaveSlot>,
    mut next_state: ResMut<NextState<SaveLoadState>>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    let Some(event) = events.read().next().copied() else {
        return;
    };
    // Only process one request per frame.
    events.read().for_each(drop);

    if event.slot == 0 {
        let err = SaveError::InvalidSlot(event.slot);
        warn!("{err}");
        notifications.send(NotificationEvent {
            text: format!("Save failed: {err}"),
            priority: NotificationPriority::Warning,
        });
        return;
    }

    pending.0 = Some(event.slot);
    next_state.set(SaveLoadState::Saving);
}

/// Detects `LoadGameEvent` and reads the slot file. A missing file is the
/// normal "no save data" outcome — the world is left untouched and an info
/// notification drives the fresh-game UX. Read failures and later parse
/// failures likewise leave the world untouched.
fn detect_load_event(
    mut events: EventReader<LoadGameEvent>,
    directory: Res<SaveDirectory>,
    mut pending: ResMut<PendingLoad>,
    mut next_state: ResMut<NextState<SaveLoadState>>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    let Some(event) = events.read().next().copied() else {
        return;
    };
    events.read().for_each(drop);

    let path = directory.slot_path(event.slot);
    match std::fs::read_to_string(&path) {
        Ok(text) => {
            pending.0 = Some((event.slot, text));
            next_state.set(SaveLoadState::Loading);
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("No save data in slot {} ({})", event.slot, path.display());
            notifications.send(NotificationEvent {
                text: format!("No save data in slot {}.", event.slot),
                priority: NotificationPriority::Info,
            });
        }
        Err(e) => {
            let err = SaveError::from(e);
            error!("Load failed: {err}");
            notifications.send(NotificationEvent {
                text: format!("Load failed: {err}"),
                priority: NotificationPriority::Warning,
            });
        }
    }
}

/// Detects `NewGameEvent` and transitions to `NewGame`.
fn detect_new_game_event(
    mut events: EventReader<NewGameEvent>,
    mut next_state: ResMut<NextState<SaveLoadState>>,
) {
    if events.read().next().is_some() {
        events.read().for_each(drop);
        next_state.set(SaveLoadState::NewGame);
    }
}
