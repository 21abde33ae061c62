use bevy::prelude::*;

use simulation::buildings::{Building, BuildingKind, House, ServiceEffect};
use simulation::ledger::CityLedger;
use simulation::notifications::{NotificationEvent, NotificationPriority};
use simulation::time_of_day::GameClock;
use simulation::SaveLoadState;

use crate::atomic_write::atomic_write;
use crate::save_error::SaveError;
use crate::save_plugin::{PendingSaveSlot, SaveDirectory};
use crate::save_types::{BusStopRecord, HouseRecord, SaveData, ServiceRecord};
use crate::serialization;

/// Exclusive system performing the entire save operation with full world
/// access. Runs on `OnEnter(SaveLoadState::Saving)`, then transitions back
/// to `Idle`. A write failure is logged and surfaced as a warning — the
/// simulation continues untouched.
pub(crate) fn exclusive_save(world: &mut World) {
    if let Some(slot) = world.resource_mut::<PendingSaveSlot>().0.take() {
        let save = snapshot_world(world, slot);
        match write_save(world, &save) {
            Ok(path) => {
                info!(
                    "Saved {} buildings to slot {} ({})",
                    save.building_count(),
                    slot,
                    path
                );
                world.send_event(NotificationEvent {
                    text: format!("Saved to slot {slot}."),
                    priority: NotificationPriority::Positive,
                });
            }
            Err(e) => {
                error!("Save failed: {e}");
                world.send_event(NotificationEvent {
                    text: format!("Save failed: {e}"),
                    priority: NotificationPriority::Warning,
                });
            }
        }
    }

    world
        .resource_mut::<NextState<SaveLoadState>>()
        .set(SaveLoadState::Idle);
}

/// Snapshot every live building into its per-kind record, sorted by tile so
/// identical worlds always produce identical slot files.
fn snapshot_world(world: &mut World, slot: u32) -> SaveData {
    let mut houses = Vec::new();
    let mut hospitals = Vec::new();
    let mut police_departments = Vec::new();
    let mut bus_stops = Vec::new();

    let mut q = world.query::<(&Building, Option<&House>, Option<&ServiceEffect>)>();
    for (building, house, effect) in q.iter(world) {
        match building.kind {
            BuildingKind::House => {
                if let Some(house) = house {
                    houses.push((
                        building.tile,
                        HouseRecord {
                            position: building.position,
                            rotation: building.rotation,
                            scale: building.scale,
                            tax_income: house.tax_income,
                            current_happiness: house.happiness,
                            carbon_emission: house.carbon_emission,
                        },
                    ));
                }
            }
            BuildingKind::Hospital | BuildingKind::PoliceDepartment => {
                if let Some(effect) = effect {
                    let record = ServiceRecord {
                        position: building.position,
                        rotation: building.rotation,
                        scale: building.scale,
                        happiness_increase: effect.happiness_increase,
                        secondary_happiness_increase: effect.secondary_happiness_increase,
                    };
                    if building.kind == BuildingKind::Hospital {
                        hospitals.push((building.tile, record));
                    } else {
                        police_departments.push((building.tile, record));
                    }
                }
            }
            BuildingKind::BusStop => {
                bus_stops.push((
                    building.tile,
                    BusStopRecord {
                        position: building.position,
                        rotation: building.rotation,
                        scale: building.scale,
                    },
                ));
            }
        }
    }

    fn sorted<R>(mut keyed: Vec<(simulation::buildings::Tile, R)>) -> Vec<R> {
        keyed.sort_by_key(|(tile, _)| *tile);
        keyed.into_iter().map(|(_, record)| record).collect()
    }

    SaveData {
        slot_number: slot,
        time_of_day: world.resource::<GameClock>().hour,
        manager_current_money: world.resource::<CityLedger>().money,
        houses: sorted(houses),
        police_departments: sorted(police_departments),
        bus_stops: sorted(bus_stops),
        hospitals: sorted(hospitals),
    }
}

/// Encode and atomically write the slot file. Returns the display path.
fn write_save(world: &World, save: &SaveData) -> Result<String, SaveError> {
    let text = serialization::encode(save)?;
    let path = world
        .resource::<SaveDirectory>()
        .slot_path(save.slot_number);
    atomic_write(&path, text.as_bytes())?;
    Ok(path.display().to_string())
}
