use bevy::prelude::*;

use crate::game_params::GameParams;
use crate::ledger::CityLedger;
use crate::notifications::{NotificationEvent, NotificationPriority};

use super::tile_registry::TileRegistry;
use super::types::{Building, BuildingKind, BusStopLink, House, OperatingCost, ServiceEffect, Tile};

/// Request from the input/UI layer to place a building of `kind` at `tile`.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlaceBuildingEvent {
    pub kind: BuildingKind,
    pub tile: Tile,
}

/// Request from the input/UI layer to demolish an existing building.
#[derive(Event, Debug, Clone, Copy)]
pub struct DemolishBuildingEvent {
    pub entity: Entity,
}

/// One-time treasury charge for placing a building of `kind`. Houses grow on
/// their own and cost nothing.
pub fn construction_cost(kind: BuildingKind, params: &GameParams) -> f32 {
    match kind {
        BuildingKind::House => 0.0,
        BuildingKind::Hospital => params.buildings.hospital.construction_cost,
        BuildingKind::PoliceDepartment => params.buildings.police_department.construction_cost,
        BuildingKind::BusStop => params.buildings.bus_stop.construction_cost,
    }
}

/// Spawn the component bundle for `kind` at `tile` via deferred commands.
fn spawn_building(
    commands: &mut Commands,
    params: &GameParams,
    kind: BuildingKind,
    tile: Tile,
) -> Entity {
    let spacing = params.buildings.tile_spacing;
    let building = Building::at_tile(kind, tile, spacing);
    match kind {
        BuildingKind::House => commands
            .spawn((
                building,
                House {
                    tax_income: params.buildings.house.tax_income,
                    happiness: params.buildings.house.base_happiness,
                    carbon_emission: params.buildings.house.carbon_emission,
                    has_hospital: false,
                    has_police: false,
                    bus_stops: 0,
                },
            ))
            .id(),
        BuildingKind::Hospital => commands
            .spawn((
                building,
                ServiceEffect {
                    happiness_increase: params.buildings.hospital.happiness_increase,
                    secondary_happiness_increase: params
                        .buildings
                        .hospital
                        .secondary_happiness_increase,
                },
                OperatingCost {
                    per_second: params.buildings.hospital.operation_cost,
                },
            ))
            .id(),
        BuildingKind::PoliceDepartment => commands
            .spawn((
                building,
                ServiceEffect {
                    happiness_increase: params.buildings.police_department.happiness_increase,
                    secondary_happiness_increase: params
                        .buildings
                        .police_department
                        .secondary_happiness_increase,
                },
                OperatingCost {
                    per_second: params.buildings.police_department.operation_cost,
                },
            ))
            .id(),
        BuildingKind::BusStop => commands
            .spawn((
                building,
                BusStopLink::default(),
                OperatingCost {
                    per_second: params.buildings.bus_stop.operation_cost,
                },
            ))
            .id(),
    }
}

/// Handles placement requests: rejects occupied tiles and unaffordable
/// buildings, otherwise spawns the entity, claims the tile, and charges the
/// construction cost.
pub fn handle_place_building(
    mut commands: Commands,
    mut events: EventReader<PlaceBuildingEvent>,
    mut registry: ResMut<TileRegistry>,
    mut ledger: ResMut<CityLedger>,
    params: Res<GameParams>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    for event in events.read() {
        if registry.is_occupied(event.tile) {
            notifications.send(NotificationEvent {
                text: format!(
                    "Cannot build {}: tile ({}, {}) is occupied.",
                    event.kind.label(),
                    event.tile.x,
                    event.tile.z
                ),
                priority: NotificationPriority::Warning,
            });
            continue;
        }

        let cost = construction_cost(event.kind, &params);
        if cost > ledger.money {
            notifications.send(NotificationEvent {
                text: format!(
                    "Cannot afford {}: costs ${:.0}, treasury has ${:.2}.",
                    event.kind.label(),
                    cost,
                    ledger.money
                ),
                priority: NotificationPriority::Warning,
            });
            continue;
        }

        let entity = spawn_building(&mut commands, &params, event.kind, event.tile);
        registry.claim(event.tile, entity);
        ledger.money -= cost;
        debug!(
            "Placed {} at ({}, {})",
            event.kind.label(),
            event.tile.x,
            event.tile.z
        );
    }
}

/// Handles demolition requests: frees the tile and despawns the entity.
/// Requests against already-despawned entities are ignored.
pub fn handle_demolish_building(
    mut commands: Commands,
    mut events: EventReader<DemolishBuildingEvent>,
    mut registry: ResMut<TileRegistry>,
    buildings: Query<&Building>,
) {
    for event in events.read() {
        let Ok(building) = buildings.get(event.entity) else {
            continue;
        };
        registry.release(building.tile);
        commands.entity(event.entity).despawn();
        debug!(
            "Demolished {} at ({}, {})",
            building.kind.label(),
            building.tile.x,
            building.tile.z
        );
    }
}
