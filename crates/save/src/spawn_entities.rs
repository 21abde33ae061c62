use bevy::prelude::*;

use simulation::buildings::{
    Building, BuildingKind, BusStopLink, House, OperatingCost, ServiceEffect, Tile, TileRegistry,
};
use simulation::game_params::GameParams;

use crate::save_types::SaveData;

/// Spawns one entity per record using direct world access, claiming each
/// tile in the registry so growth and placement resume correctly.
///
/// Saved positions are kept verbatim; the tile is re-derived from the
/// position at the configured spacing. Operating costs and service tunables
/// not carried by the records come from the current `GameParams`.
pub(crate) fn spawn_entities_from_save(world: &mut World, save: &SaveData) {
    let params = world.resource::<GameParams>().clone();
    let spacing = params.buildings.tile_spacing;

    let claim = |world: &mut World, tile: Tile, entity: Entity| {
        world.resource_mut::<TileRegistry>().claim(tile, entity);
    };

    for record in &save.houses {
        let tile = Tile::from_world(record.position, spacing);
        let entity = world
            .spawn((
                Building {
                    kind: BuildingKind::House,
                    tile,
                    position: record.position,
                    rotation: record.rotation,
                    scale: record.scale,
                },
                House {
                    tax_income: record.tax_income,
                    happiness: record.current_happiness,
                    carbon_emission: record.carbon_emission,
                    // Coverage flags are re-derived from collaborator
                    // proximity events; the saved happiness already embeds
                    // granted bonuses.
                    has_hospital: false,
                    has_police: false,
                    bus_stops: 0,
                },
            ))
            .id();
        claim(world, tile, entity);
    }

    for record in &save.hospitals {
        let tile = Tile::from_world(record.position, spacing);
        let entity = world
            .spawn((
                Building {
                    kind: BuildingKind::Hospital,
                    tile,
                    position: record.position,
                    rotation: record.rotation,
                    scale: record.scale,
                },
                ServiceEffect {
                    happiness_increase: record.happiness_increase,
                    secondary_happiness_increase: record.secondary_happiness_increase,
                },
                OperatingCost {
                    per_second: params.buildings.hospital.operation_cost,
                },
            ))
            .id();
        claim(world, tile, entity);
    }

    for record in &save.police_departments {
        let tile = Tile::from_world(record.position, spacing);
        let entity = world
            .spawn((
                Building {
                    kind: BuildingKind::PoliceDepartment,
                    tile,
                    position: record.position,
                    rotation: record.rotation,
                    scale: record.scale,
                },
                ServiceEffect {
                    happiness_increase: record.happiness_increase,
                    secondary_happiness_increase: record.secondary_happiness_increase,
                },
                OperatingCost {
                    per_second: params.buildings.police_department.operation_cost,
                },
            ))
            .id();
        claim(world, tile, entity);
    }

    for record in &save.bus_stops {
        let tile = Tile::from_world(record.position, spacing);
        let entity = world
            .spawn((
                Building {
                    kind: BuildingKind::BusStop,
                    tile,
                    position: record.position,
                    rotation: record.rotation,
                    scale: record.scale,
                },
                BusStopLink::default(),
                OperatingCost {
                    per_second: params.buildings.bus_stop.operation_cost,
                },
            ))
            .id();
        claim(world, tile, entity);
    }
}
