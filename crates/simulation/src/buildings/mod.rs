//! Building entities, the tile registry, placement handling, and automatic
//! house growth.

mod placement;
mod spawning;
mod tile_registry;
mod types;

use bevy::prelude::*;

use crate::simulation_sets::SimulationSet;

pub use placement::{
    construction_cost, handle_demolish_building, handle_place_building, DemolishBuildingEvent,
    PlaceBuildingEvent,
};
pub use spawning::{house_spawner, HouseSpawnTimer};
pub use tile_registry::TileRegistry;
pub use types::{
    Building, BuildingKind, BusStopLink, House, OperatingCost, ServiceEffect, Tile,
};

pub struct BuildingsPlugin;

impl Plugin for BuildingsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TileRegistry>()
            .init_resource::<HouseSpawnTimer>()
            .add_event::<PlaceBuildingEvent>()
            .add_event::<DemolishBuildingEvent>()
            .add_systems(
                FixedUpdate,
                (house_spawner, handle_place_building, handle_demolish_building)
                    .chain()
                    .after(crate::time_of_day::tick_game_clock)
                    .in_set(SimulationSet::PreSim),
            );
    }
}
