use bevy::prelude::*;

use crate::game_params::GameParams;
use crate::sim_rng::SimRng;

use super::placement::PlaceBuildingEvent;
use super::tile_registry::TileRegistry;
use super::types::BuildingKind;

/// Accumulated seconds since the last automatic house spawn.
#[derive(Resource, Default)]
pub struct HouseSpawnTimer(pub f32);

/// Grows the city: every `house_spawn_cooldown` seconds a new house appears
/// on a random frontier tile. Does nothing while the frontier is empty
/// (a freshly reset world before the first placement).
pub fn house_spawner(
    time: Res<Time>,
    params: Res<GameParams>,
    mut timer: ResMut<HouseSpawnTimer>,
    registry: Res<TileRegistry>,
    mut rng: ResMut<SimRng>,
    mut placements: EventWriter<PlaceBuildingEvent>,
) {
    timer.0 += time.delta_secs();
    if timer.0 < params.buildings.house_spawn_cooldown {
        return;
    }
    let Some(tile) = registry.random_frontier_tile(&mut rng) else {
        return;
    };
    timer.0 = 0.0;
    placements.send(PlaceBuildingEvent {
        kind: BuildingKind::House,
        tile,
    });
}
