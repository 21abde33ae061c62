//! World seeding for a fresh city.
//!
//! `init_world` runs once at startup; `seed_world` is the shared reset entry
//! point also used by the save crate's new-game path. A fresh world gets the
//! starting treasury, the configured morning hour, cleared lose timers, and
//! a single founding house whose neighbors form the first growth frontier.

use bevy::prelude::*;

use crate::buildings::{Building, BuildingKind, House, HouseSpawnTimer, Tile, TileRegistry};
use crate::game_params::GameParams;
use crate::ledger::CityLedger;
use crate::lose_conditions::LoseConditionState;
use crate::time_of_day::GameClock;

/// Marker resource: when present before startup, `init_world` does nothing.
/// Used by tests that want to assemble the world by hand.
#[derive(Resource)]
pub struct SkipWorldInit;

pub fn init_world(world: &mut World) {
    if world.contains_resource::<SkipWorldInit>() {
        return;
    }
    seed_world(world);
}

/// Reset the world to a fresh city. Assumes all game entities have already
/// been despawned (a fresh app has none; the new-game path despawns first).
pub fn seed_world(world: &mut World) {
    let params = world.resource::<GameParams>().clone();

    *world.resource_mut::<CityLedger>() = CityLedger {
        money: params.economy.starting_money,
        ..Default::default()
    };
    *world.resource_mut::<GameClock>() = GameClock {
        day: 1,
        hour: params.clock.starting_hour,
        paused: false,
    };
    *world.resource_mut::<LoseConditionState>() = LoseConditionState::default();
    world.resource_mut::<HouseSpawnTimer>().0 = 0.0;
    world.resource_mut::<TileRegistry>().clear();

    // The founding house: its neighbors seed the growth frontier.
    let tile = Tile::new(0, 0);
    let entity = world
        .spawn((
            Building::at_tile(BuildingKind::House, tile, params.buildings.tile_spacing),
            House {
                tax_income: params.buildings.house.tax_income,
                happiness: params.buildings.house.base_happiness,
                carbon_emission: params.buildings.house.carbon_emission,
                has_hospital: false,
                has_police: false,
                bus_stops: 0,
            },
        ))
        .id();
    world.resource_mut::<TileRegistry>().claim(tile, entity);

    info!("Seeded a new city with {:.0} starting money", params.economy.starting_money);
}
