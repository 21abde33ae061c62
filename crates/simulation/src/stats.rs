//! City-wide display metrics for the UI boundary.
//!
//! Republished every PostSim tick from the ledger and building counts; the
//! display layer only ever reads this resource.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::buildings::{Building, BuildingKind};
use crate::ledger::CityLedger;
use crate::simulation_sets::SimulationSet;

#[derive(Resource, Default, Debug, Clone, Serialize, Deserialize)]
pub struct CityStats {
    pub money: f32,
    pub tax_income_per_second: f32,
    pub average_happiness: f32,
    pub average_carbon_emission: f32,
    pub total_carbon_emission: f32,
    pub houses: u32,
    pub hospitals: u32,
    pub police_departments: u32,
    pub bus_stops: u32,
}

pub fn update_stats(
    ledger: Res<CityLedger>,
    buildings: Query<&Building>,
    mut stats: ResMut<CityStats>,
) {
    let mut houses = 0u32;
    let mut hospitals = 0u32;
    let mut police = 0u32;
    let mut bus_stops = 0u32;
    for building in &buildings {
        match building.kind {
            BuildingKind::House => houses += 1,
            BuildingKind::Hospital => hospitals += 1,
            BuildingKind::PoliceDepartment => police += 1,
            BuildingKind::BusStop => bus_stops += 1,
        }
    }

    stats.money = ledger.money;
    stats.tax_income_per_second = ledger.tax_income_per_second;
    stats.average_happiness = ledger.average_happiness;
    stats.average_carbon_emission = ledger.average_carbon_emission;
    stats.total_carbon_emission = ledger.total_carbon_emission;
    stats.houses = houses;
    stats.hospitals = hospitals;
    stats.police_departments = police;
    stats.bus_stops = bus_stops;
}

pub struct StatsPlugin;

impl Plugin for StatsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CityStats>()
            .add_systems(FixedUpdate, update_stats.in_set(SimulationSet::PostSim));
    }
}
