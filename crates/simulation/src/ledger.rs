//! The city ledger: per-tick aggregation of tax income, happiness, and
//! carbon emissions over all tracked houses, minus the upkeep of costly
//! buildings.
//!
//! The ledger never mutates houses — it only reads them. Houses that were
//! despawned since the last tick simply drop out of the query, so stale
//! references can never be double-counted. Money accumulates linearly
//! (`money += tax_income_per_second * dt`) and is never clamped; a city can
//! run a deficit into negative balance.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::buildings::{House, OperatingCost};
use crate::config;
use crate::simulation_sets::SimulationSet;

/// Aggregate economic and environmental state, recomputed every tick.
/// All fields except `money` are derived and only meaningful after the
/// first tick.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct CityLedger {
    /// Treasury balance. May go negative; never clamped.
    pub money: f32,
    /// Net tax income per second: `Σ tax_income · happiness` over houses,
    /// minus `Σ operation_cost` over costly buildings.
    pub tax_income_per_second: f32,
    /// Mean house happiness; `0.0` when there are no houses.
    pub average_happiness: f32,
    /// Mean per-house carbon contribution; `0.0` when there are no houses.
    pub average_carbon_emission: f32,
    /// Total carbon per second after bus-stop mitigation.
    pub total_carbon_emission: f32,
    /// Number of houses aggregated this tick.
    pub house_count: u32,
}

impl Default for CityLedger {
    fn default() -> Self {
        Self {
            money: config::STARTING_MONEY,
            tax_income_per_second: 0.0,
            average_happiness: 0.0,
            average_carbon_emission: 0.0,
            total_carbon_emission: 0.0,
            house_count: 0,
        }
    }
}

/// Sums over a set of houses: gross tax per second, happiness sum, total
/// mitigated carbon, house count. Extracted from the system for direct
/// testing.
pub(crate) fn aggregate_houses<'a>(
    houses: impl Iterator<Item = &'a House>,
) -> (f32, f32, f32, u32) {
    let mut gross_tax = 0.0;
    let mut happiness_sum = 0.0;
    let mut total_carbon = 0.0;
    let mut count = 0u32;
    for house in houses {
        gross_tax += house.tax_income * house.happiness;
        happiness_sum += house.happiness;
        // Each connected bus stop dilutes the house's emissions.
        total_carbon += house.carbon_emission / (house.bus_stops + 1) as f32;
        count += 1;
    }
    (gross_tax, happiness_sum, total_carbon, count)
}

/// Recomputes every derived aggregate and applies this tick's income to the
/// treasury.
pub fn tick_ledger(
    time: Res<Time>,
    mut ledger: ResMut<CityLedger>,
    houses: Query<&House>,
    upkeep: Query<&OperatingCost>,
) {
    let (gross_tax, happiness_sum, total_carbon, count) = aggregate_houses(houses.iter());

    let upkeep_per_second: f32 = upkeep.iter().map(|c| c.per_second).sum();

    ledger.tax_income_per_second = gross_tax - upkeep_per_second;
    ledger.total_carbon_emission = total_carbon;
    ledger.house_count = count;

    // With no houses the averages are undefined; 0.0 is the published
    // sentinel so NaN never reaches displayed metrics or the lose monitor.
    if count > 0 {
        ledger.average_happiness = happiness_sum / count as f32;
        ledger.average_carbon_emission = total_carbon / count as f32;
    } else {
        ledger.average_happiness = 0.0;
        ledger.average_carbon_emission = 0.0;
    }

    ledger.money += ledger.tax_income_per_second * time.delta_secs();
}

pub struct LedgerPlugin;

impl Plugin for LedgerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CityLedger>().add_systems(
            FixedUpdate,
            tick_ledger
                .after(crate::coverage::apply_proximity_events)
                .in_set(SimulationSet::Simulation),
        );
    }
}
