//! Data-driven game parameters.
//!
//! Collects the tunable simulation constants into a single [`GameParams`]
//! resource so they can be adjusted by the host without recompilation.
//! Systems read from `Res<GameParams>` instead of module-level constants.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config;

// ---------------------------------------------------------------------------
// Economy parameters
// ---------------------------------------------------------------------------

/// Tunables for the city treasury.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomyParams {
    /// Treasury balance for a newly founded city.
    pub starting_money: f32,
}

impl Default for EconomyParams {
    fn default() -> Self {
        Self {
            starting_money: config::STARTING_MONEY,
        }
    }
}

// ---------------------------------------------------------------------------
// Clock parameters
// ---------------------------------------------------------------------------

/// Tunables for the day/night clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockParams {
    /// Real seconds for a full 24-hour in-game day.
    pub seconds_per_day: f32,
    /// Hour of day a new city starts at.
    pub starting_hour: f32,
}

impl Default for ClockParams {
    fn default() -> Self {
        Self {
            seconds_per_day: 60.0,
            starting_hour: 6.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Building parameters
// ---------------------------------------------------------------------------

/// Initial attribute values for a newly grown house.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseParams {
    /// Base tax income per second, before the happiness multiplier.
    pub tax_income: f32,
    /// Happiness a house starts with.
    pub base_happiness: f32,
    /// Carbon emitted per second, before bus-stop mitigation.
    pub carbon_emission: f32,
}

impl Default for HouseParams {
    fn default() -> Self {
        Self {
            tax_income: 1.0,
            base_happiness: 0.8,
            carbon_emission: 2.0,
        }
    }
}

/// Tunables shared by the happiness-granting service buildings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceParams {
    /// One-time cost charged to the treasury on placement.
    pub construction_cost: f32,
    /// Ongoing upkeep per second, subtracted from tax income.
    pub operation_cost: f32,
    /// Happiness granted to a house gaining this service for the first time.
    pub happiness_increase: f32,
    /// Happiness granted when the house already has this service.
    pub secondary_happiness_increase: f32,
}

/// Tunables for bus stops, which carry no happiness effect of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusStopParams {
    /// One-time cost charged to the treasury on placement.
    pub construction_cost: f32,
    /// Ongoing upkeep per second, subtracted from tax income.
    pub operation_cost: f32,
}

/// Tunables for building placement and growth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingParams {
    /// Grid spacing between adjacent building tiles, in world units.
    pub tile_spacing: f32,
    /// Seconds between automatic house spawns on the growth frontier.
    pub house_spawn_cooldown: f32,
    pub house: HouseParams,
    pub hospital: ServiceParams,
    pub police_department: ServiceParams,
    pub bus_stop: BusStopParams,
}

impl Default for BuildingParams {
    fn default() -> Self {
        Self {
            tile_spacing: config::TILE_SPACING,
            house_spawn_cooldown: 5.0,
            house: HouseParams::default(),
            hospital: ServiceParams {
                construction_cost: 150.0,
                operation_cost: 0.4,
                happiness_increase: 0.1,
                secondary_happiness_increase: 0.05,
            },
            police_department: ServiceParams {
                construction_cost: 120.0,
                operation_cost: 0.3,
                happiness_increase: 0.1,
                secondary_happiness_increase: 0.05,
            },
            bus_stop: BusStopParams {
                construction_cost: 50.0,
                operation_cost: 0.1,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Lose-condition parameters
// ---------------------------------------------------------------------------

/// Thresholds and grace periods for the three lose conditions. Each metric
/// has its own duration: transient dips do not end the game, only breaches
/// sustained for the full grace period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoseConditionParams {
    /// Average happiness below this arms the happiness timer.
    pub min_happiness: f32,
    /// Seconds of sustained low happiness before game over.
    pub low_happiness_duration: f32,
    /// Tax income per second per house below this arms the tax timer.
    pub min_tax_income_per_house: f32,
    /// Seconds of sustained low tax income before game over.
    pub low_tax_income_duration: f32,
    /// Average carbon emission above this arms the carbon timer.
    pub max_carbon_emission: f32,
    /// Seconds of sustained high carbon before game over.
    pub high_carbon_emission_duration: f32,
}

impl Default for LoseConditionParams {
    fn default() -> Self {
        Self {
            min_happiness: 0.5,
            low_happiness_duration: 180.0,
            min_tax_income_per_house: 0.2,
            low_tax_income_duration: 120.0,
            max_carbon_emission: 5.0,
            high_carbon_emission_duration: 240.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level resource
// ---------------------------------------------------------------------------

/// All tunable simulation parameters, grouped by subsystem.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameParams {
    pub economy: EconomyParams,
    pub clock: ClockParams,
    pub buildings: BuildingParams,
    pub lose_conditions: LoseConditionParams,
}
