//! Flat persisted records, one shape per building kind plus a top-level
//! wrapper carrying global state. Field names are camelCase in the JSON so
//! saves stay compatible with hand inspection and external tooling.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseRecord {
    pub position: [f32; 3],
    /// Euler angles in degrees.
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
    pub tax_income: f32,
    pub current_happiness: f32,
    pub carbon_emission: f32,
}

/// Record shape shared by hospitals and police departments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
    pub happiness_increase: f32,
    pub secondary_happiness_increase: f32,
}

/// Bus stops persist geometry only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusStopRecord {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
}

/// One persisted save slot: global state plus the per-kind record lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveData {
    /// Slot numbers start at 1.
    pub slot_number: u32,
    /// Hour of day in `0.0..24.0`.
    pub time_of_day: f32,
    pub manager_current_money: f32,
    pub houses: Vec<HouseRecord>,
    pub police_departments: Vec<ServiceRecord>,
    pub bus_stops: Vec<BusStopRecord>,
    pub hospitals: Vec<ServiceRecord>,
}

impl SaveData {
    /// Total number of building records across all kinds.
    pub fn building_count(&self) -> usize {
        self.houses.len()
            + self.police_departments.len()
            + self.bus_stops.len()
            + self.hospitals.len()
    }
}
