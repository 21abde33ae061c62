use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// A grid coordinate on the building plane. Tiles are `tile_spacing` world
/// units apart on the x/z plane.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Tile {
    pub x: i32,
    pub z: i32,
}

impl Tile {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// World-space position of the tile center.
    pub fn world_position(&self, spacing: f32) -> [f32; 3] {
        [self.x as f32 * spacing, 0.0, self.z as f32 * spacing]
    }

    /// Tile whose center is nearest to the given world position.
    pub fn from_world(position: [f32; 3], spacing: f32) -> Self {
        Self {
            x: (position[0] / spacing).round() as i32,
            z: (position[2] / spacing).round() as i32,
        }
    }

    /// The four orthogonal neighbors at tile spacing.
    pub fn neighbors(&self) -> [Tile; 4] {
        [
            Tile::new(self.x, self.z + 1),
            Tile::new(self.x, self.z - 1),
            Tile::new(self.x + 1, self.z),
            Tile::new(self.x - 1, self.z),
        ]
    }
}

/// The building variants the simulation knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    House,
    Hospital,
    PoliceDepartment,
    BusStop,
}

impl BuildingKind {
    pub fn label(&self) -> &'static str {
        match self {
            BuildingKind::House => "House",
            BuildingKind::Hospital => "Hospital",
            BuildingKind::PoliceDepartment => "Police Department",
            BuildingKind::BusStop => "Bus Stop",
        }
    }
}

/// Placement geometry shared by every building entity.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub kind: BuildingKind,
    pub tile: Tile,
    pub position: [f32; 3],
    /// Euler angles in degrees.
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
}

impl Building {
    /// A building standing upright and unscaled at the given tile.
    pub fn at_tile(kind: BuildingKind, tile: Tile, spacing: f32) -> Self {
        Self {
            kind,
            tile,
            position: tile.world_position(spacing),
            rotation: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

/// Economic attributes of a house. Mutated only by proximity events from
/// service buildings; the ledger aggregates without writing back.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct House {
    /// Base tax income per second, before the happiness multiplier.
    pub tax_income: f32,
    /// Current happiness in `0.0..=MAX_HOUSE_HAPPINESS`.
    pub happiness: f32,
    /// Carbon emitted per second, before bus-stop mitigation.
    pub carbon_emission: f32,
    pub has_hospital: bool,
    pub has_police: bool,
    /// Number of bus stops whose radius covers this house.
    pub bus_stops: u32,
}

/// The upkeep capability: buildings carrying this component charge
/// `per_second` against the city's tax income every tick. Component
/// membership makes the registration set-like — a building can be counted
/// at most once per instantiation.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OperatingCost {
    pub per_second: f32,
}

/// Happiness granted by hospitals and police departments to houses entering
/// their service radius.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ServiceEffect {
    /// Granted to a house gaining this service kind for the first time.
    pub happiness_increase: f32,
    /// Granted when the house is already covered by this service kind.
    pub secondary_happiness_increase: f32,
}

/// Per-stop connection count for bus stops.
#[derive(Component, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BusStopLink {
    pub connected_houses: u32,
}
