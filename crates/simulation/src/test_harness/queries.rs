//! Read-side helpers for asserting on city state in integration tests.

use bevy::prelude::*;

use crate::buildings::{Building, BuildingKind, House, Tile, TileRegistry};
use crate::ledger::CityLedger;
use crate::lose_conditions::{LoseConditionState, LoseMetric};
use crate::notifications::NotificationLog;
use crate::stats::CityStats;
use crate::time_of_day::GameClock;

use super::TestCity;

impl TestCity {
    pub fn ledger(&self) -> CityLedger {
        self.app.world().resource::<CityLedger>().clone()
    }

    pub fn money(&self) -> f32 {
        self.app.world().resource::<CityLedger>().money
    }

    pub fn stats(&self) -> CityStats {
        self.app.world().resource::<CityStats>().clone()
    }

    pub fn clock(&self) -> GameClock {
        self.app.world().resource::<GameClock>().clone()
    }

    pub fn lose_state(&self) -> LoseConditionState {
        self.app.world().resource::<LoseConditionState>().clone()
    }

    pub fn game_over(&self) -> Option<LoseMetric> {
        self.app.world().resource::<LoseConditionState>().game_over
    }

    /// Number of buildings of the given kind currently alive.
    pub fn count_buildings(&mut self, kind: BuildingKind) -> usize {
        let world = self.app.world_mut();
        let mut q = world.query::<&Building>();
        q.iter(world).filter(|b| b.kind == kind).count()
    }

    /// All live house components, for attribute assertions.
    pub fn houses(&mut self) -> Vec<House> {
        let world = self.app.world_mut();
        let mut q = world.query::<&House>();
        q.iter(world).cloned().collect()
    }

    /// Entity occupying the given tile, if any.
    pub fn building_at(&self, tile: Tile) -> Option<Entity> {
        self.app.world().resource::<TileRegistry>().entity_at(tile)
    }

    /// Text of the most recent notification, if any.
    pub fn latest_notification(&self) -> Option<String> {
        self.app
            .world()
            .resource::<NotificationLog>()
            .latest()
            .map(|n| n.text.clone())
    }
}
