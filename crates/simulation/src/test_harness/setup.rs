//! Builder methods for assembling city state in integration tests.

use bevy::prelude::*;

use crate::buildings::{
    Building, BuildingKind, BusStopLink, House, OperatingCost, PlaceBuildingEvent, ServiceEffect,
    Tile, TileRegistry,
};
use crate::coverage::{ProximityEvent, ProximityTransition};
use crate::game_params::GameParams;
use crate::ledger::CityLedger;
use crate::time_of_day::GameClock;

use super::TestCity;

impl TestCity {
    /// Set the city treasury to the given amount.
    pub fn with_money(mut self, money: f32) -> Self {
        self.world().resource_mut::<CityLedger>().money = money;
        self
    }

    /// Set the game clock hour (0.0..24.0).
    pub fn with_time(mut self, hour: f32) -> Self {
        self.world().resource_mut::<GameClock>().hour = hour;
        self
    }

    /// Adjust game parameters before the scenario runs.
    pub fn with_params(mut self, adjust: impl FnOnce(&mut GameParams)) -> Self {
        adjust(&mut self.world().resource_mut::<GameParams>());
        self
    }

    /// Spawn a house with default attributes at the given tile.
    pub fn with_house(self, tile: Tile) -> Self {
        let params = self.params();
        self.with_custom_house(
            tile,
            params.buildings.house.tax_income,
            params.buildings.house.base_happiness,
            params.buildings.house.carbon_emission,
        )
    }

    /// Spawn a house with explicit economic attributes at the given tile.
    pub fn with_custom_house(
        mut self,
        tile: Tile,
        tax_income: f32,
        happiness: f32,
        carbon_emission: f32,
    ) -> Self {
        let spacing = self.params().buildings.tile_spacing;
        let entity = self
            .world()
            .spawn((
                Building::at_tile(BuildingKind::House, tile, spacing),
                House {
                    tax_income,
                    happiness,
                    carbon_emission,
                    has_hospital: false,
                    has_police: false,
                    bus_stops: 0,
                },
            ))
            .id();
        self.world().resource_mut::<TileRegistry>().claim(tile, entity);
        self
    }

    /// Spawn a hospital or police department at the given tile.
    pub fn with_service(mut self, kind: BuildingKind, tile: Tile) -> Self {
        let params = self.params();
        let service = match kind {
            BuildingKind::Hospital => &params.buildings.hospital,
            BuildingKind::PoliceDepartment => &params.buildings.police_department,
            other => panic!("with_service expects a service kind, got {other:?}"),
        };
        let effect = ServiceEffect {
            happiness_increase: service.happiness_increase,
            secondary_happiness_increase: service.secondary_happiness_increase,
        };
        let upkeep = OperatingCost {
            per_second: service.operation_cost,
        };
        let spacing = params.buildings.tile_spacing;
        let entity = self
            .world()
            .spawn((Building::at_tile(kind, tile, spacing), effect, upkeep))
            .id();
        self.world().resource_mut::<TileRegistry>().claim(tile, entity);
        self
    }

    /// Spawn a bus stop at the given tile.
    pub fn with_bus_stop(mut self, tile: Tile) -> Self {
        let params = self.params();
        let upkeep = OperatingCost {
            per_second: params.buildings.bus_stop.operation_cost,
        };
        let spacing = params.buildings.tile_spacing;
        let entity = self
            .world()
            .spawn((
                Building::at_tile(BuildingKind::BusStop, tile, spacing),
                BusStopLink::default(),
                upkeep,
            ))
            .id();
        self.world().resource_mut::<TileRegistry>().claim(tile, entity);
        self
    }

    /// Queue a placement request as the input layer would.
    pub fn request_placement(&mut self, kind: BuildingKind, tile: Tile) {
        self.world().send_event(PlaceBuildingEvent { kind, tile });
    }

    /// Report a proximity transition as the trigger layer would.
    pub fn report_proximity(
        &mut self,
        service: Entity,
        house: Entity,
        transition: ProximityTransition,
    ) {
        self.world().send_event(ProximityEvent {
            service,
            house,
            transition,
        });
    }

    pub(super) fn params(&self) -> GameParams {
        self.app.world().resource::<GameParams>().clone()
    }
}
