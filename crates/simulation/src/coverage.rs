//! Proximity-driven service coverage.
//!
//! The physics/trigger layer is an external collaborator: it detects when a
//! house enters or leaves a service building's radius and reports it as a
//! [`ProximityEvent`]. This module owns only the resulting mutation contract
//! on the house:
//!
//! * Hospital / police enter: the first service of that kind grants its full
//!   happiness increase and sets the coverage flag; additional ones grant
//!   the secondary increase.
//! * Bus stop enter/exit: increments/decrements the house's stop count and
//!   the stop's connection count, saturating at zero.
//!
//! Happiness is clamped to `0.0..=MAX_HOUSE_HAPPINESS` at the mutation
//! point, so repeated coverage cannot grow it without bound.

use bevy::prelude::*;

use crate::buildings::{Building, BuildingKind, BusStopLink, House, ServiceEffect};
use crate::config::MAX_HOUSE_HAPPINESS;
use crate::simulation_sets::SimulationSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityTransition {
    Enter,
    Exit,
}

/// Reported by the external trigger layer when `house` crosses the service
/// radius of `service`.
#[derive(Event, Debug, Clone, Copy)]
pub struct ProximityEvent {
    pub service: Entity,
    pub house: Entity,
    pub transition: ProximityTransition,
}

fn grant_happiness(house: &mut House, covered: &mut bool, effect: &ServiceEffect) {
    let increase = if *covered {
        effect.secondary_happiness_increase
    } else {
        *covered = true;
        effect.happiness_increase
    };
    house.happiness = (house.happiness + increase).clamp(0.0, MAX_HOUSE_HAPPINESS);
}

/// Applies queued proximity events to houses. Events referencing entities
/// that were despawned in the meantime are dropped silently.
pub fn apply_proximity_events(
    mut events: EventReader<ProximityEvent>,
    mut houses: Query<&mut House>,
    services: Query<(&Building, Option<&ServiceEffect>)>,
    mut bus_stops: Query<&mut BusStopLink>,
) {
    for event in events.read() {
        let Ok((building, effect)) = services.get(event.service) else {
            continue;
        };
        let Ok(mut house) = houses.get_mut(event.house) else {
            continue;
        };

        match (building.kind, event.transition) {
            (BuildingKind::Hospital, ProximityTransition::Enter) => {
                if let Some(effect) = effect {
                    let mut covered = house.has_hospital;
                    grant_happiness(&mut house, &mut covered, effect);
                    house.has_hospital = covered;
                }
            }
            (BuildingKind::PoliceDepartment, ProximityTransition::Enter) => {
                if let Some(effect) = effect {
                    let mut covered = house.has_police;
                    grant_happiness(&mut house, &mut covered, effect);
                    house.has_police = covered;
                }
            }
            (BuildingKind::BusStop, ProximityTransition::Enter) => {
                house.bus_stops += 1;
                if let Ok(mut link) = bus_stops.get_mut(event.service) {
                    link.connected_houses += 1;
                }
            }
            (BuildingKind::BusStop, ProximityTransition::Exit) => {
                house.bus_stops = house.bus_stops.saturating_sub(1);
                if let Ok(mut link) = bus_stops.get_mut(event.service) {
                    link.connected_houses = link.connected_houses.saturating_sub(1);
                }
            }
            // Hospitals and police departments do not revoke granted
            // happiness on exit, and houses near houses are not a thing.
            _ => {}
        }
    }
}

pub struct CoveragePlugin;

impl Plugin for CoveragePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ProximityEvent>().add_systems(
            FixedUpdate,
            apply_proximity_events.in_set(SimulationSet::Simulation),
        );
    }
}
