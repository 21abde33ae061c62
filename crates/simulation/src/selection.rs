//! Building selection for the display boundary.
//!
//! The input layer reports which building the player clicked via
//! [`SelectBuildingEvent`]; the core maintains a single [`Selection`] and
//! republishes a computed [`BuildingInfo`] every tick so the info panel
//! always shows current values. Selecting a new building implicitly
//! deselects the previous one.

use bevy::prelude::*;

use crate::buildings::{Building, BuildingKind, BusStopLink, House, OperatingCost, ServiceEffect};
use crate::simulation_sets::SimulationSet;

/// Request from the input layer to select a building entity.
#[derive(Event, Debug, Clone, Copy)]
pub struct SelectBuildingEvent {
    pub entity: Entity,
}

/// Request from the input layer to clear the selection.
#[derive(Event, Debug, Clone, Copy)]
pub struct DeselectEvent;

/// Computed display fields for the selected building.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingInfo {
    pub kind: BuildingKind,
    pub lines: Vec<String>,
}

/// The currently selected building, if any, with its published info.
#[derive(Resource, Debug, Default)]
pub struct Selection {
    pub selected: Option<Entity>,
    pub info: Option<BuildingInfo>,
}

type InfoComponents = (
    &'static Building,
    Option<&'static House>,
    Option<&'static ServiceEffect>,
    Option<&'static BusStopLink>,
    Option<&'static OperatingCost>,
);

fn build_info(
    (building, house, effect, link, upkeep): (
        &Building,
        Option<&House>,
        Option<&ServiceEffect>,
        Option<&BusStopLink>,
        Option<&OperatingCost>,
    ),
) -> BuildingInfo {
    let mut lines = vec![format!(
        "Tile ({}, {})",
        building.tile.x, building.tile.z
    )];
    if let Some(house) = house {
        lines.push(format!("Tax income: {:.2}/s", house.tax_income));
        lines.push(format!("Happiness: {:.2}", house.happiness));
        lines.push(format!("Carbon emission: {:.2}/s", house.carbon_emission));
        lines.push(format!("Hospital access: {}", house.has_hospital));
        lines.push(format!("Police access: {}", house.has_police));
        lines.push(format!("Connected bus stops: {}", house.bus_stops));
    }
    if let Some(effect) = effect {
        lines.push(format!("Happiness increase: {:.2}", effect.happiness_increase));
        lines.push(format!(
            "Secondary increase: {:.2}",
            effect.secondary_happiness_increase
        ));
    }
    if let Some(link) = link {
        lines.push(format!("Connected houses: {}", link.connected_houses));
    }
    if let Some(upkeep) = upkeep {
        lines.push(format!("Upkeep: {:.2}/s", upkeep.per_second));
    }
    BuildingInfo {
        kind: building.kind,
        lines,
    }
}

/// Applies selection and deselection requests.
pub fn handle_selection_events(
    mut selects: EventReader<SelectBuildingEvent>,
    mut deselects: EventReader<DeselectEvent>,
    mut selection: ResMut<Selection>,
    buildings: Query<InfoComponents>,
) {
    for event in selects.read() {
        if let Ok(components) = buildings.get(event.entity) {
            selection.selected = Some(event.entity);
            selection.info = Some(build_info(components));
        }
    }
    if deselects.read().next().is_some() {
        selection.selected = None;
        selection.info = None;
    }
}

/// Recomputes the published info each tick so the panel tracks live values,
/// and clears the selection if the building was demolished.
pub fn refresh_selection_info(
    mut selection: ResMut<Selection>,
    buildings: Query<InfoComponents>,
) {
    let Some(entity) = selection.selected else {
        return;
    };
    match buildings.get(entity) {
        Ok(components) => selection.info = Some(build_info(components)),
        Err(_) => {
            selection.selected = None;
            selection.info = None;
        }
    }
}

pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Selection>()
            .add_event::<SelectBuildingEvent>()
            .add_event::<DeselectEvent>()
            .add_systems(
                FixedUpdate,
                (handle_selection_events, refresh_selection_info)
                    .chain()
                    .in_set(SimulationSet::PostSim),
            );
    }
}
