use bevy::prelude::*;

pub mod buildings;
pub mod config;
pub mod coverage;
pub mod game_params;
pub mod ledger;
pub mod lose_conditions;
pub mod notifications;
pub mod selection;
pub mod sim_rng;
pub mod simulation_sets;
pub mod stats;
pub mod time_of_day;
pub mod world_init;

mod save_load_state;

pub use save_load_state::SaveLoadState;
pub use simulation_sets::SimulationSet;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

use lose_conditions::LoseConditionState;
use time_of_day::GameClock;

/// Run condition for the fixed-tick simulation sets: the world only
/// advances while the clock is unpaused and the game has not been lost.
/// Game over freezes the whole simulation until an external reset
/// (new game or load) clears it.
pub fn simulation_running(clock: Res<GameClock>, lose: Res<LoseConditionState>) -> bool {
    !clock.paused && !lose.is_game_over()
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<SaveLoadState>()
            .init_resource::<game_params::GameParams>();

        // The per-tick ordering contract: clock/growth/placement, then
        // proximity mutation and ledger aggregation, then the readers of the
        // published aggregates. Everything is gated off while a save/load
        // operation is in progress or the simulation is frozen.
        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::PreSim,
                SimulationSet::Simulation,
                SimulationSet::PostSim,
            )
                .chain()
                .run_if(in_state(SaveLoadState::Idle))
                .run_if(simulation_running),
        );

        app.add_systems(Startup, world_init::init_world);

        app.add_plugins((
            sim_rng::SimRngPlugin,
            notifications::NotificationsPlugin,
            time_of_day::TimeOfDayPlugin,
            buildings::BuildingsPlugin,
            coverage::CoveragePlugin,
            ledger::LedgerPlugin,
            lose_conditions::LoseConditionsPlugin,
            selection::SelectionPlugin,
            stats::StatsPlugin,
        ));
    }
}
