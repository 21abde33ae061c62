//! Headless host for the microcity simulation core.
//!
//! Assembles the Bevy `App` from the simulation and save plugins and runs
//! the fixed-tick loop. Rendering, input, and UI layers plug in as
//! additional plugins; none are required for the core to run.

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use save::SavePlugin;
use simulation::SimulationPlugin;

/// Simulation tick rate.
const TICK_HZ: f64 = 10.0;
/// Frame pacing for the headless schedule runner.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() {
    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(FRAME_INTERVAL)),
        )
        .add_plugins(LogPlugin::default())
        .add_plugins(StatesPlugin)
        .add_plugins(SimulationPlugin)
        .add_plugins(SavePlugin)
        .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
        .run();
}
