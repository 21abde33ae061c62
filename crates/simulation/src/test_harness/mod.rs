//! # TestCity — headless integration test harness
//!
//! Provides a fluent builder that wraps `bevy::app::App` + `SimulationPlugin`
//! for running integration tests without a window or renderer.
//!
//! Ticking runs the `FixedUpdate` schedule directly and advances the generic
//! `Time` resource by hand, so every test controls its own `dt` exactly and
//! never depends on wall-clock time.

mod queries;
mod setup;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use std::time::Duration;

use crate::world_init::SkipWorldInit;
use crate::SimulationPlugin;

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
///
/// Use builder methods to set up city state, then call `tick()` to advance
/// the simulation and query/assert on the resulting ECS state.
pub struct TestCity {
    app: App,
}

impl TestCity {
    /// Create an **empty** city: no buildings, no frontier, resources at
    /// their defaults. World seeding is skipped so tests assemble exactly
    /// the state they need.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);

        // Insert the marker BEFORE SimulationPlugin so init_world skips.
        app.insert_resource(SkipWorldInit);
        app.add_plugins(SimulationPlugin);

        // Ticks are driven manually through `tick()`; park the fixed-update
        // accumulator so `app.update()` never runs a stray simulation tick.
        app.insert_resource(Time::<Fixed>::from_seconds(3600.0));

        // Run one update so Startup systems execute (init_world will no-op).
        app.update();

        Self { app }
    }

    /// Create a city through the normal seeding path: starting money and a
    /// single founding house at the origin.
    pub fn seeded() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.add_plugins(SimulationPlugin);
        app.insert_resource(Time::<Fixed>::from_seconds(3600.0));
        app.update();
        Self { app }
    }

    /// Advance the simulation by one tick of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let world = self.app.world_mut();
        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(dt));
        world.run_schedule(FixedUpdate);
    }

    /// Advance the simulation by `n` ticks of `dt` seconds each.
    pub fn tick_n(&mut self, n: usize, dt: f32) {
        for _ in 0..n {
            self.tick(dt);
        }
    }

    pub fn app(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn world(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
