//! Game clock and scheduled time-of-day events.
//!
//! [`GameClock`] tracks the in-game hour (0..24, wrapping at midnight) and
//! day number, advancing from the tick delta scaled by the configured
//! day length. [`TimeEventSchedule`] holds named once-per-day triggers:
//! each entry fires a [`TimeOfDayEvent`] the first tick the clock passes its
//! hour, and all latches reset when the clock crosses midnight.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game_params::GameParams;
use crate::simulation_sets::SimulationSet;

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct GameClock {
    pub day: u32,
    /// Hour of day in `0.0..24.0`.
    pub hour: f32,
    pub paused: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            day: 1,
            hour: 6.0, // start at 6 AM
            paused: false,
        }
    }
}

impl GameClock {
    /// Advance the clock by `dt` real seconds, with `seconds_per_day`
    /// controlling day length. Returns `true` when the advance crossed
    /// midnight.
    pub fn advance(&mut self, dt: f32, seconds_per_day: f32) -> bool {
        if self.paused || seconds_per_day <= 0.0 {
            return false;
        }
        self.hour += dt * 24.0 / seconds_per_day;
        if self.hour >= 24.0 {
            self.hour -= 24.0;
            self.day += 1;
            true
        } else {
            false
        }
    }

    pub fn formatted(&self) -> String {
        let h = self.hour as u32;
        let m = ((self.hour - h as f32) * 60.0) as u32;
        format!("Day {} {:02}:{:02}", self.day, h, m)
    }
}

// ---------------------------------------------------------------------------
// Scheduled time events
// ---------------------------------------------------------------------------

/// A named hour-of-day trigger. `fired` latches after the first firing of
/// the day and resets at midnight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEvent {
    pub name: String,
    /// Hour of day in `0.0..24.0` at which the event fires.
    pub hour: f32,
    fired: bool,
}

impl TimeEvent {
    pub fn new(name: impl Into<String>, hour: f32) -> Self {
        Self {
            name: name.into(),
            hour,
            fired: false,
        }
    }
}

/// Registry of scheduled time events. The host registers entries (street
/// lights at dusk, for example); the core only provides the firing contract.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeEventSchedule {
    pub events: Vec<TimeEvent>,
}

impl TimeEventSchedule {
    pub fn register(&mut self, name: impl Into<String>, hour: f32) {
        self.events.push(TimeEvent::new(name, hour));
    }

    /// Reset all once-per-day latches. Called when the clock crosses
    /// midnight.
    pub fn reset_daily(&mut self) {
        for event in &mut self.events {
            event.fired = false;
        }
    }

    /// Latch and return the events whose hour the clock has reached.
    pub fn due(&mut self, hour: f32) -> Vec<(String, f32)> {
        let mut fired = Vec::new();
        for event in &mut self.events {
            if !event.fired && hour >= event.hour {
                event.fired = true;
                fired.push((event.name.clone(), event.hour));
            }
        }
        fired
    }
}

/// Emitted once per day per registered [`TimeEvent`].
#[derive(Event, Debug, Clone)]
pub struct TimeOfDayEvent {
    pub name: String,
    pub hour: f32,
}

pub fn tick_game_clock(
    time: Res<Time>,
    params: Res<GameParams>,
    mut clock: ResMut<GameClock>,
    mut schedule: ResMut<TimeEventSchedule>,
    mut events: EventWriter<TimeOfDayEvent>,
) {
    let crossed_midnight = clock.advance(time.delta_secs(), params.clock.seconds_per_day);
    if crossed_midnight {
        schedule.reset_daily();
    }
    for (name, hour) in schedule.due(clock.hour) {
        events.send(TimeOfDayEvent { name, hour });
    }
}

pub struct TimeOfDayPlugin;

impl Plugin for TimeOfDayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameClock>()
            .init_resource::<TimeEventSchedule>()
            .add_event::<TimeOfDayEvent>()
            .add_systems(
                FixedUpdate,
                tick_game_clock.in_set(SimulationSet::PreSim),
            );
    }
}
