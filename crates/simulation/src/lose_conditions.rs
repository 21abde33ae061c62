//! Lose-condition monitoring.
//!
//! Watches the ledger's published aggregates and runs three independent
//! breach timers — low happiness, low per-house tax income, high carbon
//! emission. Each failure mode has its own grace period: a metric must stay
//! on the wrong side of its threshold for the full configured duration
//! before the game ends, and recovering before the timer elapses cancels it.
//!
//! Game over is terminal for the whole monitor: the first timer to elapse
//! records its metric, pauses the [`GameClock`], and emits exactly one
//! [`GameOverEvent`]. No further transitions occur until an external reset
//! (new game or load) clears the state.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game_params::GameParams;
use crate::ledger::CityLedger;
use crate::notifications::{NotificationEvent, NotificationPriority};
use crate::simulation_sets::SimulationSet;
use crate::time_of_day::GameClock;

/// The three ways a city can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoseMetric {
    LowHappiness,
    LowTaxIncome,
    HighCarbonEmission,
}

impl LoseMetric {
    pub fn description(&self) -> &'static str {
        match self {
            LoseMetric::LowHappiness => "the population's happiness collapsed",
            LoseMetric::LowTaxIncome => "the city went insolvent",
            LoseMetric::HighCarbonEmission => "carbon emissions spiralled out of control",
        }
    }
}

/// Countdown state for a single metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum BreachTimer {
    /// The metric is on the acceptable side of its threshold.
    #[default]
    Inactive,
    /// The metric is breaching; game over when `remaining` reaches zero.
    Counting { remaining: f32 },
}

impl BreachTimer {
    /// Advance the timer by one tick. Arms on the first breaching tick
    /// (which already counts toward the grace period), cancels when the
    /// metric recovers, and returns `true` on the tick where cumulative
    /// breach time crosses the configured duration.
    pub fn tick(&mut self, breaching: bool, duration: f32, dt: f32) -> bool {
        match self {
            BreachTimer::Inactive => {
                if !breaching {
                    return false;
                }
                let remaining = duration - dt;
                if remaining <= 0.0 {
                    return true;
                }
                *self = BreachTimer::Counting { remaining };
                false
            }
            BreachTimer::Counting { remaining } => {
                if !breaching {
                    *self = BreachTimer::Inactive;
                    return false;
                }
                *remaining -= dt;
                *remaining <= 0.0
            }
        }
    }

    pub fn is_counting(&self) -> bool {
        matches!(self, BreachTimer::Counting { .. })
    }
}

/// The monitor's full state: one timer per metric plus the terminal flag.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoseConditionState {
    pub happiness: BreachTimer,
    pub tax_income: BreachTimer,
    pub carbon: BreachTimer,
    /// `Some` once the game has been lost; records the metric that fired.
    pub game_over: Option<LoseMetric>,
}

impl LoseConditionState {
    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }
}

/// Emitted exactly once when a breach timer elapses.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameOverEvent {
    pub metric: LoseMetric,
}

/// Samples the ledger aggregates and advances the three breach timers.
///
/// With zero houses every metric is treated as "no breach": the per-house
/// tax division is undefined and there is no population to be unhappy or to
/// emit carbon, so all timers cancel rather than counting against an empty
/// city.
pub fn check_lose_conditions(
    time: Res<Time>,
    params: Res<GameParams>,
    ledger: Res<CityLedger>,
    mut state: ResMut<LoseConditionState>,
    mut clock: ResMut<GameClock>,
    mut game_over: EventWriter<GameOverEvent>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    if state.is_game_over() {
        return;
    }

    let dt = time.delta_secs();
    let lose = &params.lose_conditions;

    let (happiness_low, tax_low, carbon_high) = if ledger.house_count == 0 {
        (false, false, false)
    } else {
        let tax_per_house = ledger.tax_income_per_second / ledger.house_count as f32;
        (
            ledger.average_happiness < lose.min_happiness,
            tax_per_house < lose.min_tax_income_per_house,
            ledger.average_carbon_emission > lose.max_carbon_emission,
        )
    };

    let fired = [
        (
            LoseMetric::LowHappiness,
            state
                .happiness
                .tick(happiness_low, lose.low_happiness_duration, dt),
        ),
        (
            LoseMetric::LowTaxIncome,
            state
                .tax_income
                .tick(tax_low, lose.low_tax_income_duration, dt),
        ),
        (
            LoseMetric::HighCarbonEmission,
            state
                .carbon
                .tick(carbon_high, lose.high_carbon_emission_duration, dt),
        ),
    ]
    .into_iter()
    .find_map(|(metric, elapsed)| elapsed.then_some(metric));

    if let Some(metric) = fired {
        state.game_over = Some(metric);
        clock.paused = true;
        game_over.send(GameOverEvent { metric });
        notifications.send(NotificationEvent {
            text: format!("Game over: {}.", metric.description()),
            priority: NotificationPriority::Emergency,
        });
        info!("Game over: {:?}", metric);
    }
}

pub struct LoseConditionsPlugin;

impl Plugin for LoseConditionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LoseConditionState>()
            .add_event::<GameOverEvent>()
            .add_systems(
                FixedUpdate,
                check_lose_conditions.in_set(SimulationSet::PostSim),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_arms_and_counts_the_first_breach_tick() {
        let mut timer = BreachTimer::Inactive;
        assert!(!timer.tick(true, 10.0, 1.0));
        assert_eq!(timer, BreachTimer::Counting { remaining: 9.0 });
    }

    #[test]
    fn timer_fires_when_cumulative_breach_reaches_duration() {
        let mut timer = BreachTimer::Inactive;
        // Ten 1-second breaching ticks cover exactly 10 seconds of breach.
        for _ in 0..9 {
            assert!(!timer.tick(true, 10.0, 1.0));
        }
        assert!(timer.tick(true, 10.0, 1.0));
    }

    #[test]
    fn degenerate_duration_fires_immediately() {
        let mut timer = BreachTimer::Inactive;
        assert!(timer.tick(true, 0.5, 1.0));
    }

    #[test]
    fn recovery_cancels_the_countdown() {
        let mut timer = BreachTimer::Inactive;
        for _ in 0..6 {
            timer.tick(true, 10.0, 1.0);
        }
        assert!(timer.is_counting());
        assert!(!timer.tick(false, 10.0, 1.0));
        assert_eq!(timer, BreachTimer::Inactive);
        // Re-breaching restarts from the full duration.
        timer.tick(true, 10.0, 1.0);
        assert_eq!(timer, BreachTimer::Counting { remaining: 9.0 });
    }

    #[test]
    fn inactive_timer_ignores_acceptable_metric() {
        let mut timer = BreachTimer::Inactive;
        assert!(!timer.tick(false, 10.0, 1.0));
        assert_eq!(timer, BreachTimer::Inactive);
    }

    #[test]
    fn default_state_is_not_game_over() {
        let state = LoseConditionState::default();
        assert!(!state.is_game_over());
        assert_eq!(state.happiness, BreachTimer::Inactive);
        assert_eq!(state.tax_income, BreachTimer::Inactive);
        assert_eq!(state.carbon, BreachTimer::Inactive);
    }
}
