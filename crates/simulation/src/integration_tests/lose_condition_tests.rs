//! Lose-condition monitor scenarios on the headless harness.

use bevy::prelude::*;

use crate::buildings::{House, Tile};
use crate::lose_conditions::{BreachTimer, GameOverEvent, LoseMetric};
use crate::test_harness::TestCity;

/// A city whose only house keeps average happiness at 0.5 against a 0.8
/// minimum with a 180-second grace period.
fn low_happiness_city() -> TestCity {
    TestCity::new()
        .with_params(|p| {
            // Growth would shift the average mid-scenario.
            p.buildings.house_spawn_cooldown = 1e9;
            p.lose_conditions.min_happiness = 0.8;
            p.lose_conditions.low_happiness_duration = 180.0;
        })
        .with_custom_house(Tile::new(0, 0), 1.0, 0.5, 2.0)
}

#[test]
fn sustained_low_happiness_fires_at_duration_not_before() {
    let mut city = low_happiness_city();

    city.tick_n(179, 1.0);
    assert!(city.game_over().is_none());
    assert!(city.lose_state().happiness.is_counting());

    city.tick(1.0);
    assert_eq!(city.game_over(), Some(LoseMetric::LowHappiness));
}

#[test]
fn recovery_before_duration_cancels_the_timer() {
    let mut city = low_happiness_city();

    city.tick_n(170, 1.0);
    assert!(city.game_over().is_none());

    // Happiness recovers above the threshold at t=170.
    {
        let world = city.world();
        let mut q = world.query::<&mut House>();
        for mut house in q.iter_mut(world) {
            house.happiness = 0.9;
        }
    }

    city.tick_n(30, 1.0);
    assert!(city.game_over().is_none());
    assert_eq!(city.lose_state().happiness, BreachTimer::Inactive);
}

#[test]
fn game_over_fires_exactly_once() {
    let mut city = low_happiness_city();

    city.tick_n(180, 1.0);
    assert_eq!(city.game_over(), Some(LoseMetric::LowHappiness));

    // Keep ticking well past the threshold: no second firing.
    city.tick_n(120, 1.0);
    assert_eq!(city.game_over(), Some(LoseMetric::LowHappiness));

    let events = city.world().resource::<Events<GameOverEvent>>();
    assert_eq!(events.len(), 1);
}

#[test]
fn game_over_freezes_the_simulation() {
    let mut city = low_happiness_city();

    city.tick_n(180, 1.0);
    assert!(city.game_over().is_some());
    assert!(city.clock().paused);

    let money_at_game_over = city.money();
    let hour_at_game_over = city.clock().hour;
    city.tick_n(50, 1.0);
    assert_eq!(city.money(), money_at_game_over);
    assert_eq!(city.clock().hour, hour_at_game_over);
}

#[test]
fn game_over_is_reported_to_the_ui() {
    let mut city = low_happiness_city();
    city.tick_n(180, 1.0);

    // Notifications are collected in Update, which a full frame runs.
    city.app().update();
    let text = city.latest_notification().expect("a game-over notification");
    assert!(text.contains("Game over"), "got: {text}");
}

#[test]
fn low_tax_income_per_house_fires() {
    let mut city = TestCity::new()
        .with_params(|p| {
            p.buildings.house_spawn_cooldown = 1e9;
            p.lose_conditions.min_tax_income_per_house = 0.2;
            p.lose_conditions.low_tax_income_duration = 5.0;
        })
        .with_custom_house(Tile::new(0, 0), 0.1, 1.0, 2.0);

    city.tick_n(4, 1.0);
    assert!(city.game_over().is_none());
    city.tick(1.0);
    assert_eq!(city.game_over(), Some(LoseMetric::LowTaxIncome));
}

#[test]
fn high_carbon_emission_fires() {
    let mut city = TestCity::new()
        .with_params(|p| {
            p.buildings.house_spawn_cooldown = 1e9;
            p.lose_conditions.max_carbon_emission = 5.0;
            p.lose_conditions.high_carbon_emission_duration = 10.0;
        })
        .with_custom_house(Tile::new(0, 0), 1.0, 0.8, 12.0);

    city.tick_n(9, 1.0);
    assert!(city.game_over().is_none());
    city.tick(1.0);
    assert_eq!(city.game_over(), Some(LoseMetric::HighCarbonEmission));
}

#[test]
fn zero_houses_never_breach() {
    // With no houses, tax-per-house is undefined; the monitor treats every
    // metric as acceptable instead of dividing by zero.
    let mut city = TestCity::new().with_params(|p| {
        p.lose_conditions.min_tax_income_per_house = 100.0;
        p.lose_conditions.min_happiness = 1.0;
    });

    city.tick_n(300, 1.0);

    let state = city.lose_state();
    assert!(state.game_over.is_none());
    assert_eq!(state.happiness, BreachTimer::Inactive);
    assert_eq!(state.tax_income, BreachTimer::Inactive);
    assert_eq!(state.carbon, BreachTimer::Inactive);
}

#[test]
fn timers_are_independent() {
    // Unhappy AND polluting: the shorter grace period decides the ending.
    let mut city = TestCity::new()
        .with_params(|p| {
            p.buildings.house_spawn_cooldown = 1e9;
            p.lose_conditions.min_happiness = 0.8;
            p.lose_conditions.low_happiness_duration = 50.0;
            p.lose_conditions.max_carbon_emission = 5.0;
            p.lose_conditions.high_carbon_emission_duration = 20.0;
        })
        .with_custom_house(Tile::new(0, 0), 1.0, 0.5, 12.0);

    city.tick_n(20, 1.0);
    assert_eq!(city.game_over(), Some(LoseMetric::HighCarbonEmission));
}
