//! Deterministic simulation ordering via `SystemSet` phases.
//!
//! These sets establish a **contract** for system execution order within the
//! `FixedUpdate` schedule. Plugins place their systems into the appropriate
//! set so that inter-plugin ordering is explicit rather than relying on
//! implicit timing assumptions.
//!
//! ```text
//! PreSim  →  Simulation  →  PostSim
//! ```
//!
//! * **PreSim** – game clock advance, house growth, placement/demolition
//!   event handling. These set up per-tick state that the core simulation
//!   reads.
//! * **Simulation** – proximity-driven house mutation and the ledger
//!   aggregation pass (tax income, happiness, carbon, upkeep, money).
//! * **PostSim** – readers of the published aggregates: the lose-condition
//!   monitor, city stats, and the selection info panel. These never mutate
//!   houses, so downstream consumers see a consistent tick.

use bevy::prelude::*;

/// Ordered phases for systems running in the `FixedUpdate` schedule.
///
/// Configured as a chain: `PreSim` → `Simulation` → `PostSim`. Individual
/// plugins use `.in_set(SimulationSet::X)` when registering their systems,
/// which gives them automatic ordering relative to other phases while
/// retaining the ability to add fine-grained `.after()` constraints within
/// the same phase.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Clock advance, house growth, placement and demolition.
    PreSim,
    /// Proximity mutation and ledger aggregation.
    Simulation,
    /// Lose-condition monitoring, stats, selection info.
    PostSim,
}
