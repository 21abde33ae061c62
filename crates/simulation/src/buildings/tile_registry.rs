use bevy::prelude::*;
use rand::seq::IteratorRandom;
use std::collections::{BTreeSet, HashMap};

use crate::sim_rng::SimRng;

use super::types::Tile;

/// Tracks which tiles are occupied by buildings and which empty tiles form
/// the growth frontier (tiles orthogonally adjacent to an existing building
/// where a new house may appear).
///
/// The frontier is a `BTreeSet` so iteration order — and therefore seeded
/// random tile selection — is deterministic.
#[derive(Resource, Debug, Clone, Default)]
pub struct TileRegistry {
    occupied: HashMap<Tile, Entity>,
    frontier: BTreeSet<Tile>,
}

impl TileRegistry {
    pub fn is_occupied(&self, tile: Tile) -> bool {
        self.occupied.contains_key(&tile)
    }

    pub fn entity_at(&self, tile: Tile) -> Option<Entity> {
        self.occupied.get(&tile).copied()
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    pub fn frontier_count(&self) -> usize {
        self.frontier.len()
    }

    /// Mark `tile` as occupied by `entity` and extend the frontier with its
    /// unoccupied neighbors.
    pub fn claim(&mut self, tile: Tile, entity: Entity) {
        self.frontier.remove(&tile);
        self.occupied.insert(tile, entity);
        for neighbor in tile.neighbors() {
            if !self.occupied.contains_key(&neighbor) {
                self.frontier.insert(neighbor);
            }
        }
    }

    /// Free `tile` after its building is demolished. The tile returns to the
    /// frontier when it still borders an occupied tile.
    pub fn release(&mut self, tile: Tile) {
        self.occupied.remove(&tile);
        if tile
            .neighbors()
            .iter()
            .any(|n| self.occupied.contains_key(n))
        {
            self.frontier.insert(tile);
        }
    }

    /// Pick a uniformly random frontier tile with the simulation RNG.
    pub fn random_frontier_tile(&self, rng: &mut SimRng) -> Option<Tile> {
        self.frontier.iter().choose(&mut rng.0).copied()
    }

    /// Drop all occupancy and frontier state (world reset).
    pub fn clear(&mut self) {
        self.occupied.clear();
        self.frontier.clear();
    }
}
