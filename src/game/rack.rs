#![allow(dead_code)]
//! A player's hand of tiles

use super::tile::Tile;
use rand::seq::SliceRandom;
use rand::Rng;

/// Maximum number of tiles a rack can hold.
pub const RACK_CAPACITY: usize = 7;

/// An ordered hand of up to [`RACK_CAPACITY`] tiles.
#[derive(Debug, Clone, Default)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl Rack {
    pub fn new() -> Self {
        Self {
            tiles: Vec::with_capacity(RACK_CAPACITY),
        }
    }

    /// Add a tile. False when the rack is already full.
    pub fn add(&mut self, tile: Tile) -> bool {
        if self.tiles.len() >= RACK_CAPACITY {
            return false;
        }
        self.tiles.push(tile);
        true
    }

    /// Remove and return the tile at `index`, `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<Tile> {
        if index >= self.tiles.len() {
            return None;
        }
        Some(self.tiles.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn has_room(&self) -> bool {
        self.tiles.len() < RACK_CAPACITY
    }

    /// Sum of the point values still held.
    pub fn point_total(&self) -> u32 {
        self.tiles.iter().map(|t| t.points()).sum()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Reorder the rack in place. Pure reordering, no content change.
    pub fn shuffle(&mut self) {
        self.shuffle_with_rng(&mut rand::rng());
    }

    /// Reorder using a specific RNG (for testing/seeding).
    pub fn shuffle_with_rng<R: Rng>(&mut self, rng: &mut R) {
        self.tiles.shuffle(rng);
    }

    /// The rack's letters in order, for display.
    pub fn as_string(&self) -> String {
        self.tiles.iter().map(|t| t.letter()).collect()
    }
}
