#![allow(dead_code)]
//! The shuffled supply of undrawn tiles

use super::tile::{Tile, TILE_DISTRIBUTION};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

/// The multiset of undrawn tiles. Filled from the standard distribution
/// and shuffled once at game start; draws come off the front, exchanged
/// tiles go back to the rear.
#[derive(Debug, Clone, Default)]
pub struct TileBag {
    tiles: VecDeque<Tile>,
}

impl TileBag {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A full, shuffled bag from the standard distribution.
    pub fn standard() -> Self {
        Self::standard_with_rng(&mut rand::rng())
    }

    /// A full bag shuffled with a specific RNG (for testing/seeding).
    pub fn standard_with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut tiles = Vec::with_capacity(100);
        for (letter, count) in TILE_DISTRIBUTION {
            for _ in 0..count {
                if letter == ' ' {
                    tiles.push(Tile::blank());
                } else {
                    tiles.push(Tile::new(letter));
                }
            }
        }
        tiles.shuffle(rng);
        Self {
            tiles: tiles.into(),
        }
    }

    /// Draw the next tile, `None` once the bag is exhausted.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop_front()
    }

    /// Return exchanged tiles to the bag. The bag was shuffled at game
    /// start, so rear insertion keeps draws effectively random.
    pub fn put_back(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles.extend(tiles);
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_standard_bag_has_hundred_tiles() {
        let bag = TileBag::standard_with_rng(&mut StdRng::seed_from_u64(1));
        assert_eq!(bag.len(), 100);
    }

    #[test]
    fn test_standard_bag_letter_counts() {
        let mut bag = TileBag::standard_with_rng(&mut StdRng::seed_from_u64(1));
        let mut blanks = 0;
        let mut es = 0;
        let mut qs = 0;
        while let Some(tile) = bag.draw() {
            if tile.is_blank() {
                blanks += 1;
            } else if tile.letter() == 'E' {
                es += 1;
            } else if tile.letter() == 'Q' {
                qs += 1;
            }
        }
        assert_eq!(blanks, 2);
        assert_eq!(es, 12);
        assert_eq!(qs, 1);
    }

    #[test]
    fn test_draw_until_empty() {
        let mut bag = TileBag::standard_with_rng(&mut StdRng::seed_from_u64(1));
        for _ in 0..100 {
            assert!(bag.draw().is_some());
        }
        assert!(bag.draw().is_none());
        assert!(bag.is_empty());
    }

    #[test]
    fn test_put_back_grows_bag() {
        let mut bag = TileBag::empty();
        bag.put_back([Tile::new('A'), Tile::new('B')]);
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.draw().unwrap().letter(), 'A');
    }

    #[test]
    fn test_seeded_shuffle_is_deterministic() {
        let mut a = TileBag::standard_with_rng(&mut StdRng::seed_from_u64(9));
        let mut b = TileBag::standard_with_rng(&mut StdRng::seed_from_u64(9));
        for _ in 0..100 {
            assert_eq!(a.draw(), b.draw());
        }
    }
}
