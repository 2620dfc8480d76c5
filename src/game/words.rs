#![allow(dead_code)]
//! Word discovery
//!
//! Given the cells a move placed tiles on, reconstructs every word the
//! move actually formed: the primary word along the run of placed tiles
//! plus any cross words created through individual placed cells. Placed
//! runs can close gaps with letters already on the board, so each word
//! is re-derived by scanning outward from a placed cell until the run of
//! occupied cells ends.

use super::board::{Board, Orientation, Position};
use std::collections::HashSet;

/// One word formed by the current move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordInfo {
    /// The letters, in board order.
    pub text: String,
    /// First cell of the word.
    pub anchor: Position,
    pub orientation: Orientation,
    /// Every cell the word occupies, in order.
    pub cells: Vec<Position>,
    /// The subset of `cells` placed this turn; scoring applies bonuses
    /// only here.
    pub new_cells: Vec<Position>,
}

impl WordInfo {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_new_cell(&self, pos: Position) -> bool {
        self.new_cells.contains(&pos)
    }
}

/// The dominant orientation of a set of placed cells: horizontal when all
/// share a row, vertical otherwise. Meaningless for a single cell, which
/// is handled as both orientations by [`find_words`].
fn dominant_orientation(placed: &[Position]) -> Orientation {
    let first_row = placed[0].row;
    if placed.iter().all(|p| p.row == first_row) {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Walk the contiguous run of occupied cells through `start` along
/// `orientation` and assemble it into a word.
fn collect_run(
    board: &Board,
    start: Position,
    orientation: Orientation,
    placed: &HashSet<Position>,
) -> WordInfo {
    let mut anchor = start;
    while let Some(prev) = anchor.step(orientation, false) {
        if !board.is_occupied(prev) {
            break;
        }
        anchor = prev;
    }

    let mut text = String::new();
    let mut cells = Vec::new();
    let mut new_cells = Vec::new();
    let mut pos = anchor;
    loop {
        match board.tile_at(pos) {
            Some(tile) => {
                text.push(tile.letter());
                cells.push(pos);
                if placed.contains(&pos) {
                    new_cells.push(pos);
                }
            }
            None => break,
        }
        match pos.step(orientation, true) {
            Some(next) => pos = next,
            None => break,
        }
    }

    WordInfo {
        text,
        anchor,
        orientation,
        cells,
        new_cells,
    }
}

/// The contiguous occupied run through `start` along `orientation`, with
/// no cells marked as new. Used for shape checks and assistive display.
pub fn run_through(board: &Board, start: Position, orientation: Orientation) -> WordInfo {
    collect_run(board, start, orientation, &HashSet::new())
}

/// Discover every word formed by placing tiles on `placed`. The tiles
/// must already sit on the board. Runs of length 1 are not words; exact
/// (text, anchor, orientation) duplicates are merged, same text at a
/// different location is not.
pub fn find_words(board: &Board, placed: &[Position]) -> Vec<WordInfo> {
    if placed.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<Position> = placed.to_vec();
    sorted.sort();
    let placed_set: HashSet<Position> = sorted.iter().copied().collect();

    let mut candidates = Vec::new();
    if sorted.len() == 1 {
        // A lone tile may complete a word in either direction.
        let cell = sorted[0];
        candidates.push(collect_run(board, cell, Orientation::Horizontal, &placed_set));
        candidates.push(collect_run(board, cell, Orientation::Vertical, &placed_set));
    } else {
        let orientation = dominant_orientation(&sorted);
        candidates.push(collect_run(board, sorted[0], orientation, &placed_set));
        for cell in &sorted {
            candidates.push(collect_run(board, *cell, orientation.flip(), &placed_set));
        }
    }

    let mut seen: HashSet<(String, Position, Orientation)> = HashSet::new();
    let mut words = Vec::new();
    for info in candidates {
        if info.len() < 2 {
            continue;
        }
        let key = (info.text.clone(), info.anchor, info.orientation);
        if seen.insert(key) {
            words.push(info);
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tile::Tile;

    fn place_word(board: &mut Board, row: usize, col: usize, word: &str, horizontal: bool) {
        for (i, c) in word.chars().enumerate() {
            let (r, k) = if horizontal { (row, col + i) } else { (row + i, col) };
            assert!(board.place_tile(r, k, Tile::new(c)));
        }
    }

    fn positions(cells: &[(usize, usize)]) -> Vec<Position> {
        cells.iter().map(|&(r, c)| Position::new(r, c)).collect()
    }

    #[test]
    fn test_fresh_word_is_discovered_once() {
        let mut board = Board::new();
        place_word(&mut board, 7, 5, "CAT", true);

        let words = find_words(&board, &positions(&[(7, 5), (7, 6), (7, 7)]));
        assert_eq!(words.len(), 1);
        let word = &words[0];
        assert_eq!(word.text, "CAT");
        assert_eq!(word.anchor, Position::new(7, 5));
        assert_eq!(word.orientation, Orientation::Horizontal);
        assert_eq!(word.new_cells.len(), 3);
    }

    #[test]
    fn test_extension_includes_existing_letters() {
        let mut board = Board::new();
        place_word(&mut board, 7, 5, "CAT", true);

        // Append an S: the word is CATS, only the S is new.
        board.place_tile(7, 8, Tile::new('S'));
        let words = find_words(&board, &positions(&[(7, 8)]));
        assert_eq!(words.len(), 1);
        let word = &words[0];
        assert_eq!(word.text, "CATS");
        assert_eq!(word.anchor, Position::new(7, 5));
        assert_eq!(word.new_cells, positions(&[(7, 8)]));
    }

    #[test]
    fn test_cross_words_found_for_every_placed_cell() {
        let mut board = Board::new();
        place_word(&mut board, 7, 5, "CAT", true);

        // OX directly under CA forms CO and AX vertically.
        place_word(&mut board, 8, 5, "OX", true);
        let mut texts: Vec<String> = find_words(&board, &positions(&[(8, 5), (8, 6)]))
            .into_iter()
            .map(|w| w.text)
            .collect();
        texts.sort();
        assert_eq!(texts, vec!["AX", "CO", "OX"]);
    }

    #[test]
    fn test_single_tile_checks_both_orientations() {
        let mut board = Board::new();
        place_word(&mut board, 7, 5, "CAT", true);
        place_word(&mut board, 8, 8, "O", true);

        // S after CAT also sits on top of O: CATS across, SO down.
        board.place_tile(7, 8, Tile::new('S'));
        let words = find_words(&board, &positions(&[(7, 8)]));
        let mut texts: Vec<String> = words.iter().map(|w| w.text.clone()).collect();
        texts.sort();
        assert_eq!(texts, vec!["CATS", "SO"]);

        let so = words.iter().find(|w| w.text == "SO").unwrap();
        assert_eq!(so.orientation, Orientation::Vertical);
        assert_eq!(so.anchor, Position::new(7, 8));
        assert_eq!(so.new_cells, positions(&[(7, 8)]));
    }

    #[test]
    fn test_gap_closing_placement() {
        let mut board = Board::new();
        board.place_tile(7, 6, Tile::new('A'));

        // C and T around a pre-existing A: the run is one word, CAT.
        board.place_tile(7, 5, Tile::new('C'));
        board.place_tile(7, 7, Tile::new('T'));
        let words = find_words(&board, &positions(&[(7, 5), (7, 7)]));
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, "CAT");
        assert_eq!(words[0].new_cells, positions(&[(7, 5), (7, 7)]));
    }

    #[test]
    fn test_lone_tile_forms_no_word() {
        let mut board = Board::new();
        board.place_tile(7, 7, Tile::new('A'));
        assert!(find_words(&board, &positions(&[(7, 7)])).is_empty());
    }

    #[test]
    fn test_middle_tile_not_double_counted() {
        let mut board = Board::new();
        board.place_tile(7, 5, Tile::new('C'));
        board.place_tile(7, 7, Tile::new('T'));

        // A dropped into the gap: one horizontal CAT, no vertical run.
        board.place_tile(7, 6, Tile::new('A'));
        let words = find_words(&board, &positions(&[(7, 6)]));
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, "CAT");
    }

    #[test]
    fn test_same_text_different_anchor_stays_distinct() {
        let mut board = Board::new();
        board.place_tile(6, 5, Tile::new('T'));
        board.place_tile(6, 6, Tile::new('T'));
        place_word(&mut board, 7, 5, "OO", true);
        let words = find_words(&board, &positions(&[(7, 5), (7, 6)]));
        let tos: Vec<&WordInfo> = words.iter().filter(|w| w.text == "TO").collect();
        assert_eq!(tos.len(), 2, "TO formed in two different columns");
        assert_ne!(tos[0].anchor, tos[1].anchor);
    }
}
