//! Scoring of discovered words
//!
//! Bonus squares fire only under tiles placed this turn; a square under a
//! letter that was already on the board was consumed in an earlier turn
//! and contributes nothing further.

use super::board::{Board, BonusKind};
use super::words::WordInfo;

/// Score a single discovered word: letter values (letter bonuses applied
/// per newly placed cell) summed, then multiplied by the product of word
/// bonuses on newly placed cells.
pub fn score_word(board: &Board, word: &WordInfo) -> u32 {
    let mut letter_total = 0u32;
    let mut word_multiplier = 1u32;

    for pos in &word.cells {
        let Some(tile) = board.tile_at(*pos) else {
            continue;
        };
        let mut letter_points = tile.points();

        if word.is_new_cell(*pos) {
            match board.bonus(pos.row, pos.col) {
                BonusKind::DoubleLetter => letter_points *= 2,
                BonusKind::TripleLetter => letter_points *= 3,
                BonusKind::DoubleWord | BonusKind::Center => word_multiplier *= 2,
                BonusKind::TripleWord => word_multiplier *= 3,
                BonusKind::Normal => {}
            }
        }

        letter_total += letter_points;
    }

    letter_total * word_multiplier
}

/// Total score of a move: each discovered word scored independently and
/// summed. One word's multiplier never leaks into another's total.
pub fn score_move(board: &Board, words: &[WordInfo]) -> u32 {
    words.iter().map(|w| score_word(board, w)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{Orientation, Position};
    use crate::game::tile::Tile;
    use crate::game::words::find_words;

    fn place_word(board: &mut Board, row: usize, col: usize, word: &str) -> Vec<Position> {
        let mut placed = Vec::new();
        for (i, c) in word.chars().enumerate() {
            assert!(board.place_tile(row, col + i, Tile::new(c)));
            placed.push(Position::new(row, col + i));
        }
        placed
    }

    #[test]
    fn test_center_doubles_first_word() {
        let mut board = Board::new();
        // CAT with the A on the center cell.
        let placed = place_word(&mut board, 7, 6, "CAT");
        let words = find_words(&board, &placed);
        assert_eq!(words.len(), 1);
        // (3 + 1 + 1) * 2
        assert_eq!(score_word(&board, &words[0]), 10);
    }

    #[test]
    fn test_letter_bonus_applies_to_single_letter() {
        let mut board = Board::new();
        // Cells (0,1) C, (0,2) A, (0,3) B; only (0,3) is a bonus square
        // (double letter). B doubles, the rest do not: 3 + 1 + 6 = 10.
        let placed = place_word(&mut board, 0, 1, "CAB");
        let words = find_words(&board, &placed);
        assert_eq!(score_word(&board, &words[0]), 10);
    }

    #[test]
    fn test_word_bonuses_compound() {
        let mut board = Board::new();
        // Spans both TW squares of row 0 plus the DL at col 3.
        let placed = place_word(&mut board, 0, 0, "AAAAAAAA");
        let words = find_words(&board, &placed);
        assert_eq!(words.len(), 1);
        // Letters: 8 ones, the DL one doubled -> 9. Word: 3 * 3 = 9.
        assert_eq!(score_word(&board, &words[0]), 81);
    }

    #[test]
    fn test_bonus_fires_only_on_new_cells() {
        let mut board = Board::new();
        let placed = place_word(&mut board, 7, 6, "CAT");
        let words = find_words(&board, &placed);
        let word = &words[0];

        // Scoring the same WordInfo again is idempotent.
        assert_eq!(score_word(&board, word), score_word(&board, word));

        // Re-scored in a later turn (nothing newly placed), the center
        // bonus is spent: plain letter sum.
        let spent = WordInfo {
            new_cells: Vec::new(),
            ..word.clone()
        };
        assert_eq!(score_word(&board, &spent), 5);
    }

    #[test]
    fn test_extension_does_not_rebonus_old_tiles() {
        let mut board = Board::new();
        place_word(&mut board, 7, 6, "CAT");

        // S on (7,9): no bonus there, CATS scores plain letters even
        // though the A still sits on the center square.
        board.place_tile(7, 9, Tile::new('S'));
        let words = find_words(&board, &[Position::new(7, 9)]);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, "CATS");
        assert_eq!(score_word(&board, &words[0]), 6);
    }

    #[test]
    fn test_move_score_is_sum_of_word_scores() {
        let mut board = Board::new();
        place_word(&mut board, 7, 5, "CAT");

        // OX under CA: OX + CO + AX, scored independently.
        let placed = place_word(&mut board, 8, 5, "OX");
        let words = find_words(&board, &placed);
        let total: u32 = words.iter().map(|w| score_word(&board, w)).sum();
        assert_eq!(score_move(&board, &words), total);
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_blank_scores_zero_even_on_letter_bonus() {
        let mut board = Board::new();
        let mut blank = Tile::blank();
        blank.assign_letter('A');
        // (0,3) is a double-letter square; 2 * 0 is still 0.
        board.place_tile(0, 3, blank);
        board.place_tile(0, 4, Tile::new('T'));
        let placed = vec![Position::new(0, 3), Position::new(0, 4)];
        let words = find_words(&board, &placed);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, "AT");
        assert_eq!(words[0].orientation, Orientation::Horizontal);
        assert_eq!(score_word(&board, &words[0]), 1);
    }
}
