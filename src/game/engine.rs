//! The turn and game state machine
//!
//! Owns the board, both players, the bag, and the dictionary, and is
//! driven entirely by discrete synchronous calls from the input layer.
//! Every public operation returns an explicit outcome value; nothing
//! here panics across the public boundary.

use super::bag::TileBag;
use super::board::{Board, Orientation, Position, CENTER};
use super::dictionary::Dictionary;
use super::player::{Player, PlayerKind};
use super::rack::RACK_CAPACITY;
use super::score::score_move;
use super::words::{find_words, run_through};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

/// Consecutive skipped turns (by either player) that end the game.
pub const PASS_THRESHOLD: u32 = 6;
/// Consecutive rejected moves by one player that forfeit the game.
pub const FAILURE_THRESHOLD: u32 = 3;
/// Awarded to the opponent when a player surrenders.
pub const SURRENDER_BONUS: u32 = 50;
/// Awarded to the opponent when a player forfeits on failures.
pub const FORFEIT_BONUS: u32 = 50;
/// Nominal score nudge recording a tiebreak win.
pub const TIEBREAK_POINT: u32 = 1;

/// Where the state machine currently sits. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    PlacingTiles,
    ValidatingWord,
    GameOver,
    Paused,
}

/// Who plays whom. Selects the players' kind tags at setup; AI move
/// selection itself lives outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsAi,
    AiVsAi,
}

impl GameMode {
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsAi => "Human vs Computer",
            GameMode::AiVsAi => "Computer vs Computer",
        }
    }
}

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Bag empty and a player's rack empty; scores finalized with rack
    /// penalties and the tiebreak ladder.
    BagExhausted,
    /// Too many consecutive passes; finalized like `BagExhausted`.
    PassLimit,
    /// A player hit the failure threshold; the opponent takes a fixed
    /// bonus instead of finalization.
    FailureLimit,
    /// A player gave up from the pause screen.
    Surrender,
}

/// Terminal result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub reason: EndReason,
    /// Index of the winning player, `None` on a true draw.
    pub winner: Option<usize>,
}

/// Result of a tentative tile placement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    Placed,
    WrongState,
    OutOfRange,
    CellOccupied,
    BadRackIndex,
}

impl PlacementOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, PlacementOutcome::Placed)
    }

    pub fn message(&self) -> &'static str {
        match self {
            PlacementOutcome::Placed => "Tile placed",
            PlacementOutcome::WrongState => "Not accepting placements now",
            PlacementOutcome::OutOfRange => "Off the board",
            PlacementOutcome::CellOccupied => "Cell already occupied",
            PlacementOutcome::BadRackIndex => "No such rack tile",
        }
    }
}

/// A confirm rejected before validation: the tentative tiles stay on the
/// board for the player to fix or cancel, and no counter moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    WrongState,
    NothingPlaced,
    /// Placed cells are not one contiguous row or column run.
    NotASingleRun,
    FirstMoveMissesCenter,
    Disconnected,
}

impl MoveRejection {
    pub fn message(&self) -> &'static str {
        match self {
            MoveRejection::WrongState => "No move to confirm",
            MoveRejection::NothingPlaced => "Place some tiles first",
            MoveRejection::NotASingleRun => "Tiles must form one straight run",
            MoveRejection::FirstMoveMissesCenter => "First word must cover the center",
            MoveRejection::Disconnected => "Word must touch an existing tile",
        }
    }
}

/// Result of confirming a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// All words valid; score committed and the turn passed.
    Committed {
        score: u32,
        words: Vec<String>,
        game_over: bool,
    },
    /// Rejected up front; board and rack untouched beyond the still
    /// tentative tiles.
    Rejected(MoveRejection),
    /// Word validation failed; tiles rolled back to the rack and the
    /// failure counter bumped. Empty `invalid_words` means the placement
    /// formed no word at all.
    Invalidated {
        invalid_words: Vec<String>,
        game_over: bool,
    },
}

impl MoveOutcome {
    pub fn message(&self) -> String {
        match self {
            MoveOutcome::Committed { score, words, .. } => {
                format!("{} for {} points", words.join(", "), score)
            }
            MoveOutcome::Rejected(rejection) => rejection.message().to_string(),
            MoveOutcome::Invalidated { invalid_words, .. } => {
                if invalid_words.is_empty() {
                    "No word formed".to_string()
                } else {
                    format!("Not in dictionary: {}", invalid_words.join(", "))
                }
            }
        }
    }
}

/// Result of a tile exchange request. The operation is all-or-nothing:
/// any rejection leaves rack and bag untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeOutcome {
    Exchanged,
    WrongState,
    NothingRequested,
    BadIndices,
    NotEnoughInBag,
}

impl ExchangeOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            ExchangeOutcome::Exchanged => "Tiles exchanged",
            ExchangeOutcome::WrongState => "Cannot exchange now",
            ExchangeOutcome::NothingRequested => "Select tiles to exchange",
            ExchangeOutcome::BadIndices => "No such rack tiles",
            ExchangeOutcome::NotEnoughInBag => "Not enough tiles left in the bag",
        }
    }
}

/// The whole game: rules, scoring, and turn order in one place, driven
/// from outside one synchronous call at a time.
pub struct Game {
    board: Board,
    players: [Player; 2],
    bag: TileBag,
    dictionary: Dictionary,
    state: GameState,
    mode: GameMode,
    current: usize,
    consecutive_passes: u32,
    consecutive_failures: u32,
    /// Cells holding this turn's tentative tiles, in placement order.
    tentative: Vec<Position>,
    outcome: Option<GameOutcome>,
    rng: StdRng,
}

impl Game {
    /// A fresh engine at the menu, with a process-seeded RNG.
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_rng(dictionary, StdRng::from_os_rng())
    }

    /// A fresh engine with an injected RNG, for deterministic tests.
    pub fn with_rng(dictionary: Dictionary, rng: StdRng) -> Self {
        Self {
            board: Board::new(),
            players: [
                Player::new("Player 1", PlayerKind::Human),
                Player::new("Player 2", PlayerKind::Human),
            ],
            bag: TileBag::empty(),
            dictionary,
            state: GameState::Menu,
            mode: GameMode::HumanVsHuman,
            current: 0,
            consecutive_passes: 0,
            consecutive_failures: 0,
            tentative: Vec::new(),
            outcome: None,
            rng,
        }
    }

    // --- setup -----------------------------------------------------------

    /// Set up and start a game: clears the board, deals a fresh shuffled
    /// bag, fills both racks, player 1 to move.
    pub fn start_new_game(&mut self, mode: GameMode, name1: &str, name2: &str) {
        let (kind1, kind2) = match mode {
            GameMode::HumanVsHuman => (PlayerKind::Human, PlayerKind::Human),
            GameMode::HumanVsAi => (PlayerKind::Human, PlayerKind::AiMedium),
            GameMode::AiVsAi => (PlayerKind::AiEasy, PlayerKind::AiHard),
        };
        self.mode = mode;
        self.players = [Player::new(name1, kind1), Player::new(name2, kind2)];
        self.board.clear();
        self.bag = TileBag::standard_with_rng(&mut self.rng);
        self.tentative.clear();
        self.outcome = None;
        self.current = 0;
        self.consecutive_passes = 0;
        self.consecutive_failures = 0;
        for idx in 0..2 {
            self.draw_tiles_for_player(idx, RACK_CAPACITY);
            self.players[idx].rack_mut().shuffle_with_rng(&mut self.rng);
        }
        self.state = GameState::Playing;
    }

    /// Draw up to `count` tiles into a player's rack, stopping early on an
    /// empty bag or a full rack. Returns whether the full count was drawn;
    /// partial draws are not an error.
    fn draw_tiles_for_player(&mut self, idx: usize, count: usize) -> bool {
        let mut drawn = 0;
        while drawn < count && self.players[idx].rack().has_room() {
            match self.bag.draw() {
                Some(tile) => {
                    self.players[idx].rack_mut().add(tile);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn == count
    }

    // --- tentative placement ---------------------------------------------

    /// Move a rack tile onto a board cell as part of the current word.
    /// The first placement of a turn enters `PlacingTiles`. A blank tile
    /// takes the letter given in `blank_as` as it lands.
    pub fn request_placement(
        &mut self,
        row: usize,
        col: usize,
        rack_index: usize,
        blank_as: Option<char>,
    ) -> PlacementOutcome {
        if !matches!(self.state, GameState::Playing | GameState::PlacingTiles) {
            return PlacementOutcome::WrongState;
        }
        let pos = Position::new(row, col);
        if !pos.in_bounds() {
            return PlacementOutcome::OutOfRange;
        }
        if self.board.is_occupied(pos) {
            return PlacementOutcome::CellOccupied;
        }
        if rack_index >= self.players[self.current].rack().len() {
            return PlacementOutcome::BadRackIndex;
        }

        if self.state == GameState::Playing {
            // First tentative placement of this turn.
            self.tentative.clear();
            self.state = GameState::PlacingTiles;
        }

        let mut tile = self.players[self.current]
            .rack_mut()
            .remove(rack_index)
            .expect("index checked above");
        if let Some(letter) = blank_as {
            tile.assign_letter(letter);
        }
        self.board.place_tile(row, col, tile);
        self.tentative.push(pos);
        PlacementOutcome::Placed
    }

    /// Take back the most recently placed tentative tile. Leaving the
    /// last one returns the turn to `Playing`.
    pub fn undo_placement(&mut self) -> bool {
        if self.state != GameState::PlacingTiles {
            return false;
        }
        let Some(pos) = self.tentative.pop() else {
            return false;
        };
        if let Some(tile) = self.board.remove_tile(pos.row, pos.col) {
            self.players[self.current].rack_mut().add(tile);
        }
        if self.tentative.is_empty() {
            self.state = GameState::Playing;
        }
        true
    }

    /// Abandon the tentative placement: every tile goes back to the rack,
    /// no validation runs, no counter moves.
    pub fn cancel_word(&mut self) -> bool {
        if self.state != GameState::PlacingTiles {
            return false;
        }
        self.rollback_tentative();
        self.state = GameState::Playing;
        true
    }

    fn rollback_tentative(&mut self) {
        while let Some(pos) = self.tentative.pop() {
            if let Some(tile) = self.board.remove_tile(pos.row, pos.col) {
                self.players[self.current].rack_mut().add(tile);
            }
        }
    }

    // --- confirmation ----------------------------------------------------

    /// Validate and commit the tentative placement. Shape problems are
    /// reported with the tiles left in place; dictionary failures roll
    /// the tiles back and count toward the forfeit threshold.
    pub fn confirm_word(&mut self) -> MoveOutcome {
        if self.state != GameState::PlacingTiles {
            return MoveOutcome::Rejected(MoveRejection::WrongState);
        }
        if self.tentative.is_empty() {
            return MoveOutcome::Rejected(MoveRejection::NothingPlaced);
        }
        self.state = GameState::ValidatingWord;

        if let Some(rejection) = self.check_shape() {
            self.state = GameState::PlacingTiles;
            return MoveOutcome::Rejected(rejection);
        }

        let words = find_words(&self.board, &self.tentative);
        let invalid_words: Vec<String> = words
            .iter()
            .filter(|w| !self.dictionary.is_valid_word(&w.text))
            .map(|w| w.text.clone())
            .collect();

        if words.is_empty() || !invalid_words.is_empty() {
            return self.fail_move(invalid_words);
        }

        let score = score_move(&self.board, &words);
        let word_texts: Vec<String> = words.into_iter().map(|w| w.text).collect();
        self.players[self.current].add_score(score);
        self.tentative.clear();
        for idx in 0..2 {
            let missing = RACK_CAPACITY - self.players[idx].rack().len();
            self.draw_tiles_for_player(idx, missing);
        }
        self.consecutive_passes = 0;
        self.consecutive_failures = 0;
        self.switch_turn();
        self.state = GameState::Playing;
        self.check_exhaustion();

        MoveOutcome::Committed {
            score,
            words: word_texts,
            game_over: self.state == GameState::GameOver,
        }
    }

    /// Whole-move shape checks deferred until confirm, because tiles
    /// arrive one at a time: one straight gap-free run, covering the
    /// center on the first move, touching existing tiles afterwards.
    fn check_shape(&self) -> Option<MoveRejection> {
        let mut sorted = self.tentative.clone();
        sorted.sort();

        let same_row = sorted.iter().all(|p| p.row == sorted[0].row);
        let same_col = sorted.iter().all(|p| p.col == sorted[0].col);
        if !same_row && !same_col {
            return Some(MoveRejection::NotASingleRun);
        }

        let first_move = self.board.tile_count() == self.tentative.len();
        if first_move {
            if !self.tentative.contains(&CENTER) {
                return Some(MoveRejection::FirstMoveMissesCenter);
            }
        } else {
            let tentative_set: HashSet<Position> = self.tentative.iter().copied().collect();
            let connected = self.tentative.iter().any(|p| {
                p.neighbors()
                    .iter()
                    .any(|n| self.board.is_occupied(*n) && !tentative_set.contains(n))
            });
            if !connected {
                return Some(MoveRejection::Disconnected);
            }
        }

        if sorted.len() > 1 {
            let orientation = if same_row {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let run = run_through(&self.board, sorted[0], orientation);
            if sorted.iter().any(|p| !run.cells.contains(p)) {
                return Some(MoveRejection::NotASingleRun);
            }
        }
        None
    }

    /// Dictionary-failure path: roll back, bump the failure streak, and
    /// forfeit the game to the opponent at the threshold.
    fn fail_move(&mut self, invalid_words: Vec<String>) -> MoveOutcome {
        self.rollback_tentative();
        self.consecutive_failures += 1;
        if self.consecutive_failures >= FAILURE_THRESHOLD {
            let opponent = self.other_index();
            self.players[opponent].add_score(FORFEIT_BONUS);
            self.outcome = Some(GameOutcome {
                reason: EndReason::FailureLimit,
                winner: Some(opponent),
            });
            self.state = GameState::GameOver;
        } else {
            self.state = GameState::PlacingTiles;
        }
        MoveOutcome::Invalidated {
            invalid_words,
            game_over: self.state == GameState::GameOver,
        }
    }

    // --- turn meta -------------------------------------------------------

    /// Pass the turn. At the pass threshold the game ends with full
    /// finalization instead of switching.
    pub fn skip_turn(&mut self) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.consecutive_passes += 1;
        if self.consecutive_passes >= PASS_THRESHOLD {
            self.finalize(EndReason::PassLimit);
            return true;
        }
        for idx in 0..2 {
            self.players[idx].rack_mut().shuffle_with_rng(&mut self.rng);
        }
        self.switch_turn();
        true
    }

    /// Swap the named rack tiles for fresh draws. All-or-nothing: fails
    /// outright when the bag holds fewer tiles than requested.
    pub fn exchange_tiles(&mut self, indices: &[usize]) -> ExchangeOutcome {
        if self.state != GameState::Playing {
            return ExchangeOutcome::WrongState;
        }
        if indices.is_empty() {
            return ExchangeOutcome::NothingRequested;
        }
        let rack_len = self.players[self.current].rack().len();
        let unique: HashSet<usize> = indices.iter().copied().collect();
        if unique.len() != indices.len() || indices.iter().any(|i| *i >= rack_len) {
            return ExchangeOutcome::BadIndices;
        }
        if self.bag.len() < indices.len() {
            return ExchangeOutcome::NotEnoughInBag;
        }

        let mut descending: Vec<usize> = indices.to_vec();
        descending.sort_unstable_by(|a, b| b.cmp(a));
        let mut removed = Vec::with_capacity(descending.len());
        for index in descending {
            if let Some(tile) = self.players[self.current].rack_mut().remove(index) {
                removed.push(tile);
            }
        }
        let count = removed.len();
        self.draw_tiles_for_player(self.current, count);
        self.bag.put_back(removed);

        self.consecutive_passes = 0;
        self.switch_turn();
        ExchangeOutcome::Exchanged
    }

    pub fn pause(&mut self) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.state = GameState::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != GameState::Paused {
            return false;
        }
        self.state = GameState::Playing;
        true
    }

    /// Give up from the pause screen: the opponent takes a fixed bonus
    /// and the win.
    pub fn surrender(&mut self) -> bool {
        if self.state != GameState::Paused {
            return false;
        }
        let opponent = self.other_index();
        self.players[opponent].add_score(SURRENDER_BONUS);
        self.outcome = Some(GameOutcome {
            reason: EndReason::Surrender,
            winner: Some(opponent),
        });
        self.state = GameState::GameOver;
        true
    }

    fn switch_turn(&mut self) {
        self.current = self.other_index();
        // Reshuffle so assistive tooling cannot key on tile positions.
        self.players[self.current]
            .rack_mut()
            .shuffle_with_rng(&mut self.rng);
    }

    fn other_index(&self) -> usize {
        1 - self.current
    }

    fn check_exhaustion(&mut self) {
        if self.bag.is_empty()
            && (self.players[0].rack().is_empty() || self.players[1].rack().is_empty())
        {
            self.finalize(EndReason::BagExhausted);
        }
    }

    /// Normal end-of-game accounting: rack penalties, the empty-rack
    /// bonus, then the tiebreak ladder.
    fn finalize(&mut self, reason: EndReason) {
        let penalties = [
            self.players[0].rack().point_total(),
            self.players[1].rack().point_total(),
        ];
        for idx in 0..2 {
            self.players[idx].apply_final_penalty(penalties[idx]);
        }
        // A player who went out collects the opponent's leftovers too.
        for idx in 0..2 {
            if self.players[idx].rack().is_empty() && !self.players[1 - idx].rack().is_empty() {
                self.players[idx].add_score(penalties[1 - idx]);
            }
        }

        let winner = self.resolve_winner();
        self.outcome = Some(GameOutcome { reason, winner });
        self.state = GameState::GameOver;
    }

    /// Higher score wins; ties fall to fewer rack tiles, then to the
    /// lower rack point total, then to a true draw. A tiebreak win is
    /// recorded on the scoreboard as one nominal point.
    fn resolve_winner(&mut self) -> Option<usize> {
        let scores = [self.players[0].score(), self.players[1].score()];
        if scores[0] != scores[1] {
            return Some(if scores[0] > scores[1] { 0 } else { 1 });
        }

        let tile_counts = [self.players[0].rack().len(), self.players[1].rack().len()];
        if tile_counts[0] != tile_counts[1] {
            let winner = if tile_counts[0] < tile_counts[1] { 0 } else { 1 };
            self.players[winner].add_score(TIEBREAK_POINT);
            return Some(winner);
        }

        let point_totals = [
            self.players[0].rack().point_total(),
            self.players[1].rack().point_total(),
        ];
        if point_totals[0] != point_totals[1] {
            let winner = if point_totals[0] < point_totals[1] { 0 } else { 1 };
            self.players[winner].add_score(TIEBREAK_POINT);
            return Some(winner);
        }

        None
    }

    // --- read-only snapshot for the presentation layer -------------------

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, idx: usize) -> &Player {
        &self.players[idx.min(1)]
    }

    pub fn current_player_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn bag_count(&self) -> usize {
        self.bag.len()
    }

    /// Cells tentatively holding this turn's tiles, for highlighting.
    pub fn tentative_cells(&self) -> &[Position] {
        &self.tentative
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// The run of letters the tentative placement currently sits in,
    /// for assistive prefix suggestions.
    pub fn tentative_word(&self) -> Option<String> {
        let mut sorted = self.tentative.clone();
        sorted.sort();
        let first = *sorted.first()?;
        let orientation = if sorted.iter().all(|p| p.row == first.row) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let run = run_through(&self.board, first, orientation);
        Some(run.text)
    }
}
