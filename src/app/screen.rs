//! Screen coordination: maps key presses onto engine intents
//!
//! The engine exposes fully-resolved operations (confirm, cancel, skip,
//! pause, ...); everything key-code shaped stays up here. Rendering only
//! reads this struct and the engine's snapshot accessors.

use crate::game::{Dictionary, Game, GameMode, GameState, Position, BOARD_SIZE};
use crossterm::event::KeyCode;

/// How many dictionary suggestions the side panel shows.
const SUGGESTION_ROWS: usize = 8;

/// Menu option on the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    HumanVsHuman,
    HumanVsAi,
    AiVsAi,
    Quit,
}

impl MenuOption {
    /// Get all menu options in order
    pub fn all() -> &'static [MenuOption] {
        &[
            MenuOption::HumanVsHuman,
            MenuOption::HumanVsAi,
            MenuOption::AiVsAi,
            MenuOption::Quit,
        ]
    }

    /// Get the display label for this option
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::HumanVsHuman => "Two Players",
            MenuOption::HumanVsAi => "Play the Computer",
            MenuOption::AiVsAi => "Watch the Computer",
            MenuOption::Quit => "Quit",
        }
    }

    fn mode(&self) -> Option<GameMode> {
        match self {
            MenuOption::HumanVsHuman => Some(GameMode::HumanVsHuman),
            MenuOption::HumanVsAi => Some(GameMode::HumanVsAi),
            MenuOption::AiVsAi => Some(GameMode::AiVsAi),
            MenuOption::Quit => None,
        }
    }
}

/// Main application state: the engine plus UI-side cursors and inputs.
pub struct App {
    pub game: Game,
    /// Whether the application should quit
    pub should_quit: bool,
    /// True while the menu screen is up (before a game, or after one).
    pub in_menu: bool,
    pub menu_selected: usize,
    pub name_inputs: [String; 2],
    /// Which name field is being edited, if any.
    pub editing_name: Option<usize>,
    /// Board cursor for keyboard placement.
    pub cursor: Position,
    /// Which rack tile the next placement uses.
    pub rack_selected: usize,
    /// Waiting for a letter to assign to a blank about to be placed.
    pub pending_blank: bool,
    /// Toggling rack tiles for an exchange.
    pub exchange_mode: bool,
    pub exchange_picks: Vec<usize>,
    /// Feedback message from the last action.
    pub feedback: String,
    /// Dictionary suggestions for the current tentative run.
    pub suggestions: Vec<String>,
}

impl App {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            game: Game::new(dictionary),
            should_quit: false,
            in_menu: true,
            menu_selected: 0,
            name_inputs: ["Player 1".to_string(), "Player 2".to_string()],
            editing_name: None,
            cursor: Position::new(7, 7),
            rack_selected: 0,
            pending_blank: false,
            exchange_mode: false,
            exchange_picks: Vec::new(),
            feedback: String::new(),
            suggestions: Vec::new(),
        }
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Dispatch a key press to whichever screen is active.
    pub fn on_key(&mut self, code: KeyCode) {
        if self.in_menu {
            self.on_menu_key(code);
            return;
        }
        match self.game.state() {
            GameState::Playing | GameState::PlacingTiles | GameState::ValidatingWord => {
                self.on_game_key(code);
            }
            GameState::Paused => self.on_paused_key(code),
            GameState::GameOver => self.on_game_over_key(code),
            GameState::Menu => self.in_menu = true,
        }
    }

    // --- menu ------------------------------------------------------------

    fn on_menu_key(&mut self, code: KeyCode) {
        if let Some(idx) = self.editing_name {
            match code {
                KeyCode::Char(c) if c.is_ascii_alphanumeric() || c == ' ' => {
                    if self.name_inputs[idx].len() < 12 {
                        self.name_inputs[idx].push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.name_inputs[idx].pop();
                }
                KeyCode::Tab => {
                    self.editing_name = if idx == 0 { Some(1) } else { None };
                }
                KeyCode::Enter | KeyCode::Esc => self.editing_name = None,
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Up => {
                if self.menu_selected > 0 {
                    self.menu_selected -= 1;
                }
            }
            KeyCode::Down => {
                if self.menu_selected < MenuOption::all().len() - 1 {
                    self.menu_selected += 1;
                }
            }
            KeyCode::Tab => self.editing_name = Some(0),
            KeyCode::Enter => {
                let option = MenuOption::all()[self.menu_selected];
                match option.mode() {
                    Some(mode) => self.start_game(mode),
                    None => self.quit(),
                }
            }
            KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    fn start_game(&mut self, mode: GameMode) {
        let name2 = match mode {
            GameMode::HumanVsHuman => self.name_inputs[1].clone(),
            _ => "Computer".to_string(),
        };
        self.game
            .start_new_game(mode, &self.name_inputs[0], &name2);
        self.in_menu = false;
        self.cursor = Position::new(7, 7);
        self.rack_selected = 0;
        self.pending_blank = false;
        self.exchange_mode = false;
        self.exchange_picks.clear();
        self.feedback = format!("{} to move", self.game.current_player().name());
        self.suggestions.clear();
    }

    // --- playing ---------------------------------------------------------

    fn on_game_key(&mut self, code: KeyCode) {
        if self.pending_blank {
            match code {
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    self.place_selected(Some(c.to_ascii_uppercase()));
                    self.pending_blank = false;
                }
                KeyCode::Esc => {
                    self.pending_blank = false;
                    self.feedback.clear();
                }
                _ => {}
            }
            return;
        }

        if self.exchange_mode {
            self.on_exchange_key(code);
            return;
        }

        match code {
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Tab => {
                let len = self.game.current_player().rack().len();
                if len > 0 {
                    self.rack_selected = (self.rack_selected + 1) % len;
                }
            }
            KeyCode::Char(' ') => {
                let is_blank = self
                    .game
                    .current_player()
                    .rack()
                    .get(self.rack_selected)
                    .is_some_and(|t| t.is_blank());
                if is_blank {
                    self.pending_blank = true;
                    self.feedback = "Type a letter for the blank".to_string();
                } else {
                    self.place_selected(None);
                }
            }
            KeyCode::Enter => {
                let outcome = self.game.confirm_word();
                self.feedback = outcome.message();
                self.clamp_rack_selection();
                self.refresh_suggestions();
            }
            KeyCode::Backspace => {
                if self.game.undo_placement() {
                    self.feedback.clear();
                    self.refresh_suggestions();
                }
            }
            KeyCode::Char('x') => {
                if self.game.state() == GameState::Playing {
                    self.exchange_mode = true;
                    self.exchange_picks.clear();
                    self.feedback = "Pick tiles 1-7, Enter to swap".to_string();
                }
            }
            KeyCode::Char('s') => {
                if self.game.skip_turn() {
                    self.feedback = format!("{} to move", self.game.current_player().name());
                    self.clamp_rack_selection();
                }
            }
            KeyCode::Esc => {
                if self.game.state() == GameState::PlacingTiles {
                    self.game.cancel_word();
                    self.feedback = "Word cancelled".to_string();
                    self.clamp_rack_selection();
                    self.suggestions.clear();
                } else {
                    self.game.pause();
                }
            }
            KeyCode::Char('p') => {
                self.game.pause();
            }
            _ => {}
        }
    }

    fn on_exchange_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let Some(index) = (c as usize).checked_sub('1' as usize) else {
                    return;
                };
                if index < self.game.current_player().rack().len() {
                    if let Some(at) = self.exchange_picks.iter().position(|i| *i == index) {
                        self.exchange_picks.remove(at);
                    } else {
                        self.exchange_picks.push(index);
                    }
                }
            }
            KeyCode::Enter => {
                let picks = self.exchange_picks.clone();
                let outcome = self.game.exchange_tiles(&picks);
                self.feedback = outcome.message().to_string();
                self.exchange_mode = false;
                self.exchange_picks.clear();
                self.clamp_rack_selection();
            }
            KeyCode::Esc => {
                self.exchange_mode = false;
                self.exchange_picks.clear();
                self.feedback.clear();
            }
            _ => {}
        }
    }

    fn on_paused_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('r') => {
                self.game.resume();
                self.feedback.clear();
            }
            KeyCode::Char('g') => {
                if self.game.surrender() {
                    self.feedback = "Game surrendered".to_string();
                }
            }
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn on_game_over_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => {
                self.in_menu = true;
                self.feedback.clear();
            }
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    // --- helpers ---------------------------------------------------------

    fn move_cursor(&mut self, dr: isize, dc: isize) {
        let row = self.cursor.row as isize + dr;
        let col = self.cursor.col as isize + dc;
        if (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col) {
            self.cursor = Position::new(row as usize, col as usize);
        }
    }

    fn place_selected(&mut self, blank_as: Option<char>) {
        let outcome = self.game.request_placement(
            self.cursor.row,
            self.cursor.col,
            self.rack_selected,
            blank_as,
        );
        self.feedback = outcome.message().to_string();
        if outcome.is_placed() {
            self.clamp_rack_selection();
            self.refresh_suggestions();
        }
    }

    fn clamp_rack_selection(&mut self) {
        let len = self.game.current_player().rack().len();
        if len == 0 {
            self.rack_selected = 0;
        } else if self.rack_selected >= len {
            self.rack_selected = len - 1;
        }
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions.clear();
        if let Some(prefix) = self.game.tentative_word() {
            if !prefix.trim().is_empty() {
                let mut found = self.game.dictionary().suggest(&prefix);
                found.truncate(SUGGESTION_ROWS);
                self.suggestions = found;
            }
        }
    }
}
