//! Game core: board, tiles, racks, word discovery, scoring, turn engine

pub mod bag;
pub mod board;
pub mod dictionary;
pub mod engine;
pub mod player;
pub mod rack;
pub mod score;
pub mod tile;
pub mod words;

pub use bag::TileBag;
pub use board::{Board, BonusKind, Orientation, Position, BOARD_SIZE, CENTER};
pub use dictionary::Dictionary;
pub use engine::{
    EndReason, ExchangeOutcome, Game, GameMode, GameOutcome, GameState, MoveOutcome,
    MoveRejection, PlacementOutcome,
};
pub use player::{Player, PlayerKind};
pub use rack::{Rack, RACK_CAPACITY};
pub use score::{score_move, score_word};
pub use tile::Tile;
pub use words::{find_words, WordInfo};
