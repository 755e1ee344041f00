//! Core Connect Four rules: board representation, players, anchored win
//! detection, and the event-emitting game engine.

mod board;
mod engine;
mod events;
mod player;
mod win;

pub use board::{Board, BoardError, Disc, CAPACITY, COLS, ROWS};
pub use engine::{GameEngine, GameResult, MoveOutcome, Verdict};
pub use events::{GameEvent, Observers, SubscriptionId};
pub use player::{Player, Players, Seat};
pub use win::{find_win, Coord, WinDirection, WinInfo, WIN_LENGTH};
