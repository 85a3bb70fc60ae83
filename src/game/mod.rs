//! Core Connect Four game logic: board representation, piece identity, and
//! the turn-by-turn session driver.

mod board;
mod player;
mod session;

pub use board::{Board, Cell, GameOutcome, CENTER_COLUMN, COLS, CONNECT, ROWS};
pub use player::Piece;
pub use session::{Renderer, Session, TurnResult};
