//! # Connect Four
//!
//! A Connect Four rules engine with a rule-based opponent. The agent wins
//! when it can, blocks when it must, steers clear of moves that hand the
//! opponent a win, and otherwise plays toward the center.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, pieces, turn-by-turn session
//! - [`ai`] — Move sources: the heuristic agent and the human prompt
//! - [`ui`] — Console renderer and terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
