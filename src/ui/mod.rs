//! Front ends: a plain console renderer for line-based play, and a terminal
//! UI built with Ratatui.

mod app;
pub mod console;
mod game_view;

pub use app::App;
pub use console::{board_to_text, ConsoleRenderer};
