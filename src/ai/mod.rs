mod heuristic;
mod human;
mod source;

pub use heuristic::{center_candidates, safe_moves, unsafe_moves, winning_moves, HeuristicAgent};
pub use human::{HumanPlayer, LineInput, StdinInput};
pub use source::MoveSource;
