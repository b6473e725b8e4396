//! The move-selection engine: line-counting heuristic, depth-limited
//! adversarial search with parallel column fan-out, and the agent interface.

mod agent;
mod heuristic;
mod random;
mod search;

pub use agent::Agent;
pub use heuristic::{is_winning_drop, score_drop, Direction, DropScore, Value};
pub use random::RandomAgent;
pub use search::{SearchEngine, DEFAULT_SEARCH_DEPTH};
