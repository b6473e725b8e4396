use crate::game::GameState;

/// Interface for anything that can pick the next column to play.
pub trait Agent {
    /// Select a column for the side to move. Callers guarantee the state has
    /// at least one legal move.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
