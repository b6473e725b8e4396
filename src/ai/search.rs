use rayon::prelude::*;

use crate::game::{Board, GameState, Player};

use super::agent::Agent;
use super::heuristic::{score_drop, DropScore, Value};

pub const DEFAULT_SEARCH_DEPTH: usize = 2;

/// Depth-limited adversarial search over candidate columns.
///
/// Every decision node fans the playable columns out across rayon's worker
/// pool; each branch scores its column and, if it recurses, explores the
/// opponent's replies on its own private board copy. Branches share nothing
/// mutable, so the only synchronization is the join when the per-column
/// values are collected.
pub struct SearchEngine {
    depth: usize,
}

impl SearchEngine {
    pub fn new(depth: usize) -> Self {
        assert!(depth > 0, "search depth must be at least 1");
        SearchEngine { depth }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Pick the column that best counters `perspective`, the side whose runs
    /// are being scored (normally the player who just moved).
    ///
    /// All playable columns are valued in parallel; the reduction walks the
    /// results in column order with a strict comparison, so ties go to the
    /// lowest column index exactly as a sequential scan would decide them.
    /// Returns `None` on a full board.
    pub fn choose_counter_move(&self, board: &Board, perspective: Player) -> Option<usize> {
        let legal = board.playable_columns();
        if legal.is_empty() {
            return None;
        }

        let values: Vec<(usize, Value)> = legal
            .into_par_iter()
            .map(|col| (col, self.move_value(self.depth, col, perspective, board)))
            .collect();

        let mut best = values[0];
        for &(col, value) in &values[1..] {
            if value > best.1 {
                best = (col, value);
            }
        }
        Some(best.0)
    }

    /// Value of dropping in `col` from `perspective`'s viewpoint.
    ///
    /// Both sides maximize their own heuristic; a move's net value is its
    /// score minus the opponent's best counter-score, with won and lost
    /// branches carried structurally instead of as arithmetic extremes.
    fn move_value(&self, depth: usize, col: usize, perspective: Player, board: &Board) -> Value {
        if depth == 0 {
            return Value::Score(0);
        }

        match score_drop(board, col, perspective) {
            Some(DropScore::Win) => Value::Win,
            Some(DropScore::Points(points)) => {
                // The column actually receives the opponent's piece; the
                // reply search then scores the opponent's prospects on that
                // hypothetical board.
                let mut sim = board.simulation();
                sim.force_drop(col, perspective.other().to_cell());

                match self.best_reply(depth - 1, perspective.other(), sim.board()) {
                    Value::Win => Value::Loss,
                    Value::Loss => Value::Win,
                    Value::Score(reply) => Value::Score(i64::from(points) - reply),
                }
            }
            None => unreachable!("search only evaluates playable columns"),
        }
    }

    /// Best value the replying side can reach, fanning the columns out in
    /// parallel.
    fn best_reply(&self, depth: usize, perspective: Player, board: &Board) -> Value {
        if depth == 0 {
            return Value::Score(0);
        }

        board
            .playable_columns()
            .into_par_iter()
            .map(|col| self.move_value(depth, col, perspective, board))
            .max()
            .unwrap_or(Value::Score(0))
    }
}

impl Agent for SearchEngine {
    fn select_action(&mut self, state: &GameState) -> usize {
        // Counter the side that just moved.
        self.choose_counter_move(state.board(), state.current_player().other())
            .expect("no legal moves available")
    }

    fn name(&self) -> &str {
        "Search"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;
    use crate::game::Cell;

    fn board_with(drops: &[(usize, Cell)]) -> Board {
        let mut board = Board::default();
        for &(col, cell) in drops {
            board.drop_piece(col, cell).unwrap();
        }
        board
    }

    #[test]
    fn selects_legal_column_on_empty_board() {
        let engine = SearchEngine::new(DEFAULT_SEARCH_DEPTH);
        let board = Board::default();
        let col = engine.choose_counter_move(&board, Player::Red).unwrap();
        assert!(board.is_playable(col));
    }

    #[test]
    fn finds_immediate_win_at_any_depth() {
        let board = board_with(&[
            (0, Cell::Red),
            (1, Cell::Red),
            (2, Cell::Red),
            (0, Cell::Yellow),
            (1, Cell::Yellow),
        ]);
        // Column 3 completes Red's bottom row regardless of lookahead.
        for depth in 1..=4 {
            let engine = SearchEngine::new(depth);
            assert_eq!(
                engine.choose_counter_move(&board, Player::Red),
                Some(3),
                "depth {depth} missed the winning column"
            );
        }
    }

    #[test]
    fn counters_the_threatened_column() {
        // Red threatens column 3; the engine playing Yellow evaluates Red's
        // runs and lands on the threat.
        let board = board_with(&[
            (0, Cell::Red),
            (1, Cell::Red),
            (2, Cell::Red),
            (6, Cell::Yellow),
            (6, Cell::Yellow),
        ]);
        let engine = SearchEngine::new(2);
        let col = engine.choose_counter_move(&board, Player::Red).unwrap();
        assert_eq!(col, 3);
    }

    #[test]
    fn tie_breaks_to_lowest_column() {
        // Red can complete a vertical line in column 1 or column 5; both
        // value to a win, so the lower index must be chosen.
        let board = board_with(&[
            (1, Cell::Red),
            (1, Cell::Red),
            (1, Cell::Red),
            (5, Cell::Red),
            (5, Cell::Red),
            (5, Cell::Red),
        ]);
        let engine = SearchEngine::new(3);
        assert_eq!(engine.choose_counter_move(&board, Player::Red), Some(1));
    }

    #[test]
    fn choice_is_deterministic_across_runs() {
        let board = board_with(&[
            (3, Cell::Red),
            (2, Cell::Yellow),
            (3, Cell::Red),
            (4, Cell::Yellow),
        ]);
        let engine = SearchEngine::new(3);
        let first = engine.choose_counter_move(&board, Player::Red);
        for _ in 0..10 {
            assert_eq!(engine.choose_counter_move(&board, Player::Red), first);
        }
    }

    #[test]
    fn full_board_has_no_counter_move() {
        let mut board = Board::default();
        for col in 0..board.cols() {
            for _ in 0..board.rows() {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        let engine = SearchEngine::new(2);
        assert_eq!(engine.choose_counter_move(&board, Player::Yellow), None);
    }

    #[test]
    fn search_leaves_the_board_untouched() {
        let board = board_with(&[(3, Cell::Red), (3, Cell::Yellow)]);
        let before = board.clone();
        let engine = SearchEngine::new(4);
        engine.choose_counter_move(&board, Player::Red);
        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "search depth must be at least 1")]
    fn zero_depth_is_rejected() {
        SearchEngine::new(0);
    }

    #[test]
    fn full_game_against_random_completes() {
        let mut random = RandomAgent::new();
        let mut engine = SearchEngine::new(2);
        let mut state = GameState::initial();
        let mut turn = 0;

        while !state.is_terminal() && turn < 42 {
            let action = if turn % 2 == 0 {
                random.select_action(&state)
            } else {
                engine.select_action(&state)
            };
            state = state.apply_move(action).unwrap();
            turn += 1;
        }

        assert!(state.is_terminal(), "Game should complete");
        assert!(state.outcome().is_some());
    }
}
