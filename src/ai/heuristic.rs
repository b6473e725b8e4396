use crate::game::{Board, Cell, Player};

/// Number of cells in a scored window; four in a row wins.
const WINDOW: usize = 4;

const SCORE_ONE_IN_ROW: u32 = 1;
const SCORE_TWO_IN_ROW: u32 = 3;
const SCORE_THREE_IN_ROW: u32 = 9;

/// The four line families a window can lie along, each described by one unit
/// step `(row_delta, col_delta)`. A single walker parameterized by the step
/// replaces per-direction scoring procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalUp,
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    fn step(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalUp => (-1, 1),
            Direction::DiagonalDown => (1, 1),
        }
    }
}

/// Heuristic result for dropping in one column: either an immediate
/// four-in-a-row or a finite sum of window scores.
///
/// A completed line is propagated as its own variant rather than a maximal
/// numeric sentinel, so it can never be lost to arithmetic on the finite
/// scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropScore {
    Win,
    Points(u32),
}

/// Net value of a move in the search recursion.
///
/// `Loss` is a branch where the opponent has a forced four-in-a-row, `Win` a
/// branch where we do; finite scores compare numerically in between. The
/// derived ordering is `Loss < Score(_) < Win`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Value {
    Loss,
    Score(i64),
    Win,
}

/// Score a hypothetical drop in `col` from `player`'s perspective.
///
/// Every length-4 window that fits on the board and passes through the cell
/// the piece would land in is inspected, in all four directions. The landing
/// cell counts as owned by `player`; a window holding any opposing piece
/// scores 0; otherwise the own-piece count maps to 0/1/3/9 points, and a
/// count of four is an immediate win for the whole drop.
///
/// Returns `None` when the column is full or does not exist.
pub fn score_drop(board: &Board, col: usize, player: Player) -> Option<DropScore> {
    let row = board.landing_row(col)?;
    let mut total = 0u32;

    for dir in Direction::ALL {
        match direction_score(board, row, col, player, dir) {
            DropScore::Win => return Some(DropScore::Win),
            DropScore::Points(points) => total += points,
        }
    }

    Some(DropScore::Points(total))
}

/// Would dropping in `col` complete a four-in-a-row for `player`?
pub fn is_winning_drop(board: &Board, col: usize, player: Player) -> bool {
    matches!(score_drop(board, col, player), Some(DropScore::Win))
}

/// Sum the window scores of one direction family through the landing cell.
fn direction_score(
    board: &Board,
    row: usize,
    col: usize,
    player: Player,
    dir: Direction,
) -> DropScore {
    let (dr, dc) = dir.step();
    let rows = board.rows() as i32;
    let cols = board.cols() as i32;
    let span = (WINDOW - 1) as i32;
    let mut total = 0u32;

    // Slide the window so the landing cell takes each of the four positions,
    // keeping only windows that fit on the board. The walk is monotonic in
    // both coordinates, so checking the two endpoints covers every cell.
    for offset in 0..WINDOW as i32 {
        let start_r = row as i32 - offset * dr;
        let start_c = col as i32 - offset * dc;
        let end_r = start_r + span * dr;
        let end_c = start_c + span * dc;

        let fits = (0..rows).contains(&start_r)
            && (0..rows).contains(&end_r)
            && (0..cols).contains(&start_c)
            && (0..cols).contains(&end_c);
        if !fits {
            continue;
        }

        if let Some(count) = window_count(board, (start_r, start_c), (dr, dc), (row, col), player)
        {
            if count == WINDOW as u32 {
                return DropScore::Win;
            }
            total += window_points(count);
        }
    }

    DropScore::Points(total)
}

/// Count `player`'s pieces in one in-bounds window, treating the landing cell
/// as already owned. `None` when the window is broken by an opposing piece.
fn window_count(
    board: &Board,
    start: (i32, i32),
    step: (i32, i32),
    landing: (usize, usize),
    player: Player,
) -> Option<u32> {
    let own = player.to_cell();
    let mut count = 0u32;

    for i in 0..WINDOW as i32 {
        let row = (start.0 + i * step.0) as usize;
        let col = (start.1 + i * step.1) as usize;

        if (row, col) == landing {
            count += 1;
            continue;
        }
        match board.get(row, col) {
            Cell::Empty => {}
            cell if cell == own => count += 1,
            _ => return None,
        }
    }

    Some(count)
}

fn window_points(count: u32) -> u32 {
    match count {
        1 => SCORE_ONE_IN_ROW,
        2 => SCORE_TWO_IN_ROW,
        3 => SCORE_THREE_IN_ROW,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(drops: &[(usize, Cell)]) -> Board {
        let mut board = Board::default();
        for &(col, cell) in drops {
            board.drop_piece(col, cell).unwrap();
        }
        board
    }

    #[test]
    fn empty_board_center_drop() {
        let board = Board::default();
        // (5,3) lies on 4 horizontal, 1 vertical, and 2 diagonal windows,
        // each counting only the hypothetical piece itself.
        assert_eq!(
            score_drop(&board, 3, Player::Red),
            Some(DropScore::Points(7))
        );
    }

    #[test]
    fn empty_board_corner_drop() {
        let board = Board::default();
        // (5,0): one horizontal, one vertical, one up-diagonal window.
        assert_eq!(
            score_drop(&board, 0, Player::Red),
            Some(DropScore::Points(3))
        );
    }

    #[test]
    fn own_neighbor_raises_score() {
        let board = board_with(&[(2, Cell::Red)]);
        // Three horizontal windows now hold two red pieces (3 points each),
        // one holds a single piece; vertical and diagonals are unchanged.
        assert_eq!(
            score_drop(&board, 3, Player::Red),
            Some(DropScore::Points(13))
        );
    }

    #[test]
    fn opposing_piece_zeroes_windows() {
        let board = board_with(&[(2, Cell::Red)]);
        // For Yellow the three shared horizontal windows are dead.
        assert_eq!(
            score_drop(&board, 3, Player::Yellow),
            Some(DropScore::Points(4))
        );
    }

    #[test]
    fn run_length_scores_are_monotonic() {
        let one = board_with(&[]);
        let two = board_with(&[(2, Cell::Red)]);
        let three = board_with(&[(1, Cell::Red), (2, Cell::Red)]);

        let points = |board: &Board| match score_drop(board, 3, Player::Red) {
            Some(DropScore::Points(p)) => p,
            other => panic!("expected finite score, got {other:?}"),
        };

        assert!(points(&one) < points(&two));
        assert!(points(&two) < points(&three));
    }

    #[test]
    fn horizontal_four_is_a_win() {
        let board = board_with(&[(0, Cell::Red), (1, Cell::Red), (2, Cell::Red)]);
        assert_eq!(score_drop(&board, 3, Player::Red), Some(DropScore::Win));
        assert!(is_winning_drop(&board, 3, Player::Red));
        // Not a win for the other side
        assert!(!is_winning_drop(&board, 3, Player::Yellow));
    }

    #[test]
    fn vertical_four_is_a_win() {
        let board = board_with(&[(2, Cell::Yellow), (2, Cell::Yellow), (2, Cell::Yellow)]);
        assert!(is_winning_drop(&board, 2, Player::Yellow));
    }

    #[test]
    fn diagonal_four_is_a_win() {
        // Staircase so that a red drop in column 3 lands at (2,3), completing
        // (5,0)-(4,1)-(3,2)-(2,3).
        let board = board_with(&[
            (0, Cell::Red),
            (1, Cell::Yellow),
            (1, Cell::Red),
            (2, Cell::Yellow),
            (2, Cell::Yellow),
            (2, Cell::Red),
            (3, Cell::Yellow),
            (3, Cell::Yellow),
            (3, Cell::Yellow),
        ]);
        assert!(is_winning_drop(&board, 3, Player::Red));
    }

    #[test]
    fn full_column_scores_nothing() {
        let mut board = Board::default();
        for _ in 0..board.rows() {
            board.drop_piece(4, Cell::Red).unwrap();
        }
        assert_eq!(score_drop(&board, 4, Player::Red), None);
        assert!(!is_winning_drop(&board, 4, Player::Red));
    }

    #[test]
    fn value_ordering() {
        assert!(Value::Loss < Value::Score(i64::MIN));
        assert!(Value::Score(i64::MAX) < Value::Win);
        assert!(Value::Score(-3) < Value::Score(9));
    }
}
