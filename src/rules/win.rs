//! Win condition checking for standard Gomoku
//!
//! A stone wins when it completes a run of five or more same-colored stones
//! along any of the four line orientations. Overlines count.

use crate::board::{Board, Coord, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Vertical
    (1, 0),  // Horizontal
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal NE
];

/// Count consecutive `color` stones leaving `from` along `dir` (`sign` = +1 or -1).
///
/// Scans at most `WIN_LENGTH - 1` cells. Off-board cells read as empty, so the
/// scan stops at the edge without a separate bounds check.
#[inline]
fn run_length(board: &Board, from: Coord, dir: (i32, i32), sign: i32, color: Stone) -> usize {
    (1..WIN_LENGTH as i32)
        .take_while(|&k| board.get(from.offset(dir, k * sign)) == color)
        .count()
}

/// Find the winning run through `at`, if any.
///
/// Only checks 4 directions from the given position, at most
/// `WIN_LENGTH - 1` cells each way. Returns the stones of the first qualifying
/// direction, ordered from the backward end to the forward end (at least
/// `WIN_LENGTH` entries).
pub fn find_five_line_at_pos(board: &Board, at: Coord, color: Stone) -> Option<Vec<Coord>> {
    if color == Stone::Empty {
        return None;
    }
    DIRECTIONS.iter().find_map(|&dir| {
        let back = run_length(board, at, dir, -1, color) as i32;
        let fwd = run_length(board, at, dir, 1, color) as i32;
        if (back + fwd + 1) as usize >= WIN_LENGTH {
            Some((-back..=fwd).map(|k| at.offset(dir, k)).collect())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wins(board: &Board, at: Coord, color: Stone) -> bool {
        find_five_line_at_pos(board, at, color).is_some()
    }

    /// Color of the stone on `at` if it sits on a winning line
    fn winner_at(board: &Board, at: Coord) -> Option<Stone> {
        let color = board.get(at);
        wins(board, at, color).then_some(color)
    }

    fn place_all(board: &mut Board, coords: &[(i32, i32)], stone: Stone) {
        for &c in coords {
            board.place_stone(c.into(), stone);
        }
    }

    #[test]
    fn test_five_horizontal() {
        let mut board = Board::new();
        place_all(&mut board, &[(-2, 0), (-1, 0), (0, 0), (1, 0), (2, 0)], Stone::Black);
        assert!(wins(&board, Coord::new(2, 0), Stone::Black));
        assert!(wins(&board, Coord::new(0, 0), Stone::Black));
        assert!(!wins(&board, Coord::new(0, 0), Stone::White));
    }

    #[test]
    fn test_five_vertical() {
        let mut board = Board::new();
        for y in -4..1 {
            board.place_stone(Coord::new(3, y), Stone::White);
        }
        assert_eq!(winner_at(&board, Coord::new(3, -2)), Some(Stone::White));
    }

    #[test]
    fn test_five_diagonal() {
        let mut board = Board::new();
        for i in -2..3 {
            board.place_stone(Coord::new(i, i), Stone::Black);
        }
        assert_eq!(winner_at(&board, Coord::new(2, 2)), Some(Stone::Black));
    }

    #[test]
    fn test_five_anti_diagonal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Coord::new(i, -i), Stone::White);
        }
        assert_eq!(winner_at(&board, Coord::new(0, 0)), Some(Stone::White));
        assert_eq!(winner_at(&board, Coord::new(4, -4)), Some(Stone::White));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        for x in 0..4 {
            board.place_stone(Coord::new(x, 0), Stone::Black);
        }
        assert!(!wins(&board, Coord::new(3, 0), Stone::Black));
        assert_eq!(winner_at(&board, Coord::new(3, 0)), None);
    }

    #[test]
    fn test_gap_breaks_line() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (1, 0), (3, 0), (4, 0), (5, 0)], Stone::Black);
        assert!(!wins(&board, Coord::new(1, 0), Stone::Black));
        assert!(!wins(&board, Coord::new(3, 0), Stone::Black));
    }

    #[test]
    fn test_opponent_stone_breaks_line() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (1, 0), (3, 0), (4, 0)], Stone::Black);
        board.place_stone(Coord::new(2, 0), Stone::White);
        assert!(!wins(&board, Coord::new(4, 0), Stone::Black));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for x in -3..3 {
            board.place_stone(Coord::new(x, 1), Stone::Black);
        }
        assert!(wins(&board, Coord::new(-3, 1), Stone::Black));
        // Filling the middle of an overline also counts
        assert!(wins(&board, Coord::new(0, 1), Stone::Black));
    }

    #[test]
    fn test_five_at_board_edge() {
        let mut board = Board::new();
        for x in 3..8 {
            board.place_stone(Coord::new(x, 7), Stone::Black);
        }
        assert_eq!(winner_at(&board, Coord::new(7, 7)), Some(Stone::Black));
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new();
        for i in 3..8 {
            board.place_stone(Coord::new(-i, -i), Stone::White);
        }
        assert_eq!(winner_at(&board, Coord::new(-7, -7)), Some(Stone::White));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new();
        assert_eq!(winner_at(&board, Coord::ORIGIN), None);
        assert!(!wins(&board, Coord::ORIGIN, Stone::Empty));
        assert!(find_five_line_at_pos(&board, Coord::ORIGIN, Stone::Empty).is_none());
    }

    #[test]
    fn test_find_line_ordered() {
        let mut board = Board::new();
        for i in -2..3 {
            board.place_stone(Coord::new(i, -i), Stone::Black);
        }
        let line = find_five_line_at_pos(&board, Coord::ORIGIN, Stone::Black).unwrap();
        assert_eq!(
            line,
            vec![
                Coord::new(-2, 2),
                Coord::new(-1, 1),
                Coord::new(0, 0),
                Coord::new(1, -1),
                Coord::new(2, -2),
            ]
        );
    }

    #[test]
    fn test_find_line_overline_length() {
        let mut board = Board::new();
        for y in -3..4 {
            board.place_stone(Coord::new(0, y), Stone::White);
        }
        let line = find_five_line_at_pos(&board, Coord::new(0, 3), Stone::White).unwrap();
        // Scans stop after WIN_LENGTH - 1 cells in each direction
        assert_eq!(line.len(), 5);
        let line = find_five_line_at_pos(&board, Coord::ORIGIN, Stone::White).unwrap();
        assert_eq!(line.len(), 7);
    }
}
