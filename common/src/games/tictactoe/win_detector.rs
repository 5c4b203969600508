use super::board::Board;
use super::types::{Cell, GameStatus, Move, Player};

/// The eight winning triples: rows, columns, then both diagonals.
pub const LINES: [[Move; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn has_won(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// First line fully held by `player`, in `LINES` order.
pub fn winning_line(board: &Board, player: Player) -> Option<[Move; 3]> {
    let mark = Cell::from(player);
    let cells = board.cells();
    LINES
        .iter()
        .find(|line| line.iter().all(|&index| cells[index] == mark))
        .copied()
}

pub fn check_win(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| has_won(board, player))
}

pub fn evaluate_status(board: &Board) -> GameStatus {
    if let Some(winner) = check_win(board) {
        GameStatus::Won(winner)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell::{Empty as E, O, X};

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();

        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
        assert_eq!(evaluate_status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut board = Board::new();
            for index in line {
                board.place(index, Player::O).unwrap();
            }

            assert!(has_won(&board, Player::O), "line {:?}", line);
            assert!(!has_won(&board, Player::X));
            assert_eq!(winning_line(&board, Player::O), Some(line));
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = Board::from_cells([X, X, E, O, O, E, E, E, E]);

        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = Board::from_cells([O, O, X, O, X, E, X, E, E]);

        assert_eq!(winning_line(&board, Player::X), Some([2, 4, 6]));
        assert_eq!(evaluate_status(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);

        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
        assert_eq!(evaluate_status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, X]);

        assert!(board.is_full());
        assert_eq!(evaluate_status(&board), GameStatus::Won(Player::X));
    }
}
