use crate::error::{GameError, GameResult};
use super::board::Board;
use super::types::{GameStatus, Move, Player};
use super::win_detector::evaluate_status;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    last_move: Option<Move>,
    move_count: usize,
}

impl TicTacToeGameState {
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            status: GameStatus::InProgress,
            last_move: None,
            move_count: 0,
        }
    }

    /// Places the current player's mark, then advances the turn unless the game ended.
    pub fn place_mark(&mut self, index: Move) -> GameResult<GameStatus> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }

        self.board.place(index, self.current_player)?;
        self.last_move = Some(index);
        self.move_count += 1;
        self.status = evaluate_status(&self.board);

        if self.status == GameStatus::InProgress {
            self.current_player = self.current_player.opponent();
        }

        Ok(self.status)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Scratch access for move strategies; they must return the board unchanged.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell;

    fn play(state: &mut TicTacToeGameState, moves: &[Move]) -> GameStatus {
        let mut status = state.status();
        for &index in moves {
            status = state.place_mark(index).unwrap();
        }
        status
    }

    #[test]
    fn test_new_game_starts_with_given_player() {
        let state = TicTacToeGameState::new(Player::O);

        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(state.board().is_empty());
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::new(Player::X);

        state.place_mark(4).unwrap();
        assert_eq!(state.current_player(), Player::O);

        state.place_mark(0).unwrap();
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.board().cell(0), Some(Cell::O));
        assert_eq!(state.last_move(), Some(0));
        assert_eq!(state.move_count(), 2);
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut state = TicTacToeGameState::new(Player::X);
        state.place_mark(4).unwrap();

        let result = state.place_mark(4);

        assert_eq!(result, Err(GameError::OccupiedCell { index: 4 }));
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.move_count(), 1);
    }

    #[test]
    fn test_win_ends_game_and_keeps_winner_to_move() {
        let mut state = TicTacToeGameState::new(Player::X);

        let status = play(&mut state, &[0, 3, 1, 4, 2]);

        assert_eq!(status, GameStatus::Won(Player::X));
        assert!(state.is_over());
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut state = TicTacToeGameState::new(Player::X);
        play(&mut state, &[0, 3, 1, 4, 2]);
        let board = state.board().clone();

        assert_eq!(state.place_mark(8), Err(GameError::GameOver));
        assert_eq!(state.board(), &board);
    }

    #[test]
    fn test_draw() {
        let mut state = TicTacToeGameState::new(Player::X);

        let status = play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(status, GameStatus::Draw);
        assert!(state.board().is_full());
    }

    #[test]
    fn test_o_may_start() {
        let mut state = TicTacToeGameState::new(Player::O);

        let status = play(&mut state, &[6, 0, 7, 1, 8]);

        assert_eq!(status, GameStatus::Won(Player::O));
    }
}
