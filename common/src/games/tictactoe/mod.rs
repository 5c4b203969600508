mod board;
mod bot_controller;
mod game_state;
mod move_generator;
mod minimax;
mod types;
mod win_detector;

pub use board::{Board, PlacedMark};
pub use bot_controller::{Bot, BotType, MinimaxBot, MoveStrategy, RandomBot, random_move};
pub use game_state::TicTacToeGameState;
pub use move_generator::{MoveGenerator, get_available_moves};
pub use minimax::{SearchOptions, SearchReport, compute_best_move, search};
pub use types::{BOARD_SIZE, CELL_COUNT, Cell, GameStatus, Move, Player};
pub use win_detector::{LINES, check_win, evaluate_status, has_won, winning_line};

pub fn create_empty_board() -> Board {
    Board::new()
}
