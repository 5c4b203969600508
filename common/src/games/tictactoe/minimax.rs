use crate::error::{GameError, GameResult};
use super::board::Board;
use super::move_generator::get_available_moves;
use super::types::{Move, Player};
use super::win_detector::has_won;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// When false, alpha and beta stay at their initial bounds and every branch is visited.
    pub pruning: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { pruning: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub best_move: Move,
    pub score: i32,
    pub nodes_visited: u64,
}

/// Best move for `ai_player` with alpha-beta pruning enabled.
///
/// The board is used as scratch space and is back in its original state on return.
pub fn compute_best_move(board: &mut Board, ai_player: Player) -> GameResult<Move> {
    search(board, ai_player, SearchOptions::default()).map(|report| report.best_move)
}

/// Scores every empty cell from `ai_player`'s point of view and keeps the strictly
/// highest, so ties resolve to the lowest index.
pub fn search(board: &mut Board, ai_player: Player, options: SearchOptions) -> GameResult<SearchReport> {
    let candidates = get_available_moves(board);
    if candidates.is_empty() {
        return Err(GameError::NoMovesAvailable);
    }

    let mut searcher = Searcher {
        ai_player,
        options,
        nodes_visited: 0,
    };
    let mut best: Option<(Move, i32)> = None;

    for index in candidates {
        let score = {
            let mut placed = board.place_scoped(index, ai_player)?;
            searcher.minimax(&mut placed, i32::MIN, i32::MAX, false)?
        };

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    let (best_move, score) = best.ok_or(GameError::NoMovesAvailable)?;
    Ok(SearchReport {
        best_move,
        score,
        nodes_visited: searcher.nodes_visited,
    })
}

struct Searcher {
    ai_player: Player,
    options: SearchOptions,
    nodes_visited: u64,
}

impl Searcher {
    /// Score of `board` for the fixed `ai_player`: positive when it wins, negative when the
    /// opponent does, scaled by how many cells were still empty at that point.
    fn minimax(
        &mut self,
        board: &mut Board,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> GameResult<i32> {
        self.nodes_visited += 1;

        let opponent = self.ai_player.opponent();
        let moves = get_available_moves(board);
        let margin = moves.len() as i32 + 1;

        if has_won(board, self.ai_player) {
            return Ok(margin);
        }
        if has_won(board, opponent) {
            return Ok(-margin);
        }
        if moves.is_empty() {
            return Ok(0);
        }

        if maximizing {
            let mut value = i32::MIN;
            for index in moves {
                let mut placed = board.place_scoped(index, self.ai_player)?;
                value = value.max(self.minimax(&mut placed, alpha, beta, false)?);
                drop(placed);

                if self.options.pruning {
                    alpha = alpha.max(value);
                    if alpha >= beta {
                        break;
                    }
                }
            }
            Ok(value)
        } else {
            let mut value = i32::MAX;
            for index in moves {
                let mut placed = board.place_scoped(index, opponent)?;
                value = value.min(self.minimax(&mut placed, alpha, beta, true)?);
                drop(placed);

                if self.options.pruning {
                    beta = beta.min(value);
                    if beta <= alpha {
                        break;
                    }
                }
            }
            Ok(value)
        }
    }
}
