use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::debug_log;
use crate::error::{GameError, GameResult};
use crate::games::SessionRng;
use super::board::Board;
use super::move_generator::get_available_moves;
use super::minimax::{SearchOptions, search};
use super::types::{Move, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotType {
    Random,
    Minimax,
}

impl fmt::Display for BotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotType::Random => write!(f, "random"),
            BotType::Minimax => write!(f, "minimax"),
        }
    }
}

impl FromStr for BotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "easy" => Ok(BotType::Random),
            "minimax" | "ai" | "perfect" => Ok(BotType::Minimax),
            other => Err(format!(
                "Unknown difficulty '{}', expected random or minimax",
                other
            )),
        }
    }
}

/// Something that can pick a move for `player` on a non-terminal board.
///
/// Implementations may use the board as scratch space but must hand it back unchanged;
/// committing the returned move is the caller's job.
pub trait MoveStrategy {
    fn choose_move(&mut self, board: &mut Board, player: Player) -> GameResult<Move>;

    fn name(&self) -> &'static str;
}

pub fn random_move(board: &Board, rng: &mut SessionRng) -> GameResult<Move> {
    rng.choose(&get_available_moves(board))
        .ok_or(GameError::NoMovesAvailable)
}

pub struct RandomBot {
    rng: SessionRng,
}

impl RandomBot {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }
}

impl MoveStrategy for RandomBot {
    fn choose_move(&mut self, board: &mut Board, player: Player) -> GameResult<Move> {
        let index = random_move(board, &mut self.rng)?;
        debug_log!("random bot picked {} for {}", index, player);
        Ok(index)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[derive(Default)]
pub struct MinimaxBot {
    options: SearchOptions,
}

impl MinimaxBot {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }
}

impl MoveStrategy for MinimaxBot {
    fn choose_move(&mut self, board: &mut Board, player: Player) -> GameResult<Move> {
        let report = search(board, player, self.options)?;
        debug_log!(
            "minimax picked {} for {} (score {}, {} nodes)",
            report.best_move,
            player,
            report.score,
            report.nodes_visited
        );
        Ok(report.best_move)
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

pub enum Bot {
    Random(RandomBot),
    Minimax(MinimaxBot),
}

impl Bot {
    pub fn new(bot_type: BotType, rng: SessionRng) -> Self {
        match bot_type {
            BotType::Random => Bot::Random(RandomBot::new(rng)),
            BotType::Minimax => Bot::Minimax(MinimaxBot::default()),
        }
    }

    pub fn bot_type(&self) -> BotType {
        match self {
            Bot::Random(_) => BotType::Random,
            Bot::Minimax(_) => BotType::Minimax,
        }
    }
}

impl MoveStrategy for Bot {
    fn choose_move(&mut self, board: &mut Board, player: Player) -> GameResult<Move> {
        match self {
            Bot::Random(bot) => bot.choose_move(board, player),
            Bot::Minimax(bot) => bot.choose_move(board, player),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Bot::Random(bot) => bot.name(),
            Bot::Minimax(bot) => bot.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell::{Empty as E, O, X};

    #[test]
    fn test_bot_type_parsing() {
        assert_eq!("Random".parse::<BotType>(), Ok(BotType::Random));
        assert_eq!("easy".parse::<BotType>(), Ok(BotType::Random));
        assert_eq!("ai".parse::<BotType>(), Ok(BotType::Minimax));
        assert_eq!("MINIMAX".parse::<BotType>(), Ok(BotType::Minimax));
        assert!("hard".parse::<BotType>().is_err());
    }

    #[test]
    fn test_bot_type_display_round_trips() {
        for bot_type in [BotType::Random, BotType::Minimax] {
            assert_eq!(bot_type.to_string().parse::<BotType>(), Ok(bot_type));
        }
    }

    #[test]
    fn test_random_move_is_always_empty_cell() {
        let board = Board::from_cells([X, O, E, X, E, O, E, X, O]);
        let mut rng = SessionRng::new(99);

        for _ in 0..64 {
            let index = random_move(&board, &mut rng).unwrap();
            assert!(board.empty_cells().contains(&index));
        }
    }

    #[test]
    fn test_random_move_covers_all_empty_cells() {
        let board = Board::from_cells([X, E, E, E, O, E, E, E, E]);
        let mut rng = SessionRng::new(3);
        let mut seen = [false; 9];

        for _ in 0..500 {
            seen[random_move(&board, &mut rng).unwrap()] = true;
        }

        for index in board.empty_cells() {
            assert!(seen[index], "cell {} never picked", index);
        }
        assert!(!seen[0] && !seen[4]);
    }

    #[test]
    fn test_random_move_on_full_board_fails() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        let mut rng = SessionRng::new(0);

        assert_eq!(random_move(&board, &mut rng), Err(GameError::NoMovesAvailable));
    }

    #[test]
    fn test_random_bot_is_reproducible_by_seed() {
        let mut first = Bot::new(BotType::Random, SessionRng::new(1234));
        let mut second = Bot::new(BotType::Random, SessionRng::new(1234));
        let mut board = Board::new();

        let a: Vec<Move> = (0..10)
            .map(|_| first.choose_move(&mut board, Player::X).unwrap())
            .collect();
        let b: Vec<Move> = (0..10)
            .map(|_| second.choose_move(&mut board, Player::X).unwrap())
            .collect();

        assert_eq!(a, b);
    }

    #[test]
    fn test_minimax_bot_finds_win_and_leaves_board() {
        let mut bot = Bot::new(BotType::Minimax, SessionRng::new(0));
        let mut board = Board::from_cells([O, E, X, E, O, X, E, E, E]);
        let before = board.clone();

        assert_eq!(bot.choose_move(&mut board, Player::X), Ok(8));
        assert_eq!(board, before);
        assert_eq!(bot.name(), "minimax");
        assert_eq!(bot.bot_type(), BotType::Minimax);
    }

    #[test]
    fn test_strategies_are_interchangeable() {
        let mut bots: Vec<Box<dyn MoveStrategy>> = vec![
            Box::new(RandomBot::new(SessionRng::new(5))),
            Box::new(MinimaxBot::new(SearchOptions { pruning: false })),
        ];
        let mut board = Board::from_cells([X, O, X, O, X, O, E, E, E]);

        for bot in bots.iter_mut() {
            let index = bot.choose_move(&mut board, Player::X).unwrap();
            assert!([6, 7, 8].contains(&index), "{} picked {}", bot.name(), index);
        }
    }
}
