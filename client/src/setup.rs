use std::io::{BufRead, Write};
use std::time::Duration;

use tictactoe_common::games::tictactoe::{BotType, Player};

use crate::config::ClientConfig;
use crate::console::Console;
use crate::error::ClientResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSetup {
    pub human: Player,
    pub bot_type: BotType,
    pub human_first: bool,
    pub bot_delay: Duration,
}

impl GameSetup {
    pub fn bot(&self) -> Player {
        self.human.opponent()
    }

    pub fn first_player(&self) -> Player {
        if self.human_first { self.human } else { self.bot() }
    }
}

/// Fills the setup from config, asking on the console only for what is missing.
pub fn resolve_setup<R: BufRead, W: Write>(
    config: &ClientConfig,
    console: &mut Console<R, W>,
) -> ClientResult<GameSetup> {
    let human = match config.player_mark {
        Some(mark) => mark,
        None => console.ask_mark()?,
    };

    let bot_type = match config.difficulty {
        Some(bot_type) => bot_type,
        None => {
            if console.ask_yes_no("Do you want to play the AI?")? {
                BotType::Minimax
            } else {
                BotType::Random
            }
        }
    };

    let human_first = match config.human_first {
        Some(first) => first,
        None => console.ask_yes_no("Do you want to start first?")?,
    };

    Ok(GameSetup {
        human,
        bot_type,
        human_first,
        bot_delay: Duration::from_millis(config.bot_delay_ms),
    })
}
