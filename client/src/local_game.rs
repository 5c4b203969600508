use std::io::{BufRead, Write};

use tictactoe_common::games::tictactoe::{GameStatus, MoveStrategy, TicTacToeGameState};
use tictactoe_common::{debug_log, log};

use crate::console::Console;
use crate::error::ClientResult;
use crate::render::render_move_key;
use crate::setup::GameSetup;

/// Plays one game between the console user and `bot`, returning the final status.
pub fn run_game<R, W, S>(
    console: &mut Console<R, W>,
    setup: &GameSetup,
    bot: &mut S,
) -> ClientResult<GameStatus>
where
    R: BufRead,
    W: Write,
    S: MoveStrategy + ?Sized,
{
    let mut state = TicTacToeGameState::new(setup.first_player());
    log!(
        "New game: human plays {}, {} bot plays {}, {} moves first",
        setup.human,
        bot.name(),
        setup.bot(),
        setup.first_player()
    );

    console.say(&render_move_key(state.board()))?;
    console.show_board(state.board())?;

    while !state.is_over() {
        let player = state.current_player();
        let index = if player == setup.human {
            console.ask_move(state.board())?
        } else {
            console.say("Computer has played . . . ")?;
            if !setup.bot_delay.is_zero() {
                std::thread::sleep(setup.bot_delay);
            }
            bot.choose_move(state.board_mut(), player)?
        };

        state.place_mark(index)?;
        debug_log!("{} took cell {} (move {})", player, index + 1, state.move_count());
        console.show_board(state.board())?;
    }

    let status = state.status();
    match status {
        GameStatus::Won(winner) => {
            console.say(&format!("{} has won!", winner))?;
            log!(
                "Game over after {} moves: {} won ({})",
                state.move_count(),
                winner,
                if winner == setup.human { "human" } else { "bot" }
            );
        }
        GameStatus::Draw => {
            console.say("Game has ended in a draw")?;
            log!("Game over after {} moves: draw", state.move_count());
        }
        GameStatus::InProgress => {}
    }

    Ok(status)
}
