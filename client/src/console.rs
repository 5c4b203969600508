use std::io::{BufRead, Write};

use tictactoe_common::games::tictactoe::{Board, CELL_COUNT, Move, Player};

use crate::error::{ClientError, ClientResult};
use crate::render::render_board;

const INVALID_CHOICE: &str = "Invalid choice";

/// Line-based prompts over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: &str) -> ClientResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn show_board(&mut self, board: &Board) -> ClientResult<()> {
        write!(self.output, "{}", render_board(board))?;
        self.output.flush()?;
        Ok(())
    }

    pub fn ask_mark(&mut self) -> ClientResult<Player> {
        loop {
            let answer = self.read_answer("Select X or O: ")?;
            match answer.parse::<Player>() {
                Ok(player) => return Ok(player),
                Err(_) => self.reject()?,
            }
        }
    }

    pub fn ask_yes_no(&mut self, question: &str) -> ClientResult<bool> {
        let prompt = format!("{} [ y / n ]: ", question);
        loop {
            match self.read_answer(&prompt)?.to_ascii_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.reject()?,
            }
        }
    }

    /// Asks for a 1-based cell number until it names an empty cell; returns the 0-based index.
    pub fn ask_move(&mut self, board: &Board) -> ClientResult<Move> {
        let legal = board.empty_cells();
        loop {
            let answer = self.read_answer(&format!("Select your move [1 - {}]: ", CELL_COUNT))?;
            let choice = answer
                .parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1))
                .filter(|index| legal.contains(index));

            match choice {
                Some(index) => return Ok(index),
                None => self.reject()?,
            }
        }
    }

    fn reject(&mut self) -> ClientResult<()> {
        writeln!(self.output, "{}\n", INVALID_CHOICE)?;
        Ok(())
    }

    fn read_answer(&mut self, prompt: &str) -> ClientResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ClientError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}
