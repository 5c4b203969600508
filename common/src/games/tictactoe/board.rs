use std::ops::{Deref, DerefMut};

use crate::error::{GameError, GameResult};
use super::types::{CELL_COUNT, Cell, Move, Player};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: Move) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn place(&mut self, index: Move, player: Player) -> GameResult<()> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::OutOfRange { index })?;

        if *cell != Cell::Empty {
            return Err(GameError::OccupiedCell { index });
        }

        *cell = player.into();
        Ok(())
    }

    /// Clears a cell. Only meant for undoing a `place`; indices past the board are ignored.
    pub fn remove(&mut self, index: Move) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Empty;
        }
    }

    /// Places a mark that is taken back when the returned guard goes out of scope.
    pub fn place_scoped(&mut self, index: Move, player: Player) -> GameResult<PlacedMark<'_>> {
        self.place(index, player)?;
        Ok(PlacedMark { board: self, index })
    }

    /// Empty indices in ascending order, recomputed on every call.
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Cell::Empty)
    }

    pub fn count(&self, player: Player) -> usize {
        let target = Cell::from(player);
        self.cells.iter().filter(|&&cell| cell == target).count()
    }
}

/// A mark placed through [`Board::place_scoped`]; dropping it empties the cell again.
pub struct PlacedMark<'a> {
    board: &'a mut Board,
    index: Move,
}

impl Deref for PlacedMark<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for PlacedMark<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for PlacedMark<'_> {
    fn drop(&mut self) {
        self.board.remove(self.index);
    }
}
