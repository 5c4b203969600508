use super::board::Board;
use super::types::Move;

/// Source of legal moves for the search, independent of how a position is stored.
pub trait MoveGenerator {
    fn legal_moves(&self) -> Vec<Move>;
}

impl MoveGenerator for Board {
    fn legal_moves(&self) -> Vec<Move> {
        self.empty_cells()
    }
}

pub fn get_available_moves<G: MoveGenerator + ?Sized>(position: &G) -> Vec<Move> {
    position.legal_moves()
}
