use tictactoe_common::games::tictactoe::{BOARD_SIZE, Board, Cell};

const RULE: &str = "-------------------";

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    for row in board.cells().chunks(BOARD_SIZE) {
        let marks: Vec<String> = row.iter().map(|cell| cell.as_char().to_string()).collect();
        out.push_str(&format!("|  {}  |\n", marks.join("  |  ")));
        out.push_str(RULE);
        out.push('\n');
    }
    out
}

/// Board with empty cells replaced by their 1-based move number, shown once as a key.
pub fn render_move_key(board: &Board) -> String {
    let mut out = String::new();
    for (row_index, row) in board.cells().chunks(BOARD_SIZE).enumerate() {
        let labels: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, cell)| match cell {
                Cell::Empty => (row_index * BOARD_SIZE + col + 1).to_string(),
                other => other.as_char().to_string(),
            })
            .collect();
        out.push_str(&format!(" {}\n", labels.join(" | ")));
    }
    out
}
