//! Win detection.

use tracing::instrument;

use crate::board::{Board, Mark, TileId};

/// Every line that wins the game, checked in this order.
pub const WINNING_LINES: [[TileId; 3]; 8] = [
    // rows
    [TileId::A1, TileId::B1, TileId::C1],
    [TileId::A2, TileId::B2, TileId::C2],
    [TileId::A3, TileId::B3, TileId::C3],
    // columns
    [TileId::A1, TileId::A2, TileId::A3],
    [TileId::B1, TileId::B2, TileId::B3],
    [TileId::C1, TileId::C2, TileId::C3],
    // diagonals
    [TileId::A1, TileId::B2, TileId::C3],
    [TileId::C1, TileId::B2, TileId::A3],
];

/// Returns the mark holding the first complete line, if any.
///
/// A full board without a line also returns `None`.
#[instrument(level = "trace", ret)]
pub fn check_winner(board: &Board) -> Option<Mark> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let mark = board[a]?;
        (board[b] == Some(mark) && board[c] == Some(mark)).then_some(mark)
    })
}
