use std::fmt::Display;

use serde::Serialize;
use thiserror::Error;

use crate::board::{Board, Mark, TileId};
use crate::win::check_winner;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum MoveError {
    #[error("tile {0} is already marked")]
    CellOccupied(TileId),
    #[error("game is over, {0} has won")]
    GameOver(Mark),
}

/// Places `mark` on `tile`, returning the resulting board.
///
/// The move is rejected if the tile is taken or the board already has a
/// winner. `board` itself is never modified.
pub fn apply_move(board: &Board, tile: TileId, mark: Mark) -> Result<Board, MoveError> {
    if !board.is_vacant(tile) {
        return Err(MoveError::CellOccupied(tile));
    }
    if let Some(winner) = check_winner(board) {
        return Err(MoveError::GameOver(winner));
    }
    Ok(board.with_mark(tile, mark))
}

/// The status line shown above the board.
///
/// A full board without a winner still reports the next player. Use
/// [`conclusion`] to detect a draw.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum Status {
    Winner(Mark),
    NextPlayer(Mark),
}

impl Status {
    pub fn of(board: &Board, next: Mark) -> Self {
        match check_winner(board) {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(next),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(mark) => write!(f, "Winner: {mark}"),
            Status::NextPlayer(mark) => write!(f, "Next player: {mark}"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum Conclusion {
    Win(Mark),
    Draw,
}

impl Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conclusion::Win(mark) => write!(f, "{mark} won!"),
            Conclusion::Draw => write!(f, "Draw."),
        }
    }
}

/// `None` while moves are still possible.
pub fn conclusion(board: &Board) -> Option<Conclusion> {
    if let Some(winner) = check_winner(board) {
        return Some(Conclusion::Win(winner));
    }
    if board.is_full() {
        return Some(Conclusion::Draw);
    }
    None
}
