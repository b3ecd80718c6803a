//! Game state with move history, and the controller that render surfaces
//! drive.
//!
//! [`GameState`] holds the pure transitions. [`GameController`] owns one
//! state, commits transitions to it and tells its observers about every
//! change.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::board::{Board, Mark, TileId};
use crate::game::{self, apply_move, Conclusion, MoveError, Status};
use crate::view::{GameView, MoveEntry};

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum JumpError {
    #[error("no move #{requested}, history holds {len} entries")]
    OutOfRange { requested: usize, len: usize },
}

/// Why a deserialized [`GameState`] was refused.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum StateError {
    #[error("history must start with the empty board")]
    BadStart,
    #[error("board #{0} does not follow from the one before it")]
    BadStep(usize),
    #[error("current move {current_move} is past the end of a {len} entry history")]
    CurrentOutOfRange { current_move: usize, len: usize },
}

/// Every board played so far plus the one currently shown.
///
/// `history[0]` is the empty board, each later board is one legal move on from
/// the previous one, and `current_move < history.len()`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    history: Vec<Board>,
    current_move: usize,
}

#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Board>,
    current_move: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = StateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let RawGameState {
            history,
            current_move,
        } = raw;

        if history.first() != Some(&Board::empty()) {
            return Err(StateError::BadStart);
        }
        for (k, pair) in history.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            let mut changed = prev.diff(next);
            let legal = match (changed.next(), changed.next()) {
                (Some(tile), None) => {
                    apply_move(prev, tile, Mark::for_move(k)).as_ref() == Ok(next)
                }
                _ => false,
            };
            if !legal {
                return Err(StateError::BadStep(k + 1));
            }
        }
        if current_move >= history.len() {
            return Err(StateError::CurrentOutOfRange {
                current_move,
                len: history.len(),
            });
        }

        Ok(Self {
            history,
            current_move,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![Board::empty()],
            current_move: 0,
        }
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    pub fn next_mark(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    pub fn status(&self) -> Status {
        Status::of(self.current_board(), self.next_mark())
    }

    pub fn conclusion(&self) -> Option<Conclusion> {
        game::conclusion(self.current_board())
    }

    pub fn moves(&self) -> Vec<MoveEntry> {
        (0..self.history.len()).map(MoveEntry::new).collect()
    }

    /// Plays the next mark on `tile` from the board currently shown.
    ///
    /// Any boards after the current one are dropped.
    pub fn play(&self, tile: TileId) -> Result<Self, MoveError> {
        let board = apply_move(self.current_board(), tile, self.next_mark())?;
        let mut history = self.history[..=self.current_move].to_vec();
        history.push(board);
        Ok(Self {
            current_move: history.len() - 1,
            history,
        })
    }

    pub fn jump_to(&self, index: usize) -> Result<Self, JumpError> {
        if index >= self.history.len() {
            return Err(JumpError::OutOfRange {
                requested: index,
                len: self.history.len(),
            });
        }
        Ok(Self {
            history: self.history.clone(),
            current_move: index,
        })
    }

    pub fn view(&self) -> GameView {
        GameView {
            board: *self.current_board(),
            status: self.status(),
            current_move: self.current_move,
            moves: self.moves(),
            conclusion: self.conclusion(),
        }
    }
}

pub type Observer = Box<dyn FnMut(&GameView)>;

/// Entry points for a render surface.
///
/// Rejected moves leave the state alone and notify nobody; callers are free to
/// ignore the returned error.
#[derive(Default)]
pub struct GameController {
    state: GameState,
    observers: Vec<Observer>,
}

impl fmt::Debug for GameController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameController")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn view(&self) -> GameView {
        self.state.view()
    }

    /// Called with the new view after every committed move or jump, in
    /// registration order.
    pub fn subscribe(&mut self, observer: impl FnMut(&GameView) + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[instrument(skip(self), fields(move_number = self.state.current_move()))]
    pub fn on_cell_clicked(&mut self, tile: TileId) -> Result<(), MoveError> {
        let mark = self.state.next_mark();
        match self.state.play(tile) {
            Ok(next) => {
                let dropped = self.state.history().len() - 1 - self.state.current_move();
                info!(%mark, %tile, dropped, "move played");
                self.commit(next);
                Ok(())
            }
            Err(e) => {
                debug!(%mark, %tile, error = %e, "move rejected");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub fn on_history_entry_clicked(&mut self, index: usize) -> Result<(), JumpError> {
        let next = self.state.jump_to(index)?;
        info!(from = self.state.current_move(), to = index, "jumped");
        self.commit(next);
        Ok(())
    }

    fn commit(&mut self, next: GameState) {
        self.state = next;
        let view = self.state.view();
        for observer in &mut self.observers {
            observer(&view);
        }
    }
}
