pub mod board;
pub mod cli;
pub mod controller;
pub mod game;
pub mod term;
pub mod view;
pub mod win;

pub use board::{Board, Mark, TileId};
pub use controller::{GameController, GameState, JumpError, StateError};
pub use game::{apply_move, Conclusion, MoveError, Status};
pub use view::{GameView, MoveEntry};
pub use win::check_winner;
