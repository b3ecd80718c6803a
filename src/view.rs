use std::fmt::Display;

use ron::ser::PrettyConfig;
use serde::Serialize;

use crate::board::Board;
use crate::game::{Conclusion, Status};

/// One entry of the history list.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct MoveEntry {
    pub index: usize,
    pub description: String,
}

impl MoveEntry {
    pub fn new(index: usize) -> Self {
        let description = if index > 0 {
            format!("Go to move #{index}")
        } else {
            "Go to game start".to_string()
        };
        Self { index, description }
    }
}

impl Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.index, self.description)
    }
}

/// Everything a render surface needs to draw the game.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct GameView {
    pub board: Board,
    pub status: Status,
    pub current_move: usize,
    pub moves: Vec<MoveEntry>,
    pub conclusion: Option<Conclusion>,
}

impl GameView {
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, PrettyConfig::default())
    }
}
