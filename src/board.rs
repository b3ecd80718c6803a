use std::{
    fmt::Display,
    ops::{Index, Not},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark that plays move `move_number` (0-based). X always opens.
    pub const fn for_move(move_number: usize) -> Self {
        if move_number % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }
}

impl Not for Mark {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Mark::O => Mark::X,
            Mark::X => Mark::O,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::O => write!(f, "O"),
            Mark::X => write!(f, "X"),
        }
    }
}

// rank:
// 1: 0 1 2
// 2: 3 4 5
// 3: 6 7 8
//    A B C : file
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct TileId(u8);
impl TileId {
    pub const A1: TileId = TileId(0);
    pub const B1: TileId = TileId(1);
    pub const C1: TileId = TileId(2);
    pub const A2: TileId = TileId(3);
    pub const B2: TileId = TileId(4);
    pub const C2: TileId = TileId(5);
    pub const A3: TileId = TileId(6);
    pub const B3: TileId = TileId(7);
    pub const C3: TileId = TileId(8);

    pub const ALL: [TileId; 9] = [
        Self::A1,
        Self::B1,
        Self::C1,
        Self::A2,
        Self::B2,
        Self::C2,
        Self::A3,
        Self::B3,
        Self::C3,
    ];

    pub const fn new(index: u8) -> Option<Self> {
        if index >= 9 {
            None
        } else {
            Some(Self(index))
        }
    }

    /// Row-major index, 0 is top left.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = (b'a' + self.0 % 3) as char;
        let rank = self.0 / 3 + 1;
        write!(f, "{file}{rank}")
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("invalid tile `{0}`, expected a1..c3 or 0..8")]
pub struct ParseTileError(String);

impl FromStr for TileId {
    type Err = ParseTileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTileError(s.to_string());
        match s.trim().to_ascii_lowercase().as_bytes() {
            [digit @ b'0'..=b'8'] => TileId::new(digit - b'0').ok_or_else(err),
            [file @ b'a'..=b'c', rank @ b'1'..=b'3'] => {
                TileId::new((rank - b'1') * 3 + (file - b'a')).ok_or_else(err)
            }
            _ => Err(err()),
        }
    }
}

/// A 3x3 position. Boards are plain values: every move produces a new one.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct Board {
    tiles: [Option<Mark>; 9],
}

impl Board {
    pub const fn empty() -> Self {
        Self { tiles: [None; 9] }
    }

    /// Copy of this board with `tile` set to `mark`. Does not check occupancy.
    pub fn with_mark(&self, tile: TileId, mark: Mark) -> Self {
        let mut next = *self;
        next.tiles[tile.index()] = Some(mark);
        next
    }

    pub fn is_vacant(&self, tile: TileId) -> bool {
        self[tile].is_none()
    }

    pub fn mark_count(&self) -> usize {
        self.tiles.iter().flatten().count()
    }

    pub fn is_full(&self) -> bool {
        self.mark_count() == self.tiles.len()
    }

    pub fn tiles(&self) -> &[Option<Mark>; 9] {
        &self.tiles
    }

    /// Tiles whose contents differ between `self` and `other`.
    pub fn diff<'a>(&'a self, other: &'a Board) -> impl Iterator<Item = TileId> + 'a {
        TileId::ALL
            .into_iter()
            .filter(move |&tile| self[tile] != other[tile])
    }
}

impl From<[Option<Mark>; 9]> for Board {
    fn from(tiles: [Option<Mark>; 9]) -> Self {
        Self { tiles }
    }
}

impl Index<TileId> for Board {
    type Output = Option<Mark>;

    fn index(&self, tile: TileId) -> &Self::Output {
        &self.tiles[tile.index()]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, rank) in self.tiles.chunks_exact(3).enumerate() {
            write!(f, "{}│ ", i + 1)?;
            for tile in rank {
                match tile {
                    Some(mark) => write!(f, "{mark}")?,
                    None => write!(f, "-")?,
                };
            }

            writeln!(f)?;
        }
        write!(f, " ╰─────\n   ABC")?;
        Ok(())
    }
}
