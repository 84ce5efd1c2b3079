//! # Tiles
//!
//! A tile is an unordered pair of pip values. The input keeps the order in
//! which the two values were written, which is also the orientation a tile
//! takes when it starts a chain. Once placed, a tile becomes an
//! [`OrientedTile`] with a fixed left and right face.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest pip value of a double-six set.
pub const MAX_PIP: u8 = 6;

/// Largest number of tiles in a single test.
pub const MAX_TILES: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTileError {
    #[error("not a domino tile: {0:?} (expected `a|b`)")]
    Malformed(String),
    #[error("pip value {value} out of range 0..={max} in {token:?}", max = MAX_PIP)]
    OutOfRange { token: String, value: u8 },
}

/// A tile as read from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub a: u8,
    pub b: u8,
}

impl Tile {
    pub fn new(a: u8, b: u8) -> Self {
        Self { a, b }
    }

    pub fn is_double(&self) -> bool {
        self.a == self.b
    }

    pub fn contains(&self, pip: u8) -> bool {
        self.a == pip || self.b == pip
    }

    /// The unordered identity of the tile, smaller value first.
    pub fn key(&self) -> (u8, u8) {
        (self.a.min(self.b), self.a.max(self.b))
    }

    pub fn same_pair(&self, other: &Tile) -> bool {
        self.key() == other.key()
    }

    pub fn as_read(&self) -> OrientedTile {
        OrientedTile::new(self.a, self.b)
    }

    /// Orientation whose right face touches a chain starting with `pip`.
    pub fn facing_left_of(&self, pip: u8) -> Option<OrientedTile> {
        if self.b == pip {
            Some(OrientedTile::new(self.a, self.b))
        } else if self.a == pip {
            Some(OrientedTile::new(self.b, self.a))
        } else {
            None
        }
    }

    /// Orientation whose left face touches a chain ending with `pip`.
    pub fn facing_right_of(&self, pip: u8) -> Option<OrientedTile> {
        if self.a == pip {
            Some(OrientedTile::new(self.a, self.b))
        } else if self.b == pip {
            Some(OrientedTile::new(self.b, self.a))
        } else {
            None
        }
    }
}

impl From<OrientedTile> for Tile {
    fn from(t: OrientedTile) -> Self {
        Tile::new(t.left, t.right)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.a, self.b)
    }
}

impl FromStr for Tile {
    type Err = ParseTileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<OrientedTile>().map(Tile::from)
    }
}

/// A tile placed in a chain, read from left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct OrientedTile {
    pub left: u8,
    pub right: u8,
}

impl OrientedTile {
    pub fn new(left: u8, right: u8) -> Self {
        Self { left, right }
    }

    pub fn flipped(&self) -> Self {
        Self::new(self.right, self.left)
    }
}

impl fmt::Display for OrientedTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.left, self.right)
    }
}

impl FromStr for OrientedTile {
    type Err = ParseTileError;

    /// Parses exactly `a|b` where `a` and `b` are single digits within the pip range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let &[a, b'|', b] = s.as_bytes() else {
            return Err(ParseTileError::Malformed(s.to_string()));
        };
        if !a.is_ascii_digit() || !b.is_ascii_digit() {
            return Err(ParseTileError::Malformed(s.to_string()));
        }
        let (a, b) = (a - b'0', b - b'0');
        for value in [a, b] {
            if value > MAX_PIP {
                return Err(ParseTileError::OutOfRange {
                    token: s.to_string(),
                    value,
                });
            }
        }
        Ok(Self::new(a, b))
    }
}

impl From<OrientedTile> for String {
    fn from(t: OrientedTile) -> Self {
        t.to_string()
    }
}

impl TryFrom<String> for OrientedTile {
    type Error = ParseTileError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
