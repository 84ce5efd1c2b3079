//! Reading solver input and writing solver output.
//!
//! The solver trusts the validator, so input is read as whitespace separated
//! tokens. Output follows the judged format exactly: the length on the first
//! line, then the chain on a second line only when it is not empty.

use crate::chain::Chain;
use crate::tile::{MAX_TILES, OrientedTile, ParseTileError, Tile};
use itertools::Itertools;
use proconio::source::Source;
use proconio::source::once::OnceSource;
use serde::Serialize;
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
    #[error("missing tile count")]
    MissingCount,
    #[error("invalid tile count: {0:?}")]
    BadCount(String),
    #[error("tile count {0} exceeds {max}", max = MAX_TILES)]
    TooManyTiles(usize),
    #[error("expected {expected} tiles, found {found}")]
    MissingTiles { expected: usize, found: usize },
    #[error(transparent)]
    Tile(#[from] ParseTileError),
}

/// Parses `n` followed by `n` tile tokens. Anything after the last tile is ignored.
pub fn parse_tiles(input: &str) -> Result<Vec<Tile>, InputError> {
    let mut src = OnceSource::from(input);
    let count = src.next_token().ok_or(InputError::MissingCount)?;
    let n: usize = count
        .parse()
        .map_err(|_| InputError::BadCount(count.to_string()))?;
    if n > MAX_TILES {
        return Err(InputError::TooManyTiles(n));
    }
    let mut tiles = Vec::with_capacity(n);
    for found in 0..n {
        let token = src.next_token().ok_or(InputError::MissingTiles {
            expected: n,
            found,
        })?;
        tiles.push(token.parse()?);
    }
    Ok(tiles)
}

pub fn read_tiles_from_stdin() -> Result<Vec<Tile>, InputError> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    parse_tiles(&input)
}

/// Renders the judged text output of a chain.
pub fn format_chain(chain: &Chain) -> String {
    if chain.is_empty() {
        return "0\n".to_string();
    }
    format!("{}\n{}\n", chain.len(), chain.tiles().join(" "))
}

/// Renders a tile list in the judged input format. Like the output, an empty
/// list has no second line.
pub fn format_tiles(tiles: &[Tile]) -> String {
    if tiles.is_empty() {
        return "0\n".to_string();
    }
    format!("{}\n{}\n", tiles.len(), tiles.iter().join(" "))
}

/// JSON form of a solver answer.
#[derive(Debug, Serialize)]
pub struct Answer {
    pub length: usize,
    pub chain: Vec<OrientedTile>,
}

impl From<&Chain> for Answer {
    fn from(chain: &Chain) -> Self {
        Self {
            length: chain.len(),
            chain: chain.tiles().collect(),
        }
    }
}
