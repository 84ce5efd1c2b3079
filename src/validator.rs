//! # Input validator
//!
//! Strict check of a test input, byte by byte: the tile count on its own
//! line, then the tiles separated by single spaces and terminated by a
//! newline, then end of file. Tiles are `a|b` with digits in the pip range,
//! and no unordered pair may appear twice.

use crate::tile::{MAX_TILES, ParseTileError, Tile};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("line {line}, column {column}: expected {expected}, found {found}")]
    Unexpected {
        line: usize,
        column: usize,
        expected: &'static str,
        found: String,
    },
    #[error("line {line}: tile count {count:?} is not an integer in 0..={max}", max = MAX_TILES)]
    BadCount { line: usize, count: String },
    #[error("line {line}, column {column}: {source}")]
    Tile {
        line: usize,
        column: usize,
        source: ParseTileError,
    },
    #[error("line {line}, column {column}: tile {token} repeats tile {previous}")]
    DuplicateTile {
        line: usize,
        column: usize,
        token: String,
        previous: String,
    },
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Reader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn advance(&mut self) {
        if self.peek() == Some(b'\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += 1;
    }

    fn describe_next(&self) -> String {
        match self.peek() {
            None => "end of file".to_string(),
            Some(b'\n') => "newline".to_string(),
            Some(b' ') => "space".to_string(),
            Some(b) if b.is_ascii_graphic() => format!("{:?}", b as char),
            Some(b) => format!("byte 0x{b:02x}"),
        }
    }

    fn unexpected(&self, expected: &'static str) -> ValidationError {
        ValidationError::Unexpected {
            line: self.line,
            column: self.column,
            expected,
            found: self.describe_next(),
        }
    }

    /// Reads a maximal run of visible characters.
    fn token(&mut self, expected: &'static str) -> Result<&'a str, ValidationError> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_graphic()) {
            self.advance();
        }
        if start == self.pos {
            return Err(self.unexpected(expected));
        }
        let bytes = self.bytes;
        // Only ASCII was consumed, so the slice stays on char boundaries.
        std::str::from_utf8(&bytes[start..self.pos]).map_err(|_| self.unexpected(expected))
    }

    fn expect(&mut self, byte: u8, expected: &'static str) -> Result<(), ValidationError> {
        if self.peek() != Some(byte) {
            return Err(self.unexpected(expected));
        }
        self.advance();
        Ok(())
    }

    fn expect_eof(&self) -> Result<(), ValidationError> {
        match self.peek() {
            None => Ok(()),
            Some(_) => Err(self.unexpected("end of file")),
        }
    }
}

fn parse_count(token: &str) -> Option<usize> {
    let canonical = token == "0" || !token.starts_with('0');
    if !canonical || token.len() > 2 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok().filter(|&n| n <= MAX_TILES)
}

/// Validates a complete test input and returns its tiles.
pub fn validate(input: &str) -> Result<Vec<Tile>, ValidationError> {
    let mut reader = Reader::new(input);

    let line = reader.line;
    let count = reader.token("tile count")?;
    let n = parse_count(count).ok_or_else(|| ValidationError::BadCount {
        line,
        count: count.to_string(),
    })?;
    reader.expect(b'\n', "newline after tile count")?;

    let mut tiles = Vec::with_capacity(n);
    let mut seen: HashMap<(u8, u8), &str> = HashMap::new();
    for i in 0..n {
        let (line, column) = (reader.line, reader.column);
        let token = reader.token("domino tile")?;
        let tile: Tile = token.parse().map_err(|source| ValidationError::Tile {
            line,
            column,
            source,
        })?;
        if let Some(previous) = seen.insert(tile.key(), token) {
            return Err(ValidationError::DuplicateTile {
                line,
                column,
                token: token.to_string(),
                previous: previous.to_string(),
            });
        }
        tiles.push(tile);
        if i + 1 == n {
            reader.expect(b'\n', "newline after last tile")?;
        } else {
            reader.expect(b' ', "single space between tiles")?;
        }
    }
    reader.expect_eof()?;
    Ok(tiles)
}
