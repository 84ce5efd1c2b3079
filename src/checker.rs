//! # Answer checker
//!
//! Compares a participant's chain against the jury's (reference) chain. Both
//! answers are read the same way: a length, then that many tiles, each of
//! which must be an unused input tile touching its left neighbour. The
//! participant is accepted when the lengths are equal; the tile order does
//! not have to match the jury's.
//!
//! A broken jury answer, or a participant beating the jury, means the
//! reference solver is wrong, and is reported as [`Verdict::Fail`].

use crate::tile::{OrientedTile, ParseTileError, Tile};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("missing chain length")]
    MissingLength,
    #[error("chain length {0:?} is not an integer")]
    BadLength(String),
    #[error("chain length {length} exceeds the number of tiles ({tiles})")]
    TooLong { length: usize, tiles: usize },
    #[error("expected {expected} tiles, found {found}")]
    MissingTiles { expected: usize, found: usize },
    #[error("tile {position}: not a valid domino piece ({source})")]
    Tile {
        position: usize,
        source: ParseTileError,
    },
    #[error("tile {position}: piece {tile} is not available")]
    Unavailable { position: usize, tile: OrientedTile },
    #[error("tile {position}: {left} does not connect to {right}")]
    Disconnected {
        position: usize,
        left: OrientedTile,
        right: OrientedTile,
    },
    #[error("unexpected output after the chain: {0:?}")]
    Trailing(String),
}

/// Reads one answer and checks it against the input tiles. Returns the chain length.
pub fn read_answer(answer: &str, tiles: &[Tile]) -> Result<usize, AnswerError> {
    let mut tokens = answer.split_ascii_whitespace();
    let length = tokens.next().ok_or(AnswerError::MissingLength)?;
    let length: usize = length
        .parse()
        .map_err(|_| AnswerError::BadLength(length.to_string()))?;
    if length > tiles.len() {
        return Err(AnswerError::TooLong {
            length,
            tiles: tiles.len(),
        });
    }

    let mut used = vec![false; tiles.len()];
    let mut last: Option<OrientedTile> = None;
    for position in 1..=length {
        let token = tokens.next().ok_or(AnswerError::MissingTiles {
            expected: length,
            found: position - 1,
        })?;
        let tile: OrientedTile = token
            .parse()
            .map_err(|source| AnswerError::Tile { position, source })?;
        let slot = (0..tiles.len())
            .find(|&i| !used[i] && tiles[i].same_pair(&Tile::from(tile)))
            .ok_or(AnswerError::Unavailable { position, tile })?;
        used[slot] = true;
        if let Some(left) = last
            && left.right != tile.left
        {
            return Err(AnswerError::Disconnected {
                position,
                left,
                right: tile,
            });
        }
        last = Some(tile);
    }
    match tokens.next() {
        Some(extra) => Err(AnswerError::Trailing(extra.to_string())),
        None => Ok(length),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted { length: usize },
    WrongAnswer(String),
    Fail(String),
}

impl Verdict {
    /// Status tag used in `!log status` lines.
    pub fn status(&self) -> &'static str {
        match self {
            Verdict::Accepted { .. } => "AC",
            Verdict::WrongAnswer(_) => "WA",
            Verdict::Fail(_) => "FAIL",
        }
    }

    /// testlib exit codes.
    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Accepted { .. } => 0,
            Verdict::WrongAnswer(_) => 1,
            Verdict::Fail(_) => 3,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted { length } => write!(f, "AC: answer = {length}"),
            Verdict::WrongAnswer(msg) => write!(f, "WA: {msg}"),
            Verdict::Fail(msg) => write!(f, "FAIL: {msg}"),
        }
    }
}

/// Judges the participant `output` against the jury `answer`.
pub fn check(tiles: &[Tile], output: &str, answer: &str) -> Verdict {
    let jury = match read_answer(answer, tiles) {
        Ok(n) => n,
        Err(e) => return Verdict::Fail(format!("jury answer is invalid: {e}")),
    };
    let participant = match read_answer(output, tiles) {
        Ok(n) => n,
        Err(e) => return Verdict::WrongAnswer(e.to_string()),
    };
    match jury.cmp(&participant) {
        std::cmp::Ordering::Greater => Verdict::WrongAnswer(format!(
            "jury has the better answer: jury = {jury}, participant = {participant}"
        )),
        std::cmp::Ordering::Equal => Verdict::Accepted {
            length: participant,
        },
        std::cmp::Ordering::Less => Verdict::Fail(format!(
            "participant has the better answer: jury = {jury}, participant = {participant}"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_chain;
    use crate::search::find_longest_chain;

    fn tiles(s: &str) -> Vec<Tile> {
        s.split_whitespace().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn accepts_reference_answer() {
        let input = tiles("0|1 1|2 2|3 5|5");
        let answer = format_chain(&find_longest_chain(&input));
        assert_eq!(
            check(&input, &answer, &answer),
            Verdict::Accepted { length: 3 }
        );
    }

    #[test]
    fn accepts_other_orderings_of_equal_length() {
        let input = tiles("0|1 1|2 2|3");
        let answer = "3\n0|1 1|2 2|3\n";
        let reversed = "3\n3|2 2|1 1|0\n";
        assert_eq!(
            check(&input, reversed, answer),
            Verdict::Accepted { length: 3 }
        );
    }

    #[test]
    fn empty_answers() {
        let input = tiles("0|0 1|1");
        assert_eq!(read_answer("0\n", &input), Ok(0));
        assert_eq!(read_answer("0\n", &[]), Ok(0));
        assert!(matches!(
            check(&input, "0\n", "1\n1|1\n"),
            Verdict::WrongAnswer(_)
        ));
    }

    #[test]
    fn shorter_answer_is_wrong() {
        let input = tiles("0|1 1|2 2|3");
        let verdict = check(&input, "2\n1|2 2|3\n", "3\n0|1 1|2 2|3\n");
        assert_eq!(
            verdict,
            Verdict::WrongAnswer(
                "jury has the better answer: jury = 3, participant = 2".to_string()
            )
        );
        assert_eq!(verdict.status(), "WA");
        assert_eq!(verdict.exit_code(), 1);
    }

    #[test]
    fn longer_answer_fails_the_jury() {
        let input = tiles("0|1 1|2 2|3");
        let verdict = check(&input, "3\n0|1 1|2 2|3\n", "1\n0|1\n");
        assert!(matches!(verdict, Verdict::Fail(_)));
        assert_eq!(verdict.exit_code(), 3);
    }

    #[test]
    fn broken_jury_answer_fails() {
        let input = tiles("0|1 1|2");
        let verdict = check(&input, "2\n0|1 1|2\n", "2\n0|1 2|1\n");
        assert_eq!(
            verdict,
            Verdict::Fail("jury answer is invalid: tile 2: 0|1 does not connect to 2|1".to_string())
        );
    }

    #[test]
    fn rejects_invalid_chains() {
        let input = tiles("0|1 1|2 2|2");
        let cases = [
            ("", AnswerError::MissingLength),
            ("x\n", AnswerError::BadLength("x".to_string())),
            ("4\n", AnswerError::TooLong { length: 4, tiles: 3 }),
            (
                "2\n0|1\n",
                AnswerError::MissingTiles {
                    expected: 2,
                    found: 1,
                },
            ),
            (
                "1\n0-1\n",
                AnswerError::Tile {
                    position: 1,
                    source: ParseTileError::Malformed("0-1".to_string()),
                },
            ),
            (
                "2\n0|1 1|3\n",
                AnswerError::Unavailable {
                    position: 2,
                    tile: OrientedTile::new(1, 3),
                },
            ),
            (
                "2\n2|2 2|2\n",
                AnswerError::Unavailable {
                    position: 2,
                    tile: OrientedTile::new(2, 2),
                },
            ),
            (
                "2\n0|1 2|1\n",
                AnswerError::Disconnected {
                    position: 2,
                    left: OrientedTile::new(0, 1),
                    right: OrientedTile::new(2, 1),
                },
            ),
            ("1\n0|1 1|2\n", AnswerError::Trailing("1|2".to_string())),
        ];
        for (answer, expected) in cases {
            assert_eq!(read_answer(answer, &input), Err(expected), "answer: {answer:?}");
        }
    }

    #[test]
    fn flipped_tokens_match_input_tiles() {
        let input = tiles("3|1 1|0");
        assert_eq!(read_answer("2\n0|1 1|3\n", &input), Ok(2));
    }
}
