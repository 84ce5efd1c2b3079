// # Domino Chain: reference solver and judging tools
//
// This crate holds everything behind a small judged problem: given at most
// eight domino tiles, print a longest chain that can be built from them.
//
// The reference solver lives in `search`; the binaries under `src/bin` wrap it
// together with the input validator, the answer checker and the test
// generator used to prepare the problem package.

/// A trait for conveniently updating a value to its minimum or maximum.
pub trait SetMinMax {
    /// If `v` is less than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmin(&mut self, v: Self) -> bool;
    /// If `v` is greater than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmax(&mut self, v: Self) -> bool;
}
impl<T> SetMinMax for T
where
    T: PartialOrd,
{
    fn setmin(&mut self, v: T) -> bool {
        *self > v && {
            *self = v;
            true
        }
    }
    fn setmax(&mut self, v: T) -> bool {
        *self < v && {
            *self = v;
            true
        }
    }
}

/// Tiles, orientations and the `a|b` token format.
pub mod tile;

/// Chains and the backtracking workspace.
pub mod chain;

/// The exhaustive longest-chain search.
pub mod search;

/// Solver input parsing and output rendering.
pub mod format;

/// Strict validation of test inputs.
pub mod validator;

/// Judging of participant answers against the reference.
pub mod checker;

/// Test suite generation.
pub mod generator;

pub use chain::{Chain, Placement};
pub use search::{ChainSearch, SearchOutcome, SearchStats, find_longest_chain};
pub use tile::{MAX_PIP, MAX_TILES, OrientedTile, Tile};
