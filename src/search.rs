//! # Longest chain search
//!
//! Exhaustive backtracking over a handful of tiles. The search runs `n`
//! rounds, where `n` is the number of tiles; every round either starts the
//! chain, extends one of its ends, or passes. Leaves at round `n` compare the
//! working chain against the best one found so far, and only a strictly
//! longer chain replaces it, so the result is the first longest chain in
//! exploration order:
//!
//! * tiles in input order,
//! * for each tile: prepend, then append, then pass.
//!
//! The order is part of the contract: it fixes the printed chain byte for
//! byte, not only its length.

use crate::SetMinMax;
use crate::chain::{Chain, End, Placement, Workspace};
use crate::tile::Tile;
use serde::Serialize;

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Calls into the recursion, leaves included.
    pub nodes: u64,
    pub leaves: u64,
    /// Times the best chain was replaced.
    pub improvements: u64,
    /// Subtrees cut because they could not beat the best chain.
    pub pruned: u64,
    pub max_depth: usize,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub chain: Chain,
    pub stats: SearchStats,
}

/// A single search invocation. Owns the best chain and the counters, so
/// separate searches never share state.
pub struct ChainSearch<'a> {
    tiles: &'a [Tile],
    prune: bool,
    best: Chain,
    stats: SearchStats,
}

impl<'a> ChainSearch<'a> {
    pub fn new(tiles: &'a [Tile]) -> Self {
        Self {
            tiles,
            prune: true,
            best: Chain::default(),
            stats: SearchStats::default(),
        }
    }

    /// Skip subtrees whose chain cannot outgrow the best one even if every
    /// remaining round placed a tile. Enabled by default. The returned chain
    /// is the same either way, only the counters change.
    pub fn prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    pub fn run(mut self) -> SearchOutcome {
        let mut work = Workspace::new(self.tiles.len());
        self.explore(&mut work, 0);
        SearchOutcome {
            chain: self.best,
            stats: self.stats,
        }
    }

    fn explore(&mut self, work: &mut Workspace, round: usize) {
        self.stats.nodes += 1;
        self.stats.max_depth.setmax(round);
        let tiles = self.tiles;
        let n = tiles.len();

        if round == n {
            self.stats.leaves += 1;
            if work.len() > self.best.len() {
                self.best = work.snapshot();
                self.stats.improvements += 1;
            }
            return;
        }
        if self.prune && work.len() + (n - round) <= self.best.len() {
            self.stats.pruned += 1;
            return;
        }

        let (Some(left), Some(right)) = (work.left_pip(), work.right_pip()) else {
            // Empty chain: start it with tile j now, or leave it empty for this round.
            for (index, tile) in tiles.iter().enumerate() {
                let start = Placement {
                    index,
                    tile: tile.as_read(),
                };
                self.explore(&mut work.place(End::Back, start), round + 1);
                self.explore(work, round + 1);
            }
            return;
        };

        for (index, tile) in tiles.iter().enumerate() {
            if work.is_used(index) {
                continue;
            }
            if let Some(oriented) = tile.facing_left_of(left) {
                let front = Placement {
                    index,
                    tile: oriented,
                };
                self.explore(&mut work.place(End::Front, front), round + 1);
            }
            if let Some(oriented) = tile.facing_right_of(right) {
                let back = Placement {
                    index,
                    tile: oriented,
                };
                self.explore(&mut work.place(End::Back, back), round + 1);
            }
            self.explore(work, round + 1);
        }
    }
}

/// Returns the first longest chain that can be built from `tiles`.
pub fn find_longest_chain(tiles: &[Tile]) -> Chain {
    ChainSearch::new(tiles).run().chain
}
