//! # Chains
//!
//! [`Chain`] is the immutable result handed out by the search. [`Workspace`] is
//! the mutable chain the search grows and shrinks while it backtracks; every
//! change to it goes through a [`Placed`] guard, which undoes the placement
//! when it goes out of scope.

use crate::tile::{OrientedTile, Tile};
use itertools::Itertools;
use std::collections::VecDeque;
use std::ops::{Deref, DerefMut};

/// One position of a chain: which input tile sits there and how it is turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub tile: OrientedTile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain {
    placements: Vec<Placement>,
}

impl Chain {
    pub fn new(placements: Vec<Placement>) -> Self {
        Self { placements }
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn tiles(&self) -> impl Iterator<Item = OrientedTile> + '_ {
        self.placements.iter().map(|p| p.tile)
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.placements.iter().map(|p| p.index)
    }

    /// Adjacent faces carry the same pip value.
    pub fn is_connected(&self) -> bool {
        self.placements
            .iter()
            .tuple_windows()
            .all(|(l, r)| l.tile.right == r.tile.left)
    }

    pub fn uses_each_tile_once(&self) -> bool {
        self.indices().all_unique()
    }

    /// Checks the chain against the tiles it was built from: every position
    /// refers to an existing tile with the same pips, no tile repeats, and the
    /// chain is connected.
    pub fn is_valid_for(&self, tiles: &[Tile]) -> bool {
        self.placements.iter().all(|p| {
            tiles
                .get(p.index)
                .is_some_and(|t| t.same_pair(&Tile::from(p.tile)))
        }) && self.uses_each_tile_once()
            && self.is_connected()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum End {
    Front,
    Back,
}

/// The chain under construction together with the set of committed tiles.
#[derive(Debug)]
pub(crate) struct Workspace {
    chain: VecDeque<Placement>,
    used: Vec<bool>,
}

impl Workspace {
    pub(crate) fn new(num_tiles: usize) -> Self {
        Self {
            chain: VecDeque::with_capacity(num_tiles),
            used: vec![false; num_tiles],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.chain.len()
    }

    pub(crate) fn is_used(&self, index: usize) -> bool {
        self.used[index]
    }

    /// Pip value exposed on the left end, `None` while the chain is empty.
    pub(crate) fn left_pip(&self) -> Option<u8> {
        self.chain.front().map(|p| p.tile.left)
    }

    pub(crate) fn right_pip(&self) -> Option<u8> {
        self.chain.back().map(|p| p.tile.right)
    }

    pub(crate) fn snapshot(&self) -> Chain {
        Chain::new(self.chain.iter().copied().collect())
    }

    /// Commits `placement.index` and puts the tile at `end`. The returned guard
    /// dereferences to the workspace so the search can descend through it.
    pub(crate) fn place(&mut self, end: End, placement: Placement) -> Placed<'_> {
        debug_assert!(!self.used[placement.index], "tile placed twice");
        self.used[placement.index] = true;
        match end {
            End::Front => self.chain.push_front(placement),
            End::Back => self.chain.push_back(placement),
        }
        Placed {
            work: self,
            end,
            index: placement.index,
        }
    }
}

/// Scoped placement. Dropping it removes the tile from its end of the chain
/// and releases it.
pub(crate) struct Placed<'a> {
    work: &'a mut Workspace,
    end: End,
    index: usize,
}

impl Deref for Placed<'_> {
    type Target = Workspace;

    fn deref(&self) -> &Workspace {
        self.work
    }
}

impl DerefMut for Placed<'_> {
    fn deref_mut(&mut self) -> &mut Workspace {
        self.work
    }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) {
        let removed = match self.end {
            End::Front => self.work.chain.pop_front(),
            End::Back => self.work.chain.pop_back(),
        };
        debug_assert_eq!(removed.map(|p| p.index), Some(self.index));
        self.work.used[self.index] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(index: usize, left: u8, right: u8) -> Placement {
        Placement {
            index,
            tile: OrientedTile::new(left, right),
        }
    }

    #[test]
    fn placed_guard_restores_state() {
        let mut work = Workspace::new(3);
        {
            let mut first = work.place(End::Back, placement(0, 1, 2));
            assert_eq!((first.left_pip(), first.right_pip()), (Some(1), Some(2)));
            {
                let second = first.place(End::Front, placement(2, 5, 1));
                assert_eq!(second.len(), 2);
                assert!(second.is_used(2));
                assert_eq!(second.left_pip(), Some(5));
            }
            assert_eq!(first.len(), 1);
            assert!(!first.is_used(2));
            assert!(first.is_used(0));
        }
        assert_eq!(work.len(), 0);
        assert!((0..3).all(|i| !work.is_used(i)));
        assert_eq!(work.left_pip(), None);
    }

    #[test]
    fn placed_guard_restores_state_on_unwind() {
        let mut work = Workspace::new(2);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _placed = work.place(End::Back, placement(1, 3, 3));
            panic!("abandon branch");
        }));
        assert!(result.is_err());
        assert_eq!(work.len(), 0);
        assert!(!work.is_used(1));
    }

    #[test]
    fn snapshot_is_detached() {
        let mut work = Workspace::new(2);
        let snap = {
            let mut a = work.place(End::Back, placement(0, 0, 1));
            let b = a.place(End::Back, placement(1, 1, 4));
            b.snapshot()
        };
        assert_eq!(work.len(), 0);
        assert_eq!(snap.tiles().join(" "), "0|1 1|4");
        assert_eq!(snap.indices().collect_vec(), vec![0, 1]);
    }

    #[test]
    fn validity_checks() {
        let tiles = [Tile::new(0, 1), Tile::new(2, 1), Tile::new(3, 3)];
        let good = Chain::new(vec![placement(0, 0, 1), placement(1, 1, 2)]);
        assert!(good.is_connected());
        assert!(good.is_valid_for(&tiles));

        let broken = Chain::new(vec![placement(0, 0, 1), placement(2, 3, 3)]);
        assert!(!broken.is_connected());
        assert!(!broken.is_valid_for(&tiles));

        let reused = Chain::new(vec![placement(2, 3, 3), placement(2, 3, 3)]);
        assert!(reused.is_connected());
        assert!(!reused.uses_each_tile_once());
        assert!(!reused.is_valid_for(&tiles));

        let wrong_pips = Chain::new(vec![placement(1, 1, 3)]);
        assert!(!wrong_pips.is_valid_for(&tiles));
        let missing = Chain::new(vec![placement(7, 0, 1)]);
        assert!(!missing.is_valid_for(&tiles));

        assert!(Chain::default().is_valid_for(&tiles));
    }
}
