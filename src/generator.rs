//! # Test generation
//!
//! A suite starts with a few hand-written edge cases, followed by random
//! draws from a shuffled double-six set.

use crate::tile::{MAX_PIP, MAX_TILES, Tile};
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

pub const DOUBLE_SIX_SIZE: usize = 28;

/// Number of tests in a default suite.
pub const SUITE_SIZE: usize = 30;

/// Every tile of a double-six set, `(0,0), (0,1), ..., (6,6)`.
pub static DOUBLE_SIX: Lazy<Vec<Tile>> = Lazy::new(|| {
    (0..=MAX_PIP)
        .flat_map(|a| (a..=MAX_PIP).map(move |b| Tile::new(a, b)))
        .collect()
});

fn parse_case(s: &str) -> Vec<Tile> {
    s.split_whitespace()
        .filter_map(|t| t.parse().ok())
        .collect()
}

/// Edge cases placed at the front of every suite.
pub fn manual_cases() -> Vec<Vec<Tile>> {
    ["3|3", "0|1 1|2 2|3", "0|0 1|1"]
        .into_iter()
        .map(parse_case)
        .collect()
}

/// Between one and [`MAX_TILES`] distinct tiles of the double-six set, in random order.
pub fn random_case<R: Rng>(rng: &mut R) -> Vec<Tile> {
    let n = rng.random_range(1..=MAX_TILES);
    let mut tiles = DOUBLE_SIX.to_vec();
    tiles.shuffle(rng);
    tiles.truncate(n);
    tiles
}

/// `count` tests: the manual cases first, random cases after. The random part
/// is reproducible when a seed is given.
pub fn test_suite(seed: Option<u64>, count: usize) -> Vec<Vec<Tile>> {
    let mut rng = match seed {
        Some(s) => ChaCha20Rng::seed_from_u64(s),
        None => ChaCha20Rng::from_os_rng(),
    };
    let mut suite = manual_cases();
    suite.truncate(count);
    while suite.len() < count {
        suite.push(random_case(&mut rng));
    }
    suite
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_tiles;
    use crate::validator::validate;
    use itertools::Itertools;

    #[test]
    fn double_six_has_every_pair_once() {
        assert_eq!(DOUBLE_SIX.len(), DOUBLE_SIX_SIZE);
        assert!(DOUBLE_SIX.iter().map(|t| t.key()).all_unique());
        assert_eq!(DOUBLE_SIX.iter().filter(|t| t.is_double()).count(), 7);
        assert_eq!(DOUBLE_SIX[0], Tile::new(0, 0));
        assert_eq!(DOUBLE_SIX[DOUBLE_SIX_SIZE - 1], Tile::new(6, 6));
    }

    #[test]
    fn manual_cases_come_first() {
        let suite = test_suite(Some(1), SUITE_SIZE);
        assert_eq!(suite.len(), SUITE_SIZE);
        assert_eq!(&suite[..3], &manual_cases()[..]);
        assert_eq!(suite[0], vec![Tile::new(3, 3)]);
    }

    #[test]
    fn every_generated_test_validates() {
        for seed in 0..20 {
            for (i, case) in test_suite(Some(seed), SUITE_SIZE).iter().enumerate() {
                assert!(!case.is_empty() && case.len() <= MAX_TILES);
                let text = format_tiles(case);
                let parsed = validate(&text)
                    .unwrap_or_else(|e| panic!("seed {seed}, test {i}: {e}\n{text}"));
                assert_eq!(&parsed, case);
            }
        }
    }

    #[test]
    fn suites_are_reproducible() {
        assert_eq!(test_suite(Some(42), 12), test_suite(Some(42), 12));
        assert_ne!(test_suite(Some(42), 12), test_suite(Some(43), 12));
    }

    #[test]
    fn short_suites_keep_a_prefix_of_manual_cases() {
        assert_eq!(test_suite(Some(5), 2), manual_cases()[..2].to_vec());
        assert!(test_suite(None, 0).is_empty());
    }
}
