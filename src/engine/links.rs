//! Link computation between adjacent rings.
//!
//! Ring `i` and ring `i + 1` are linked when some link-symbol position lands
//! on the same angular position on both rings once each ring's rotation is
//! applied. Everything here is a pure function of the configuration and the
//! rotations.

use std::ops::Range;

use smallvec::SmallVec;

use crate::core::{PuzzleConfig, Symbol};

/// One flag per adjacent ring pair: `links[i]` joins ring `i` and `i + 1`.
pub type Links = SmallVec<[bool; 12]>;

/// Compute the link flags for `rotations`.
///
/// Returns `ring_count - 1` flags (none for a single ring). A configuration
/// without any link symbol yields all-false.
#[must_use]
pub fn compute_links(config: &PuzzleConfig, rotations: &[usize]) -> Links {
    let positions = config.link_positions();
    let n = config.segment_count;

    rotations
        .windows(2)
        .map(|pair| {
            positions
                .iter()
                .any(|&pos| (pair[0] + pos) % n == (pair[1] + pos) % n)
        })
        .collect()
}

/// Check if every adjacent pair is linked.
///
/// A puzzle with at most one ring is solved by definition.
#[must_use]
pub fn is_solved(config: &PuzzleConfig, rotations: &[usize]) -> bool {
    rotations.len() <= 1 || compute_links(config, rotations).iter().all(|&l| l)
}

/// The maximal run of rings transitively linked to `ring`.
///
/// Scans inward while `links[k - 1]` holds and outward while `links[k]`
/// holds. The returned range always contains `ring`.
#[must_use]
pub fn linked_group(links: &[bool], ring: usize) -> Range<usize> {
    let mut start = ring;
    while start > 0 && links.get(start - 1).copied().unwrap_or(false) {
        start -= 1;
    }

    let mut end = ring;
    while links.get(end).copied().unwrap_or(false) {
        end += 1;
    }

    start..end + 1
}

/// Symbol shown at absolute angular `position` on a ring turned by `rotation`.
///
/// Segment `s` of a ring sits at `(s + rotation) mod n`, so the segment at
/// `position` is `(position - rotation) mod n`.
#[must_use]
pub fn symbol_at(config: &PuzzleConfig, rotation: usize, position: usize) -> Symbol {
    let n = config.segment_count;
    let segment = (position % n + n - rotation % n) % n;
    config.symbols[segment]
}
