//! Random search order.
//!
//! Candidate lists (day × slot pairs, lab days and start offsets,
//! eligible teachers) are permuted before scanning so that early days,
//! early slots and the first-listed teacher are not systematically
//! preferred.

use rand::seq::SliceRandom;
use rand::Rng;

/// Permutes `items` in place (Fisher–Yates via [`SliceRandom::shuffle`]).
///
/// Every permutation is equally likely given a uniform `rng`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Returns a shuffled copy of `items`.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle(&mut out, rng);
    out
}
