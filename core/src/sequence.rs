//! Sequence Generation
//!
//! Produces the eight signed numbers shown during a drill run. The numbers
//! are drawn so that the running sum never dips below zero at any point and
//! the final total is strictly positive, which keeps every intermediate
//! result representable on a physical abacus.
//!
//! # Algorithm
//!
//! Position by position, with `sum` holding the total of the numbers drawn
//! so far:
//!
//! - Non-final positions draw uniformly from `[-99, 99]`, with the lower
//!   bound raised to `1 - sum` whenever `sum` is negative, redrawing while
//!   the tentative new sum would be negative.
//! - The final position draws from `[1 - sum, 99]` when `sum <= 0`, and
//!   otherwise from `[-99, 99]` redrawing while the tentative total would
//!   not be strictly positive.
//!
//! This is rejection sampling over a shifting support. The support is
//! non-empty at every step, and the rejection probability is bounded well
//! below one, so generation terminates in O(1) expected redraws.

use rand::Rng;

/// Number of values in a drill sequence.
pub const SEQUENCE_LEN: usize = 8;

/// Smallest value a sequence element can take.
pub const VALUE_MIN: i32 = -99;

/// Largest value a sequence element can take.
pub const VALUE_MAX: i32 = 99;

/// An immutable drill sequence.
///
/// Constructed only by [`Sequence::generate`]; once built it never changes.
/// A fresh sequence is generated for every run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    values: [i32; SEQUENCE_LEN],
}

impl Sequence {
    /// Generate a fresh sequence from the given RNG.
    ///
    /// The caller owns the RNG so tests can pass a seeded `StdRng` and
    /// replay exact sequences.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut values = [0i32; SEQUENCE_LEN];
        let mut sum = 0i32;

        for (position, slot) in values.iter_mut().enumerate() {
            let draw = if position == SEQUENCE_LEN - 1 {
                draw_final(rng, sum)
            } else {
                draw_prefix(rng, sum)
            };
            *slot = draw;
            sum += draw;
        }

        tracing::debug!(?values, total = sum, "generated sequence");
        Self { values }
    }

    /// All eight values in presentation order.
    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// The value at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    /// Sum of all eight values. Strictly positive by construction.
    #[must_use]
    pub fn total(&self) -> i32 {
        self.values.iter().sum()
    }

    /// Number of values in the sequence. Always [`SEQUENCE_LEN`].
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// Draw for positions 0..=6: the running sum must stay non-negative.
fn draw_prefix<R: Rng>(rng: &mut R, sum: i32) -> i32 {
    let min_allowed = if sum >= 0 { VALUE_MIN } else { 1 - sum };

    // Degenerate single-choice case. Unreachable while the prefix-sum
    // invariant holds, since it needs sum < VALUE_MIN - VALUE_MAX.
    if min_allowed > VALUE_MAX {
        return min_allowed;
    }

    let mut draw = rng.gen_range(min_allowed..=VALUE_MAX);
    while sum + draw < 0 {
        draw = rng.gen_range(min_allowed..=VALUE_MAX);
    }
    draw
}

/// Draw for position 7: the final total must be strictly positive.
fn draw_final<R: Rng>(rng: &mut R, sum: i32) -> i32 {
    if sum <= 0 {
        // Only sum == 0 is reachable here; the support [1 - sum, 99] is
        // non-empty either way.
        return rng.gen_range((1 - sum)..=VALUE_MAX);
    }

    let mut draw = rng.gen_range(VALUE_MIN..=VALUE_MAX);
    while sum + draw <= 0 {
        draw = rng.gen_range(VALUE_MIN..=VALUE_MAX);
    }
    draw
}
