//! Digit-sum reduction.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Values left unreduced by default.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Values below the floor are never reduced.
pub const DEFAULT_FLOOR: u32 = 10;

/// Sum of the decimal digits of `n`.
#[inline(always)]
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n != 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduces `n` with the master numbers as exceptions and the default floor.
///
/// ```
/// use numerology_core::reduce::reduce;
///
/// assert_eq!(reduce(1990), 1);
/// assert_eq!(reduce(29), 11);
/// ```
#[inline]
pub fn reduce(n: u32) -> u32 {
    reduce_with(n, &MASTER_NUMBERS, DEFAULT_FLOOR)
}

/// Reduces `n` with custom exceptions and the default floor.
#[inline]
pub fn reduce_except(n: u32, exceptions: &[u32]) -> u32 {
    reduce_with(n, exceptions, DEFAULT_FLOOR)
}

/// Repeatedly sums the digits of `n` until it drops below the floor or hits
/// an exception.
///
/// `floor == 0` disables reduction. The custom `floor` only gates the first
/// step: every later step uses [`DEFAULT_FLOOR`], so `reduce_with(199, &[], 100)`
/// goes 199 → 19 → 10 → 1 rather than stopping at 19.
pub fn reduce_with(n: u32, exceptions: &[u32], floor: u32) -> u32 {
    if floor == 0 || n < floor || exceptions.contains(&n) {
        return n;
    }

    let mut n = digit_sum(n);
    while n >= DEFAULT_FLOOR && !exceptions.contains(&n) {
        n = digit_sum(n);
    }
    n
}

/// The last two states of a reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReductionTrace {
    /// The value whose digits produced `reduced`.
    pub previous: u32,
    /// The final reduced value.
    pub reduced: u32,
}

impl fmt::Display for ReductionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.previous, self.reduced)
    }
}

/// Reduces `n` and keeps the value that fed the final digit sum.
///
/// Unlike [`reduce_with`] this always takes at least one step, so a single
/// digit traces to itself (`7` → `7/7`).
///
/// ```
/// use numerology_core::reduce::{reduce_traced, MASTER_NUMBERS};
///
/// assert_eq!(reduce_traced(13, &MASTER_NUMBERS).to_string(), "13/4");
/// assert_eq!(reduce_traced(1978, &MASTER_NUMBERS).to_string(), "25/7");
/// ```
pub fn reduce_traced(n: u32, exceptions: &[u32]) -> ReductionTrace {
    let mut previous = n;
    let mut reduced = digit_sum(n);

    while reduced >= DEFAULT_FLOOR && !exceptions.contains(&reduced) {
        previous = reduced;
        reduced = digit_sum(reduced);
    }

    ReductionTrace { previous, reduced }
}
