//! Two-step reduction for multi-part inputs such as a full birth date.
//!
//! A year like 1990 must contribute 1 + 9 + 9 + 0 to the total rather than
//! its own reduced value, so every component is first exploded into its
//! digits unless it is small or excepted.

use smallvec::SmallVec;

use super::digits::{reduce_with, DEFAULT_FLOOR};

/// Values kept whole in the first step, and returned as-is when the first
/// step total lands on them.
pub const FIRST_STEP_EXCEPTIONS: [u32; 4] = [10, 11, 22, 33];

/// Two-step reduction with the life-path defaults.
///
/// ```
/// use numerology_core::reduce::reduce_two_step;
///
/// // 2+9 + 11 + 1+9+9+0 = 41 -> 5
/// assert_eq!(reduce_two_step(&[29, 11, 1990]), 5);
/// ```
#[inline]
pub fn reduce_two_step(nums: &[u32]) -> u32 {
    reduce_two_step_with(nums, &FIRST_STEP_EXCEPTIONS, &[], DEFAULT_FLOOR)
}

/// Explodes every component `>= 10` not in `first_step` into its digits,
/// sums the stream, and reduces the total with `second_step` and
/// `second_floor` unless the total itself is in `first_step`.
///
/// The sum saturates at `u32::MAX`.
pub fn reduce_two_step_with(
    nums: &[u32],
    first_step: &[u32],
    second_step: &[u32],
    second_floor: u32,
) -> u32 {
    let mut stream: SmallVec<[u32; 16]> = SmallVec::new();

    for &n in nums {
        if n < 10 || first_step.contains(&n) {
            stream.push(n);
        } else {
            push_digits(n, &mut stream);
        }
    }

    let total = stream.iter().fold(0u32, |acc, &d| acc.saturating_add(d));
    if first_step.contains(&total) {
        return total;
    }

    reduce_with(total, second_step, second_floor)
}

/// Most significant digit first.
#[inline]
fn push_digits(mut n: u32, out: &mut SmallVec<[u32; 16]>) {
    let start = out.len();
    while n != 0 {
        out.push(n % 10);
        n /= 10;
    }
    out[start..].reverse();
}
