//! Digit reduction.
//!
//! - **Digits**: single-value reduction with exceptions and a floor
//! - **Two-step**: explode-then-reduce for multi-part inputs

mod digits;
mod two_step;

pub use digits::{
    digit_sum, reduce, reduce_except, reduce_traced, reduce_with, ReductionTrace, DEFAULT_FLOOR,
    MASTER_NUMBERS,
};
pub use two_step::{reduce_two_step, reduce_two_step_with, FIRST_STEP_EXCEPTIONS};
