//! Numerology metrics from a name and a birth date.
//!
//! The crate is split into small layers:
//!
//! - [`analyzer`]: name normalization and word initials
//! - [`reduce`]: digit-sum reduction with exception sets
//! - [`tables`]: cipher, vowels, karmic debt and age periods
//! - [`engine`]: the [`Numerology`] calculator
//!
//! ```
//! use numerology_core::Numerology;
//!
//! let n = Numerology::new("Maria", 29, 11, 1990);
//! assert_eq!(n.life_path(), 5);
//! assert_eq!(n.soul_urge(), 11);
//! assert!(n.karmic_debt().is_none());
//! ```

pub mod analyzer;
pub mod engine;
pub mod reduce;
pub mod tables;

pub use engine::{Numerology, NumerologyProfile};
pub use numerology_types::{
    AgeRange, BirthDate, KarmicDebt, NumerologyConfig, NumerologyError, Period, PeriodCycle,
};
