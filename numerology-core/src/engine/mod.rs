//! The numerology engine.
//!
//! A [`Numerology`] is built once from a name and a birth date. Every metric
//! method is a pure function of that state and, for personal cycles, of
//! the date returned by [`Numerology::today`]:
//!
//! - **Name metrics**: expression, soul urge, personality, balance, challenge
//! - **Birth metrics**: life path, karmic debt, birth day, period cycles
//! - **Personal cycles**: year, month and day relative to a reference date
//!
//! Threading:
//! - [`Numerology`] holds no interior mutability and is `Send + Sync`.

mod birth;
mod name;
mod personal;
mod profile;
mod types;

pub use profile::NumerologyProfile;
pub use types::Numerology;
