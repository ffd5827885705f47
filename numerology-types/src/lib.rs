//! Core types for the numerology engine.
//!
//! This crate provides the value types that cross the boundary between the
//! engine and its callers. Keeping them separate ensures:
//!
//! - **No engine dependency**: callers can store and serialize results
//!   without pulling in the reducers
//! - **Plain data**: every result is `Clone`, comparable and serde-ready

#![warn(missing_docs)]

use core::fmt;
use std::borrow::Cow;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A birth date held as three plain integers.
///
/// No calendar validation is performed. `31/02/1990` is accepted as given
/// and flows through the reducers like any other date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthDate {
    /// Day of month
    pub day: u32,
    /// Month of year (1-12 in practice, not enforced)
    pub month: u32,
    /// Calendar year
    pub year: u32,
}

impl BirthDate {
    /// Creates a birth date from its components.
    #[inline(always)]
    pub const fn new(day: u32, month: u32, year: u32) -> Self {
        Self { day, month, year }
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        let (_, year) = date.year_ce();
        Self::new(date.day(), date.month(), year)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}

/// A karmic debt match.
///
/// `display_number` is the compound label `total/reduced`, e.g. `"13/4"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KarmicDebt {
    /// The unreduced total that matched the karmic debt table.
    pub number: u32,
    /// Display label in `total/reduced` form.
    pub display_number: Cow<'static, str>,
}

impl KarmicDebt {
    /// Creates a karmic debt entry backed by a static label.
    #[inline(always)]
    pub const fn from_static(number: u32, display_number: &'static str) -> Self {
        Self {
            number,
            display_number: Cow::Borrowed(display_number),
        }
    }
}

impl fmt::Display for KarmicDebt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_number)
    }
}

/// Half-open age range `[from, to)` in years.
///
/// `to == None` means the range never ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeRange {
    /// First age included in the range.
    pub from: u32,
    /// First age no longer included, or `None` when open-ended.
    pub to: Option<u32>,
}

impl AgeRange {
    /// Creates a bounded range `[from, to)`.
    #[inline(always)]
    pub const fn bounded(from: u32, to: u32) -> Self {
        Self { from, to: Some(to) }
    }

    /// Creates an open-ended range `[from, ∞)`.
    #[inline(always)]
    pub const fn open(from: u32) -> Self {
        Self { from, to: None }
    }

    /// Returns true if the range has no upper bound.
    #[inline(always)]
    pub const fn is_open_ended(&self) -> bool {
        self.to.is_none()
    }

    /// Returns true if `age` falls inside the range.
    #[inline]
    pub fn contains(&self, age: u32) -> bool {
        age >= self.from && self.to.is_none_or(|to| age < to)
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to {
            Some(to) => write!(f, "{}-{}", self.from, to),
            None => write!(f, "{}+", self.from),
        }
    }
}

/// One of the three life periods.
///
/// Serialized as its 1-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Period {
    /// Youth, tied to the birth month.
    First = 1,
    /// Maturity, tied to the birth day.
    Second = 2,
    /// Later life, tied to the birth year.
    Third = 3,
}

impl Period {
    /// All periods in chronological order.
    pub const ALL: [Period; 3] = [Period::First, Period::Second, Period::Third];

    /// Returns the 1-based index of this period.
    #[inline(always)]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl From<Period> for u8 {
    #[inline(always)]
    fn from(period: Period) -> Self {
        period.index()
    }
}

impl TryFrom<u8> for Period {
    type Error = NumerologyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Period::First),
            2 => Ok(Period::Second),
            3 => Ok(Period::Third),
            other => Err(NumerologyError::InvalidPeriod(other)),
        }
    }
}

/// A period together with its derived number and age range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodCycle {
    /// Which life period this is.
    pub period: Period,
    /// The reduced number governing the period.
    pub number: u32,
    /// Ages covered by the period.
    pub age: AgeRange,
}

impl fmt::Display for PeriodCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "period {} = {} (age {})",
            self.period.index(),
            self.number,
            self.age
        )
    }
}

/// Engine configuration options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumerologyConfig {
    /// The date treated as "today" by the personal year, month and day
    /// metrics. `None` reads the local system date at each call.
    pub reference_date: Option<NaiveDate>,
}

impl NumerologyConfig {
    /// Uses the local system date, read at each call.
    pub const fn system() -> Self {
        Self {
            reference_date: None,
        }
    }

    /// Pins "today" to a fixed date.
    pub const fn fixed(date: NaiveDate) -> Self {
        Self {
            reference_date: Some(date),
        }
    }
}

/// Errors raised by numerology lookups.
///
/// Expected "no match" outcomes (unmapped letters, no karmic debt) are not
/// errors; only out-of-domain inputs end up here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumerologyError {
    /// A life path base outside 1-9 was used to index the age period table.
    #[error("life path base {base} is outside the period table (expected 1-9)")]
    PeriodOutOfRange {
        /// The reduced base that missed the table.
        base: u32,
    },

    /// An integer that does not name a life period.
    #[error("invalid period index {0} (expected 1, 2 or 3)")]
    InvalidPeriod(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birth_date_from_naive_date() {
        let date = NaiveDate::from_ymd_opt(1990, 11, 29).unwrap();
        assert_eq!(BirthDate::from(date), BirthDate::new(29, 11, 1990));
    }

    #[test]
    fn birth_date_display_is_zero_padded() {
        assert_eq!(BirthDate::new(3, 7, 1985).to_string(), "03/07/1985");
    }

    #[test]
    fn birth_date_accepts_impossible_days() {
        let date = BirthDate::new(31, 2, 1990);
        assert_eq!(date.day, 31);
        assert_eq!(date.month, 2);
    }

    #[test]
    fn age_range_bounds_are_half_open() {
        let range = AgeRange::bounded(31, 58);
        assert!(!range.contains(30));
        assert!(range.contains(31));
        assert!(range.contains(57));
        assert!(!range.contains(58));
    }

    #[test]
    fn open_range_has_no_ceiling() {
        let range = AgeRange::open(58);
        assert!(range.is_open_ended());
        assert!(range.contains(58));
        assert!(range.contains(u32::MAX));
        assert!(!range.contains(57));
    }

    #[test]
    fn age_range_display() {
        assert_eq!(AgeRange::bounded(0, 26).to_string(), "0-26");
        assert_eq!(AgeRange::open(53).to_string(), "53+");
    }

    #[test]
    fn period_index_roundtrip() {
        for period in Period::ALL {
            assert_eq!(Period::try_from(period.index()), Ok(period));
        }
    }

    #[test]
    fn period_rejects_unknown_index() {
        assert_eq!(Period::try_from(0), Err(NumerologyError::InvalidPeriod(0)));
        assert_eq!(Period::try_from(4), Err(NumerologyError::InvalidPeriod(4)));
    }

    #[test]
    fn karmic_debt_displays_label() {
        let debt = KarmicDebt::from_static(16, "16/7");
        assert_eq!(debt.to_string(), "16/7");
    }

    #[test]
    fn period_cycle_serializes_index_and_null_ceiling() {
        let cycle = PeriodCycle {
            period: Period::Third,
            number: 1,
            age: AgeRange::open(58),
        };
        let json = serde_json::to_value(cycle).unwrap();
        assert_eq!(json["period"], 3);
        assert_eq!(json["number"], 1);
        assert_eq!(json["age"]["from"], 58);
        assert!(json["age"]["to"].is_null());
    }

    #[test]
    fn period_deserialize_rejects_bad_index() {
        assert!(serde_json::from_str::<Period>("2").is_ok());
        assert!(serde_json::from_str::<Period>("7").is_err());
    }

    #[test]
    fn karmic_debt_serializes_label() {
        let json = serde_json::to_string(&KarmicDebt::from_static(13, "13/4")).unwrap();
        assert_eq!(json, r#"{"number":13,"display_number":"13/4"}"#);
    }

    #[test]
    fn config_presets() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(NumerologyConfig::default(), NumerologyConfig::system());
        assert_eq!(NumerologyConfig::fixed(date).reference_date, Some(date));
    }

    #[test]
    fn error_messages() {
        let err = NumerologyError::PeriodOutOfRange { base: 0 };
        assert!(err.to_string().contains("outside the period table"));
        assert!(NumerologyError::InvalidPeriod(9).to_string().contains('9'));
    }
}
