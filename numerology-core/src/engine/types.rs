//! Engine state and construction.

use chrono::{Local, NaiveDate};
use numerology_types::{BirthDate, NumerologyConfig};
use tracing::debug;

use crate::analyzer::NameNormalizer;

/// Numerology calculator for one person.
///
/// The name and birth date are captured at construction and never change.
/// Personal cycles read "today" at call time unless the configuration pins
/// a reference date. The type is `Send + Sync` and can be
/// shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numerology {
    /// Lowercased input, spaces and diacritics intact.
    pub(crate) raw_name: String,
    /// Output of the name normalizer.
    pub(crate) name: String,
    pub(crate) birth: BirthDate,
    /// Pinned "today" for personal cycle defaults; `None` reads the clock.
    pub(crate) reference_date: Option<NaiveDate>,
}

impl Numerology {
    /// Creates an engine from a name and birth date components. Personal
    /// cycles use the local system date at each call.
    ///
    /// ```
    /// use numerology_core::Numerology;
    ///
    /// let n = Numerology::new("Nguyễn Văn A", 29, 11, 1990);
    /// assert_eq!(n.normalized_name(), "nguyenvana");
    /// assert_eq!(n.life_path(), 5);
    /// ```
    pub fn new(name: &str, day: u32, month: u32, year: u32) -> Self {
        Self::with_config(
            name,
            BirthDate::new(day, month, year),
            NumerologyConfig::default(),
        )
    }

    /// Creates an engine with explicit configuration.
    pub fn with_config(name: &str, birth: BirthDate, config: NumerologyConfig) -> Self {
        let raw_name = name.to_lowercase();
        let normalized = NameNormalizer::default().normalize(&raw_name);
        debug!(
            name_len = normalized.len(),
            birth = %birth,
            reference_date = ?config.reference_date,
            "numerology engine created"
        );

        Self {
            raw_name,
            name: normalized,
            birth,
            reference_date: config.reference_date,
        }
    }

    /// The lowercased, otherwise untouched name.
    #[inline(always)]
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// The normalized name used for letter sums.
    #[inline(always)]
    pub fn normalized_name(&self) -> &str {
        &self.name
    }

    /// The birth date given at construction.
    #[inline(always)]
    pub fn birth_date(&self) -> BirthDate {
        self.birth
    }

    /// The pinned reference date, if any.
    #[inline(always)]
    pub fn reference_date(&self) -> Option<NaiveDate> {
        self.reference_date
    }

    /// The pinned reference date, or the local system date right now.
    #[inline]
    pub fn today(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(|| Local::now().date_naive())
    }
}
