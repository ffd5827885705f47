//! Personal year, month and day cycles.
//!
//! Missing arguments fall back to [`Numerology::today`], resolved per call.

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::engine::types::Numerology;
use crate::reduce::{reduce, reduce_except};

impl Numerology {
    /// Personal year number for `year`, or for the reference year.
    pub fn personal_year(&self, year: Option<u32>) -> u32 {
        let year = year.unwrap_or_else(|| self.today().year_ce().1);
        let sum = reduce(self.birth.day) + reduce(self.birth.month) + reduce(year);
        let value = reduce_except(sum, &[]);
        trace!(year, value, "personal year");
        value
    }

    /// Personal month number for `month` of `year`, each defaulting to the
    /// reference date.
    pub fn personal_month(&self, month: Option<u32>, year: Option<u32>) -> u32 {
        let month = month.unwrap_or_else(|| self.today().month());
        let sum = reduce(month) + reduce(self.personal_year(year));
        let value = reduce_except(sum, &[]);
        trace!(month, value, "personal month");
        value
    }

    /// Personal day number for the reference date.
    pub fn personal_day(&self) -> u32 {
        self.personal_day_on(self.today())
    }

    /// Personal day number for an explicit calendar date.
    pub fn personal_day_on(&self, date: NaiveDate) -> u32 {
        let (_, year) = date.year_ce();
        let sum = reduce(date.day()) + reduce(self.personal_year(Some(year)));
        let value = reduce_except(sum, &[]);
        trace!(%date, value, "personal day");
        value
    }
}
