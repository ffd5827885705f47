//! Birth-date metrics.

use numerology_types::{BirthDate, KarmicDebt, NumerologyError, Period, PeriodCycle};
use tracing::{trace, warn};

use crate::engine::types::Numerology;
use crate::reduce::{reduce, reduce_except, reduce_two_step};
use crate::tables::{self, age_periods};

/// Birth days returned without reduction.
const KEPT_BIRTH_DAYS: [u32; 3] = [10, 11, 22];

const THIRD_PERIOD_EXCEPTIONS: [u32; 2] = [11, 22];

impl Numerology {
    /// Life path number from day, month and year.
    ///
    /// Components are exploded into digits before summing, so the result is
    /// 1-9 or one of 10, 11, 22, 33.
    pub fn life_path(&self) -> u32 {
        let BirthDate { day, month, year } = self.birth;
        let value = reduce_two_step(&[day, month, year]);
        trace!(value, "life path");
        value
    }

    /// Karmic debt, if the sum of the fully reduced date components is
    /// one of 13, 14, 16 or 19.
    pub fn karmic_debt(&self) -> Option<KarmicDebt> {
        let BirthDate { day, month, year } = self.birth;
        let total = reduce_except(day, &[]) + reduce_except(month, &[]) + reduce_except(year, &[]);
        let debt = tables::karmic_debt(total);
        trace!(total, found = debt.is_some(), "karmic debt");
        debt
    }

    /// Birth day number. Days 10, 11 and 22 are kept whole.
    pub fn birth_day(&self) -> u32 {
        let day = self.birth.day;
        if KEPT_BIRTH_DAYS.contains(&day) {
            day
        } else {
            reduce_except(day, &[])
        }
    }

    /// Period cycle numbers for this person's own life path.
    ///
    /// # Errors
    ///
    /// Propagates [`Numerology::period_cycles_for`]; cannot fail for a life
    /// path computed by [`Numerology::life_path`].
    pub fn period_cycles(&self) -> Result<[PeriodCycle; 3], NumerologyError> {
        self.period_cycles_for(self.life_path())
    }

    /// Period cycle numbers for an explicit life path value.
    ///
    /// The life path is fully reduced to a 1-9 base that selects the age
    /// ranges; the numbers come from the birth month, day and year.
    ///
    /// # Errors
    ///
    /// Returns `NumerologyError::PeriodOutOfRange` when the base is not 1-9,
    /// which only happens for a life path of 0.
    pub fn period_cycles_for(&self, life_path: u32) -> Result<[PeriodCycle; 3], NumerologyError> {
        let base = reduce_except(life_path, &[]);
        let [first, second, third] = *age_periods(base).inspect_err(|err| {
            warn!(life_path, base, %err, "period lookup failed");
        })?;

        let BirthDate { day, month, year } = self.birth;
        Ok([
            PeriodCycle {
                period: Period::First,
                number: reduce(month),
                age: first,
            },
            PeriodCycle {
                period: Period::Second,
                number: reduce(day),
                age: second,
            },
            PeriodCycle {
                period: Period::Third,
                number: reduce_except(year, &THIRD_PERIOD_EXCEPTIONS),
                age: third,
            },
        ])
    }
}
