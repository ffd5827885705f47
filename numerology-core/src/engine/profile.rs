//! Full metric snapshot.

use chrono::Datelike;
use numerology_types::{BirthDate, KarmicDebt, NumerologyError, PeriodCycle};
use serde::{Deserialize, Serialize};

use crate::engine::types::Numerology;

/// Every metric for one person, computed at a single reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    /// Normalized name the letter metrics were computed from.
    pub name: String,
    /// Birth date the date metrics were computed from.
    pub birth_date: BirthDate,
    /// Life path number.
    pub life_path: u32,
    /// Expression number.
    pub expression: u32,
    /// Soul urge number.
    pub soul_urge: u32,
    /// Personality number.
    pub personality: u32,
    /// Karmic debt, if any.
    pub karmic_debt: Option<KarmicDebt>,
    /// Birth day number.
    pub birth_day: u32,
    /// Balance number.
    pub balance: u32,
    /// Challenge number.
    pub challenge: u32,
    /// Personal year number at the reference date.
    pub personal_year: u32,
    /// Personal month number at the reference date.
    pub personal_month: u32,
    /// Personal day number at the reference date.
    pub personal_day: u32,
    /// The three life periods.
    pub period_cycles: [PeriodCycle; 3],
}

impl Numerology {
    /// Computes every metric.
    ///
    /// # Errors
    ///
    /// Propagates [`Numerology::period_cycles`].
    pub fn profile(&self) -> Result<NumerologyProfile, NumerologyError> {
        let today = self.today();
        let (_, year) = today.year_ce();

        Ok(NumerologyProfile {
            name: self.name.clone(),
            birth_date: self.birth,
            life_path: self.life_path(),
            expression: self.expression(),
            soul_urge: self.soul_urge(),
            personality: self.personality(),
            karmic_debt: self.karmic_debt(),
            birth_day: self.birth_day(),
            balance: self.balance(),
            challenge: self.challenge(),
            personal_year: self.personal_year(Some(year)),
            personal_month: self.personal_month(Some(today.month()), Some(year)),
            personal_day: self.personal_day_on(today),
            period_cycles: self.period_cycles()?,
        })
    }
}

impl core::fmt::Display for NumerologyProfile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} ({}): life path {}, expression {}, soul urge {}, personality {}, birth day {}, balance {}, challenge {}",
            self.name,
            self.birth_date,
            self.life_path,
            self.expression,
            self.soul_urge,
            self.personality,
            self.birth_day,
            self.balance,
            self.challenge
        )?;

        if let Some(debt) = &self.karmic_debt {
            write!(f, ", karmic debt {}", debt)?;
        }

        write!(
            f,
            ", personal {}/{}/{}",
            self.personal_year, self.personal_month, self.personal_day
        )
    }
}
