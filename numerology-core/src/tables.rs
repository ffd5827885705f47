//! Lookup tables and constants.

use numerology_types::{AgeRange, KarmicDebt, NumerologyError};

/// Pythagorean cipher, indexed by `letter - b'a'`.
#[rustfmt::skip]
pub const LETTER_VALUES: [u8; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // a-i
    1, 2, 3, 4, 5, 6, 7, 8, 9, // j-r
    1, 2, 3, 4, 5, 6, 7, 8,    // s-z
];

/// Unconditional vowels. `y` is decided by its neighbours, see [`is_vowel_at`].
pub const VOWELS: [u8; 5] = [b'a', b'e', b'i', b'o', b'u'];

/// Totals flagged as karmic debt, with their `total/reduced` labels.
pub static KARMIC_DEBTS: [KarmicDebt; 4] = [
    KarmicDebt::from_static(13, "13/4"),
    KarmicDebt::from_static(14, "14/5"),
    KarmicDebt::from_static(16, "16/7"),
    KarmicDebt::from_static(19, "19/1"),
];

/// Age ranges of the three life periods, indexed by `life path base - 1`.
///
/// Period two always spans 27 years and period three never ends.
#[rustfmt::skip]
pub static AGE_PERIODS: [[AgeRange; 3]; 9] = [
    [AgeRange::bounded(0, 26), AgeRange::bounded(26, 53), AgeRange::open(53)],
    [AgeRange::bounded(0, 34), AgeRange::bounded(34, 61), AgeRange::open(61)],
    [AgeRange::bounded(0, 33), AgeRange::bounded(33, 60), AgeRange::open(60)],
    [AgeRange::bounded(0, 32), AgeRange::bounded(32, 59), AgeRange::open(59)],
    [AgeRange::bounded(0, 31), AgeRange::bounded(31, 58), AgeRange::open(58)],
    [AgeRange::bounded(0, 30), AgeRange::bounded(30, 57), AgeRange::open(57)],
    [AgeRange::bounded(0, 29), AgeRange::bounded(29, 56), AgeRange::open(56)],
    [AgeRange::bounded(0, 28), AgeRange::bounded(28, 55), AgeRange::open(55)],
    [AgeRange::bounded(0, 27), AgeRange::bounded(27, 54), AgeRange::open(54)],
];

/// Cipher value of a lowercase ASCII letter; `None` for anything else.
#[inline(always)]
pub fn letter_value(c: char) -> Option<u32> {
    if c.is_ascii_lowercase() {
        Some(LETTER_VALUES[(c as u8 - b'a') as usize] as u32)
    } else {
        None
    }
}

#[inline(always)]
fn is_plain_vowel(b: u8) -> bool {
    VOWELS.contains(&b)
}

/// Returns true if the byte at `index` acts as a vowel within `word`.
///
/// `y` is a vowel only when neither neighbour is a plain vowel; a missing
/// neighbour (start or end of word) counts as "not a vowel".
#[inline]
pub fn is_vowel_at(word: &[u8], index: usize) -> bool {
    match word.get(index) {
        Some(&b'y') => {
            let prev = index.checked_sub(1).and_then(|i| word.get(i));
            let next = word.get(index + 1);
            !prev.is_some_and(|&b| is_plain_vowel(b)) && !next.is_some_and(|&b| is_plain_vowel(b))
        }
        Some(&b) => is_plain_vowel(b),
        None => false,
    }
}

/// Looks up a karmic debt total.
#[inline]
pub fn karmic_debt(total: u32) -> Option<KarmicDebt> {
    KARMIC_DEBTS.iter().find(|d| d.number == total).cloned()
}

/// Age ranges for a life path base.
///
/// # Errors
///
/// Returns `NumerologyError::PeriodOutOfRange` if `base` is not in 1-9.
#[inline]
pub fn age_periods(base: u32) -> Result<&'static [AgeRange; 3], NumerologyError> {
    base.checked_sub(1)
        .and_then(|i| AGE_PERIODS.get(i as usize))
        .ok_or(NumerologyError::PeriodOutOfRange { base })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::{reduce_except, reduce_traced, MASTER_NUMBERS};

    #[test]
    fn every_letter_maps_into_one_to_nine() {
        for c in 'a'..='z' {
            let v = letter_value(c).unwrap();
            assert!((1..=9).contains(&v), "{c} maps to {v}");
        }
    }

    #[test]
    fn cipher_spot_checks() {
        assert_eq!(letter_value('a'), Some(1));
        assert_eq!(letter_value('i'), Some(9));
        assert_eq!(letter_value('j'), Some(1));
        assert_eq!(letter_value('r'), Some(9));
        assert_eq!(letter_value('s'), Some(1));
        assert_eq!(letter_value('y'), Some(7));
        assert_eq!(letter_value('z'), Some(8));
    }

    #[test]
    fn non_letters_have_no_value() {
        for c in ['A', '0', '9', '-', ' ', 'é', 'đ'] {
            assert_eq!(letter_value(c), None);
        }
    }

    #[test]
    fn plain_vowels() {
        let word = b"aeiou";
        for i in 0..word.len() {
            assert!(is_vowel_at(word, i));
        }
        assert!(!is_vowel_at(b"bcd", 1));
    }

    #[test]
    fn y_between_consonants_is_vowel() {
        assert!(is_vowel_at(b"lynn", 1));
        assert!(is_vowel_at(b"y", 0));
    }

    #[test]
    fn y_at_word_edge_uses_single_neighbour() {
        assert!(is_vowel_at(b"yvonne", 0));
        assert!(!is_vowel_at(b"yolanda", 0));
        assert!(is_vowel_at(b"emily", 4));
        assert!(!is_vowel_at(b"joey", 3));
    }

    #[test]
    fn y_next_to_vowel_is_consonant() {
        assert!(!is_vowel_at(b"maya", 2));
        assert!(!is_vowel_at(b"bryan", 2));
    }

    #[test]
    fn out_of_bounds_is_not_a_vowel() {
        assert!(!is_vowel_at(b"ab", 2));
        assert!(!is_vowel_at(b"", 0));
    }

    #[test]
    fn karmic_debt_lookup() {
        assert_eq!(karmic_debt(13).unwrap().display_number, "13/4");
        assert_eq!(karmic_debt(19).unwrap().display_number, "19/1");
        assert!(karmic_debt(15).is_none());
        assert!(karmic_debt(0).is_none());
    }

    #[test]
    fn karmic_labels_pair_total_with_full_reduction() {
        for debt in &KARMIC_DEBTS {
            let label = format!("{}/{}", debt.number, reduce_except(debt.number, &[]));
            assert_eq!(debt.display_number, label);
        }
    }

    #[test]
    fn nineteen_label_is_not_its_last_trace_step() {
        // 19 -> 10 -> 1, so the trace keeps 10 rather than 19
        assert_eq!(reduce_traced(19, &MASTER_NUMBERS).to_string(), "10/1");
        assert_eq!(karmic_debt(19).unwrap().display_number, "19/1");
    }

    #[test]
    fn age_periods_are_contiguous() {
        for base in 1..=9 {
            let [p1, p2, p3] = age_periods(base).unwrap();
            assert_eq!(p1.from, 0);
            assert_eq!(p1.to, Some(p2.from));
            assert_eq!(p2.to, Some(p3.from));
            assert!(p3.is_open_ended());
            assert!(p1.from < p2.from && p2.from < p3.from);
        }
    }

    #[test]
    fn base_five_periods() {
        let periods = age_periods(5).unwrap();
        assert_eq!(periods[0], AgeRange::bounded(0, 31));
        assert_eq!(periods[1], AgeRange::bounded(31, 58));
        assert_eq!(periods[2], AgeRange::open(58));
    }

    #[test]
    fn base_outside_table_is_an_error() {
        assert_eq!(
            age_periods(0),
            Err(NumerologyError::PeriodOutOfRange { base: 0 })
        );
        assert_eq!(
            age_periods(10),
            Err(NumerologyError::PeriodOutOfRange { base: 10 })
        );
    }
}
