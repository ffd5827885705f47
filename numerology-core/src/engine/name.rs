//! Name-based metrics.

use tracing::trace;

use crate::analyzer::for_each_initial;
use crate::engine::types::Numerology;
use crate::reduce::{reduce, reduce_except};
use crate::tables::{is_vowel_at, letter_value};

const SOUL_URGE_EXCEPTIONS: [u32; 2] = [11, 22];

impl Numerology {
    /// Expression number: every letter of the normalized name, master
    /// numbers kept.
    pub fn expression(&self) -> u32 {
        let sum: u32 = self.name.chars().filter_map(letter_value).sum();
        let value = reduce(sum);
        trace!(sum, value, "expression");
        value
    }

    /// Soul urge (heart's desire) number: vowels only, keeping 11 and 22
    /// but not 33.
    pub fn soul_urge(&self) -> u32 {
        let sum = self.letter_sum_where(is_vowel_at);
        let value = reduce_except(sum, &SOUL_URGE_EXCEPTIONS);
        trace!(sum, value, "soul urge");
        value
    }

    /// Personality number: consonants only, no master numbers.
    pub fn personality(&self) -> u32 {
        let sum = self.letter_sum_where(|word, i| !is_vowel_at(word, i));
        let value = reduce_except(sum, &[]);
        trace!(sum, value, "personality");
        value
    }

    /// Balance number: initials of the raw name's words.
    ///
    /// The raw name is not diacritic-folded, so an accented initial such as
    /// the `é` of "élise" has no cipher value and is skipped.
    pub fn balance(&self) -> u32 {
        let sum = initials_sum(&self.raw_name);
        let value = reduce_except(sum, &[]);
        trace!(sum, value, "balance");
        value
    }

    /// Challenge number: initials of the normalized name's words.
    ///
    /// The normalized name holds no spaces, so this only ever sees its
    /// first character.
    pub fn challenge(&self) -> u32 {
        let sum = initials_sum(&self.name);
        let value = reduce(sum);
        trace!(sum, value, "challenge");
        value
    }

    /// The normalized name is ASCII, so byte positions are char positions.
    pub(super) fn letter_sum_where<P>(&self, keep: P) -> u32
    where
        P: Fn(&[u8], usize) -> bool,
    {
        let word = self.name.as_bytes();
        (0..word.len())
            .filter(|&i| keep(word, i))
            .filter_map(|i| letter_value(word[i] as char))
            .sum()
    }
}

fn initials_sum(text: &str) -> u32 {
    let mut sum = 0;
    for_each_initial(text, |c| {
        if let Some(v) = letter_value(c) {
            sum += v;
        }
    });
    sum
}
