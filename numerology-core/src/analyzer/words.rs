//! Word initial extraction.
//!
//! Balance and Challenge numbers only look at the first character of each
//! word. Words are delimited by the ASCII space (0x20) alone: tabs and other
//! whitespace stay inside a word, and runs of spaces produce empty words that
//! emit nothing.
//!
//! ```
//! use numerology_core::analyzer::words::for_each_initial;
//!
//! let mut initials = String::new();
//! for_each_initial("anna  maria lee", |c| initials.push(c));
//! assert_eq!(initials, "aml");
//! ```

use memchr::memchr_iter;

/// Emits the first character of every non-empty space-delimited word,
/// left to right.
#[inline]
pub fn for_each_initial<F>(text: &str, mut emit: F)
where
    F: FnMut(char),
{
    let mut start = 0usize;

    // `start` and `i` always sit on ASCII space boundaries, so the slices
    // below never split a UTF-8 sequence.
    for i in memchr_iter(b' ', text.as_bytes()) {
        if let Some(c) = text[start..i].chars().next() {
            emit(c);
        }
        start = i + 1;
    }

    if let Some(c) = text[start..].chars().next() {
        emit(c);
    }
}
