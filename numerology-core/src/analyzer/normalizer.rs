/// Configuration options for name normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// When enabled, maps Vietnamese vowel diacritics and `đ` to their base
    /// Latin letter. For example, "Nguyễn" becomes "nguyen".
    /// When disabled, those letters are dropped by the character filter.
    pub fold_diacritics: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            fold_diacritics: true,
        }
    }
}

/// Name normalizer used before any letter-sum metric.
///
/// Performs the following operations, in order:
/// - Trims leading/trailing whitespace
/// - Converts all characters to lowercase (Unicode-aware)
/// - Optionally folds Vietnamese diacritics to the base letter
/// - Drops everything except `0-9`, `a-z` and `-`
///
/// Whitespace is removed entirely, so the output never contains a space.
///
/// # Examples
///
/// ```
/// use numerology_core::analyzer::NameNormalizer;
///
/// let normalizer = NameNormalizer::default();
/// assert_eq!(normalizer.normalize("Nguyễn Văn A"), "nguyenvana");
/// assert_eq!(normalizer.normalize("  Jean-Luc  "), "jean-luc");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NameNormalizer {
    config: NormalizerConfig,
}

impl NameNormalizer {
    /// Creates a new normalizer with the specified configuration.
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Normalizes a name into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let fold = self.config.fold_diacritics;

        for lowered in input.trim().chars().flat_map(char::to_lowercase) {
            let ch = if fold { fold_vietnamese(lowered) } else { lowered };
            if is_kept(ch) {
                out.push(ch);
            }
        }
    }

    /// Normalizes a name and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

/// Convenience wrapper over the default [`NameNormalizer`].
#[inline]
pub fn normalize(input: &str) -> String {
    NameNormalizer::default().normalize(input)
}

#[inline(always)]
const fn is_kept(c: char) -> bool {
    matches!(c, '0'..='9' | 'a'..='z' | '-')
}

/// Input is already lowercase.
#[inline(always)]
fn fold_vietnamese(c: char) -> char {
    match c {
        'à' | 'á' | 'ạ' | 'ả' | 'ã' | 'â' | 'ầ' | 'ấ' | 'ậ' | 'ẩ' | 'ẫ' | 'ă' | 'ằ' | 'ắ' | 'ặ'
        | 'ẳ' | 'ẵ' => 'a',

        'è' | 'é' | 'ẹ' | 'ẻ' | 'ẽ' | 'ê' | 'ề' | 'ế' | 'ệ' | 'ể' | 'ễ' => 'e',

        'ì' | 'í' | 'ị' | 'ỉ' | 'ĩ' => 'i',

        'ò' | 'ó' | 'ọ' | 'ỏ' | 'õ' | 'ô' | 'ồ' | 'ố' | 'ộ' | 'ổ' | 'ỗ' | 'ơ' | 'ờ' | 'ớ' | 'ợ'
        | 'ở' | 'ỡ' => 'o',

        'ù' | 'ú' | 'ụ' | 'ủ' | 'ũ' | 'ư' | 'ừ' | 'ứ' | 'ự' | 'ử' | 'ữ' => 'u',

        'ỳ' | 'ý' | 'ỵ' | 'ỷ' | 'ỹ' => 'y',

        'đ' => 'd',

        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &str) -> String {
        NameNormalizer::default().normalize(input)
    }

    fn norm_no_fold(input: &str) -> String {
        NameNormalizer::new(NormalizerConfig {
            fold_diacritics: false,
        })
        .normalize(input)
    }

    #[test]
    fn ascii_basic_lowercase() {
        assert_eq!(norm("MARIA"), "maria");
        assert_eq!(norm("MaRiA"), "maria");
    }

    #[test]
    fn vietnamese_full_name() {
        assert_eq!(norm("Nguyễn Văn A"), "nguyenvana");
        assert_eq!(norm("Trần Thị Bích Ngọc"), "tranthibichngoc");
    }

    #[test]
    fn uppercase_diacritics_fold_after_lowercasing() {
        assert_eq!(norm("ĐẶNG"), "dang");
        assert_eq!(norm("LÊ HỮU ĐỨC"), "lehuuduc");
    }

    #[test]
    fn every_vowel_family_folds() {
        assert_eq!(norm("ẵ ễ ĩ ỡ ữ ỹ đ"), "aeiouyd");
    }

    #[test]
    fn whitespace_removed_everywhere() {
        assert_eq!(norm("  anna   maria  "), "annamaria");
        assert_eq!(norm("anna\tmaria\nlee"), "annamarialee");
    }

    #[test]
    fn hyphen_and_digits_survive() {
        assert_eq!(norm("Jean-Luc"), "jean-luc");
        assert_eq!(norm("Agent 007"), "agent007");
    }

    #[test]
    fn punctuation_dropped() {
        assert_eq!(norm("O'Brien, Jr."), "obrienjr");
        assert_eq!(norm("a_b@c"), "abc");
    }

    #[test]
    fn other_diacritics_are_not_folded() {
        assert_eq!(norm("Müller"), "mller");
        assert_eq!(norm("Søren"), "sren");
    }

    #[test]
    fn non_latin_scripts_vanish() {
        assert_eq!(norm("Алексей"), "");
        assert_eq!(norm("山田 taro"), "taro");
    }

    #[test]
    fn fold_disabled_drops_vietnamese_letters() {
        assert_eq!(norm_no_fold("Nguyễn Văn A"), "nguynvna");
        assert_eq!(norm_no_fold("Đức"), "c");
    }

    #[test]
    fn empty_and_whitespace_only() {
        assert_eq!(norm(""), "");
        assert_eq!(norm("   "), "");
        assert_eq!(norm(" \t\n\r "), "");
    }

    #[test]
    fn idempotent() {
        for s in ["Nguyễn Văn A", "Jean-Luc Picard", "  x  "] {
            let once = norm(s);
            assert_eq!(norm(&once), once);
        }
    }

    #[test]
    fn output_has_no_space() {
        assert!(!norm("a b c d e").contains(' '));
    }

    #[test]
    fn normalize_into_reuses_capacity() {
        let normalizer = NameNormalizer::default();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        normalizer.normalize_into("MARIA", &mut buf);
        assert_eq!(buf, "maria");
        assert_eq!(buf.capacity(), cap);

        normalizer.normalize_into("Lê", &mut buf);
        assert_eq!(buf, "le");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn free_function_matches_default() {
        assert_eq!(normalize("Phạm Minh"), norm("Phạm Minh"));
    }
}
