/// First code point (digit zero) of every non-ASCII run of Unicode decimal
/// digits (general category `Nd`, Unicode 14). Each run spans ten code points.
const DECIMAL_ZEROS: [char; 65] = [
    '\u{0660}', '\u{06F0}', '\u{07C0}', '\u{0966}', '\u{09E6}', '\u{0A66}', '\u{0AE6}', '\u{0B66}',
    '\u{0BE6}', '\u{0C66}', '\u{0CE6}', '\u{0D66}', '\u{0DE6}', '\u{0E50}', '\u{0ED0}', '\u{0F20}',
    '\u{1040}', '\u{1090}', '\u{17E0}', '\u{1810}', '\u{1946}', '\u{19D0}', '\u{1A80}', '\u{1A90}',
    '\u{1B50}', '\u{1BB0}', '\u{1C40}', '\u{1C50}', '\u{A620}', '\u{A8D0}', '\u{A900}', '\u{A9D0}',
    '\u{A9F0}', '\u{AA50}', '\u{ABF0}', '\u{FF10}', '\u{104A0}', '\u{10D30}', '\u{11066}', '\u{110F0}',
    '\u{11136}', '\u{111D0}', '\u{112F0}', '\u{11450}', '\u{114D0}', '\u{11650}', '\u{116C0}', '\u{11730}',
    '\u{118E0}', '\u{11950}', '\u{11C50}', '\u{11D50}', '\u{11DA0}', '\u{16A60}', '\u{16AC0}', '\u{16B50}',
    '\u{1D7CE}', '\u{1D7D8}', '\u{1D7E2}', '\u{1D7EC}', '\u{1D7F6}', '\u{1E140}', '\u{1E2F0}', '\u{1E950}',
    '\u{1FBF0}',
];

/// Unicode decimal digit: ASCII `0`-`9` or any other `Nd` character.
pub(crate) fn is_decimal(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    let run = match DECIMAL_ZEROS.binary_search(&c) {
        Ok(_) => return true,
        Err(0) => return false,
        Err(position) => DECIMAL_ZEROS[position - 1],
    };
    (c as u32) - (run as u32) < 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_digits() {
        assert!(('0'..='9').all(is_decimal));
        assert!(!is_decimal('a'));
        assert!(!is_decimal('.'));
    }

    #[test]
    fn test_unicode_decimal_digits() {
        // Arabic-Indic, Devanagari, fullwidth, mathematical bold
        for c in ['\u{0660}', '\u{0663}', '\u{0669}', '\u{096F}', '\u{FF15}', '\u{1D7CE}', '\u{1D7FF}'] {
            assert!(is_decimal(c), "{c:?}");
        }
    }

    #[test]
    fn test_other_numerics_are_not_decimal() {
        // superscript two, vulgar half, roman numeral one, circled one, just past a run
        for c in ['\u{00B2}', '\u{00BD}', '\u{2160}', '\u{2460}', '\u{066A}', '\u{065F}'] {
            assert!(!is_decimal(c), "{c:?}");
        }
    }

    #[test]
    fn test_table_is_sorted() {
        assert!(DECIMAL_ZEROS.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
