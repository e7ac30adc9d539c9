//! Hand-written scanners for decimal text.
//!
//! Two grammars are recognised:
//! - **strict**: `-?DIGIT+(.DIGIT+)?` covering the whole input
//! - **lenient prefix**: `-?DIGIT*.?DIGIT*` matched greedily from the start,
//!   stopping at the first character that does not fit

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Returns true when the whole input is a plain decimal number.
#[must_use]
pub fn is_strict_decimal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = usize::from(bytes.first() == Some(&b'-'));

    let integer_digits = count_digits(&bytes[pos..]);
    if integer_digits == 0 {
        return false;
    }
    pos += integer_digits;

    if pos == bytes.len() {
        return true;
    }

    if bytes[pos] != b'.' {
        return false;
    }
    pos += 1;

    let fraction_digits = count_digits(&bytes[pos..]);
    fraction_digits > 0 && pos + fraction_digits == bytes.len()
}

/// Longest leading slice made of an optional `-`, digits, at most one `.`,
/// and more digits. May be empty, `"-"`, `"."` or `"-."`.
#[must_use]
pub fn lenient_decimal_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut pos = usize::from(bytes.first() == Some(&b'-'));

    pos += count_digits(&bytes[pos..]);

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        pos += count_digits(&bytes[pos..]);
    }

    // Only ASCII bytes were consumed, so `pos` is a char boundary.
    &text[..pos]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_accepts_plain_numbers() {
        for text in ["0", "7", "12", "-5", "12.5", "-0.25", "100.000"] {
            assert!(is_strict_decimal(text), "{text} should be strict");
        }
    }

    #[test]
    fn strict_rejects_partial_or_decorated_numbers() {
        for text in [
            "", "-", ".", "12.", ".5", "-.5", "+5", "1e3", "12x", "1.2.3", " 1", "1 ", "--1",
        ] {
            assert!(!is_strict_decimal(text), "{text} should not be strict");
        }
    }

    #[test]
    fn prefix_stops_at_first_disallowed_character() {
        assert_eq!(lenient_decimal_prefix("12x"), "12");
        assert_eq!(lenient_decimal_prefix("12.5x"), "12.5");
        assert_eq!(lenient_decimal_prefix("-4px"), "-4");
        assert_eq!(lenient_decimal_prefix("3 4"), "3");
    }

    #[test]
    fn prefix_keeps_dangling_separators() {
        assert_eq!(lenient_decimal_prefix("12."), "12.");
        assert_eq!(lenient_decimal_prefix(".5"), ".5");
        assert_eq!(lenient_decimal_prefix("-.5"), "-.5");
        assert_eq!(lenient_decimal_prefix("-"), "-");
        assert_eq!(lenient_decimal_prefix("."), ".");
    }

    #[test]
    fn prefix_takes_only_one_decimal_point() {
        assert_eq!(lenient_decimal_prefix("1.2.3"), "1.2");
    }

    #[test]
    fn prefix_of_non_numeric_text_is_empty() {
        assert_eq!(lenient_decimal_prefix("abc"), "");
        assert_eq!(lenient_decimal_prefix(""), "");
        assert_eq!(lenient_decimal_prefix("+5"), "");
        assert_eq!(lenient_decimal_prefix("é5"), "");
    }
}
