const INFINITY_LITERAL: &str = "Infinity";

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length of the decimal literal at the start of `bytes`
/// (`[+-]?DIGITS[.DIGITS][(e|E)[+-]?DIGITS]`), or 0 when there is none.
fn decimal_literal_len(bytes: &[u8]) -> usize {
    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let integer_digits = count_digits(&bytes[pos..]);
    pos += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[pos + 1..]);
        if integer_digits > 0 || fraction_digits > 0 {
            pos += 1 + fraction_digits;
        }
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exponent_digits = count_digits(&bytes[exp_pos.min(bytes.len())..]);
        if exponent_digits > 0 {
            pos = exp_pos + exponent_digits;
        }
    }

    pos
}

/// Parses the longest numeric prefix of `text`, ignoring leading whitespace
/// and any trailing garbage. Returns `None` when no prefix is numeric.
///
/// `"12x"` gives 12, `" .5"` gives 0.5, `"-"` and `"abc"` give `None`.
#[must_use]
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();

    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned.starts_with(INFINITY_LITERAL) {
        return Some(if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let len = decimal_literal_len(trimmed.as_bytes());
    if len == 0 {
        return None;
    }

    trimmed[..len].parse::<f64>().ok()
}
