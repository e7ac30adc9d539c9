/// Replaces every decimal comma with a dot.
#[must_use]
pub fn normalize_decimal_separator(raw: &str) -> String {
    raw.replace(',', ".")
}
