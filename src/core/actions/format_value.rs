/// Text shown in the edit field for a committed value.
///
/// Integral values have no fractional part (`1`, not `1.0`) and negative zero
/// prints as `0`.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }

    value.to_string()
}
