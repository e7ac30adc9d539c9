pub mod clamp_value;
pub mod format_value;
pub mod normalize_decimal;
pub mod parse_float_prefix;
pub mod scan_numeric;
