//! Strict numeric text conversion.
//!
//! These functions back both the command line validation and the stringified
//! defaults/ranges in the generated help text.
//! Parsing is strict: the input is trimmed of surrounding whitespace and then
//! the *entire* remainder must form the number - trailing characters (ex:
//! `"12x"`, `"3.14abc"`) always fail, partial matches are never accepted.

/// Parse a base-10 floating point number, rejecting any trailing characters.
///
/// ### Example
/// ```
/// use declarg::convert::parse_real;
///
/// assert_eq!(parse_real(" 3.25 "), Some(3.25));
/// assert_eq!(parse_real("3.14abc"), None);
/// ```
pub fn parse_real(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Parse a base-10 integer, rejecting any trailing characters and any value
/// outside the representable `i64` range.
///
/// ### Example
/// ```
/// use declarg::convert::parse_int;
///
/// assert_eq!(parse_int(" -42 "), Some(-42));
/// assert_eq!(parse_int("12x"), None);
/// assert_eq!(parse_int("12.0"), None);
/// ```
pub fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

/// Stringify a real value.
///
/// Whole numbers render with exactly one decimal place (`4.0` becomes `"4.0"`,
/// never `"4"`), so a real default is never mistaken for an integer in the
/// help text.
/// Non-whole numbers use the shortest round-trip form.
pub fn format_real(value: f64) -> String {
    if value.is_finite() && value.floor() == value {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Stringify an integer value in plain base-10.
pub fn format_int(value: i64) -> String {
    value.to_string()
}
