//! Display formatting for normalized tag values.
//!
//! Floats are rendered with trailing zeros trimmed, exposure-style
//! rationals the way photographers write them (`1/250`), resolutions with
//! a unit suffix, and camera timestamps as RFC 3339 minus the timezone
//! offset (EXIF has none).

use chrono::NaiveDateTime;

use crate::rational::parse_rational_lenient;

/// Timestamp layout cameras write (`2023:06:15 10:30:00`).
const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";
const OUTPUT_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format a float with at most `max_decimals` digits, trimming trailing
/// zeros and a dangling decimal point: `3.00` → `"3"`, `3.10` → `"3.1"`.
pub fn format_float(v: f64, max_decimals: usize) -> String {
    let s = format!("{v:.max_decimals$}");
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Render an exposure-style rational the way it is conventionally
/// displayed: `0` stays `"0"`, values at or above 0.3 become a trimmed
/// decimal, and faster fractions become a unit fraction.
///
/// # Example
///
/// ```rust
/// use exif_tidy::format::format_human_rational;
///
/// assert_eq!(format_human_rational("1/250"), "1/250");
/// assert_eq!(format_human_rational("3/10"), "0.3");
/// ```
pub fn format_human_rational(value: &str) -> String {
    let f = parse_rational_lenient(value);
    if f == 0.0 {
        return "0".to_string();
    }
    if f >= 0.3 {
        return format_float(f, 2);
    }

    let den = (1.0 / f).round() as i64;
    format!("1/{den}")
}

/// Format an X/Y resolution rational with the suffix its unit code calls
/// for: 2 is pixels per inch, 3 pixels per centimeter, anything else bare.
pub fn format_resolution(resolution: &str, unit_code: i32) -> String {
    let v = format_float(parse_rational_lenient(resolution), 2);
    match unit_code {
        2 => v + " ppi",
        3 => v + " ppcm",
        _ => v,
    }
}

/// Reformat a camera timestamp (`YYYY:MM:DD HH:MM:SS`) as
/// `YYYY-MM-DDTHH:MM:SS`. Returns `None` when the value does not match the
/// pattern or is not a real calendar date.
pub fn format_datetime(value: &str) -> Option<String> {
    let t = NaiveDateTime::parse_from_str(value, EXIF_DATETIME_FORMAT).ok()?;
    Some(t.format(OUTPUT_DATETIME_FORMAT).to_string())
}
