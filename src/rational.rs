//! Rational tag parsing.
//!
//! Many EXIF tags encode numbers as text fractions: a plain value (`"72"`)
//! or a numerator/denominator pair (`"1/250"`). [`parse_rational`] is the
//! strict parser; [`parse_rational_lenient`] degrades malformed input to
//! zero with a logged diagnostic so a bad tag never aborts decoding of the
//! rest of the record.

use anyhow::{Context, Result};

/// Parse a rational tag value (`"N"` or `"N/D"`) into a float.
///
/// Surrounding whitespace is trimmed, and an empty value parses as 0. A
/// zero numerator short-circuits before the denominator is even looked at,
/// so `"0/0"` is valid. More than one slash, an empty numerator, or a zero
/// denominator under a nonzero numerator is an error.
///
/// # Example
///
/// ```rust
/// use exif_tidy::rational::parse_rational;
///
/// assert_eq!(parse_rational("1/250").unwrap(), 0.004);
/// assert_eq!(parse_rational("72").unwrap(), 72.0);
/// assert!(parse_rational("5/0").is_err());
/// ```
pub fn parse_rational(value: &str) -> Result<f64> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0.0);
    }

    let parts: Vec<&str> = value.splitn(3, '/').collect();
    if parts.len() > 2 {
        anyhow::bail!("More than one slash");
    }

    if parts[0].is_empty() {
        anyhow::bail!("Empty numerator");
    }
    let num: f64 = parts[0].parse().context("Invalid numerator")?;

    if parts.len() == 1 || num == 0.0 {
        return Ok(num);
    }

    let den: f64 = parts[1].parse().context("Invalid denominator")?;
    if den == 0.0 {
        anyhow::bail!("Zero denominator");
    }

    Ok(num / den)
}

/// Parse a rational tag value, degrading to 0 on malformed input.
///
/// Logs the failure as a warning instead of propagating it, so metadata
/// decoding never aborts the surrounding request over one bad tag.
pub fn parse_rational_lenient(value: &str) -> f64 {
    match parse_rational(value) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("Failed to parse EXIF rational value {value:?}: {e}");
            0.0
        }
    }
}
