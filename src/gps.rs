//! GPS tag decoding.
//!
//! Cameras store coordinates as sexagesimal rationals (`"40 26 46.3"` is
//! degrees, minutes, seconds) with a separate hemisphere letter. This
//! module folds them into signed decimal degrees and decodes the optional
//! altitude, speed, and bearing tags around them.
//!
//! The block is all-or-nothing: without both coordinates, or with a
//! hemisphere reference outside N/S/E/W, no record is produced at all. An
//! unrecognized reference means the sign cannot be trusted, and a wrongly
//! signed coordinate is worse than no coordinate.

use serde::Serialize;

use crate::format::format_float;
use crate::rational::parse_rational;
use crate::raw::RawExif;

/// Decoded GPS sub-record: signed decimal coordinates plus the optional
/// annotated altitude, speed, and bearing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpsSummary {
    /// Decimal degrees, negative for the southern hemisphere, rounded to
    /// 5 decimals (about 1 m of precision).
    pub latitude: f64,
    /// Decimal degrees, negative for the western hemisphere.
    pub longitude: f64,
    /// Formatted altitude with an `" m"` suffix, negative below sea level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<String>,
    /// Formatted speed with a unit suffix from the speed reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
    /// Image bearing in degrees, rounded to 2 decimals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<f64>,
    /// `"True North"` or `"Magnetic North"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction_ref: Option<String>,
}

/// Decode the GPS block of a raw record, or `None` when a coordinate is
/// missing or a hemisphere reference is unrecognized.
///
/// Altitude, speed, and bearing are each independently optional inside a
/// produced record; one of them failing to parse drops only that field.
///
/// # Example
///
/// ```rust
/// use exif_tidy::{RawExif, gps::decode_gps};
///
/// let raw = RawExif {
///     gps_latitude: "40 26 46.3".into(),
///     gps_latitude_ref: "S".into(),
///     gps_longitude: "73 58 12.0".into(),
///     gps_longitude_ref: "W".into(),
///     ..Default::default()
/// };
///
/// let gps = decode_gps(&raw).unwrap();
/// assert_eq!(gps.latitude, -40.44619);
/// assert_eq!(gps.longitude, -73.97);
/// ```
pub fn decode_gps(raw: &RawExif) -> Option<GpsSummary> {
    if raw.gps_latitude.is_empty() || raw.gps_longitude.is_empty() {
        return None;
    }

    let latitude = match raw.gps_latitude_ref.as_str() {
        "N" | "n" => parse_coordinate(&raw.gps_latitude),
        "S" | "s" => -parse_coordinate(&raw.gps_latitude),
        _ => return None,
    };
    let longitude = match raw.gps_longitude_ref.as_str() {
        "E" | "e" => parse_coordinate(&raw.gps_longitude),
        "W" | "w" => -parse_coordinate(&raw.gps_longitude),
        _ => return None,
    };

    let mut gps = GpsSummary {
        latitude: round_to(latitude, 5),
        longitude: round_to(longitude, 5),
        altitude: None,
        speed: None,
        direction: None,
        direction_ref: None,
    };

    if !raw.gps_altitude.is_empty() {
        if let Ok(alt) = parse_rational(&raw.gps_altitude) {
            // Altitude reference 1 means below sea level.
            let alt = if raw.gps_altitude_ref == "1" { -alt } else { alt };
            gps.altitude = Some(format_float(alt, 0) + " m");
        }
    }

    if !raw.gps_speed.is_empty() && !raw.gps_speed_ref.is_empty() {
        if let Ok(speed) = parse_rational(&raw.gps_speed) {
            let unit = match raw.gps_speed_ref.as_str() {
                "K" | "k" => " km/h",
                "M" | "m" => " mph",
                "N" | "n" => " kn",
                _ => "",
            };
            gps.speed = Some(format_float(speed, 2) + unit);
        }
    }

    if !raw.gps_img_direction.is_empty() {
        if let Ok(dir) = parse_rational(&raw.gps_img_direction) {
            gps.direction = Some(round_to(dir, 2));
            gps.direction_ref = match raw.gps_img_direction_ref.as_str() {
                "T" | "t" => Some("True North".to_string()),
                "M" | "m" => Some("Magnetic North".to_string()),
                _ => None,
            };
        }
    }

    Some(gps)
}

/// Fold sexagesimal components into decimal degrees by summing
/// `component / 60^i`. A component that fails to parse contributes zero;
/// the rest of the coordinate still decodes.
fn parse_coordinate(value: &str) -> f64 {
    value
        .split(' ')
        .enumerate()
        .map(|(i, part)| match parse_rational(part) {
            Ok(v) => v / 60f64.powi(i as i32),
            Err(e) => {
                log::warn!("Failed to parse GPS coordinate component {part:?} in {value:?}: {e}");
                0.0
            }
        })
        .sum()
}

/// Round to `decimals` places, half away from zero.
fn round_to(v: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords() -> RawExif {
        RawExif {
            gps_latitude: "40 26 46.3".into(),
            gps_latitude_ref: "N".into(),
            gps_longitude: "73 58 12.0".into(),
            gps_longitude_ref: "E".into(),
            ..Default::default()
        }
    }

    // ── coordinates ──────────────────────────────────────────────────

    #[test]
    fn decodes_and_rounds_coordinates() {
        let gps = decode_gps(&coords()).unwrap();
        assert_eq!(gps.latitude, 40.44619);
        assert_eq!(gps.longitude, 73.97);
    }

    #[test]
    fn south_and_west_negate() {
        let mut raw = coords();
        raw.gps_latitude_ref = "S".into();
        raw.gps_longitude_ref = "W".into();

        let gps = decode_gps(&raw).unwrap();
        assert_eq!(gps.latitude, -40.44619);
        assert_eq!(gps.longitude, -73.97);
    }

    #[test]
    fn lowercase_references_accepted() {
        let mut raw = coords();
        raw.gps_latitude_ref = "s".into();
        raw.gps_longitude_ref = "w".into();

        let gps = decode_gps(&raw).unwrap();
        assert_eq!(gps.latitude, -40.44619);
        assert_eq!(gps.longitude, -73.97);
    }

    #[test]
    fn rational_components_accepted() {
        let mut raw = coords();
        raw.gps_latitude = "40/1 26/1 463/10".into();

        let gps = decode_gps(&raw).unwrap();
        assert_eq!(gps.latitude, 40.44619);
    }

    #[test]
    fn degrees_only_coordinate() {
        let mut raw = coords();
        raw.gps_latitude = "40.5".into();

        let gps = decode_gps(&raw).unwrap();
        assert_eq!(gps.latitude, 40.5);
    }

    #[test]
    fn missing_coordinate_drops_record() {
        let mut raw = coords();
        raw.gps_latitude = String::new();
        assert_eq!(decode_gps(&raw), None);

        let mut raw = coords();
        raw.gps_longitude = String::new();
        assert_eq!(decode_gps(&raw), None);
    }

    #[test]
    fn unrecognized_reference_drops_record() {
        // The coordinates themselves parse fine, but the sign is untrustworthy.
        let mut raw = coords();
        raw.gps_latitude_ref = "X".into();
        assert_eq!(decode_gps(&raw), None);

        let mut raw = coords();
        raw.gps_longitude_ref = "NW".into();
        assert_eq!(decode_gps(&raw), None);

        let mut raw = coords();
        raw.gps_latitude_ref = String::new();
        assert_eq!(decode_gps(&raw), None);
    }

    #[test]
    fn bad_component_zeroes_only_itself() {
        let mut raw = coords();
        raw.gps_latitude = "40 borked 46.3".into();

        // 40 + 0/60 + 46.3/3600
        let gps = decode_gps(&raw).unwrap();
        assert_eq!(gps.latitude, 40.01286);
    }

    // ── altitude ─────────────────────────────────────────────────────

    #[test]
    fn altitude_formatted_in_meters() {
        let mut raw = coords();
        raw.gps_altitude = "1234/10".into();

        let gps = decode_gps(&raw).unwrap();
        assert_eq!(gps.altitude.as_deref(), Some("123 m"));
    }

    #[test]
    fn altitude_below_sea_level() {
        let mut raw = coords();
        raw.gps_altitude = "421/10".into();
        raw.gps_altitude_ref = "1".into();

        let gps = decode_gps(&raw).unwrap();
        assert_eq!(gps.altitude.as_deref(), Some("-42 m"));
    }

    #[test]
    fn unparseable_altitude_omitted() {
        let mut raw = coords();
        raw.gps_altitude = "12/0".into();

        let gps = decode_gps(&raw).unwrap();
        assert_eq!(gps.altitude, None);
        assert_eq!(gps.latitude, 40.44619);
    }

    // ── speed ────────────────────────────────────────────────────────

    #[test]
    fn speed_units_from_reference() {
        for (reference, expected) in [("K", "60.1 km/h"), ("M", "60.1 mph"), ("N", "60.1 kn")] {
            let mut raw = coords();
            raw.gps_speed = "601/10".into();
            raw.gps_speed_ref = reference.into();

            let gps = decode_gps(&raw).unwrap();
            assert_eq!(gps.speed.as_deref(), Some(expected));
        }
    }

    #[test]
    fn unrecognized_speed_reference_keeps_bare_number() {
        // Permissive on purpose: the number is still worth emitting even
        // when the unit letter is unknown.
        let mut raw = coords();
        raw.gps_speed = "601/10".into();
        raw.gps_speed_ref = "X".into();

        let gps = decode_gps(&raw).unwrap();
        assert_eq!(gps.speed.as_deref(), Some("60.1"));
    }

    #[test]
    fn speed_needs_both_value_and_reference() {
        let mut raw = coords();
        raw.gps_speed = "601/10".into();
        assert_eq!(decode_gps(&raw).unwrap().speed, None);

        let mut raw = coords();
        raw.gps_speed_ref = "K".into();
        assert_eq!(decode_gps(&raw).unwrap().speed, None);
    }

    // ── bearing ──────────────────────────────────────────────────────

    #[test]
    fn direction_rounded_with_reference_label() {
        let mut raw = coords();
        raw.gps_img_direction = "191/10".into();
        raw.gps_img_direction_ref = "T".into();

        let gps = decode_gps(&raw).unwrap();
        assert_eq!(gps.direction, Some(19.1));
        assert_eq!(gps.direction_ref.as_deref(), Some("True North"));
    }

    #[test]
    fn magnetic_reference_label() {
        let mut raw = coords();
        raw.gps_img_direction = "275".into();
        raw.gps_img_direction_ref = "m".into();

        let gps = decode_gps(&raw).unwrap();
        assert_eq!(gps.direction, Some(275.0));
        assert_eq!(gps.direction_ref.as_deref(), Some("Magnetic North"));
    }

    #[test]
    fn unrecognized_direction_reference_keeps_bearing() {
        let mut raw = coords();
        raw.gps_img_direction = "191/10".into();
        raw.gps_img_direction_ref = "Q".into();

        let gps = decode_gps(&raw).unwrap();
        assert_eq!(gps.direction, Some(19.1));
        assert_eq!(gps.direction_ref, None);
    }

    #[test]
    fn unparseable_direction_omits_both_fields() {
        let mut raw = coords();
        raw.gps_img_direction = "x/y".into();
        raw.gps_img_direction_ref = "T".into();

        let gps = decode_gps(&raw).unwrap();
        assert_eq!(gps.direction, None);
        assert_eq!(gps.direction_ref, None);
    }
}
