//! Assembly of the normalized record.
//!
//! [`normalize`] runs one pass over a [`RawExif`], applying each field's
//! presence gate (non-empty string, nonzero code) and the matching
//! formatter or decoder. Absent fields stay absent in the serialized
//! output; nothing is ever emitted as `null`.

use serde::Serialize;

use crate::format::{format_datetime, format_float, format_human_rational, format_resolution};
use crate::gps::{GpsSummary, decode_gps};
use crate::rational::parse_rational_lenient;
use crate::raw::RawExif;
use crate::tags::{self, FlashValue, TagValue, decode};

/// The normalized, JSON-ready metadata record.
///
/// Sparse by construction: every field is skipped during serialization
/// when its raw source was absent. The exception is
/// [`flash_mode`](Self::flash_mode), which always carries a value because
/// flash code 0 still means something ("No Flash").
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExifSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ycbcr_positioning: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exif_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components_configuration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focal_length_in_35mm_film: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exif_image_width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exif_image_height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time_original: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time_digitized: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure_program: Option<TagValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shutter_speed_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aperture_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure_compensation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metering_mode: Option<TagValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression: Option<TagValue>,
    /// Whether the flash fired; skipped when false, like every other
    /// absent-or-default field.
    #[serde(skip_serializing_if = "is_false")]
    pub flash: bool,
    /// Always present; see [`tags::decode_flash`].
    pub flash_mode: FlashValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focal_length: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subject_area: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_space: Option<TagValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensing_method: Option<TagValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure_mode: Option<TagValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white_balance: Option<TagValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_capture_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gps: Option<GpsSummary>,
}

/// Normalize one raw tag record into a typed, sparse summary.
///
/// Never fails: a malformed field degrades individually (logged and
/// zeroed, or omitted) and the rest of the record is still produced.
///
/// # Example
///
/// ```rust
/// use exif_tidy::{RawExif, TagValue, normalize};
///
/// let raw = RawExif {
///     model: "Canon EOS 40D".into(),
///     compression: 6,
///     focal_length: "135/1".into(),
///     ..Default::default()
/// };
///
/// let summary = normalize(&raw);
/// assert_eq!(summary.model.as_deref(), Some("Canon EOS 40D"));
/// assert_eq!(summary.compression, Some(TagValue::Label("JPEG (old-style)")));
/// assert_eq!(summary.focal_length.as_deref(), Some("135"));
/// assert_eq!(summary.make, None);
/// ```
pub fn normalize(raw: &RawExif) -> ExifSummary {
    ExifSummary {
        make: non_empty(&raw.make),
        model: non_empty(&raw.model),
        orientation: non_zero(raw.orientation),
        software: non_empty(&raw.software),
        ycbcr_positioning: non_zero(raw.ycbcr_positioning),
        exif_version: non_empty(&raw.exif_version),
        iso: non_zero(raw.iso_speed_ratings),
        components_configuration: non_empty(&raw.components_configuration),
        focal_length_in_35mm_film: non_zero(raw.focal_length_in_35mm_film),
        exif_image_width: non_zero(raw.pixel_x_dimension),
        exif_image_height: non_zero(raw.pixel_y_dimension),
        x_resolution: (!raw.x_resolution.is_empty())
            .then(|| format_resolution(&raw.x_resolution, raw.resolution_unit)),
        y_resolution: (!raw.y_resolution.is_empty())
            .then(|| format_resolution(&raw.y_resolution, raw.resolution_unit)),
        date_time: format_datetime(&raw.datetime),
        date_time_original: format_datetime(&raw.date_time_original),
        date_time_digitized: format_datetime(&raw.date_time_digitized),
        f_number: (!raw.f_number.is_empty())
            .then(|| format_float(parse_rational_lenient(&raw.f_number), 2)),
        exposure_time: (!raw.exposure_time.is_empty())
            .then(|| format_human_rational(&raw.exposure_time)),
        exposure_program: decode_gated(raw.exposure_program, tags::exposure_program),
        shutter_speed_value: (!raw.shutter_speed_value.is_empty())
            .then(|| format_human_rational(&raw.shutter_speed_value)),
        aperture_value: (!raw.aperture_value.is_empty())
            .then(|| format_human_rational(&raw.aperture_value)),
        brightness_value: (!raw.brightness_value.is_empty())
            .then(|| format_human_rational(&raw.brightness_value)),
        // "0" is skipped outright, but "0/1" still formats (to "0").
        exposure_compensation: (!raw.exposure_bias_value.is_empty()
            && raw.exposure_bias_value != "0")
            .then(|| format_human_rational(&raw.exposure_bias_value)),
        metering_mode: decode_gated(raw.metering_mode, tags::metering_mode),
        compression: decode_gated(raw.compression, tags::compression),
        flash: tags::flash_fired(raw.flash),
        flash_mode: tags::decode_flash(raw.flash),
        focal_length: (!raw.focal_length.is_empty())
            .then(|| format_float(parse_rational_lenient(&raw.focal_length), 2)),
        subject_area: parse_subject_area(&raw.subject_area),
        color_space: decode_gated(raw.color_space, tags::color_space),
        sensing_method: decode_gated(raw.sensing_method, tags::sensing_method),
        exposure_mode: decode_gated(raw.exposure_mode, tags::exposure_mode),
        white_balance: decode_gated(raw.white_balance, tags::white_balance),
        scene_type: non_empty(&raw.scene_type),
        scene_capture_type: non_zero(raw.scene_capture_type),
        gps: decode_gps(raw),
    }
}

/// Empty string means the tag was absent.
fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Zero code means the tag was absent.
fn non_zero(code: i32) -> Option<i32> {
    (code != 0).then_some(code)
}

/// Decode a coded tag behind the "code > 0 means present" gate. Flash is
/// the one attribute that bypasses this gate (its bit 0 is meaningful even
/// at code 0).
fn decode_gated(code: i32, table: fn(i32) -> Option<&'static str>) -> Option<TagValue> {
    (code > 0).then(|| decode(code, table))
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// Parse the subject area tag (2–4 space-separated integers describing a
/// point or region). The token-count bound applies to the raw token count,
/// before unparseable tokens are dropped, so the kept sequence can come
/// out shorter than two.
fn parse_subject_area(value: &str) -> Vec<i32> {
    let parts: Vec<&str> = value.split(' ').collect();
    if parts.len() < 2 || parts.len() > 4 {
        return Vec::new();
    }
    parts.iter().filter_map(|p| p.parse().ok()).collect()
}
