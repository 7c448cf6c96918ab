use serde::{Deserialize, Serialize};

/// The raw tag record produced by an image metadata extractor.
///
/// This is the loosely-typed shape tags arrive in: text and
/// rational-encoded values as strings, coded values as small integers.
/// An empty string or a zero code means the tag was not present in the
/// image. [`normalize`](crate::normalize()) turns this into the typed,
/// sparse [`ExifSummary`](crate::ExifSummary).
///
/// All fields default to "absent", so a record can be built sparsely:
///
/// # Example
///
/// ```rust
/// use exif_tidy::RawExif;
///
/// let raw = RawExif {
///     make: "Canon".into(),
///     exposure_time: "1/250".into(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawExif {
    pub make: String,
    pub model: String,
    pub orientation: i32,
    pub x_resolution: String,
    pub y_resolution: String,
    pub resolution_unit: i32,
    pub software: String,
    pub datetime: String,
    pub ycbcr_positioning: i32,
    pub compression: i32,
    pub exposure_time: String,
    pub f_number: String,
    pub exposure_program: i32,
    pub iso_speed_ratings: i32,
    pub exif_version: String,
    pub date_time_original: String,
    pub date_time_digitized: String,
    pub components_configuration: String,
    pub shutter_speed_value: String,
    pub aperture_value: String,
    pub brightness_value: String,
    pub exposure_bias_value: String,
    pub metering_mode: i32,
    pub flash: i32,
    pub focal_length: String,
    pub subject_area: String,
    pub color_space: i32,
    pub pixel_x_dimension: i32,
    pub pixel_y_dimension: i32,
    pub sensing_method: i32,
    pub scene_type: String,
    pub exposure_mode: i32,
    pub white_balance: i32,
    pub focal_length_in_35mm_film: i32,
    pub scene_capture_type: i32,
    pub gps_latitude_ref: String,
    pub gps_latitude: String,
    pub gps_longitude_ref: String,
    pub gps_longitude: String,
    pub gps_altitude_ref: String,
    pub gps_altitude: String,
    pub gps_speed_ref: String,
    pub gps_speed: String,
    pub gps_img_direction_ref: String,
    pub gps_img_direction: String,
}
