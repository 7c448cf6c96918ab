//! # exif-tidy
//!
//! EXIF metadata normalizer — turn the raw, loosely-typed tag record an
//! image metadata extractor produces into a typed, compact, human-readable,
//! JSON-ready summary.
//!
//! Rational tags (`"1/250"`) become display fractions or trimmed decimals,
//! coded tags (flash, metering, compression, …) become descriptive labels
//! with raw-code passthrough for unknown values, sexagesimal GPS
//! coordinates become signed decimal degrees, and everything absent from
//! the source image stays absent from the serialized output.
//!
//! ## Quick Start
//!
//! ```rust
//! use exif_tidy::{RawExif, normalize};
//!
//! let raw = RawExif {
//!     make: "Canon".into(),
//!     model: "Canon EOS 40D".into(),
//!     exposure_time: "1/160".into(),
//!     flash: 9,
//!     gps_latitude: "40 26 46.3".into(),
//!     gps_latitude_ref: "N".into(),
//!     gps_longitude: "73 58 12.0".into(),
//!     gps_longitude_ref: "W".into(),
//!     ..Default::default()
//! };
//!
//! let summary = normalize(&raw);
//! assert_eq!(summary.exposure_time.as_deref(), Some("1/160"));
//! assert!(summary.flash);
//!
//! let gps = summary.gps.as_ref().unwrap();
//! assert_eq!(gps.latitude, 40.44619);
//! assert_eq!(gps.longitude, -73.97);
//!
//! // Embed directly in a larger JSON response payload.
//! let json = serde_json::to_string(&summary)?;
//! assert!(json.contains(r#""flashMode":"On, Fired""#));
//! # Ok::<(), serde_json::Error>(())
//! ```
//!
//! ## Components
//!
//! - [`rational`] — fraction-encoded tag parsing, strict and lenient
//! - [`format`] — floats, exposure fractions, resolutions, timestamps
//! - [`tags`] — table-driven code→label decoding with raw-code passthrough
//! - [`gps`] — sexagesimal coordinates into a signed decimal sub-record
//! - [`normalize`](mod@normalize) — the assembler producing the sparse output record
//!
//! Malformed tags never fail the whole record: rational parse errors
//! degrade to zero with a `log` diagnostic, unknown enumeration codes pass
//! through numerically, and an untrustworthy GPS reference drops only the
//! GPS block.

pub mod format;
pub mod gps;
pub mod normalize;
pub mod rational;
pub mod raw;
pub mod tags;

pub use gps::GpsSummary;
pub use normalize::{ExifSummary, normalize};
pub use raw::RawExif;
pub use tags::{FlashValue, TagValue};
