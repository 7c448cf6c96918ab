//! Table-driven decoding of coded EXIF tags.
//!
//! Each attribute has a fixed code→label table. Codes without an entry are
//! never an error: the raw number passes through as the field value, so
//! vendor extensions and future codes survive normalization untouched.

use serde::Serialize;

/// A decoded tag: either the descriptive label for a known code, or the
/// raw numeric code passed through when the table has no entry.
///
/// Serializes untagged, so the JSON value is a plain string or number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TagValue {
    Label(&'static str),
    Code(i32),
}

/// A decoded flash tag: the composite label for a documented bit pattern,
/// or the bare "fired" flag for anything undocumented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FlashValue {
    Label(&'static str),
    Fired(bool),
}

/// Look `code` up in `table`, passing the raw code through on a miss.
///
/// # Example
///
/// ```rust
/// use exif_tidy::tags::{TagValue, compression, decode};
///
/// assert_eq!(decode(99, compression), TagValue::Label("JPEG"));
/// assert_eq!(decode(40000, compression), TagValue::Code(40000));
/// ```
pub fn decode(code: i32, table: fn(i32) -> Option<&'static str>) -> TagValue {
    match table(code) {
        Some(label) => TagValue::Label(label),
        None => TagValue::Code(code),
    }
}

/// Whether the flash fired: bit 0 of the flash code, meaningful even when
/// the rest of the code is 0 or undocumented.
pub fn flash_fired(code: i32) -> bool {
    (code & 1) == 1
}

/// Decode the full flash bit pattern (fired, return light, mode, red-eye)
/// into its composite label, falling back to the bare fired flag for codes
/// outside the documented combinations.
pub fn decode_flash(code: i32) -> FlashValue {
    match flash_label(code) {
        Some(label) => FlashValue::Label(label),
        None => FlashValue::Fired(flash_fired(code)),
    }
}

/// Flash bit-pattern labels (tag 0x9209).
pub fn flash_label(code: i32) -> Option<&'static str> {
    match code {
        0x0 => Some("No Flash"),
        0x1 => Some("Fired"),
        0x5 => Some("Fired, Return not detected"),
        0x7 => Some("Fired, Return detected"),
        0x8 => Some("On, Did not fire"),
        0x9 => Some("On, Fired"),
        0xd => Some("On, Return not detected"),
        0xf => Some("On, Return detected"),
        0x10 => Some("Off, Did not fire"),
        0x14 => Some("Off, Did not fire, Return not detected"),
        0x18 => Some("Auto, Did not fire"),
        0x19 => Some("Auto, Fired"),
        0x1d => Some("Auto, Fired, Return not detected"),
        0x1f => Some("Auto, Fired, Return detected"),
        0x20 => Some("No flash function"),
        0x30 => Some("Off, No flash function"),
        0x41 => Some("Fired, Red-eye reduction"),
        0x45 => Some("Fired, Red-eye reduction, Return not detected"),
        0x47 => Some("Fired, Red-eye reduction, Return detected"),
        0x49 => Some("On, Red-eye reduction"),
        0x4d => Some("On, Red-eye reduction, Return not detected"),
        0x4f => Some("On, Red-eye reduction, Return detected"),
        0x50 => Some("Off, Red-eye reduction"),
        0x58 => Some("Auto, Did not fire, Red-eye reduction"),
        0x59 => Some("Auto, Fired, Red-eye reduction"),
        0x5d => Some("Auto, Fired, Red-eye reduction, Return not detected"),
        0x5f => Some("Auto, Fired, Red-eye reduction, Return detected"),
        _ => None,
    }
}

/// Exposure program labels (tag 0x8822). Code 0 means "not defined" and is
/// cleared by the assembler rather than decoded.
pub fn exposure_program(code: i32) -> Option<&'static str> {
    match code {
        1 => Some("Manual"),
        2 => Some("Program AE"),
        3 => Some("Aperture-priority AE"),
        4 => Some("Shutter speed priority AE"),
        5 => Some("Creative (Slow speed)"),
        6 => Some("Action (High speed)"),
        7 => Some("Portrait"),
        8 => Some("Landscape"),
        9 => Some("Bulb"),
        _ => None,
    }
}

/// Metering mode labels (tag 0x9207).
pub fn metering_mode(code: i32) -> Option<&'static str> {
    match code {
        1 => Some("Average"),
        2 => Some("Center-weighted average"),
        3 => Some("Spot"),
        4 => Some("Multi-spot"),
        5 => Some("Multi-segment"),
        6 => Some("Partial"),
        255 => Some("Other"),
        _ => None,
    }
}

/// Compression scheme labels (tag 0x0103), spanning baseline TIFF/JPEG
/// codes and the vendor RAW range.
pub fn compression(code: i32) -> Option<&'static str> {
    match code {
        1 => Some("Uncompressed"),
        2 => Some("CCITT 1D"),
        3 => Some("T4/Group 3 Fax"),
        4 => Some("T6/Group 4 Fax"),
        5 => Some("LZW"),
        6 => Some("JPEG (old-style)"),
        7 => Some("JPEG"),
        8 => Some("Adobe Deflate"),
        9 => Some("JBIG B&W"),
        10 => Some("JBIG Color"),
        99 => Some("JPEG"),
        262 => Some("Kodak 262"),
        32766 => Some("Next"),
        32767 => Some("Sony ARW Compressed"),
        32769 => Some("Packed RAW"),
        32770 => Some("Samsung SRW Compressed"),
        32771 => Some("CCIRLEW"),
        32772 => Some("Samsung SRW Compressed 2"),
        32773 => Some("PackBits"),
        32809 => Some("Thunderscan"),
        32867 => Some("Kodak KDC Compressed"),
        32895 => Some("IT8CTPAD"),
        32896 => Some("IT8LW"),
        32897 => Some("IT8MP"),
        32898 => Some("IT8BL"),
        32908 => Some("PixarFilm"),
        32909 => Some("PixarLog"),
        32946 => Some("Deflate"),
        32947 => Some("DCS"),
        33003 => Some("Aperio JPEG 2000 YCbCr"),
        33005 => Some("Aperio JPEG 2000 RGB"),
        34661 => Some("JBIG"),
        34676 => Some("SGILog"),
        34677 => Some("SGILog24"),
        34712 => Some("JPEG 2000"),
        34713 => Some("Nikon NEF Compressed"),
        34715 => Some("JBIG2 TIFF FX"),
        34718 => Some("Microsoft Document Imaging (MDI) Binary Level Codec"),
        34719 => Some("Microsoft Document Imaging (MDI) Progressive Transform Codec"),
        34720 => Some("Microsoft Document Imaging (MDI) Vector"),
        34887 => Some("ESRI Lerc"),
        34892 => Some("Lossy JPEG"),
        34925 => Some("LZMA2"),
        34926 => Some("Zstd"),
        34927 => Some("WebP"),
        34933 => Some("PNG"),
        34934 => Some("JPEG XR"),
        65000 => Some("Kodak DCR Compressed"),
        65535 => Some("Pentax PEF Compressed"),
        _ => None,
    }
}

/// Color space labels (tag 0xA001).
pub fn color_space(code: i32) -> Option<&'static str> {
    match code {
        0x1 => Some("sRGB"),
        0x2 => Some("Adobe RGB"),
        0xfffd => Some("Wide Gamut RGB"),
        0xfffe => Some("ICC Profile"),
        0xffff => Some("Uncalibrated"),
        _ => None,
    }
}

/// Sensing method labels (tag 0xA217).
pub fn sensing_method(code: i32) -> Option<&'static str> {
    match code {
        1 => Some("Not defined"),
        2 => Some("One-chip color area"),
        3 => Some("Two-chip color area"),
        4 => Some("Three-chip color area"),
        5 => Some("Color sequential area"),
        7 => Some("Trilinear"),
        8 => Some("Color sequential linear"),
        _ => None,
    }
}

/// Exposure mode labels (tag 0xA402).
pub fn exposure_mode(code: i32) -> Option<&'static str> {
    match code {
        0 => Some("Auto"),
        1 => Some("Manual"),
        2 => Some("Auto bracket"),
        _ => None,
    }
}

/// White balance labels (tag 0xA403).
pub fn white_balance(code: i32) -> Option<&'static str> {
    match code {
        0 => Some("Auto"),
        1 => Some("Manual"),
        _ => None,
    }
}
