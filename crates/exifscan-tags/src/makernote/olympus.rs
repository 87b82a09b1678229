//! Olympus MakerNote tag definitions.
//!
//! The note carries an 8-byte "OLYMP" header before a standard IFD in the
//! parent byte order. Tag 0x0100 is how these cameras smuggle a JPEG
//! thumbnail into an uncompressed TIFF.

use crate::str_utils::make_string;
use exifscan_core::{TagDecoder, TagDef, TagDict, TagValues};
use phf::phf_map;

/// Decode the three-part SpecialMode value (mode, sequence, direction).
pub fn special_mode(values: &TagValues) -> String {
    let mode1 = |v: i64| match v {
        0 => Some("Normal"),
        1 => Some("Unknown"),
        2 => Some("Fast"),
        3 => Some("Panorama"),
        _ => None,
    };
    let mode2 = |v: i64| match v {
        0 => Some("Non-panoramic"),
        1 => Some("Left to right"),
        2 => Some("Right to left"),
        3 => Some("Bottom to top"),
        4 => Some("Top to bottom"),
        _ => None,
    };
    let Some(seq) = values.as_ints() else {
        return values.to_string();
    };
    if seq.len() < 3 {
        return values.to_string();
    }
    match (mode1(seq[0]), mode2(seq[2])) {
        (Some(first), Some(direction)) => {
            format!("{} - sequence {} - {}", first, seq[1], direction)
        }
        _ => values.to_string(),
    }
}

pub static TAGS: TagDict = phf_map! {
    // this is how they get past the fact that a JPEG thumbnail is not
    // allowed in an uncompressed TIFF file
    0x0100_u16 => TagDef::new("JPEGThumbnail"),
    0x0200_u16 => TagDef::with("SpecialMode", TagDecoder::Func(special_mode)),
    0x0201_u16 => TagDef::with("JPEGQual", TagDecoder::Map(&[
        (1, "SQ"),
        (2, "HQ"),
        (3, "SHQ"),
    ])),
    0x0202_u16 => TagDef::with("Macro", TagDecoder::Map(&[
        (0, "Normal"),
        (1, "Macro"),
        (2, "SuperMacro"),
    ])),
    0x0203_u16 => TagDef::with("BWMode", TagDecoder::Map(&[
        (0, "Off"),
        (1, "On"),
    ])),
    0x0204_u16 => TagDef::new("DigitalZoom"),
    0x0205_u16 => TagDef::new("FocalPlaneDiagonal"),
    0x0206_u16 => TagDef::new("LensDistortionParams"),
    0x0207_u16 => TagDef::new("SoftwareRelease"),
    0x0208_u16 => TagDef::new("PictureInfo"),
    // print as string
    0x0209_u16 => TagDef::with("CameraID", TagDecoder::Func(make_string)),
    0x0300_u16 => TagDef::new("PreCaptureFrames"),
    0x0404_u16 => TagDef::new("SerialNumber"),
    0x0F00_u16 => TagDef::new("DataDump"),
    0x1000_u16 => TagDef::new("ShutterSpeedValue"),
    0x1001_u16 => TagDef::new("ISOValue"),
    0x1002_u16 => TagDef::new("ApertureValue"),
    0x1003_u16 => TagDef::new("BrightnessValue"),
    0x1004_u16 => TagDef::with("FlashMode", TagDecoder::Map(&[
        (2, "On"),
        (3, "Off"),
    ])),
    0x1005_u16 => TagDef::with("FlashDevice", TagDecoder::Map(&[
        (0, "None"),
        (1, "Internal"),
        (4, "External"),
        (5, "Internal + External"),
    ])),
    0x1006_u16 => TagDef::new("ExposureCompensation"),
    0x1007_u16 => TagDef::new("SensorTemperature"),
    0x1008_u16 => TagDef::new("LensTemperature"),
    0x100B_u16 => TagDef::with("FocusMode", TagDecoder::Map(&[
        (0, "Auto"),
        (1, "Manual"),
    ])),
    0x1017_u16 => TagDef::new("RedBalance"),
    0x1018_u16 => TagDef::new("BlueBalance"),
    0x101A_u16 => TagDef::new("SerialNumber"),
    0x1023_u16 => TagDef::new("FlashExposureComp"),
    0x1026_u16 => TagDef::with("ExternalFlashBounce", TagDecoder::Map(&[
        (0, "No"),
        (1, "Yes"),
    ])),
    0x1027_u16 => TagDef::new("ExternalFlashZoom"),
    0x1028_u16 => TagDef::new("ExternalFlashMode"),
    0x1029_u16 => TagDef::with("Contrast", TagDecoder::Map(&[
        (0, "High"),
        (1, "Normal"),
        (2, "Low"),
    ])),
    0x102A_u16 => TagDef::new("SharpnessFactor"),
    0x102B_u16 => TagDef::new("ColorControl"),
    0x102C_u16 => TagDef::new("ValidBits"),
    0x102D_u16 => TagDef::new("CoringFilter"),
    0x102E_u16 => TagDef::new("OlympusImageWidth"),
    0x102F_u16 => TagDef::new("OlympusImageHeight"),
    0x1034_u16 => TagDef::new("CompressionRatio"),
    0x1035_u16 => TagDef::with("PreviewImageValid", TagDecoder::Map(&[
        (0, "No"),
        (1, "Yes"),
    ])),
    0x1036_u16 => TagDef::new("PreviewImageStart"),
    0x1037_u16 => TagDef::new("PreviewImageLength"),
    0x1039_u16 => TagDef::with("CCDScanMode", TagDecoder::Map(&[
        (0, "Interlaced"),
        (1, "Progressive"),
    ])),
    0x103A_u16 => TagDef::with("NoiseReduction", TagDecoder::Map(&[
        (0, "Off"),
        (1, "On"),
    ])),
    0x103B_u16 => TagDef::new("InfinityLensStep"),
    0x103C_u16 => TagDef::new("NearLensStep"),
    0x2010_u16 => TagDef::new("Equipment"),
    0x2020_u16 => TagDef::new("CameraSettings"),
    0x2030_u16 => TagDef::new("RawDevelopment"),
    0x2040_u16 => TagDef::new("ImageProcessing"),
    0x2050_u16 => TagDef::new("FocusInfo"),
    0x3000_u16 => TagDef::new("RawInfo"),
};
