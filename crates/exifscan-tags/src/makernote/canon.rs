//! Canon MakerNote tag definitions.
//!
//! Canon notes start directly with an IFD in the parent byte order. On top
//! of the plainly named tags, several logical tag groups are packed into
//! single opaque arrays indexed by position (CameraSettings, ShotInfo, ...).
//!
//! See http://www.burren.cx/david/canon.html by David Burren.

use exifscan_core::{TagDecoder, TagDef, TagDict};
use phf::phf_map;

/// Plainly named Canon tags.
pub static TAGS: TagDict = phf_map! {
    0x0006_u16 => TagDef::new("ImageType"),
    0x0007_u16 => TagDef::new("FirmwareVersion"),
    0x0008_u16 => TagDef::new("ImageNumber"),
    0x0009_u16 => TagDef::new("OwnerName"),
    0x000C_u16 => TagDef::new("SerialNumber"),
    0x000D_u16 => TagDef::new("CameraInfo"),
    0x000E_u16 => TagDef::new("FileLength"),
    0x0010_u16 => TagDef::new("ModelID"),
    0x0015_u16 => TagDef::with("SerialNumberFormat", TagDecoder::Map(&[
        (0x90000000, "Format 1"),
        (0xA0000000, "Format 2"),
    ])),
    0x001A_u16 => TagDef::with("SuperMacro", TagDecoder::Map(&[
        (0, "Off"),
        (1, "On (1)"),
        (2, "On (2)"),
    ])),
    0x0028_u16 => TagDef::new("ImageUniqueID"),
    0x0095_u16 => TagDef::new("LensModel"),
    0x0096_u16 => TagDef::new("InternalSerialNumber"),
    0x0097_u16 => TagDef::new("DustRemovalData"),
    0x0098_u16 => TagDef::new("CropInfo"),
    0x009A_u16 => TagDef::new("AspectInfo"),
    0x00B4_u16 => TagDef::with("ColorSpace", TagDecoder::Map(&[
        (1, "sRGB"),
        (2, "Adobe RGB"),
    ])),
};

/// Tag 0x0001: position-indexed camera settings.
pub static CAMERA_SETTINGS: TagDict = phf_map! {
    1_u16 => TagDef::with("Macromode", TagDecoder::Map(&[
        (1, "Macro"),
        (2, "Normal"),
    ])),
    2_u16 => TagDef::new("SelfTimer"),
    3_u16 => TagDef::with("Quality", TagDecoder::Map(&[
        (1, "Economy"),
        (2, "Normal"),
        (3, "Fine"),
        (5, "Superfine"),
    ])),
    4_u16 => TagDef::with("FlashMode", TagDecoder::Map(&[
        (0, "Flash Not Fired"),
        (1, "Auto"),
        (2, "On"),
        (3, "Red-Eye Reduction"),
        (4, "Slow Synchro"),
        (5, "Auto + Red-Eye Reduction"),
        (6, "On + Red-Eye Reduction"),
        (16, "external flash"),
    ])),
    5_u16 => TagDef::with("ContinuousDriveMode", TagDecoder::Map(&[
        (0, "Single Or Timer"),
        (1, "Continuous"),
        (2, "Movie"),
    ])),
    7_u16 => TagDef::with("FocusMode", TagDecoder::Map(&[
        (0, "One-Shot"),
        (1, "AI Servo"),
        (2, "AI Focus"),
        (3, "MF"),
        (4, "Single"),
        (5, "Continuous"),
        (6, "MF"),
    ])),
    9_u16 => TagDef::with("RecordMode", TagDecoder::Map(&[
        (1, "JPEG"),
        (2, "CRW+THM"),
        (3, "AVI+THM"),
        (4, "TIF"),
        (5, "TIF+JPEG"),
        (6, "CR2"),
        (7, "CR2+JPEG"),
        (9, "Video"),
    ])),
    10_u16 => TagDef::with("ImageSize", TagDecoder::Map(&[
        (0, "Large"),
        (1, "Medium"),
        (2, "Small"),
    ])),
    11_u16 => TagDef::with("EasyShootingMode", TagDecoder::Map(&[
        (0, "Full Auto"),
        (1, "Manual"),
        (2, "Landscape"),
        (3, "Fast Shutter"),
        (4, "Slow Shutter"),
        (5, "Night"),
        (6, "B&W"),
        (7, "Sepia"),
        (8, "Portrait"),
        (9, "Sports"),
        (10, "Macro/Close-Up"),
        (11, "Pan Focus"),
    ])),
    12_u16 => TagDef::with("DigitalZoom", TagDecoder::Map(&[
        (0, "None"),
        (1, "2x"),
        (2, "4x"),
        (3, "Other"),
    ])),
    13_u16 => TagDef::with("Contrast", TagDecoder::Map(&[
        (0xFFFF, "Low"),
        (0, "Normal"),
        (1, "High"),
    ])),
    14_u16 => TagDef::with("Saturation", TagDecoder::Map(&[
        (0xFFFF, "Low"),
        (0, "Normal"),
        (1, "High"),
    ])),
    15_u16 => TagDef::with("Sharpness", TagDecoder::Map(&[
        (0xFFFF, "Low"),
        (0, "Normal"),
        (1, "High"),
    ])),
    16_u16 => TagDef::with("ISO", TagDecoder::Map(&[
        (0, "See ISOSpeedRatings Tag"),
        (15, "Auto"),
        (16, "50"),
        (17, "100"),
        (18, "200"),
        (19, "400"),
    ])),
    17_u16 => TagDef::with("MeteringMode", TagDecoder::Map(&[
        (0, "Default"),
        (1, "Spot"),
        (2, "Average"),
        (3, "Evaluative"),
        (4, "Partial"),
        (5, "Center-weighted"),
    ])),
    18_u16 => TagDef::with("FocusType", TagDecoder::Map(&[
        (0, "Manual"),
        (1, "Auto"),
        (3, "Close-Up (Macro)"),
        (8, "Locked (Pan Mode)"),
    ])),
    19_u16 => TagDef::with("AFPointSelected", TagDecoder::Map(&[
        (0x3000, "None (MF)"),
        (0x3001, "Auto-Selected"),
        (0x3002, "Right"),
        (0x3003, "Center"),
        (0x3004, "Left"),
    ])),
    20_u16 => TagDef::with("ExposureMode", TagDecoder::Map(&[
        (0, "Easy Shooting"),
        (1, "Program"),
        (2, "Tv-priority"),
        (3, "Av-priority"),
        (4, "Manual"),
        (5, "A-DEP"),
    ])),
    22_u16 => TagDef::new("LensType"),
    23_u16 => TagDef::new("LongFocalLengthOfLensInFocalUnits"),
    24_u16 => TagDef::new("ShortFocalLengthOfLensInFocalUnits"),
    25_u16 => TagDef::new("FocalUnitsPerMM"),
    28_u16 => TagDef::with("FlashActivity", TagDecoder::Map(&[
        (0, "Did Not Fire"),
        (1, "Fired"),
    ])),
    29_u16 => TagDef::with("FlashDetails", TagDecoder::Map(&[
        (0, "Manual"),
        (1, "TTL"),
        (2, "A-TTL"),
        (3, "E-TTL"),
        (4, "FP Sync Enabled"),
        (7, "2nd(\"Rear\")-Curtain Sync Used"),
        (11, "FP Sync Used"),
        (13, "Internal Flash"),
        (14, "External E-TTL"),
    ])),
    32_u16 => TagDef::with("FocusMode", TagDecoder::Map(&[
        (0, "Single"),
        (1, "Continuous"),
        (8, "Manual"),
    ])),
    33_u16 => TagDef::with("AESetting", TagDecoder::Map(&[
        (0, "Normal AE"),
        (1, "Exposure Compensation"),
        (2, "AE Lock"),
        (3, "AE Lock + Exposure Compensation"),
        (4, "No AE"),
    ])),
    34_u16 => TagDef::with("ImageStabilization", TagDecoder::Map(&[
        (0, "Off"),
        (1, "On"),
        (2, "Shoot Only"),
        (3, "Panning"),
        (4, "Dynamic"),
        (256, "Off (2)"),
        (257, "On (2)"),
        (258, "Shoot Only (2)"),
        (259, "Panning (2)"),
        (260, "Dynamic (2)"),
    ])),
    41_u16 => TagDef::with("ManualFlashOutput", TagDecoder::Map(&[
        (0x0, "n/a"),
        (0x500, "Full"),
        (0x502, "Medium"),
        (0x504, "Low"),
        (0x7FFF, "n/a"),
    ])),
};

/// Tag 0x0002: focal length record.
pub static FOCAL_LENGTH: TagDict = phf_map! {
    1_u16 => TagDef::with("FocalType", TagDecoder::Map(&[
        (1, "Fixed"),
        (2, "Zoom"),
    ])),
    2_u16 => TagDef::new("FocalLength"),
};

/// Tag 0x0004: shot info record.
pub static SHOT_INFO: TagDict = phf_map! {
    7_u16 => TagDef::with("WhiteBalance", TagDecoder::Map(&[
        (0, "Auto"),
        (1, "Sunny"),
        (2, "Cloudy"),
        (3, "Tungsten"),
        (4, "Fluorescent"),
        (5, "Flash"),
        (6, "Custom"),
    ])),
    8_u16 => TagDef::with("SlowShutter", TagDecoder::Map(&[
        (-1, "n/a"),
        (0, "Off"),
        (1, "Night Scene"),
        (2, "On"),
        (3, "None"),
    ])),
    9_u16 => TagDef::new("SequenceNumber"),
    14_u16 => TagDef::new("AFPointUsed"),
    15_u16 => TagDef::with("FlashBias", TagDecoder::Map(&[
        (0xFFC0, "-2 EV"),
        (0xFFCC, "-1.67 EV"),
        (0xFFD0, "-1.50 EV"),
        (0xFFD4, "-1.33 EV"),
        (0xFFE0, "-1 EV"),
        (0xFFEC, "-0.67 EV"),
        (0xFFF0, "-0.50 EV"),
        (0xFFF4, "-0.33 EV"),
        (0x0000, "0 EV"),
        (0x000C, "0.33 EV"),
        (0x0010, "0.50 EV"),
        (0x0014, "0.67 EV"),
        (0x0020, "1 EV"),
        (0x002C, "1.33 EV"),
        (0x0030, "1.50 EV"),
        (0x0034, "1.67 EV"),
        (0x0040, "2 EV"),
    ])),
    19_u16 => TagDef::new("SubjectDistance"),
};

/// Tag 0x0026: AF info (version 2).
pub static AF_INFO_2: TagDict = phf_map! {
    2_u16 => TagDef::with("AFAreaMode", TagDecoder::Map(&[
        (0, "Off (Manual Focus)"),
        (2, "Single-point AF"),
        (4, "Multi-point AF or AI AF"),
        (5, "Face Detect AF"),
        (6, "Face + Tracking"),
        (7, "Zone AF"),
        (8, "AF Point Expansion"),
        (9, "Spot AF"),
        (11, "Flexizone Multi"),
        (13, "Flexizone Single"),
    ])),
    3_u16 => TagDef::new("NumAFPoints"),
    4_u16 => TagDef::new("ValidAFPoints"),
    5_u16 => TagDef::new("CanonImageWidth"),
};

/// Composite tags decoded by array position instead of as sub-IFDs.
pub static OFFSET_TAGS: &[(u16, &TagDict)] = &[
    (0x0001, &CAMERA_SETTINGS),
    (0x0002, &FOCAL_LENGTH),
    (0x0004, &SHOT_INFO),
    (0x0026, &AF_INFO_2),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_tables_registered() {
        let ids: Vec<u16> = OFFSET_TAGS.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![0x0001, 0x0002, 0x0004, 0x0026]);
    }

    #[test]
    fn ae_setting_present() {
        assert_eq!(CAMERA_SETTINGS.get(&33).unwrap().name, "AESetting");
    }
}
