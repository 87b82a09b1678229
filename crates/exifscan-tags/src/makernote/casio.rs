//! Casio MakerNote tag definitions. Plain IFD, parent byte order, file
//! offsets.

use exifscan_core::{TagDecoder, TagDef, TagDict};
use phf::phf_map;

pub static TAGS: TagDict = phf_map! {
    0x0001_u16 => TagDef::with("RecordingMode", TagDecoder::Map(&[
        (1, "Single Shutter"),
        (2, "Panorama"),
        (3, "Night Scene"),
        (4, "Portrait"),
        (5, "Landscape"),
    ])),
    0x0002_u16 => TagDef::with("Quality", TagDecoder::Map(&[
        (1, "Economy"),
        (2, "Normal"),
        (3, "Fine"),
    ])),
    0x0003_u16 => TagDef::with("FocusingMode", TagDecoder::Map(&[
        (2, "Macro"),
        (3, "Auto Focus"),
        (4, "Manual Focus"),
        (5, "Infinity"),
    ])),
    0x0004_u16 => TagDef::with("FlashMode", TagDecoder::Map(&[
        (1, "Auto"),
        (2, "On"),
        (3, "Off"),
        (4, "Red Eye Reduction"),
    ])),
    0x0005_u16 => TagDef::with("FlashIntensity", TagDecoder::Map(&[
        (11, "Weak"),
        (13, "Normal"),
        (15, "Strong"),
    ])),
    0x0006_u16 => TagDef::new("ObjectDistance"),
    0x0007_u16 => TagDef::with("WhiteBalance", TagDecoder::Map(&[
        (1, "Auto"),
        (2, "Tungsten"),
        (3, "Daylight"),
        (4, "Fluorescent"),
        (5, "Shade"),
        (129, "Manual"),
    ])),
    0x000B_u16 => TagDef::with("Sharpness", TagDecoder::Map(&[
        (0, "Normal"),
        (1, "Soft"),
        (2, "Hard"),
    ])),
    0x000C_u16 => TagDef::with("Contrast", TagDecoder::Map(&[
        (0, "Normal"),
        (1, "Low"),
        (2, "High"),
    ])),
    0x000D_u16 => TagDef::with("Saturation", TagDecoder::Map(&[
        (0, "Normal"),
        (1, "Low"),
        (2, "High"),
    ])),
    0x0014_u16 => TagDef::with("CCDSpeed", TagDecoder::Map(&[
        (64, "Normal"),
        (80, "Normal"),
        (100, "High"),
        (125, "+1.0"),
        (244, "+3.0"),
        (250, "+2.0"),
    ])),
};
