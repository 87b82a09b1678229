//! Fujifilm MakerNote tag definitions.
//!
//! The note is always little-endian regardless of the parent file, and its
//! IFD pointers are relative to the start of the MakerNote itself. The
//! dispatcher rebases the reader before walking this table.

use crate::str_utils::make_string;
use exifscan_core::{TagDecoder, TagDef, TagDict};
use phf::phf_map;

pub static TAGS: TagDict = phf_map! {
    0x0000_u16 => TagDef::with("NoteVersion", TagDecoder::Func(make_string)),
    0x1000_u16 => TagDef::new("Quality"),
    0x1001_u16 => TagDef::with("Sharpness", TagDecoder::Map(&[
        (1, "Soft"),
        (2, "Soft"),
        (3, "Normal"),
        (4, "Hard"),
        (5, "Hard"),
    ])),
    0x1002_u16 => TagDef::with("WhiteBalance", TagDecoder::Map(&[
        (0, "Auto"),
        (256, "Daylight"),
        (512, "Cloudy"),
        (768, "DaylightColor-Fluorescent"),
        (769, "DaywhiteColor-Fluorescent"),
        (770, "White-Fluorescent"),
        (1024, "Incandescent"),
        (3840, "Custom"),
    ])),
    0x1003_u16 => TagDef::with("Color", TagDecoder::Map(&[
        (0, "Normal"),
        (256, "High"),
        (512, "Low"),
    ])),
    0x1004_u16 => TagDef::with("Tone", TagDecoder::Map(&[
        (0, "Normal"),
        (256, "High"),
        (512, "Low"),
    ])),
    0x1010_u16 => TagDef::with("FlashMode", TagDecoder::Map(&[
        (0, "Auto"),
        (1, "On"),
        (2, "Off"),
        (3, "Red Eye Reduction"),
    ])),
    0x1011_u16 => TagDef::new("FlashStrength"),
    0x1020_u16 => TagDef::with("Macro", TagDecoder::Map(&[
        (0, "Off"),
        (1, "On"),
    ])),
    0x1021_u16 => TagDef::with("FocusMode", TagDecoder::Map(&[
        (0, "Auto"),
        (1, "Manual"),
    ])),
    0x1030_u16 => TagDef::with("SlowSync", TagDecoder::Map(&[
        (0, "Off"),
        (1, "On"),
    ])),
    0x1031_u16 => TagDef::with("PictureMode", TagDecoder::Map(&[
        (0, "Auto"),
        (1, "Portrait"),
        (2, "Landscape"),
        (4, "Sports"),
        (5, "Night"),
        (6, "Program AE"),
        (256, "Aperture Priority AE"),
        (512, "Shutter Priority AE"),
        (768, "Manual Exposure"),
    ])),
    0x1100_u16 => TagDef::with("MotorOrBracket", TagDecoder::Map(&[
        (0, "Off"),
        (1, "On"),
    ])),
    0x1300_u16 => TagDef::with("BlurWarning", TagDecoder::Map(&[
        (0, "Off"),
        (1, "On"),
    ])),
    0x1301_u16 => TagDef::with("FocusWarning", TagDecoder::Map(&[
        (0, "Off"),
        (1, "On"),
    ])),
    0x1302_u16 => TagDef::with("AEWarning", TagDecoder::Map(&[
        (0, "Off"),
        (1, "On"),
    ])),
};
