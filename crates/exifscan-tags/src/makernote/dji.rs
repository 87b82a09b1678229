//! DJI MakerNote tag definitions.
//!
//! Little-endian IFD with pointers relative to the start of the note.

use exifscan_core::{TagDef, TagDict};
use phf::phf_map;

pub static TAGS: TagDict = phf_map! {
    0x01_u16 => TagDef::new("Make"),
    0x03_u16 => TagDef::new("SpeedX"),
    0x04_u16 => TagDef::new("SpeedY"),
    0x05_u16 => TagDef::new("SpeedZ"),
    0x06_u16 => TagDef::new("Pitch"),
    0x07_u16 => TagDef::new("Yaw"),
    0x08_u16 => TagDef::new("Roll"),
    0x09_u16 => TagDef::new("CameraPitch"),
    0x0A_u16 => TagDef::new("CameraYaw"),
    0x0B_u16 => TagDef::new("CameraRoll"),
};
