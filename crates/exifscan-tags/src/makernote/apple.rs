//! Apple iOS MakerNote tag definitions.
//!
//! The note starts with an "Apple iOS\0" label followed by a big-endian
//! IFD whose pointers are relative to the start of the note. Only the
//! HDR type tag is named; everything else dumps as a hex-named entry.

use exifscan_core::{TagDecoder, TagDef, TagDict};
use phf::phf_map;

pub static TAGS: TagDict = phf_map! {
    0x000A_u16 => TagDef::with("HDRImageType", TagDecoder::Map(&[
        (3, "HDR Image"),
        (4, "Original Image"),
    ])),
};
