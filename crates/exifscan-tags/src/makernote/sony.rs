//! Sony MakerNote handling. Plain IFD, parent byte order, file offsets.
//!
//! No Sony tag names are documented here, so the note dumps as hex-named
//! entries (`MakerNote Tag 0xHHHH`).

use exifscan_core::TagDict;
use phf::phf_map;

pub static TAGS: TagDict = phf_map! {};
