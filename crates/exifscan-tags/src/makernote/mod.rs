//! Vendor MakerNote tag tables.
//!
//! Each camera vendor embeds proprietary metadata in EXIF tag 0x927C,
//! usually formatted as another IFD with its own conventions. These tables
//! name the vendor tag spaces; the dispatcher in `exifscan-formats` picks
//! the table (and the endian/offset rules) from the `Image Make` tag.

pub mod apple;
pub mod canon;
pub mod casio;
pub mod dji;
pub mod fujifilm;
pub mod nikon;
pub mod olympus;
pub mod sony;
