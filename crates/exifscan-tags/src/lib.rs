//! Static tag dictionaries consumed by the IFD walker.
//!
//! Standard EXIF/GPS/Interoperability tables plus vendor MakerNote tables.
//! Each table maps a 16-bit tag id to a name and an optional decoder
//! (enum lookup, formatter function, or sub-IFD descriptor); the walker in
//! `exifscan-core` resolves them while traversing.

mod exif;
pub mod makernote;
mod str_utils;

pub use exif::{EXIF_TAGS, GPS_TAGS, INTEROP_TAGS};
pub use str_utils::{make_string, make_string_uc};
