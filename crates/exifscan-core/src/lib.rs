//! Core machinery for EXIF extraction: endian-aware reads over a seekable
//! stream, the TIFF field-type system, decoded values, and the recursive
//! IFD walker with thumbnail reconstruction.
//!
//! Tag dictionaries are data, not code: this crate defines their shape
//! ([`TagDict`], [`TagDef`], [`TagDecoder`]) while the `exifscan-tags`
//! crate owns the tables. Container handling (finding the TIFF header in
//! JPEG, HEIC, PNG, ...) lives in `exifscan-formats`.

mod byte_order;
mod dict;
mod error;
mod fields;
mod header;
mod ratio;
mod reader;
mod value;

pub use byte_order::Endian;
pub use dict::{DictRef, TagDecoder, TagDef, TagDict};
pub use error::{Error, Result};
pub use fields::FieldType;
pub use header::{ExifHeader, DEFAULT_STOP_TAG};
pub use ratio::Ratio;
pub use reader::{EndianReader, ReadSeek};
pub use value::{IfdTag, TagEntry, TagMap, TagValues};
