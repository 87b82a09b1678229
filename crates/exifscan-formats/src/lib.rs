//! EXIF extraction over still-image containers.
//!
//! [`process_file`] is the entry point: it sniffs the container (JPEG,
//! TIFF, PNG, WebP, HEIC/AVIF, JPEG XL), finds the embedded TIFF header,
//! walks the IFD structure with the standard tag dictionaries, dispatches
//! vendor MakerNotes, and optionally extracts thumbnails and the XMP
//! packet.
//!
//! # Quick start
//!
//! ```no_run
//! use exifscan_formats::{process_file, ProcessOptions};
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let file = File::open("photo.jpg").unwrap();
//! let mut reader = BufReader::new(file);
//! let tags = process_file(&mut reader, &ProcessOptions::default()).unwrap();
//! for (name, entry) in &tags {
//!     if let Some(tag) = entry.as_tag() {
//!         println!("{name}: {}", tag.printable);
//!     }
//! }
//! ```
//!
//! The walker issues many small positioned reads; wrap files in a
//! `BufReader`.

mod bmff;
mod error;
mod gps;
mod jpeg;
mod locate;
mod makernotes;
mod serialize;

pub use error::{Error, Result};
pub use gps::gps_coords;
pub use locate::determine_type;
pub use serialize::{convert_types, SerializedMap, SerializedValue};

use exifscan_core::{
    Endian, ExifHeader, FieldType, IfdTag, ReadSeek, TagEntry, TagMap, TagValues,
    DEFAULT_STOP_TAG,
};
use exifscan_tags::EXIF_TAGS;
use std::io::SeekFrom;
use tracing::{debug, warn};

/// Options for [`process_file`].
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Halt the current IFD after storing an entry with this name.
    pub stop_tag: String,
    /// Decode MakerNotes and the large ignorable tags.
    pub details: bool,
    /// Fail on unknown field types and malformed vendor notes instead of
    /// logging and skipping.
    pub strict: bool,
    /// Verbose logging plus XMP extraction.
    pub debug: bool,
    /// Truncate printables with more than 50 values to the first 20.
    pub truncate_tags: bool,
    /// Rewind the stream before sniffing.
    pub auto_seek: bool,
    /// Populate `JPEGThumbnail` / `TIFFThumbnail`.
    pub extract_thumbnail: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            stop_tag: DEFAULT_STOP_TAG.to_string(),
            details: true,
            strict: false,
            debug: false,
            truncate_tags: true,
            auto_seek: true,
            extract_thumbnail: true,
        }
    }
}

/// Extract EXIF metadata from an image stream.
///
/// Returns a map of `"<IFD_NAME> <TAG_NAME>"` keys to decoded tags, plus
/// the reserved `JPEGThumbnail` / `TIFFThumbnail` byte entries. An
/// unrecognized or EXIF-less container yields an empty map; only strict
/// mode violations and I/O failures are errors.
pub fn process_file(fh: &mut dyn ReadSeek, options: &ProcessOptions) -> Result<TagMap> {
    if options.auto_seek {
        fh.seek(SeekFrom::Start(0))?;
    }

    let (offset, endian_byte, fake_exif) = match determine_type(fh) {
        Ok(location) => location,
        Err(Error::ExifNotFound(msg)) => {
            warn!("{msg}");
            return Ok(TagMap::new());
        }
        Err(Error::InvalidExif(msg)) => {
            debug!("{msg}");
            return Ok(TagMap::new());
        }
        Err(other) => return Err(other),
    };

    debug!(
        "Endian format is {} ({})",
        endian_byte as char,
        Endian::describe_byte(endian_byte)
    );
    let endian = Endian::from_byte(endian_byte);

    let mut hdr = ExifHeader::new(
        fh,
        endian,
        offset,
        fake_exif,
        options.strict,
        options.details,
        options.truncate_tags,
    );

    let ifds = hdr.list_ifd()?;
    let mut thumb_ifd = 0;
    for (ctr, ifd) in ifds.iter().enumerate() {
        let ifd_name = match ctr {
            0 => "Image".to_string(),
            1 => {
                thumb_ifd = *ifd;
                "Thumbnail".to_string()
            }
            n => format!("IFD {n}"),
        };
        debug!(" IFD {} ({}) at offset {}:", ctr, ifd_name, ifd);
        hdr.dump_ifd(*ifd, &ifd_name, &EXIF_TAGS, false, &options.stop_tag)?;
    }

    // MakerNote decoding needs both the note and the vendor name
    if options.details
        && hdr.tags.contains_key("EXIF MakerNote")
        && hdr.tags.contains_key("Image Make")
    {
        makernotes::decode_maker_note(&mut hdr, &options.stop_tag)?;
    }

    if options.extract_thumbnail {
        if thumb_ifd != 0 {
            hdr.extract_tiff_thumbnail(thumb_ifd)?;
        }
        hdr.extract_jpeg_thumbnail()?;
    }

    let mut tags = hdr.tags;
    if options.debug {
        extract_xmp(fh, &mut tags)?;
    }
    Ok(tags)
}

/// Store the XMP packet under `Image ApplicationNotes`, pretty-printed
/// when well-formed. Prefers the ApplicationNotes tag payload; falls back
/// to scanning the stream for the `<x:xmpmeta>` element.
fn extract_xmp(fh: &mut dyn ReadSeek, tags: &mut TagMap) -> Result<()> {
    let from_tag = tags
        .get("Image ApplicationNotes")
        .and_then(TagEntry::as_tag)
        .and_then(|tag| tag.values.as_ints())
        .map(|ints| ints.iter().map(|&v| v as u8).collect::<Vec<u8>>());

    let xmp_bytes = match from_tag {
        Some(raw) => raw,
        None => {
            debug!("XMP not in Exif, searching file for XMP info...");
            fh.seek(SeekFrom::Start(0))?;
            exifscan_xmp::find_xmp_data(fh)?
        }
    };
    if xmp_bytes.is_empty() {
        return Ok(());
    }

    let printable = exifscan_xmp::xmp_bytes_to_str(&xmp_bytes);
    tags.insert(
        "Image ApplicationNotes".to_string(),
        TagEntry::Tag(IfdTag {
            printable,
            tag: 0,
            field_type: FieldType::Byte,
            values: TagValues::Bytes(xmp_bytes),
            field_offset: 0,
            field_length: 0,
            prefer_printable: true,
        }),
    );
    Ok(())
}
