//! MakerNote dispatch.
//!
//! The MakerNote (EXIF tag 0x927C) is an opaque blob that most vendors
//! fill with another IFD, each with its own header, endian and offset
//! conventions. The dispatcher picks a vendor from `Image Make`, rebases
//! the reader where the vendor uses note-local pointers, and re-enters the
//! IFD walker with the vendor's tag table. The `(endian, base_offset)`
//! pair is saved and restored around every rebasing branch.

use crate::{Error, Result};
use exifscan_core::{Endian, ExifHeader, FieldType, IfdTag, TagDecoder, TagDict, TagEntry, TagValues};
use exifscan_tags::makernote::{apple, canon, casio, dji, fujifilm, nikon, olympus, sony};
use tracing::{debug, warn};

/// Nikon note prelude: "Nikon\0" plus a type byte.
const NIKON_V1: [i64; 7] = [78, 105, 107, 111, 110, 0, 1];
const NIKON_V2: [i64; 7] = [78, 105, 107, 111, 110, 0, 2];
/// Apple note prelude: "Apple iOS\0".
const APPLE_IOS: [i64; 10] = [65, 112, 112, 108, 101, 32, 105, 79, 83, 0];

/// Decode the vendor-specific MakerNote into `MakerNote *` tags.
///
/// Callers guarantee `EXIF MakerNote` and `Image Make` are present.
/// MakerNote pointers are usually relative to the TIFF base, but newer
/// vendors address relative to the note itself so their notes survive
/// being moved by editing software; those branches rebase the reader.
pub fn decode_maker_note(hdr: &mut ExifHeader<'_>, stop_tag: &str) -> Result<()> {
    let Some(note) = hdr.tag("EXIF MakerNote").cloned() else {
        return Ok(());
    };
    let Some(make) = hdr.tag("Image Make").map(|t| t.printable.clone()) else {
        return Ok(());
    };
    let note_ints = note.values.as_ints().unwrap_or(&[]).to_vec();

    if make.contains("NIKON") {
        return nikon_note(hdr, &note, &note_ints, stop_tag);
    }

    if make.starts_with("OLYMPUS") {
        // the note carries an 8-byte OLYMP label before the IFD
        return hdr
            .dump_ifd(note.field_offset + 8, "MakerNote", &olympus::TAGS, false, stop_tag)
            .map_err(Error::from);
    }

    if make.contains("CASIO") || make.contains("Casio") {
        return hdr
            .dump_ifd(note.field_offset, "MakerNote", &casio::TAGS, false, stop_tag)
            .map_err(Error::from);
    }

    if make.contains("SONY") {
        return hdr
            .dump_ifd(note.field_offset, "MakerNote", &sony::TAGS, false, stop_tag)
            .map_err(Error::from);
    }

    if make == "FUJIFILM" {
        // the note is always Intel-endian even in Motorola files, and its
        // pointers are note-relative; the IFD itself sits at offset 12
        let saved = (hdr.reader.endian, hdr.reader.base_offset);
        hdr.reader.endian = Endian::Intel;
        hdr.reader.base_offset += note.field_offset;
        let walked = hdr.dump_ifd(12, "MakerNote", &fujifilm::TAGS, false, stop_tag);
        (hdr.reader.endian, hdr.reader.base_offset) = saved;
        return walked.map_err(Error::from);
    }

    if make == "Apple" && note_ints.len() >= 10 && note_ints[..10] == APPLE_IOS {
        let saved = (hdr.reader.endian, hdr.reader.base_offset);
        hdr.reader.base_offset += note.field_offset + 14;
        let walked = hdr.dump_ifd(0, "MakerNote", &apple::TAGS, false, stop_tag);
        (hdr.reader.endian, hdr.reader.base_offset) = saved;
        return walked.map_err(Error::from);
    }

    if make == "DJI" {
        let saved = (hdr.reader.endian, hdr.reader.base_offset);
        hdr.reader.endian = Endian::Intel;
        hdr.reader.base_offset += note.field_offset;
        let walked = hdr.dump_ifd(0, "MakerNote", &dji::TAGS, false, stop_tag);
        (hdr.reader.endian, hdr.reader.base_offset) = saved;
        return walked.map_err(Error::from);
    }

    if make == "Canon" {
        return canon_note(hdr, &note, stop_tag);
    }

    debug!("No MakerNote decoder for make {:?}", make);
    Ok(())
}

/// The note usually starts with the word Nikon followed by the note type.
/// When it does not, it is an unlabeled type 2 (E99x, D1).
fn nikon_note(
    hdr: &mut ExifHeader<'_>,
    note: &IfdTag,
    note_ints: &[i64],
    stop_tag: &str,
) -> Result<()> {
    if note_ints.len() >= 7 && note_ints[..7] == NIKON_V1 {
        debug!("Looks like a type 1 Nikon MakerNote.");
        return hdr
            .dump_ifd(note.field_offset + 8, "MakerNote", &nikon::TAGS_OLD, false, stop_tag)
            .map_err(Error::from);
    }
    if note_ints.len() >= 7 && note_ints[..7] == NIKON_V2 {
        debug!("Looks like a labeled type 2 Nikon MakerNote");
        let marker = note_ints.get(12..14);
        if !matches!(marker, Some([0, 42]) | Some([42, 0])) {
            if hdr.strict {
                return Err(Error::MissingNikonMarker);
            }
            warn!("Missing marker tag 42 in MakerNote.");
            return Ok(());
        }
        // skip the MakerNote label and the embedded TIFF header; pointers
        // are relative to that header
        return hdr
            .dump_ifd(note.field_offset + 10 + 8, "MakerNote", &nikon::TAGS_NEW, true, stop_tag)
            .map_err(Error::from);
    }
    debug!("Looks like an unlabeled type 2 Nikon MakerNote");
    hdr.dump_ifd(note.field_offset, "MakerNote", &nikon::TAGS_NEW, false, stop_tag)
        .map_err(Error::from)
}

/// Canon: a plain IFD, then position-indexed composite tags. The
/// CameraInfo composite (0x000D) has model-specific layouts this library
/// does not carry, so it stays in the map as read.
fn canon_note(hdr: &mut ExifHeader<'_>, note: &IfdTag, stop_tag: &str) -> Result<()> {
    hdr.dump_ifd(note.field_offset, "MakerNote", &canon::TAGS, false, stop_tag)?;

    for &(tag_id, table) in canon::OFFSET_TAGS {
        let key = format!("MakerNote Tag 0x{tag_id:04X}");
        if let Some(composite) = hdr.tag(&key).cloned() {
            debug!("Canon {}", key);
            if let Some(values) = composite.values.as_ints() {
                canon_decode_tag(hdr, values, table);
            }
            hdr.tags.remove(&key);
        }
    }
    Ok(())
}

/// Decode a composite tag whose array positions are the logical tags.
///
/// Position 0 is a length/version slot and is skipped. The fabricated
/// entries carry the proprietary field type and no file location.
fn canon_decode_tag(hdr: &mut ExifHeader<'_>, values: &[i64], table: &'static TagDict) {
    for (idx, &value) in values.iter().enumerate().skip(1) {
        let def = table.get(&(idx as u16));
        let name = def.map_or("Unknown", |d| d.name);
        let printable = match def.and_then(|d| d.decoder.as_ref()) {
            Some(TagDecoder::Map(map)) => TagDecoder::lookup(map, value)
                .unwrap_or("Unknown")
                .to_string(),
            Some(TagDecoder::Func(format)) => format(&TagValues::Int(vec![value])),
            _ => value.to_string(),
        };
        debug!(" {} {} {:#x}", idx, name, value);

        // not a real IFD entry, but fabricate one to keep the map uniform
        hdr.tags.insert(
            format!("MakerNote {name}"),
            TagEntry::Tag(IfdTag {
                printable,
                tag: 0,
                field_type: FieldType::Proprietary,
                values: TagValues::Int(vec![value]),
                field_offset: 0,
                field_length: 0,
                prefer_printable: true,
            }),
        );
    }
}
