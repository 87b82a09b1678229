//! The TIFF/EXIF directory walker.
//!
//! An IFD is a 16-bit entry count, `count` 12-byte entries, then a 32-bit
//! pointer to the next IFD. Each entry:
//! - Tag id (2 bytes)
//! - Field type (2 bytes)
//! - Value count (4 bytes)
//! - Value or offset (4 bytes) - inline payload if it fits, else a
//!   file-relative pointer
//!
//! The walker records decoded entries in a tag map keyed
//! `"<IFD_NAME> <TAG_NAME>"`, recursing into sub-IFDs registered in the
//! tag dictionary. It also rebuilds thumbnails out of the Thumbnail IFD.

use crate::{
    Endian, EndianReader, FieldType, IfdTag, ReadSeek, TagDecoder, TagDef, TagDict, TagEntry,
    TagMap, TagValues, Result,
};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Sentinel stop tag: never matches a real tag name.
pub const DEFAULT_STOP_TAG: &str = "UNDEF";

/// Tags skipped when detailed processing is off: ApplicationNotes (XMP),
/// MakerNote, UserComment. All three carry large payloads.
const IGNORE_TAGS: [u16; 3] = [0x02BC, 0x927C, 0x9286];

/// Tag names allowed to exceed the bulk-count corruption guard: these
/// legitimately carry opaque runs of thousands of bytes.
const BULK_COUNT_EXEMPT: [&str; 2] = ["MakerNote", "CameraInfo"];

/// Walks the IFD structure behind one EXIF header and accumulates tags.
pub struct ExifHeader<'a> {
    pub reader: EndianReader<'a>,
    pub strict: bool,
    pub detailed: bool,
    pub truncate_tags: bool,
    pub tags: TagMap,
    /// Absolute offsets of IFDs already walked; cuts sub-IFD cycles.
    seen_ifds: HashSet<u64>,
}

impl<'a> ExifHeader<'a> {
    pub fn new(
        stream: &'a mut dyn ReadSeek,
        endian: Endian,
        base_offset: u32,
        fake_exif: bool,
        strict: bool,
        detailed: bool,
        truncate_tags: bool,
    ) -> Self {
        Self {
            reader: EndianReader::new(stream, endian, base_offset, fake_exif),
            strict,
            detailed,
            truncate_tags,
            tags: TagMap::new(),
            seen_ifds: HashSet::new(),
        }
    }

    fn first_ifd(&mut self) -> Result<u32> {
        Ok(self.reader.read_uint(4, 4, false)? as u32)
    }

    /// Pointer to the IFD chained after `ifd`, zero-normalized.
    fn next_ifd(&mut self, ifd: u32) -> Result<u32> {
        let entries = self.reader.read_uint(ifd, 2, false)? as u32;
        let next = self
            .reader
            .read_uint(ifd.saturating_add(2 + 12 * entries), 4, false)? as u32;
        // a self-referential pointer terminates the chain
        if next == ifd {
            return Ok(0);
        }
        Ok(next)
    }

    /// Offsets of the root IFD chain. Cycles are detected and cut.
    pub fn list_ifd(&mut self) -> Result<Vec<u32>> {
        let mut i = self.first_ifd()?;
        let mut seen = HashSet::new();
        let mut ifds = Vec::new();
        while i != 0 {
            if !seen.insert(i) {
                warn!("IFD loop detected.");
                break;
            }
            ifds.push(i);
            i = self.next_ifd(i)?;
        }
        Ok(ifds)
    }

    /// Record every entry of the IFD at `ifd` under the `ifd_name` prefix.
    ///
    /// `relative` selects MakerNote-local pointer arithmetic (Nikon type
    /// 3). Processing halts after an entry named `stop_tag` is stored.
    pub fn dump_ifd(
        &mut self,
        ifd: u32,
        ifd_name: &str,
        tag_dict: &'static TagDict,
        relative: bool,
        stop_tag: &str,
    ) -> Result<()> {
        let absolute = u64::from(self.reader.base_offset) + u64::from(ifd);
        if !self.seen_ifds.insert(absolute) {
            warn!("IFD loop detected at offset {}.", ifd);
            return Ok(());
        }

        let Some(entries) = self.reader.try_uint(ifd, 2) else {
            warn!("Possibly corrupted IFD: {}", ifd_name);
            return Ok(());
        };

        for i in 0..entries as u32 {
            let entry = ifd.saturating_add(2 + 12 * i);
            let tag = self.reader.read_uint(entry, 2, false)? as u16;

            let tag_entry = tag_dict.get(&tag);
            let tag_name = match tag_entry {
                Some(def) => def.name.to_string(),
                None => format!("Tag 0x{tag:04X}"),
            };

            // ignore certain tags for faster processing
            if !(!self.detailed && IGNORE_TAGS.contains(&tag)) {
                self.process_entry(
                    ifd, ifd_name, tag_entry, entry, tag, &tag_name, relative, stop_tag,
                )?;
            }

            if tag_name == stop_tag {
                break;
            }
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn process_entry(
        &mut self,
        ifd: u32,
        ifd_name: &str,
        tag_entry: Option<&'static TagDef>,
        entry: u32,
        tag: u16,
        tag_name: &str,
        relative: bool,
        stop_tag: &str,
    ) -> Result<()> {
        let type_code = self.reader.read_uint(entry.saturating_add(2), 2, false)? as u16;
        let field_type = match FieldType::from_entry(type_code, tag) {
            Ok(ft) => ft,
            Err(err) => {
                if self.strict {
                    return Err(err);
                }
                return Ok(());
            }
        };

        let type_length = field_type.size();
        let count = self.reader.read_uint(entry.saturating_add(4), 4, false)? as u32;

        // The 4-byte slot holds the payload when it fits, else a pointer.
        let mut offset = entry.saturating_add(8);
        if u64::from(count) * u64::from(type_length) > 4 {
            if relative {
                // Nikon type-3 pointers are MakerNote-local
                let raw = self.reader.read_uint(offset, 4, false)?;
                let mut adjusted = raw + i64::from(ifd) - 8;
                if self.reader.fake_exif {
                    adjusted += 18;
                }
                offset = adjusted.max(0) as u32;
            } else {
                offset = self.reader.read_uint(offset, 4, false)? as u32;
            }
        }

        let field_offset = offset;
        let values = if field_type == FieldType::Ascii {
            self.decode_ascii(ifd_name, tag_name, count, offset)
        } else {
            self.decode_values(tag_name, count, field_type, offset)?
        };

        let (printable, prefer_printable) =
            self.printable_for(&values, count, field_type, tag_entry, stop_tag)?;

        debug!(
            " {}: (0x{:04X}) {}={} @ {}",
            tag_name,
            tag,
            field_type.label(),
            printable,
            field_offset
        );

        self.tags.insert(
            format!("{ifd_name} {tag_name}"),
            TagEntry::Tag(IfdTag {
                printable,
                tag,
                field_type,
                values,
                field_offset,
                field_length: count.saturating_mul(type_length),
                prefer_printable,
            }),
        );
        Ok(())
    }

    /// Null-terminated ASCII payload. Invalid UTF-8 is reported and the
    /// raw bytes kept.
    fn decode_ascii(&mut self, ifd_name: &str, tag_name: &str, count: u32, offset: u32) -> TagValues {
        if count == 0 {
            return TagValues::Str(String::new());
        }
        let raw = self.reader.read_up_to(offset, count as usize);
        // drop any garbage after a null
        let head = match raw.iter().position(|&b| b == 0) {
            Some(nul) => &raw[..nul],
            None => &raw[..],
        };
        match std::str::from_utf8(head) {
            Ok(s) => TagValues::Str(s.to_string()),
            Err(_) => {
                warn!("Possibly corrupted field {} in {} IFD", tag_name, ifd_name);
                TagValues::Bytes(head.to_vec())
            }
        }
    }

    fn decode_values(
        &mut self,
        tag_name: &str,
        count: u32,
        field_type: FieldType,
        offset: u32,
    ) -> Result<TagValues> {
        let signed = field_type.is_signed();
        let type_length = field_type.size();

        // Entries claiming huge counts are usually corruption; only tags
        // known to carry large opaque runs are decoded in full.
        if count >= 1000 && !BULK_COUNT_EXEMPT.contains(&tag_name) {
            return Ok(TagValues::Int(Vec::new()));
        }

        if field_type.is_ratio() {
            let mut values = Vec::with_capacity(count as usize);
            for i in 0..count {
                values.push(self.reader.read_ratio(offset.saturating_add(i * 8), signed)?);
            }
            return Ok(TagValues::Ratio(values));
        }

        if field_type.is_float() {
            let mut values = Vec::with_capacity(count as usize);
            for i in 0..count {
                let at = offset.saturating_add(i * type_length);
                match self.reader.read_float(at, type_length) {
                    Some(v) => values.push(v),
                    None => {
                        warn!("Possibly corrupted field {}", tag_name);
                        values.push(-1.0);
                    }
                }
            }
            return Ok(TagValues::Float(values));
        }

        let mut values = Vec::with_capacity(count as usize);
        for i in 0..count {
            values.push(self.reader.read_uint(
                offset.saturating_add(i * type_length),
                type_length as usize,
                signed,
            )?);
        }
        Ok(TagValues::Int(values))
    }

    /// Compute the printable form, applying the dictionary decoder when
    /// one is registered. Sub-IFD decoders trigger a recursive walk.
    fn printable_for(
        &mut self,
        values: &TagValues,
        count: u32,
        field_type: FieldType,
        tag_entry: Option<&'static TagDef>,
        stop_tag: &str,
    ) -> Result<(String, bool)> {
        let mut printable = if count == 1 && field_type != FieldType::Ascii {
            values
                .item_strings()
                .and_then(|items| items.into_iter().next())
                .unwrap_or_default()
        } else if count > 50 && values.len() > 20 && self.truncate_tags {
            match values.item_strings() {
                Some(items) => format!("[{}, ... ]", items[..20].join(", ")),
                None => values.to_string(),
            }
        } else {
            values.to_string()
        };

        let mut prefer_printable = false;
        if let Some(decoder) = tag_entry.and_then(|def| def.decoder.as_ref()) {
            prefer_printable = true;
            match decoder {
                TagDecoder::Func(format) => printable = format(values),
                TagDecoder::Map(table) => {
                    if let Some(ints) = values.as_ints() {
                        printable = ints
                            .iter()
                            .map(|&v| match TagDecoder::lookup(table, v) {
                                Some(label) => label.to_string(),
                                None => v.to_string(),
                            })
                            .collect();
                    }
                }
                TagDecoder::SubIfd(sub_name, sub_dict) => match values.first_int() {
                    Some(sub_offset) => {
                        debug!("{} SubIFD at offset {}:", sub_name, sub_offset);
                        self.dump_ifd(sub_offset.max(0) as u32, sub_name, sub_dict(), false, stop_tag)?;
                    }
                    None => warn!("No values found for {} SubIFD", sub_name),
                },
            }
        }

        Ok((printable, prefer_printable))
    }

    /// Extract the JPEG-compressed thumbnail, stored as one unit.
    pub fn extract_jpeg_thumbnail(&mut self) -> Result<()> {
        let located = match (
            self.tag("Thumbnail JPEGInterchangeFormat"),
            self.tag("Thumbnail JPEGInterchangeFormatLength"),
        ) {
            (Some(thumb), Some(len)) => thumb
                .values
                .first_int()
                .zip(len.values.first_int())
                .map(|(off, size)| (off.max(0) as u32, size.max(0) as usize)),
            _ => None,
        };
        if let Some((offset, size)) = located {
            let data = self.reader.read_up_to(offset, size);
            self.tags
                .insert("JPEGThumbnail".to_string(), TagEntry::Bytes(data));
        }

        // TIFF files may stash a JPEG thumbnail in the MakerNote, since
        // one is not allowed in an uncompressed TIFF IFD.
        if !self.tags.contains_key("JPEGThumbnail") {
            let located = self
                .tag("MakerNote JPEGThumbnail")
                .and_then(|t| t.values.first_int().map(|off| (off.max(0) as u32, t.field_length)));
            if let Some((offset, length)) = located {
                let data = self.reader.read_up_to(offset, length as usize);
                self.tags
                    .insert("JPEGThumbnail".to_string(), TagEntry::Bytes(data));
            }
        }
        Ok(())
    }

    /// Rebuild an uncompressed TIFF thumbnail as a standalone TIFF.
    ///
    /// The thumbnail IFD is copied verbatim; out-of-line payloads are
    /// appended to the new buffer and their offset slots rewritten, then
    /// the pixel strips are appended and the strip-offset table patched to
    /// the new locations. External TIFF readers can open the result as-is.
    pub fn extract_tiff_thumbnail(&mut self, thumb_ifd: u32) -> Result<()> {
        let is_uncompressed = self
            .tag("Thumbnail Compression")
            .is_some_and(|t| t.printable == "Uncompressed TIFF");
        if !is_uncompressed {
            return Ok(());
        }

        let entries = self.reader.read_uint(thumb_ifd, 2, false)? as u32;

        // header plus offset to IFD ...
        let mut tiff: Vec<u8> = match self.reader.endian {
            Endian::Motorola => b"MM\x00*\x00\x00\x00\x08".to_vec(),
            Endian::Intel => b"II*\x00\x08\x00\x00\x00".to_vec(),
        };
        // ... plus thumbnail IFD data plus a null "next IFD" pointer
        tiff.extend(self.reader.read_up_to(thumb_ifd, entries as usize * 12 + 2));
        tiff.extend_from_slice(&[0, 0, 0, 0]);

        let mut strip_off: usize = 0;
        let mut strip_len: usize = 0;

        // fix up large value offset pointers into the data area
        for i in 0..entries {
            let entry = thumb_ifd.saturating_add(2 + 12 * i);
            let tag = self.reader.read_uint(entry, 2, false)? as u16;
            let type_code = self.reader.read_uint(entry.saturating_add(2), 2, false)? as u16;
            let Ok(field_type) = FieldType::from_entry(type_code, tag) else {
                warn!("Unknown type in thumbnail IFD entry, skipping");
                continue;
            };
            let type_length = field_type.size();
            let count = self.reader.read_uint(entry.saturating_add(4), 4, false)? as u32;
            let old_offset = self.reader.read_uint(entry.saturating_add(8), 4, false)? as u32;
            // start of the 4-byte value slot inside the copied IFD
            let ptr = i as usize * 12 + 18;

            let payload = (count as usize) * (type_length as usize);
            if tag == 0x0111 {
                strip_off = ptr;
                strip_len = payload;
            }
            if payload > 4 {
                let newoff = tiff.len() as u64;
                let slot = self.reader.n2b(newoff, 4);
                patch(&mut tiff, ptr, &slot);
                if tag == 0x0111 {
                    strip_off = newoff as usize;
                    strip_len = 4;
                }
                let data = self.reader.read_up_to(old_offset, payload);
                tiff.extend(data);
            }
        }

        // add pixel strips and update strip offset info
        let strips: Vec<(i64, i64)> = match (
            self.tag("Thumbnail StripOffsets").and_then(|t| t.values.as_ints()),
            self.tag("Thumbnail StripByteCounts").and_then(|t| t.values.as_ints()),
        ) {
            (Some(offsets), Some(counts)) => {
                offsets.iter().copied().zip(counts.iter().copied()).collect()
            }
            _ => {
                debug!("Thumbnail strip tables missing, keeping IFD copy only");
                Vec::new()
            }
        };
        for (old_offset, byte_count) in strips {
            if strip_len == 0 {
                break;
            }
            let slot = self.reader.n2b(tiff.len() as u64, strip_len);
            patch(&mut tiff, strip_off, &slot);
            strip_off += strip_len;
            let data = self
                .reader
                .read_up_to(old_offset.max(0) as u32, byte_count.max(0) as usize);
            tiff.extend(data);
        }

        self.tags
            .insert("TIFFThumbnail".to_string(), TagEntry::Bytes(tiff));
        Ok(())
    }

    /// Decoded tag under `key`, if present.
    pub fn tag(&self, key: &str) -> Option<&IfdTag> {
        self.tags.get(key).and_then(TagEntry::as_tag)
    }
}

/// Overwrite `buf[pos..pos + bytes.len()]`, ignoring out-of-range patches
/// from truncated IFD copies.
fn patch(buf: &mut [u8], pos: usize, bytes: &[u8]) {
    if let Some(slot) = buf.get_mut(pos..pos + bytes.len()) {
        slot.copy_from_slice(bytes);
    } else {
        warn!("Thumbnail patch at {} out of range", pos);
    }
}
