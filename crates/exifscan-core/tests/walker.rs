//! IFD walker tests over synthetic in-memory TIFF structures.

use exifscan_core::{
    Endian, ExifHeader, TagDecoder, TagDef, TagDict, TagValues, DEFAULT_STOP_TAG,
};
use phf::phf_map;
use std::io::Cursor;

static EXIF_SUB: TagDict = phf_map! {
    0x9209_u16 => TagDef::with("Flash", TagDecoder::Map(&[(0, "Flash did not fire"), (1, "Flash fired")])),
};

fn exif_sub() -> &'static TagDict {
    &EXIF_SUB
}

static ROOT: TagDict = phf_map! {
    0x0100_u16 => TagDef::new("ImageWidth"),
    0x0103_u16 => TagDef::with("Compression", TagDecoder::Map(&[
        (1, "Uncompressed TIFF"),
        (6, "JPEG (old-style)"),
        (7, "JPEG"),
    ])),
    0x010F_u16 => TagDef::new("Make"),
    0x0111_u16 => TagDef::new("StripOffsets"),
    0x0112_u16 => TagDef::new("Orientation"),
    0x0117_u16 => TagDef::new("StripByteCounts"),
    0x011A_u16 => TagDef::new("XResolution"),
    0x0201_u16 => TagDef::new("JPEGInterchangeFormat"),
    0x0202_u16 => TagDef::new("JPEGInterchangeFormatLength"),
    0x8769_u16 => TagDef::with("ExifOffset", TagDecoder::SubIfd("EXIF", exif_sub)),
};

/// Incremental TIFF builder for fixtures.
struct Tiff {
    endian: Endian,
    data: Vec<u8>,
}

impl Tiff {
    fn new(endian: Endian) -> Self {
        let data = match endian {
            Endian::Intel => b"II*\x00\x00\x00\x00\x00".to_vec(),
            Endian::Motorola => b"MM\x00*\x00\x00\x00\x00".to_vec(),
        };
        Self { endian, data }
    }

    fn u16(&mut self, v: u16) {
        self.endian.put_uint(&mut self.data, u64::from(v), 2);
    }

    fn u32(&mut self, v: u32) {
        self.endian.put_uint(&mut self.data, u64::from(v), 4);
    }

    fn u32_at(&mut self, pos: usize, v: u32) {
        let mut slot = Vec::new();
        self.endian.put_uint(&mut slot, u64::from(v), 4);
        self.data[pos..pos + 4].copy_from_slice(&slot);
    }

    fn here(&self) -> u32 {
        self.data.len() as u32
    }

    /// Entry with a pre-resolved 4-byte value slot.
    fn entry(&mut self, tag: u16, field_type: u16, count: u32, slot: [u8; 4]) {
        self.u16(tag);
        self.u16(field_type);
        self.u32(count);
        self.data.extend_from_slice(&slot);
    }

    fn slot_u16(&self, v: u16) -> [u8; 4] {
        let mut out = Vec::new();
        self.endian.put_uint(&mut out, u64::from(v), 2);
        out.extend_from_slice(&[0, 0]);
        [out[0], out[1], out[2], out[3]]
    }

    fn slot_u32(&self, v: u32) -> [u8; 4] {
        let mut out = Vec::new();
        self.endian.put_uint(&mut out, u64::from(v), 4);
        [out[0], out[1], out[2], out[3]]
    }

    fn set_first_ifd(&mut self, offset: u32) {
        self.u32_at(4, offset);
    }

    fn header<'a>(&self, cursor: &'a mut Cursor<Vec<u8>>, strict: bool) -> ExifHeader<'a> {
        ExifHeader::new(cursor, self.endian, 0, false, strict, true, true)
    }
}

/// One IFD: Make (pointer ASCII), Orientation (inline short), XResolution
/// (pointer rational), ExifOffset -> sub-IFD with Flash.
fn sample_tiff(endian: Endian) -> Tiff {
    let mut t = Tiff::new(endian);
    t.set_first_ifd(8);

    // IFD0 at 8 with 4 entries: 2 + 4*12 + 4 = 54 bytes, payloads at 62
    let make_off = 8 + 54;
    let res_off = make_off + 8;
    let sub_off = res_off + 8;
    t.u16(4);
    let make_slot = t.slot_u32(make_off);
    t.entry(0x010F, 2, 8, make_slot);
    let orient_slot = t.slot_u16(6);
    t.entry(0x0112, 3, 1, orient_slot);
    let res_slot = t.slot_u32(res_off);
    t.entry(0x011A, 5, 1, res_slot);
    let sub_slot = t.slot_u32(sub_off);
    t.entry(0x8769, 4, 1, sub_slot);
    t.u32(0); // next IFD

    assert_eq!(t.here(), make_off);
    t.data.extend_from_slice(b"CanonX\x00\x00");
    t.u32(72);
    t.u32(2);

    // EXIF sub-IFD: Flash = 1
    assert_eq!(t.here(), sub_off);
    t.u16(1);
    let flash_slot = t.slot_u16(1);
    t.entry(0x9209, 3, 1, flash_slot);
    t.u32(0);
    t
}

fn walk(t: &Tiff, stop_tag: &str) -> exifscan_core::TagMap {
    let mut cursor = Cursor::new(t.data.clone());
    let mut hdr = t.header(&mut cursor, false);
    let ifds = hdr.list_ifd().unwrap();
    for (i, ifd) in ifds.iter().enumerate() {
        let name = match i {
            0 => "Image".to_string(),
            1 => "Thumbnail".to_string(),
            n => format!("IFD {n}"),
        };
        hdr.dump_ifd(*ifd, &name, &ROOT, false, stop_tag).unwrap();
    }
    hdr.tags
}

#[test]
fn walks_root_and_sub_ifd() {
    let tags = walk(&sample_tiff(Endian::Intel), DEFAULT_STOP_TAG);

    let make = tags["Image Make"].as_tag().unwrap();
    assert_eq!(make.printable, "CanonX");
    assert_eq!(make.values, TagValues::Str("CanonX".into()));

    let orientation = tags["Image Orientation"].as_tag().unwrap();
    assert_eq!(orientation.printable, "6");

    let res = tags["Image XResolution"].as_tag().unwrap();
    assert_eq!(res.printable, "36");

    // sub-IFD walked under its own prefix, enum decoded
    let flash = tags["EXIF Flash"].as_tag().unwrap();
    assert_eq!(flash.printable, "Flash fired");
    assert!(flash.prefer_printable);
}

#[test]
fn inline_and_pointer_offsets() {
    let tags = walk(&sample_tiff(Endian::Intel), DEFAULT_STOP_TAG);

    // inline payload: the field offset is the entry's value slot
    let orientation = tags["Image Orientation"].as_tag().unwrap();
    assert_eq!(orientation.field_length, 2);
    assert_eq!(orientation.field_offset, 8 + 2 + 12 + 8);

    // out-of-line payload: the field offset addresses the data area
    let make = tags["Image Make"].as_tag().unwrap();
    assert_eq!(make.field_length, 8);
    assert_eq!(make.field_offset, 62);
}

#[test]
fn endian_invariance() {
    let le = walk(&sample_tiff(Endian::Intel), DEFAULT_STOP_TAG);
    let be = walk(&sample_tiff(Endian::Motorola), DEFAULT_STOP_TAG);
    assert_eq!(le.len(), be.len());
    for (key, entry) in &le {
        let other = be[key].as_tag().unwrap();
        let tag = entry.as_tag().unwrap();
        assert_eq!(tag.values, other.values, "{key}");
        assert_eq!(tag.printable, other.printable, "{key}");
    }
}

#[test]
fn stop_tag_returns_prefix() {
    let full = walk(&sample_tiff(Endian::Intel), DEFAULT_STOP_TAG);
    let stopped = walk(&sample_tiff(Endian::Intel), "Orientation");

    assert!(stopped.len() < full.len());
    assert!(stopped.contains_key("Image Make"));
    assert!(stopped.contains_key("Image Orientation"));
    assert!(!stopped.contains_key("Image XResolution"));
    for key in stopped.keys() {
        assert!(full.contains_key(key));
    }
}

#[test]
fn ifd_cycle_terminates() {
    let mut t = Tiff::new(Endian::Intel);
    t.set_first_ifd(8);
    // empty IFD whose next pointer loops back to itself via a second IFD
    t.u16(0);
    t.u32(14); // next -> 14
    assert_eq!(t.here(), 14);
    t.u16(0);
    t.u32(8); // next -> back to 8

    let mut cursor = Cursor::new(t.data.clone());
    let mut hdr = t.header(&mut cursor, false);
    let ifds = hdr.list_ifd().unwrap();
    assert_eq!(ifds, vec![8, 14]);
}

#[test]
fn sub_ifd_cycle_terminates() {
    let mut t = Tiff::new(Endian::Intel);
    t.set_first_ifd(8);
    // ExifOffset points back at the IFD that contains it
    t.u16(1);
    let slot = t.slot_u32(8);
    t.entry(0x8769, 4, 1, slot);
    t.u32(0);

    let mut cursor = Cursor::new(t.data.clone());
    let mut hdr = t.header(&mut cursor, false);
    hdr.dump_ifd(8, "Image", &ROOT, false, DEFAULT_STOP_TAG).unwrap();
    // the pointer tag is stored once; the recursive walk is cut
    assert!(hdr.tags.contains_key("Image ExifOffset"));
    assert!(hdr.tags.keys().all(|key| !key.starts_with("EXIF ")));
}

#[test]
fn self_referential_next_ifd_stops() {
    let mut t = Tiff::new(Endian::Intel);
    t.set_first_ifd(8);
    t.u16(0);
    t.u32(8); // next -> itself

    let mut cursor = Cursor::new(t.data.clone());
    let mut hdr = t.header(&mut cursor, false);
    assert_eq!(hdr.list_ifd().unwrap(), vec![8]);
}

#[test]
fn unknown_field_type_strict_vs_lenient() {
    let mut t = Tiff::new(Endian::Intel);
    t.set_first_ifd(8);
    t.u16(1);
    let slot = t.slot_u16(1);
    t.entry(0x089C, 99, 1, slot); // type 99 does not exist
    t.u32(0);

    // lenient: entry skipped, walk continues
    let mut cursor = Cursor::new(t.data.clone());
    let mut hdr = t.header(&mut cursor, false);
    hdr.dump_ifd(8, "Image", &ROOT, false, DEFAULT_STOP_TAG).unwrap();
    assert!(hdr.tags.is_empty());

    // strict: the error names the offending tag
    let mut cursor = Cursor::new(t.data.clone());
    let mut hdr = t.header(&mut cursor, true);
    let err = hdr
        .dump_ifd(8, "Image", &ROOT, false, DEFAULT_STOP_TAG)
        .unwrap_err();
    assert!(err.to_string().contains("tag 0x089C"));
}

#[test]
fn bulk_count_guard_empties_values() {
    let mut t = Tiff::new(Endian::Intel);
    t.set_first_ifd(8);
    t.u16(1);
    // claims 100000 bytes; decoding is suppressed
    let slot = t.slot_u32(26);
    t.entry(0x0100, 1, 100_000, slot);
    t.u32(0);

    let tags = walk(&t, DEFAULT_STOP_TAG);
    let tag = tags["Image ImageWidth"].as_tag().unwrap();
    assert!(tag.values.is_empty());
    assert_eq!(tag.printable, "[]");
}

#[test]
fn truncated_ifd_is_not_fatal() {
    let mut t = Tiff::new(Endian::Intel);
    t.set_first_ifd(4096); // way past the end

    let mut cursor = Cursor::new(t.data.clone());
    let mut hdr = t.header(&mut cursor, false);
    hdr.dump_ifd(4096, "Image", &ROOT, false, DEFAULT_STOP_TAG).unwrap();
    assert!(hdr.tags.is_empty());
}

/// Thumbnail IFD with two pixel strips; the rebuilt TIFF must be
/// self-contained and its strips must concatenate to the originals.
#[test]
fn tiff_thumbnail_round_trip() {
    let mut t = Tiff::new(Endian::Intel);
    t.set_first_ifd(8);

    // IFD0: single width entry, chained to the thumbnail IFD at 26
    t.u16(1);
    let slot = t.slot_u16(32);
    t.entry(0x0100, 3, 1, slot);
    t.u32(26);

    // IFD1 at 26: 3 entries -> 2 + 36 + 4 = 42 bytes, payloads at 68
    assert_eq!(t.here(), 26);
    let offsets_table = 68u32;
    let counts_table = 76u32;
    let strip1 = 84u32;
    let strip2 = 88u32;
    t.u16(3);
    let slot = t.slot_u16(1); // Uncompressed TIFF
    t.entry(0x0103, 3, 1, slot);
    let slot = t.slot_u32(offsets_table);
    t.entry(0x0111, 4, 2, slot);
    let slot = t.slot_u32(counts_table);
    t.entry(0x0117, 4, 2, slot);
    t.u32(0);

    assert_eq!(t.here(), offsets_table);
    t.u32(strip1);
    t.u32(strip2);
    t.u32(4);
    t.u32(4);
    assert_eq!(t.here(), strip1);
    t.data.extend_from_slice(&[1, 2, 3, 4]);
    t.data.extend_from_slice(&[5, 6, 7, 8]);

    let mut cursor = Cursor::new(t.data.clone());
    let mut hdr = t.header(&mut cursor, false);
    let ifds = hdr.list_ifd().unwrap();
    assert_eq!(ifds.len(), 2);
    hdr.dump_ifd(ifds[0], "Image", &ROOT, false, DEFAULT_STOP_TAG).unwrap();
    hdr.dump_ifd(ifds[1], "Thumbnail", &ROOT, false, DEFAULT_STOP_TAG).unwrap();
    hdr.extract_tiff_thumbnail(ifds[1]).unwrap();

    let thumb = hdr.tags["TIFFThumbnail"].as_bytes().unwrap().to_vec();
    assert_eq!(&thumb[..4], b"II*\x00");

    // re-walk the rebuilt TIFF and pull the strips back out
    let mut cursor = Cursor::new(thumb.clone());
    let mut reread = ExifHeader::new(&mut cursor, Endian::Intel, 0, false, false, true, true);
    let ifds = reread.list_ifd().unwrap();
    assert_eq!(ifds.len(), 1);
    reread
        .dump_ifd(ifds[0], "Thumbnail", &ROOT, false, DEFAULT_STOP_TAG)
        .unwrap();

    let offsets = reread.tags["Thumbnail StripOffsets"]
        .as_tag()
        .unwrap()
        .values
        .as_ints()
        .unwrap()
        .to_vec();
    let counts = reread.tags["Thumbnail StripByteCounts"]
        .as_tag()
        .unwrap()
        .values
        .as_ints()
        .unwrap()
        .to_vec();
    let mut pixels = Vec::new();
    for (off, len) in offsets.iter().zip(&counts) {
        pixels.extend_from_slice(&thumb[*off as usize..(*off + *len) as usize]);
    }
    assert_eq!(pixels, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn jpeg_thumbnail_extraction() {
    let mut t = Tiff::new(Endian::Intel);
    t.set_first_ifd(8);

    // IFD0 empty, chained to IFD1 at 14
    t.u16(0);
    t.u32(14);
    // IFD1: JPEGInterchangeFormat + length, 2 + 24 + 4 = 30 bytes -> 44
    assert_eq!(t.here(), 14);
    let jpeg_off = 44u32;
    t.u16(2);
    let slot = t.slot_u32(jpeg_off);
    t.entry(0x0201, 4, 1, slot);
    let slot = t.slot_u32(6);
    t.entry(0x0202, 4, 1, slot);
    t.u32(0);
    assert_eq!(t.here(), jpeg_off);
    t.data.extend_from_slice(&[0xFF, 0xD8, 0xAA, 0xBB, 0xFF, 0xD9]);

    let mut cursor = Cursor::new(t.data.clone());
    let mut hdr = t.header(&mut cursor, false);
    let ifds = hdr.list_ifd().unwrap();
    hdr.dump_ifd(ifds[1], "Thumbnail", &ROOT, false, DEFAULT_STOP_TAG).unwrap();
    hdr.extract_jpeg_thumbnail().unwrap();

    assert_eq!(
        hdr.tags["JPEGThumbnail"].as_bytes().unwrap(),
        &[0xFF, 0xD8, 0xAA, 0xBB, 0xFF, 0xD9]
    );
}
