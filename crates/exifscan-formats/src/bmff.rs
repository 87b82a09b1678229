//! Minimal ISO base-media-file-format box walker.
//!
//! HEIC/AVIF (and the JPEG XL container) are BMFF files. Just enough is
//! parsed to locate the Exif item: inside the `meta` box, `iinf` holds
//! `infe` records naming an item id for `Exif`, and `iloc` maps that id
//! to extents in the file. Unknown boxes are skipped, never decoded.

use crate::locate::read_up_to;
use crate::{Error, Result};
use exifscan_core::ReadSeek;
use std::collections::HashMap;
use std::io::SeekFrom;
use tracing::debug;

/// One BMFF box header.
#[derive(Debug, Clone)]
struct BmffBox {
    kind: [u8; 4],
    /// Payload start.
    pos: u64,
    /// First byte after the box.
    after: u64,
    version: u8,
}

/// Item locations collected from `iinf`/`iloc`.
#[derive(Default)]
struct MetaInfo {
    exif_item_id: Option<u32>,
    locations: HashMap<u32, Vec<(u64, u64)>>,
}

/// Walks boxes over a seekable stream.
pub struct BmffExifFinder<'a> {
    fh: &'a mut dyn ReadSeek,
}

impl<'a> BmffExifFinder<'a> {
    pub fn new(fh: &'a mut dyn ReadSeek) -> Self {
        Self { fh }
    }

    fn get(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        let got = read_up_to(self.fh, &mut buf)?;
        if got != n {
            return Err(Error::InvalidExif(format!(
                "box read of {n} bytes found {got} at position {}",
                self.fh.stream_position().unwrap_or(0)
            )));
        }
        Ok(buf)
    }

    fn get16(&mut self) -> Result<u16> {
        let b = self.get(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    fn get32(&mut self) -> Result<u32> {
        let b = self.get(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn get64(&mut self) -> Result<u64> {
        let b = self.get(8)?;
        Ok(u64::from_be_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    /// Two 4-bit sizes packed in one byte.
    fn get_nibbles(&mut self) -> Result<(u8, u8)> {
        let b = self.get(1)?;
        Ok((b[0] >> 4, b[0] & 0xF))
    }

    /// Variant-sized field: 0, 2, 4 or 8 bytes.
    fn get_sized(&mut self, size: u8) -> Result<u64> {
        match size {
            0 => Ok(0),
            2 => Ok(u64::from(self.get16()?)),
            4 => Ok(u64::from(self.get32()?)),
            8 => self.get64(),
            other => Err(Error::InvalidExif(format!("bad iloc field size {other}"))),
        }
    }

    fn next_box(&mut self) -> Result<BmffBox> {
        let pos = self.fh.stream_position()?;
        let size = u64::from(self.get32()?);
        let kind_bytes = self.get(4)?;
        let kind = [kind_bytes[0], kind_bytes[1], kind_bytes[2], kind_bytes[3]];
        let after = match size {
            // to-the-end-of-file markers never precede the meta box
            0 => return Err(Error::InvalidExif("open-ended box".to_string())),
            1 => pos.saturating_add(self.get64()?),
            n => pos.saturating_add(n),
        };
        // a box smaller than its own header cannot advance the walk
        if after < self.fh.stream_position()? {
            return Err(Error::InvalidExif(format!("box size {size} too small")));
        }
        Ok(BmffBox {
            kind,
            pos: self.fh.stream_position()?,
            after,
            version: 0,
        })
    }

    /// Read the version/flags word of a full box.
    fn read_full(&mut self, bx: &mut BmffBox) -> Result<()> {
        let vflags = self.get32()?;
        bx.version = (vflags >> 24) as u8;
        Ok(())
    }

    fn skip(&mut self, bx: &BmffBox) -> Result<()> {
        self.fh.seek(SeekFrom::Start(bx.after))?;
        Ok(())
    }

    /// Advance to the next box named `kind`, skipping everything else.
    fn expect(&mut self, kind: &[u8; 4]) -> Result<BmffBox> {
        loop {
            let bx = self.next_box()?;
            if &bx.kind == kind {
                return Ok(bx);
            }
            self.skip(&bx)?;
        }
    }

    fn parse_ftyp(&mut self, bx: &BmffBox) -> Result<([u8; 4], u32)> {
        let brand = self.get(4)?;
        let minor_version = self.get32()?;
        self.skip(bx)?;
        Ok(([brand[0], brand[1], brand[2], brand[3]], minor_version))
    }

    fn parse_meta(&mut self, meta: &mut BmffBox) -> Result<MetaInfo> {
        self.read_full(meta)?;
        let mut info = MetaInfo::default();
        while self.fh.stream_position()? < meta.after {
            let mut bx = self.next_box()?;
            match &bx.kind {
                b"iinf" => self.parse_iinf(&mut bx, &mut info)?,
                b"iloc" => self.parse_iloc(&mut bx, &mut info)?,
                _ => debug!("BMFF: skipping {:?}", String::from_utf8_lossy(&bx.kind)),
            }
            self.skip(&bx)?;
        }
        Ok(info)
    }

    /// `iinf`: find the `infe` record whose item type is `Exif`.
    fn parse_iinf(&mut self, bx: &mut BmffBox, info: &mut MetaInfo) -> Result<()> {
        self.read_full(bx)?;
        let count = if bx.version == 0 {
            u32::from(self.get16()?)
        } else {
            self.get32()?
        };
        for _ in 0..count {
            let mut infe = self.expect(b"infe")?;
            self.read_full(&mut infe)?;
            if infe.version >= 2 {
                let item_id = if infe.version == 2 {
                    u32::from(self.get16()?)
                } else {
                    self.get32()?
                };
                self.get16()?; // item_protection_index
                let item_type = self.get(4)?;
                if item_type == b"Exif" {
                    debug!("BMFF: found Exif 'infe' box");
                    info.exif_item_id = Some(item_id);
                    return Ok(());
                }
            }
            self.skip(&infe)?;
        }
        Ok(())
    }

    /// `iloc`: item id to (offset, length) extents.
    fn parse_iloc(&mut self, bx: &mut BmffBox, info: &mut MetaInfo) -> Result<()> {
        self.read_full(bx)?;
        if bx.version > 2 {
            return Err(Error::InvalidExif(format!("iloc version {}", bx.version)));
        }
        let (offset_size, length_size) = self.get_nibbles()?;
        let (base_offset_size, index_size) = self.get_nibbles()?;
        let item_count = if bx.version < 2 {
            u32::from(self.get16()?)
        } else {
            self.get32()?
        };
        debug!("BMFF: {} iloc items", item_count);
        for _ in 0..item_count {
            let item_id = if bx.version < 2 {
                u32::from(self.get16()?)
            } else {
                self.get32()?
            };
            if bx.version == 1 || bx.version == 2 {
                self.get16()?; // construction_method
            }
            self.get16()?; // data_reference_index
            // the base offset only advances the read; extents are stored
            // as written
            self.get_sized(base_offset_size)?;
            let extent_count = self.get16()?;
            let mut extents = Vec::with_capacity(extent_count as usize);
            for _ in 0..extent_count {
                if (bx.version == 1 || bx.version == 2) && index_size > 0 {
                    self.get_sized(index_size)?;
                }
                let extent_offset = self.get_sized(offset_size)?;
                let extent_length = self.get_sized(length_size)?;
                extents.push((extent_offset, extent_length));
            }
            info.locations.insert(item_id, extents);
        }
        Ok(())
    }

    /// HEIC/AVIF: ftyp, meta, then the Exif item's extent.
    ///
    /// Returns offset 0 when the brand is unknown or the extent's
    /// pseudo-box header carries a zero Exif-tiff-offset; the caller falls
    /// back to scanning for a bare TIFF header.
    pub fn find_heic_exif(&mut self) -> Result<(u32, u8)> {
        let ftyp = self.expect(b"ftyp")?;
        let (brand, minor_version) = self.parse_ftyp(&ftyp)?;
        if !matches!(&brand, b"heic" | b"avif" | b"mif1") || minor_version != 0 {
            return Ok((0, b'?'));
        }

        let mut meta = self.expect(b"meta")?;
        let info = self.parse_meta(&mut meta)?;
        let Some(item_id) = info.exif_item_id else {
            return Ok((0, b'?'));
        };
        let Some(extents) = info.locations.get(&item_id) else {
            return Ok((0, b'?'));
        };
        // the Exif data is expected in one piece
        let [(pos, _)] = extents.as_slice() else {
            return Err(Error::InvalidExif("fragmented Exif item".to_string()));
        };
        debug!("BMFF: found Exif location.");
        self.fh.seek(SeekFrom::Start(*pos))?;

        // The item payload is a pseudo-box: a 4-byte offset to the TIFF
        // header. Android writes an APP1-style `Exif\0\0` prefix there,
        // iOS a bare one; HMD phones write offset zero and park a naked
        // TIFF header instead.
        let tiff_offset = self.get32()?;
        if tiff_offset == 0 {
            return Ok((0, b'?'));
        }
        if tiff_offset < 6 {
            return Err(Error::InvalidExif("short Exif item prefix".to_string()));
        }
        let prefix = self.get(tiff_offset as usize)?;
        if &prefix[prefix.len() - 6..] != b"Exif\x00\x00" {
            return Err(Error::InvalidExif("Exif item without Exif marker".to_string()));
        }
        let offset = self.fh.stream_position()? as u32;
        let endian = self.get(1)?[0];
        Ok((offset, endian))
    }

    /// JPEG XL container: ftyp brand `jxl `, then the `Exif` box whose
    /// payload is a 4-byte offset followed by the TIFF header.
    pub fn find_jxl_exif(&mut self) -> Result<(u32, u8)> {
        let ftyp = self.expect(b"ftyp")?;
        let (brand, minor_version) = self.parse_ftyp(&ftyp)?;
        if &brand != b"jxl " || minor_version != 0 {
            return Ok((0, b'?'));
        }
        let exif = self.expect(b"Exif")?;

        let offset = exif.pos as u32 + 4;
        // the box name plus the offset prefix read back as "Exif\0\0"
        self.fh.seek(SeekFrom::Start(u64::from(offset) - 8))?;
        let marker = self.get(8)?;
        if &marker[..6] != b"Exif\x00\x00" {
            return Err(Error::InvalidExif("Exif box without Exif marker".to_string()));
        }
        let endian = self.get(1)?[0];
        Ok((offset, endian))
    }
}

/// Some HEIC files point the Exif offset at zero and leave a plain TIFF
/// header in the open; look for it at the current position.
pub fn find_heic_tiff(fh: &mut dyn ReadSeek) -> Result<(u32, u8)> {
    let mut data = [0u8; 4];
    let got = read_up_to(fh, &mut data)?;
    let is_tiff = got == 4
        && (&data == b"II*\x00" || &data == b"MM\x00*");
    if !is_tiff {
        return Err(Error::InvalidExif(format!(
            "Exif pointer to zeros, but found {data:?} instead of a TIFF header."
        )));
    }
    let offset = (fh.stream_position()? - 4) as u32;
    fh.seek(SeekFrom::Start(u64::from(offset)))?;
    debug!("Found TIFF header in Exif, offset = 0x{offset:X}");
    Ok((offset, data[0]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// A full box: size + kind + version/flags + payload.
    fn full_box(kind: &[u8; 4], version: u8, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(12 + payload.len() as u32).to_be_bytes());
        out.extend_from_slice(kind);
        out.extend_from_slice(&[version, 0, 0, 0]);
        out.extend_from_slice(payload);
        out
    }

    fn plain_box(kind: &[u8; 4], payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(8 + payload.len() as u32).to_be_bytes());
        out.extend_from_slice(kind);
        out.extend_from_slice(payload);
        out
    }

    /// Minimal HEIC carrying one Exif item at a known position. The iloc
    /// base-offset field width is configurable; when present, a nonsense
    /// base value is written since the locator must ignore it.
    fn heic_with_exif(base_offset_size: u8) -> (Vec<u8>, usize) {
        let mut ftyp_payload = b"heic".to_vec();
        ftyp_payload.extend_from_slice(&0u32.to_be_bytes());
        let ftyp = plain_box(b"ftyp", &ftyp_payload);

        // infe v2: item_id=1, protection=0, type=Exif, name
        let mut infe_payload = Vec::new();
        infe_payload.extend_from_slice(&1u16.to_be_bytes());
        infe_payload.extend_from_slice(&0u16.to_be_bytes());
        infe_payload.extend_from_slice(b"Exif");
        infe_payload.extend_from_slice(b"ExifDataBlock\x00");
        let infe = full_box(b"infe", 2, &infe_payload);

        let mut iinf_payload = Vec::new();
        iinf_payload.extend_from_slice(&1u16.to_be_bytes());
        iinf_payload.extend_from_slice(&infe);
        let iinf = full_box(b"iinf", 0, &iinf_payload);

        // exif item payload: 4-byte offset prefix, "Exif\0\0", TIFF header
        let mut item = Vec::new();
        item.extend_from_slice(&6u32.to_be_bytes());
        item.extend_from_slice(b"Exif\x00\x00");
        item.extend_from_slice(b"II*\x00\x08\x00\x00\x00\x00\x00\x00\x00");

        // iloc v0: offset/length sizes 4/4, one item with one extent
        // extent offset is patched once the mdat position is known
        let mut iloc_payload = vec![0x44, base_offset_size << 4];
        iloc_payload.extend_from_slice(&1u16.to_be_bytes()); // item count
        iloc_payload.extend_from_slice(&1u16.to_be_bytes()); // item id
        iloc_payload.extend_from_slice(&0u16.to_be_bytes()); // data ref
        if base_offset_size == 4 {
            iloc_payload.extend_from_slice(&999u32.to_be_bytes()); // ignored
        }
        iloc_payload.extend_from_slice(&1u16.to_be_bytes()); // extent count
        let extent_offset_at = iloc_payload.len();
        iloc_payload.extend_from_slice(&0u32.to_be_bytes()); // offset (patched)
        iloc_payload.extend_from_slice(&(item.len() as u32).to_be_bytes());
        let iloc = full_box(b"iloc", 0, &iloc_payload);

        let mut meta_payload = Vec::new();
        meta_payload.extend_from_slice(&iinf);
        meta_payload.extend_from_slice(&iloc);
        let meta = full_box(b"meta", 0, &meta_payload);

        let mut file = Vec::new();
        file.extend_from_slice(&ftyp);
        file.extend_from_slice(&meta);
        let item_pos = file.len() + 8;
        file.extend_from_slice(&plain_box(b"mdat", &item));

        // patch the extent offset now that the item position is known
        let iloc_in_file = ftyp.len() + 8 + 4 + iinf.len() + 12 + extent_offset_at;
        file[iloc_in_file..iloc_in_file + 4]
            .copy_from_slice(&(item_pos as u32).to_be_bytes());

        let tiff_at = item_pos + 4 + 6;
        (file, tiff_at)
    }

    #[test]
    fn heic_exif_located() {
        let (file, tiff_at) = heic_with_exif(0);
        let mut fh = Cursor::new(file);
        let mut finder = BmffExifFinder::new(&mut fh);
        let (offset, endian) = finder.find_heic_exif().unwrap();
        assert_eq!(offset as usize, tiff_at);
        assert_eq!(endian, b'I');
    }

    #[test]
    fn iloc_base_offset_field_is_skipped() {
        // extents are file positions as written; the base-offset field is
        // consumed but never folded in
        let (file, tiff_at) = heic_with_exif(4);
        let mut fh = Cursor::new(file);
        let mut finder = BmffExifFinder::new(&mut fh);
        let (offset, endian) = finder.find_heic_exif().unwrap();
        assert_eq!(offset as usize, tiff_at);
        assert_eq!(endian, b'I');
    }

    #[test]
    fn unknown_brand_falls_through() {
        let mut payload = b"zzzz".to_vec();
        payload.extend_from_slice(&0u32.to_be_bytes());
        let file = plain_box(b"ftyp", &payload);
        let mut fh = Cursor::new(file);
        let mut finder = BmffExifFinder::new(&mut fh);
        assert_eq!(finder.find_heic_exif().unwrap(), (0, b'?'));
    }

    #[test]
    fn jxl_exif_located() {
        let mut ftyp_payload = b"jxl ".to_vec();
        ftyp_payload.extend_from_slice(&0u32.to_be_bytes());
        let mut file = plain_box(b"ftyp", &ftyp_payload);

        let mut exif_payload = 0u32.to_be_bytes().to_vec();
        exif_payload.extend_from_slice(b"MM\x00*\x00\x00\x00\x08");
        let exif_box_at = file.len();
        file.extend_from_slice(&plain_box(b"Exif", &exif_payload));

        let mut fh = Cursor::new(file);
        let mut finder = BmffExifFinder::new(&mut fh);
        let (offset, endian) = finder.find_jxl_exif().unwrap();
        assert_eq!(offset as usize, exif_box_at + 8 + 4);
        assert_eq!(endian, b'M');
    }

    #[test]
    fn heic_tiff_fallback() {
        let mut fh = Cursor::new(b"II*\x00\x08\x00\x00\x00".to_vec());
        let (offset, endian) = find_heic_tiff(&mut fh).unwrap();
        assert_eq!((offset, endian), (0, b'I'));

        let mut fh = Cursor::new(b"garbage!".to_vec());
        assert!(find_heic_tiff(&mut fh).is_err());
    }

    #[test]
    fn truncated_box_is_invalid() {
        let file = b"\x00\x00\x00\x20ft".to_vec();
        let mut fh = Cursor::new(file);
        let mut finder = BmffExifFinder::new(&mut fh);
        assert!(finder.find_heic_exif().is_err());
    }
}
