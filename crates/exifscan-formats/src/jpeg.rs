//! JPEG APP-segment scanner.
//!
//! Exif lives in an APP1 segment, but APP0/APP2/APP12/APP14 (JFIF, ICC,
//! Ducky, Adobe) may come first. The scanner skips JFIF-style APP0
//! variants while fabricating a fake Exif base, then walks segments by
//! marker and big-endian length until APP1 `Exif` (or image data) shows
//! up.

use crate::locate::{read_up_to, ExifLocation};
use crate::{Error, Result};
use exifscan_core::ReadSeek;
use std::io::SeekFrom;
use tracing::debug;

/// Segment length plus the 2-byte marker: how far to the next segment.
fn increment_base(data: &[u8], base: usize) -> Option<usize> {
    let hi = *data.get(base + 2)? as usize;
    let lo = *data.get(base + 3)? as usize;
    Some(hi * 256 + lo + 2)
}

/// Skip JFIF/JFXX/OLYM/Phot APP0 variants, fabricating an Exif-style base.
///
/// Nikon type-3 relative pointers need an extra +18 when this fired, so
/// the fake flag travels all the way to the IFD walker.
fn initial_base(fh: &mut dyn ReadSeek, first: &[u8]) -> Result<(usize, bool)> {
    let mut base = 2usize;
    let mut fake_exif = false;
    let mut data = [0u8; 12];
    data[..first.len().min(12)].copy_from_slice(&first[..first.len().min(12)]);

    while data[2] == 0xFF && matches!(&data[6..10], b"JFIF" | b"JFXX" | b"OLYM" | b"Phot") {
        let length = data[4] as usize * 256 + data[5] as usize;
        debug!(" Length offset is {}", length);
        fh.seek(SeekFrom::Current(length as i64 - 8))?;
        // fake an EXIF beginning of file
        let mut next = [0u8; 12];
        next[0] = 0xFF;
        next[1] = 0x00;
        if read_up_to(fh, &mut next[2..])? < 10 {
            break;
        }
        data = next;
        fake_exif = true;
        if base > 2 {
            base = base + length + 4 - 2;
        } else {
            base = length + 4;
        }
        debug!(" Set segment base to 0x{:X}", base);
    }
    Ok((base, fake_exif))
}

/// Walk segments until the APP1 Exif segment (or the image data).
fn scan_segments(mut base: usize, data: &[u8]) -> Result<usize> {
    loop {
        debug!(" Segment base 0x{:X}", base);
        let marker = (data.get(base).copied(), data.get(base + 1).copied());
        match marker {
            (Some(0xFF), Some(0xE1)) => {
                debug!("  APP1 at base 0x{:X}", base);
                if data.get(base + 4..base + 8).is_some_and(|code| code == b"Exif") {
                    // pre-segment header, for compatibility with later code
                    base -= 2;
                    return Ok(base);
                }
            }
            (Some(0xFF), Some(0xE0)) => debug!("  APP0 at base 0x{:X}", base),
            (Some(0xFF), Some(0xE2)) => debug!("  APP2 at base 0x{:X}", base),
            (Some(0xFF), Some(0xEE)) => {
                debug!("  APP14 Adobe segment at base 0x{:X}", base);
                // EXIF-like data, but no parser for it here
            }
            (Some(0xFF), Some(0xDB)) => {
                debug!("  JPEG image data at base 0x{:X}, no more segments expected", base);
                return Ok(base);
            }
            (Some(0xFF), Some(0xD8)) => debug!("  FFD8 segment at base 0x{:X}", base),
            (Some(0xFF), Some(0xEC)) => {
                debug!("  APP12 XMP (Ducky) or Pictureinfo segment at base 0x{:X}", base);
            }
            _ => {}
        }
        match increment_base(data, base) {
            Some(increment) => {
                debug!("  Increment base by {}", increment);
                base += increment;
            }
            None => {
                return Err(Error::InvalidExif(
                    "Unexpected/unhandled segment type or file content.".to_string(),
                ));
            }
        }
    }
}

/// Locate the TIFF header behind the APP1 Exif segment of a JPEG stream.
pub fn find_jpeg_exif(fh: &mut dyn ReadSeek, first: &[u8]) -> Result<ExifLocation> {
    debug!("JPEG format recognized data[0:2]=0xFFD8");

    let (base, fake_exif) = initial_base(fh, first)?;

    // APP2 (or other) data may come before APP1: re-read a window big
    // enough to scan past it. 64K is the segment maximum, 4000 covers
    // every observed producer.
    fh.seek(SeekFrom::Start(0))?;
    let mut data = vec![0u8; base + 4000];
    let got = read_up_to(fh, &mut data)?;
    data.truncate(got);

    let base = scan_segments(base, &data)?;

    fh.seek(SeekFrom::Start(base as u64 + 12))?;
    let marker_ff = data.get(base + 2) == Some(&0xFF);
    let code4 = data.get(base + 6..base + 10);
    let code5 = data.get(base + 6..base + 11);
    let is_exif = code4.is_some_and(|code| code == b"Exif");
    let is_exif_like =
        code5.is_some_and(|code| code == b"Ducky" || code == b"Adobe");
    if marker_ff && is_exif {
        // detected EXIF header
    } else if marker_ff && is_exif_like {
        // EXIF-like header; locate it and let the walker decide
        debug!("EXIF-like header: {:?}", code5);
    } else {
        return Err(Error::InvalidExif(format!(
            "No EXIF header found, got {:?} and {:?}",
            data.get(base + 2),
            code5
        )));
    }
    let offset = fh.stream_position()? as u32;
    let mut endian = [0u8; 1];
    fh.read_exact(&mut endian)?;
    Ok((offset, endian[0], fake_exif))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn app1_exif_jpeg() -> Vec<u8> {
        let mut file = vec![0xFF, 0xD8];
        // APP2 comes first
        file.extend_from_slice(&[0xFF, 0xE2, 0x00, 0x06]);
        file.extend_from_slice(b"ICC!");
        // APP1 Exif
        file.extend_from_slice(&[0xFF, 0xE1, 0x00, 0x14]);
        file.extend_from_slice(b"Exif\x00\x00");
        file.extend_from_slice(b"II*\x00\x08\x00\x00\x00\x00\x00\x00\x00");
        file
    }

    #[test]
    fn finds_app1_after_app2() {
        let mut file = app1_exif_jpeg();
        file.extend_from_slice(&[0xFF, 0xDB, 0x00, 0x02]);
        let mut fh = Cursor::new(file.clone());
        let mut first = [0u8; 12];
        first.copy_from_slice(&file[..12]);
        fh.set_position(12);

        let (offset, endian, fake) = find_jpeg_exif(&mut fh, &first).unwrap();
        // TIFF header right after "Exif\0\0" in the APP1 payload
        assert_eq!(offset, 2 + 8 + 4 + 6);
        assert_eq!(endian, b'I');
        assert!(!fake);
    }

    #[test]
    fn quantization_table_means_no_exif() {
        // SOI then straight to DQT: nothing to find
        let mut file = vec![0xFF, 0xD8];
        file.extend_from_slice(&[0xFF, 0xDB, 0x00, 0x43]);
        file.extend_from_slice(&[0u8; 0x43]);
        let mut fh = Cursor::new(file.clone());
        let mut first = [0u8; 12];
        first.copy_from_slice(&file[..12]);
        fh.set_position(12);

        assert!(matches!(
            find_jpeg_exif(&mut fh, &first),
            Err(Error::InvalidExif(_))
        ));
    }

    #[test]
    fn truncated_segment_chain() {
        let file = vec![0xFF, 0xD8, 0xFF];
        let mut fh = Cursor::new(file.clone());
        let mut first = [0u8; 12];
        first[..3].copy_from_slice(&file);
        fh.set_position(3);

        assert!(matches!(
            find_jpeg_exif(&mut fh, &first),
            Err(Error::InvalidExif(_))
        ));
    }
}
