//! Container demultiplexing: find the TIFF header inside each supported
//! still-image container.
//!
//! Dispatch is on magic bytes in the first 12 bytes of the stream:
//!
//! | Magic | Format |
//! |-------|--------|
//! | `II` / `MM` at 0 | bare TIFF |
//! | `ftypheic`/`ftypavif`/`ftypmif1` at 4 | HEIC / AVIF |
//! | `RIFF`....`WEBP` | WebP |
//! | `FF D8` | JPEG (APP segment scan) |
//! | `\x89PNG\r\n\x1a\n` | PNG (`eXIf` chunk) |
//! | 12-byte JXL signature box | JPEG XL |

use crate::bmff::{find_heic_tiff, BmffExifFinder};
use crate::jpeg::find_jpeg_exif;
use crate::{Error, Result};
use exifscan_core::ReadSeek;
use std::io::SeekFrom;
use tracing::debug;

/// Location of an EXIF payload: absolute offset of the TIFF header's first
/// byte, the endian byte found there, and whether a fake Exif header was
/// fabricated for a JFIF-style APP0 (Nikon pointer correction).
pub type ExifLocation = (u32, u8, bool);

const JXL_SIGNATURE: &[u8; 12] = b"\x00\x00\x00\x0CJXL \x0D\x0A\x87\x0A";

/// Sniff the container and return where its EXIF payload starts.
pub fn determine_type(fh: &mut dyn ReadSeek) -> Result<ExifLocation> {
    let mut head = [0u8; 12];
    let got = read_up_to(fh, &mut head)?;
    let data = &head[..got];

    if data.len() >= 2 && (&data[..2] == b"II" || &data[..2] == b"MM") {
        let (offset, endian) = find_tiff_exif(fh)?;
        return Ok((offset, endian, false));
    }
    if data.len() >= 12
        && matches!(&data[4..12], b"ftypheic" | b"ftypavif" | b"ftypmif1")
    {
        fh.seek(SeekFrom::Start(0))?;
        let mut finder = BmffExifFinder::new(fh);
        let (offset, endian) = finder.find_heic_exif()?;
        if offset == 0 {
            // pseudo-box header with a zero Exif-tiff-offset: the TIFF
            // header sits in the open
            let (offset, endian) = find_heic_tiff(fh)?;
            return Ok((offset, endian, false));
        }
        return Ok((offset, endian, false));
    }
    if data.len() >= 12 && &data[..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        let (offset, endian) = find_webp_exif(fh)?;
        return Ok((offset, endian, false));
    }
    if data.len() >= 2 && data[..2] == [0xFF, 0xD8] {
        return find_jpeg_exif(fh, data);
    }
    if data.len() >= 8 && &data[..8] == b"\x89PNG\r\n\x1a\n" {
        let (offset, endian) = find_png_exif(fh)?;
        return Ok((offset, endian, false));
    }
    if data == JXL_SIGNATURE {
        let (offset, endian) = find_jxl_exif(fh)?;
        return Ok((offset, endian, false));
    }
    Err(Error::ExifNotFound("File format not recognized.".to_string()))
}

fn find_tiff_exif(fh: &mut dyn ReadSeek) -> Result<(u32, u8)> {
    debug!("TIFF format recognized in data[0:2]");
    fh.seek(SeekFrom::Start(0))?;
    let mut endian = [0u8; 1];
    fh.read_exact(&mut endian)?;
    Ok((0, endian[0]))
}

/// WebP extended format: the `VP8X` chunk must flag EXIF presence, then
/// the `EXIF` chunk's payload carries `Exif\0\0` plus the TIFF header.
fn find_webp_exif(fh: &mut dyn ReadSeek) -> Result<(u32, u8)> {
    debug!("WebP format recognized in data[0:4], data[8:12]");
    let mut vp8x = [0u8; 5];
    if read_up_to(fh, &mut vp8x)? == 5 && &vp8x[..4] == b"VP8X" && vp8x[4] & 8 != 0 {
        fh.seek(SeekFrom::Current(13))?;
        loop {
            // chunk FourCC and chunk size
            let mut chunk = [0u8; 8];
            if read_up_to(fh, &mut chunk)? != 8 {
                return Err(Error::InvalidExif("Invalid webp file chunk header.".to_string()));
            }
            if &chunk[..4] == b"EXIF" {
                fh.seek(SeekFrom::Current(6))?;
                let offset = fh.stream_position()? as u32;
                let mut endian = [0u8; 1];
                fh.read_exact(&mut endian)?;
                return Ok((offset, endian[0]));
            }
            let size = u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);
            fh.seek(SeekFrom::Current(i64::from(size)))?;
        }
    }
    Err(Error::ExifNotFound("Webp file does not have exif data.".to_string()))
}

/// PNG: chunk walk until the first `eXIf` chunk.
fn find_png_exif(fh: &mut dyn ReadSeek) -> Result<(u32, u8)> {
    debug!("PNG format recognized in data[0:8]");
    fh.seek(SeekFrom::Start(8))?;

    loop {
        let mut header = [0u8; 8];
        if read_up_to(fh, &mut header)? != 8 {
            break;
        }
        let chunk = &header[4..8];
        debug!("PNG found chunk {}", String::from_utf8_lossy(chunk));

        if chunk == b"IEND" {
            break;
        }
        if chunk == b"eXIf" {
            let offset = fh.stream_position()? as u32;
            let mut endian = [0u8; 1];
            fh.read_exact(&mut endian)?;
            return Ok((offset, endian[0]));
        }
        let size = u32::from_be_bytes([header[0], header[1], header[2], header[3]]);
        // skip payload and CRC
        fh.seek(SeekFrom::Current(i64::from(size) + 4))?;
    }
    Err(Error::ExifNotFound("PNG file does not have exif data.".to_string()))
}

fn find_jxl_exif(fh: &mut dyn ReadSeek) -> Result<(u32, u8)> {
    debug!("JPEG XL format recognized in data[0:12]");
    fh.seek(SeekFrom::Start(0))?;
    let mut finder = BmffExifFinder::new(fh);
    let (offset, endian) = finder.find_jxl_exif()?;
    if offset > 0 {
        return Ok((offset, endian));
    }
    Err(Error::ExifNotFound("JPEG XL file does not have exif data.".to_string()))
}

/// Fill as much of `buf` as the stream allows; EOF is not an error.
pub(crate) fn read_up_to(fh: &mut dyn ReadSeek, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match fh.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn unrecognized_container() {
        let mut data = Cursor::new(b"not an image at all".to_vec());
        assert!(matches!(
            determine_type(&mut data),
            Err(Error::ExifNotFound(_))
        ));
    }

    #[test]
    fn bare_tiff() {
        let mut data = Cursor::new(b"II*\x00\x08\x00\x00\x00\x00\x00\x00\x00".to_vec());
        let (offset, endian, fake) = determine_type(&mut data).unwrap();
        assert_eq!((offset, endian, fake), (0, b'I', false));

        let mut data = Cursor::new(b"MM\x00*\x00\x00\x00\x08\x00\x00\x00\x00".to_vec());
        let (offset, endian, _) = determine_type(&mut data).unwrap();
        assert_eq!((offset, endian), (0, b'M'));
    }

    #[test]
    fn webp_without_vp8x_flag() {
        let mut file = b"RIFF\x20\x00\x00\x00WEBP".to_vec();
        file.extend_from_slice(b"VP8X\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00");
        let mut data = Cursor::new(file);
        assert!(matches!(
            determine_type(&mut data),
            Err(Error::ExifNotFound(_))
        ));
    }

    #[test]
    fn webp_with_exif_chunk() {
        let mut file = b"RIFF\x00\x01\x00\x00WEBP".to_vec();
        // VP8X with the EXIF flag (bit 3), 13 bytes skipped after the flags
        file.extend_from_slice(b"VP8X");
        file.push(0x08);
        file.extend_from_slice(&[0u8; 13]);
        // unrelated chunk first
        file.extend_from_slice(b"ICCP\x02\x00\x00\x00\xAA\xBB");
        // EXIF chunk: "Exif\0\0" then the TIFF header
        file.extend_from_slice(b"EXIF\x10\x00\x00\x00");
        let tiff_at = file.len() + 6;
        file.extend_from_slice(b"Exif\x00\x00II*\x00\x08\x00\x00\x00\x00\x00");
        let mut data = Cursor::new(file);
        let (offset, endian, _) = determine_type(&mut data).unwrap();
        assert_eq!(offset as usize, tiff_at);
        assert_eq!(endian, b'I');
    }

    #[test]
    fn png_exif_chunk() {
        let mut file = b"\x89PNG\r\n\x1a\n".to_vec();
        // IHDR (13-byte payload + CRC)
        file.extend_from_slice(&13u32.to_be_bytes());
        file.extend_from_slice(b"IHDR");
        file.extend_from_slice(&[0u8; 13 + 4]);
        // eXIf chunk: payload is the TIFF header
        file.extend_from_slice(&8u32.to_be_bytes());
        file.extend_from_slice(b"eXIf");
        let tiff_at = file.len();
        file.extend_from_slice(b"MM\x00*\x00\x00\x00\x08");
        let mut data = Cursor::new(file);
        let (offset, endian, _) = determine_type(&mut data).unwrap();
        assert_eq!(offset as usize, tiff_at);
        assert_eq!(endian, b'M');
    }

    #[test]
    fn png_without_exif() {
        let mut file = b"\x89PNG\r\n\x1a\n".to_vec();
        file.extend_from_slice(&0u32.to_be_bytes());
        file.extend_from_slice(b"IEND");
        file.extend_from_slice(&[0u8; 4]);
        let mut data = Cursor::new(file);
        assert!(matches!(
            determine_type(&mut data),
            Err(Error::ExifNotFound(_))
        ));
    }
}
