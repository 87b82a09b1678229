//! Endian-aware positioned reads over a seekable stream.
//!
//! Every offset is relative to `base_offset`, the position of the TIFF
//! header inside the container. The MakerNote dispatcher temporarily
//! rebases this (and the endian) for vendors that use local offsets, so
//! both fields are public and treated as a save/restore pair.
//!
//! Interior corruption is not fatal: a read that comes up short logs a
//! warning and yields zeroes, letting the walker skip past the damage.

use crate::{Endian, Error, Ratio, Result};
use std::io::{Read, Seek, SeekFrom};
use tracing::warn;

/// Combined trait for Read + Seek (needed for trait objects).
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// Positioned reader with an endian and base-offset context.
pub struct EndianReader<'a> {
    stream: &'a mut dyn ReadSeek,
    pub endian: Endian,
    pub base_offset: u32,
    /// A synthetic Exif header was fabricated for a JFIF-style APP0; Nikon
    /// type-3 relative pointers need an extra +18 in that case.
    pub fake_exif: bool,
}

impl<'a> EndianReader<'a> {
    pub fn new(
        stream: &'a mut dyn ReadSeek,
        endian: Endian,
        base_offset: u32,
        fake_exif: bool,
    ) -> Self {
        Self {
            stream,
            endian,
            base_offset,
            fake_exif,
        }
    }

    /// Read up to `len` bytes at `offset`; a truncated stream yields a
    /// shorter buffer.
    pub fn read_up_to(&mut self, offset: u32, len: usize) -> Vec<u8> {
        let pos = u64::from(self.base_offset) + u64::from(offset);
        let mut buf = vec![0u8; len];
        let got = match self.stream.seek(SeekFrom::Start(pos)) {
            Ok(_) => read_fully(self.stream, &mut buf),
            Err(_) => 0,
        };
        buf.truncate(got);
        buf
    }

    /// Read exactly `len` bytes at `offset`, or `None` when the stream
    /// ends first.
    pub fn read_exact_at(&mut self, offset: u32, len: usize) -> Option<Vec<u8>> {
        let buf = self.read_up_to(offset, len);
        if buf.len() == len {
            Some(buf)
        } else {
            None
        }
    }

    /// Decode an integer of `length` bytes in the current endian.
    ///
    /// `length` must be 1, 2, 4 or 8; anything else is a caller bug and
    /// fails with `InvalidFieldLength`. Short reads log and return 0.
    pub fn read_uint(&mut self, offset: u32, length: usize, signed: bool) -> Result<i64> {
        if !matches!(length, 1 | 2 | 4 | 8) {
            return Err(Error::InvalidFieldLength(length));
        }
        let buf = self.read_up_to(offset, length);
        if buf.is_empty() {
            return Ok(0);
        }
        if buf.len() != length {
            warn!("Unexpected slice length: {}", buf.len());
            return Ok(0);
        }
        let raw = self.endian.read_uint(&buf);
        Ok(extend_sign(raw, length, signed))
    }

    /// Like [`read_uint`](Self::read_uint) but `None` on a short read, so
    /// the walker can tell a truncated IFD from a genuine zero.
    pub fn try_uint(&mut self, offset: u32, length: usize) -> Option<i64> {
        let buf = self.read_exact_at(offset, length)?;
        Some(self.endian.read_uint(&buf) as i64)
    }

    /// Decode an IEEE float of the given width. `None` on a short read.
    pub fn read_float(&mut self, offset: u32, size: u32) -> Option<f64> {
        let buf = self.read_exact_at(offset, size as usize)?;
        let bits = self.endian.read_uint(&buf);
        Some(match size {
            4 => f64::from(f32::from_bits(bits as u32)),
            _ => f64::from_bits(bits),
        })
    }

    /// Decode a rational: two 4-byte integers.
    pub fn read_ratio(&mut self, offset: u32, signed: bool) -> Result<Ratio> {
        let num = self.read_uint(offset, 4, signed)?;
        let den = self.read_uint(offset.saturating_add(4), 4, signed)?;
        Ok(Ratio::new(num, den))
    }

    /// Encode the low `length` bytes of `value` in the current endian.
    pub fn n2b(&self, value: u64, length: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(length);
        self.endian.put_uint(&mut out, value, length);
        out
    }
}

/// Read until the buffer is full or the stream ends; returns bytes read.
fn read_fully(stream: &mut dyn ReadSeek, buf: &mut [u8]) -> usize {
    let mut filled = 0;
    while filled < buf.len() {
        match stream.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
    }
    filled
}

fn extend_sign(raw: u64, length: usize, signed: bool) -> i64 {
    if signed && length < 8 {
        let shift = 64 - (length as u32) * 8;
        ((raw << shift) as i64) >> shift
    } else {
        raw as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader_over(data: &[u8], endian: Endian) -> (Cursor<Vec<u8>>, Endian) {
        (Cursor::new(data.to_vec()), endian)
    }

    #[test]
    fn reads_both_endians() {
        let (mut le, endian) = reader_over(&[0x34, 0x12], Endian::Intel);
        let mut r = EndianReader::new(&mut le, endian, 0, false);
        assert_eq!(r.read_uint(0, 2, false).unwrap(), 0x1234);

        let (mut be, endian) = reader_over(&[0x12, 0x34], Endian::Motorola);
        let mut r = EndianReader::new(&mut be, endian, 0, false);
        assert_eq!(r.read_uint(0, 2, false).unwrap(), 0x1234);
    }

    #[test]
    fn sign_extension() {
        let (mut c, endian) = reader_over(&[0xFF], Endian::Intel);
        let mut r = EndianReader::new(&mut c, endian, 0, false);
        assert_eq!(r.read_uint(0, 1, true).unwrap(), -1);
        assert_eq!(r.read_uint(0, 1, false).unwrap(), 255);
    }

    #[test]
    fn base_offset_applies() {
        let (mut c, endian) = reader_over(&[0, 0, 0, 0x2A], Endian::Intel);
        let mut r = EndianReader::new(&mut c, endian, 3, false);
        assert_eq!(r.read_uint(0, 1, false).unwrap(), 0x2A);
    }

    #[test]
    fn short_read_returns_zero() {
        let (mut c, endian) = reader_over(&[0x01], Endian::Intel);
        let mut r = EndianReader::new(&mut c, endian, 0, false);
        assert_eq!(r.read_uint(0, 4, false).unwrap(), 0);
        assert_eq!(r.try_uint(0, 4), None);
    }

    #[test]
    fn rejects_silly_lengths() {
        let (mut c, endian) = reader_over(&[0; 8], Endian::Intel);
        let mut r = EndianReader::new(&mut c, endian, 0, false);
        assert!(matches!(
            r.read_uint(0, 3, false),
            Err(Error::InvalidFieldLength(3))
        ));
    }

    #[test]
    fn float_decoding() {
        let bytes = 1.5f32.to_bits().to_le_bytes();
        let (mut c, endian) = reader_over(&bytes, Endian::Intel);
        let mut r = EndianReader::new(&mut c, endian, 0, false);
        assert_eq!(r.read_float(0, 4), Some(1.5));

        let bytes = 2.25f64.to_bits().to_be_bytes();
        let (mut c, endian) = reader_over(&bytes, Endian::Motorola);
        let mut r = EndianReader::new(&mut c, endian, 0, false);
        assert_eq!(r.read_float(0, 8), Some(2.25));
    }

    #[test]
    fn ratio_decoding() {
        let mut data = Vec::new();
        data.extend_from_slice(&10u32.to_le_bytes());
        data.extend_from_slice(&20u32.to_le_bytes());
        let (mut c, endian) = reader_over(&data, Endian::Intel);
        let mut r = EndianReader::new(&mut c, endian, 0, false);
        assert_eq!(r.read_ratio(0, false).unwrap(), Ratio::new(1, 2));
    }
}
