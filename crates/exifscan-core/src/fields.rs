//! TIFF/EXIF field type codes.
//!
//! The 13 scalar codes of TIFF 6.0 plus code 0, a synthetic "proprietary"
//! type used for fabricated vendor entries (Canon indexed sub-tags).

use crate::{Error, Result};

/// Field type of an IFD entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum FieldType {
    /// Synthetic type for fabricated MakerNote entries.
    Proprietary = 0,
    /// Unsigned 8-bit integer.
    Byte = 1,
    /// ASCII string, null-terminated.
    Ascii = 2,
    /// Unsigned 16-bit integer.
    Short = 3,
    /// Unsigned 32-bit integer.
    Long = 4,
    /// Unsigned rational: two LONG values (numerator/denominator).
    Ratio = 5,
    /// Signed 8-bit integer.
    SignedByte = 6,
    /// Opaque byte sequence.
    Undefined = 7,
    /// Signed 16-bit integer.
    SignedShort = 8,
    /// Signed 32-bit integer.
    SignedLong = 9,
    /// Signed rational: two SLONG values.
    SignedRatio = 10,
    /// 32-bit IEEE float.
    Float32 = 11,
    /// 64-bit IEEE double.
    Float64 = 12,
    /// IFD pointer (same layout as LONG).
    Ifd = 13,
}

impl FieldType {
    /// Parse a type code read from an entry.
    ///
    /// Code 0 is never stored in files; it only exists for entries this
    /// library fabricates, so it is rejected here like any unknown code.
    pub fn from_entry(value: u16, tag: u16) -> Result<Self> {
        match value {
            1 => Ok(FieldType::Byte),
            2 => Ok(FieldType::Ascii),
            3 => Ok(FieldType::Short),
            4 => Ok(FieldType::Long),
            5 => Ok(FieldType::Ratio),
            6 => Ok(FieldType::SignedByte),
            7 => Ok(FieldType::Undefined),
            8 => Ok(FieldType::SignedShort),
            9 => Ok(FieldType::SignedLong),
            10 => Ok(FieldType::SignedRatio),
            11 => Ok(FieldType::Float32),
            12 => Ok(FieldType::Float64),
            13 => Ok(FieldType::Ifd),
            _ => Err(Error::UnknownFieldType {
                field_type: value,
                tag,
            }),
        }
    }

    /// Size of one element in bytes. Zero for the synthetic type.
    #[inline]
    pub const fn size(self) -> u32 {
        match self {
            FieldType::Proprietary => 0,
            FieldType::Byte
            | FieldType::Ascii
            | FieldType::SignedByte
            | FieldType::Undefined => 1,
            FieldType::Short | FieldType::SignedShort => 2,
            FieldType::Long | FieldType::SignedLong | FieldType::Float32 | FieldType::Ifd => 4,
            FieldType::Ratio | FieldType::SignedRatio | FieldType::Float64 => 8,
        }
    }

    /// Full type name as shown to users.
    pub const fn label(self) -> &'static str {
        match self {
            FieldType::Proprietary => "Proprietary",
            FieldType::Byte => "Byte",
            FieldType::Ascii => "ASCII",
            FieldType::Short => "Short",
            FieldType::Long => "Long",
            FieldType::Ratio => "Ratio",
            FieldType::SignedByte => "Signed Byte",
            FieldType::Undefined => "Undefined",
            FieldType::SignedShort => "Signed Short",
            FieldType::SignedLong => "Signed Long",
            FieldType::SignedRatio => "Signed Ratio",
            FieldType::Float32 => "Single-Precision Floating Point (32-bit)",
            FieldType::Float64 => "Double-Precision Floating Point (64-bit)",
            FieldType::Ifd => "IFD",
        }
    }

    /// Types whose values carry a sign.
    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            FieldType::SignedByte
                | FieldType::SignedShort
                | FieldType::SignedLong
                | FieldType::SignedRatio
        )
    }

    #[inline]
    pub const fn is_ratio(self) -> bool {
        matches!(self, FieldType::Ratio | FieldType::SignedRatio)
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, FieldType::Float32 | FieldType::Float64)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
