//! Decoded tag values and the `IfdTag` record stored in the result map.

use crate::{FieldType, Ratio};
use std::collections::BTreeMap;

/// Values decoded from one IFD entry.
///
/// Every integer field type lands in `Int`; ASCII payloads that fail UTF-8
/// validation keep their raw bytes in `Bytes`.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum TagValues {
    Str(String),
    Bytes(Vec<u8>),
    Int(Vec<i64>),
    Ratio(Vec<Ratio>),
    Float(Vec<f64>),
}

impl TagValues {
    /// Number of decoded elements (characters/bytes for text payloads).
    pub fn len(&self) -> usize {
        match self {
            TagValues::Str(s) => s.len(),
            TagValues::Bytes(b) => b.len(),
            TagValues::Int(v) => v.len(),
            TagValues::Ratio(v) => v.len(),
            TagValues::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First element as an integer, for offset-valued tags.
    pub fn first_int(&self) -> Option<i64> {
        match self {
            TagValues::Int(v) => v.first().copied(),
            TagValues::Bytes(b) => b.first().map(|&x| i64::from(x)),
            _ => None,
        }
    }

    pub fn as_ints(&self) -> Option<&[i64]> {
        match self {
            TagValues::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ratios(&self) -> Option<&[Ratio]> {
        match self {
            TagValues::Ratio(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValues::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Render each list element; `None` for text payloads.
    pub fn item_strings(&self) -> Option<Vec<String>> {
        match self {
            TagValues::Str(_) => None,
            TagValues::Bytes(b) => Some(b.iter().map(|v| v.to_string()).collect()),
            TagValues::Int(v) => Some(v.iter().map(|v| v.to_string()).collect()),
            TagValues::Ratio(v) => Some(v.iter().map(|v| v.to_string()).collect()),
            TagValues::Float(v) => Some(v.iter().map(|v| v.to_string()).collect()),
        }
    }
}

impl std::fmt::Display for TagValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagValues::Str(s) => write!(f, "{s}"),
            _ => {
                let items = self.item_strings().unwrap_or_default();
                write!(f, "[{}]", items.join(", "))
            }
        }
    }
}

/// A decoded IFD entry as stored in the result map.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct IfdTag {
    /// Human-readable form: enum lookup, formatter output, or the
    /// stringified values.
    pub printable: String,
    /// Numeric tag id.
    pub tag: u16,
    pub field_type: FieldType,
    pub values: TagValues,
    /// Byte-exact location of the payload in the underlying stream,
    /// relative to the TIFF base. For inline payloads this is the entry's
    /// value slot.
    pub field_offset: u32,
    /// Payload size in bytes (`count * type size`).
    pub field_length: u32,
    /// Serializer hint: a dictionary or formatter produced `printable`.
    pub prefer_printable: bool,
}

impl std::fmt::Display for IfdTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.printable)
    }
}

/// One value of the result map: a decoded tag, or raw bytes under the
/// reserved `JPEGThumbnail` / `TIFFThumbnail` keys.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum TagEntry {
    Tag(IfdTag),
    Bytes(Vec<u8>),
}

impl TagEntry {
    pub fn as_tag(&self) -> Option<&IfdTag> {
        match self {
            TagEntry::Tag(t) => Some(t),
            TagEntry::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            TagEntry::Bytes(b) => Some(b),
            TagEntry::Tag(_) => None,
        }
    }
}

/// Result map of `process_file`: `"<IFD_NAME> <TAG_NAME>"` to entry.
/// Keys are unique; ordering carries no meaning.
pub type TagMap = BTreeMap<String, TagEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_display() {
        assert_eq!(TagValues::Int(vec![1, 2, 3]).to_string(), "[1, 2, 3]");
        assert_eq!(TagValues::Str("Canon".into()).to_string(), "Canon");
        assert_eq!(
            TagValues::Ratio(vec![Ratio::new(1, 3), Ratio::new(4, 2)]).to_string(),
            "[1/3, 2]"
        );
        assert_eq!(TagValues::Int(vec![]).to_string(), "[]");
    }

    #[test]
    fn first_int_across_variants() {
        assert_eq!(TagValues::Int(vec![8, 9]).first_int(), Some(8));
        assert_eq!(TagValues::Bytes(vec![0x20]).first_int(), Some(0x20));
        assert_eq!(TagValues::Str("x".into()).first_int(), None);
        assert_eq!(TagValues::Int(vec![]).first_int(), None);
    }
}
