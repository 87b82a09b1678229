//! Conversion of decoded tags to built-in scalar types.
//!
//! Downstream consumers (JSON output, programmatic use) rarely want the
//! `IfdTag` record; this flattens each tag to a scalar or list, preferring
//! the printable form when a dictionary or formatter produced it.

use exifscan_core::{FieldType, IfdTag, TagEntry, TagMap, TagValues};
use serde::Serialize;
use std::collections::BTreeMap;

/// A tag value reduced to built-in types.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SerializedValue {
    Null,
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    IntList(Vec<i64>),
    FloatList(Vec<f64>),
}

/// Serialized form of the whole result map.
pub type SerializedMap = BTreeMap<String, SerializedValue>;

/// Convert every tag to built-in types.
///
/// Thumbnails pass through as bytes; single-element lists unwrap to the
/// bare item; empty values become null.
pub fn convert_types(tags: &TagMap) -> SerializedMap {
    let mut output = SerializedMap::new();
    for (tag_name, entry) in tags {
        let value = match entry {
            TagEntry::Bytes(raw) => SerializedValue::Bytes(raw.clone()),
            TagEntry::Tag(tag) => {
                if tag.prefer_printable {
                    convert_proprietary(tag)
                } else {
                    match tag.field_type {
                        FieldType::Proprietary => convert_proprietary(tag),
                        FieldType::Ascii => convert_ascii(tag, tag_name),
                        FieldType::Undefined => convert_undefined(tag),
                        FieldType::Ratio | FieldType::SignedRatio => convert_ratio(tag),
                        FieldType::Byte | FieldType::Ifd => convert_bytes(tag, tag_name),
                        _ => convert_numeric(tag),
                    }
                }
            }
        };
        output.insert(tag_name.clone(), value);
    }
    output
}

/// Printable-first conversion for proprietary and dictionary-decoded tags.
fn convert_proprietary(tag: &IfdTag) -> SerializedValue {
    if tag.printable.is_empty() || tag.printable == "[]" {
        SerializedValue::Null
    } else {
        SerializedValue::Str(tag.printable.clone())
    }
}

/// ASCII, with date normalization: EXIF timestamps use `:` in the date
/// part where everything downstream expects `-`.
fn convert_ascii(tag: &IfdTag, tag_name: &str) -> SerializedValue {
    let text = match &tag.values {
        TagValues::Str(s) => s.clone(),
        // rare non-Unicode ASCII fields keep their bytes
        TagValues::Bytes(raw) => {
            let trimmed = trim_bytes(raw);
            return if trimmed.is_empty() {
                SerializedValue::Null
            } else {
                match std::str::from_utf8(trimmed) {
                    Ok(s) => SerializedValue::Str(s.to_string()),
                    Err(_) => SerializedValue::Bytes(trimmed.to_vec()),
                }
            };
        }
        other => other.to_string(),
    };

    let colons = text.matches(':').count();
    let text = if tag_name.contains("DateTime") && text.len() == 19 && colons == 4 {
        text.replacen(':', "-", 2)
    } else if tag_name == "GPS GPSDate" && text.len() == 10 && colons == 2 {
        text.replace(':', "-")
    } else {
        text
    };

    let text = text.trim();
    if text.is_empty() {
        SerializedValue::Null
    } else {
        SerializedValue::Str(text.to_string())
    }
}

/// Undefined payloads: ints masquerading as bytes, often padded with
/// spaces and NULs.
fn convert_undefined(tag: &IfdTag) -> SerializedValue {
    let Some(ints) = tag.values.as_ints() else {
        return convert_proprietary(tag);
    };
    if ints.len() == 1 {
        return SerializedValue::Int(ints[0]);
    }
    let raw: Vec<u8> = ints.iter().map(|&v| v as u8).collect();
    let trimmed = trim_bytes(&raw);
    if trimmed.is_empty() {
        return SerializedValue::Null;
    }
    match std::str::from_utf8(trimmed) {
        Ok(s) => SerializedValue::Str(s.to_string()),
        Err(_) => SerializedValue::Bytes(trimmed.to_vec()),
    }
}

fn convert_numeric(tag: &IfdTag) -> SerializedValue {
    match &tag.values {
        TagValues::Int(v) => match v.as_slice() {
            [] => SerializedValue::Null,
            [single] => SerializedValue::Int(*single),
            many => SerializedValue::IntList(many.to_vec()),
        },
        TagValues::Float(v) => match v.as_slice() {
            [] => SerializedValue::Null,
            [single] => SerializedValue::Float(*single),
            many => SerializedValue::FloatList(many.to_vec()),
        },
        _ => convert_proprietary(tag),
    }
}

/// Ratios project to an integer when whole (or when the denominator is a
/// zero placeholder), a float otherwise; GPS triplets stay lists.
fn convert_ratio(tag: &IfdTag) -> SerializedValue {
    let Some(ratios) = tag.values.as_ratios() else {
        return convert_proprietary(tag);
    };
    if ratios.is_empty() {
        return SerializedValue::Null;
    }
    let decimals: Vec<f64> = ratios.iter().map(|r| r.decimal()).collect();
    let whole = decimals.iter().all(|d| d.fract() == 0.0);
    match (decimals.as_slice(), whole) {
        ([single], true) => SerializedValue::Int(*single as i64),
        ([single], false) => SerializedValue::Float(*single),
        (many, true) => SerializedValue::IntList(many.iter().map(|&d| d as i64).collect()),
        (many, false) => SerializedValue::FloatList(many.to_vec()),
    }
}

/// Byte fields: single values are integers (GPSAltitudeRef), the version
/// id gets its dotted form, the rest behave like undefined payloads.
fn convert_bytes(tag: &IfdTag, tag_name: &str) -> SerializedValue {
    let Some(ints) = tag.values.as_ints() else {
        // XMP packets land here as raw bytes with field type Byte
        if let TagValues::Bytes(raw) = &tag.values {
            let trimmed = trim_bytes(raw);
            return match std::str::from_utf8(trimmed) {
                Ok(s) if !s.is_empty() => SerializedValue::Str(s.to_string()),
                Ok(_) => SerializedValue::Null,
                Err(_) => SerializedValue::Bytes(trimmed.to_vec()),
            };
        }
        return convert_proprietary(tag);
    };
    if ints.len() == 1 {
        return SerializedValue::Int(ints[0]);
    }
    if tag_name == "GPS GPSVersionID" {
        let dotted: Vec<String> = ints.iter().map(|v| v.to_string()).collect();
        return SerializedValue::Str(dotted.join("."));
    }
    let raw: Vec<u8> = ints.iter().map(|&v| v as u8).collect();
    let trimmed = trim_bytes(&raw);
    if trimmed.is_empty() {
        return SerializedValue::Null;
    }
    match std::str::from_utf8(trimmed) {
        Ok(s) => SerializedValue::Str(s.to_string()),
        Err(_) => SerializedValue::Bytes(trimmed.to_vec()),
    }
}

/// Strip surrounding spaces and NULs.
fn trim_bytes(raw: &[u8]) -> &[u8] {
    let start = raw.iter().position(|&b| b != b' ' && b != 0);
    let end = raw.iter().rposition(|&b| b != b' ' && b != 0);
    match (start, end) {
        (Some(s), Some(e)) => &raw[s..=e],
        _ => &[],
    }
}
