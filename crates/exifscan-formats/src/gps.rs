//! GPS coordinate helper.

use exifscan_core::{Ratio, TagEntry, TagMap};

/// Decimal (latitude, longitude) from the GPS degree/minute/second
/// triplets, signed by the hemisphere reference tags. `None` when any of
/// the four tags is missing.
pub fn gps_coords(tags: &TagMap) -> Option<(f64, f64)> {
    let ratios = |key: &str| -> Option<Vec<Ratio>> {
        tags.get(key)
            .and_then(TagEntry::as_tag)
            .and_then(|t| t.values.as_ratios())
            .map(<[Ratio]>::to_vec)
    };
    let reference = |key: &str| -> Option<String> {
        tags.get(key)
            .and_then(TagEntry::as_tag)
            .and_then(|t| t.values.as_str())
            .map(str::to_string)
    };

    let lat_parts = ratios("GPS GPSLatitude")?;
    let lng_parts = ratios("GPS GPSLongitude")?;
    let lat_ref = reference("GPS GPSLatitudeRef")?;
    let lng_ref = reference("GPS GPSLongitudeRef")?;

    let decimal = |parts: &[Ratio]| -> f64 {
        parts
            .iter()
            .enumerate()
            .map(|(i, part)| part.decimal() / 60f64.powi(i as i32))
            .sum()
    };

    let mut lat = decimal(&lat_parts);
    if lat_ref == "S" {
        lat = -lat;
    }
    let mut lng = decimal(&lng_parts);
    if lng_ref == "W" {
        lng = -lng;
    }
    Some((lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use exifscan_core::{FieldType, IfdTag, TagValues};

    fn ratio_tag(values: Vec<Ratio>) -> TagEntry {
        TagEntry::Tag(IfdTag {
            printable: String::new(),
            tag: 0,
            field_type: FieldType::Ratio,
            values: TagValues::Ratio(values),
            field_offset: 0,
            field_length: 0,
            prefer_printable: false,
        })
    }

    fn str_tag(value: &str) -> TagEntry {
        TagEntry::Tag(IfdTag {
            printable: value.to_string(),
            tag: 0,
            field_type: FieldType::Ascii,
            values: TagValues::Str(value.to_string()),
            field_offset: 0,
            field_length: 0,
            prefer_printable: false,
        })
    }

    #[test]
    fn southern_western_hemisphere() {
        let mut tags = TagMap::new();
        tags.insert(
            "GPS GPSLatitude".into(),
            ratio_tag(vec![Ratio::new(33, 1), Ratio::new(51, 1), Ratio::new(22, 1)]),
        );
        tags.insert("GPS GPSLatitudeRef".into(), str_tag("S"));
        tags.insert(
            "GPS GPSLongitude".into(),
            ratio_tag(vec![Ratio::new(151, 1), Ratio::new(12, 1), Ratio::new(0, 1)]),
        );
        tags.insert("GPS GPSLongitudeRef".into(), str_tag("E"));

        let (lat, lng) = gps_coords(&tags).unwrap();
        assert!((lat - -33.85611).abs() < 1e-4);
        assert!((lng - 151.2).abs() < 1e-4);
    }

    #[test]
    fn missing_tags_give_none() {
        let tags = TagMap::new();
        assert_eq!(gps_coords(&tags), None);
    }
}
