//! Tag dictionary types consumed by the IFD walker.
//!
//! The dictionaries themselves are static data owned by the `exifscan-tags`
//! crate; this module only defines their shape so the walker can resolve
//! names and decoders without depending on the data.

use crate::TagValues;

/// Tag dictionary: tag id to definition.
pub type TagDict = phf::Map<u16, TagDef>;

/// One dictionary entry: the tag name plus an optional decoder that turns
/// the raw values into a better printable (or into a sub-IFD walk).
pub struct TagDef {
    pub name: &'static str,
    pub decoder: Option<TagDecoder>,
}

impl TagDef {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            decoder: None,
        }
    }

    pub const fn with(name: &'static str, decoder: TagDecoder) -> Self {
        Self {
            name,
            decoder: Some(decoder),
        }
    }
}

/// Late-bound dictionary reference, so a table can name itself as its own
/// sub-IFD dictionary (the EXIF sub-IFD reuses the standard table).
pub type DictRef = fn() -> &'static TagDict;

/// How a tag's printable is derived.
pub enum TagDecoder {
    /// Enum lookup: each value is replaced by its label, unknown values
    /// print as the bare number.
    Map(&'static [(i64, &'static str)]),
    /// Formatter over the whole value list.
    Func(fn(&TagValues) -> String),
    /// The value is a pointer to a sub-IFD walked with its own name prefix
    /// and dictionary.
    SubIfd(&'static str, DictRef),
}

impl TagDecoder {
    /// Label for `value` in an enum-lookup decoder.
    pub fn lookup(table: &[(i64, &'static str)], value: i64) -> Option<&'static str> {
        // tables are small, a linear scan is fine
        table
            .iter()
            .find(|(k, _)| *k == value)
            .map(|(_, label)| *label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FLAVORS: &[(i64, &str)] = &[(0, "Off"), (1, "On")];

    #[test]
    fn map_lookup() {
        assert_eq!(TagDecoder::lookup(FLAVORS, 1), Some("On"));
        assert_eq!(TagDecoder::lookup(FLAVORS, 7), None);
    }
}
