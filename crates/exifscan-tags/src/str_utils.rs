//! String cleaning helpers used as formatter entries.

use exifscan_core::TagValues;

/// Render a byte/integer sequence as text without choking on out-of-range
/// characters.
///
/// Non-printing characters are screened out; if nothing printable remains
/// the digits are joined instead (all-zero runs collapse to empty, some
/// UserComment payloads are nothing but NULs). Leading/trailing spaces and
/// NULs are trimmed.
pub fn make_string(values: &TagValues) -> String {
    if let Some(s) = values.as_str() {
        return s.trim_matches([' ', '\0']).to_string();
    }

    let ints: Vec<i64> = match values {
        TagValues::Int(v) => v.clone(),
        TagValues::Bytes(b) => b.iter().map(|&x| i64::from(x)).collect(),
        _ => return values.to_string(),
    };

    let mut out = String::new();
    for &c in &ints {
        if (32..256).contains(&c) {
            out.push(c as u8 as char);
        }
    }

    // no printing chars at all
    if out.is_empty() {
        out = ints.iter().map(|v| v.to_string()).collect();
        if !out.is_empty() && out.chars().all(|c| c == '0') {
            return String::new();
        }
    }

    out.trim_matches([' ', '\0']).to_string()
}

/// UserComment variant: the first 8 bytes name the coding system (ASCII,
/// JIS, Unicode, or blank) and are dropped when they do.
pub fn make_string_uc(values: &TagValues) -> String {
    let bytes: Vec<i64> = match values {
        TagValues::Int(v) => v.clone(),
        TagValues::Bytes(b) => b.iter().map(|&x| i64::from(x)).collect(),
        _ => return make_string(values),
    };

    if bytes.len() >= 8 {
        let code = make_string(&TagValues::Int(bytes[..8].to_vec()));
        if matches!(code.to_uppercase().as_str(), "ASCII" | "UNICODE" | "JIS" | "") {
            return make_string(&TagValues::Int(bytes[8..].to_vec()));
        }
    }
    make_string(&TagValues::Int(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(bytes: &[u8]) -> TagValues {
        TagValues::Int(bytes.iter().map(|&b| i64::from(b)).collect())
    }

    #[test]
    fn screens_non_printing_chars() {
        let v = ints(b"\x01ABC\x00");
        assert_eq!(make_string(&v), "ABC");
    }

    #[test]
    fn all_nulls_collapse_to_empty() {
        assert_eq!(make_string(&ints(&[0, 0, 0, 0])), "");
    }

    #[test]
    fn digits_join_when_nothing_printable() {
        assert_eq!(make_string(&TagValues::Int(vec![1, 2, 3])), "123");
    }

    #[test]
    fn user_comment_prefix_dropped() {
        let mut raw = b"ASCII\x00\x00\x00Hello".to_vec();
        assert_eq!(make_string_uc(&ints(&raw)), "Hello");

        // unknown coding systems keep the prefix bytes
        raw[..5].copy_from_slice(b"WEIRD");
        assert_eq!(make_string_uc(&ints(&raw)), "WEIRDHello");
    }

    #[test]
    fn short_user_comment_untouched() {
        assert_eq!(make_string_uc(&ints(b"Hi")), "Hi");
    }
}
