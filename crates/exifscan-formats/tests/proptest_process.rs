//! Property-based tests: process_file must terminate without panicking on
//! arbitrary input, in both lenient and strict modes.

use exifscan_formats::{process_file, ProcessOptions};
use proptest::prelude::*;
use std::io::Cursor;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn no_panic_on_arbitrary_bytes(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        let mut cursor = Cursor::new(data);
        let _ = process_file(&mut cursor, &ProcessOptions::default());
    }

    #[test]
    fn no_panic_in_strict_mode(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        let options = ProcessOptions { strict: true, ..ProcessOptions::default() };
        let mut cursor = Cursor::new(data);
        let _ = process_file(&mut cursor, &options);
    }

    /// Arbitrary bytes behind a valid JPEG APP1 Exif preamble: the walker
    /// sees a recognized container with garbage inside.
    #[test]
    fn no_panic_on_garbage_exif(data in prop::collection::vec(any::<u8>(), 0..1024)) {
        let mut file = vec![0xFF, 0xD8, 0xFF, 0xE1];
        file.extend_from_slice(&((2 + 6 + data.len()) as u16).to_be_bytes());
        file.extend_from_slice(b"Exif\x00\x00");
        file.extend_from_slice(&data);
        let mut cursor = Cursor::new(file);
        let _ = process_file(&mut cursor, &ProcessOptions::default());
    }
}
