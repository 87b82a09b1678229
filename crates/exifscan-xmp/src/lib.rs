//! XMP (Extensible Metadata Platform) support: locate the packet in a
//! byte stream and render it as tidy XML.
//!
//! XMP is an XML blob bracketed by `<x:xmpmeta ...>` and `</x:xmpmeta>`.
//! It usually rides in the `ApplicationNotes` EXIF tag, but some
//! producers drop it elsewhere in the file, so there is also a raw stream
//! scan.

use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use std::io::Read;
use tracing::{debug, warn};

const OPEN_TAG: &[u8] = b"<x:xmpmeta";
const CLOSE_TAG: &[u8] = b"</x:xmpmeta>";

/// Scan a stream for the XMP packet and return its bytes, including the
/// closing tag. Empty when no packet is found.
///
/// The scan is chunked with a small overlap, so memory use is bounded by
/// the packet size rather than the file size.
pub fn find_xmp_data<R: Read + ?Sized>(reader: &mut R) -> std::io::Result<Vec<u8>> {
    let mut window: Vec<u8> = Vec::new();
    let mut started = false;
    let mut buf = [0u8; 64 * 1024];

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        window.extend_from_slice(&buf[..n]);

        if !started {
            match find(&window, OPEN_TAG) {
                Some(open) => {
                    debug!("XMP found opening tag at stream position");
                    window.drain(..open);
                    started = true;
                }
                None => {
                    // keep only enough tail to match a split open tag
                    let excess = window.len().saturating_sub(OPEN_TAG.len() - 1);
                    window.drain(..excess);
                }
            }
        }
        if started {
            if let Some(close) = find(&window, CLOSE_TAG) {
                window.truncate(close + CLOSE_TAG.len());
                debug!("Found {} XMP bytes", window.len());
                return Ok(window);
            }
        }
    }

    if started {
        // opening tag without a close: hand back what accumulated
        debug!("Found {} XMP bytes (unterminated)", window.len());
        return Ok(window);
    }
    Ok(Vec::new())
}

/// Render the XMP packet as a string, pretty-printing when the XML is
/// well-formed and falling back to the raw text otherwise.
pub fn xmp_bytes_to_str(xmp_bytes: &[u8]) -> String {
    debug!("Cleaning XMP data ...");
    let raw = String::from_utf8_lossy(xmp_bytes).into_owned();
    match pretty_print(&raw) {
        Some(pretty) => pretty,
        None => {
            warn!("XMP: XML is not well formed");
            raw
        }
    }
}

fn pretty_print(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(event) => writer.write_event(event).ok()?,
            Err(_) => return None,
        }
    }
    String::from_utf8(writer.into_inner()).ok()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
