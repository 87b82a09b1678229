//! Error types for exifscan-core.

use thiserror::Error;

/// Core parsing errors.
///
/// Corruption inside an IFD is not an error: the walker logs a warning and
/// elides the entry. Only the conditions below abort a walk.
#[derive(Debug, Error)]
#[must_use]
pub enum Error {
    /// Entry type code outside the TIFF range. Fatal only in strict mode;
    /// the walker skips the entry otherwise.
    #[error("unknown field type {field_type} in tag 0x{tag:04X}")]
    UnknownFieldType { field_type: u16, tag: u16 },

    /// Primitive read with a width other than 1, 2, 4 or 8. Always fatal.
    #[error("unexpected unpacking length: {0}")]
    InvalidFieldLength(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
