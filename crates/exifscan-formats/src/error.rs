//! Error types for container location and dispatch.

use thiserror::Error;

/// Errors surfaced while locating or walking EXIF data.
///
/// The first two are expected control flow at the `process_file` boundary:
/// they empty the result map instead of propagating.
#[derive(Debug, Error)]
#[must_use]
pub enum Error {
    /// The container carries no EXIF payload at all.
    #[error("{0}")]
    ExifNotFound(String),

    /// The container was recognized but its EXIF structure is broken.
    #[error("{0}")]
    InvalidExif(String),

    /// Nikon type-2 MakerNote without the embedded TIFF marker. Fatal only
    /// in strict mode.
    #[error("missing marker tag 42 in MakerNote")]
    MissingNikonMarker,

    #[error(transparent)]
    Core(#[from] exifscan_core::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for format operations.
pub type Result<T> = std::result::Result<T, Error>;
