//! Error types for the alpha-check crate.

/// Errors that can occur while loading an image for a transparency check.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be opened or its header could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image library rejected the data (unknown format, corrupt stream).
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
