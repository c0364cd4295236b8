//! Error types for the colour atlas.

use thiserror::Error;

/// Error type for colour parsing, image geometry and output.
#[derive(Error, Debug)]
pub enum Error {
    /// A hex colour or a colour-space name could not be parsed.
    #[error("cannot parse {input:?}: {reason}")]
    Parse { input: String, reason: String },

    /// The requested geometry cannot be drawn (too few colour
    /// points, empty sections, zero-sized images, ...).
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Images handed to the compositor do not share one size.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// The output file could not be created or written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed.
    #[error("png encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

impl Error {
    pub(crate) fn parse(input: &str, reason: impl ToString) -> Self {
        Error::Parse { input: input.to_string(), reason: reason.to_string() }
    }
}

/// Result type for colour atlas operations.
pub type Result<T> = std::result::Result<T, Error>;
