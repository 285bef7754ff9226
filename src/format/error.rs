//! WMF writer error types

use thiserror::Error;

/// Metafile writer errors
#[derive(Error, Debug)]
pub enum Error {
    /// A record-emitting operation was attempted after the file was finalized
    #[error("metafile already finalized: cannot {operation}")]
    Finalized {
        /// Rejected operation
        operation: &'static str,
    },

    /// Bytes were requested before the header fields were backfilled
    #[error("metafile not finalized: header fields are still placeholders")]
    NotFinalized,

    /// Patch target lies outside the written stream
    #[error("patch out of bounds: word index {index}, stream length {len}")]
    PatchOutOfBounds {
        /// Word index requested
        index: usize,
        /// Current stream length in words
        len: usize,
    },

    /// Point list does not fit the record's 16-bit count field
    #[error("too many points: {count} (max {max})")]
    TooManyPoints {
        /// Number of points supplied
        count: usize,
        /// Maximum encodable
        max: usize,
    },

    /// Text does not fit the record's 16-bit length field
    #[error("text too long: {len} bytes (max {max})")]
    TextTooLong {
        /// Encoded length in bytes
        len: usize,
        /// Maximum encodable
        max: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
