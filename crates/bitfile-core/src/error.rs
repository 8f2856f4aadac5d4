//! Error types for bit stream operations

use thiserror::Error;

/// Result type for bit stream operations
pub type BitFileResult<T> = Result<T, BitFileError>;

/// Errors that can occur while reading or writing a bit stream
#[derive(Error, Debug)]
pub enum BitFileError {
    /// The operation is not permitted by the stream's mode, or a mode string
    /// could not be parsed.
    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    #[error("Unexpected end of stream")]
    EndOfStream,

    #[error("I/O operation on closed stream")]
    StreamClosed,

    #[error("Value {value:#x} does not fit in {width} bits")]
    ValueTooWide { value: u64, width: u32 },

    #[error("Invalid bit count: {count} (maximum is {max})")]
    InvalidBitCount { count: u32, max: u32 },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BitFileError {
    /// Returns true for errors caused by running out of input
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, BitFileError::EndOfStream)
    }
}
