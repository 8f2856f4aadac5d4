//! Constants used throughout the bit stream implementation

/// Number of bits held by one byte of the underlying stream
pub const BITS_PER_BYTE: u32 = 8;

/// Widest field accepted by a single `read_bits`/`write_bits` call
pub const MAX_FIELD_BITS: u32 = u64::BITS;

/// Mode strings understood by [`Mode::parse`](crate::Mode::parse)
pub const MODE_READ: &str = "r";
pub const MODE_WRITE: &str = "w";
pub const MODE_READ_WRITE: &str = "r+";
