//! # bitfile
//!
//! Read and write files an arbitrary number of bits at a time.
//!
//! ## Quick Start
//!
//! ### Writing
//!
//! ```no_run
//! use bitfile::BitFile;
//!
//! let mut file = BitFile::open("bits.bin", "w").unwrap();
//! file.write_bit(true).unwrap();
//! file.write_bits(0b011, 3).unwrap();
//! file.write_byte(b'A').unwrap();
//! file.close().unwrap();
//! ```
//!
//! ### Reading
//!
//! ```no_run
//! use bitfile::BitFile;
//!
//! let mut file = BitFile::open("bits.bin", "r").unwrap();
//! let flag = file.read_bit().unwrap();
//! let field = file.read_bits(3).unwrap();
//! let byte = file.read_byte().unwrap();
//! println!("{} {} {}", flag, field, byte as char);
//! ```
//!
//! ## Conventions
//!
//! - Bits are filled most-significant bit first, both for single bits and for
//!   multi-bit fields.
//! - A field value wider than the requested bit count is rejected with
//!   [`BitFileError::ValueTooWide`]; it is never truncated.
//! - Closing (or dropping) a write-capable stream pads the last partial byte
//!   with zero bits unless [`StreamOptions::padding`] says otherwise.
//! - Any stream implementing `Read + Write` can be wrapped with
//!   [`BitStream::new`], e.g. `std::io::Cursor<Vec<u8>>`. Read-only or
//!   write-only streams use [`BitStream::reader`] and [`BitStream::writer`].
//!   [`BitStream::seek`] is available when the stream implements `Seek`.

// Re-export core types
pub use bitfile_core::{consts, BitFileError, BitFileResult, Mode, Padding, StreamOptions};

// Re-export the engine
pub use bitfile_stream::{BitBuffer, BitFile, BitStream, ByteReader, ByteStream, ByteWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
