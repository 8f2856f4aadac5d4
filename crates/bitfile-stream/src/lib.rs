//! Bit-granular reading and writing on top of byte streams
//!
//! This crate provides the bit-buffering engine: [`BitStream`] accumulates
//! partial bytes while writing, splits bytes into bits while reading and
//! reconciles its buffers with the underlying [`ByteStream`] on flush, seek,
//! close and drop. Bits are filled most-significant first.

pub mod bitstream;
pub mod buffer;
pub mod byte_stream;
pub mod file;

pub use bitstream::BitStream;
pub use buffer::BitBuffer;
pub use byte_stream::{ByteReader, ByteStream, ByteWriter};
pub use file::BitFile;
