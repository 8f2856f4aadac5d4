//! Bit stream implementation

use crate::buffer::BitBuffer;
use crate::byte_stream::{ByteReader, ByteStream, ByteWriter};
use bitfile_core::consts::{BITS_PER_BYTE, MAX_FIELD_BITS};
use bitfile_core::{BitFileError, BitFileResult, Mode, Padding, StreamOptions};
use byteorder::{ByteOrder, LittleEndian};
use num_traits::{NumCast, PrimInt, Unsigned};
use std::io::{Read, Seek, SeekFrom, Write};

/// A bit stream layered over a byte stream
///
/// Bits are transferred most-significant first: the first bit written lands
/// in bit 7 of the first byte, and multi-bit fields are emitted starting from
/// their most significant bit.
///
/// Reading and writing each use their own one-byte [`BitBuffer`], so at most
/// one underlying byte call is made per eight bits transferred. Which side is
/// usable is decided by the [`Mode`] given at construction.
///
/// Dropping an open write-capable stream flushes its pending bits (padded
/// according to [`StreamOptions::padding`]); call [`close`](Self::close) to
/// observe errors from that final flush.
pub struct BitStream<S: ByteStream> {
    stream: Option<S>,
    mode: Mode,
    options: StreamOptions,
    input: BitBuffer,
    output: BitBuffer,
}

impl<S: ByteStream> BitStream<S> {
    pub fn new(stream: S, mode: Mode) -> Self {
        Self::with_options(stream, mode, StreamOptions::default())
    }

    pub fn with_options(stream: S, mode: Mode, options: StreamOptions) -> Self {
        Self {
            stream: Some(stream),
            mode,
            options,
            input: BitBuffer::new(),
            output: BitBuffer::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn options(&self) -> &StreamOptions {
        &self.options
    }

    pub fn is_closed(&self) -> bool {
        self.stream.is_none()
    }

    /// Bits written but not yet transferred to the underlying stream
    pub fn pending_output_bits(&self) -> u8 {
        self.output.len()
    }

    /// Bits pulled from the underlying stream but not yet consumed
    pub fn unread_input_bits(&self) -> u8 {
        self.input.len()
    }

    /// Gets a reference to the underlying stream.
    pub fn get_ref(&self) -> BitFileResult<&S> {
        self.stream.as_ref().ok_or(BitFileError::StreamClosed)
    }

    /// Read a single bit
    pub fn read_bit(&mut self) -> BitFileResult<bool> {
        self.check_readable()?;
        if let Some(bit) = self.input.pop() {
            return Ok(bit);
        }
        let byte = self.pull_byte()?;
        Ok(self.input.refill_and_pop(byte))
    }

    /// Read up to 64 bits, the first bit read becoming the most significant
    /// bit of the result.
    ///
    /// Fails with [`BitFileError::EndOfStream`] if the stream runs out. Bits
    /// consumed before the failure are not given back.
    pub fn read_bits(&mut self, count: u32) -> BitFileResult<u64> {
        self.check_readable()?;
        check_count(count, MAX_FIELD_BITS)?;

        let mut value = 0u64;
        let mut remaining = count;
        while remaining > 0 {
            if remaining >= BITS_PER_BYTE {
                value = (value << BITS_PER_BYTE) | self.read_byte()? as u64;
                remaining -= BITS_PER_BYTE;
            } else {
                value = (value << 1) | self.read_bit()? as u64;
                remaining -= 1;
            }
        }
        Ok(value)
    }

    /// Read `count` bits into an unsigned integer of type `T`
    pub fn read_field<T: PrimInt + Unsigned>(&mut self, count: u32) -> BitFileResult<T> {
        self.check_readable()?;
        let max = width_of::<T>();
        check_count(count, max)?;
        let value = self.read_bits(count)?;
        <T as NumCast>::from(value).ok_or(BitFileError::InvalidBitCount { count, max })
    }

    /// Read the next eight bits, whatever the current alignment
    pub fn read_byte(&mut self) -> BitFileResult<u8> {
        self.check_readable()?;
        let next = self.pull_byte()?;
        Ok(self.input.pop_byte(next))
    }

    /// Read a field stored least-significant byte first.
    ///
    /// Whole bytes come first, lowest byte first; the remaining `count % 8`
    /// bits form the most significant part of the result.
    pub fn read_bits_le(&mut self, count: u32) -> BitFileResult<u64> {
        self.check_readable()?;
        check_count(count, MAX_FIELD_BITS)?;

        let mut bytes = [0u8; 8];
        let whole = (count / BITS_PER_BYTE) as usize;
        for byte in bytes.iter_mut().take(whole) {
            *byte = self.read_byte()?;
        }
        let rest = count % BITS_PER_BYTE;
        if rest > 0 {
            bytes[whole] = self.read_bits(rest)? as u8;
        }
        Ok(LittleEndian::read_u64(&bytes))
    }

    /// Write a single bit
    pub fn write_bit(&mut self, bit: bool) -> BitFileResult<()> {
        self.check_writable()?;
        if let Some(byte) = self.output.push(bit) {
            self.push_byte(byte)?;
        }
        Ok(())
    }

    /// Write the low `count` bits of `value`, most significant first.
    ///
    /// A `value` that needs more than `count` bits is rejected with
    /// [`BitFileError::ValueTooWide`] and nothing is written; values are never
    /// truncated. If the underlying stream fails part way, the bytes already
    /// completed stay written.
    pub fn write_bits(&mut self, value: u64, count: u32) -> BitFileResult<()> {
        self.check_writable()?;
        check_count(count, MAX_FIELD_BITS)?;
        check_fits(value, count)?;

        let mut remaining = count;
        while remaining > 0 {
            if remaining >= BITS_PER_BYTE {
                self.write_byte((value >> (remaining - BITS_PER_BYTE)) as u8)?;
                remaining -= BITS_PER_BYTE;
            } else {
                self.write_bit((value >> (remaining - 1)) & 1 == 1)?;
                remaining -= 1;
            }
        }
        Ok(())
    }

    /// Write the low `count` bits of an unsigned integer of type `T`
    pub fn write_field<T: PrimInt + Unsigned>(
        &mut self,
        value: T,
        count: u32,
    ) -> BitFileResult<()> {
        self.check_writable()?;
        let max = width_of::<T>();
        check_count(count, max)?;
        if count < max && (value >> count as usize) != T::zero() {
            return Err(BitFileError::ValueTooWide {
                value: value.to_u64().unwrap_or(u64::MAX),
                width: count,
            });
        }
        let value = value.to_u64().ok_or(BitFileError::ValueTooWide {
            value: u64::MAX,
            width: count,
        })?;
        self.write_bits(value, count)
    }

    /// Write eight bits, whatever the current alignment
    pub fn write_byte(&mut self, byte: u8) -> BitFileResult<()> {
        self.check_writable()?;
        let out = self.output.push_byte(byte);
        self.push_byte(out)
    }

    /// Write a field least-significant byte first; see [`read_bits_le`](Self::read_bits_le).
    pub fn write_bits_le(&mut self, value: u64, count: u32) -> BitFileResult<()> {
        self.check_writable()?;
        check_count(count, MAX_FIELD_BITS)?;
        check_fits(value, count)?;

        let mut bytes = [0u8; 8];
        LittleEndian::write_u64(&mut bytes, value);
        let whole = (count / BITS_PER_BYTE) as usize;
        for &byte in bytes.iter().take(whole) {
            self.write_byte(byte)?;
        }
        let rest = count % BITS_PER_BYTE;
        if rest > 0 {
            self.write_bits(bytes[whole] as u64, rest)?;
        }
        Ok(())
    }

    /// Write out a partially filled byte, padded per the stream options.
    ///
    /// Returns the number of data bits flushed. With nothing pending this is
    /// a no-op returning `0`.
    pub fn flush_output(&mut self) -> BitFileResult<u8> {
        self.flush_output_with(self.options.padding)
    }

    /// Like [`flush_output`](Self::flush_output) with an explicit padding
    pub fn flush_output_with(&mut self, padding: Padding) -> BitFileResult<u8> {
        self.check_writable()?;
        let count = self.output.len();
        if let Some(byte) = self.output.take_padded(padding) {
            self.push_byte(byte)?;
            self.stream_mut()?.flush()?;
        }
        Ok(count)
    }

    /// Skip to byte boundary
    ///
    /// Unconsumed input bits are discarded. On write-capable streams any
    /// pending output bits are flushed first.
    pub fn align_to_byte(&mut self) -> BitFileResult<()> {
        if self.is_closed() {
            return Err(BitFileError::StreamClosed);
        }
        if self.mode.is_writable() {
            self.flush_output()?;
        }
        self.input.clear();
        Ok(())
    }

    /// Flush pending bits and release the underlying stream.
    ///
    /// The stream is released even if the final flush fails. Every later
    /// operation fails with [`BitFileError::StreamClosed`].
    pub fn close(&mut self) -> BitFileResult<()> {
        if self.is_closed() {
            return Err(BitFileError::StreamClosed);
        }
        let result = self.finish();
        self.stream = None;
        self.input.clear();
        self.output.clear();
        result
    }

    /// Flush pending bits and hand back the underlying stream.
    pub fn into_inner(mut self) -> BitFileResult<S> {
        if self.is_closed() {
            return Err(BitFileError::StreamClosed);
        }
        self.finish()?;
        self.stream.take().ok_or(BitFileError::StreamClosed)
    }

    fn finish(&mut self) -> BitFileResult<()> {
        if self.mode.is_writable() {
            self.flush_output()?;
            self.stream_mut()?.flush()?;
        }
        Ok(())
    }

    fn stream_mut(&mut self) -> BitFileResult<&mut S> {
        self.stream.as_mut().ok_or(BitFileError::StreamClosed)
    }

    fn pull_byte(&mut self) -> BitFileResult<u8> {
        self.stream_mut()?
            .read_byte()?
            .ok_or(BitFileError::EndOfStream)
    }

    fn push_byte(&mut self, byte: u8) -> BitFileResult<()> {
        self.stream_mut()?.write_byte(byte)?;
        Ok(())
    }

    fn check_readable(&self) -> BitFileResult<()> {
        if self.is_closed() {
            return Err(BitFileError::StreamClosed);
        }
        if !self.mode.is_readable() {
            return Err(BitFileError::InvalidMode(format!(
                "stream opened with mode {:?} is not readable",
                self.mode.as_str()
            )));
        }
        Ok(())
    }

    fn check_writable(&self) -> BitFileResult<()> {
        if self.is_closed() {
            return Err(BitFileError::StreamClosed);
        }
        if !self.mode.is_writable() {
            return Err(BitFileError::InvalidMode(format!(
                "stream opened with mode {:?} is not writable",
                self.mode.as_str()
            )));
        }
        Ok(())
    }
}

impl<S: ByteStream + Seek> BitStream<S> {
    /// Align to a byte boundary, then seek the underlying stream.
    pub fn seek(&mut self, pos: SeekFrom) -> BitFileResult<u64> {
        self.align_to_byte()?;
        Ok(self.stream_mut()?.seek(pos)?)
    }
}

impl<R: Read> BitStream<ByteReader<R>> {
    /// Read-only bit stream over any reader, e.g. `&[u8]` or a `BufReader`
    pub fn reader(inner: R) -> Self {
        Self::new(ByteReader::new(inner), Mode::ReadOnly)
    }
}

impl<W: Write> BitStream<ByteWriter<W>> {
    /// Write-only bit stream over any writer, e.g. `Vec<u8>` or a `BufWriter`
    pub fn writer(inner: W) -> Self {
        Self::new(ByteWriter::new(inner), Mode::WriteOnly)
    }

    /// Like [`writer`](Self::writer) with explicit options
    pub fn writer_with(inner: W, options: StreamOptions) -> Self {
        Self::with_options(ByteWriter::new(inner), Mode::WriteOnly, options)
    }
}

impl<S: ByteStream> Drop for BitStream<S> {
    fn drop(&mut self) {
        if !self.is_closed() {
            let _ = self.finish();
        }
    }
}

fn width_of<T: PrimInt>() -> u32 {
    T::zero().count_zeros().min(MAX_FIELD_BITS)
}

fn check_count(count: u32, max: u32) -> BitFileResult<()> {
    if count > max {
        return Err(BitFileError::InvalidBitCount { count, max });
    }
    Ok(())
}

fn check_fits(value: u64, width: u32) -> BitFileResult<()> {
    if width < MAX_FIELD_BITS && value >> width != 0 {
        return Err(BitFileError::ValueTooWide { value, width });
    }
    Ok(())
}
