//! Byte-level stream abstraction the bit engine is layered on

use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};

/// Whole-byte primitives consumed by [`BitStream`](crate::BitStream)
///
/// Implemented for every `Read + Write` type, which covers
/// [`std::fs::File`] and [`std::io::Cursor`] over a `Vec<u8>`. Streams that
/// can only be read or only be written are wrapped in [`ByteReader`] or
/// [`ByteWriter`]. Seeking is not part of this trait; a bit stream can seek
/// when its byte stream also implements [`Seek`].
pub trait ByteStream {
    /// Read the next byte, or `None` at end of stream
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    fn write_byte(&mut self, byte: u8) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

fn read_one<R: Read>(reader: &mut R) -> io::Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

impl<T: Read + Write> ByteStream for T {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        read_one(self)
    }

    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.write_all(&[byte])
    }

    fn flush(&mut self) -> io::Result<()> {
        Write::flush(self)
    }
}

/// Read-only byte stream over any [`Read`], e.g. `&[u8]` or stdin
pub struct ByteReader<R: Read> {
    inner: R,
}

impl<R: Read> ByteReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteStream for ByteReader<R> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        read_one(&mut self.inner)
    }

    fn write_byte(&mut self, _byte: u8) -> io::Result<()> {
        Err(io::Error::new(ErrorKind::Unsupported, "byte stream is read-only"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<R: Read + Seek> Seek for ByteReader<R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

/// Write-only byte stream over any [`Write`], e.g. `Vec<u8>` or stdout
pub struct ByteWriter<W: Write> {
    inner: W,
}

impl<W: Write> ByteWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteStream for ByteWriter<W> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Err(io::Error::new(ErrorKind::Unsupported, "byte stream is write-only"))
    }

    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.inner.write_all(&[byte])
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write + Seek> Seek for ByteWriter<W> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}
