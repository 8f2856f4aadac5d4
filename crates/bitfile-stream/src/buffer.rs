//! Single-byte bit accumulator

use bitfile_core::Padding;

/// Mask selecting the low `count` bits of a byte
#[inline]
fn low_mask(count: u8) -> u8 {
    ((1u16 << count) - 1) as u8
}

/// Holds the bits of at most one byte that have not yet been transferred to
/// (write side) or consumed from (read side) the underlying stream.
///
/// On the write side `bits` holds the pending bits right-aligned, oldest bit
/// highest. On the read side `bits` holds the last byte pulled and `count` is
/// the number of its low-order bits still unconsumed.
///
/// Between calls `count` is always in `0..8`: a full byte is handed out as
/// soon as it is complete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bits: u8,
    count: u8,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buffered bits
    #[inline]
    pub fn len(&self) -> u8 {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        self.bits = 0;
        self.count = 0;
    }

    /// Append one bit; returns the completed byte once eight bits are held.
    #[inline]
    pub fn push(&mut self, bit: bool) -> Option<u8> {
        self.bits = (self.bits << 1) | bit as u8;
        self.count += 1;
        if self.count == 8 {
            let byte = self.bits;
            self.clear();
            Some(byte)
        } else {
            None
        }
    }

    /// Append a whole byte; returns the byte that is now complete.
    ///
    /// The pending bits are emitted first, followed by the high bits of
    /// `byte`. The low bits of `byte` stay pending, so the count is unchanged.
    pub fn push_byte(&mut self, byte: u8) -> u8 {
        if self.count == 0 {
            return byte;
        }
        let out = (self.bits << (8 - self.count)) | (byte >> self.count);
        self.bits = byte & low_mask(self.count);
        out
    }

    /// Take the pending bits as a padded byte, leaving the buffer empty.
    pub fn take_padded(&mut self, padding: Padding) -> Option<u8> {
        if self.count == 0 {
            return None;
        }
        let byte = padding.pad(self.bits & low_mask(self.count), self.count);
        self.clear();
        Some(byte)
    }

    /// Consume the next unread bit, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<bool> {
        if self.count == 0 {
            return None;
        }
        self.count -= 1;
        Some((self.bits >> self.count) & 1 == 1)
    }

    /// Load a freshly pulled byte and consume its first bit.
    pub fn refill_and_pop(&mut self, byte: u8) -> bool {
        debug_assert!(self.is_empty());
        self.bits = byte;
        self.count = 7;
        byte & 0x80 != 0
    }

    /// Consume the next eight bits, completing them with a freshly pulled
    /// byte. The unused low bits of `next` become the new unread bits.
    pub fn pop_byte(&mut self, next: u8) -> u8 {
        if self.count == 0 {
            return next;
        }
        let out = ((self.bits & low_mask(self.count)) << (8 - self.count)) | (next >> self.count);
        self.bits = next;
        out
    }
}
