//! Core types for bit streams

use crate::consts;
use crate::error::{BitFileError, BitFileResult};
use std::fmt;
use std::fs::OpenOptions;
use std::str::FromStr;

/// Access mode of a bit stream, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Bits may only be read (`"r"`)
    ReadOnly,
    /// Bits may only be written; an existing file is truncated (`"w"`)
    WriteOnly,
    /// Bits may be read and written; existing content is kept (`"r+"`)
    ReadWrite,
}

impl Mode {
    /// Parse a mode string: `"r"`, `"w"` or `"r+"`.
    pub fn parse(mode: &str) -> BitFileResult<Self> {
        match mode {
            consts::MODE_READ => Ok(Mode::ReadOnly),
            consts::MODE_WRITE => Ok(Mode::WriteOnly),
            consts::MODE_READ_WRITE => Ok(Mode::ReadWrite),
            other => Err(BitFileError::InvalidMode(format!(
                "unrecognized mode string {:?}",
                other
            ))),
        }
    }

    pub fn is_readable(&self) -> bool {
        matches!(self, Mode::ReadOnly | Mode::ReadWrite)
    }

    pub fn is_writable(&self) -> bool {
        matches!(self, Mode::WriteOnly | Mode::ReadWrite)
    }

    /// The mode string this mode was parsed from
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::ReadOnly => consts::MODE_READ,
            Mode::WriteOnly => consts::MODE_WRITE,
            Mode::ReadWrite => consts::MODE_READ_WRITE,
        }
    }

    /// File open options matching this mode
    pub fn open_options(&self) -> OpenOptions {
        let mut options = OpenOptions::new();
        match self {
            Mode::ReadOnly => {
                options.read(true);
            }
            Mode::WriteOnly => {
                options.write(true).create(true).truncate(true);
            }
            Mode::ReadWrite => {
                options.read(true).write(true);
            }
        }
        options
    }
}

impl FromStr for Mode {
    type Err = BitFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::parse(s)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fill used for the unused low-order bits of a flushed partial byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Padding {
    #[default]
    Zeros,
    Ones,
}

impl Padding {
    /// Pad a partial byte holding `count` bits (right-aligned in `bits`).
    ///
    /// The data bits are moved to the most significant positions and the
    /// remaining `8 - count` positions are filled.
    pub fn pad(&self, bits: u8, count: u8) -> u8 {
        debug_assert!(count > 0 && count < 8);
        let shifted = bits << (8 - count);
        match self {
            Padding::Zeros => shifted,
            Padding::Ones => shifted | (0xFF >> count),
        }
    }
}

/// Stream options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamOptions {
    /// Padding used by implicit flushes (close, drop, alignment, seek)
    pub padding: Padding,
}

impl StreamOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}
