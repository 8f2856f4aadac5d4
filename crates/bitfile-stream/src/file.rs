//! File-backed bit streams

use crate::bitstream::BitStream;
use bitfile_core::{BitFileResult, Mode, StreamOptions};
use std::fs::File;
use std::path::Path;

/// A bit stream that owns an open file
pub type BitFile = BitStream<File>;

impl BitStream<File> {
    /// Open a file with a mode string: `"r"`, `"w"` or `"r+"`.
    pub fn open<P: AsRef<Path>>(path: P, mode: &str) -> BitFileResult<Self> {
        let mode = Mode::parse(mode)?;
        Self::open_with(path, mode, StreamOptions::default())
    }

    pub fn open_with<P: AsRef<Path>>(
        path: P,
        mode: Mode,
        options: StreamOptions,
    ) -> BitFileResult<Self> {
        let file = mode.open_options().open(path)?;
        Ok(Self::with_options(file, mode, options))
    }
}
