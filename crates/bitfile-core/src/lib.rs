//! Core types and utilities for bit-granular file I/O
//!
//! This crate provides the small vocabulary shared by the rest of the
//! workspace: the stream [`Mode`], flush [`Padding`], [`StreamOptions`] and
//! the [`BitFileError`] type.

pub mod consts;
pub mod error;
pub mod types;

pub use error::{BitFileError, BitFileResult};
pub use types::*;
