//! Canonical WAV header decoding.
//!
//! This module handles the fixed 44-byte "canonical" WAV header: the
//! `RIFF`/`WAVE`/`fmt `/`data` chunk sequence with no extra sub-chunks in
//! between. It deliberately is not a general RIFF parser — format fields
//! are read from fixed byte offsets, and files with metadata chunks before
//! `data` are out of scope.

mod error;
mod header;

pub use error::HeaderError;
pub use header::{WavHeader, HEADER_LEN};
