//! wavplay — minimal canonical-WAV decoder and streaming playback.
//!
//! This library provides two pieces, consumed in order:
//! - `wav`: parses the fixed 44-byte canonical WAV header into typed
//!   format parameters
//! - `player`: owns an audio output sink sized from the parsed format
//!   and pumps raw PCM sample bytes to it in bounded chunks
//!
//! A player is built either from a full local file (header read from its
//! first 44 bytes, remainder streamed on demand) or from a standalone
//! header (format known, sample bytes supplied externally, e.g. for live
//! streaming). Missing audio hardware degrades playback to silence
//! instead of failing construction.

pub mod player;
pub mod wav;

// Re-export commonly used types for convenience
pub use player::{
    AudioSink, MockSink, PlaybackSource, PlayerError, RodioSink, SinkError, StreamPlayer,
};
pub use wav::{HeaderError, WavHeader, HEADER_LEN};
