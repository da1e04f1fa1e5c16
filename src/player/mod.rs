//! Streaming playback pipeline.
//!
//! This module owns everything downstream of the parsed header:
//!
//! - `AudioSink`: the output-line abstraction (write / drain / stop)
//! - `RodioSink`: the production sink backed by rodio
//! - `MockSink`: a recording sink for tests
//! - `StreamPlayer`: pushes raw PCM bytes from a local file or an
//!   external caller to the sink
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   StreamPlayer   │ ← push() / play_local() / close()
//! └────────┬─────────┘
//!          │ SinkState
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │    AudioSink     │────▶│    RodioSink     │
//! │     (trait)      │     ├──────────────────┤
//! │                  │────▶│     MockSink     │
//! └──────────────────┘     └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use wavplay::player::StreamPlayer;
//!
//! let mut player = StreamPlayer::open("groove.wav").expect("readable wav");
//! player.play_local().expect("streaming failed");
//! player.close();
//! ```
//!
//! Playback is single-threaded and blocking: `push` returns once the sink
//! has accepted the chunk, and `play_local` runs the whole read-and-push
//! loop on the caller's thread. A player is not meant to be shared across
//! threads; the sink is exclusively owned.

mod error;
mod player;
mod sink;

pub use error::{PlayerError, SinkError};
pub use player::{PlaybackSource, StreamPlayer};
pub use sink::RodioSink;

use std::sync::{Arc, Mutex};

/// Trait for audio output sinks.
///
/// A sink wraps one opened, started output line. `write` blocks until the
/// sink has accepted the chunk; `drain` blocks until everything already
/// accepted has been played out; `stop` halts the line. The line is
/// released when the sink is dropped, which `StreamPlayer::close` does
/// after draining and stopping.
pub trait AudioSink {
    /// Writes a chunk of raw little-endian PCM bytes, blocking until the
    /// sink accepts all of it. Returns the number of bytes accepted.
    fn write(&mut self, chunk: &[u8]) -> usize;

    /// Blocks until all accepted audio has been played out.
    fn drain(&mut self);

    /// Stops the output line.
    fn stop(&mut self);
}

/// Recording sink for tests.
///
/// Every call is logged through a shared handle, so a test can keep a
/// clone of the mock, hand the original to a `StreamPlayer`, and inspect
/// the log after `close` consumed the player.
#[derive(Debug, Clone, Default)]
pub struct MockSink {
    inner: Arc<Mutex<MockSinkLog>>,
}

#[derive(Debug, Default)]
struct MockSinkLog {
    writes: Vec<Vec<u8>>,
    drain_count: usize,
    stop_count: usize,
}

impl MockSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every chunk written so far, in order.
    #[must_use]
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.inner.lock().unwrap().writes.clone()
    }

    /// Number of `write` calls so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.inner.lock().unwrap().writes.len()
    }

    /// All written bytes concatenated in write order.
    #[must_use]
    pub fn written_bytes(&self) -> Vec<u8> {
        self.inner.lock().unwrap().writes.concat()
    }

    #[must_use]
    pub fn drain_count(&self) -> usize {
        self.inner.lock().unwrap().drain_count
    }

    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.inner.lock().unwrap().stop_count
    }
}

impl AudioSink for MockSink {
    fn write(&mut self, chunk: &[u8]) -> usize {
        self.inner.lock().unwrap().writes.push(chunk.to_vec());
        chunk.len()
    }

    fn drain(&mut self) {
        self.inner.lock().unwrap().drain_count += 1;
    }

    fn stop(&mut self) {
        self.inner.lock().unwrap().stop_count += 1;
    }
}
