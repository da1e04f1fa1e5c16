//! Audio sink implementations.
//!
//! `RodioSink` is the production sink, backed by the rodio output stream.
//! It accepts raw little-endian PCM bytes and feeds them to the device as
//! 16-bit sample buffers. Sample data is always interpreted as 16-bit
//! little-endian, whatever bit depth the header declares, mirroring the
//! original player's fixed two-byte read granularity.

use std::thread;
use std::time::Duration;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};
use tracing::{debug, warn};

use super::error::SinkError;
use super::AudioSink;
use crate::wav::WavHeader;

/// Bytes staged before a flush to the output queue. Matches the output
/// line buffer size used by the original player.
const STAGE_BYTES: usize = 4096;

/// Queued sample buffers allowed before `write` blocks.
const MAX_QUEUED: usize = 8;

/// Poll interval while waiting for the output queue to make room.
const QUEUE_POLL: Duration = Duration::from_millis(5);

/// Whether the player holds a working output line.
///
/// Sink-open failure is non-fatal: the player stays usable in a silent,
/// degraded state, and playback calls on an `Unavailable` sink are inert.
pub(crate) enum SinkState {
    Active(Box<dyn AudioSink>),
    Unavailable,
}

impl SinkState {
    /// Opens a rodio sink for the parsed format, degrading to
    /// `Unavailable` (with a warning) if the platform cannot provide a
    /// matching output line.
    pub(crate) fn open(header: &WavHeader) -> Self {
        match RodioSink::open(header) {
            Ok(sink) => Self::Active(Box::new(sink)),
            Err(e) => {
                warn!("audio output unavailable, playback will be silent: {e}");
                Self::Unavailable
            }
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

/// Production `AudioSink` backed by rodio.
///
/// The output stream must be kept alive for the whole playback, so the
/// sink owns it. Written bytes are staged and flushed to the device in
/// frame-aligned buffers; `drain` flushes the remainder and blocks until
/// the queue is empty.
pub struct RodioSink {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    sink: Sink,
    channels: u16,
    sample_rate: u32,
    staged: Vec<u8>,
}

impl std::fmt::Debug for RodioSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSink")
            .field("channels", &self.channels)
            .field("sample_rate", &self.sample_rate)
            .field("staged", &self.staged.len())
            .finish_non_exhaustive()
    }
}

impl RodioSink {
    /// Opens and starts an output line for the given format.
    ///
    /// # Errors
    ///
    /// - `SinkError::UnsupportedFormat` for a zero channel count or
    ///   sample rate (a size-correct but malformed header).
    /// - `SinkError::DeviceNotAvailable` if no output device exists.
    /// - `SinkError::StreamFailed` if the playback sink cannot be created.
    pub fn open(header: &WavHeader) -> Result<Self, SinkError> {
        if header.channels == 0 || header.sample_rate == 0 {
            return Err(SinkError::UnsupportedFormat {
                channels: header.channels,
                sample_rate: header.sample_rate,
            });
        }

        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SinkError::DeviceNotAvailable(e.to_string()))?;
        let sink =
            Sink::try_new(&stream_handle).map_err(|e| SinkError::StreamFailed(e.to_string()))?;

        debug!(
            channels = header.channels,
            sample_rate = header.sample_rate,
            "audio output line opened"
        );

        Ok(Self {
            _stream: stream,
            sink,
            channels: header.channels,
            sample_rate: header.sample_rate,
            staged: Vec::with_capacity(STAGE_BYTES),
        })
    }

    /// Bytes per interleaved frame at the fixed 16-bit sample width.
    fn frame_bytes(&self) -> usize {
        2 * usize::from(self.channels)
    }

    /// Flushes complete frames from the staging buffer to the device.
    ///
    /// With `pad_partial_frame`, a trailing partial frame is zero-padded
    /// so no staged audio is lost at drain time.
    fn flush(&mut self, pad_partial_frame: bool) {
        let frame = self.frame_bytes();
        if pad_partial_frame {
            let rem = self.staged.len() % frame;
            if rem != 0 {
                self.staged.resize(self.staged.len() + frame - rem, 0);
            }
        }

        let len = self.staged.len() - self.staged.len() % frame;
        if len == 0 {
            return;
        }

        let samples: Vec<i16> = self.staged[..len]
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        self.staged.drain(..len);

        // Backpressure: the device queue is finite from the caller's point
        // of view, so block until it has room.
        while self.sink.len() >= MAX_QUEUED {
            thread::sleep(QUEUE_POLL);
        }
        self.sink
            .append(SamplesBuffer::new(self.channels, self.sample_rate, samples));
    }
}

impl AudioSink for RodioSink {
    fn write(&mut self, chunk: &[u8]) -> usize {
        self.staged.extend_from_slice(chunk);
        if self.staged.len() >= STAGE_BYTES {
            self.flush(false);
        }
        chunk.len()
    }

    fn drain(&mut self) {
        self.flush(true);
        self.sink.sleep_until_end();
    }

    fn stop(&mut self) {
        self.sink.stop();
    }
}
