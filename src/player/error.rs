//! Playback error types.
//!
//! Construction-time structural errors (truncated file, mis-sized header)
//! abort construction. Sink-acquisition failure is deliberately absent
//! from `PlayerError`: the player recovers from it locally by degrading
//! to silent playback, and `SinkError` only reaches callers that open a
//! `RodioSink` directly.

use std::io;

use thiserror::Error;

use crate::wav::{HeaderError, HEADER_LEN};

/// Errors surfaced by `StreamPlayer` construction and playback.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The backing file is too short to contain a full header.
    #[error("source must be at least {HEADER_LEN} bytes to contain a header, got {len}")]
    TruncatedSource {
        /// Actual length of the source file in bytes.
        len: u64,
    },

    /// The header buffer supplied directly was not exactly 44 bytes.
    #[error(transparent)]
    Header(#[from] HeaderError),

    /// An I/O failure other than ordinary end-of-stream.
    #[error("failed to read audio source: {0}")]
    SourceRead(#[from] io::Error),
}

impl PlayerError {
    /// Returns true if the error was detected at construction time, before
    /// any sample data was touched.
    #[must_use]
    pub fn is_construction_error(&self) -> bool {
        matches!(self, Self::TruncatedSource { .. } | Self::Header(_))
    }
}

/// Errors that can occur while opening an audio output sink.
///
/// These never propagate out of `StreamPlayer` construction; they are
/// logged and the player continues without a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// No audio output device is available (e.g. a headless CI container).
    #[error("no audio output device available: {0}")]
    DeviceNotAvailable(String),

    /// The parsed format cannot configure an output line.
    #[error("audio output cannot be configured for {channels} channel(s) at {sample_rate} Hz")]
    UnsupportedFormat { channels: u16, sample_rate: u32 },

    /// The device exists but the playback sink could not be created.
    #[error("failed to open playback sink: {0}")]
    StreamFailed(String),
}

impl SinkError {
    /// Returns true if the failure is about the device rather than the
    /// requested format.
    #[must_use]
    pub fn is_device_error(&self) -> bool {
        matches!(self, Self::DeviceNotAvailable(_) | Self::StreamFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_error_display() {
        let err = PlayerError::TruncatedSource { len: 10 };
        assert!(err.to_string().contains("44"));
        assert!(err.to_string().contains("10"));

        let err = PlayerError::Header(HeaderError::InvalidSize { len: 43 });
        assert!(err.to_string().contains("43"));

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = PlayerError::SourceRead(io_err);
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_is_construction_error() {
        assert!(PlayerError::TruncatedSource { len: 0 }.is_construction_error());
        assert!(PlayerError::Header(HeaderError::InvalidSize { len: 1 }).is_construction_error());

        let io_err = io::Error::other("boom");
        assert!(!PlayerError::SourceRead(io_err).is_construction_error());
    }

    #[test]
    fn test_sink_error_predicates() {
        assert!(SinkError::DeviceNotAvailable("x".into()).is_device_error());
        assert!(SinkError::StreamFailed("x".into()).is_device_error());
        assert!(!SinkError::UnsupportedFormat {
            channels: 0,
            sample_rate: 0
        }
        .is_device_error());
    }

    #[test]
    fn test_sink_error_display() {
        let err = SinkError::UnsupportedFormat {
            channels: 0,
            sample_rate: 44_100,
        };
        let msg = err.to_string();
        assert!(msg.contains("0 channel"));
        assert!(msg.contains("44100"));
    }
}
