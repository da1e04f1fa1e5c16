//! The streaming WAV player.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::PlayerError;
use super::sink::SinkState;
use super::AudioSink;
use crate::wav::{WavHeader, HEADER_LEN};

/// Where a player's sample bytes come from. Fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackSource {
    /// Header read from the file; the remaining bytes are streamed from
    /// the same file by `play_local`.
    Local(PathBuf),
    /// Header supplied directly, no backing file; sample bytes arrive
    /// through `push` from an external caller (e.g. a network stream).
    Streamed,
}

impl PlaybackSource {
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }

    #[must_use]
    pub fn is_streamed(&self) -> bool {
        matches!(self, Self::Streamed)
    }
}

/// Streams raw PCM bytes from a WAV source to an audio output sink.
///
/// The header is parsed once at construction and the sink is opened
/// immediately after, sized to the parsed format. If the platform cannot
/// provide a matching output line the player still constructs, but in a
/// silent state: `push` and `play_local` become inert, and
/// [`sink_available`](Self::sink_available) reports the degradation for
/// callers that want strict behaviour.
///
/// `close` consumes the player, so a closed player can be neither reused
/// nor closed twice.
pub struct StreamPlayer {
    header: WavHeader,
    source: PlaybackSource,
    sink: SinkState,
}

impl StreamPlayer {
    /// Opens a local WAV file: parses its first 44 bytes as the header and
    /// opens an output sink for the parsed format.
    ///
    /// # Errors
    ///
    /// - `PlayerError::TruncatedSource` if the file is shorter than 44
    ///   bytes. This is checked before any sink is opened.
    /// - `PlayerError::SourceRead` if the file cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PlayerError> {
        let path = path.as_ref();
        let header = read_file_header(path)?;
        Ok(Self {
            header,
            source: PlaybackSource::Local(path.to_path_buf()),
            sink: SinkState::open(&header),
        })
    }

    /// Like [`open`](Self::open), but with a caller-supplied sink instead
    /// of the rodio output line. Used by tests and by callers with their
    /// own output backend.
    pub fn open_with_sink<P: AsRef<Path>>(
        path: P,
        sink: Box<dyn AudioSink>,
    ) -> Result<Self, PlayerError> {
        let path = path.as_ref();
        let header = read_file_header(path)?;
        Ok(Self {
            header,
            source: PlaybackSource::Local(path.to_path_buf()),
            sink: SinkState::Active(sink),
        })
    }

    /// Constructs a streaming player from a standalone 44-byte header.
    /// Sample bytes are supplied externally through [`push`](Self::push).
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Header` if `header` is not exactly 44 bytes.
    pub fn from_header(header: &[u8]) -> Result<Self, PlayerError> {
        let header = WavHeader::parse(header)?;
        Ok(Self {
            header,
            source: PlaybackSource::Streamed,
            sink: SinkState::open(&header),
        })
    }

    /// Like [`from_header`](Self::from_header), with a caller-supplied sink.
    pub fn from_header_with_sink(
        header: &[u8],
        sink: Box<dyn AudioSink>,
    ) -> Result<Self, PlayerError> {
        let header = WavHeader::parse(header)?;
        Ok(Self {
            header,
            source: PlaybackSource::Streamed,
            sink: SinkState::Active(sink),
        })
    }

    /// The format parameters parsed at construction.
    #[must_use]
    pub fn header(&self) -> WavHeader {
        self.header
    }

    /// The source variant fixed at construction.
    #[must_use]
    pub fn source(&self) -> &PlaybackSource {
        &self.source
    }

    /// Returns true if the output sink opened successfully. When false,
    /// playback calls are silently inert.
    #[must_use]
    pub fn sink_available(&self) -> bool {
        self.sink.is_active()
    }

    /// Pushes a chunk of raw sample bytes to the sink, blocking until the
    /// sink accepts all of it. The caller controls chunk granularity; no
    /// size limit is imposed here.
    pub fn push(&mut self, chunk: &[u8]) {
        match &mut self.sink {
            SinkState::Active(sink) => {
                sink.write(chunk);
            }
            SinkState::Unavailable => {
                debug!("sink unavailable, dropping {} byte chunk", chunk.len());
            }
        }
    }

    /// Streams the backing file's sample data to the sink.
    ///
    /// Valid only for the `Local` source variant; for `Streamed` this is a
    /// no-op. The file is re-opened from the start, the 44-byte header is
    /// skipped by position, and the remainder is pushed to the sink two
    /// bytes at a time (one 16-bit little-endian sample slot per push).
    /// End-of-stream with fewer than two bytes left is normal completion;
    /// a trailing odd byte is dropped.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::SourceRead` for any I/O failure other than
    /// ordinary end-of-stream.
    pub fn play_local(&mut self) -> Result<(), PlayerError> {
        let path = match &self.source {
            PlaybackSource::Local(path) => path.clone(),
            PlaybackSource::Streamed => {
                debug!("play_local on a streamed source is a no-op");
                return Ok(());
            }
        };

        let mut reader = BufReader::new(File::open(&path)?);
        reader.seek(SeekFrom::Start(HEADER_LEN as u64))?;

        let mut pair = [0u8; 2];
        loop {
            match reader.read_exact(&mut pair) {
                Ok(()) => self.push(&pair),
                // Fewer than two bytes left: the stream is exhausted.
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(PlayerError::SourceRead(e)),
            }
        }

        debug!(path = %path.display(), "local playback complete");
        Ok(())
    }

    /// Shuts the sink down: drains buffered audio, stops the line, then
    /// releases it. Consumes the player; there is no way back to a usable
    /// state after close.
    pub fn close(mut self) {
        if let SinkState::Active(sink) = &mut self.sink {
            sink.drain();
            sink.stop();
        }
        // Dropping self releases the output line.
    }
}

impl std::fmt::Debug for StreamPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamPlayer")
            .field("header", &self.header)
            .field("source", &self.source)
            .field("sink_available", &self.sink.is_active())
            .finish_non_exhaustive()
    }
}

/// Reads the 44-byte header prefix of a local file.
///
/// The length check runs first so a truncated file fails before any sink
/// is opened.
fn read_file_header(path: &Path) -> Result<WavHeader, PlayerError> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    if len < HEADER_LEN as u64 {
        return Err(PlayerError::TruncatedSource { len });
    }

    let mut buf = [0u8; HEADER_LEN];
    file.read_exact(&mut buf)?;
    Ok(WavHeader::parse(&buf)?)
}
