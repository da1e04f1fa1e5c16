//! The 44-byte canonical WAV header and its fixed-offset fields.

use super::error::HeaderError;

/// Length of the canonical WAV header in bytes.
pub const HEADER_LEN: usize = 44;

/// Byte offsets of the four modeled format fields, all little-endian.
const OFFSET_AUDIO_FORMAT: usize = 20;
const OFFSET_CHANNELS: usize = 22;
const OFFSET_SAMPLE_RATE: usize = 24;
const OFFSET_BITS_PER_SAMPLE: usize = 34;

/// Format parameters decoded from a canonical WAV header.
///
/// The header is parsed once and is read-only thereafter. Only the four
/// fields below are modeled; the remaining header bytes (chunk IDs, sizes,
/// byte rate, block align) are treated as opaque. No chunk-ID validation
/// is performed: the caller is trusted to supply the first 44 bytes of a
/// canonical `RIFF....WAVEfmt ....data` file.
///
/// Values are returned exactly as encoded — a channel count of zero or an
/// absurd bit depth parses fine and surfaces later, when the output sink
/// refuses to open with that configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Audio format tag. 1 means uncompressed PCM; anything else means
    /// the file is compressed or uses a non-PCM encoding.
    pub audio_format: u16,
    /// Number of interleaved channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample, e.g. 16 for 16-bit audio.
    pub bits_per_sample: u16,
}

impl WavHeader {
    /// Parses a canonical WAV header from exactly 44 bytes.
    ///
    /// # Errors
    ///
    /// Returns `HeaderError::InvalidSize` if `bytes` is any length other
    /// than 44.
    pub fn parse(bytes: &[u8]) -> Result<Self, HeaderError> {
        if bytes.len() != HEADER_LEN {
            return Err(HeaderError::InvalidSize { len: bytes.len() });
        }

        Ok(Self {
            audio_format: read_u16(bytes, OFFSET_AUDIO_FORMAT),
            channels: read_u16(bytes, OFFSET_CHANNELS),
            sample_rate: read_u32(bytes, OFFSET_SAMPLE_RATE),
            bits_per_sample: read_u16(bytes, OFFSET_BITS_PER_SAMPLE),
        })
    }

    /// Returns true if the format tag indicates uncompressed PCM.
    #[must_use]
    pub fn is_pcm(&self) -> bool {
        self.audio_format == 1
    }

    /// Re-encodes the header as a canonical 44-byte buffer.
    ///
    /// The four modeled fields land at their fixed offsets; the chunk IDs
    /// and derived fields (byte rate, block align) are filled in so the
    /// result is a playable header for an empty `data` chunk. Parsing the
    /// result yields a `WavHeader` equal to `self`.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        // The derived fields are informational; parsing never reads them.
        // Extreme field values are legal (parse accepts anything), so the
        // products wrap instead of overflowing.
        let block_align =
            (u32::from(self.channels) * u32::from(self.bits_per_sample / 8)) as u16;
        let byte_rate = self.sample_rate.wrapping_mul(u32::from(block_align));

        let mut buf = [0u8; HEADER_LEN];
        buf[0..4].copy_from_slice(b"RIFF");
        buf[4..8].copy_from_slice(&36u32.to_le_bytes()); // rest-of-file size, no sample data
        buf[8..12].copy_from_slice(b"WAVE");
        buf[12..16].copy_from_slice(b"fmt ");
        buf[16..20].copy_from_slice(&16u32.to_le_bytes()); // fmt chunk size
        buf[20..22].copy_from_slice(&self.audio_format.to_le_bytes());
        buf[22..24].copy_from_slice(&self.channels.to_le_bytes());
        buf[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        buf[28..32].copy_from_slice(&byte_rate.to_le_bytes());
        buf[32..34].copy_from_slice(&block_align.to_le_bytes());
        buf[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        buf[36..40].copy_from_slice(b"data");
        buf[40..44].copy_from_slice(&0u32.to_le_bytes()); // data chunk size
        buf
    }
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
