//! Header parsing error types.

use thiserror::Error;

use super::header::HEADER_LEN;

/// Errors that can occur while decoding a canonical WAV header.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// The supplied header buffer is not exactly 44 bytes long.
    #[error("header must be exactly {HEADER_LEN} bytes, got {len}")]
    InvalidSize {
        /// Length of the buffer that was actually supplied.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_mentions_both_lengths() {
        let err = HeaderError::InvalidSize { len: 12 };
        let msg = err.to_string();
        assert!(msg.contains("44"));
        assert!(msg.contains("12"));
    }
}
