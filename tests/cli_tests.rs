//! End-to-end tests for the wavplay binary.
//!
//! These run the real binary against generated fixture files. Playback is
//! not exercised here (CI containers have no audio device); the header
//! inspection path and the error paths are.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

use wavplay::WavHeader;

fn wavplay() -> Command {
    Command::cargo_bin("wavplay").unwrap()
}

/// Writes a header-only fixture file and returns its guard.
fn fixture(header: WavHeader) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&header.to_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_prints_four_header_fields() {
    let file = fixture(WavHeader {
        audio_format: 1,
        channels: 1,
        sample_rate: 44_100,
        bits_per_sample: 16,
    });

    wavplay()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("sample rate:     44100"))
        .stdout(predicate::str::contains("audio format:    1"))
        .stdout(predicate::str::contains("channels:        1"))
        .stdout(predicate::str::contains("bits per sample: 16"));
}

#[test]
fn test_stereo_header_fields() {
    let file = fixture(WavHeader {
        audio_format: 1,
        channels: 2,
        sample_rate: 48_000,
        bits_per_sample: 16,
    });

    wavplay()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("sample rate:     48000"))
        .stdout(predicate::str::contains("channels:        2"));
}

#[test]
fn test_truncated_file_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0u8; 10]).unwrap();
    file.flush().unwrap();

    wavplay()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("44"));
}

#[test]
fn test_missing_file_fails() {
    wavplay()
        .arg("/nonexistent/path/groove.wav")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn test_no_arguments_shows_usage() {
    wavplay()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
