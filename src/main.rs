//! wavplay CLI - smoke-test harness for the WAV playback pipeline.
//!
//! Prints the four parsed header fields of a canonical WAV file and,
//! with `--play`, streams its sample data to the default audio output.

use anyhow::{Context, Result};
use clap::Parser;

use wavplay::StreamPlayer;

/// Inspect and play canonical 44-byte-header WAV files.
#[derive(Debug, Parser)]
#[command(name = "wavplay", version, about)]
struct Cli {
    /// Path to a WAV file with a canonical 44-byte header.
    file: std::path::PathBuf,

    /// Stream the file's sample data to the audio output after printing
    /// the header.
    #[arg(long)]
    play: bool,

    /// Enable verbose (debug) logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = execute(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Parses the header, prints the four format fields, and optionally plays
/// the file.
fn execute(cli: Cli) -> Result<()> {
    let mut player = StreamPlayer::open(&cli.file)
        .with_context(|| format!("cannot open {}", cli.file.display()))?;

    let header = player.header();
    println!("sample rate:     {}", header.sample_rate);
    println!("audio format:    {}", header.audio_format);
    println!("channels:        {}", header.channels);
    println!("bits per sample: {}", header.bits_per_sample);

    if !header.is_pcm() {
        tracing::warn!("format tag is not 1 (PCM); the file is likely compressed");
    }

    if cli.play {
        if !player.sink_available() {
            tracing::warn!("no audio output available; playing silently");
        }
        player.play_local().context("playback failed")?;
    }
    player.close();

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file_only() {
        let cli = Cli::parse_from(["wavplay", "groove.wav"]);
        assert_eq!(cli.file, std::path::PathBuf::from("groove.wav"));
        assert!(!cli.play);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_play_flag() {
        let cli = Cli::parse_from(["wavplay", "--play", "groove.wav"]);
        assert!(cli.play);
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["wavplay", "-v", "groove.wav"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["wavplay"]).is_err());
    }
}
