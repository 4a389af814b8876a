//! Command-line options
//!
//! Parsing, usage and `--help` come from clap. Range checks stay in
//! [`PlaybackConfig::validate`], which [`CliOptions::playback_config`] runs
//! after parsing.

use crate::playback::{
    PlaybackConfig, PlaybackError, DEFAULT_FRAME_RATE, DEFAULT_ITEM_COUNT,
    DEFAULT_STEPS_PER_FRAME,
};
use crate::sort::Algorithm;
use clap::Parser;
use std::path::PathBuf;

const KEYS_HELP: &str = "Keys:
  Space  next algorithm    p  pause/resume    r  reset
  Up/Right  faster         Down/Left  slower  q/Esc  quit";

/// Everything the binary needs to know before starting
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "sortty")]
#[command(author, version, about, long_about = None, after_help = KEYS_HELP)]
pub struct CliOptions {
    /// Number of values to sort
    #[arg(short = 'n', long, value_name = "N", default_value_t = DEFAULT_ITEM_COUNT)]
    pub items: usize,

    /// Steps per frame, 1-100
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_STEPS_PER_FRAME)]
    pub speed: usize,

    /// Frames per second
    #[arg(long, value_name = "N", default_value_t = DEFAULT_FRAME_RATE)]
    pub fps: u32,

    /// Seed for reproducible permutations
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// quick, heap, bubble, insertion or selection
    #[arg(short, long, value_name = "NAME", default_value = "quick")]
    pub algorithm: Algorithm,

    /// Write logs to PATH (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Compare all algorithms on one permutation and exit
    #[arg(long)]
    pub report: bool,
}

impl CliOptions {
    /// Playback settings from the parsed flags, checked for range errors
    pub fn playback_config(&self) -> Result<PlaybackConfig, PlaybackError> {
        let config = PlaybackConfig {
            item_count: self.items,
            steps_per_frame: self.speed,
            frame_rate: self.fps,
            seed: self.seed,
            algorithm: self.algorithm,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortError;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<CliOptions, clap::Error> {
        CliOptions::try_parse_from(std::iter::once("sortty").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_definition_is_consistent() {
        CliOptions::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_gives_defaults() {
        let options = parse(&[]).unwrap();
        assert_eq!(options.playback_config().unwrap(), PlaybackConfig::default());
        assert_eq!(options.log_file, None);
        assert!(!options.report);
    }

    #[test]
    fn test_all_flags() {
        let options = parse(&[
            "--items",
            "20",
            "--speed=5",
            "--fps",
            "30",
            "--seed",
            "42",
            "-a",
            "heap",
            "--log-file",
            "sortty.log",
            "--report",
        ])
        .unwrap();

        let config = options.playback_config().unwrap();
        assert_eq!(config.item_count, 20);
        assert_eq!(config.steps_per_frame, 5);
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.algorithm, Algorithm::Heap);
        assert_eq!(options.log_file, Some(PathBuf::from("sortty.log")));
        assert!(options.report);
    }

    #[test]
    fn test_short_flags_and_algorithm_spellings() {
        let options = parse(&["-n", "8", "-s", "3", "--algorithm", "Insertion-Sort"]).unwrap();
        assert_eq!(options.items, 8);
        assert_eq!(options.speed, 3);
        assert_eq!(options.algorithm, Algorithm::Insertion);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse(&["--bogus"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert!(parse(&["--items"]).is_err());
        assert_eq!(
            parse(&["--items", "many"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["--algorithm", "bogo"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(parse(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_range_errors_after_parsing() {
        let options = parse(&["--items", "0"]).unwrap();
        assert_eq!(
            options.playback_config(),
            Err(PlaybackError::Sort(SortError::InvalidItemCount(0)))
        );

        let options = parse(&["--speed", "101"]).unwrap();
        assert!(matches!(
            options.playback_config(),
            Err(PlaybackError::StepsPerFrameOutOfRange { value: 101, .. })
        ));

        let options = parse(&["--fps", "0"]).unwrap();
        assert_eq!(options.playback_config(), Err(PlaybackError::InvalidFrameRate));
    }

    #[test]
    fn test_help_lists_keys() {
        let help = CliOptions::command().render_help().to_string();
        assert!(help.contains("--items"));
        assert!(help.contains("q/Esc  quit"));
    }
}
