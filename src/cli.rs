//! # Command Line Interface
//!
//! Argument parsing and run-configuration validation. Exactly one channel
//! mode must be selected per run; mode conflicts are rejected before any
//! file I/O happens.

use std::path::{Path, PathBuf};

use clap::{ArgGroup, Parser};

use crate::extract::ChannelMode;

/// Extract a temperature or light time series from an Axivity AX3 .cwa file
#[derive(Debug, Parser)]
#[command(name = "cwa-extract", version, about)]
#[command(group(ArgGroup::new("mode").required(true).multiple(false)))]
pub struct Args {
    /// Temperature mode: convert the raw thermistor channel to Celsius
    #[arg(short = 't', long, group = "mode")]
    pub temperature: bool,

    /// Light mode: emit the raw light channel, no unit conversion
    #[arg(short = 'l', long, group = "mode")]
    pub light: bool,

    /// Path to the .cwa input file
    #[arg(short = 'i', long, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to the output series file to generate
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: PathBuf,

    /// Smooth the series with a central moving average of this window size
    #[arg(short = 'a', long = "average", value_name = "WINDOW")]
    pub average: Option<usize>,

    /// Append per-subject summary statistics to this file
    #[arg(short = 's', long, value_name = "PATH")]
    pub summary: Option<PathBuf>,

    /// Warn about record integrity anomalies (bad magic, checksum, length)
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    /// The selected channel mode
    ///
    /// clap's arg group guarantees exactly one of the two flags is set.
    pub fn channel_mode(&self) -> ChannelMode {
        if self.temperature {
            ChannelMode::Temperature
        } else {
            ChannelMode::Light
        }
    }

    /// Subject identifier derived from the input filename: the stem up to
    /// the first underscore (cohort files are named `<id>_<session>.cwa`)
    pub fn subject_id(&self) -> String {
        subject_id_from_path(&self.input)
    }
}

fn subject_id_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match stem.find('_') {
        Some(pos) => stem[..pos].to_string(),
        None => stem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("cwa-extract").chain(args.iter().copied()))
    }

    #[test]
    fn test_temperature_mode() {
        let args = parse(&["-t", "-i", "in.cwa", "-o", "out.csv"]).unwrap();
        assert_eq!(args.channel_mode(), ChannelMode::Temperature);
        assert!(args.average.is_none());
        assert!(!args.strict);
    }

    #[test]
    fn test_light_mode_with_window() {
        let args = parse(&["-l", "-i", "in.cwa", "-o", "out.csv", "-a", "50"]).unwrap();
        assert_eq!(args.channel_mode(), ChannelMode::Light);
        assert_eq!(args.average, Some(50));
    }

    #[test]
    fn test_both_modes_rejected() {
        assert!(parse(&["-t", "-l", "-i", "in.cwa", "-o", "out.csv"]).is_err());
    }

    #[test]
    fn test_missing_mode_rejected() {
        assert!(parse(&["-i", "in.cwa", "-o", "out.csv"]).is_err());
    }

    #[test]
    fn test_missing_input_rejected() {
        assert!(parse(&["-t", "-o", "out.csv"]).is_err());
    }

    #[test]
    fn test_subject_id_from_cohort_filename() {
        let args = parse(&["-t", "-i", "/data/1234567_90001_0_0.cwa", "-o", "out.csv"]).unwrap();
        assert_eq!(args.subject_id(), "1234567");
    }

    #[test]
    fn test_subject_id_without_underscore() {
        let args = parse(&["-t", "-i", "sample.cwa", "-o", "out.csv"]).unwrap();
        assert_eq!(args.subject_id(), "sample");
    }
}
