//! # CWA Extract
//!
//! Extract a temperature or light time series from an Axivity AX3 `.cwa`
//! file, with optional central-moving-average smoothing and per-subject
//! summary statistics.
//!
//! The run is strictly sequential: decode the header once, stream data
//! blocks until the file is exhausted, optionally smooth, then write the
//! series. Smoothing runs before the output file is opened, so a failed
//! precondition never leaves a partial output file behind.

use std::fs::File;
use std::io::BufReader;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber;

mod cli;
mod cwa;
mod error;
mod extract;
mod output;

use cli::Args;
use cwa::protocol::HeaderBlock;
use cwa::timestamp::CwaTimestamp;
use error::Result;
use extract::{smooth::central_moving_average, Extractor};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    info!(
        "cwa-extract v{}: {:?} mode, input {}",
        env!("CARGO_PKG_VERSION"),
        args.channel_mode(),
        args.input.display()
    );

    run(&args)?;
    Ok(())
}

/// Execute one extraction run
fn run(args: &Args) -> Result<()> {
    let mode = args.channel_mode();

    let file = File::open(&args.input)?;
    let mut reader = BufReader::new(file);

    let mut extractor = Extractor::new(mode, args.strict);
    let header = extractor.read_header(&mut reader)?;
    log_header_details(&header);

    extractor.extract(&mut reader)?;
    let series = extractor.into_series();
    info!("extracted {} samples", series.len());

    // Smooth before touching the output path; a window that is too large
    // for the series must not leave a partial output file
    let values = match args.average {
        Some(window) => {
            let smoothed = central_moving_average(&series.values, window)?;
            info!(
                "central moving average (window {window}): {} samples",
                smoothed.len()
            );
            smoothed
        }
        None => series.values.clone(),
    };

    output::write_series_file(&args.output, mode, &series.timestamps, &values)?;
    info!("series written to {}", args.output.display());

    if let Some(summary_path) = &args.summary {
        // The aggregator sees the raw extracted sequences, never the
        // smoothed ones
        output::summary::append_summary(
            summary_path,
            &args.subject_id(),
            &series.timestamps,
            &series.values,
        )?;
        info!("summary row appended to {}", summary_path.display());
    }

    Ok(())
}

/// Log the decoded header fields
fn log_header_details(header: &HeaderBlock) {
    info!(
        "device {} session {} firmware rev {}",
        header.device_id, header.session_id, header.firmware_revision
    );
    info!(
        "logging {} to {} (capacity {}, 0 = unlimited)",
        CwaTimestamp::decode(header.logging_start),
        CwaTimestamp::decode(header.logging_end),
        header.logging_capacity
    );
    debug!(
        "sampling rate code 0x{:02X}, last change {}, UTC offset {} min (-1 = unknown)",
        header.sampling_rate,
        CwaTimestamp::decode(header.last_change),
        header.utc_offset
    );
}
