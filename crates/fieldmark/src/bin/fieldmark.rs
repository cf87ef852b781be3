//! Classify one frame of detections from JSON.
//!
//! Reads a `Frame` (corners + field objects) from a file or stdin, runs the
//! corner classifier, and writes the annotated frame plus the per-frame
//! summary as JSON.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{info, LevelFilter};
use serde::Serialize;

use fieldmark::{classify_frame, ClassifierParams, Frame, FrameIoError, FrameSummary};

#[derive(Parser, Debug)]
#[command(name = "fieldmark", about = "Field landmark disambiguation", version)]
struct Cli {
    /// Input frame JSON; reads stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output path; writes stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Allowed error as a fraction of anchor range.
    #[arg(long)]
    error_frac: Option<f32>,

    /// Floor on the allowed error, in centimeters.
    #[arg(long)]
    min_error: Option<f32>,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pretty: bool,

    /// Log candidate narrowing per corner to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Output {
    frame: Frame,
    summary: FrameSummary,
}

fn run(cli: Cli) -> Result<(), FrameIoError> {
    let mut frame = match &cli.input {
        Some(path) => Frame::from_json_reader(File::open(path)?)?,
        None => Frame::from_json_reader(std::io::stdin().lock())?,
    };

    let mut params = ClassifierParams::default();
    if let Some(frac) = cli.error_frac {
        params.distance_error_frac = frac;
    }
    if let Some(min) = cli.min_error {
        params.min_allowed_error = min;
    }

    let summary = classify_frame(&mut frame, &params);
    info!(
        "classified {} corners: {} resolved, {} ambiguous, {} unresolved",
        frame.corners.len(),
        summary.resolved,
        summary.ambiguous,
        summary.unresolved
    );

    let output = Output { frame, summary };
    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    match &cli.output {
        Some(path) => {
            let mut file = File::create(path)?;
            writeln!(file, "{json}")?;
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = fieldmark::core::init_with_level(level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fieldmark: {err}");
            ExitCode::FAILURE
        }
    }
}
