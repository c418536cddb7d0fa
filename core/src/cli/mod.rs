pub mod report;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for ctexpo
#[derive(Parser, Debug)]
#[command(name = "ctexpo")]
#[command(about = "Extract CT-Expo acquisition parameters from a directory of DICOM files")]
#[command(version)]
pub struct ExtractCli {
    /// Directory containing DICOM files (walked recursively)
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Output CSV file [default: DIRECTORY/dicom_parameters_for_ct_expo.csv]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command-line arguments for scoutmod
#[derive(Parser, Debug)]
#[command(name = "scoutmod")]
#[command(about = "Overlay CT tube current modulation on the scout view")]
#[command(version)]
pub struct ScoutmodCli {
    /// Directory containing the scout and slice DICOM files
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Directory for the rendered overlays [default: DIRECTORY]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Overlay width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Overlay height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Additional SeriesDescription marker identifying scout views
    #[arg(short, long = "marker", value_name = "TEXT")]
    pub markers: Vec<String>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// Initializes env_logger at Info, or Debug when verbose
///
/// `RUST_LOG` still applies on top of the chosen level.
pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
