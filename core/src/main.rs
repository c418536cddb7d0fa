use clap::Parser;
use log::{error, info};
use scoutmod_core::cli::{setup_logging, ExtractCli};
use scoutmod_core::collect::DEFAULT_OUTPUT_FILE;
use scoutmod_core::extract_to_csv;
use std::process;

fn main() {
    let cli = ExtractCli::parse();
    setup_logging(cli.verbose);

    if !cli.directory.is_dir() {
        eprintln!("Error: {} is not a directory", cli.directory.display());
        process::exit(1);
    }

    let output = cli
        .output
        .unwrap_or_else(|| cli.directory.join(DEFAULT_OUTPUT_FILE));
    info!("Processing directory: {}", cli.directory.display());

    match extract_to_csv(&cli.directory, &output) {
        Ok(report) => {
            println!(
                "Extracted {} records to {} ({} skipped)",
                report.rows.len(),
                output.display(),
                report.skipped.len()
            );
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
