use clap::Parser;
use log::{error, info};
use scoutmod_core::cli::{setup_logging, OutputFormat, ScoutmodCli};
use scoutmod_core::render::save_overlay;
use scoutmod_core::{ClassifierConfig, ModulationAnalysis, RenderConfig, TextReport};
use std::path::Path;
use std::process;

fn main() {
    let cli = ScoutmodCli::parse();
    setup_logging(cli.verbose);

    if !cli.directory.is_dir() {
        eprintln!("Error: {} is not a directory", cli.directory.display());
        process::exit(1);
    }

    let config = ClassifierConfig::default().with_markers(&cli.markers);
    info!("Scout markers: {:?}", config.markers);

    let analysis = match ModulationAnalysis::from_directory(&cli.directory, &config) {
        Ok(analysis) => analysis,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let output_dir = cli.output.as_deref().unwrap_or(&cli.directory);
    let render_config = RenderConfig::default().with_size(cli.width, cli.height);
    if let Err(e) = write_overlays(&analysis, output_dir, &render_config) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    output_report(&analysis, cli.format);
}

fn write_overlays(
    analysis: &ModulationAnalysis,
    output_dir: &Path,
    config: &RenderConfig,
) -> scoutmod_core::Result<()> {
    std::fs::create_dir_all(output_dir)?;
    for (i, reference) in analysis.references.iter().enumerate() {
        let canvas = analysis.render(reference, config)?;
        let path = output_dir.join(format!("scout_modulation_{}.png", i + 1));
        save_overlay(&canvas, &path)?;
        info!(
            "Overlay for {} saved to {}",
            reference.record.file_path.display(),
            path.display()
        );
    }
    Ok(())
}

fn output_report(analysis: &ModulationAnalysis, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", TextReport::new(analysis)),
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match output_json(analysis) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}

#[cfg(feature = "json")]
fn output_json(analysis: &ModulationAnalysis) -> Result<String, serde_json::Error> {
    use serde::Serialize;

    #[derive(Serialize)]
    struct AnalysisJson<'a> {
        references: Vec<ReferenceJson<'a>>,
        profile: &'a scoutmod_core::ExposureProfile,
    }

    #[derive(Serialize)]
    struct ReferenceJson<'a> {
        file_path: String,
        series_description: Option<&'a str>,
        geometry: scoutmod_core::ReferenceGeometry,
        vertical_extent: f64,
    }

    let output = AnalysisJson {
        references: analysis
            .references
            .iter()
            .map(|r| ReferenceJson {
                file_path: r.record.file_path.display().to_string(),
                series_description: r.record.series_description.as_deref(),
                geometry: r.geometry,
                vertical_extent: r.vertical_extent(),
            })
            .collect(),
        profile: &analysis.profile,
    };

    serde_json::to_string_pretty(&output)
}
