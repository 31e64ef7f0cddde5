// Main entry point - Configuration, wiring and report output
use std::sync::Arc;

use cookstove_telemetry::application::study_service::StudyService;
use cookstove_telemetry::infrastructure::config::{load_study_config, ReportFormat};
use cookstove_telemetry::infrastructure::csv_repository::CsvDatasetRepository;
use cookstove_telemetry::presentation::report::{render_json, render_text};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing (RUST_LOG, defaults to info)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let study = load_study_config()?;

    // Create repository (infrastructure layer)
    let columns = study.stoves.iter().chain(&study.fuels).cloned().collect();
    let repository = Arc::new(CsvDatasetRepository::new(&study.dataset_path).with_columns(columns));

    // Create service (application layer)
    let service = StudyService::new(repository, study.stoves, study.fuels, study.thresholds);

    tracing::info!("Analysing {}", study.dataset_path.display());
    let report = service.analyze()?;

    // Render (presentation layer)
    let output = match study.format {
        ReportFormat::Json => render_json(&report)?,
        ReportFormat::Text => render_text(&report),
    };
    println!("{}", output);

    Ok(())
}
