//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `phishing_detector` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use phishing_detector::config::DEFAULT_SCHEMA_PATH;
use phishing_detector::initialization::init_logger_with;
use phishing_detector::server::{start_server, AppState};
use phishing_detector::{Cli, Command, ExtractorConfig, FeatureExtractor, FeatureSchema, LinearModel};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.into(), cli.log_format)
        .context("Failed to initialize logger")?;

    let config = ExtractorConfig::from(&cli.network);

    if let Err(e) = run(cli.command, &config).await {
        eprintln!("phishing_detector error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(command: Command, config: &ExtractorConfig) -> Result<()> {
    match command {
        Command::Extract { url, schema } => {
            let schema = load_schema(schema.as_deref());
            let extractor = FeatureExtractor::from_config(config, schema)
                .context("Failed to initialize feature extractor")?;

            let features = extractor.extract(url.trim()).await;
            let json = serde_json::to_string_pretty(&features)
                .context("Failed to serialize feature vector")?;
            println!("{}", json);
            Ok(())
        }
        Command::Serve {
            model,
            schema,
            bind,
            port,
        } => {
            let classifier = LinearModel::load(&model)
                .with_context(|| format!("Failed to load model from {}", model.display()))?;
            log::info!(
                "Loaded model from {} ({} weights)",
                model.display(),
                classifier.weights.len()
            );

            let schema = load_schema(schema.as_deref());
            let extractor = FeatureExtractor::from_config(config, schema)
                .context("Failed to initialize feature extractor")?;

            let state = AppState::new(extractor, Arc::new(classifier));
            start_server(&bind, port, state).await
        }
    }
}

fn load_schema(path: Option<&Path>) -> FeatureSchema {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA_PATH));
    FeatureSchema::load_or_default(&path)
}
