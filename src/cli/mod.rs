//! CLI module
//!
//! Provides subcommands:
//! - `serve`: HTTP API for class validation and the model catalog
//! - `validate`: check a class definition file
//! - `models`: print the model catalog

pub mod models;
pub mod serve;
pub mod validate;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Pre-flight validation of OpenAI vectorizer settings
#[derive(Parser)]
#[command(name = "openai-vectorizer-validator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Validate a class definition JSON file
    Validate(validate::ValidateArgs),

    /// List supported models
    Models(models::ModelsArgs),
}

/// Load configuration and install logging; falls back to defaults on load errors
fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    logging::init_logging(&config.logging);

    if let Some(e) = load_error {
        warn!("Failed to load configuration, using defaults: {}", e);
    }

    config
}
