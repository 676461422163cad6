//! Validate command - checks a class definition file

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::domain::{ClassDefinition, ResolvedVectorizerSettings};
use crate::infrastructure::services::VectorizerService;

/// Arguments for the validate command
#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Path to a class definition in JSON
    pub file: PathBuf,

    /// Module config key to read settings from (overrides config)
    #[arg(long)]
    pub module: Option<String>,
}

/// Validate the class and print its resolved settings as JSON
pub async fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let mut config = super::bootstrap();
    if let Some(module) = args.module {
        config.vectorizer.module_name = module;
    }

    let service = VectorizerService::from_config(&config.vectorizer)?;
    let class = read_class(&args.file).await?;
    let resolved = validate(&service, &class)?;

    println!("{}", serde_json::to_string_pretty(&resolved)?);

    Ok(())
}

async fn read_class(path: &Path) -> anyhow::Result<ClassDefinition> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a valid class definition", path.display()))
}

fn validate(
    service: &VectorizerService,
    class: &ClassDefinition,
) -> anyhow::Result<ResolvedVectorizerSettings> {
    Ok(service.validate_class(class)?)
}
