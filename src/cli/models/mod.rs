//! Models command - prints the model catalog

use clap::Args;

use crate::api::types::{ApiModel, ModelsResponse};
use crate::domain::{ModelEntry, OPENAI_CATALOG};

/// Arguments for the models command
#[derive(Args, Clone)]
pub struct ModelsArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ModelsArgs) -> anyhow::Result<()> {
    super::bootstrap();

    if args.json {
        let models = OPENAI_CATALOG
            .entries()
            .iter()
            .map(ApiModel::from_domain)
            .collect();
        let response = ModelsResponse::new(OPENAI_CATALOG.default_model(), models);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        for entry in OPENAI_CATALOG.entries() {
            println!("{}", describe(entry, OPENAI_CATALOG.default_model()));
        }
    }

    Ok(())
}

fn describe(entry: &ModelEntry, default_model: &str) -> String {
    let mut line = format!("{:<24} {:<7}", entry.name(), entry.generation());

    if entry.supports_dimensions() {
        let dims: Vec<String> = entry
            .allowed_dimensions()
            .iter()
            .map(|d| d.to_string())
            .collect();
        line.push_str(&format!(" dimensions=[{}]", dims.join(" ")));
    }

    if entry.is_versioned() {
        line.push_str(&format!(" versions=[{}]", entry.allowed_versions().join(" ")));
    }

    if let Some(version) = entry.default_version() {
        line.push_str(&format!(" default_version={}", version));
    }

    if entry.name() == default_model {
        line.push_str(" (default)");
    }

    line.trim_end().to_string()
}
