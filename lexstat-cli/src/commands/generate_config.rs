//! Generate-config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Write the configuration to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let toml_str = CliConfig::default().to_toml()?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &toml_str)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Configuration written to {}", path.display());
            }
            None => print!("{toml_str}"),
        }

        Ok(())
    }
}
