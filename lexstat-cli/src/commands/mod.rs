//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod run;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the frequency-analysis pipeline and render statistics
    Run(run::RunArgs),

    /// Print a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let run_cmd = Commands::Run(run::RunArgs {
            size_kb: Some(1),
            text: None,
            batch_size: None,
            refresh_ms: None,
            top: None,
            format: run::OutputFormat::Text,
            config: None,
            quiet: true,
            verbose: 0,
        });
        let debug_str = format!("{:?}", run_cmd);
        assert!(debug_str.contains("Run"));

        let gen_cmd = Commands::GenerateConfig(generate_config::GenerateConfigArgs {
            output: None,
        });
        assert!(format!("{:?}", gen_cmd).contains("GenerateConfig"));
    }
}
