//! Lexstat command-line entry point

use clap::Parser;
use lexstat_cli::commands::Commands;

/// Streaming character/word frequency analysis
#[derive(Debug, Parser)]
#[command(name = "lexstat", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_run() {
        let cli = Cli::parse_from(["lexstat", "run", "--text", "cat dog.", "--quiet"]);
        assert!(matches!(cli.command, Commands::Run(_)));
    }

    #[test]
    fn test_cli_parses_generate_config() {
        let cli = Cli::parse_from(["lexstat", "generate-config"]);
        assert!(matches!(cli.command, Commands::GenerateConfig(_)));
    }
}
