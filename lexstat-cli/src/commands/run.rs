//! Run command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

use lexstat_core::{
    LoremIpsumSource, Pipeline, PipelineConfig, StrSource, TextSource,
};

use crate::config::CliConfig;
use crate::output::{DisplayLimits, JsonFormatter, StatsFormatter, TextFormatter};
use crate::render::LiveRenderer;

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Kilobytes of synthetic lorem-ipsum text to analyze
    #[arg(short, long, value_name = "KB")]
    pub size_kb: Option<usize>,

    /// Analyze a literal string instead of the synthetic source
    #[arg(short, long, value_name = "TEXT", conflicts_with = "size_kb")]
    pub text: Option<String>,

    /// Characters read from the source per batch
    #[arg(short, long, value_name = "CHARS")]
    pub batch_size: Option<usize>,

    /// Milliseconds between statistics polls
    #[arg(short, long, value_name = "MS")]
    pub refresh_ms: Option<u64>,

    /// Number of most-frequent words to display
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned statistics tables
    Text,
    /// JSON snapshot with derived rankings
    Json,
}

impl RunArgs {
    /// Execute the run command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting frequency analysis");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let batch_size = self.batch_size.unwrap_or(file_config.pipeline.batch_size);
        let mut builder = PipelineConfig::builder()
            .batch_size(batch_size)
            .publish_every(file_config.pipeline.publish_every);
        if file_config.pipeline.queue_capacity > 0 {
            builder = builder.queue_capacity(file_config.pipeline.queue_capacity);
        }
        let pipeline = Pipeline::new(builder.build()?)?;

        let (source, expected_chars): (Box<dyn TextSource + Send>, u64) = match &self.text {
            Some(text) => (
                Box::new(StrSource::new(text)),
                text.chars().count() as u64 + 1,
            ),
            None => {
                let kb = self.size_kb.unwrap_or(file_config.source.size_kb);
                (
                    Box::new(LoremIpsumSource::new(kb)),
                    kb as u64 * 1024 + 1,
                )
            }
        };

        let handle = pipeline.spawn(source)?;

        let refresh = Duration::from_millis(self.refresh_ms.unwrap_or(file_config.render.refresh_ms));
        let mut renderer = LiveRenderer::new(refresh, self.quiet);
        renderer.init(expected_chars);
        renderer.watch(&handle.stats());
        renderer.finish();

        // One final read after completion: the joined snapshot is exact.
        let outcome = handle.join().context("pipeline failed")?;

        let limits = DisplayLimits {
            top_words: self.top.unwrap_or(file_config.render.top_words),
            extreme_words: file_config.render.extreme_words,
        };
        match self.format {
            OutputFormat::Text => {
                TextFormatter::stdout().format_stats(&outcome.snapshot, limits)?
            }
            OutputFormat::Json => {
                JsonFormatter::stdout().format_stats(&outcome.snapshot, limits)?
            }
        }

        if let Some(err) = outcome.source_error {
            log::warn!("source ended abnormally: {err}");
            eprintln!("warning: source ended abnormally: {err}");
        }

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
