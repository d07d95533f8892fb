//! Analyze command implementation

use anyhow::{Context, Result};
use clap::Args;
use redupsim_core::{AnalysisConfig, Corpus, SimilarityAnalyzer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Corpus file, one `<code>,<sentence>` record per line
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Reference language code (default: ID)
    #[arg(short, long, value_name = "CODE", env = "REDUPSIM_REFERENCE")]
    pub reference: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Decimal places shown for scores (default: 3)
    #[arg(short, long, value_name = "DIGITS")]
    pub precision: Option<u32>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Score languages one after another instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Per-language score listing
    Text,
    /// Rounded analysis result as JSON
    Json,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting similarity analysis");
        log::debug!("Arguments: {:?}", self);

        let config = self.resolve_config()?;
        let analyzer = SimilarityAnalyzer::new(config).context("Invalid analysis settings")?;

        let corpus = Corpus::from_file(&self.input)?;
        log::info!(
            "Loaded {} languages: {}",
            corpus.len(),
            corpus.language_codes().join(", ")
        );

        let result = analyzer
            .analyze(&corpus)
            .with_context(|| format!("Failed to analyze {}", self.input.display()))?;

        let writer = self.open_output()?;
        let precision = analyzer.config().precision;
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, precision)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, precision)),
        };
        formatter.write_result(&result)?;
        formatter.finish()?;

        Ok(())
    }

    /// Defaults, overridden by the config file, overridden by flags
    pub fn resolve_config(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => AnalysisConfig::default(),
        };

        if let Some(reference) = &self.reference {
            config.reference_language = reference.clone();
        }
        if let Some(precision) = self.precision {
            config.precision = precision;
        }
        if self.sequential {
            config.parallel = false;
        }

        Ok(config)
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

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
