//! vtt-convert
//!
//! Command line front end: converts a WebVTT file to SubRip, a cue sheet, or a
//! plain-text transcript written next to the source.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vtt_convert::config_file::{generate_default_config, ConfigFile};
use vtt_convert::{ConversionReport, ConvertConfig, ConvertError, Converter, OutputFormat};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "vtt-convert";

#[derive(Parser, Debug)]
#[command(name = "vtt-convert")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Fail with an error when the source file does not exist
    #[arg(long, global = true)]
    strict: bool,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert to a cue sheet (or a plain-text transcript)
    Cue {
        /// VTT file to convert
        #[arg(value_name = "SOURCEFILE")]
        source: PathBuf,

        /// Minimum interval in seconds between cue entries
        #[arg(short, long)]
        interval: Option<f64>,

        /// Output plain text, not a cue sheet
        #[arg(short, long)]
        plain: bool,
    },
    /// Convert to SubRip subtitles
    Srt {
        /// VTT file to convert
        #[arg(value_name = "SOURCEFILE")]
        source: PathBuf,
    },
    /// Write a default configuration file
    InitConfig {
        /// Where to write the file
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", APP_NAME, e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.log_level, &config.log_format);
    tracing::debug!("{} v{} starting", APP_NAME, VERSION);
    tracing::debug!("Configuration loaded: {:?}", config);

    let (source, format) = match &args.command {
        Command::InitConfig { path } => {
            return match generate_default_config(path) {
                Ok(()) => {
                    tracing::info!("Wrote default configuration to {}", path.display());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("{}: {}", APP_NAME, e);
                    ExitCode::FAILURE
                }
            };
        }
        Command::Cue { source, plain, .. } => {
            let format = if *plain {
                OutputFormat::Plain
            } else {
                OutputFormat::Cue
            };
            (source, format)
        }
        Command::Srt { source } => (source, OutputFormat::Srt),
    };

    let strict = config.strict;
    let converter = Converter::new(config);
    ExitCode::from(exit_status(converter.convert(source, format), strict))
}

/// Process exit status for a conversion result.
///
/// A missing source is only a failure in strict mode; otherwise it is logged
/// and the run succeeds without writing anything.
fn exit_status(result: vtt_convert::Result<ConversionReport>, strict: bool) -> u8 {
    match result {
        Ok(report) => {
            tracing::debug!("{:?}", report);
            0
        }
        Err(ConvertError::SourceNotFound(path)) if !strict => {
            tracing::warn!(
                "Source file {} does not exist, nothing written",
                path.display()
            );
            0
        }
        Err(e) => {
            eprintln!("{}: {}", APP_NAME, e);
            1
        }
    }
}

/// Build the configuration from the optional config file and CLI overrides
fn load_config(args: &Args) -> vtt_convert::Result<ConvertConfig> {
    let mut config = match &args.config {
        Some(path) => ConfigFile::from_file(path)?.into_convert_config(),
        None => ConvertConfig::default(),
    };

    if args.strict {
        config.strict = true;
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    if let Command::Cue {
        interval: Some(interval),
        ..
    } = &args.command
    {
        config.cue.interval_secs = *interval;
    }

    config.validate()?;
    Ok(config)
}

/// Initialize logging with tracing
fn init_logging(level: &str, format: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("vtt_convert={}", level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
