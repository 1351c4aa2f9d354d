// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::glossary::Glossary;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod chunker;
mod errors;
mod file_utils;
mod glossary;
mod language_utils;
mod pacing;
mod progress;
mod providers;
mod translation_service;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate documentation files in place (default command)
    #[command(alias = "translate")]
    Translate(TranslateArgs),

    /// Generate shell completions for adocai
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Directory scanned recursively for files to translate
    #[arg(value_name = "SOURCE_DIR")]
    source_dir: PathBuf,

    /// Model name to use for translation
    #[arg(value_name = "MODEL_NAME")]
    model: Option<String>,

    /// Glossary file (flat JSON object of source -> target terms)
    #[arg(value_name = "GLOSSARY_FILE")]
    glossary: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Filename suffix of files to translate
    #[arg(short, long)]
    extension: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// adocai - AI-powered in-place AsciiDoc translation
///
/// A batch translation tool that walks a documentation tree and rewrites
/// each file with its translation, preserving AsciiDoc markup and enforcing
/// a glossary of fixed term translations.
#[derive(Parser, Debug)]
#[command(name = "adocai")]
#[command(version = "1.0.0")]
#[command(about = "AI-powered in-place AsciiDoc translation tool")]
#[command(long_about = "adocai walks a directory, translates every matching AsciiDoc file through an
OpenAI-compatible chat-completion endpoint, and overwrites the file in place.
Completed files are recorded in a progress file so interrupted runs resume
where they left off.

EXAMPLES:
    adocai ./docs                               # Translate using default config
    adocai ./docs DeepSeek-V3.2 glossary.json   # Model and glossary from the command line
    adocai -e .asciidoc ./docs                  # Translate a different suffix
    adocai --log-level debug ./docs             # Verbose logging
    adocai completions bash > adocai.bash       # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically. The API key is read from the ADOCAI_API_KEY
    (or OPENAI_API_KEY) environment variable when the config carries none.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory scanned recursively for files to translate
    #[arg(value_name = "SOURCE_DIR")]
    source_dir: Option<PathBuf>,

    /// Model name to use for translation
    #[arg(value_name = "MODEL_NAME")]
    model: Option<String>,

    /// Glossary file (flat JSON object of source -> target terms)
    #[arg(value_name = "GLOSSARY_FILE")]
    glossary: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Filename suffix of files to translate
    #[arg(short, long)]
    extension: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // One timestamped line per action, on standard output
            let now = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stdout = std::io::stdout();
            let _ = writeln!(stdout, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "adocai", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let source_dir = cli.source_dir.ok_or_else(|| {
                anyhow!("Usage: adocai <SOURCE_DIR> [MODEL_NAME] [GLOSSARY_FILE]")
            })?;

            let translate_args = TranslateArgs {
                source_dir,
                model: cli.model,
                glossary: cli.glossary,
                config_path: cli.config_path,
                extension: cli.extension,
                log_level: cli.log_level,
            };
            run_translate(translate_args).await
        }
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        // Override config with CLI options if provided
        if let Some(model) = &options.model {
            config.translation.model = model.clone();
        }

        if let Some(glossary_path) = &options.glossary {
            config.glossary.file = glossary_path.to_string_lossy().into_owned();
        }

        if let Some(extension) = &options.extension {
            config.files.extension = extension.clone();
        }

        // Update log level in config if specified via command line
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let mut config = Config::default();

        if let Some(model) = &options.model {
            config.translation.model = model.clone();
        }
        if let Some(glossary_path) = &options.glossary {
            config.glossary.file = glossary_path.to_string_lossy().into_owned();
        }
        if let Some(extension) = &options.extension {
            config.files.extension = extension.clone();
        }
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        // Just update the max level without reinitializing the logger
        log::set_max_level(level_filter(&config.log_level));
    }

    // Abort before touching any file when the source directory is wrong
    if !options.source_dir.is_dir() {
        return Err(anyhow!(
            "{} is not a valid directory",
            options.source_dir.display()
        ));
    }

    // Missing glossary degrades to empty with a warning; malformed is fatal
    let glossary = Glossary::load(&config.glossary.file)?;

    // Create controller and run the walk
    let controller = Controller::with_config(config, glossary)?;
    controller.run_folder(&options.source_dir).await?;

    Ok(())
}
