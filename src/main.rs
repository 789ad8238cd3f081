// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, LevelFilter};
use serde_json::json;
use std::path::{Path, PathBuf};

use subvtt::app_config::{self, Config, SubtitleFormat};
use subvtt::file_utils::FileManager;
use subvtt::logger::{self, ConsoleLogger};
use subvtt::webvtt::{self, format_vtt_timestamp};
use subvtt::{ConversionOutcome, Controller};

/// CLI Wrapper for SubtitleFormat to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliSubtitleFormat {
    Srt,
    Vtt,
}

impl From<CliSubtitleFormat> for SubtitleFormat {
    fn from(cli_format: CliSubtitleFormat) -> Self {
        match cli_format {
            CliSubtitleFormat::Srt => SubtitleFormat::Srt,
            CliSubtitleFormat::Vtt => SubtitleFormat::Vtt,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Off => app_config::LogLevel::Off,
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert WebVTT files to SRT or normalized WebVTT (default command)
    Convert(ConvertArgs),

    /// Print the cues parsed from a WebVTT file
    Inspect {
        /// WebVTT file to inspect
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Stream base timestamp in milliseconds to rebase cues against
        #[arg(short, long, allow_negative_numbers = true)]
        base_timestamp: Option<i64>,

        /// Print the document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions for subvtt
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug, Clone)]
struct ConvertArgs {
    /// Input WebVTT file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output directory (defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output subtitle format
    #[arg(short = 'F', long, value_enum)]
    format: Option<CliSubtitleFormat>,

    /// Stream base timestamp in milliseconds to rebase cues against
    #[arg(short, long, allow_negative_numbers = true)]
    base_timestamp: Option<i64>,

    /// Tag inserted before the output extension (e.g. 'en' gives movie.en.srt)
    #[arg(short, long)]
    suffix: Option<String>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Disable ANSI colors in console output
    #[arg(long)]
    no_ansi_color: bool,

    /// Also write the log to a file
    #[arg(long)]
    log_file: bool,
}

/// subvtt - WebVTT subtitle converter
///
/// Parses WebVTT subtitle segments, optionally rebases them against a live
/// stream's base timestamp, and writes SRT or normalized WebVTT.
#[derive(Parser, Debug)]
#[command(name = "subvtt")]
#[command(version)]
#[command(about = "WebVTT to SRT/WebVTT subtitle converter")]
#[command(long_about = "subvtt parses WebVTT subtitles and converts them to SRT or normalized WebVTT.

EXAMPLES:
    subvtt movie.vtt                          # Convert to movie.srt
    subvtt -F vtt -s clean movie.vtt          # Normalize to movie.clean.vtt
    subvtt -b 10000 segment.vtt               # Rebase cues by 10 seconds
    subvtt -f /subs/                          # Convert a whole directory tree
    subvtt inspect --json segment.vtt         # Dump parsed cues as JSON
    subvtt completions bash > subvtt.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically. Command line flags override config values.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input WebVTT file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output directory (defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output subtitle format
    #[arg(short = 'F', long, value_enum)]
    format: Option<CliSubtitleFormat>,

    /// Stream base timestamp in milliseconds to rebase cues against
    #[arg(short, long, allow_negative_numbers = true)]
    base_timestamp: Option<i64>,

    /// Tag inserted before the output extension (e.g. 'en' gives movie.en.srt)
    #[arg(short, long)]
    suffix: Option<String>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Disable ANSI colors in console output
    #[arg(long)]
    no_ansi_color: bool,

    /// Also write the log to a file
    #[arg(long)]
    log_file: bool,
}

fn main() -> Result<()> {
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subvtt", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Inspect { file, base_timestamp, json }) => {
            ConsoleLogger::new(LevelFilter::Warn, false).install()?;
            run_inspect(&file, base_timestamp, json)
        }
        Some(Commands::Convert(args)) => run_convert(args),
        None => {
            // Default behavior - use top-level args as the convert command
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            run_convert(ConvertArgs {
                input_path,
                output_dir: cli.output_dir,
                format: cli.format,
                base_timestamp: cli.base_timestamp,
                suffix: cli.suffix,
                force_overwrite: cli.force_overwrite,
                config_path: cli.config_path,
                log_level: cli.log_level,
                no_ansi_color: cli.no_ansi_color,
                log_file: cli.log_file,
            })
        }
    }
}

/// Load the config file and apply command line overrides
fn build_config(options: &ConvertArgs) -> Result<(Config, bool)> {
    let (mut config, created) = Config::load_or_create(&options.config_path)?;

    if let Some(format) = options.format {
        config.output_format = format.into();
    }
    if let Some(base) = options.base_timestamp {
        config.base_timestamp_ms = Some(base);
    }
    if let Some(suffix) = &options.suffix {
        config.output_suffix = Some(suffix.clone());
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }
    if options.no_ansi_color {
        config.no_ansi_color = true;
    }
    if options.log_file {
        config.write_log_file = true;
    }

    Ok((config, created))
}

fn install_logger(config: &Config) -> Result<Option<PathBuf>> {
    let mut console = ConsoleLogger::new(config.log_level.to_level_filter(), config.no_ansi_color);
    let mut log_path = None;

    if config.write_log_file {
        let (path, file) = logger::init_log_file(config.resolved_log_dir())?;
        console = console.with_log_file(file);
        log_path = Some(path);
    }

    console.install()?;
    Ok(log_path)
}

fn run_convert(options: ConvertArgs) -> Result<()> {
    let (config, created) = build_config(&options)?;
    let log_path = install_logger(&config)?;

    if created {
        warn!("Config file not found at '{}', created default config.", options.config_path);
    }
    if let Some(path) = log_path {
        info!("Writing log to {:?}", path);
    }

    let controller = Controller::with_config(config).context("Configuration validation failed")?;

    if options.input_path.is_file() {
        let output_dir = match &options.output_dir {
            Some(dir) => dir.clone(),
            None => options
                .input_path
                .parent()
                .unwrap_or(Path::new("."))
                .to_path_buf(),
        };

        match controller.run(&options.input_path, &output_dir, options.force_overwrite)? {
            ConversionOutcome::Converted(path) => info!("Success: {:?}", path),
            ConversionOutcome::Skipped(path) => info!("Nothing written for {:?}", path),
        }
    } else if options.input_path.is_dir() {
        if options.output_dir.is_some() {
            warn!("--output-dir is ignored in folder mode; outputs are written next to each input");
        }
        let summary = controller.run_folder(&options.input_path, options.force_overwrite)?;
        if summary.failed > 0 {
            return Err(anyhow!(
                "{} of {} file(s) failed to convert",
                summary.failed,
                summary.total()
            ));
        }
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    Ok(())
}

fn run_inspect(file: &Path, base_timestamp: Option<i64>, as_json: bool) -> Result<()> {
    let content = FileManager::read_to_string(file)?;
    let document = webvtt::parse(&content, base_timestamp)
        .with_context(|| format!("Failed to parse {:?}", file))?;

    if as_json {
        let cues: Vec<_> = document
            .cues
            .iter()
            .map(|cue| {
                json!({
                    "start_ms": cue.start_ms(),
                    "end_ms": cue.end_ms(),
                    "payload": cue.payload,
                    "settings": cue.settings,
                })
            })
            .collect();
        let value = json!({
            "mpegts_timestamp": document.mpegts_timestamp,
            "cues": cues,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("MPEGTS: {}", document.mpegts_timestamp);
    println!("Cues: {}", document.cues.len());
    for (index, cue) in document.cues.iter().enumerate() {
        println!(
            "{:>4}  {} --> {}  {}",
            index + 1,
            format_vtt_timestamp(cue.start),
            format_vtt_timestamp(cue.end),
            cue.payload
        );
    }
    Ok(())
}
