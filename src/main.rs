//! Batch Resizer CLI
//!
//! Resizes and re-encodes every supported image of a folder into its
//! `resized` subfolder, showing a progress bar and one final notice.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing::debug;

use batch_resizer::pipeline::ConsoleProgress;
use batch_resizer::processing::supported_input_formats;
use batch_resizer::{
    init_logging, run, FilterType, OutputFormat, RunOutcome, Selection, Settings, StandardCodec,
};

/// Batch Resizer - scale a folder of images into a `resized` subfolder
#[derive(Parser)]
#[command(
    name = "batch-resize",
    version,
    about = "Batch image resizer and compressor",
    long_about = "Scales every PNG, JPEG, GIF, BMP and TIFF image in a folder by a percentage \
                  and re-encodes it in the chosen format. Results are written to a `resized` \
                  subfolder of the input folder; the first failing file stops the batch."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Folder containing the images to convert
    #[arg(short, long, value_name = "DIR")]
    input: Option<PathBuf>,

    /// Scaling factor in percent (1-100)
    #[arg(short, long, value_name = "PERCENT", value_parser = clap::value_parser!(u8).range(1..=100))]
    scale: Option<u8>,

    /// Output format
    #[arg(short, long, value_enum, ignore_case = true, value_name = "FORMAT")]
    format: Option<CliOutputFormat>,

    /// Resampling filter
    #[arg(long, value_enum, value_name = "FILTER")]
    filter: Option<CliFilter>,

    /// JPEG quality (1-100)
    #[arg(short, long, value_name = "QUALITY", value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: Option<u8>,

    /// Settings file (.toml or .yaml) with default values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (no progress bar or logs, only the final notice)
    #[arg(short = 'Q', long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Show program information
    About,
    /// List supported input extensions and output formats
    Formats,
    /// Validate a settings file
    CheckConfig {
        /// Settings file to validate
        file: PathBuf,
    },
}

/// CLI-compatible output format enum
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliOutputFormat {
    Png,
    Jpg,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Png => OutputFormat::Png,
            CliOutputFormat::Jpg => OutputFormat::Jpg,
            CliOutputFormat::Jpeg => OutputFormat::Jpeg,
            CliOutputFormat::Gif => OutputFormat::Gif,
            CliOutputFormat::Bmp => OutputFormat::Bmp,
            CliOutputFormat::Tiff => OutputFormat::Tiff,
        }
    }
}

/// CLI-compatible resampling filter enum
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<CliFilter> for FilterType {
    fn from(filter: CliFilter) -> Self {
        match filter {
            CliFilter::Nearest => FilterType::Nearest,
            CliFilter::Triangle => FilterType::Triangle,
            CliFilter::CatmullRom => FilterType::CatmullRom,
            CliFilter::Gaussian => FilterType::Gaussian,
            CliFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Handle subcommands
    if let Some(command) = &cli.command {
        if let Err(e) = handle_subcommand(command) {
            eprintln!("{}: {}", style("Error").red().bold(), e);
            process::exit(1);
        }
        return;
    }

    let settings = match &cli.config {
        Some(path) => match Settings::from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("{}: {}", style("Error").red().bold(), e.user_message());
                process::exit(1);
            }
        },
        None => Settings::default(),
    };

    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        settings.logging.level.as_str()
    };
    init_logging(log_level);

    let outcome = run_job(&cli, &settings);

    match &outcome {
        RunOutcome::Success { converted } => {
            debug!("{} files converted", converted);
            println!("{}: {}", style("Success").green().bold(), outcome.message());
        }
        RunOutcome::Failure { .. } => {
            eprintln!("{}: {}", style("Error").red().bold(), outcome.message());
            process::exit(1);
        }
    }
}

/// Run one conversion job from CLI arguments, falling back to settings defaults
fn run_job(cli: &Cli, settings: &Settings) -> RunOutcome {
    let defaults = &settings.defaults;

    // the input folder has no default; leaving it out is a configuration error
    let selection = Selection {
        input_dir: cli.input.clone(),
        scale_percent: Some(cli.scale.unwrap_or(defaults.scale_percent)),
        output_format: Some(cli.format.map_or(defaults.output_format, Into::into)),
    };

    let codec = StandardCodec::new()
        .filter(cli.filter.map_or(defaults.filter, Into::into))
        .jpeg_quality(cli.quality.unwrap_or(defaults.jpeg_quality));

    let mut progress = if cli.quiet {
        ConsoleProgress::hidden()
    } else {
        ConsoleProgress::new()
    };

    let outcome = run(selection, codec, &mut progress);
    progress.finish();
    outcome
}

/// Handle subcommands
fn handle_subcommand(command: &Commands) -> anyhow::Result<()> {
    match command {
        Commands::About => show_about(),
        Commands::Formats => show_formats(),
        Commands::CheckConfig { file } => check_config(file)?,
    }
    Ok(())
}

/// Show program information
fn show_about() {
    println!("{}", style("Batch Image Resizer and Compressor").bold());
    println!();
    println!("{}: {}", style("Version").bold(), env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Show supported formats
fn show_formats() {
    println!("{}", style("Supported Formats:").bold());
    println!("  Input: {}", supported_input_formats().join(", "));

    let outputs: Vec<String> = OutputFormat::ALL.iter().map(ToString::to_string).collect();
    println!("  Output: {}", outputs.join(", "));
}

/// Validate a settings file
fn check_config(file: &std::path::Path) -> anyhow::Result<()> {
    let settings = Settings::from_file(file).map_err(|e| anyhow::anyhow!(e.user_message()))?;

    println!("{}: Settings file is valid", style("Success").green().bold());
    println!(
        "Defaults: {}% as {} ({:?} filter, JPEG quality {})",
        settings.defaults.scale_percent,
        settings.defaults.output_format,
        settings.defaults.filter,
        settings.defaults.jpeg_quality
    );
    println!("Log level: {}", settings.logging.level);

    Ok(())
}
