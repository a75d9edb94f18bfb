//! Top-level CLI definition and dispatch.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell as CompletionShell, generate};
use colored::{Colorize, control};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use rock_report::core::clock::SystemClock;
use rock_report::core::config::Config;
use rock_report::core::errors::RockrError;
use rock_report::pipeline;

/// Rock Report — band-dataset report generator for compute-to-data jobs.
#[derive(Debug, Parser)]
#[command(
    name = "rockr",
    author,
    version,
    about = "Rock Report - band dataset report generator",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Override config file path.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Force JSON output mode.
    #[arg(long, global = true)]
    json: bool,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Increase verbosity.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Quiet mode (errors only).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Locate the dataset, compute statistics, write the dated report.
    Run(RunArgs),
    /// View and validate configuration state.
    Config(ConfigArgs),
    /// Show version and optional build metadata.
    Version(VersionArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Args, Serialize, Default)]
struct RunArgs {
    /// Dataset file to use directly, skipping mount discovery.
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,
    /// Directory to write the report into.
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
    /// Minimum rating for a band to qualify.
    #[arg(long, value_name = "RATING")]
    threshold: Option<f64>,
    /// Report file name prefix.
    #[arg(long, value_name = "NAME")]
    prefix: Option<String>,
}

#[derive(Debug, Clone, Args, Serialize, Default)]
struct ConfigArgs {
    /// Config operation to run.
    #[command(subcommand)]
    command: Option<ConfigCommand>,
}

#[derive(Debug, Clone, Subcommand, Serialize)]
enum ConfigCommand {
    /// Print resolved config file path.
    Path,
    /// Print effective merged configuration.
    Show,
    /// Validate configuration and exit.
    Validate,
}

#[derive(Debug, Clone, Args, Serialize, Default)]
struct VersionArgs {
    /// Include additional build metadata fields.
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Clone, Args)]
struct CompletionsArgs {
    /// Shell to generate completion script for.
    #[arg(value_enum)]
    shell: CompletionShell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Human,
    Json,
}

/// CLI error type with explicit exit-code mapping.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input at runtime.
    #[error("{0}")]
    User(String),
    /// Environment/runtime failure.
    #[error("{0}")]
    Runtime(String),
    /// Internal bug or invariant violation.
    #[error("{0}")]
    Internal(String),
    /// JSON serialization failed.
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
    /// Output write failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code contract for the CLI.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::User(_) => 1,
            Self::Runtime(_) | Self::Io(_) => 2,
            Self::Internal(_) | Self::Json(_) => 3,
        }
    }
}

impl From<RockrError> for CliError {
    fn from(e: RockrError) -> Self {
        match e {
            RockrError::InvalidConfig { .. }
            | RockrError::MissingConfig { .. }
            | RockrError::ConfigParse { .. } => Self::User(e.to_string()),
            RockrError::Serialization { .. } => Self::Internal(e.to_string()),
            RockrError::DataNotFound { .. }
            | RockrError::MalformedInput { .. }
            | RockrError::NoQualifyingRecords { .. }
            | RockrError::Io { .. } => Self::Runtime(e.to_string()),
        }
    }
}

/// Dispatch CLI commands.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.no_color {
        control::set_override(false);
    }

    match &cli.command {
        Command::Run(args) => run_report(cli, args),
        Command::Config(args) => run_config(cli, args),
        Command::Version(args) => emit_version(cli, args),
        Command::Completions(args) => {
            let mut command = Cli::command();
            let binary_name = command.get_name().to_string();
            generate(args.shell, &mut command, binary_name, &mut io::stdout());
            Ok(())
        }
    }
}

fn run_report(cli: &Cli, args: &RunArgs) -> Result<(), CliError> {
    let mut config = Config::load(cli.config.as_deref())?;

    // CLI overrides beat config file and env. A direct --input path reuses
    // the locator's root-as-file probe.
    if let Some(input) = &args.input {
        config.input.mount_root.clone_from(input);
    }
    if let Some(output_dir) = &args.output_dir {
        config.report.output_dir.clone_from(output_dir);
    }
    if let Some(threshold) = args.threshold {
        config.report.rating_threshold = threshold;
    }
    if let Some(prefix) = &args.prefix {
        config.report.prefix.clone_from(prefix);
    }
    config.validate().map_err(|e| CliError::User(e.to_string()))?;

    let outcome = pipeline::run(&config, &SystemClock)?;

    match output_mode(cli) {
        OutputMode::Human => {
            if cli.verbose {
                println!("Found data at: {}", outcome.input_path.display());
            }
            if !cli.quiet {
                let stats = &outcome.report.statistics;
                println!("{}", "🎸 Rock analysis complete!".bold());
                println!("📝 Report: {}", outcome.output_path.display());
                println!(
                    "🤘 {} legendary bands analyzed!",
                    stats.total_legendary_bands.to_string().green()
                );
            }
        }
        OutputMode::Json => {
            let payload = json!({
                "command": "run",
                "input": outcome.input_path.to_string_lossy(),
                "output": outcome.output_path.to_string_lossy(),
                "timestamp": outcome.report.timestamp,
                "statistics": serde_json::to_value(&outcome.report.statistics)?,
            });
            write_json_line(&payload)?;
        }
    }

    Ok(())
}

fn run_config(cli: &Cli, args: &ConfigArgs) -> Result<(), CliError> {
    match &args.command {
        None | Some(ConfigCommand::Path) => {
            let path = cli.config.clone().unwrap_or_else(Config::default_path);
            let exists = path.exists();

            match output_mode(cli) {
                OutputMode::Human => {
                    println!("{}", path.display());
                    if !exists {
                        println!("  (file does not exist; defaults will be used)");
                    }
                }
                OutputMode::Json => {
                    let payload = json!({
                        "command": "config path",
                        "path": path.to_string_lossy(),
                        "exists": exists,
                    });
                    write_json_line(&payload)?;
                }
            }
            Ok(())
        }
        Some(ConfigCommand::Show) => {
            let config = Config::load(cli.config.as_deref())?;

            match output_mode(cli) {
                OutputMode::Human => {
                    let toml_str = toml::to_string_pretty(&config)
                        .map_err(|e| CliError::Runtime(format!("serialize config: {e}")))?;
                    println!("{toml_str}");
                }
                OutputMode::Json => {
                    let value = serde_json::to_value(&config)?;
                    let payload = json!({
                        "command": "config show",
                        "config": value,
                    });
                    write_json_line(&payload)?;
                }
            }
            Ok(())
        }
        Some(ConfigCommand::Validate) => match Config::load(cli.config.as_deref()) {
            Ok(_) => {
                let source = cli.config.clone().unwrap_or_else(Config::default_path);
                match output_mode(cli) {
                    OutputMode::Human => {
                        println!("Configuration is valid.");
                        println!("  Source: {}", source.display());
                    }
                    OutputMode::Json => {
                        let payload = json!({
                            "command": "config validate",
                            "valid": true,
                            "path": source.to_string_lossy(),
                        });
                        write_json_line(&payload)?;
                    }
                }
                Ok(())
            }
            Err(e) => {
                match output_mode(cli) {
                    OutputMode::Human => {
                        eprintln!("Configuration is INVALID: {e}");
                    }
                    OutputMode::Json => {
                        let payload = json!({
                            "command": "config validate",
                            "valid": false,
                            "error": e.to_string(),
                        });
                        write_json_line(&payload)?;
                    }
                }
                Err(CliError::User(format!("invalid config: {e}")))
            }
        },
    }
}

fn emit_version(cli: &Cli, args: &VersionArgs) -> Result<(), CliError> {
    let version = env!("CARGO_PKG_VERSION");
    let package = env!("CARGO_PKG_NAME");
    let target = option_env!("TARGET").unwrap_or("unknown");
    let profile = option_env!("PROFILE").unwrap_or("unknown");

    match output_mode(cli) {
        OutputMode::Human => {
            println!("rockr {version}");
            if args.verbose {
                println!("package: {package}");
                println!("target: {target}");
                println!("profile: {profile}");
            }
        }
        OutputMode::Json => {
            let payload = json!({
                "binary": "rockr",
                "version": version,
                "package": package,
                "build": {
                    "target": target,
                    "profile": profile,
                }
            });
            write_json_line(&payload)?;
        }
    }
    Ok(())
}

fn write_json_line(payload: &Value) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, payload)?;
    writeln!(stdout)?;
    Ok(())
}

fn output_mode(cli: &Cli) -> OutputMode {
    let env_mode = std::env::var("ROCKR_OUTPUT_FORMAT").ok();
    resolve_output_mode(cli.json, env_mode.as_deref(), io::stdout().is_terminal())
}

fn resolve_output_mode(json_flag: bool, env_mode: Option<&str>, stdout_is_tty: bool) -> OutputMode {
    if json_flag {
        return OutputMode::Json;
    }

    let fallback = if stdout_is_tty {
        OutputMode::Human
    } else {
        OutputMode::Json
    };

    match env_mode
        .map(str::trim)
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("json") => OutputMode::Json,
        Some("human") => OutputMode::Human,
        Some("auto") | None => fallback,
        Some(_) => fallback,
    }
}
