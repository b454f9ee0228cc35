use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use card_roi::config::{Config, ConfigOverrides};
use card_roi::output::csv::breakdown_to_csv;
use card_roi::output::json::render_json;
use card_roi::output::table::{render_breakdown_table, render_fields_table, render_roi_table};
use card_roi::{Calculator, ComputationFailure, InputProfile, ResultSet};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(
    name = "card-roi",
    about = "Estimate what a year of card benefits is worth against the annual fee"
)]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// JSON profile record, or `-` to read it from stdin
    #[arg(short, long)]
    profile: Option<String>,
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,
    #[arg(long = "log-level")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Value the profile and print the benefit breakdown
    Compute {
        /// Field edit applied on top of the profile, e.g. `dining=4000`
        #[arg(short = 's', long = "set")]
        edits: Vec<String>,
        /// Skip the worst/estimate/best ROI summary
        #[arg(long)]
        no_roi_table: bool,
    },
    /// List profile fields with their accepted ranges and current values
    Fields,
    Config {
        #[arg(long)]
        init: bool,
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(Some(&config_path))?;
    config.apply_overrides(ConfigOverrides {
        profile_path: cli.profile.clone(),
        output_format: cli
            .output
            .and_then(|format| format.to_possible_value())
            .map(|value| value.get_name().to_string()),
        log_level: cli.log_level.clone(),
    });
    init_tracing(&config.logging.level)?;

    let format = OutputFormat::from_str(&config.output.format, true)
        .map_err(|e| anyhow!("invalid output format: {e}"))?;

    match &cli.command {
        Commands::Config { init, show } => {
            handle_config_command(*init, *show, &config, &config_path)
        }
        Commands::Fields => {
            let calculator =
                load_calculator(&config)?.context("profile record must be a JSON object")?;
            println!("{}", render_fields_table(calculator.profile()));
            Ok(())
        }
        Commands::Compute {
            edits,
            no_roi_table,
        } => {
            let result = match load_calculator(&config)? {
                Ok(mut calculator) => {
                    for edit in edits {
                        let field = calculator.apply_assignment(edit)?;
                        info!("applied edit to {field}");
                    }
                    calculator.results().clone()
                }
                Err(failure) => {
                    warn!("profile record rejected: {failure}");
                    ResultSet::fallback()
                }
            };
            let show_roi = config.output.show_roi_table && !*no_roi_table;
            print_result(&result, format, show_roi)
        }
    }
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level/filter '{level}'"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed installing log subscriber: {e}"))
}

fn handle_config_command(init: bool, show: bool, config: &Config, config_path: &Path) -> Result<()> {
    if init {
        Config::write_template(config_path)?;
        println!("Wrote config template to {}", config_path.display());
    }
    if show || !init {
        println!("{}", render_json(config)?);
    }
    Ok(())
}

/// Builds the form state from the configured profile record. A missing
/// profile file starts from the form defaults. Read and JSON syntax errors are
/// application errors; a record that parses but is not an object is the
/// engine's `MalformedInput` and is returned as the inner error.
fn load_calculator(config: &Config) -> Result<Result<Calculator, ComputationFailure>> {
    let Some(record) = load_record(config)? else {
        info!("no profile record found, starting from form defaults");
        return Ok(Ok(Calculator::new(InputProfile::default())));
    };
    Ok(Calculator::from_record(&record))
}

fn load_record(config: &Config) -> Result<Option<Value>> {
    let data = if config.profile.path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed reading profile from stdin")?;
        buf
    } else {
        let resolved = config.resolved_profile_path();
        if !resolved.exists() {
            return Ok(None);
        }
        fs::read_to_string(&resolved)
            .with_context(|| format!("failed reading profile: {}", resolved.display()))?
    };
    let record = serde_json::from_str(&data).context("profile is not valid JSON")?;
    Ok(Some(record))
}

fn print_result(result: &ResultSet, format: OutputFormat, show_roi: bool) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", render_breakdown_table(result));
            if show_roi {
                println!("{}", render_roi_table(result));
            }
        }
        OutputFormat::Json => println!("{}", render_json(result)?),
        OutputFormat::Csv => print!("{}", breakdown_to_csv(result)?),
    }
    Ok(())
}
