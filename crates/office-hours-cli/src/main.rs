//! `office-hours` CLI — render and check office-hours configurations.
//!
//! ## Usage
//!
//! ```sh
//! # Render the template data for a configuration file
//! office-hours render -i office-hours.toml
//!
//! # Render as of a given date, with German day names
//! office-hours render -i office-hours.json --today 2026-12-01 --translations de.json
//!
//! # Skip past special dates instead of producing no schedule
//! office-hours render -i office-hours.json --skip-past
//!
//! # List every row that would be dropped, and why
//! office-hours check -i office-hours.json
//! ```
//!
//! The configuration may be a whole site configuration (with the plugin under
//! `plugins.office-hours`) or just the plugin's own section. `.toml` files are
//! read as TOML, everything else (including stdin) as JSON.

use std::collections::HashMap;
use std::io::{self, Read};
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use office_hours::plugin::TEMPLATE_FUNCTION_NAME;
use office_hours::settings::CONFIG_ROOT;
use office_hours::time::format_minutes;
use office_hours::{
    normalize_entries_detailed, Clock, FixedClock, FunctionRegistry, JsonConfig, MapTranslator,
    NormalizedDay, OfficeHoursPlugin, OfficeHoursSettings, SystemClock, ZonedClock,
};

#[derive(Parser)]
#[command(
    name = "office-hours",
    version,
    about = "Render and check office-hours configurations"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log every dropped row to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the getOfficeHoursData template data as JSON
    Render {
        /// Configuration file (reads JSON from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long, conflicts_with = "timezone")]
        today: Option<NaiveDate>,
        /// IANA timezone used to determine today
        #[arg(long)]
        timezone: Option<String>,
        /// JSON file mapping translation keys to strings
        #[arg(long)]
        translations: Option<String>,
        /// Skip special dates in the past instead of producing no schedule
        #[arg(long)]
        skip_past: bool,
        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Report accepted and dropped rows per day; exits with 1 if anything was dropped
    Check {
        /// Configuration file (reads JSON from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            input,
            output,
            today,
            timezone,
            translations,
            skip_past,
            compact,
        } => {
            let mut config = read_config(input.as_deref())?;
            if skip_past {
                config.set(
                    &format!("{}.skipPastSpecialOpenings", CONFIG_ROOT),
                    Value::Bool(true),
                );
            }

            let clock: Arc<dyn Clock> = match (today, timezone.as_deref()) {
                (Some(date), _) => Arc::new(FixedClock(date)),
                (None, Some(tz)) => Arc::new(ZonedClock::new(tz)?),
                (None, None) => Arc::new(SystemClock),
            };

            let mut translator = MapTranslator::english();
            if let Some(path) = translations.as_deref() {
                translator.extend(read_translations(path)?);
            }

            let mut plugin = OfficeHoursPlugin::new(Arc::new(config), Arc::new(translator), clock);
            plugin.on_plugins_initialized(false);
            let mut registry = FunctionRegistry::new();
            plugin.on_template_initialized(&mut registry);

            let data = registry.call(TEMPLATE_FUNCTION_NAME).unwrap_or(Value::Null);
            let rendered = if compact {
                serde_json::to_string(&data)?
            } else {
                serde_json::to_string_pretty(&data)?
            };
            write_output(output.as_deref(), &format!("{}\n", rendered))?;
        }
        Commands::Check { input } => {
            let config = read_config(input.as_deref())?;
            let settings = OfficeHoursSettings::from_provider(&config)
                .context("Failed to read office-hours configuration")?;

            let mut dropped = 0;
            for (day_key, day) in &settings.openinghours {
                let label = if day.hidden {
                    format!("{} (hidden)", day_key)
                } else {
                    day_key.clone()
                };
                let normalized = normalize_entries_detailed(&day.entries, false);
                print_day(&label, &normalized);
                dropped += normalized.dropped.len();
            }
            for special in &settings.special_openings {
                let normalized = normalize_entries_detailed(&special.entries, false);
                print_day(&special.date, &normalized);
                dropped += normalized.dropped.len();
            }

            if dropped > 0 {
                eprintln!("{} row(s) dropped", dropped);
                process::exit(1);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn print_day(label: &str, day: &NormalizedDay) {
    let accepted: Vec<String> = day
        .intervals
        .iter()
        .map(|i| {
            format!(
                "{}-{}",
                format_minutes(i.start_minutes),
                format_minutes(i.end_minutes)
            )
        })
        .collect();
    if accepted.is_empty() {
        println!("{}: closed", label);
    } else {
        println!("{}: {}", label, accepted.join(", "));
    }
    for d in &day.dropped {
        println!(
            "  dropped #{} {}-{}: {}",
            d.index + 1,
            d.raw.start,
            d.raw.end,
            d.reason
        );
    }
}

/// Load a configuration and make sure the plugin section sits under
/// `plugins.office-hours`.
fn read_config(path: Option<&str>) -> Result<JsonConfig> {
    let text = read_input(path)?;
    let config = match path {
        Some(p) if p.ends_with(".toml") => JsonConfig::from_toml_str(&text),
        _ => JsonConfig::from_json_str(&text),
    }
    .context("Failed to parse configuration")?;
    debug!(source = path.unwrap_or("stdin"), "loaded configuration");

    if config.root().get("plugins").is_some() {
        return Ok(config);
    }
    Ok(JsonConfig::from_value(
        json!({"plugins": {"office-hours": config.root().clone()}}),
    ))
}

fn read_translations(path: &str) -> Result<HashMap<String, String>> {
    let text = read_input(Some(path))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse translations: {}", path))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
