//! # apcap
//!
//! Prints capability profiles for handing to an Appium session initializer.
//!
//! # Usage
//!
//! ```bash
//! # List supported profiles
//! apcap list
//!
//! # Capabilities for one profile as JSON
//! apcap show eggInc
//!
//! # W3C form (vendor keys prefixed with `appium:`), as TOML
//! apcap show adventureCapitalist --w3c --format toml
//!
//! # Override the platform version and anchor directory
//! ANDROID_PLATFORM_VERSION=15.0 apcap --config apcap.toml show eggInc
//! ```

#![deny(warnings)]

use apcap_common::config::{AppConfig, LogLevel};
use apcap_common::env::ProcessEnv;
use apcap_common::profile::ProfileRegistry;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// apcap - capability profiles for mobile automation sessions
#[derive(Parser, Debug)]
#[command(name = "apcap")]
#[command(version)]
#[command(about = "Lists capability profiles and prints them for an automation driver")]
#[command(long_about = None)]
struct Args {
    /// Path to TOML configuration file.
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported profile names.
    List,

    /// Print the capability mapping of one profile.
    Show {
        /// Profile name, e.g. `eggInc`.
        profile: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Prefix non-standard keys with `appium:`.
        #[arg(long)]
        w3c: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match AppConfig::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            setup_tracing(&args, LogLevel::default());
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    setup_tracing(&args, config.shared.log_level);

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    debug!(
        service = %config.shared.service_name,
        module_dir = %config.module_dir().display(),
        "apcap v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let registry = ProfileRegistry::build(&ProcessEnv, config.module_dir())?;

    match &args.command {
        Command::List => {
            for (id, _) in registry.iter() {
                println!("{id}");
            }
        }
        Command::Show {
            profile,
            format,
            w3c,
        } => {
            let selected = registry.get_profile(profile)?;
            let caps = if *w3c {
                selected.to_w3c_capabilities()
            } else {
                selected.to_capabilities()
            };
            println!("{}", render(&caps, *format)?);

            info!(profile = %profile, "capabilities printed");
            if !selected.app_path().exists() {
                warn!(
                    "App binary {} not found; the driver will fail to install it",
                    selected.app_path().display()
                );
            }
        }
    }

    Ok(())
}

fn render(caps: &Map<String, Value>, format: Format) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(caps)?,
        Format::Toml => toml::to_string_pretty(caps)?,
    })
}

/// Level to log at: the more verbose of `-v` (debug) and the configured level.
fn effective_level(verbose: bool, configured: LogLevel) -> Level {
    let configured = configured
        .as_directive()
        .parse::<Level>()
        .unwrap_or(Level::INFO);
    // `Level` orders more verbose levels higher.
    if verbose {
        configured.max(Level::DEBUG)
    } else {
        configured
    }
}

fn setup_tracing(args: &Args, configured: LogLevel) {
    let level = effective_level(args.verbose, configured);

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // stdout carries the capability document only.
    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
