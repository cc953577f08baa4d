//! radiocheck - check that mpd can play internet radio streams
//!
//! Exit status is 0 when everything checked was playable, 1 otherwise.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use radiocheck::{Checker, Outcome, SystemRunner};
use radiocheck_common::config::resolve_radio_dir;
use radiocheck_common::logging::init_tracing;
use radiocheck_common::TomlConfig;
use tracing::{debug, info};

/// Command-line arguments for radiocheck
#[derive(Parser, Debug)]
#[command(name = "radiocheck")]
#[command(version)]
#[command(override_usage = "radiocheck [OPTIONS] url|file|dir|RADIO")]
#[command(about = "Check mpd can play a url, a pls file, a list of urls, or a directory of pls files")]
#[command(long_about = "Check mpd can play a given url, or the url in a given pls file, or the \
urls contained line-by-line in a given file, or the url in every pls file in a given dir and \
below, or ('RADIO') the url in every pls file in the moOde RADIO directory and below")]
#[command(after_help = "NOTES: 1) protect spaces in filename, 2) mpd process must be running")]
struct Args {
    /// url|file|dir|RADIO
    #[arg(value_name = "TARGET")]
    target: String,

    /// Configuration file (default: ~/.config/radiocheck/config.toml, /etc/radiocheck/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory scanned for RADIO [env: RADIOCHECK_RADIO_DIR]
    #[arg(long, value_name = "DIR")]
    radio_dir: Option<PathBuf>,

    /// Milliseconds to wait between starting playback and reading mpd status
    #[arg(long, value_name = "MS")]
    settle_ms: Option<u64>,

    /// Let mpc and the volume helper write to the terminal
    #[arg(long)]
    show_child_output: bool,

    /// More diagnostics on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(Outcome::Success(message)) => {
            println!("{}", message);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Failure(message)) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("radiocheck: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<Outcome> {
    let (mut config, config_path) =
        TomlConfig::discover(args.config.as_deref()).context("Failed to load configuration")?;

    init_tracing(&config.logging, args.verbose).context("Failed to initialize logging")?;

    info!(
        "Starting radiocheck v{} [{}] ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_PROFILE")
    );
    match &config_path {
        Some(path) => info!("Configuration: {}", path.display()),
        None => debug!("No configuration file, using built-in defaults"),
    }

    if let Some(ms) = args.settle_ms {
        config.probe.settle_delay_ms = ms;
    }
    if args.show_child_output {
        config.probe.suppress_child_output = false;
    }

    let radio_dir = resolve_radio_dir(args.radio_dir.as_deref(), &config);
    debug!("RADIO directory: {}", radio_dir.display());

    let runner = SystemRunner::new(config.probe.suppress_child_output);
    let checker = Checker::new(&runner, &config.probe);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Ok(checker.run(&args.target, &radio_dir, &mut out))
}
