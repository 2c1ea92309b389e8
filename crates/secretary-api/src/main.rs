//! Secretary Lab server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p secretary-api -- run --config-path profiles.yaml
//! ```
//!
//! Settings are read from environment variables (and `.env`); user profiles
//! from the YAML file given on the command line.

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use secretary_api::cli::{Cli, Command, ProfileArgs};
use secretary_common::{load_profiles, try_init_tracing, AppConfig, TracingConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap reads LAB_PROFILES_PATH
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run(args).await,
        Command::CheckConfig(args) => check_config(&args),
    }
}

async fn run(args: ProfileArgs) -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    let tracing_config = config
        .as_ref()
        .map(|c| TracingConfig::for_environment(c.app.env))
        .unwrap_or_default();
    if let Err(e) = try_init_tracing(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = config.context("Failed to load configuration")?;
    info!(env = ?config.app.env, address = %config.api.address(), "Configuration loaded");

    let profiles = load_profiles(&args.config_path)
        .with_context(|| format!("Failed to load profiles from {}", args.config_path.display()))?;
    info!(users = profiles.len(), "Profiles loaded");

    if let Err(e) = secretary_api::run(config, profiles).await {
        error!(error = %e, code = e.error_code(), "Server failed");
        return Err(e.into());
    }

    Ok(())
}

fn check_config(args: &ProfileArgs) -> anyhow::Result<()> {
    let profiles = load_profiles(&args.config_path)
        .with_context(|| format!("Invalid profile file {}", args.config_path.display()))?;

    let mut users = profiles.usernames().collect::<Vec<_>>();
    users.sort_unstable();

    println!(
        "{}: {} profile(s) OK ({})",
        args.config_path.display(),
        profiles.len(),
        users.join(", ")
    );
    Ok(())
}
