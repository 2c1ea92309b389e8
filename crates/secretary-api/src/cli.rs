//! Command line interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Lab presence secretary: records arrivals and departures and announces them on Slack
#[derive(Parser, Debug)]
#[command(name = "secretary-lab", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Run(ProfileArgs),
    /// Load and validate the profile file, then exit
    CheckConfig(ProfileArgs),
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Path to the user profile YAML file.
    #[arg(short = 'p', long, env = "LAB_PROFILES_PATH")]
    pub config_path: PathBuf,
}
