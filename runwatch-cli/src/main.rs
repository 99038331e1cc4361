//! Runwatch CLI
//!
//! Command-line interface for starting and watching batch job runs on the
//! data platform, and for inspecting runs and their log streams.

mod commands;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use runwatch_watcher::Config;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "runwatch")]
#[command(about = "Start, watch, and triage batch job runs", long_about = None)]
struct Cli {
    /// Job service URL
    #[arg(
        long,
        env = "RUNWATCH_JOB_SERVICE_URL",
        default_value = "http://localhost:8080"
    )]
    job_service_url: String,

    /// Log store URL
    #[arg(
        long,
        env = "RUNWATCH_LOG_STORE_URL",
        default_value = "http://localhost:8081"
    )]
    log_store_url: String,

    /// Issue tracker URL
    #[arg(
        long,
        env = "RUNWATCH_TRACKER_URL",
        default_value = "http://localhost:8082"
    )]
    tracker_url: String,

    /// Job service bearer token
    #[arg(long, env = "RUNWATCH_JOB_SERVICE_TOKEN", hide_env_values = true)]
    job_service_token: Option<String>,

    /// Log store bearer token
    #[arg(long, env = "RUNWATCH_LOG_STORE_TOKEN", hide_env_values = true)]
    log_store_token: Option<String>,

    /// Issue tracker bearer token
    #[arg(long, env = "RUNWATCH_TRACKER_TOKEN", hide_env_values = true)]
    tracker_token: Option<String>,

    /// Seconds between run state polls
    #[arg(long, env = "RUNWATCH_POLL_INTERVAL", default_value = "10")]
    poll_interval: u64,

    /// Log group holding run log streams
    #[arg(long, env = "RUNWATCH_LOG_GROUP", default_value = "/jobs/runs")]
    log_group: String,

    /// Tracker project defects are filed under
    #[arg(long, env = "RUNWATCH_TRACKER_PROJECT", default_value = "OPS")]
    tracker_project: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "runwatch_cli=info,runwatch_watcher=info,runwatch_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::new(cli.job_service_url, cli.log_store_url, cli.tracker_url);
    config.job_service_token = cli.job_service_token;
    config.log_store_token = cli.log_store_token;
    config.tracker_token = cli.tracker_token;
    config.poll_interval = Duration::from_secs(cli.poll_interval);
    config.log_group = cli.log_group;
    config.tracker_project = cli.tracker_project;
    config.validate()?;

    handle_command(cli.command, &config).await
}
