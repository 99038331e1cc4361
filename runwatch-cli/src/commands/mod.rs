//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod job;
mod logs;
mod run;

use anyhow::Result;
use clap::Subcommand;
use runwatch_watcher::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start a job run and watch it to completion
    Run {
        /// Job name
        job: String,

        /// Run arguments as KEY=VALUE pairs
        #[arg(short = 'a', long = "arg", value_parser = run::parse_key_val)]
        args: Vec<(String, String)>,

        /// Submit the run and exit without watching it
        #[arg(long)]
        detach: bool,
    },
    /// Watch an existing run to completion
    Watch {
        /// Job name
        job: String,

        /// Run id
        run_id: String,
    },
    /// Show the current state of a run
    Status {
        /// Job name
        job: String,

        /// Run id
        run_id: String,
    },
    /// List recent runs for a job
    Runs {
        /// Job name
        job: String,
    },
    /// Dump the log stream of a run
    Logs {
        /// Run id
        run_id: String,

        /// Log group to read from (defaults to the configured group)
        #[arg(long)]
        group: Option<String>,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Run { job, args, detach } => run::start_run(config, &job, args, detach).await,
        Commands::Watch { job, run_id } => run::watch_run(config, &job, &run_id).await,
        Commands::Status { job, run_id } => job::run_status(config, &job, &run_id).await,
        Commands::Runs { job } => job::list_runs(config, &job).await,
        Commands::Logs { run_id, group } => logs::dump_stream(config, &run_id, group).await,
    }
}
