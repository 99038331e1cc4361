//! Run inspection command handlers
//!
//! One-shot lookups against the job service: current state of a run and
//! recent runs for a job.

use anyhow::Result;
use colored::*;
use runwatch_client::JobServiceClient;
use runwatch_watcher::Config;

use crate::render::{print_run_details, print_run_summary};

fn client(config: &Config) -> JobServiceClient {
    let mut client = JobServiceClient::new(config.job_service_url.clone());
    if let Some(token) = &config.job_service_token {
        client = client.bearer_token(token.clone());
    }
    client
}

/// Show the current state of a single run
pub async fn run_status(config: &Config, job: &str, run_id: &str) -> Result<()> {
    match client(config).get_run(job, run_id).await {
        Ok(run) => {
            print_run_details(&run);
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            println!(
                "{}",
                format!("No run {} found for job '{}'.", run_id, job).yellow()
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// List recent runs for a job
pub async fn list_runs(config: &Config, job: &str) -> Result<()> {
    let runs = client(config).list_runs(job).await?;

    if runs.is_empty() {
        println!("{}", format!("No runs found for job '{}'.", job).yellow());
    } else {
        println!(
            "{}",
            format!("Found {} run(s) for job '{}':", runs.len(), job).bold()
        );
        println!();
        for run in runs {
            print_run_summary(&run);
        }
    }

    Ok(())
}
