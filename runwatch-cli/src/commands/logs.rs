//! Log command handlers

use anyhow::Result;
use colored::*;
use runwatch_client::LogStoreClient;
use runwatch_watcher::Config;

use crate::render::print_log_event;

/// Dump the complete log stream of a run
pub async fn dump_stream(config: &Config, run_id: &str, group: Option<String>) -> Result<()> {
    let mut client = LogStoreClient::new(config.log_store_url.clone());
    if let Some(token) = &config.log_store_token {
        client = client.bearer_token(token.clone());
    }

    let group = group.unwrap_or_else(|| config.log_group.clone());
    let events = client.fetch_stream(&group, run_id).await?;

    if events.is_empty() {
        println!("{}", "No log events found for this run.".yellow());
    } else {
        println!("{}", format!("Logs for run {}:", run_id).bold());
        println!("{}", "─".repeat(80).dimmed());
        for event in &events {
            print_log_event(event);
        }
        println!("{}", "─".repeat(80).dimmed());
    }

    Ok(())
}
