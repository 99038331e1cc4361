//! Run and watch command handlers
//!
//! The run command submits a job run and, unless detached, hands it to
//! the watcher; the process exit code reflects the run's final state.

use anyhow::{Result, bail};
use colored::*;
use runwatch_core::domain::run::RunState;
use runwatch_watcher::{Config, JobWatcher};
use std::collections::HashMap;

/// Parse a single KEY=VALUE pair
pub(crate) fn parse_key_val(s: &str) -> Result<(String, String)> {
    let pos = s
        .find('=')
        .ok_or_else(|| anyhow::anyhow!("invalid KEY=VALUE: no `=` found in `{}`", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Start a run, optionally watching it to completion
pub async fn start_run(
    config: &Config,
    job: &str,
    args: Vec<(String, String)>,
    detach: bool,
) -> Result<()> {
    let watcher = JobWatcher::new(config.clone());
    let arguments: HashMap<String, String> = args.into_iter().collect();

    if detach {
        let run_id = watcher.start(job, arguments).await?;
        println!("Run {} submitted for job '{}'.", run_id.cyan(), job);
        return Ok(());
    }

    let report = watcher.run(job, arguments).await?;
    println!("Run id: {}", report.run_id.cyan());

    conclude(&report.run_id, report.final_state)
}

/// Watch an existing run to completion
pub async fn watch_run(config: &Config, job: &str, run_id: &str) -> Result<()> {
    let watcher = JobWatcher::new(config.clone());
    let state = watcher.watch(job, run_id).await?;

    conclude(run_id, Some(state))
}

/// Map the watch outcome onto output and exit status
fn conclude(run_id: &str, final_state: Option<RunState>) -> Result<()> {
    match final_state {
        Some(state) if state.is_success() => {
            println!(
                "{}",
                format!("Run {} completed successfully.", run_id).green()
            );
            Ok(())
        }
        Some(state) => bail!("run {} ended in state {}", run_id, state),
        None => bail!("lost track of run {}: status polling aborted", run_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("target_date=2024-06-01").unwrap(),
            ("target_date".to_string(), "2024-06-01".to_string())
        );
    }

    #[test]
    fn test_parse_key_val_keeps_equals_in_value() {
        assert_eq!(
            parse_key_val("filter=a=b").unwrap(),
            ("filter".to_string(), "a=b".to_string())
        );
    }

    #[test]
    fn test_parse_key_val_rejects_bare_key() {
        assert!(parse_key_val("no-separator").is_err());
    }
}
