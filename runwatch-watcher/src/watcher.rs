//! Run watcher
//!
//! Submits job runs and watches them to completion. A watch polls the job
//! service at a fixed interval until the run reaches a terminal state. A
//! run that ends in anything but `SUCCEEDED` gets its log stream pulled
//! and a defect ticket filed carrying the final state and the log text.

use anyhow::{Context, Result};
use runwatch_core::domain::log::LogEvent;
use runwatch_core::domain::run::RunState;
use runwatch_core::dto::ticket::CreateTicket;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::time;
use tracing::{error, info, warn};

use crate::api::{DefectSink, HttpDefectSink, HttpRunApi, HttpRunLogs, RunApi, RunLogs};
use crate::config::Config;
use runwatch_client::{JobServiceClient, LogStoreClient, TrackerClient};

/// Outcome of a submit-and-watch cycle
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Run id assigned by the job service
    pub run_id: String,
    /// Terminal state the watch observed; `None` when status polling
    /// aborted before the run concluded
    pub final_state: Option<RunState>,
}

/// Watches job runs to completion and files defects for failed ones
pub struct JobWatcher {
    config: Config,
    runs: Arc<dyn RunApi>,
    logs: Arc<dyn RunLogs>,
    defects: Arc<dyn DefectSink>,
}

impl JobWatcher {
    /// Creates a watcher talking to the services named in the configuration
    pub fn new(config: Config) -> Self {
        let mut jobs = JobServiceClient::new(config.job_service_url.clone());
        if let Some(token) = &config.job_service_token {
            jobs = jobs.bearer_token(token.clone());
        }

        let mut log_store = LogStoreClient::new(config.log_store_url.clone());
        if let Some(token) = &config.log_store_token {
            log_store = log_store.bearer_token(token.clone());
        }

        let mut tracker = TrackerClient::new(config.tracker_url.clone());
        if let Some(token) = &config.tracker_token {
            tracker = tracker.bearer_token(token.clone());
        }

        Self {
            runs: Arc::new(HttpRunApi::new(jobs)),
            logs: Arc::new(HttpRunLogs::new(log_store)),
            defects: Arc::new(HttpDefectSink::new(tracker)),
            config,
        }
    }

    /// Creates a watcher over explicit API implementations
    pub fn with_apis(
        config: Config,
        runs: Arc<dyn RunApi>,
        logs: Arc<dyn RunLogs>,
        defects: Arc<dyn DefectSink>,
    ) -> Self {
        Self {
            config,
            runs,
            logs,
            defects,
        }
    }

    /// Submits a run without watching it
    pub async fn start(&self, job: &str, arguments: HashMap<String, String>) -> Result<String> {
        let run_id = self.runs.start_run(job, arguments).await?;
        info!("Job '{}' started. Run id: {}", job, run_id);
        Ok(run_id)
    }

    /// Submits a run and watches it to completion
    ///
    /// A rejected submission is an error. The watch outcome never is: the
    /// report always carries the run id the service assigned, and
    /// `final_state` is `None` when status polling aborted.
    pub async fn run(&self, job: &str, arguments: HashMap<String, String>) -> Result<RunReport> {
        let run_id = self.start(job, arguments).await?;

        let final_state = match self.watch(job, &run_id).await {
            Ok(state) => Some(state),
            Err(e) => {
                error!("Watch of run {} aborted: {:#}", run_id, e);
                None
            }
        };

        Ok(RunReport {
            run_id,
            final_state,
        })
    }

    /// Polls a run until it reaches a terminal state
    ///
    /// Returns the terminal state. `Failed` and `Stopped` have their log
    /// stream pulled and a defect ticket filed before returning; an error
    /// from the status query aborts the watch before any of that.
    pub async fn watch(&self, job: &str, run_id: &str) -> Result<RunState> {
        info!(
            "Watching run {} of job '{}' (interval: {:?})",
            run_id, job, self.config.poll_interval
        );

        let mut ticker = time::interval(self.config.poll_interval);

        let state = loop {
            ticker.tick().await;

            let run = self
                .runs
                .fetch_run(job, run_id)
                .await
                .with_context(|| format!("Status query for run {} failed", run_id))?;

            info!("Current state: {}", run.state);

            if run.state.is_terminal() {
                break run.state;
            }
        };

        if state.is_success() {
            info!("Run {} completed successfully", run_id);
            return Ok(state);
        }

        warn!(
            "Run {} did not complete successfully. Final state: {}",
            run_id, state
        );

        let key = self.report_defect(job, run_id, state).await?;
        info!("Filed defect {} for run {}", key, run_id);

        Ok(state)
    }

    /// Pulls the run's logs and files a defect ticket carrying them
    async fn report_defect(&self, job: &str, run_id: &str, state: RunState) -> Result<String> {
        let events = self
            .logs
            .fetch_run_logs(&self.config.log_group, run_id)
            .await?;

        let ticket = CreateTicket {
            project: self.config.tracker_project.clone(),
            title: defect_title(job, run_id),
            body: defect_body(state, &events),
        };

        self.defects.file_defect(ticket).await
    }
}

/// Ticket title for a run that did not succeed
fn defect_title(job: &str, run_id: &str) -> String {
    format!("Automation: job '{}' run {} failed", job, run_id)
}

/// Ticket body: final state, blank line, then the raw log lines
fn defect_body(state: RunState, events: &[LogEvent]) -> String {
    let lines: Vec<&str> = events.iter().map(|e| e.message.as_str()).collect();
    format!("Final status: {}\n\n{}", state, lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use runwatch_core::domain::run::JobRun;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    fn test_config() -> Config {
        Config {
            poll_interval: Duration::from_millis(1),
            ..Config::default()
        }
    }

    fn log_event(message: &str) -> LogEvent {
        LogEvent {
            timestamp: chrono::Utc::now(),
            message: message.to_string(),
        }
    }

    struct FakeRuns {
        run_id: String,
        states: Mutex<VecDeque<Result<RunState>>>,
        started: Mutex<Vec<(String, HashMap<String, String>)>>,
        fetched: Mutex<Vec<String>>,
    }

    impl FakeRuns {
        fn with_states(states: Vec<Result<RunState>>) -> Arc<Self> {
            Arc::new(Self {
                run_id: "jr-0001".to_string(),
                states: Mutex::new(states.into_iter().collect()),
                started: Mutex::new(Vec::new()),
                fetched: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl RunApi for FakeRuns {
        async fn start_run(
            &self,
            job: &str,
            arguments: HashMap<String, String>,
        ) -> Result<String> {
            self.started
                .lock()
                .unwrap()
                .push((job.to_string(), arguments));
            Ok(self.run_id.clone())
        }

        async fn fetch_run(&self, job: &str, run_id: &str) -> Result<JobRun> {
            self.fetched.lock().unwrap().push(run_id.to_string());
            let state = self
                .states
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected extra poll")?;
            Ok(JobRun {
                job_name: job.to_string(),
                run_id: run_id.to_string(),
                state,
                started_on: None,
                completed_on: None,
                error_message: None,
            })
        }
    }

    #[derive(Default)]
    struct FakeLogs {
        fetched: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl RunLogs for FakeLogs {
        async fn fetch_run_logs(&self, group: &str, stream: &str) -> Result<Vec<LogEvent>> {
            self.fetched
                .lock()
                .unwrap()
                .push((group.to_string(), stream.to_string()));
            Ok(vec![
                log_event("driver starting"),
                log_event("stage 1 failed: out of memory"),
            ])
        }
    }

    #[derive(Default)]
    struct FakeDefects {
        filed: Mutex<Vec<CreateTicket>>,
    }

    #[async_trait]
    impl DefectSink for FakeDefects {
        async fn file_defect(&self, ticket: CreateTicket) -> Result<String> {
            self.filed.lock().unwrap().push(ticket);
            Ok("OPS-7".to_string())
        }
    }

    fn watcher(
        runs: Arc<FakeRuns>,
        logs: Arc<FakeLogs>,
        defects: Arc<FakeDefects>,
    ) -> JobWatcher {
        JobWatcher::with_apis(test_config(), runs, logs, defects)
    }

    #[tokio::test]
    async fn watch_polls_until_terminal_state() {
        let runs = FakeRuns::with_states(vec![
            Ok(RunState::Starting),
            Ok(RunState::Running),
            Ok(RunState::Succeeded),
        ]);
        let logs = Arc::new(FakeLogs::default());
        let defects = Arc::new(FakeDefects::default());

        let state = watcher(runs.clone(), logs.clone(), defects.clone())
            .watch("nightly-etl", "jr-0001")
            .await
            .unwrap();

        assert_eq!(state, RunState::Succeeded);
        assert_eq!(runs.fetched.lock().unwrap().len(), 3);
        assert!(logs.fetched.lock().unwrap().is_empty());
        assert!(defects.filed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_run_pulls_logs_and_files_one_defect() {
        let runs = FakeRuns::with_states(vec![Ok(RunState::Running), Ok(RunState::Failed)]);
        let logs = Arc::new(FakeLogs::default());
        let defects = Arc::new(FakeDefects::default());

        let state = watcher(runs.clone(), logs.clone(), defects.clone())
            .watch("nightly-etl", "jr-0001")
            .await
            .unwrap();

        assert_eq!(state, RunState::Failed);

        let log_calls = logs.fetched.lock().unwrap();
        assert_eq!(log_calls.len(), 1);
        assert_eq!(
            log_calls[0],
            ("/jobs/runs".to_string(), "jr-0001".to_string())
        );

        let filed = defects.filed.lock().unwrap();
        assert_eq!(filed.len(), 1);
        assert_eq!(filed[0].project, "OPS");
        assert!(filed[0].title.contains("nightly-etl"));
        assert!(filed[0].body.contains("Final status: FAILED"));
        assert!(filed[0].body.contains("out of memory"));
    }

    #[tokio::test]
    async fn stopped_run_files_a_defect() {
        let runs = FakeRuns::with_states(vec![Ok(RunState::Stopped)]);
        let logs = Arc::new(FakeLogs::default());
        let defects = Arc::new(FakeDefects::default());

        let state = watcher(runs.clone(), logs.clone(), defects.clone())
            .watch("nightly-etl", "jr-0001")
            .await
            .unwrap();

        assert_eq!(state, RunState::Stopped);
        assert_eq!(defects.filed.lock().unwrap().len(), 1);
        assert!(
            defects.filed.lock().unwrap()[0]
                .body
                .contains("Final status: STOPPED")
        );
    }

    #[tokio::test]
    async fn status_query_error_aborts_without_defect() {
        let runs = FakeRuns::with_states(vec![
            Ok(RunState::Running),
            Err(anyhow!("connection reset")),
        ]);
        let logs = Arc::new(FakeLogs::default());
        let defects = Arc::new(FakeDefects::default());

        let result = watcher(runs.clone(), logs.clone(), defects.clone())
            .watch("nightly-etl", "jr-0001")
            .await;

        assert!(result.is_err());
        assert!(logs.fetched.lock().unwrap().is_empty());
        assert!(defects.filed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn run_returns_submission_id_and_watches_it() {
        let runs = FakeRuns::with_states(vec![Ok(RunState::Succeeded)]);
        let logs = Arc::new(FakeLogs::default());
        let defects = Arc::new(FakeDefects::default());

        let arguments = HashMap::from([("target_date".to_string(), "2024-06-01".to_string())]);
        let report = watcher(runs.clone(), logs.clone(), defects.clone())
            .run("nightly-etl", arguments)
            .await
            .unwrap();

        assert_eq!(report.run_id, "jr-0001");
        assert_eq!(report.final_state, Some(RunState::Succeeded));

        let started = runs.started.lock().unwrap();
        assert_eq!(started.len(), 1);
        assert_eq!(started[0].0, "nightly-etl");
        assert_eq!(
            started[0].1.get("target_date").map(String::as_str),
            Some("2024-06-01")
        );

        let fetched = runs.fetched.lock().unwrap();
        assert!(!fetched.is_empty());
        assert!(fetched.iter().all(|id| id == "jr-0001"));
    }

    #[tokio::test]
    async fn run_survives_an_aborted_watch() {
        let runs = FakeRuns::with_states(vec![Err(anyhow!("throttled"))]);
        let logs = Arc::new(FakeLogs::default());
        let defects = Arc::new(FakeDefects::default());

        let report = watcher(runs.clone(), logs.clone(), defects.clone())
            .run("nightly-etl", HashMap::new())
            .await
            .unwrap();

        assert_eq!(report.run_id, "jr-0001");
        assert_eq!(report.final_state, None);
    }

    #[test]
    fn defect_body_embeds_state_and_log_lines() {
        let events = vec![log_event("line one"), log_event("line two")];
        let body = defect_body(RunState::Stopped, &events);
        assert_eq!(body, "Final status: STOPPED\n\nline one\nline two");
    }
}
