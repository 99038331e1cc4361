//! Terminal rendering helpers
//!
//! Shared colored output for runs and log events.

use colored::*;
use runwatch_core::domain::log::LogEvent;
use runwatch_core::domain::run::{JobRun, RunState};

/// Print a short run summary for listings
pub fn print_run_summary(run: &JobRun) {
    println!("  {} Run {}", "▸".cyan(), run.run_id.dimmed());
    println!("    Job:     {}", run.job_name.dimmed());
    println!("    State:   {}", colorize_state(run.state));
    if let Some(started) = run.started_on {
        println!(
            "    Started: {}",
            started.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }
    println!();
}

/// Print detailed run information
pub fn print_run_details(run: &JobRun) {
    println!("{}", "Run Details:".bold());
    println!("  Run id: {}", run.run_id.cyan());
    println!("  Job:    {}", run.job_name);
    println!("  State:  {}", colorize_state(run.state));

    if let Some(started) = run.started_on {
        println!("  Started:   {}", started.format("%Y-%m-%d %H:%M:%S"));
    }

    if let Some(completed) = run.completed_on {
        println!("  Completed: {}", completed.format("%Y-%m-%d %H:%M:%S"));

        if let Some(started) = run.started_on {
            let duration = completed.signed_duration_since(started);
            println!("  Duration:  {}s", duration.num_seconds());
        }
    }

    if let Some(error) = &run.error_message {
        println!("\n{}", "Error:".bold());
        println!("{}", error.red());
    }
}

/// Print a log event
pub fn print_log_event(event: &LogEvent) {
    println!(
        "{} {}",
        event.timestamp.format("%H:%M:%S").to_string().dimmed(),
        event.message
    );
}

/// Colorize run state for display
pub fn colorize_state(state: RunState) -> colored::ColoredString {
    let name = state.to_string();
    match state {
        RunState::Queued => name.yellow(),
        RunState::Starting => name.cyan(),
        RunState::Running => name.cyan(),
        RunState::Succeeded => name.green(),
        RunState::Failed => name.red(),
        RunState::Stopped => name.dimmed(),
    }
}
