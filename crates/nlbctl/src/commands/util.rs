//! Shared handler helpers: confirmation prompts and job waiting.

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::commands::Ctx;
use crate::error::CliError;

/// Ask for confirmation before a destructive action.
///
/// `--yes` skips the prompt. In a non-interactive context without
/// `--yes`, the operation is refused rather than silently executed.
pub fn confirm(action: &str, prompt: &str, yes: bool) -> Result<bool, CliError> {
    if yes {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.to_owned(),
        });
    }

    let confirmed = dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Wait for a job with a spinner (unless quiet).
pub async fn wait_for_job(
    ctx: &Ctx,
    job_id: &str,
    poll_interval: Duration,
    timeout: Duration,
) -> Result<(), CliError> {
    let spinner = if ctx.quiet {
        None
    } else {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .expect("spinner template is valid"),
        );
        bar.set_message(format!("waiting for job {job_id}"));
        bar.enable_steady_tick(Duration::from_millis(120));
        Some(bar)
    };

    let result = ctx.client.wait_for_job(job_id, poll_interval, timeout).await;

    if let Some(bar) = spinner {
        match &result {
            Ok(()) => bar.finish_with_message(format!("job {job_id} succeeded")),
            Err(_) => bar.abandon(),
        }
    }

    result.map_err(CliError::from)
}

/// Report a job handle returned by an async mutation.
pub fn report_job(ctx: &Ctx, what: &str, job_id: Option<&str>) {
    if ctx.quiet {
        return;
    }
    match job_id {
        Some(job_id) => eprintln!("{what} (job {job_id})"),
        None => eprintln!("{what}"),
    }
}
