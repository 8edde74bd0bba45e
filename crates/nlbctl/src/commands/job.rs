//! Asynchronous job command handlers.

use std::time::Duration;

use nlb_api::types::job::{GetJobStatusRequest, GetJobStatusResponse};

use crate::cli::JobCommand;
use crate::commands::{Ctx, util};
use crate::error::CliError;
use crate::output;

fn detail(resp: &GetJobStatusResponse) -> String {
    let mut out = format!("Status: {}", resp.status.as_deref().unwrap_or("-"));
    if let Some(code) = &resp.error_code {
        out.push_str(&format!("\nError:  {code}"));
    }
    if let Some(message) = &resp.error_message {
        out.push_str(&format!("\n        {message}"));
    }
    out
}

pub async fn handle(ctx: &Ctx, cmd: JobCommand) -> Result<(), CliError> {
    match cmd {
        JobCommand::Status { id } => {
            let mut req = GetJobStatusRequest::new(id);
            req.region_id = ctx.region.clone();
            let resp = ctx.client.get_job_status(&req).await?;

            let rendered = output::render_single(ctx.output, &resp, detail, |r| {
                r.status.clone().unwrap_or_default()
            });
            output::print_output(&rendered, ctx.quiet);
            Ok(())
        }

        JobCommand::Wait {
            id,
            interval,
            max_wait,
        } => {
            util::wait_for_job(
                ctx,
                &id,
                Duration::from_secs(interval),
                Duration::from_secs(max_wait),
            )
            .await
        }
    }
}
