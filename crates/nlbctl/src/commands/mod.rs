//! Command handlers, one module per resource area.

pub mod job;
pub mod lb;
pub mod listener;
pub mod policy;
pub mod region;
pub mod server_group;
pub mod tag;
pub mod util;

use nlb_api::Client;

use crate::cli::{Command, OutputFormat};
use crate::error::CliError;

/// Everything a handler needs for one invocation.
pub struct Ctx {
    pub client: Client,
    /// Region the request targets, when known (stamped onto requests so
    /// cross-region mistakes fail fast server-side).
    pub region: Option<String>,
    pub output: OutputFormat,
    pub color: bool,
    pub quiet: bool,
    pub yes: bool,
}

/// Route a parsed command to its handler.
pub async fn dispatch(cmd: Command, ctx: &Ctx) -> Result<(), CliError> {
    match cmd {
        Command::Lb(cmd) => lb::handle(ctx, cmd).await,
        Command::Listener(cmd) => listener::handle(ctx, cmd).await,
        Command::ServerGroup(cmd) => server_group::handle(ctx, cmd).await,
        Command::Policy(cmd) => policy::handle(ctx, cmd).await,
        Command::Tag(cmd) => tag::handle(ctx, cmd).await,
        Command::Job(cmd) => job::handle(ctx, cmd).await,
        Command::Regions => region::regions(ctx).await,
        Command::Zones => region::zones(ctx).await,
        // Handled in main before a client exists.
        Command::Completions(_) => Ok(()),
    }
}
