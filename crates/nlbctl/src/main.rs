mod cli;
mod commands;
mod config;
mod error;
mod output;

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Shell completions need no client.
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "nlbctl", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            let ctx = build_ctx(&cli.global)?;
            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &ctx).await
        }
    }
}

/// Resolve config + flags into a connected [`commands::Ctx`].
fn build_ctx(global: &cli::GlobalOpts) -> Result<commands::Ctx, CliError> {
    let cfg = config::load_config()?;
    let target = config::resolve_target(global, &cfg)?;

    let credential = nlb_api::Credential::from_env()
        .map_err(|e| CliError::NoCredentials { message: e.to_string() })?;

    let endpoint = match (&target.endpoint, &target.region) {
        (Some(url), _) => nlb_api::Endpoint::custom(url).map_err(|e| CliError::Validation {
            field: "endpoint".into(),
            reason: e.to_string(),
        })?,
        (None, Some(region)) => nlb_api::Endpoint::regional(region),
        (None, None) => return Err(CliError::NoRegion),
    };

    let transport = nlb_api::TransportConfig::default()
        .with_timeout(Duration::from_secs(global.timeout));
    let client = nlb_api::Client::with_transport(credential, endpoint, &transport)?;

    Ok(commands::Ctx {
        client,
        region: target.region,
        output: global.output,
        color: output::should_color(global.color),
        quiet: global.quiet,
        yes: global.yes,
    })
}
