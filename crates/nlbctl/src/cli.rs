//! Command-line argument tree.

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "nlbctl",
    version,
    about = "Manage Alibaba Cloud Network Load Balancers",
    long_about = "Manage Alibaba Cloud Network Load Balancers (NLB): instances, \
                  listeners, server groups, TLS policies, tags, and async jobs.\n\n\
                  Credentials are read from ALIBABA_CLOUD_ACCESS_KEY_ID / \
                  ALIBABA_CLOUD_ACCESS_KEY_SECRET."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Profile from the config file to use.
    #[arg(long, short = 'p', global = true, env = "NLBCTL_PROFILE")]
    pub profile: Option<String>,

    /// Region id, e.g. cn-hangzhou.
    #[arg(long, short = 'r', global = true, env = "ALIBABA_CLOUD_REGION_ID")]
    pub region: Option<String>,

    /// Override the API endpoint URL (VPC endpoints, testing).
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Output format.
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// When to colorize output.
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Assume "yes" for destructive-operation prompts.
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Request timeout in seconds.
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    JsonCompact,
    Yaml,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load balancer instances.
    #[command(subcommand)]
    Lb(LbCommand),

    /// Listeners.
    #[command(subcommand)]
    Listener(ListenerCommand),

    /// Server groups and their backends.
    #[command(subcommand)]
    ServerGroup(ServerGroupCommand),

    /// TLS security policies.
    #[command(subcommand)]
    Policy(PolicyCommand),

    /// Resource tags.
    #[command(subcommand)]
    Tag(TagCommand),

    /// Asynchronous jobs.
    #[command(subcommand)]
    Job(JobCommand),

    /// Regions where NLB is available.
    Regions,

    /// Availability zones of the selected region.
    Zones,

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

// ── lb ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum LbCommand {
    /// List instances in the region.
    List {
        /// Filter by status, e.g. Active, Provisioning.
        #[arg(long)]
        status: Option<String>,
        /// Filter by VPC.
        #[arg(long)]
        vpc_id: Option<String>,
        /// Filter by zone.
        #[arg(long)]
        zone_id: Option<String>,
    },

    /// Show the full attribute view of one instance.
    Get {
        /// Load balancer id (nlb-...).
        id: String,
    },

    /// Delete an instance.
    Delete {
        /// Load balancer id (nlb-...).
        id: String,
        /// Wait for the deletion job to finish.
        #[arg(long)]
        wait: bool,
    },

    /// Health of every listener backend on an instance.
    Health {
        /// Load balancer id (nlb-...).
        id: String,
    },
}

// ── listener ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ListenerCommand {
    /// List listeners, optionally scoped to one instance.
    List {
        /// Only listeners of this load balancer.
        #[arg(long)]
        lb: Option<String>,
    },

    /// Show one listener.
    Get {
        /// Listener id (lsn-...).
        id: String,
    },

    /// Start a stopped listener.
    Start {
        /// Listener id (lsn-...).
        id: String,
        /// Wait for the job to finish.
        #[arg(long)]
        wait: bool,
    },

    /// Stop a running listener.
    Stop {
        /// Listener id (lsn-...).
        id: String,
        /// Wait for the job to finish.
        #[arg(long)]
        wait: bool,
    },
}

// ── server-group ─────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ServerGroupCommand {
    /// List server groups.
    List {
        /// Filter by VPC.
        #[arg(long)]
        vpc_id: Option<String>,
    },

    /// List the backends of one server group.
    Servers {
        /// Server group id (sgp-...).
        id: String,
    },
}

// ── policy ───────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum PolicyCommand {
    /// List custom TLS policies.
    List,

    /// List the predefined system policies.
    System,
}

// ── tag ──────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum TagCommand {
    /// List tag bindings for resources of one type.
    List {
        /// Resource type: loadbalancer, listener, servergroup, securitypolicy.
        #[arg(long = "type", value_name = "TYPE")]
        resource_type: String,
        /// Resource ids to inspect.
        #[arg(long = "id", value_name = "ID")]
        ids: Vec<String>,
    },
}

// ── job ──────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum JobCommand {
    /// Show the status of one job.
    Status {
        /// Job id.
        id: String,
    },

    /// Block until a job reaches a terminal state.
    Wait {
        /// Job id.
        id: String,
        /// Poll interval in seconds.
        #[arg(long, default_value_t = 2)]
        interval: u64,
        /// Give up after this many seconds.
        #[arg(long, default_value_t = 300)]
        max_wait: u64,
    },
}

// ── completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_tree_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["nlbctl", "lb", "list", "-r", "cn-hangzhou", "-o", "json"])
            .unwrap();
        assert_eq!(cli.global.region.as_deref(), Some("cn-hangzhou"));
        assert_eq!(cli.global.output, OutputFormat::Json);
    }
}
