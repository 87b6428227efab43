use crate::config::toml_config::TomlConfig;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "seednodes")]
#[command(about = "Discover teacher nodes and the node's external address")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(short, long, global = true, help = "Suppress progress and warning notices")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Connect to the preferred teacher nodes
    Teachers(TeachersArgs),
    /// Determine the node's public-facing IPv4 address
    ExternalIp(ExternalIpArgs),
}

#[derive(Debug, Clone, Args)]
pub struct TeachersArgs {
    /// Network domain to draw teachers from (repeatable)
    #[arg(long = "domain", value_delimiter = ',')]
    pub domains: Vec<String>,

    /// Teacher URI tried before any other source (repeatable)
    #[arg(long = "teacher")]
    pub teacher_uris: Vec<String>,

    #[arg(long)]
    pub min_stake: Option<u64>,

    #[arg(long)]
    pub federated_only: bool,

    /// Path to a static-nodes.json file
    #[arg(long)]
    pub static_nodes: Option<String>,

    /// Print the aggregated URI list without connecting
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ExternalIpArgs {
    /// Use the auto-detected address without asking
    #[arg(long)]
    pub force: bool,

    #[arg(long)]
    pub echo_url: Option<String>,
}

impl TeachersArgs {
    /// Flags given on the command line replace the file's values.
    pub fn apply_to(&self, config: &mut TomlConfig) {
        if !self.domains.is_empty() {
            config.network.domains = self.domains.clone();
        }
        if !self.teacher_uris.is_empty() {
            config.network.teacher_uris = self.teacher_uris.clone();
        }
        if let Some(min_stake) = self.min_stake {
            config.network.min_stake = min_stake;
        }
        if self.federated_only {
            config.network.federated_only = true;
        }
        if let Some(path) = &self.static_nodes {
            config.storage.static_nodes_file = Some(path.clone());
        }
    }
}

impl ExternalIpArgs {
    pub fn apply_to(&self, config: &mut TomlConfig) {
        if let Some(url) = &self.echo_url {
            config.address.echo_url = Some(url.clone());
        }
    }
}
