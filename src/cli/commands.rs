//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Command-line client for the Gumroad API
#[derive(Parser, Debug)]
#[command(name = "gumroad")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Access token for the Gumroad API
    #[arg(long, global = true, env = "GUMROAD_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Base URL of the API
    #[arg(long, global = true, env = "GUMROAD_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "3", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List your products
    GetProducts,

    /// List webhook subscriptions for an event category
    GetResourceSubscriptions {
        /// One of: sale, refund, dispute, dispute_won, cancellation,
        /// subscription_updated, subscription_ended, subscription_restarted
        name: Option<String>,
    },
}
