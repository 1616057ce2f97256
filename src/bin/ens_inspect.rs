//! ens-inspect: ENS name state from the command line
//!
//! Every command is offline: name and fuse math runs locally, and chain state
//! comes from a JSON snapshot.
//!
//! ## Commands
//!
//! - **normalize**: Normalize a name and show its display form
//! - **namehash**: Node, labelhash, token ids and DNS encoding of a name
//! - **expiry**: Classify an expiry timestamp against now
//! - **fuses**: Break down a NameWrapper fuse value
//! - **inspect**: Full state of a name from a snapshot
//! - **subnames**: One page of a name's subname tree from a snapshot
//! - **chains**: Contract addresses for every supported chain
//!
//! ## Example Usage
//!
//! ```bash
//! # Normalize and hash
//! ens-inspect normalize 'Nick.ETH'
//! ens-inspect namehash nick.eth --json
//!
//! # What can the owner of a name with these fuses still do?
//! ens-inspect fuses 0x30001
//!
//! # Inspect from a snapshot at a fixed time
//! ens-inspect inspect nick.eth --snapshot state.json --now 1700000000
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod inspect_cli;

use inspect_cli::{
    chains::ChainsCmd, expiry::ExpiryCmd, fuses::FusesCmd, inspect::InspectCmd,
    namehash::NamehashCmd, normalize::NormalizeCmd, subnames::SubnamesCmd, CliContext,
};

#[derive(Parser)]
#[command(
    name = "ens-inspect",
    author,
    version,
    about = "Inspect ENS name state",
    long_about = "Deterministic ENS name inspection: normalization, hashing, NameWrapper fuses,\n\
                  resolver classification, expiry and subname trees."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Chain overrides file (default: $ENS_INSPECT_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (debug logs and raw records)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a name
    Normalize(NormalizeCmd),

    /// Compute the node, labelhash and token ids of a name
    Namehash(NamehashCmd),

    /// Classify an expiry timestamp
    Expiry(ExpiryCmd),

    /// Break down a NameWrapper fuse value
    Fuses(FusesCmd),

    /// Inspect a name from a snapshot
    Inspect(InspectCmd),

    /// Show a page of a name's subname tree from a snapshot
    Subnames(SubnamesCmd),

    /// List supported chains and their contracts
    Chains(ChainsCmd),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        command,
        config,
        json,
        verbose,
    } = Cli::parse();
    init_tracing(verbose);

    let ctx = CliContext::load(config.as_deref()).context("Failed to load chain configuration")?;

    match command {
        Commands::Normalize(cmd) => cmd.execute(json),
        Commands::Namehash(cmd) => cmd.execute(json),
        Commands::Expiry(cmd) => cmd.execute(json),
        Commands::Fuses(cmd) => cmd.execute(json),
        Commands::Inspect(cmd) => cmd.execute(&ctx, json, verbose).await,
        Commands::Subnames(cmd) => cmd.execute(&ctx, json).await,
        Commands::Chains(cmd) => cmd.execute(&ctx, json),
    }
}
