//! Inspect command - full state of a name from a snapshot

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use ens_inspect::snapshot::Snapshot;
use ens_inspect::{Chain, NameInspector};

use super::output::{format_name_state, print_json};
use super::{resolve_now, CliContext};

#[derive(Parser, Debug)]
pub struct InspectCmd {
    /// Name to inspect
    pub name: String,

    /// Snapshot JSON holding chain and indexer data
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Chain to inspect on (default: the snapshot's chain, then $ENS_INSPECT_CHAIN)
    #[arg(long)]
    pub chain: Option<Chain>,

    /// Evaluate at this unix time (default: $ENS_INSPECT_NOW, then the snapshot's time)
    #[arg(long)]
    pub now: Option<u64>,
}

impl InspectCmd {
    pub async fn execute(&self, ctx: &CliContext, json_output: bool, verbose: bool) -> Result<()> {
        let snapshot = Snapshot::from_file(&self.snapshot)?;
        let chain = ctx.resolve_chain(self.chain, &snapshot)?;
        let now = resolve_now(self.now, snapshot.now());

        let inspector = NameInspector::new(ctx.registry.contracts(chain).clone(), &snapshot, &snapshot);
        let state = inspector.inspect(&self.name, now).await;

        if json_output {
            print_json(&state)
        } else {
            print!("{}", format_name_state(&state, verbose));
            Ok(())
        }
    }
}
