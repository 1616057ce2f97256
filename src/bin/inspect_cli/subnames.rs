//! Subnames command - one page of a name's subname tree

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use ens_inspect::snapshot::Snapshot;
use ens_inspect::{Chain, NameInspector, TreeLimits};

use super::output::{format_subname_tree, print_json};
use super::{resolve_now, CliContext};

#[derive(Parser, Debug)]
pub struct SubnamesCmd {
    /// Name whose subnames to list (second level or deeper)
    pub name: String,

    /// Snapshot JSON holding chain and indexer data
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Zero-based page of direct children
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    /// Levels below the name to include
    #[arg(long, default_value_t = TreeLimits::INDEXER.max_depth)]
    pub depth: usize,

    /// Children per level, also the page size
    #[arg(long, default_value_t = TreeLimits::INDEXER.max_fanout)]
    pub fanout: usize,

    #[arg(long)]
    pub chain: Option<Chain>,

    #[arg(long)]
    pub now: Option<u64>,
}

impl SubnamesCmd {
    pub async fn execute(&self, ctx: &CliContext, json_output: bool) -> Result<()> {
        if self.fanout == 0 {
            bail!("--fanout must be at least 1");
        }
        let snapshot = Snapshot::from_file(&self.snapshot)?;
        let chain = ctx.resolve_chain(self.chain, &snapshot)?;
        let now = resolve_now(self.now, snapshot.now());
        let limits = TreeLimits {
            max_depth: self.depth,
            max_fanout: self.fanout,
        };

        let inspector = NameInspector::new(ctx.registry.contracts(chain).clone(), &snapshot, &snapshot);
        let tree = inspector.subnames(&self.name, self.page, limits, now).await?;

        if json_output {
            print_json(&tree)
        } else {
            print!("{}", format_subname_tree(&tree));
            Ok(())
        }
    }
}
