//! Chains command - list supported chains and their contracts

use anyhow::Result;
use clap::Parser;

use ens_inspect::types::address::format_address_full;
use ens_inspect::{Chain, ChainContracts};

use super::output::print_json;
use super::CliContext;

#[derive(Parser, Debug)]
pub struct ChainsCmd {
    /// Only show this chain
    #[arg(long)]
    pub chain: Option<Chain>,
}

impl ChainsCmd {
    pub fn execute(&self, ctx: &CliContext, json_output: bool) -> Result<()> {
        let chains: Vec<&ChainContracts> = ctx
            .registry
            .iter()
            .filter(|c| self.chain.map_or(true, |only| c.chain == only))
            .collect();

        if json_output {
            return print_json(&chains);
        }

        for (i, contracts) in chains.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_chain(contracts);
        }
        Ok(())
    }
}

fn print_chain(c: &ChainContracts) {
    println!("\x1b[1m{}\x1b[0m (chain id {})", c.chain, c.chain.chain_id());
    println!("  Registry:           {}", format_address_full(&c.registry));
    println!("  BaseRegistrar:      {}", format_address_full(&c.base_registrar));
    println!("  NameWrapper:        {}", format_address_full(&c.name_wrapper));
    println!("  UniversalResolver:  {}", format_address_full(&c.universal_resolver));
    match c.latest_resolver() {
        Some(latest) => println!("  Latest resolver:    {}", format_address_full(&latest)),
        None => println!("  Latest resolver:    -"),
    }
    for old in c
        .public_resolvers
        .iter()
        .filter(|r| Some(**r) != c.latest_resolver())
    {
        println!("  Older resolver:     {}", format_address_full(old));
    }
    if let Some(url) = &c.subgraph_url {
        println!("  Subgraph:           {url}");
    }
}
