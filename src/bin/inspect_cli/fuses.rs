//! Fuses command - break down a NameWrapper fuse value

use anyhow::Result;
use clap::Parser;

use ens_inspect::types::FuseSet;

use super::output::{format_fuses, print_json};

#[derive(Parser, Debug)]
pub struct FusesCmd {
    /// Fuse value, decimal or 0x-prefixed hex
    #[arg(value_parser = parse_fuse_mask)]
    pub mask: u32,
}

impl FusesCmd {
    pub fn execute(&self, json_output: bool) -> Result<()> {
        let summary = FuseSet::from_bits(self.mask).summary();
        if json_output {
            print_json(&summary)
        } else {
            print!("{}", format_fuses(&summary));
            Ok(())
        }
    }
}

fn parse_fuse_mask(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid fuse value {s:?}: {e}"))
}
