//! Normalize command - validate a name and show its display form

use anyhow::{bail, Result};
use clap::Parser;
use ens_inspect::Name;

use super::output::print_json;

#[derive(Parser, Debug)]
pub struct NormalizeCmd {
    /// Name as typed, e.g. "Nick.ETH"
    pub name: String,
}

impl NormalizeCmd {
    /// Prints the result either way; an invalid name also fails the command.
    pub fn execute(&self, json_output: bool) -> Result<()> {
        let name = Name::parse(&self.name);

        if json_output {
            print_json(&name)?;
        } else if let Some(normalized) = &name.normalized_name {
            println!("\x1b[1mNormalized:\x1b[0m {normalized}");
            println!("\x1b[1mDisplay:\x1b[0m    {}", name.best_display_name);
        }

        if !name.is_name_valid {
            bail!(
                "invalid name {:?}: {}",
                self.name,
                name.normalization_error.as_deref().unwrap_or("unknown error")
            );
        }
        Ok(())
    }
}
