//! Namehash command - node, labelhash, token ids and DNS encoding

use anyhow::{anyhow, Result};
use clap::Parser;
use serde::Serialize;

use ens_inspect::names::{dns_encode, Name, NameInfo};

use super::output::print_json;

#[derive(Parser, Debug)]
pub struct NamehashCmd {
    /// Name to hash; normalized first
    pub name: String,
}

#[derive(Serialize)]
struct NamehashView {
    #[serde(flatten)]
    info: NameInfo,
    labelhash: Option<String>,
    dns_encoded: String,
}

impl NamehashCmd {
    pub fn execute(&self, json_output: bool) -> Result<()> {
        let name = Name::parse(&self.name);
        let info = name.info().ok_or_else(|| {
            anyhow!(
                "invalid name {:?}: {}",
                self.name,
                name.normalization_error.as_deref().unwrap_or("unknown error")
            )
        })?;
        let view = NamehashView {
            labelhash: info.labelhash().map(|h| h.hex()),
            dns_encoded: format!("0x{}", hex::encode(dns_encode(&info.name))),
            info,
        };

        if json_output {
            return print_json(&view);
        }

        let shown = if view.info.name.is_empty() {
            "[root]"
        } else {
            view.info.name.as_str()
        };
        println!("\x1b[1mName:\x1b[0m        {shown}");
        println!("\x1b[1mNode:\x1b[0m        {}", view.info.node.hex());
        if let Some(labelhash) = &view.labelhash {
            println!("\x1b[1mLabelhash:\x1b[0m   {labelhash}");
        }
        if let Some(token) = view.info.registrar_token_id {
            println!("\x1b[1mRegistrar id:\x1b[0m {token}");
        }
        println!("\x1b[1mWrapper id:\x1b[0m  {}", view.info.wrapper_token_id);
        println!("\x1b[1mDNS encoded:\x1b[0m {}", view.dns_encoded);
        Ok(())
    }
}
