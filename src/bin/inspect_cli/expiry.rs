//! Expiry command - classify an expiry timestamp

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use ens_inspect::state::expiry::grace_period_end;
use ens_inspect::state::presentation::{expiry_label, format_expiry, format_timestamp, relative_days};
use ens_inspect::state::{classify_expiry, ExpiryStatus};

use super::output::print_json;
use super::resolve_now;

#[derive(Parser, Debug)]
pub struct ExpiryCmd {
    /// Expiry as unix seconds; 0 means no expiry is tracked
    pub expiry: u64,

    /// Evaluate at this unix time instead of now
    #[arg(long)]
    pub now: Option<u64>,
}

#[derive(Serialize)]
struct ExpiryView {
    expiry: u64,
    now: u64,
    status: ExpiryStatus,
    grace_period_end: Option<u64>,
}

impl ExpiryCmd {
    pub fn execute(&self, json_output: bool) -> Result<()> {
        let now = resolve_now(self.now, None);
        let view = ExpiryView {
            expiry: self.expiry,
            now,
            status: classify_expiry(self.expiry, now),
            grace_period_end: grace_period_end(self.expiry),
        };

        if json_output {
            return print_json(&view);
        }

        let Some(date) = format_expiry(Some(view.expiry)) else {
            println!("No expiry tracked");
            return Ok(());
        };
        let status = expiry_label(view.status).unwrap_or("Active");
        println!("\x1b[1mStatus:\x1b[0m     {status}");
        println!(
            "\x1b[1mExpires:\x1b[0m    {date} ({})",
            relative_days(view.expiry, now)
        );
        if let Some(end) = view.grace_period_end {
            println!(
                "\x1b[1mGrace ends:\x1b[0m {} ({})",
                format_timestamp(end),
                relative_days(end, now)
            );
        }
        Ok(())
    }
}
