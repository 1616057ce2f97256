//! Output formatting for ens-inspect CLI
//!
//! Provides human-readable and JSON output formatting for all commands.

use alloy_primitives::Address;
use anyhow::Result;
use serde::Serialize;

use ens_inspect::state::presentation::{
    format_expiry, format_timestamp, relative_days, resolver_label, state_tags, subname_tags,
    wrapper_label,
};
use ens_inspect::state::{ExpiryStatus, NameState, SubnameNode, SubnameTree};
use ens_inspect::types::address::{format_address_full, format_address_short};
use ens_inspect::types::fuses::FuseSummary;
use ens_inspect::types::ResolvedAddress;

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Zero address shows as `-`.
pub fn format_address(addr: &Address) -> String {
    if *addr == Address::ZERO {
        "-".to_string()
    } else {
        format_address_full(addr)
    }
}

fn format_opt_address(addr: Option<Address>) -> String {
    addr.map_or_else(|| "-".to_string(), |a| format_address(&a))
}

fn row(out: &mut String, key: &str, value: impl std::fmt::Display) {
    out.push_str(&format!("  {:<18} {}\n", format!("{key}:"), value));
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("\n\x1b[1m{title}\x1b[0m\n"));
}

/// Tags as colored chips: red for problems, yellow for warnings.
pub fn format_tags(tags: &[&str]) -> String {
    tags.iter()
        .map(|tag| {
            let color = match *tag {
                "Invalid Name" | "Expired" | "Out of Sync" | "Expired Wrapped Name" => "31",
                "Grace Period" | "Expiring Soon" | "Resolver not wrapper-aware" | "Old Resolver" => {
                    "33"
                }
                _ => "36",
            };
            format!("\x1b[{color}m[{tag}]\x1b[0m")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_expiry_line(expiry: Option<u64>, status: ExpiryStatus, now: u64) -> String {
    match (format_expiry(expiry), expiry) {
        (Some(date), Some(secs)) => format!("{date} ({})", relative_days(secs, now)),
        _ if status == ExpiryStatus::NotApplicable => "-".to_string(),
        _ => "never registered".to_string(),
    }
}

pub fn format_fuses(fuses: &FuseSummary) -> String {
    let mut out = String::new();
    row(&mut out, "Value", format!("{} (0x{:x})", fuses.bits, fuses.bits));
    let burned = if fuses.burned.is_empty() {
        "none".to_string()
    } else {
        fuses.burned.join(", ")
    };
    row(&mut out, "Burned", burned);
    if fuses.custom_owner_burned > 0 || fuses.custom_parent_burned > 0 {
        row(
            &mut out,
            "Custom burned",
            format!(
                "{} owner, {} parent",
                fuses.custom_owner_burned, fuses.custom_parent_burned
            ),
        );
    }

    let p = &fuses.permissions;
    let flags = [
        ("unwrap", p.can_unwrap),
        ("burn fuses", p.can_burn_fuses),
        ("transfer", p.can_transfer),
        ("set resolver", p.can_set_resolver),
        ("set TTL", p.can_set_ttl),
        ("create subdomains", p.can_create_subdomain),
        ("approve", p.can_approve),
        ("extend expiry", p.can_extend_expiry),
    ];
    let (allowed, denied): (Vec<_>, Vec<_>) = flags.iter().partition(|(_, ok)| *ok);
    let names = |list: Vec<&(&str, bool)>| {
        if list.is_empty() {
            "-".to_string()
        } else {
            list.iter().map(|(n, _)| *n).collect::<Vec<_>>().join(", ")
        }
    };
    row(&mut out, "Can", names(allowed));
    row(&mut out, "Cannot", names(denied));
    row(
        &mut out,
        "Parent control",
        if p.parent_can_control { "yes" } else { "no" },
    );
    out
}

/// Format a full name state.
pub fn format_name_state(state: &NameState, verbose: bool) -> String {
    let mut out = String::new();
    let display = if state.name.best_display_name.is_empty() {
        "[root]"
    } else {
        state.name.best_display_name.as_str()
    };
    out.push_str(&format!("\x1b[1m{display}\x1b[0m  {}\n", format_tags(&state_tags(state))));

    if !state.name.is_name_valid {
        out.push_str(&format!(
            "\x1b[31m✗ {}\x1b[0m\n",
            state.name.normalization_error.as_deref().unwrap_or("invalid name")
        ));
        return out;
    }
    if state.info.is_none() {
        out.push_str("\x1b[33m! No chain data could be read; run with --verbose for details\x1b[0m\n");
    }

    row(&mut out, "Chain", state.chain);
    if let Some(info) = &state.info {
        row(&mut out, "Node", info.node.hex());
    }
    row(&mut out, "Evaluated at", format_timestamp(state.evaluated_at));

    section(&mut out, "Ownership");
    row(&mut out, "Owner", format_opt_address(state.owner));
    row(&mut out, "Registry owner", format_address(&state.registry.owner));
    if let Some(registrar) = &state.registrar {
        row(&mut out, "Registrant", format_opt_address(registrar.owner));
    }
    row(&mut out, "Wrapper state", wrapper_label(state.wrapper_state));
    if let Some(parent) = state.parent_wrapper_state {
        row(&mut out, "Parent state", wrapper_label(parent));
    }

    section(&mut out, "Expiry");
    row(
        &mut out,
        "Expires",
        format_expiry_line(state.expiry, state.expiry_status, state.evaluated_at),
    );
    if let Some(end) = state.grace_period_end {
        row(&mut out, "Grace ends", format_timestamp(end));
    }
    if state.wrapper_state.is_wrapped() {
        row(&mut out, "Wrapper expiry", format_timestamp(state.wrapper.expiry));
    }

    if state.wrapper_state.is_wrapped() || verbose {
        section(&mut out, "Fuses");
        out.push_str(&format_fuses(&state.fuses));
    }

    section(&mut out, "Resolver");
    match &state.resolver {
        Some(resolver) => {
            row(&mut out, "Resolver", format_address(&resolver.resolver));
            row(&mut out, "Kind", resolver_label(resolver.kind));
            if resolver.is_wildcard {
                row(&mut out, "Wildcard", "yes (no resolver set on the name itself)");
            }
        }
        None => row(&mut out, "Resolver", "-"),
    }
    match &state.resolution {
        ResolvedAddress::Resolved { .. } => {
            row(&mut out, "ETH address", format_opt_address(state.eth_address));
        }
        ResolvedAddress::Failed { reason } => {
            row(&mut out, "ETH address", format!("- ({reason})"));
        }
    }
    if let Some(avatar) = &state.avatar {
        row(&mut out, "Avatar", avatar);
    }
    if let Some(primary) = &state.primary_name {
        row(&mut out, "Primary name", primary);
    }

    if verbose {
        section(&mut out, "Raw");
        row(&mut out, "Registry resolver", format_address(&state.registry.resolver));
        row(&mut out, "Wrapper owner", format_address(&state.wrapper.owner));
        if let Some(registrar) = &state.registrar {
            row(&mut out, "Registrar expiry", registrar.expiry);
        }
    }

    out
}

/// Format a subname tree, one indented row per node.
pub fn format_subname_tree(tree: &SubnameTree) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\x1b[1m{}\x1b[0m  (page {}, depth {}, {} per level)\n",
        tree.root.name, tree.page, tree.limits.max_depth, tree.limits.max_fanout
    ));
    if tree.root.children.is_empty() {
        out.push_str("  no subnames\n");
        return out;
    }
    for node in tree.root.preorder().into_iter().skip(1) {
        out.push_str(&format_subname_row(node));
    }
    out
}

fn format_subname_row(node: &SubnameNode) -> String {
    let owner = if node.wrapper_state.is_wrapped() {
        node.wrapper.owner
    } else {
        node.registry_owner
    };
    format!(
        "{}{:<24} {}  {}\n",
        "  ".repeat(node.depth),
        node.display_name,
        format_tags(&subname_tags(node)),
        if owner == Address::ZERO {
            "-".to_string()
        } else {
            format_address_short(&owner)
        }
    )
}
