//! Terminal output.
//!
//! Renders calculator results as coloured, aligned text blocks.

use crate::models::{AddressClassification, BitBreakdown, SubnetPlan};
use crate::TutorError;
use colored::Colorize;
use std::fmt::Write;

/// Width of the label column.
const LABEL_WIDTH: usize = 15;

/// Format a value as a right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A right-aligned string, unchanged if already `width` or longer
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:>width$}")
    }
}

fn push_row(out: &mut String, label: &str, value: impl std::fmt::Display) {
    // writing to a String cannot fail
    let _ = writeln!(
        out,
        "{} {}",
        format_field(format!("{label}:"), LABEL_WIDTH),
        value.to_string().cyan()
    );
}

/// Render a subnet plan with the formula that produced it.
pub fn render_plan(plan: &SubnetPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Calculation Results".bold());
    push_row(&mut out, "Hosts Needed", plan.hosts_needed);
    push_row(&mut out, "Usable IPs", plan.usable_addresses);
    push_row(&mut out, "Total IPs", plan.total_addresses);
    push_row(&mut out, "Host Bits", plan.host_bits);
    push_row(&mut out, "Network Bits", plan.network_bits);
    push_row(&mut out, "Subnet Mask", &plan.subnet_mask);
    push_row(&mut out, "CIDR Notation", &plan.cidr_prefix);

    let _ = writeln!(out, "{}", "Formula Used:".bold());
    let _ = writeln!(
        out,
        "  Host Bits = ceil(log₂({} + 2)) = {}",
        plan.hosts_needed, plan.host_bits
    );
    let _ = write!(
        out,
        "  Usable IPs = 2^{} - 2 = {}",
        plan.host_bits, plan.usable_addresses
    );
    if plan.is_oversubscribed() {
        let _ = write!(
            out,
            "\n{} {} hosts need more than the whole IPv4 space, the prefix is not a real subnet",
            "Note:".yellow().bold(),
            plan.hosts_needed
        );
    }
    out
}

/// Render the outcome of classifying an address.
pub fn render_classification(classification: &AddressClassification) -> String {
    let address = match classification {
        AddressClassification::Invalid { reason } => {
            return format!("{} {}", "❌".red(), reason.red());
        }
        AddressClassification::Valid(address) => address,
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", "✅ Valid IP Address".green().bold());
    push_row(&mut out, "IP Address", &address.address);
    push_row(&mut out, "Class", address.address_class);
    push_row(&mut out, "Type", address.scope);
    let _ = write!(
        out,
        "{} {}",
        format_field("Binary:", LABEL_WIDTH),
        address.binary_representation.cyan()
    );
    out
}

/// Render an octet with its per-bit contributions.
pub fn render_breakdown(breakdown: &BitBreakdown) -> String {
    let mut out = String::new();
    push_row(&mut out, "Decimal", breakdown.decimal);
    push_row(&mut out, "Binary", &breakdown.binary);
    let bits: Vec<String> = breakdown
        .iter()
        .map(|bit| {
            let cell = format!(
                "{} (2^{} = {})",
                bit.bit_value,
                bit.exponent(),
                bit.contribution
            );
            if bit.is_set() {
                cell.green().bold().to_string()
            } else {
                cell.dimmed().to_string()
            }
        })
        .collect();
    let _ = write!(out, "  {}", bits.join("  "));
    out
}

/// Render the command summary.
pub fn render_help(commands: &[(&str, &str)]) -> String {
    let mut out = format!("{}\n", "Commands".bold());
    let width = commands.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    for (usage, description) in commands {
        let _ = writeln!(out, "  {usage:<width$}  {description}");
    }
    out.trim_end().to_string()
}

pub fn render_error(err: &TutorError) -> String {
    format!("{} {}", "❌".red(), err.to_string().red())
}
