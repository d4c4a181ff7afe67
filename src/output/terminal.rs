//! Terminal output with colors.

use crate::models::{CheckResult, ComparisonResult};
use colored::Colorize;
use std::fmt::Write;

/// Format a value as a left-aligned field of at least `width` characters.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:<width$}")
}

/// Render the report for a single text scan.
pub fn render_check_report(result: &CheckResult) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "# valid={} invalid={} overlaps={}",
        result.valid_networks.len(),
        result.invalid_strings.len(),
        result.overlapping_pairs.len()
    );

    if !result.valid_networks.is_empty() {
        let _ = writeln!(out, "{}", "Valid networks:".bold());
        for (i, net) in result.valid_networks.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {cnt} {original} {address} /{prefix} {kind}",
                cnt = format_field(i + 1, 4),
                original = format_field(&net.original, 20),
                address = format_field(net.to_ipv4_addr(), 16),
                prefix = format_field(net.prefix_length, 3),
                kind = if net.is_cidr { "cidr" } else { "host" },
            );
        }
    }

    if !result.invalid_strings.is_empty() {
        let _ = writeln!(out, "{}", "Invalid tokens:".bold());
        for token in &result.invalid_strings {
            let _ = writeln!(out, "  {}", token.red());
        }
    }

    if result.overlapping_pairs.is_empty() {
        let _ = writeln!(out, "{}", "No overlapping networks.".green());
    } else {
        let _ = writeln!(out, "{}", "Overlapping networks:".bold());
        for (first, second) in &result.overlapping_pairs {
            let _ = writeln!(
                out,
                "  {} {} {}",
                format_field(first, 20).yellow(),
                "<->".on_red(),
                second.yellow()
            );
        }
    }

    out
}

/// Render the report for a two list comparison.
pub fn render_comparison_report(result: &ComparisonResult) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "# first={} second={} common={} only_first={} only_second={}",
        result.total_first,
        result.total_second,
        result.common.len(),
        result.only_in_first.len(),
        result.only_in_second.len()
    );

    if result.identical {
        let _ = writeln!(out, "{}", "Lists are identical.".green());
    } else {
        let _ = writeln!(out, "{}", "Lists differ.".red());
    }

    let sections = [
        ("Common:", &result.common),
        ("Only in first:", &result.only_in_first),
        ("Only in second:", &result.only_in_second),
    ];
    for (title, items) in sections {
        if items.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}", title.bold());
        for item in items {
            let _ = writeln!(out, "  {item}");
        }
    }

    out
}
