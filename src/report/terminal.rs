use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::config::Verdict;
use crate::report::FileReport;

/// Render a colored terminal report.
pub fn render(reports: &[FileReport], verbose: bool, quiet: bool) -> Result<()> {
    let total = reports.len();
    let pass_count = reports.iter().filter(|r| r.verdict == Verdict::Pass).count();
    let warn_count = reports.iter().filter(|r| r.verdict == Verdict::Warn).count();
    let error_count = reports.iter().filter(|r| r.verdict == Verdict::Error).count();

    if quiet {
        println!(
            "Total: {}  Pass: {}  Warn: {}  Error: {}",
            total,
            pass_count.to_string().green(),
            warn_count.to_string().yellow(),
            error_count.to_string().red(),
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "license-matchr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Classified {} license file(s)\n", total);

    let pass_licenses = summarize_licenses(reports, Verdict::Pass);
    let warn_licenses = summarize_licenses(reports, Verdict::Warn);
    let error_licenses = summarize_licenses(reports, Verdict::Error);

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Total files        : {}", total));
    println!(
        " │  {:<48} │",
        format!(
            "{}  Pass            : {:>4}  {}",
            "✓".green(),
            pass_count,
            pass_licenses
        )
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Warn            : {:>4}  {}",
            "⚠".yellow(),
            warn_count,
            warn_licenses
        )
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Error           : {:>4}  {}",
            "✗".red(),
            error_count,
            error_licenses
        )
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    if error_count > 0 {
        println!(" {} Files violating policy:\n", "[ERROR]".red().bold());
        render_table(reports, Verdict::Error);
        println!();
    }

    if warn_count > 0 {
        println!(" {} Files needing review:\n", "[WARN]".yellow().bold());
        render_table(reports, Verdict::Warn);
        println!();
    }

    if verbose && pass_count > 0 {
        println!(" {} All passing files:\n", "[PASS]".green().bold());
        render_table(reports, Verdict::Pass);
        println!();
    }

    Ok(())
}

fn render_table(reports: &[FileReport], verdict_filter: Verdict) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("Licenses").add_attribute(Attribute::Bold),
            Cell::new("Unmatched").add_attribute(Attribute::Bold),
            Cell::new("Verdict").add_attribute(Attribute::Bold),
        ]);

    for report in reports.iter().filter(|r| r.verdict == verdict_filter) {
        let (verdict_str, verdict_color) = match report.verdict {
            Verdict::Pass => ("✓ pass", Color::Green),
            Verdict::Warn => ("⚠ warn", Color::Yellow),
            Verdict::Error => ("✗ error", Color::Red),
        };

        let unmatched = match &report.remainder {
            Some(tail) => format!("{} bytes", tail.len()),
            None => "-".to_string(),
        };

        table.add_row(vec![
            Cell::new(report.path.display().to_string()),
            Cell::new(report.licenses_label()),
            Cell::new(unmatched).set_alignment(CellAlignment::Right),
            Cell::new(verdict_str)
                .fg(verdict_color)
                .set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);
}

/// Top license labels for one verdict bucket, e.g. `[MIT (12), unknown (2)]`.
fn summarize_licenses(reports: &[FileReport], verdict: Verdict) -> String {
    let mut counts: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    for report in reports.iter().filter(|r| r.verdict == verdict) {
        *counts.entry(report.licenses_label()).or_insert(0) += 1;
    }

    let mut pairs: Vec<(String, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let summary: Vec<String> = pairs
        .iter()
        .take(3)
        .map(|(label, count)| format!("{} ({})", label, count))
        .collect();

    if summary.is_empty() {
        String::new()
    } else {
        format!("[{}]", summary.join(", "))
    }
}
