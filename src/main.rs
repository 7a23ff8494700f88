//! `license-matchr`: classify license files against known templates and enforce policy.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load policy config ([`config::load_config`]).
//! 3. Build the template registry ([`license_matchr::builtin`]).
//! 4. Detect license files under each path ([`detector::detect_license_files`]).
//! 5. Classify each file and apply policy ([`config::apply_policy`]).
//! 6. Render the requested report ([`report`]).
//! 7. Exit `0` (clean) or `1` (at least one [`config::Verdict::Error`]).

mod cli;
mod config;
mod detector;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use license_matchr::builtin;

use cli::{Cli, ReportFormat};
use config::{apply_policy, load_config, Verdict};
use detector::detect_license_files;
use report::FileReport;

/// Progress is only worth drawing for larger scans.
const PROGRESS_THRESHOLD: usize = 16;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config lives alongside the first scanned directory.
    let project_path = cli
        .paths
        .iter()
        .find(|p| p.is_dir())
        .cloned()
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    let config = load_config(&project_path, cli.config.as_deref())?;

    let registry = builtin::registry().context("building the license template registry")?;

    // Collect license files across all requested paths
    let mut files = Vec::new();
    for path in &cli.paths {
        let found = detect_license_files(path);
        if !cli.quiet {
            eprintln!(
                "  {} {}: {} license file(s)",
                "→".cyan(),
                path.display(),
                found.len()
            );
        }
        files.extend(found);
    }
    files.sort();
    files.dedup();

    if files.is_empty() {
        eprintln!(
            "No license files found under {}",
            cli.paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        std::process::exit(1);
    }

    let pb = if !cli.quiet && files.len() >= PROGRESS_THRESHOLD {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    // Classify each file and apply policy verdicts
    let mut reports = Vec::new();
    for file in &files {
        let raw = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
        let text = String::from_utf8_lossy(&raw);
        let classification = registry.classify(&text);
        let verdict = apply_policy(&config, &classification);

        reports.push(FileReport {
            path: file.clone(),
            matches: classification.matches().to_vec(),
            remainder: (!classification.is_fully_matched())
                .then(|| classification.remainder().to_string()),
            verdict,
        });

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    // Render report
    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&reports, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", report::json::render(&reports)?);
        }
    }

    // Exit code: 1 if any error verdict found
    let has_errors = reports.iter().any(|r| r.verdict == Verdict::Error);

    if has_errors {
        std::process::exit(1);
    }

    Ok(())
}
