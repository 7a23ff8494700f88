//! Report renderers for classification results.
//!
//! - [`terminal`]: colored, tabular output with summary box; respects `--verbose` / `--quiet`.
//! - [`json`]: machine-readable report of every file, match span, and verdict.

pub mod json;
pub mod terminal;

use std::path::PathBuf;

use serde::Serialize;

use license_matchr::Match;

use crate::config::Verdict;

/// Everything the renderers need to know about one classified file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub matches: Vec<Match>,
    /// Unmatched tail of the file, absent when fully matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remainder: Option<String>,
    pub verdict: Verdict,
}

impl FileReport {
    /// Human-readable license column: `MIT`, `MIT (embeds ISC)`,
    /// `Apache-2.0 + MIT`, or `unknown`.
    pub fn licenses_label(&self) -> String {
        if self.matches.is_empty() {
            return "unknown".to_string();
        }
        let labels: Vec<String> = self
            .matches
            .iter()
            .map(|m| {
                let ids = m.ids();
                if ids.len() == 1 {
                    ids[0].to_string()
                } else {
                    format!("{} (embeds {})", ids[0], ids[1..].join(", "))
                }
            })
            .collect();
        labels.join(" + ")
    }
}
