use anyhow::Result;

use crate::report::FileReport;

/// Serialize the reports as pretty-printed JSON.
pub fn render(reports: &[FileReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
