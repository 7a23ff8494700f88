use std::path::{Path, PathBuf};

/// File-name prefixes that mark a file as license-like, compared
/// case-insensitively.
const LICENSE_PREFIXES: &[&str] = &["LICENSE", "LICENCE", "COPYING", "UNLICENSE"];

/// Collect the license-like files to classify under `path`.
///
/// A file path is taken as-is. For a directory, its direct entries whose
/// names start with a known prefix (so `LICENSE`, `LICENSE.md`,
/// `COPYING.txt`, `LICENSE-APACHE` all qualify) are returned in sorted
/// order. Subdirectories are not traversed.
pub fn detect_license_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }

    let Ok(entries) = std::fs::read_dir(path) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && is_license_name(p))
        .collect();
    files.sort();
    files
}

fn is_license_name(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let upper = name.to_uppercase();
    LICENSE_PREFIXES.iter().any(|prefix| upper.starts_with(prefix))
}
