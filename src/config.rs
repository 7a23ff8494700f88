use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use license_matchr::Classification;

/// Root configuration structure, deserialized from `.license-matchr/config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// License policy rules.
    pub policy: PolicyConfig,
}

/// Defines how recognized licenses are evaluated.
#[derive(Debug, Deserialize)]
pub struct PolicyConfig {
    /// Verdict applied to any license not explicitly listed in `licenses`.
    /// Defaults to `warn`.
    #[serde(default = "default_policy_action")]
    pub default: PolicyAction,
    /// Per-license overrides keyed by template id (e.g. `"MIT"`, `"MPL-2.0"`).
    /// The key `"unknown"` covers unrecognized or partially recognized files.
    #[serde(default)]
    pub licenses: HashMap<String, PolicyAction>,
}

fn default_policy_action() -> PolicyAction {
    PolicyAction::Warn
}

/// The action to take when a file's license matches a policy rule.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum PolicyAction {
    /// File is compliant; no action needed.
    Pass,
    /// File warrants review but does not fail the scan.
    Warn,
    /// File violates policy; the CLI exits with code 1.
    Error,
}

impl PolicyAction {
    /// Convert to the corresponding [`Verdict`].
    pub fn to_verdict(&self) -> Verdict {
        match self {
            PolicyAction::Pass => Verdict::Pass,
            PolicyAction::Warn => Verdict::Warn,
            PolicyAction::Error => Verdict::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Error,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "pass"),
            Verdict::Warn => write!(f, "warn"),
            Verdict::Error => write!(f, "error"),
        }
    }
}

impl Default for Config {
    /// Built-in default policy used when no config file is found.
    ///
    /// The permissive built-in templates pass, weak-copyleft MPL warns, and
    /// anything unrecognized warns.
    fn default() -> Self {
        let mut licenses = HashMap::new();
        licenses.insert("MIT".to_string(), PolicyAction::Pass);
        licenses.insert("Apache-2.0".to_string(), PolicyAction::Pass);
        licenses.insert("BSD-2-Clause".to_string(), PolicyAction::Pass);
        licenses.insert("BSD-3-Clause".to_string(), PolicyAction::Pass);
        licenses.insert("ISC".to_string(), PolicyAction::Pass);
        licenses.insert("Zlib".to_string(), PolicyAction::Pass);
        licenses.insert("Unlicense".to_string(), PolicyAction::Pass);
        licenses.insert("MPL-2.0".to_string(), PolicyAction::Warn);
        licenses.insert("unknown".to_string(), PolicyAction::Warn);

        Config {
            policy: PolicyConfig {
                default: PolicyAction::Warn,
                licenses,
            },
        }
    }
}

/// Load the policy configuration, searching in order:
///
/// 1. `config_override`, the path passed via `--config`
/// 2. `<project_path>/.license-matchr/config.toml`
/// 3. `~/.config/license-matchr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = project_path.join(".license-matchr").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-matchr")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}

/// Determine the policy verdict for one classified file.
///
/// Every recognized license id participates, embedded ones included, and the
/// most restrictive verdict wins. A file with no matches, or with unmatched
/// text left over, additionally evaluates the `"unknown"` rule.
pub fn apply_policy(config: &Config, classification: &Classification) -> Verdict {
    let ids = classification.ids();

    let mut verdict = if ids.is_empty() || !classification.is_fully_matched() {
        lookup(config, "unknown")
    } else {
        Verdict::Pass
    };

    for id in ids {
        verdict = verdict_and(verdict, lookup(config, id));
    }
    verdict
}

/// Look up a single template id in the policy map.
fn lookup(config: &Config, id: &str) -> Verdict {
    match config.policy.licenses.get(id) {
        Some(action) => action.to_verdict(),
        None => config.policy.default.to_verdict(),
    }
}

/// Most restrictive (most severe) of two verdicts.
/// Error > Warn > Pass
fn verdict_and(a: Verdict, b: Verdict) -> Verdict {
    match (a, b) {
        (Verdict::Error, _) | (_, Verdict::Error) => Verdict::Error,
        (Verdict::Warn, _) | (_, Verdict::Warn) => Verdict::Warn,
        _ => Verdict::Pass,
    }
}
