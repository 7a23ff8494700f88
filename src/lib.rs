//! Classify license texts against a registry of known license templates.
//!
//! A [`registry::Template`] describes one license as literal text plus its
//! variable regions (copyright lines, holder names, URLs). The compiled
//! [`registry::Registry`] scans an input left to right and reports every
//! recognized license with its byte span, plus the tail nothing matched.
//! Matching tolerates re-wrapped lines, case differences, typographic
//! quotes, and leading boilerplate, while variable regions stay bounded so
//! classification never runs away on adversarial input.
//!
//! ```
//! let registry = license_matchr::builtin::registry().unwrap();
//! let classification = registry.classify("some LICENSE file contents");
//! for m in classification.matches() {
//!     println!("{} at {}..{}", m.id, m.start, m.end);
//! }
//! ```

pub mod builtin;
mod classify;
pub mod models;
pub mod pattern;
pub mod registry;

pub use models::{Classification, Match};
pub use registry::{Registry, Template, TemplateError};
