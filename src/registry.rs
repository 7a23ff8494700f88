//! The template registry: an ordered set of compiled license templates.
//!
//! Registration order is the priority order. When several templates could
//! match at the same position the classifier takes the one registered first,
//! so a template whose text extends another (MIT with an attribution line,
//! Apache with its appendix) must be registered ahead of the shorter one or
//! the shorter one will steal the match and strand the tail.
//!
//! [`RegistryBuilder::build`] validates every variant up front: the pattern
//! must compile, must not match the empty string (the classifier relies on
//! every match consuming input), and must fully match its own canonical
//! rendering. A registry that builds is safe to share across threads.

use thiserror::Error;

use crate::pattern::{self, CompiledPattern, Segment};

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template `{id}` variant {variant} failed to compile: {source}")]
    Compile {
        id: String,
        variant: usize,
        #[source]
        source: regex::Error,
    },
    #[error("template `{id}` has no variants")]
    NoVariants { id: String },
    #[error("template `{id}` variant {variant} matches the empty string")]
    MatchesEmpty { id: String, variant: usize },
    #[error("template `{id}` variant {variant} does not match its own canonical text")]
    SelfMatch { id: String, variant: usize },
}

/// A license template: an identifier, a human-readable name, and one or more
/// textual variants in decreasing priority order.
#[derive(Debug, Clone)]
pub struct Template {
    id: String,
    name: String,
    variants: Vec<Variant>,
}

#[derive(Debug, Clone)]
pub struct Variant {
    segments: Vec<Segment>,
}

impl Template {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Template {
            id: id.into(),
            name: name.into(),
            variants: Vec::new(),
        }
    }

    /// Append a variant. Within a template, earlier variants win.
    pub fn variant(mut self, segments: Vec<Segment>) -> Self {
        self.variants.push(Variant { segments });
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }
}

impl Variant {
    /// The variant's canonical text, variable regions filled with samples.
    pub fn canonical(&self) -> String {
        pattern::render_canonical(&self.segments)
    }
}

#[derive(Debug)]
pub(crate) struct CompiledTemplate {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) patterns: Vec<CompiledPattern>,
}

/// An immutable, validated set of templates ready for classification.
#[derive(Debug)]
pub struct Registry {
    templates: Vec<CompiledTemplate>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            templates: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Template identifiers in priority order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.id.as_str())
    }

    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.as_str())
    }

    pub(crate) fn templates(&self) -> &[CompiledTemplate] {
        &self.templates
    }
}

pub struct RegistryBuilder {
    templates: Vec<Template>,
}

impl RegistryBuilder {
    /// Append a template at the lowest priority so far.
    pub fn register(mut self, template: Template) -> Self {
        self.templates.push(template);
        self
    }

    /// Compile and validate every variant of every template.
    pub fn build(self) -> Result<Registry, TemplateError> {
        let mut templates = Vec::with_capacity(self.templates.len());
        for template in &self.templates {
            if template.variants.is_empty() {
                return Err(TemplateError::NoVariants {
                    id: template.id.clone(),
                });
            }
            let mut patterns = Vec::with_capacity(template.variants.len());
            for (index, variant) in template.variants.iter().enumerate() {
                let compiled = pattern::compile(&variant.segments).map_err(|source| {
                    TemplateError::Compile {
                        id: template.id.clone(),
                        variant: index,
                        source,
                    }
                })?;
                if compiled.regex.is_match("") {
                    return Err(TemplateError::MatchesEmpty {
                        id: template.id.clone(),
                        variant: index,
                    });
                }
                let canonical = variant.canonical();
                let consumed = compiled
                    .regex
                    .find(&canonical)
                    .is_some_and(|m| m.end() == canonical.len());
                if !consumed {
                    return Err(TemplateError::SelfMatch {
                        id: template.id.clone(),
                        variant: index,
                    });
                }
                patterns.push(compiled);
            }
            templates.push(CompiledTemplate {
                id: template.id.clone(),
                name: template.name.clone(),
                patterns,
            });
        }
        Ok(Registry { templates })
    }
}
