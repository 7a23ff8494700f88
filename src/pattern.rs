//! Turns a license template into a matchable pattern.
//!
//! A template variant is an ordered list of [`Segment`]s: literal text plus
//! the variable regions license text carries in the wild (copyright lines,
//! project names, URLs, separator rules, leading header noise). [`compile`]
//! folds the list into a single anchored, case-insensitive [`Regex`]:
//!
//! - every run of whitespace in literal text matches *any* run of whitespace
//!   in the input, so text re-wrapped at a different column still matches;
//! - any straight or typographic quote in literal text matches any character
//!   from the quote pool `" “ ” ' ‘ ’`;
//! - a period ending a literal segment is optional in the input;
//! - consecutive segments are joined by optional whitespace.
//!
//! Variable regions are bounded (a free-text gap never crosses a newline and
//! caps its length), which together with the regex engine's linear-time
//! matching keeps classification time proportional to the input size.

use regex::{Regex, RegexBuilder};

/// Straight and typographic quote characters, treated as one pool.
const QUOTES: &str = "\"\u{201c}\u{201d}'\u{2018}\u{2019}";
const QUOTE_CLASS: &str = "[\"\u{201c}\u{201d}'\u{2018}\u{2019}]";

/// Maximum length of a project-name line tolerated as header noise.
const PROJECT_NAME_MAX: usize = 15;

const COPYRIGHT: &str =
    r"(?:Portions[ \t])?Copyright[ \t][^\n]*(?:\s+All\s+rights\s+reserved\.)?";
const URL: &str = r"https?://\S+";
const RULE: &str = r"(?:=+|-{3,}|\*{3,})";
const BASED_ON: &str = r"-\s+Based\s+on\s+[^\n]*\n\s*";

/// Sample values used to render a variant's canonical text for the
/// registry's self-match check.
const SAMPLE_COPYRIGHT: &str = "Copyright (c) 2015 The Sample Authors. All rights reserved.";
const SAMPLE_FREE_TEXT: &str = "sample-project";
const SAMPLE_URL: &str = "https://example.com/project";
const SAMPLE_RULE: &str = "================";
const SAMPLE_BASED_ON: &str = "- Based on sample-project\n";

/// One building block of a template variant.
#[derive(Debug, Clone)]
pub enum Segment {
    /// Literal template text, normalized as described at the module level.
    Text(String),
    /// Zero or more lines of header noise ahead of the body: a license-name
    /// restatement (one of `titles`, optionally prefixed with "The" and/or
    /// wrapped in parentheses), a copyright line, a short project-name line,
    /// a URL, or a separator rule.
    Header { titles: Vec<String> },
    /// A copyright line: optional "Portions" qualifier, "Copyright", the rest
    /// of the line, and an optional "All rights reserved." clause on the same
    /// or next line.
    Copyright,
    /// Up to `max` characters of free text, never crossing a newline.
    FreeText(usize),
    /// An `http(s)://` URL token.
    Url,
    /// A run of separator characters (`=`, or at least three `-`/`*`).
    Rule,
    /// A "- Based on <text>" attribution line. As the final segment of a
    /// variant it announces an embedded secondary license: the classifier
    /// re-enters the registry on whatever follows.
    BasedOn,
}

impl Segment {
    pub fn text(body: impl Into<String>) -> Self {
        Segment::Text(body.into())
    }

    pub fn header(titles: &[&str]) -> Self {
        Segment::Header {
            titles: titles.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn pattern(&self) -> String {
        match self {
            Segment::Text(body) => literal_pattern(body),
            Segment::Header { titles } => header_pattern(titles),
            Segment::Copyright => COPYRIGHT.to_string(),
            Segment::FreeText(max) => format!(r"[^\n]{{0,{max}}}"),
            Segment::Url => URL.to_string(),
            Segment::Rule => RULE.to_string(),
            Segment::BasedOn => BASED_ON.to_string(),
        }
    }

    fn sample(&self) -> String {
        match self {
            Segment::Text(body) => body.clone(),
            Segment::Header { .. } => String::new(),
            Segment::Copyright => SAMPLE_COPYRIGHT.to_string(),
            Segment::FreeText(max) => SAMPLE_FREE_TEXT[..SAMPLE_FREE_TEXT.len().min(*max)].to_string(),
            Segment::Url => SAMPLE_URL.to_string(),
            Segment::Rule => SAMPLE_RULE.to_string(),
            Segment::BasedOn => SAMPLE_BASED_ON.to_string(),
        }
    }
}

/// A compiled template variant: the anchored matcher plus whether the variant
/// ends in a [`Segment::BasedOn`] attribution.
#[derive(Debug)]
pub struct CompiledPattern {
    pub(crate) regex: Regex,
    pub(crate) embedded: bool,
}

/// Compile a segment list into its [`CompiledPattern`].
///
/// The pattern is anchored at the start of the haystack and tolerates leading
/// and trailing whitespace, so a match's end offset lands after any blank
/// lines trailing the body.
pub(crate) fn compile(segments: &[Segment]) -> Result<CompiledPattern, regex::Error> {
    let mut pattern = String::from(r"\A\s*");
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            pattern.push_str(r"\s*");
        }
        pattern.push_str(&segment.pattern());
    }
    pattern.push_str(r"\s*");

    let regex = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
    Ok(CompiledPattern {
        regex,
        embedded: matches!(segments.last(), Some(Segment::BasedOn)),
    })
}

/// Render the canonical text of a segment list, variable regions filled with
/// representative samples. Used by the registry's self-match check and by
/// tests.
pub(crate) fn render_canonical(segments: &[Segment]) -> String {
    let mut parts = Vec::new();
    for segment in segments {
        let sample = segment.sample();
        if !sample.is_empty() {
            parts.push(sample);
        }
    }
    parts.join("\n")
}

/// Normalize literal template text into a regex fragment.
fn literal_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() * 2);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
            }
            pattern.push_str(r"\s+");
        } else if QUOTES.contains(c) {
            pattern.push_str(QUOTE_CLASS);
        } else if c == '.' && chars.peek().is_none() {
            pattern.push_str(r"\.?");
        } else {
            pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
        }
    }
    pattern
}

fn header_pattern(titles: &[String]) -> String {
    let mut alternatives = Vec::new();
    if !titles.is_empty() {
        let names: Vec<String> = titles.iter().map(|t| literal_pattern(t)).collect();
        alternatives.push(format!(r"\(?(?:The\s+)?(?:{})\)?", names.join("|")));
    }
    alternatives.push(COPYRIGHT.to_string()); // copyright line
    alternatives.push(format!(r"[^\n]{{0,{PROJECT_NAME_MAX}}}")); // project name
    alternatives.push(URL.to_string()); // project url
    alternatives.push(RULE.to_string()); // separator
    format!(r"(?:(?:{})\s*\n\s*)*", alternatives.join("|"))
}
