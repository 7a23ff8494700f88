use serde::Serialize;

/// One recognized license occurrence: template id, the byte span it covers,
/// and the embedded secondary license announced by an attribution line, if
/// any. An embedded match extends the outer span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub id: String,
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Box<Match>>,
}

impl Match {
    /// This match's id followed by the ids of its embedded chain.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids = vec![self.id.as_str()];
        let mut inner = self.embedded.as_deref();
        while let Some(m) = inner {
            ids.push(m.id.as_str());
            inner = m.embedded.as_deref();
        }
        ids
    }
}

/// The outcome of classifying one text: the recognized occurrences in
/// left-to-right order plus whatever tail no template matched.
#[derive(Debug, Clone)]
pub struct Classification<'t> {
    text: &'t str,
    matches: Vec<Match>,
    remainder_start: usize,
}

impl<'t> Classification<'t> {
    pub(crate) fn new(text: &'t str, matches: Vec<Match>, remainder_start: usize) -> Self {
        Classification {
            text,
            matches,
            remainder_start,
        }
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// The unmatched tail of the input. Empty when everything was consumed.
    pub fn remainder(&self) -> &'t str {
        &self.text[self.remainder_start..]
    }

    /// True when no unmatched text is left, ignoring trailing whitespace.
    pub fn is_fully_matched(&self) -> bool {
        self.remainder().trim().is_empty()
    }

    /// All recognized ids, embedded ones included, in reading order.
    pub fn ids(&self) -> Vec<&str> {
        self.matches.iter().flat_map(|m| m.ids()).collect()
    }

    /// The input slice a match covers.
    pub fn span_text(&self, m: &Match) -> &'t str {
        &self.text[m.start..m.end]
    }
}
