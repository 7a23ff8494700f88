//! The classifier: scans a text left to right against the registry.
//!
//! At each position every template's variants are tried in priority order and
//! the first hit is taken. The scan resumes after the matched span, so a file
//! carrying several concatenated licenses yields several matches. When a
//! variant ends in an attribution line the classifier re-enters the registry
//! on the following text and, on success, folds the inner match into the
//! outer one. The scan stops at the first position nothing matches; the rest
//! of the input becomes the remainder.
//!
//! Termination is structural. Validated patterns never match the empty
//! string, so every match and every recursion step consumes input.

use crate::models::{Classification, Match};
use crate::registry::Registry;

impl Registry {
    /// Classify `text` against every registered template.
    pub fn classify<'t>(&self, text: &'t str) -> Classification<'t> {
        let mut matches = Vec::new();
        let mut pos = 0;
        while pos < text.len() {
            let Some(found) = self.match_at(text, pos) else {
                break;
            };
            pos = found.end;
            matches.push(found);
        }
        Classification::new(text, matches, pos)
    }

    /// The highest-priority match starting at byte offset `pos`, if any.
    fn match_at(&self, text: &str, pos: usize) -> Option<Match> {
        for template in self.templates() {
            for pattern in &template.patterns {
                let Some(found) = pattern.regex.find(&text[pos..]) else {
                    continue;
                };
                let mut matched = Match {
                    id: template.id.clone(),
                    start: pos,
                    end: pos + found.end(),
                    embedded: None,
                };
                if pattern.embedded {
                    if let Some(inner) = self.match_at(text, matched.end) {
                        matched.end = inner.end;
                        matched.embedded = Some(Box::new(inner));
                    }
                }
                return Some(matched);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::builtin;
    use crate::pattern::Segment;
    use crate::registry::{Registry, Template};

    // The 73-column MIT text as it ships in countless repositories.
    const MIT_TEXT: &str = r#"MIT License

Copyright (c) 2020 Jane Doe

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
THE SOFTWARE.
"#;

    const ISC_TEXT: &str = r#"ISC License

Copyright (c) 2004 Sam Hocevar

Permission to use, copy, modify, and/or distribute this software for any
purpose with or without fee is hereby granted, provided that the above
copyright notice and this permission notice appear in all copies.

THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR
ANY SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN
ACTION OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF
OR IN CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.
"#;

    /// Re-wrap paragraphs at `width` columns, the way vendoring tools and
    /// text editors mangle license files.
    fn rewrap(text: &str, width: usize) -> String {
        let mut out = String::new();
        for paragraph in text.split("\n\n") {
            let mut col = 0;
            for word in paragraph.split_whitespace() {
                if col == 0 {
                    out.push_str(word);
                    col = word.len();
                } else if col + 1 + word.len() > width {
                    out.push('\n');
                    out.push_str(word);
                    col = word.len();
                } else {
                    out.push(' ');
                    out.push_str(word);
                    col += 1 + word.len();
                }
            }
            out.push_str("\n\n");
        }
        out
    }

    fn ids_of(text: &str) -> Vec<String> {
        let registry = builtin::registry().unwrap();
        registry
            .classify(text)
            .ids()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_exact_mit_text_is_a_single_full_match() {
        let registry = builtin::registry().unwrap();
        let classification = registry.classify(MIT_TEXT);

        assert_eq!(classification.matches().len(), 1);
        let m = &classification.matches()[0];
        assert_eq!(m.id, "MIT");
        assert_eq!(m.start, 0);
        assert_eq!(m.end, MIT_TEXT.len());
        assert!(m.embedded.is_none());
        assert!(classification.is_fully_matched());
        assert_eq!(classification.remainder(), "");
    }

    #[test]
    fn test_leading_boilerplate_is_absorbed() {
        let text = format!(
            "=== LICENSE ===\nsome-project\nhttps://example.com/some-project\n\n{MIT_TEXT}"
        );
        let registry = builtin::registry().unwrap();
        let classification = registry.classify(&text);

        assert_eq!(classification.matches().len(), 1);
        assert_eq!(classification.matches()[0].id, "MIT");
        assert!(classification.is_fully_matched());
    }

    #[test]
    fn test_unrelated_text_matches_nothing() {
        let text = "Proprietary. All use of this code is subject to the master\n\
                    services agreement signed with the vendor.\n";
        let registry = builtin::registry().unwrap();
        let classification = registry.classify(text);

        assert!(classification.matches().is_empty());
        assert_eq!(classification.remainder(), text);
        assert!(!classification.is_fully_matched());
    }

    #[test]
    fn test_rewrapped_text_still_matches() {
        assert_eq!(ids_of(&rewrap(MIT_TEXT, 40)), vec!["MIT"]);
        assert_eq!(ids_of(&rewrap(MIT_TEXT, 100)), vec!["MIT"]);
        assert_eq!(ids_of(&rewrap(ISC_TEXT, 60)), vec!["ISC"]);
    }

    #[test]
    fn test_typographic_quotes_still_match() {
        let curly = MIT_TEXT
            .replace("\"AS IS\"", "\u{201c}AS IS\u{201d}")
            .replace("\"Software\"", "\u{2018}Software\u{2019}");
        assert_eq!(ids_of(&curly), vec!["MIT"]);
    }

    #[test]
    fn test_case_differences_still_match() {
        assert_eq!(ids_of(&MIT_TEXT.to_uppercase()), vec!["MIT"]);
        assert_eq!(ids_of(&ISC_TEXT.to_lowercase()), vec!["ISC"]);
    }

    #[test]
    fn test_concatenated_licenses_yield_sequential_matches() {
        let text = format!("{MIT_TEXT}\n----------\n\n{ISC_TEXT}");
        let registry = builtin::registry().unwrap();
        let classification = registry.classify(&text);

        assert_eq!(classification.ids(), vec!["MIT", "ISC"]);
        assert_eq!(classification.matches().len(), 2);
        assert!(classification.matches()[0].end <= classification.matches()[1].start);
        assert!(classification.is_fully_matched());
    }

    #[test]
    fn test_attribution_line_folds_in_the_embedded_license() {
        let text = format!("{MIT_TEXT}\n- Based on fysom for Python\n\n{ISC_TEXT}");
        let registry = builtin::registry().unwrap();
        let classification = registry.classify(&text);

        assert_eq!(classification.matches().len(), 1);
        let outer = &classification.matches()[0];
        assert_eq!(outer.id, "MIT");
        assert_eq!(outer.end, text.len());
        let inner = outer.embedded.as_deref().unwrap();
        assert_eq!(inner.id, "ISC");
        assert!(inner.start > outer.start);
        assert!(classification.is_fully_matched());
    }

    #[test]
    fn test_embedded_license_can_itself_be_mit() {
        let text = format!(
            "{MIT_TEXT}\n- Based on fysom\n\n\"\"\"\nThe MIT License (MIT)\n\n\
             Copyright (c) 2013 Oguz Bilgic\n\n{MIT_TEXT}\"\"\"\n"
        );
        let registry = builtin::registry().unwrap();
        let classification = registry.classify(&text);

        assert_eq!(classification.matches().len(), 1);
        assert_eq!(classification.matches()[0].ids(), vec!["MIT", "MIT"]);
        // The closing quote fence is honest leftover.
        assert_eq!(classification.remainder().trim(), "\"\"\"");
    }

    #[test]
    fn test_attribution_without_recognizable_tail_stays_unmatched() {
        let text = format!("{MIT_TEXT}\n- Based on somebody's gist\n\nNo actual license here.\n");
        let registry = builtin::registry().unwrap();
        let classification = registry.classify(&text);

        assert_eq!(classification.matches().len(), 1);
        let outer = &classification.matches()[0];
        assert_eq!(outer.id, "MIT");
        assert!(outer.embedded.is_none());
        assert!(!classification.is_fully_matched());
        assert_eq!(classification.remainder().trim(), "No actual license here.");
    }

    #[test]
    fn test_empty_and_blank_inputs() {
        let registry = builtin::registry().unwrap();

        let classification = registry.classify("");
        assert!(classification.matches().is_empty());
        assert!(classification.is_fully_matched());

        let classification = registry.classify("  \n\t\n");
        assert!(classification.matches().is_empty());
        assert!(classification.is_fully_matched());
        assert_eq!(classification.remainder(), "  \n\t\n");
    }

    #[test]
    fn test_partial_match_reports_the_tail() {
        let text = format!("{MIT_TEXT}\nInternal exception: see legal wiki page LEGAL-442.\n");
        let registry = builtin::registry().unwrap();
        let classification = registry.classify(&text);

        assert_eq!(classification.ids(), vec!["MIT"]);
        assert!(!classification.is_fully_matched());
        assert!(classification.remainder().contains("LEGAL-442"));
    }

    #[test]
    fn test_scan_restarts_after_each_match() {
        let registry = Registry::builder()
            .register(Template::new("A", "A").variant(vec![Segment::text("aaa bbb")]))
            .register(Template::new("B", "B").variant(vec![Segment::text("ccc ddd")]))
            .build()
            .unwrap();

        let classification = registry.classify("aaa bbb\nccc ddd\naaa bbb");
        assert_eq!(classification.ids(), vec!["A", "B", "A"]);
        assert!(classification.is_fully_matched());
    }
}
