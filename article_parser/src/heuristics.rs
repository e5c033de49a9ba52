//! Priority-ordered selector tables for title, date and content.
//!
//! The tables are plain data: the extractor walks each list top to bottom
//! and stops at the first candidate that qualifies. Extending a heuristic
//! means adding a pattern here, not touching the scan in `extractor`.

use scraper::Selector;
use std::sync::LazyLock;

/// A title candidate must be longer than this (in characters). Shorter hits
/// are usually logos or section labels. Tunable.
pub const MIN_TITLE_CHARS: usize = 10;

/// A content root must hold more than this many characters of text after
/// sanitization to be accepted. Tunable.
pub const MIN_CONTENT_CHARS: usize = 100;

pub const TITLE_SELECTORS: &[&str] = &[
    "h1",
    "article h1",
    ".post-title",
    ".article-title",
    r#"[class*="title"]"#,
    "title",
];

pub const TITLE_META_FALLBACKS: &[&str] = &[
    r#"meta[property="og:title"]"#,
    r#"meta[name="title"]"#,
];

pub const DATE_SELECTORS: &[&str] = &[
    "time[datetime]",
    "time",
    r#"[class*="date"]"#,
    r#"[class*="published"]"#,
    r#"[class*="time"]"#,
    "article time",
    ".post-date",
    ".article-date",
];

/// Attributes read from a matched date node before falling back to its text.
pub const DATE_ATTRIBUTES: &[&str] = &["datetime", "title"];

pub const DATE_META_FALLBACKS: &[&str] = &[
    r#"meta[property="article:published_time"]"#,
    r#"meta[name="date"]"#,
    r#"meta[name="published"]"#,
];

pub const CONTENT_SELECTORS: &[&str] = &[
    "article",
    ".post",
    ".content",
    ".article-content",
    r#"[class*="article"]"#,
    r#"[class*="post-content"]"#,
    "main",
    ".entry-content",
];

/// Subtrees stripped from a content root before its text is read.
pub const NON_CONTENT_SELECTOR: &str =
    "script, style, nav, header, footer, aside, .ad, .advertisement, .sidebar";

/// A compiled selector that remembers the pattern it came from, so log
/// lines can say which heuristic won.
#[derive(Debug)]
pub struct Rule {
    pub pattern: &'static str,
    pub selector: Selector,
}

/// Ordered candidates for one field plus its document-level fallbacks.
#[derive(Debug)]
pub struct FieldTable {
    pub candidates: Vec<Rule>,
    /// `<meta>` lookups whose `content` attribute is used verbatim.
    pub meta_fallbacks: Vec<Rule>,
    /// Last resort whose text is taken without a length check.
    pub text_fallback: Option<Rule>,
}

pub static TITLE: LazyLock<FieldTable> = LazyLock::new(|| FieldTable {
    candidates: compile(TITLE_SELECTORS),
    meta_fallbacks: compile(TITLE_META_FALLBACKS),
    text_fallback: compile_one("title"),
});

pub static DATE: LazyLock<FieldTable> = LazyLock::new(|| FieldTable {
    candidates: compile(DATE_SELECTORS),
    meta_fallbacks: compile(DATE_META_FALLBACKS),
    text_fallback: None,
});

pub static CONTENT: LazyLock<FieldTable> = LazyLock::new(|| FieldTable {
    candidates: compile(CONTENT_SELECTORS),
    meta_fallbacks: Vec::new(),
    text_fallback: compile_one("body"),
});

pub static NON_CONTENT: LazyLock<Option<Rule>> =
    LazyLock::new(|| compile_one(NON_CONTENT_SELECTOR));

fn compile(patterns: &[&'static str]) -> Vec<Rule> {
    patterns.iter().copied().filter_map(compile_one).collect()
}

fn compile_one(pattern: &'static str) -> Option<Rule> {
    match Selector::parse(pattern) {
        Ok(selector) => Some(Rule { pattern, selector }),
        Err(e) => {
            tracing::warn!(pattern, error = ?e, "skipping unparsable selector");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(rules: &[Rule]) -> Vec<&'static str> {
        rules.iter().map(|r| r.pattern).collect()
    }

    #[test]
    fn every_pattern_compiles() {
        assert_eq!(patterns(&TITLE.candidates), TITLE_SELECTORS);
        assert_eq!(patterns(&TITLE.meta_fallbacks), TITLE_META_FALLBACKS);
        assert_eq!(patterns(&DATE.candidates), DATE_SELECTORS);
        assert_eq!(patterns(&DATE.meta_fallbacks), DATE_META_FALLBACKS);
        assert_eq!(patterns(&CONTENT.candidates), CONTENT_SELECTORS);
        assert!(TITLE.text_fallback.is_some());
        assert!(CONTENT.text_fallback.is_some());
        assert!(NON_CONTENT.is_some());
    }

    #[test]
    fn generic_heading_outranks_scoped_heading() {
        let h1 = TITLE_SELECTORS.iter().position(|p| *p == "h1");
        let scoped = TITLE_SELECTORS.iter().position(|p| *p == "article h1");
        assert!(h1 < scoped);
        assert_eq!(TITLE_SELECTORS.last(), Some(&"title"));
    }
}
