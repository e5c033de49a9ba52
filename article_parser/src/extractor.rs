//! Field extraction: one linear scan per field over the heuristic tables.
//!
//! Title and date only read the document. Content detaches nodes while it
//! evaluates candidates, so it has to run after the other two.

use ego_tree::NodeId;
use scraper::{ElementRef, Html};
use tracing::debug;

use crate::heuristics::{
    FieldTable, Rule, CONTENT, DATE, DATE_ATTRIBUTES, MIN_CONTENT_CHARS, MIN_TITLE_CHARS, TITLE,
};
use crate::sanitizer::{element_text, normalize_whitespace, strip_non_content};

/// A title value and, when it was read from a heading element (`h1`..`h6`),
/// that heading's node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleMatch {
    pub text: String,
    pub node: Option<NodeId>,
}

pub fn extract_title(doc: &Html) -> Option<TitleMatch> {
    extract_title_with(doc, &TITLE)
}

fn extract_title_with(doc: &Html, table: &FieldTable) -> Option<TitleMatch> {
    let heading = first_qualifying(doc, &table.candidates, "title", |el| {
        let text = trimmed_text(el);
        (text.chars().count() > MIN_TITLE_CHARS).then(|| (text, el))
    });
    if let Some((text, el)) = heading {
        return Some(TitleMatch {
            text,
            node: is_heading(el).then(|| el.id()),
        });
    }

    meta_content(doc, &table.meta_fallbacks, "title")
        .or_else(|| {
            let rule = table.text_fallback.as_ref()?;
            let text = doc
                .select(&rule.selector)
                .map(|el| el.text().collect::<String>())
                .collect::<String>();
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        })
        .map(|text| TitleMatch { text, node: None })
}

pub fn extract_date(doc: &Html) -> Option<String> {
    extract_date_with(doc, &DATE)
}

fn extract_date_with(doc: &Html, table: &FieldTable) -> Option<String> {
    first_qualifying(doc, &table.candidates, "date", |el| {
        DATE_ATTRIBUTES
            .iter()
            .filter_map(|attr| el.value().attr(attr))
            .find(|value| !value.is_empty())
            .map(str::to_string)
            .or_else(|| Some(trimmed_text(el)).filter(|text| !text.is_empty()))
    })
    .or_else(|| meta_content(doc, &table.meta_fallbacks, "date"))
}

/// Picks the content root, sanitizes it in place and returns its
/// whitespace-normalized text.
///
/// `title_node` is cut from whichever root wins so the headline is not
/// repeated at the start of the body text.
pub fn extract_content(doc: &mut Html, title_node: Option<NodeId>) -> Option<String> {
    extract_content_with(doc, &CONTENT, title_node)
}

fn extract_content_with(
    doc: &mut Html,
    table: &FieldTable,
    title_node: Option<NodeId>,
) -> Option<String> {
    for rule in &table.candidates {
        let Some(root) = doc.select(&rule.selector).next().map(|el| el.id()) else {
            continue;
        };
        let removed = strip_non_content(doc, root, title_node);
        let text = element_text(doc, root);
        let chars = text.chars().count();
        debug!(pattern = rule.pattern, removed, chars, "content candidate");
        if chars > MIN_CONTENT_CHARS {
            return Some(normalize_whitespace(&text));
        }
    }

    let rule = table.text_fallback.as_ref()?;
    let root = doc.select(&rule.selector).next().map(|el| el.id())?;
    let removed = strip_non_content(doc, root, title_node);
    debug!(pattern = rule.pattern, removed, "content falls back to document body");
    let text = normalize_whitespace(&element_text(doc, root));
    (!text.is_empty()).then_some(text)
}

/// First node of each rule, in order, until `qualify` accepts one.
fn first_qualifying<'a, T>(
    doc: &'a Html,
    rules: &[Rule],
    field: &'static str,
    mut qualify: impl FnMut(ElementRef<'a>) -> Option<T>,
) -> Option<T> {
    rules.iter().find_map(|rule| {
        let el = doc.select(&rule.selector).next()?;
        let value = qualify(el)?;
        debug!(field, pattern = rule.pattern, "selector matched");
        Some(value)
    })
}

fn meta_content(doc: &Html, rules: &[Rule], field: &'static str) -> Option<String> {
    rules.iter().find_map(|rule| {
        let content = doc.select(&rule.selector).next()?.value().attr("content")?;
        if content.is_empty() {
            return None;
        }
        debug!(field, pattern = rule.pattern, "metadata fallback matched");
        Some(content.to_string())
    })
}

fn is_heading(el: ElementRef<'_>) -> bool {
    matches!(el.value().name(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

fn trimmed_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_paragraph() -> String {
        "Lorem ipsum dolor sit amet. ".repeat(6)
    }

    #[test]
    fn title_prefers_long_heading() {
        let doc = Html::parse_document(
            r#"<head><title>Site name | Section</title></head>
               <body><h1>  Rust 2024 edition lands  </h1></body>"#,
        );
        let found = extract_title(&doc).unwrap();
        assert_eq!(found.text, "Rust 2024 edition lands");
        assert!(found.node.is_some());
    }

    #[test]
    fn short_heading_is_rejected() {
        let doc = Html::parse_document(
            r#"<body><h1>Logo</h1><div class="post-title">A proper post headline</div></body>"#,
        );
        assert_eq!(extract_title(&doc).unwrap().text, "A proper post headline");
    }

    #[test]
    fn only_first_node_of_a_selector_is_considered() {
        let doc = Html::parse_document(
            r#"<head><meta property="og:title" content="From metadata"></head>
               <body><h1>Short</h1><h1>A much longer second heading</h1></body>"#,
        );
        // `article h1` and the class patterns miss, so the metadata wins
        // rather than the second h1.
        let found = extract_title(&doc).unwrap();
        assert_eq!(found.text, "From metadata");
        assert_eq!(found.node, None);
    }

    #[test]
    fn title_falls_back_through_meta_then_title_tag() {
        let doc = Html::parse_document(
            r#"<head><meta name="title" content="Named meta"><title>Tiny</title></head>"#,
        );
        assert_eq!(extract_title(&doc).unwrap().text, "Named meta");

        let doc = Html::parse_document(r#"<head><meta property="og:title" content=""><title> Tiny </title></head>"#);
        assert_eq!(extract_title(&doc).unwrap().text, "Tiny");

        let doc = Html::parse_document("<body><p>nothing</p></body>");
        assert_eq!(extract_title(&doc), None);
    }

    #[test]
    fn date_prefers_machine_readable_attribute() {
        let doc = Html::parse_document(
            r#"<body><time datetime="2024-03-01T10:00:00Z" title="Friday">March 1</time></body>"#,
        );
        assert_eq!(extract_date(&doc).as_deref(), Some("2024-03-01T10:00:00Z"));
    }

    #[test]
    fn date_uses_title_attribute_then_text() {
        let doc = Html::parse_document(r#"<body><time title="yesterday">1 day ago</time></body>"#);
        assert_eq!(extract_date(&doc).as_deref(), Some("yesterday"));

        let doc = Html::parse_document(r#"<body><span class="post-date"> 5 May 2023 </span></body>"#);
        assert_eq!(extract_date(&doc).as_deref(), Some("5 May 2023"));
    }

    #[test]
    fn empty_time_element_defers_to_later_selectors() {
        let doc = Html::parse_document(
            r#"<body><time></time><div class="published-on">2022-12-31</div></body>"#,
        );
        assert_eq!(extract_date(&doc).as_deref(), Some("2022-12-31"));
    }

    #[test]
    fn date_falls_back_to_meta_tags() {
        let doc = Html::parse_document(
            r#"<head><meta property="article:published_time" content="2021-06-01"></head><body></body>"#,
        );
        assert_eq!(extract_date(&doc).as_deref(), Some("2021-06-01"));

        let doc = Html::parse_document(r#"<head><meta name="published" content="last week"></head>"#);
        assert_eq!(extract_date(&doc).as_deref(), Some("last week"));

        assert_eq!(extract_date(&Html::parse_document("<p>none</p>")), None);
    }

    #[test]
    fn content_takes_first_long_enough_candidate() {
        let html = format!(
            r#"<body><div class="post">short teaser</div>
               <div class="content"><p>{}</p><nav>Home | About</nav></div></body>"#,
            long_paragraph()
        );
        let mut doc = Html::parse_document(&html);
        let content = extract_content(&mut doc, None).unwrap();
        assert_eq!(content, long_paragraph().trim());
    }

    #[test]
    fn content_falls_back_to_sanitized_body() {
        let mut doc = Html::parse_document(
            r#"<body><header>Top bar</header><p>Just a short note.</p><script>track()</script></body>"#,
        );
        assert_eq!(extract_content(&mut doc, None).as_deref(), Some("Just a short note."));
    }

    #[test]
    fn content_drops_headline_node() {
        let html = format!("<body><article><h1>Headline text here</h1><p>{}</p></article></body>", long_paragraph());
        let mut doc = Html::parse_document(&html);
        let title = extract_title(&doc).unwrap();
        let content = extract_content(&mut doc, title.node).unwrap();
        assert!(!content.contains("Headline"));
        assert!(content.starts_with("Lorem ipsum"));
    }

    #[test]
    fn title_container_is_not_cut_from_content() {
        let mut doc = Html::parse_document(
            r#"<body><div class="page-title-wrap">Everything lives in here</div></body>"#,
        );
        let title = extract_title(&doc).unwrap();
        assert_eq!(title.node, None);
        assert_eq!(
            extract_content(&mut doc, title.node).as_deref(),
            Some("Everything lives in here")
        );
    }

    #[test]
    fn cut_headline_no_longer_counts_toward_threshold() {
        // 20-char headline + 89-char paragraph: enough together, too short
        // once the headline is cut, so the body wins instead.
        let paragraph = "abcdefghi ".repeat(9);
        let html = format!(
            "<body><article><h1>Twenty chars title!!</h1><p>{paragraph}</p></article>\n\
             <p>Outside note.</p></body>"
        );

        let mut doc = Html::parse_document(&html);
        let title = extract_title(&doc).unwrap();
        assert_eq!(title.text, "Twenty chars title!!");
        assert_eq!(
            extract_content(&mut doc, title.node).unwrap(),
            format!("{} Outside note.", paragraph.trim())
        );

        let mut doc = Html::parse_document(&html);
        assert_eq!(
            extract_content(&mut doc, None).unwrap(),
            format!("Twenty chars title!!{}", paragraph.trim())
        );
    }

    #[test]
    fn empty_body_yields_none() {
        let mut doc = Html::parse_document("<body><script>only()</script></body>");
        assert_eq!(extract_content(&mut doc, None), None);
    }
}
