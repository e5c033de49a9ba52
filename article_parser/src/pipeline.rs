use scraper::Html;
use tracing::{debug, instrument};

use crate::extractor::{extract_content, extract_date, extract_title};
use crate::ExtractionResult;

/// Parses `html` once and recovers title, date and main text.
///
/// Never fails: malformed markup is repaired by the parser and missing
/// fields come back as [`crate::NOT_FOUND`]. The document is dropped before
/// returning, so repeated calls on the same input give the same result.
#[instrument(level = "debug", skip_all, fields(html_len = html.len()))]
pub fn extract(html: &str) -> ExtractionResult {
    let mut doc = Html::parse_document(html);
    if !doc.errors.is_empty() {
        debug!(parse_errors = doc.errors.len(), "recovered from malformed markup");
    }

    let title = extract_title(&doc);
    let date = extract_date(&doc);
    let title_node = title.as_ref().and_then(|t| t.node);
    let content = extract_content(&mut doc, title_node);

    let result = ExtractionResult::new(
        title.map(|t| t.text).unwrap_or_default(),
        date.unwrap_or_default(),
        content.unwrap_or_default(),
    );
    debug!(
        has_title = result.has_title(),
        has_date = result.has_date(),
        content_chars = result.content_length(),
        "extraction finished"
    );
    result
}
