pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod heuristics;
pub mod observability;
pub mod pipeline;
pub mod sanitizer;
pub mod utils;

use serde::{Deserialize, Serialize};

pub use error::FetchError;
pub use fetcher::{FetchConfig, HttpFetcher, PageFetcher};
pub use pipeline::extract;

/// Placeholder returned for any field the heuristics could not recover.
pub const NOT_FOUND: &str = "Не найдено";

/// Title, publication date and main text recovered from one page.
///
/// Every field is always populated: either with extracted text or with
/// [`NOT_FOUND`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub title: String,
    pub date: String,
    pub content: String,
}

impl ExtractionResult {
    pub fn new(title: String, date: String, content: String) -> Self {
        Self {
            title: or_not_found(title),
            date: or_not_found(date),
            content: or_not_found(content),
        }
    }

    pub fn has_title(&self) -> bool {
        self.title != NOT_FOUND
    }

    pub fn has_date(&self) -> bool {
        self.date != NOT_FOUND
    }

    pub fn has_content(&self) -> bool {
        self.content != NOT_FOUND
    }

    pub fn content_length(&self) -> usize {
        if self.has_content() {
            self.content.chars().count()
        } else {
            0
        }
    }
}

fn or_not_found(value: String) -> String {
    if value.trim().is_empty() {
        NOT_FOUND.to_string()
    } else {
        value
    }
}
