use article_parser::PageFetcher;
use std::sync::Arc;

/// Shared by every request. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher>,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        AppState { fetcher }
    }
}
