use thiserror::Error;

/// Ways retrieving a page can fail. Each is terminal: nothing is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// Transport failure reaching the URL, reported verbatim.
    #[error("{0}")]
    Network(String),
    /// The page answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("received empty page")]
    EmptyBody,
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}
