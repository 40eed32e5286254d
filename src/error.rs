use thiserror::Error;

pub type Result<T> = std::result::Result<T, CrawlerError>;

/// Failure taxonomy for a crawl run. The pipeline is the only layer that
/// decides skip-vs-abort; extractors and the browser session just return the
/// typed kind.
#[derive(Debug, Error)]
pub enum CrawlerError {
    #[error("navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },

    #[error("extraction failed: {0}")]
    Extraction(String),

    #[error("failed to write {path}: {message}")]
    Output { path: String, message: String },

    #[error("browser session error: {0}")]
    Session(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("crawl cancelled")]
    Cancelled,
}

impl CrawlerError {
    pub fn navigation(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Navigation {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn output(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Output {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
