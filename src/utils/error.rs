use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Fetch failed: {url} returned HTTP {status}")]
    FetchStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Covers all local filesystem I/O, not just the output write; the only
    /// non-test I/O this crate performs is writing the OPML file.
    #[error("Write failed: {0}")]
    Write(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
