use serde::{Deserialize, Serialize};

/// One subscribable outage feed scraped from the status page.
///
/// Both fields are guaranteed non-empty: rows missing either value are
/// discarded during extraction and never become a `FeedRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedRecord {
    /// Service display name, e.g. `"Amazon EC2 (N. Virginia)"`.
    pub service: String,
    /// Feed path relative to the status host, e.g. `"/rss/ec2-us-east-1.rss"`.
    pub feed_path: String,
}

/// Rendered OPML document ready to be written out.
#[derive(Debug, Clone)]
pub struct OpmlDocument {
    pub xml: String,
    pub outline_count: usize,
}

/// Where the output landed and how big it was.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub path: String,
    pub bytes: usize,
}
