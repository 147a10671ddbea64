pub mod engine;
pub mod opml;
pub mod page;
pub mod pipeline;

pub use crate::domain::model::{FeedRecord, LoadReport, OpmlDocument};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
