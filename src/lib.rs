pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{storage::LocalStorage, CliConfig};
pub use core::{engine::OpmlEngine, pipeline::StatusPipeline};
pub use domain::model::{FeedRecord, LoadReport, OpmlDocument};
pub use utils::error::{Result, ScrapeError};
