pub mod storage;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STATUS_URL: &str = "http://status.aws.amazon.com/";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "aws-status-opml")]
#[command(about = "Exports the AWS service status outage feeds as an OPML subscription list")]
pub struct CliConfig {
    /// Only keep services whose name contains "(<country-name>)"
    #[arg(long, short = 'c', visible_alias = "cn")]
    pub country_name: Option<String>,

    /// Status page to scrape
    #[arg(long, short = 'u', default_value = DEFAULT_STATUS_URL)]
    pub url: String,

    /// Directory the OPML file is written into
    #[arg(long, default_value = "dist")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn source_url(&self) -> &str {
        &self.url
    }

    fn country_filter(&self) -> Option<&str> {
        self.country_name.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("url", &self.url)?;
        validate_non_empty_string("output_path", &self.output_path)?;
        if let Some(country) = &self.country_name {
            validate_non_empty_string("country_name", country)?;
        }
        Ok(())
    }
}
