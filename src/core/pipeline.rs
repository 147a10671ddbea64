use crate::core::opml;
use crate::core::page::StatusPage;
use crate::core::{ConfigProvider, FeedRecord, LoadReport, OpmlDocument, Pipeline, Storage};
use crate::utils::error::{Result, ScrapeError};
use chrono::Local;
use reqwest::Client;

pub struct StatusPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> StatusPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for StatusPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<FeedRecord>> {
        // 抓取狀態頁面
        tracing::debug!("Fetching status page: {}", self.config.source_url());
        let response = self.client.get(self.config.source_url()).send().await?;

        tracing::debug!("Status page response: {}", response.status());
        if !response.status().is_success() {
            return Err(ScrapeError::FetchStatus {
                url: self.config.source_url().to_string(),
                status: response.status(),
            });
        }

        let body = response.text().await?;
        let page = StatusPage::parse(&body);
        let records = page.extract_records(self.config.country_filter());

        if records.is_empty() {
            tracing::warn!("No outage feeds found on the status page");
        }

        Ok(records)
    }

    async fn transform(&self, records: Vec<FeedRecord>) -> Result<OpmlDocument> {
        Ok(opml::render_document(&records))
    }

    async fn load(&self, document: OpmlDocument) -> Result<LoadReport> {
        // 輸出檔名帶當天日期，同一天重跑會直接覆蓋
        let today = Local::now().format("%Y%m%d");
        let file_name = format!("aws_status_rss_{}.opml", today);

        let bytes = document.xml.as_bytes();
        tracing::debug!("Writing {} bytes to {}", bytes.len(), file_name);
        self.storage.write_file(&file_name, bytes).await?;

        Ok(LoadReport {
            path: format!("{}/{}", self.config.output_path(), file_name),
            bytes: bytes.len(),
        })
    }
}
