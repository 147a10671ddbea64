use crate::domain::model::LoadReport;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Sequences the three pipeline phases. The run is strictly linear: a
/// failure in any phase aborts before the next one starts, so no partial
/// output is ever written.
pub struct OpmlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> OpmlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<LoadReport> {
        tracing::info!("Extracting outage feeds...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} feed(s)", records.len());

        tracing::info!("Rendering OPML...");
        let document = self.pipeline.transform(records).await?;
        tracing::info!("Rendered {} outline(s)", document.outline_count);

        tracing::info!("Writing output...");
        let report = self.pipeline.load(document).await?;
        tracing::info!("Created {} ({} bytes)", report.path, report.bytes);

        Ok(report)
    }
}
