use aws_status_opml::utils::{logger, validation::Validate};
use aws_status_opml::{CliConfig, LocalStorage, OpmlEngine, StatusPipeline};
use clap::Parser;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting aws-status-opml");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = StatusPipeline::new(storage, config);
    let engine = OpmlEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ OPML export completed successfully!");
            println!("✅ OPML export completed successfully!");
            println!("📁 Output saved to: {} ({} bytes)", report.path, report.bytes);
            tracing::info!("Complete: aws-status-opml");
        }
        Err(e) => {
            tracing::error!("❌ OPML export failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
