use ciphers_service::utils::logger;
use ciphers_service::{CipherServer, CliConfig, ServiceConfig};
use anyhow::Context;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入並驗證配置
    let config = match ServiceConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(&config.log_level, config.log_format, config.verbose);

    tracing::info!("Starting ciphers-service");
    tracing::debug!("Service config: {:?}", config);

    let server = CipherServer::new(config);
    server
        .run()
        .await
        .inspect_err(|e| {
            tracing::error!("❌ Server failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        })
        .context("ciphers-service stopped with an error")?;

    Ok(())
}
