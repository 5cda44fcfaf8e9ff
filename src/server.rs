use std::future::Future;

use tokio::net::TcpListener;

use crate::api::create_router;
use crate::config::ServiceConfig;
use crate::utils::error::Result;

pub struct CipherServer {
    config: ServiceConfig,
}

impl CipherServer {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub async fn bind(&self) -> Result<TcpListener> {
        let address = self.config.bind_address();
        let listener = TcpListener::bind(&address).await?;
        tracing::info!("🚀 Ciphers service listening on http://{}", listener.local_addr()?);
        Ok(listener)
    }

    /// Binds the configured address and serves until Ctrl+C.
    pub async fn run(&self) -> Result<()> {
        let listener = self.bind().await?;
        tracing::info!("Available endpoints:");
        tracing::info!("  GET /                          - Greeting");
        tracing::info!("  GET /encode/{{plaintext}}/{{shift}}  - Caesar encode");
        tracing::info!("  GET /decode/{{ciphertext}}/{{shift}} - Caesar decode");
        tracing::info!("  GET /health                    - Health check");

        serve(listener, shutdown_signal()).await
    }
}

/// Serves the router on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Ciphers service stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            // without a handler we can only keep serving
            tracing::error!("Failed to install CTRL+C signal handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
