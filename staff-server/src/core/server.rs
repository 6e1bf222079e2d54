//! Server Implementation
//!
//! HTTP 服务器启动和管理

use crate::api::build_app;
use crate::core::{Config, Result, ServerState};
use std::net::SocketAddr;

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Serve HTTP until Ctrl-C
    pub async fn run(&self) -> Result<()> {
        let app = build_app(self.state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server is running on {}", addr);

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
