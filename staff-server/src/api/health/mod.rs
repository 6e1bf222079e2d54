//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 简单健康检查 |
//!
//! ```json
//! { "status": "ok", "service": "staff-server", "version": "0.1.0" }
//! ```

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 简单健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 状态 (ok)
    status: &'static str,
    /// 服务名
    service: &'static str,
    /// 版本号
    version: &'static str,
}

/// 基础健康检查
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
