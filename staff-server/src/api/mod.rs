//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`employees`] - 员工管理接口 (含联系人)

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

mod extract;
pub mod middleware;

pub mod employees;
pub mod health;

pub use extract::JsonBody;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(employees::router())
        .merge(health::router())
}

/// Build the fully configured application: routes, middleware and state
///
/// Used by the HTTP server and by in-process tests.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .layer(CorsLayer::permissive())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
