use staff_server::{Config, Server, ServerError, ServerState, init_logger};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // 1. 加载 .env (可选)
    let _ = dotenvy::dotenv();

    // 2. 加载配置
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_logger(false);
            tracing::error!("Invalid configuration: {}", e);
            return Err(ServerError::Config(e.to_string()));
        }
    };

    // 3. 初始化日志 (生产环境输出 JSON)
    init_logger(config.is_production());
    tracing::info!(
        "Staff server starting (env: {}, version: {})",
        config.environment,
        env!("CARGO_PKG_VERSION")
    );

    // 4. 连接文档库, 失败即退出
    let state = match ServerState::initialize(&config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to connect to store: {}", e);
            return Err(e);
        }
    };

    // 5. 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
