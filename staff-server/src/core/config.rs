//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 服务配置 - 全部来自环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_URL | (必填) | 文档库连接串, 如 `ws://localhost:8000`, `mem://` |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | SURREAL_NS | staff | 命名空间 |
/// | SURREAL_DB | staff | 数据库 |
/// | SURREAL_USER / SURREAL_PASS | - | 可选 root 登录 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// `MONGO_URL` is accepted when `DATABASE_URL` is not set.
#[derive(Debug, Clone)]
pub struct Config {
    /// Document store connection string
    pub database_url: String,
    /// HTTP API port
    pub http_port: u16,
    /// Store namespace
    pub namespace: String,
    /// Store database
    pub database: String,
    /// Optional root credentials for the store
    pub credentials: Option<StoreCredentials>,
    /// Environment: development | staging | production
    pub environment: String,
}

/// Root sign-in for a remote store
#[derive(Clone)]
pub struct StoreCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for StoreCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("MONGO_URL"))
            .map_err(|_| "DATABASE_URL must be set")?;

        let credentials = match (std::env::var("SURREAL_USER"), std::env::var("SURREAL_PASS")) {
            (Ok(username), Ok(password)) if !username.is_empty() => Some(StoreCredentials {
                username,
                password,
            }),
            _ => None,
        };

        Ok(Self {
            database_url,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            namespace: std::env::var("SURREAL_NS").unwrap_or_else(|_| "staff".into()),
            database: std::env::var("SURREAL_DB").unwrap_or_else(|_| "staff".into()),
            credentials,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        })
    }

    /// In-memory store configuration, used by tests and local runs
    pub fn in_memory() -> Self {
        Self {
            database_url: "mem://".into(),
            http_port: 3000,
            namespace: "staff".into(),
            database: "staff".into(),
            credentials: None,
            environment: "development".into(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
