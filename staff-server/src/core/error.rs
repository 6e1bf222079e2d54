use shared::AppError;
use thiserror::Error;

/// 启动/运行期错误 (请求级错误见 [`AppError`])
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("存储不可用: {0}")]
    Store(#[from] AppError),

    #[error("监听失败: {0}")]
    Io(#[from] std::io::Error),
}

/// 服务器生命周期的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
