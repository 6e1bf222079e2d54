//! Staff Server - 员工与紧急联系人 HTTP 服务
//!
//! # 架构概述
//!
//! - **HTTP API** (`api`): `/employees` CRUD 路由和 `/health`
//! - **服务层** (`services`): 员工 + 联系人的多文档操作和关联解析
//! - **数据库** (`db`): SurrealDB 文档存储 (远程或内存)
//! - **核心** (`core`): 配置、状态、服务器生命周期
//!
//! # 模块结构
//!
//! ```text
//! staff-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由、处理器、中间件
//! ├── services/      # 业务逻辑
//! ├── db/            # 存储记录和仓库
//! └── utils/         # 日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use api::build_app;
pub use core::{Config, Server, ServerError, ServerState};
pub use services::EmployeeService;
pub use shared::{AppError, AppResult, ErrorCode};
pub use utils::init_logger;
