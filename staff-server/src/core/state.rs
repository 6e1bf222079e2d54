use crate::core::{Config, Result};
use crate::db::DbService;
use crate::services::EmployeeService;

/// 服务器状态 - 持有所有服务的单例引用
///
/// Built once at startup and cloned into every request; clones share the
/// same store connection.
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | 文档库连接 |
/// | employees | EmployeeService | 员工/联系人服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 文档库连接
    pub db: DbService,
    /// 员工服务
    pub employees: EmployeeService,
}

impl ServerState {
    /// 使用已建立的连接构造状态
    pub fn new(config: Config, db: DbService) -> Self {
        let employees = EmployeeService::new(db.db.clone());
        Self {
            config,
            db,
            employees,
        }
    }

    /// 初始化服务器状态: 连接文档库
    ///
    /// Connection failures are returned to the caller, which reports them
    /// and exits.
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::connect(config).await?;
        Ok(Self::new(config.clone(), db))
    }
}
