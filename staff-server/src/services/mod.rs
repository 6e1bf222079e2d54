//! 服务层
//!
//! - [`EmployeeService`] - 员工及其联系人的组合读写

pub mod employee;

pub use employee::EmployeeService;
