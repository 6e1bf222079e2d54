//! Wire models for the employee API

pub mod contact;
pub mod employee;
pub mod page;
pub mod serde_helpers;

pub use contact::{Contact, ContactDetails, ContactKind, ContactUpdate};
pub use employee::{DeleteResponse, Employee, EmployeeCreate, EmployeeProfile, EmployeeUpdate};
pub use page::{EmployeePage, PageParams, PageRequest};
