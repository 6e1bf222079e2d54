//! Stored document shapes
//!
//! Records are what the store returns (with `RecordId`s); the API models in
//! `shared::models` expose bare keys as `_id` instead.

pub mod contact;
pub mod employee;

pub use contact::{CONTACT_TABLE, ContactContent, ContactRecord};
pub use employee::{EMPLOYEE_TABLE, EmployeeContent, EmployeeRecord};

use surrealdb::RecordId;

/// Bare key of a record id (`employees:abc` → `abc`)
pub fn record_key(id: &RecordId) -> String {
    id.key().to_string()
}

/// Record id for a key taken from a request path
pub fn record_id(table: &str, key: &str) -> RecordId {
    RecordId::from_table_key(table, key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        let id = record_id(EMPLOYEE_TABLE, "k3j2h1g0f9e8d7c6b5a4");
        assert_eq!(id.table(), "employees");
        assert_eq!(record_key(&id), "k3j2h1g0f9e8d7c6b5a4");
    }
}
