//! Employee document

use serde::{Deserialize, Serialize};
use shared::models::{Contact, Employee, EmployeeProfile};
use surrealdb::RecordId;

use super::record_key;

pub const EMPLOYEE_TABLE: &str = "employees";

/// Employee as stored in the `employees` table
///
/// `contacts` holds record links into the `contacts` table, in insertion
/// order. They are resolved explicitly by the service layer.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeRecord {
    pub id: RecordId,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "jobTitle", default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub contacts: Vec<RecordId>,
}

impl EmployeeRecord {
    pub fn profile(&self) -> EmployeeProfile {
        EmployeeProfile {
            full_name: self.full_name.clone(),
            job_title: self.job_title.clone(),
        }
    }

    pub fn set_profile(&mut self, profile: EmployeeProfile) {
        self.full_name = profile.full_name;
        self.job_title = profile.job_title;
    }

    /// View with raw contact keys (create response)
    pub fn into_view_with_ids(self) -> Employee<String> {
        Employee {
            id: record_key(&self.id),
            full_name: self.full_name,
            job_title: self.job_title,
            contacts: self.contacts.iter().map(record_key).collect(),
        }
    }

    /// View with already resolved contacts
    pub fn into_view(self, contacts: Vec<Contact>) -> Employee {
        Employee {
            id: record_key(&self.id),
            full_name: self.full_name,
            job_title: self.job_title,
            contacts,
        }
    }
}

/// Employee fields written to the store; absent fields are not stored
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<RecordId>>,
}

impl EmployeeContent {
    /// Content for a new employee referencing `contacts`
    pub fn new(profile: EmployeeProfile, contacts: Vec<RecordId>) -> Self {
        Self {
            full_name: profile.full_name,
            job_title: profile.job_title,
            contacts: Some(contacts),
        }
    }

    /// Profile-only content, used to merge edits into an existing employee
    pub fn from_profile(profile: EmployeeProfile) -> Self {
        Self {
            full_name: profile.full_name,
            job_title: profile.job_title,
            contacts: None,
        }
    }
}
