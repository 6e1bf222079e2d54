//! Contact document

use serde::{Deserialize, Serialize};
use shared::models::{Contact, ContactDetails, ContactKind};
use surrealdb::RecordId;

use super::record_key;

pub const CONTACT_TABLE: &str = "contacts";

/// Contact as stored in the `contacts` table
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRecord {
    pub id: RecordId,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub relationship: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl ContactRecord {
    pub fn details(&self) -> ContactDetails {
        ContactDetails {
            name: self.name.clone(),
            phone: self.phone.clone(),
            relationship: self.relationship.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
        }
    }

    pub fn set_details(&mut self, details: ContactDetails) {
        self.name = details.name;
        self.phone = details.phone;
        self.relationship = details.relationship;
        self.email = details.email;
        self.address = details.address;
        self.city = details.city;
        self.state = details.state;
    }

    pub fn into_view(self) -> Contact {
        Contact {
            id: record_key(&self.id),
            details: self.details(),
            kind: self.kind,
        }
    }
}

/// Contact fields written to the store; absent fields are not stored
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactContent {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl ContactContent {
    /// Content for a new contact of the given kind
    pub fn new(kind: ContactKind, details: ContactDetails) -> Self {
        Self {
            kind: Some(kind.as_str().to_string()),
            ..Self::from_details(details)
        }
    }

    /// Field-only content, used to merge edits into an existing contact
    pub fn from_details(details: ContactDetails) -> Self {
        Self {
            kind: None,
            name: details.name,
            phone: details.phone,
            relationship: details.relationship,
            email: details.email,
            address: details.address,
            city: details.city,
            state: details.state,
        }
    }
}
