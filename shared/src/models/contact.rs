//! Contact Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a contact plays for its employee
///
/// The stored `type` tag is free text; these are the values the create
/// endpoint writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// First emergency contact
    Primary,
    /// Second emergency contact
    Secondary,
    /// The employee's own phone/email/address details
    Additional,
}

impl ContactKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ContactKind::Primary => "Primary",
            ContactKind::Secondary => "Secondary",
            ContactKind::Additional => "Additional",
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub details: ContactDetails,
}

/// The editable text fields of a contact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl ContactDetails {
    /// Overwrite every field for which `patch` carries a value
    ///
    /// Returns true when at least one field changed.
    pub fn apply(&mut self, patch: &ContactUpdate) -> bool {
        let mut changed = false;
        changed |= overwrite(&mut self.name, &patch.name);
        changed |= overwrite(&mut self.phone, &patch.phone);
        changed |= overwrite(&mut self.relationship, &patch.relationship);
        changed |= overwrite(&mut self.email, &patch.email);
        changed |= overwrite(&mut self.address, &patch.address);
        changed |= overwrite(&mut self.city, &patch.city);
        changed |= overwrite(&mut self.state, &patch.state);
        changed
    }
}

/// Replace `slot` with `incoming` when the latter is present
pub(crate) fn overwrite(slot: &mut Option<String>, incoming: &Option<String>) -> bool {
    match incoming {
        Some(value) if slot.as_ref() != Some(value) => {
            *slot = Some(value.clone());
            true
        }
        _ => false,
    }
}

/// Partial update for one of an employee's contacts
///
/// Falsy values (`""`, `0`, `false`, `null`) are treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactUpdate {
    /// Id of the contact to update; unknown ids are ignored
    #[serde(rename = "_id", default, deserialize_with = "serde_helpers::lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::truthy_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::truthy_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::truthy_text")]
    pub relationship: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::truthy_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::truthy_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::truthy_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::truthy_text")]
    pub state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contact_serializes_mongo_style() {
        let contact = Contact {
            id: "abc".into(),
            kind: Some(ContactKind::Primary.to_string()),
            details: ContactDetails {
                name: Some("Bob".into()),
                phone: Some("555-1111".into()),
                ..Default::default()
            },
        };
        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(
            value,
            json!({ "_id": "abc", "type": "Primary", "name": "Bob", "phone": "555-1111" })
        );
    }

    #[test]
    fn test_apply_only_overwrites_present_fields() {
        let mut details = ContactDetails {
            name: Some("Bob".into()),
            phone: Some("555-1111".into()),
            ..Default::default()
        };
        let patch: ContactUpdate = serde_json::from_value(json!({
            "_id": "abc",
            "name": "",
            "phone": "555-2222",
            "city": "Springfield"
        }))
        .unwrap();

        assert!(details.apply(&patch));
        assert_eq!(details.name.as_deref(), Some("Bob"));
        assert_eq!(details.phone.as_deref(), Some("555-2222"));
        assert_eq!(details.city.as_deref(), Some("Springfield"));
    }

    #[test]
    fn test_apply_reports_no_change() {
        let mut details = ContactDetails {
            name: Some("Bob".into()),
            ..Default::default()
        };
        let patch: ContactUpdate =
            serde_json::from_value(json!({ "_id": "abc", "name": "Bob", "email": 0 })).unwrap();
        assert!(!details.apply(&patch));
    }

    #[test]
    fn test_contact_update_ignores_type() {
        let patch: ContactUpdate =
            serde_json::from_value(json!({ "_id": "abc", "type": "Secondary" })).unwrap();
        assert_eq!(patch.id.as_deref(), Some("abc"));
        assert!(patch.name.is_none());
    }
}
