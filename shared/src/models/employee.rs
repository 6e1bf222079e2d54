//! Employee Model

use super::contact::{Contact, ContactDetails, ContactKind, ContactUpdate, overwrite};
use super::serde_helpers;
use serde::{Deserialize, Serialize};

/// Employee as returned by the API
///
/// `C` is the shape of the contact list: resolved [`Contact`]s on reads,
/// raw contact ids (`Employee<String>`) in the create response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee<C = Contact> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default = "Vec::new")]
    pub contacts: Vec<C>,
}

/// Employee fields stored on the employee document itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeProfile {
    pub full_name: Option<String>,
    pub job_title: Option<String>,
}

impl EmployeeProfile {
    /// Overwrite every field for which `patch` carries a value
    pub fn apply(&mut self, patch: &EmployeeUpdate) -> bool {
        let mut changed = false;
        changed |= overwrite(&mut self.full_name, &patch.full_name);
        changed |= overwrite(&mut self.job_title, &patch.job_title);
        changed
    }
}

/// Create employee payload
///
/// Every field is optional and unvalidated. The flat layout groups into
/// three contacts: two emergency contacts and the employee's own details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    #[serde(default, deserialize_with = "serde_helpers::lenient_text")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_text")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_text")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_text")]
    pub emergency_contact1: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_text")]
    pub emergency_contact1_phone: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_text")]
    pub emergency_contact1_relationship: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_text")]
    pub emergency_contact2: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_text")]
    pub emergency_contact2_phone: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_text")]
    pub emergency_contact2_relationship: Option<String>,
}

impl EmployeeCreate {
    pub fn profile(&self) -> EmployeeProfile {
        EmployeeProfile {
            full_name: self.full_name.clone(),
            job_title: self.job_title.clone(),
        }
    }

    /// The three contacts to create, in storage order:
    /// primary emergency, secondary emergency, additional
    pub fn contacts(&self) -> [(ContactKind, ContactDetails); 3] {
        [
            (
                ContactKind::Primary,
                ContactDetails {
                    name: self.emergency_contact1.clone(),
                    phone: self.emergency_contact1_phone.clone(),
                    relationship: self.emergency_contact1_relationship.clone(),
                    ..Default::default()
                },
            ),
            (
                ContactKind::Secondary,
                ContactDetails {
                    name: self.emergency_contact2.clone(),
                    phone: self.emergency_contact2_phone.clone(),
                    relationship: self.emergency_contact2_relationship.clone(),
                    ..Default::default()
                },
            ),
            (
                ContactKind::Additional,
                ContactDetails {
                    phone: self.phone_number.clone(),
                    email: self.email.clone(),
                    address: self.address.clone(),
                    city: self.city.clone(),
                    state: self.state.clone(),
                    ..Default::default()
                },
            ),
        ]
    }
}

/// Update employee payload
///
/// Falsy values (`""`, `0`, `false`, `null`) leave the stored value as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(default, deserialize_with = "serde_helpers::truthy_text")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::truthy_text")]
    pub job_title: Option<String>,
    #[serde(default)]
    pub contacts: Option<Vec<ContactUpdate>>,
}

/// Response body of a successful delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn employee_deleted() -> Self {
        Self {
            message: "Employee deleted successfully".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_payload_groups_contacts_in_order() {
        let payload: EmployeeCreate = serde_json::from_value(json!({
            "fullName": "Jane Doe",
            "jobTitle": "Engineer",
            "phoneNumber": "555-0000",
            "email": "jane@example.com",
            "city": "Springfield",
            "emergencyContact1": "Bob",
            "emergencyContact1Phone": "555-1111",
            "emergencyContact1Relationship": "Brother",
            "emergencyContact2": "Alice",
            "emergencyContact2Phone": 5552222
        }))
        .unwrap();

        let [primary, secondary, additional] = payload.contacts();

        assert_eq!(primary.0, ContactKind::Primary);
        assert_eq!(primary.1.name.as_deref(), Some("Bob"));
        assert_eq!(primary.1.phone.as_deref(), Some("555-1111"));
        assert_eq!(primary.1.relationship.as_deref(), Some("Brother"));

        assert_eq!(secondary.0, ContactKind::Secondary);
        assert_eq!(secondary.1.name.as_deref(), Some("Alice"));
        assert_eq!(secondary.1.phone.as_deref(), Some("5552222"));
        assert!(secondary.1.relationship.is_none());

        assert_eq!(additional.0, ContactKind::Additional);
        assert!(additional.1.name.is_none());
        assert_eq!(additional.1.phone.as_deref(), Some("555-0000"));
        assert_eq!(additional.1.email.as_deref(), Some("jane@example.com"));
        assert_eq!(additional.1.city.as_deref(), Some("Springfield"));
    }

    #[test]
    fn test_create_payload_accepts_empty_body() {
        let payload: EmployeeCreate = serde_json::from_value(json!({})).unwrap();
        assert!(payload.profile().full_name.is_none());
        assert_eq!(payload.contacts().len(), 3);
    }

    #[test]
    fn test_profile_apply_truthy_semantics() {
        let mut profile = EmployeeProfile {
            full_name: Some("Jane Doe".into()),
            job_title: Some("Engineer".into()),
        };
        let patch: EmployeeUpdate =
            serde_json::from_value(json!({ "fullName": "", "jobTitle": "Manager" })).unwrap();

        assert!(profile.apply(&patch));
        assert_eq!(profile.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.job_title.as_deref(), Some("Manager"));
    }

    #[test]
    fn test_employee_with_ids_serializes_raw_contacts() {
        let employee: Employee<String> = Employee {
            id: "e1".into(),
            full_name: Some("Jane Doe".into()),
            job_title: None,
            contacts: vec!["c1".into(), "c2".into(), "c3".into()],
        };
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(
            value,
            json!({ "_id": "e1", "fullName": "Jane Doe", "contacts": ["c1", "c2", "c3"] })
        );
    }

    #[test]
    fn test_delete_response_message() {
        let value = serde_json::to_value(DeleteResponse::employee_deleted()).unwrap();
        assert_eq!(value, json!({ "message": "Employee deleted successfully" }));
    }
}
