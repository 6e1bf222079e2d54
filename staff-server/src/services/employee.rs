//! Employee Service - employees together with their contacts
//!
//! Owns the multi-document sequences: create (3 contacts, then the
//! employee), update (contacts, then the employee) and delete (employee,
//! then its contacts). None of them is transactional: a failure midway
//! leaves the writes already made in place.
//!
//! Contacts are resolved ("populated") here, after the primary fetch, with
//! one batched contact query per request.

use crate::db::models::{
    ContactContent, ContactRecord, EmployeeContent, EmployeeRecord, record_key,
};
use crate::db::repository::{ContactRepository, EmployeeRepository, RepoResult};
use shared::models::{
    Contact, Employee, EmployeeCreate, EmployeePage, EmployeeUpdate, PageRequest,
};
use shared::{AppError, AppResult};
use std::collections::HashMap;
use surrealdb::engine::any::Any;
use surrealdb::{RecordId, Surreal};

#[derive(Clone, Debug)]
pub struct EmployeeService {
    employees: EmployeeRepository,
    contacts: ContactRepository,
}

impl EmployeeService {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            employees: EmployeeRepository::new(db.clone()),
            contacts: ContactRepository::new(db),
        }
    }

    /// Create an employee with its Primary, Secondary and Additional contacts
    pub async fn create(&self, payload: EmployeeCreate) -> AppResult<Employee<String>> {
        let mut contact_ids = Vec::with_capacity(3);
        for (kind, details) in payload.contacts() {
            let contact = self
                .contacts
                .create(ContactContent::new(kind, details))
                .await?;
            contact_ids.push(contact.id);
        }

        let employee = self
            .employees
            .create(EmployeeContent::new(payload.profile(), contact_ids))
            .await?;

        tracing::info!(employee = %record_key(&employee.id), "Employee created");
        Ok(employee.into_view_with_ids())
    }

    /// Fetch one employee with contacts resolved
    pub async fn get(&self, key: &str) -> AppResult<Employee> {
        let record = self
            .employees
            .find_by_id(key)
            .await?
            .ok_or_else(AppError::employee_not_found)?;
        Ok(self.populate(record).await?)
    }

    /// Apply a partial update to an employee and the contacts it names
    ///
    /// Contact patches whose `_id` is not among the employee's resolved
    /// contacts are ignored.
    pub async fn update(&self, key: &str, patch: EmployeeUpdate) -> AppResult<Employee> {
        let mut record = self
            .employees
            .find_by_id(key)
            .await?
            .ok_or_else(AppError::employee_not_found)?;
        let mut contacts = self.contacts.find_many(&record.contacts).await?;

        let mut profile = record.profile();
        let profile_changed = profile.apply(&patch);
        record.set_profile(profile);

        let mut touched = vec![false; contacts.len()];
        for contact_patch in patch.contacts.iter().flatten() {
            let Some(target) = contact_patch.id.as_deref() else {
                continue;
            };
            let Some(index) = contacts.iter().position(|c| record_key(&c.id) == target) else {
                tracing::debug!(employee = %key, contact = %target, "Ignoring unknown contact");
                continue;
            };

            let contact = &mut contacts[index];
            let mut details = contact.details();
            if details.apply(contact_patch) {
                contact.set_details(details);
                touched[index] = true;
            }
        }

        for (contact, _) in contacts.iter().zip(&touched).filter(|(_, t)| **t) {
            self.contacts.update_fields(contact).await?;
        }
        if profile_changed {
            self.employees.update_fields(&record).await?;
        }

        let contacts = contacts.into_iter().map(ContactRecord::into_view).collect();
        Ok(record.into_view(contacts))
    }

    /// Delete an employee, then every contact it referenced
    pub async fn delete(&self, key: &str) -> AppResult<()> {
        let record = self
            .employees
            .delete(key)
            .await?
            .ok_or_else(AppError::employee_not_found)?;

        let removed = self.contacts.delete_many(&record.contacts).await?;
        tracing::info!(employee = %key, contacts = removed, "Employee deleted");
        Ok(())
    }

    /// One page of employees with contacts resolved
    pub async fn list(&self, request: PageRequest) -> AppResult<EmployeePage> {
        let total = self.employees.count().await?;
        let records = self
            .employees
            .find_page(request.skip(), request.limit)
            .await?;
        let employees = self.populate_many(records).await?;
        Ok(EmployeePage::new(employees, total, request))
    }

    /// Resolve one employee's contact links
    async fn populate(&self, record: EmployeeRecord) -> RepoResult<Employee> {
        let contacts = self
            .contacts
            .find_many(&record.contacts)
            .await?
            .into_iter()
            .map(ContactRecord::into_view)
            .collect();
        Ok(record.into_view(contacts))
    }

    /// Resolve the contact links of a batch of employees with one query
    async fn populate_many(&self, records: Vec<EmployeeRecord>) -> RepoResult<Vec<Employee>> {
        let ids: Vec<RecordId> = records
            .iter()
            .flat_map(|r| r.contacts.iter().cloned())
            .collect();
        let by_id: HashMap<RecordId, Contact> = self
            .contacts
            .find_many(&ids)
            .await?
            .into_iter()
            .map(|c| (c.id.clone(), c.into_view()))
            .collect();

        Ok(records
            .into_iter()
            .map(|record| {
                let contacts = record
                    .contacts
                    .iter()
                    .filter_map(|id| by_id.get(id).cloned())
                    .collect();
                record.into_view(contacts)
            })
            .collect())
    }
}
