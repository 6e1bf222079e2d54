//! Contact Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{CONTACT_TABLE, ContactContent, ContactRecord};
use std::collections::HashMap;
use surrealdb::engine::any::Any;
use surrealdb::{RecordId, Surreal};

#[derive(Clone, Debug)]
pub struct ContactRepository {
    base: BaseRepository,
}

impl ContactRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a contact; the store assigns its id
    pub async fn create(&self, content: ContactContent) -> RepoResult<ContactRecord> {
        let mut result = self
            .base
            .db()
            .query("CREATE type::table($table) CONTENT $data RETURN AFTER")
            .bind(("table", CONTACT_TABLE))
            .bind(("data", content))
            .await?;

        let created: Option<ContactRecord> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create contact".to_string()))
    }

    /// Fetch the contacts named by `ids`, in the same order
    ///
    /// Ids without a stored contact are skipped; repeated ids yield
    /// repeated contacts.
    pub async fn find_many(&self, ids: &[RecordId]) -> RepoResult<Vec<ContactRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut result = self
            .base
            .db()
            .query("SELECT * FROM type::table($table) WHERE id INSIDE $ids")
            .bind(("table", CONTACT_TABLE))
            .bind(("ids", ids.to_vec()))
            .await?;
        let found: Vec<ContactRecord> = result.take(0)?;

        let by_id: HashMap<RecordId, ContactRecord> =
            found.into_iter().map(|c| (c.id.clone(), c)).collect();
        Ok(ids.iter().filter_map(|id| by_id.get(id).cloned()).collect())
    }

    /// Merge the contact's current fields into its stored document
    pub async fn update_fields(&self, contact: &ContactRecord) -> RepoResult<()> {
        let result = self
            .base
            .db()
            .query("UPDATE $id MERGE $data RETURN NONE")
            .bind(("id", contact.id.clone()))
            .bind(("data", ContactContent::from_details(contact.details())))
            .await?;
        result.check()?;
        Ok(())
    }

    /// Delete every contact named by `ids`, returning how many were removed
    pub async fn delete_many(&self, ids: &[RecordId]) -> RepoResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut result = self
            .base
            .db()
            .query("DELETE type::table($table) WHERE id INSIDE $ids RETURN BEFORE")
            .bind(("table", CONTACT_TABLE))
            .bind(("ids", ids.to_vec()))
            .await?;
        let deleted: Vec<ContactRecord> = result.take(0)?;
        Ok(deleted.len())
    }
}
