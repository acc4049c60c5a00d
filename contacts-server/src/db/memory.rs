//! In-memory contact store for tests and local experiments

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{Admin, ContactStore, ImportSummary, StoreError};
use crate::models::{Contact, ContactFields};

#[derive(Default)]
struct Tables {
    next_id: i32,
    contacts: BTreeMap<i32, Contact>,
    admins: Vec<Admin>,
}

impl Tables {
    fn insert(&mut self, fields: &ContactFields) -> i32 {
        self.next_id += 1;
        let id = self.next_id;
        self.contacts.insert(id, fields.clone().with_id(id));
        id
    }

    fn pair_exists(&self, email: &str, phone: &str) -> bool {
        self.contacts
            .values()
            .any(|c| c.email == email && c.phone == phone)
    }
}

/// Contact store held in process memory.
///
/// Ids come from a monotonic counter and are never reused.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an admin row. `password_hash` must be an Argon2id PHC string.
    pub async fn add_admin(&self, email: &str, password_hash: &str) {
        self.tables.write().await.admins.push(Admin {
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
        });
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn list_contacts(&self) -> Result<Vec<Contact>, StoreError> {
        Ok(self.tables.read().await.contacts.values().cloned().collect())
    }

    async fn get_contact(&self, id: i32) -> Result<Contact, StoreError> {
        self.tables
            .read()
            .await
            .contacts
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                resource: "contact",
                id: id.to_string(),
            })
    }

    async fn create_contact(&self, fields: &ContactFields) -> Result<i32, StoreError> {
        Ok(self.tables.write().await.insert(fields))
    }

    async fn update_contact(&self, id: i32, fields: &ContactFields) -> Result<(), StoreError> {
        if let Some(contact) = self.tables.write().await.contacts.get_mut(&id) {
            *contact = fields.clone().with_id(id);
        }
        Ok(())
    }

    async fn delete_contact(&self, id: i32) -> Result<(), StoreError> {
        self.tables.write().await.contacts.remove(&id);
        Ok(())
    }

    async fn import_contacts(&self, rows: &[ContactFields]) -> Result<ImportSummary, StoreError> {
        let mut tables = self.tables.write().await;
        let mut summary = ImportSummary::default();

        for row in rows {
            if tables.pair_exists(&row.email, &row.phone) {
                summary.skipped += 1;
            } else {
                tables.insert(row);
                summary.inserted += 1;
            }
        }

        Ok(summary)
    }

    async fn find_admin(&self, email: &str) -> Result<Option<Admin>, StoreError> {
        Ok(self
            .tables
            .read()
            .await
            .admins
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
