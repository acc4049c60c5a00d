//! PostgreSQL-backed contact store
//!
//! - Parameterized queries only
//! - Import runs in a single transaction

use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{Admin, ContactStore, ImportSummary, StoreError};
use crate::models::{Contact, ContactFields};

/// Contact store over a shared connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgStore {
    async fn list_contacts(&self) -> Result<Vec<Contact>, StoreError> {
        let contacts = sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, first_name, last_name, email, phone, company, notes
            FROM contacts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(contacts)
    }

    async fn get_contact(&self, id: i32) -> Result<Contact, StoreError> {
        sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, first_name, last_name, email, phone, company, notes
            FROM contacts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound {
            resource: "contact",
            id: id.to_string(),
        })
    }

    async fn create_contact(&self, fields: &ContactFields) -> Result<i32, StoreError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO contacts (first_name, last_name, email, phone, company, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(&fields.company)
        .bind(&fields.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update_contact(&self, id: i32, fields: &ContactFields) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE contacts
            SET first_name = $1,
                last_name = $2,
                email = $3,
                phone = $4,
                company = $5,
                notes = $6
            WHERE id = $7
            "#,
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(&fields.company)
        .bind(&fields.notes)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(id, "update matched no contact");
        }
        Ok(())
    }

    async fn delete_contact(&self, id: i32) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn import_contacts(&self, rows: &[ContactFields]) -> Result<ImportSummary, StoreError> {
        let mut tx = self.pool.begin().await?;
        let mut summary = ImportSummary::default();

        for row in rows {
            // Rows inserted earlier in this transaction are visible here,
            // so duplicates within one upload are skipped as well.
            let (exists,): (bool,) = sqlx::query_as(
                "SELECT EXISTS(SELECT 1 FROM contacts WHERE email = $1 AND phone = $2)",
            )
            .bind(&row.email)
            .bind(&row.phone)
            .fetch_one(&mut *tx)
            .await?;

            if exists {
                tracing::debug!(email = %row.email, phone = %row.phone, "skipping duplicate contact");
                summary.skipped += 1;
                continue;
            }

            sqlx::query(
                r#"
                INSERT INTO contacts (first_name, last_name, email, phone, company, notes)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(&row.first_name)
            .bind(&row.last_name)
            .bind(&row.email)
            .bind(&row.phone)
            .bind(&row.company)
            .bind(&row.notes)
            .execute(&mut *tx)
            .await?;

            summary.inserted += 1;
        }

        tx.commit().await?;
        Ok(summary)
    }

    async fn find_admin(&self, email: &str) -> Result<Option<Admin>, StoreError> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT email, password FROM admins WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p contacts-server -- --ignored

    async fn store() -> PgStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        PgStore::new(pool)
    }

    fn fields(email: &str, phone: &str) -> ContactFields {
        ContactFields {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: email.into(),
            phone: phone.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ping_reaches_database() {
        store().await.ping().await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_get_delete_roundtrip() {
        let store = store().await;
        let input = fields("grace@example.com", "555-0100");

        let id = store.create_contact(&input).await.unwrap();
        let fetched = store.get_contact(id).await.unwrap();
        assert_eq!(ContactFields::from(fetched), input);

        store.delete_contact(id).await.unwrap();
        let err = store.get_contact(id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn import_skips_existing_pairs() {
        let store = store().await;
        let existing = fields("dup@example.com", "555-0199");
        let id = store.create_contact(&existing).await.unwrap();

        let summary = store
            .import_contacts(&[existing.clone(), existing.clone()])
            .await
            .unwrap();
        assert_eq!(summary, ImportSummary { inserted: 0, skipped: 2 });

        store.delete_contact(id).await.unwrap();
    }
}
