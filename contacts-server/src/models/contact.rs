//! Contact record and its writable fields
//!
//! JSON uses camelCase (`firstName`), the `contacts` table uses snake_case
//! (`first_name`). The same struct serves both through serde and sqlx.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored contact with its server-assigned id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub notes: String,
}

/// Client-writable contact fields.
///
/// Every field defaults to an empty string, so an update that omits a
/// field clears it rather than preserving the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub notes: String,
}

impl ContactFields {
    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            company: self.company.trim().to_owned(),
            notes: self.notes.trim().to_owned(),
        }
    }

    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.company,
            &self.notes,
        ]
        .iter()
        .all(|s| s.is_empty())
    }

    /// Attach a store-assigned id.
    pub fn with_id(self, id: i32) -> Contact {
        Contact {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            notes: self.notes,
        }
    }
}

impl From<Contact> for ContactFields {
    fn from(c: Contact) -> Self {
        Self {
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            phone: c.phone,
            company: c.company,
            notes: c.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let fields: ContactFields =
            serde_json::from_str(r#"{"firstName":"Ada","email":"ada@example.com"}"#).unwrap();
        assert_eq!(fields.first_name, "Ada");
        assert_eq!(fields.last_name, "");
        assert_eq!(fields.company, "");
        assert_eq!(fields.notes, "");
    }

    #[test]
    fn contact_serializes_camel_case() {
        let contact = ContactFields {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            ..Default::default()
        }
        .with_id(7);

        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["lastName"], "Lovelace");
        assert!(value.get("first_name").is_none());
    }

    #[test]
    fn trimmed_strips_every_field() {
        let fields = ContactFields {
            first_name: "  Ada ".into(),
            email: "\tada@example.com\n".into(),
            notes: " ".into(),
            ..Default::default()
        }
        .trimmed();
        assert_eq!(fields.first_name, "Ada");
        assert_eq!(fields.email, "ada@example.com");
        assert_eq!(fields.notes, "");
    }

    #[test]
    fn blank_detection() {
        assert!(ContactFields::default().is_blank());
        let fields = ContactFields {
            phone: "555".into(),
            ..Default::default()
        };
        assert!(!fields.is_blank());
    }
}
