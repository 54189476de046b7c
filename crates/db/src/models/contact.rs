//! Contact model, read view, and DTOs.

use rolodex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `contacts` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// `None` once the referenced category has been deleted.
    pub category_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A contact joined with the label of its category.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ContactWithCategory {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub category_id: Option<DbId>,
    /// Category label, `None` when the contact has no category.
    pub category: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a contact. The category is referenced by label.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContact {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub address: String,
    pub label: String,
}

/// DTO for a partial contact update.
///
/// `None` leaves a field unchanged; `Some("")` clears a free-text field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContact {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    /// New category, referenced by label.
    #[serde(alias = "category")]
    pub label: Option<String>,
}

impl UpdateContact {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.label.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_with_no_fields_is_empty() {
        assert!(UpdateContact::default().is_empty());
        let update = UpdateContact {
            phone: Some(String::new()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
