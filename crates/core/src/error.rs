use std::fmt;

use crate::types::DbId;

/// Entity name used in errors about categories.
pub const ENTITY_CATEGORY: &str = "Category";

/// Entity name used in errors about contacts.
pub const ENTITY_CONTACT: &str = "Contact";

/// How a missing row was looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Id(DbId),
    Label(String),
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Id(id) => write!(f, "id {id}"),
            LookupKey::Label(label) => write!(f, "label '{label}'"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with {key}")]
    NotFound {
        entity: &'static str,
        key: LookupKey,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    /// A row looked up by primary key does not exist.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound {
            entity,
            key: LookupKey::Id(id),
        }
    }

    /// No category carries the given label.
    pub fn label_not_found(label: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity: ENTITY_CATEGORY,
            key: LookupKey::Label(label.into()),
        }
    }
}
