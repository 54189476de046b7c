//! Response envelope types for API handlers.
//!
//! Each endpoint wraps its payload under a named key (`{"id": ..}`,
//! `{"contact": ..}`, `{"categories": [..]}`). Use these structs instead of
//! ad-hoc `serde_json::json!` so the shapes are checked at compile time.

use rolodex_core::types::DbId;
use rolodex_db::models::category::Category;
use rolodex_db::models::contact::ContactWithCategory;
use serde::Serialize;

/// `{ "id": n }`, returned by create endpoints.
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: DbId,
}

/// `{ "success": true }`, returned by update and delete endpoints.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub contact: ContactWithCategory,
}

#[derive(Debug, Serialize)]
pub struct ContactListResponse {
    pub contacts: Vec<ContactWithCategory>,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
}
