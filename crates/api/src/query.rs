//! Query parameter types for API handlers.

use rolodex_core::error::CoreError;
use rolodex_core::listing::{
    parse_count_param, ContactFilter, ContactQuery, Pagination, SortDirection,
    DEFAULT_LIST_LIMIT, DEFAULT_LIST_OFFSET,
};
use serde::Deserialize;

/// Query parameters for `GET /contacts/get-contacts`.
///
/// `limit` and `offset` are kept as raw strings so that non-numeric values
/// can fall back to their defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactListParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "sortDir", alias = "sort_dir")]
    pub sort_dir: Option<String>,
}

impl ContactListParams {
    /// Convert raw parameters into a typed [`ContactQuery`].
    ///
    /// Fails when an offset is given without a limit or the sort direction
    /// is not recognised.
    pub fn into_query(self) -> Result<ContactQuery, CoreError> {
        let limit = parse_count_param(self.limit.as_deref(), DEFAULT_LIST_LIMIT);
        let offset = parse_count_param(self.offset.as_deref(), DEFAULT_LIST_OFFSET);

        Ok(ContactQuery {
            filter: ContactFilter::new(self.name, self.email, self.category),
            sort: SortDirection::parse_optional(self.sort_dir.as_deref())?,
            pagination: Pagination::new(limit, offset)?,
        })
    }
}
