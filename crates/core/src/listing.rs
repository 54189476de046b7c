//! Typed options for the contact list query.
//!
//! The HTTP layer parses raw query parameters into a [`ContactQuery`]; the
//! repository layer renders it into a parameterized SQL statement. Every
//! option is independently optional.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Page size used when `limit` is absent or not a number.
pub const DEFAULT_LIST_LIMIT: i64 = 10;

/// Offset used when `offset` is absent or not a number.
pub const DEFAULT_LIST_OFFSET: i64 = 0;

/// Parse a numeric query parameter, falling back to `default` when the value
/// is missing or does not parse as an integer.
pub fn parse_count_param(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Direction in which contacts are ordered by creation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// SQL keyword for this direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// Parse an optional `sortDir` parameter. Missing or blank means ascending.
    pub fn parse_optional(raw: Option<&str>) -> Result<Self, CoreError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(SortDirection::default()),
            Some(value) => value.parse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(CoreError::Validation(format!(
                "Invalid sort direction '{other}'. Must be one of: asc, desc"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Normalized pagination window.
///
/// A non-positive limit means "no limit" and a non-positive offset means
/// "start at the beginning". An offset is only meaningful with a limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    limit: Option<i64>,
    offset: Option<i64>,
}

impl Pagination {
    /// Build a window from raw `limit` / `offset` values.
    ///
    /// Fails with [`CoreError::Validation`] when a positive offset is given
    /// without a positive limit.
    pub fn new(limit: i64, offset: i64) -> Result<Self, CoreError> {
        let limit = (limit > 0).then_some(limit);
        let offset = (offset > 0).then_some(offset);

        if offset.is_some() && limit.is_none() {
            return Err(CoreError::Validation(
                "offset specified without limit".to_string(),
            ));
        }

        Ok(Self { limit, offset })
    }

    /// Window that returns every row.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn limit(&self) -> Option<i64> {
        self.limit
    }

    pub fn offset(&self) -> Option<i64> {
        self.offset
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Optional case-insensitive substring filters, ANDed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Matched against the label of the contact's category.
    pub category: Option<String>,
}

impl ContactFilter {
    /// Build a filter, treating empty strings as "no filter".
    ///
    /// Whitespace-only values are kept and match literally.
    pub fn new(name: Option<String>, email: Option<String>, category: Option<String>) -> Self {
        Self {
            name: non_empty(name),
            email: non_empty(email),
            category: non_empty(category),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.category.is_none()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Wrap a user-supplied value in `%...%` for an `ILIKE` substring match.
///
/// `\`, `%` and `_` in the value are escaped so they match literally.
pub fn like_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// ---------------------------------------------------------------------------
// Combined query
// ---------------------------------------------------------------------------

/// Everything needed to list contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactQuery {
    pub filter: ContactFilter,
    pub sort: SortDirection,
    pub pagination: Pagination,
}
