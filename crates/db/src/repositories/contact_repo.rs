//! Repository for the `contacts` table.

use rolodex_core::error::{CoreError, ENTITY_CONTACT};
use rolodex_core::listing::{like_pattern, ContactQuery};
use rolodex_core::types::DbId;
use sqlx::PgPool;

use crate::error::StoreResult;
use crate::models::contact::{Contact, ContactWithCategory, CreateContact, UpdateContact};
use crate::repositories::CategoryRepo;

// ---------------------------------------------------------------------------
// Column lists
// ---------------------------------------------------------------------------

/// Column list for plain `contacts` queries.
const COLUMNS: &str = "id, name, phone, email, address, category_id, created_at, updated_at";

/// Column list for the contact + category label read view.
const JOINED_COLUMNS: &str = "\
    c.id, c.name, c.phone, c.email, c.address, c.category_id, \
    cat.label AS category, c.created_at, c.updated_at";

/// FROM clause for the read view.
const JOINED_FROM: &str = "contacts c LEFT JOIN categories cat ON cat.id = c.category_id";

// ---------------------------------------------------------------------------
// ContactRepo
// ---------------------------------------------------------------------------

/// Provides CRUD and list operations for contacts.
pub struct ContactRepo;

impl ContactRepo {
    /// Create a contact, resolving its category label first.
    ///
    /// Label resolution and insert share one transaction. Fails with
    /// `NotFound` for an unknown label (no row is inserted) and with
    /// `Conflict` when the email is already used. Emails are stored trimmed.
    pub async fn create(pool: &PgPool, input: &CreateContact) -> StoreResult<Contact> {
        let mut tx = pool.begin().await?;

        let category_id = CategoryRepo::find_id_by_label(&mut *tx, &input.label).await?;

        let query = format!(
            "INSERT INTO contacts (name, phone, email, address, category_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let contact = sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(input.email.trim())
            .bind(&input.address)
            .bind(category_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(contact)
    }

    /// Find a contact (with its category label) by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> StoreResult<Option<ContactWithCategory>> {
        let query = format!("SELECT {JOINED_COLUMNS} FROM {JOINED_FROM} WHERE c.id = $1");
        let contact = sqlx::query_as::<_, ContactWithCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(contact)
    }

    /// Fetch a contact by ID, failing with `NotFound` if it does not exist.
    pub async fn get(pool: &PgPool, id: DbId) -> StoreResult<ContactWithCategory> {
        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CoreError::not_found(ENTITY_CONTACT, id).into())
    }

    /// Delete a contact by ID.
    pub async fn delete(pool: &PgPool, id: DbId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::not_found(ENTITY_CONTACT, id).into());
        }
        Ok(())
    }

    /// List contacts matching the given filters, ordered by creation time.
    pub async fn list(
        pool: &PgPool,
        params: &ContactQuery,
    ) -> StoreResult<Vec<ContactWithCategory>> {
        let (query, bind_values) = build_list_query(params);
        tracing::debug!(%query, binds = bind_values.len(), "Listing contacts");

        let mut q = sqlx::query_as::<_, ContactWithCategory>(&query);
        for val in &bind_values {
            q = match val {
                BindValue::BigInt(v) => q.bind(*v),
                BindValue::Text(v) => q.bind(v.as_str()),
            };
        }

        let contacts = q.fetch_all(pool).await?;
        Ok(contacts)
    }

    /// Apply a partial update, returning the updated row.
    ///
    /// A present label is resolved inside the same transaction (`NotFound`
    /// if unknown). A duplicate email surfaces as `Conflict`. An update with
    /// no fields leaves the row untouched.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateContact) -> StoreResult<Contact> {
        let mut tx = pool.begin().await?;

        let category_id = match input.label.as_deref() {
            Some(label) => Some(CategoryRepo::find_id_by_label(&mut *tx, label).await?),
            None => None,
        };

        let query = format!(
            "UPDATE contacts SET
                name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                email = COALESCE($4, email),
                address = COALESCE($5, address),
                category_id = COALESCE($6, category_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let contact = sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.phone.as_deref())
            .bind(input.email.as_deref().map(str::trim))
            .bind(input.address.as_deref())
            .bind(category_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::not_found(ENTITY_CONTACT, id))?;

        tx.commit().await?;
        Ok(contact)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Typed bind value for the dynamically-built list query.
#[derive(Debug, PartialEq)]
enum BindValue {
    BigInt(i64),
    Text(String),
}

/// Render a [`ContactQuery`] into SQL text and its bind values.
///
/// Filters become `ILIKE` conditions joined with `AND`; user-supplied text
/// only ever appears as a bind value.
fn build_list_query(params: &ContactQuery) -> (String, Vec<BindValue>) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_values: Vec<BindValue> = Vec::new();
    let mut bind_idx = 1u32;

    let filters = [
        ("c.name", params.filter.name.as_deref()),
        ("c.email", params.filter.email.as_deref()),
        ("cat.label", params.filter.category.as_deref()),
    ];
    for (column, value) in filters {
        if let Some(value) = value {
            conditions.push(format!("{column} ILIKE ${bind_idx}"));
            bind_idx += 1;
            bind_values.push(BindValue::Text(like_pattern(value)));
        }
    }

    let mut query = format!("SELECT {JOINED_COLUMNS} FROM {JOINED_FROM}");
    if !conditions.is_empty() {
        query.push_str(&format!(" WHERE {}", conditions.join(" AND ")));
    }

    let direction = params.sort.as_sql();
    query.push_str(&format!(" ORDER BY c.created_at {direction}, c.id {direction}"));

    if let Some(limit) = params.pagination.limit() {
        query.push_str(&format!(" LIMIT ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::BigInt(limit));
    }
    if let Some(offset) = params.pagination.offset() {
        query.push_str(&format!(" OFFSET ${bind_idx}"));
        bind_values.push(BindValue::BigInt(offset));
    }

    (query, bind_values)
}
