//! Repository for the `categories` table.

use rolodex_core::error::{CoreError, ENTITY_CATEGORY};
use rolodex_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::error::StoreResult;
use crate::models::category::{Category, CreateCategory};

/// Column list for categories queries.
const COLUMNS: &str = "id, label, created_at, updated_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    ///
    /// A duplicate label surfaces as [`CoreError::Conflict`] through the
    /// `uq_categories_label` constraint.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> StoreResult<Category> {
        let query = format!("INSERT INTO categories (label) VALUES ($1) RETURNING {COLUMNS}");
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(&input.label)
            .fetch_one(pool)
            .await?;
        Ok(category)
    }

    /// List all categories in insertion order.
    pub async fn list(pool: &PgPool) -> StoreResult<Vec<Category>> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC");
        let categories = sqlx::query_as::<_, Category>(&query)
            .fetch_all(pool)
            .await?;
        Ok(categories)
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> StoreResult<Option<Category>> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(category)
    }

    /// Fetch a category by ID, failing with `NotFound` if it does not exist.
    pub async fn get(pool: &PgPool, id: DbId) -> StoreResult<Category> {
        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CoreError::not_found(ENTITY_CATEGORY, id).into())
    }

    /// Delete a category by ID.
    ///
    /// Contacts that referenced it keep existing with a NULL `category_id`.
    pub async fn delete(pool: &PgPool, id: DbId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::not_found(ENTITY_CATEGORY, id).into());
        }
        Ok(())
    }

    /// Rename a category, returning the updated row.
    ///
    /// The label is changed only if no other category already holds it, in a
    /// single conditional statement. When nothing was updated the cause is
    /// reported as `NotFound` (unknown id) or `Conflict` (label taken).
    pub async fn update_label(pool: &PgPool, id: DbId, label: &str) -> StoreResult<Category> {
        let query = format!(
            "UPDATE categories SET label = $2
             WHERE id = $1
               AND NOT EXISTS (
                   SELECT 1 FROM categories WHERE label = $2 AND id <> $1
               )
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(label)
            .fetch_optional(pool)
            .await?;

        if let Some(category) = updated {
            return Ok(category);
        }

        if Self::exists(pool, id).await? {
            Err(CoreError::Conflict(format!("Category '{label}' already exists")).into())
        } else {
            Err(CoreError::not_found(ENTITY_CATEGORY, id).into())
        }
    }

    /// Resolve a label (exact match) to its category ID.
    ///
    /// Takes a `KEY SHARE` lock on the row so that, inside a transaction,
    /// the category cannot be deleted before the caller's write commits.
    pub async fn find_id_by_label<'e, E>(executor: E, label: &str) -> StoreResult<DbId>
    where
        E: PgExecutor<'e>,
    {
        let id: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM categories WHERE label = $1 FOR KEY SHARE")
                .bind(label)
                .fetch_optional(executor)
                .await?;

        id.ok_or_else(|| CoreError::label_not_found(label).into())
    }

    /// Check whether a category with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> StoreResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM categories WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }
}
