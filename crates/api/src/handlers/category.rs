//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::Json;
use rolodex_core::error::CoreError;
use rolodex_core::validation::validate_label;
use rolodex_db::models::category::{CreateCategory, UpdateCategoryLabel};
use rolodex_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, JsonBody};
use crate::response::{CategoryListResponse, CategoryResponse, IdResponse, SuccessResponse};
use crate::state::AppState;

/// POST /categories/add-category
pub async fn add_category(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateCategory>,
) -> AppResult<Json<IdResponse>> {
    validate_label(&input.label).map_err(CoreError::Validation)?;

    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        category_id = category.id,
        label = %category.label,
        "Category created",
    );

    Ok(Json(IdResponse { id: category.id }))
}

/// GET /categories/get-categories
///
/// List all categories in insertion order.
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<CategoryListResponse>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(CategoryListResponse { categories }))
}

/// GET /categories/get-category/{id}
pub async fn get_category(
    State(state): State<AppState>,
    IdPath(category_id): IdPath,
) -> AppResult<Json<CategoryResponse>> {
    let category = CategoryRepo::get(&state.pool, category_id).await?;
    Ok(Json(CategoryResponse { category }))
}

/// DELETE /categories/delete-category/{id}
///
/// Contacts in the category are kept with their category cleared.
pub async fn delete_category(
    State(state): State<AppState>,
    IdPath(category_id): IdPath,
) -> AppResult<Json<SuccessResponse>> {
    CategoryRepo::delete(&state.pool, category_id).await?;

    tracing::info!(category_id, "Category deleted");

    Ok(Json(SuccessResponse::ok()))
}

/// PATCH /categories/update-category/{id}
///
/// Rename a category. Fails with 409 if another category already has the
/// requested label.
pub async fn update_category(
    State(state): State<AppState>,
    IdPath(category_id): IdPath,
    JsonBody(input): JsonBody<UpdateCategoryLabel>,
) -> AppResult<Json<SuccessResponse>> {
    validate_label(&input.label).map_err(CoreError::Validation)?;

    let category = CategoryRepo::update_label(&state.pool, category_id, &input.label).await?;

    tracing::info!(
        category_id,
        label = %category.label,
        "Category label updated",
    );

    Ok(Json(SuccessResponse::ok()))
}
