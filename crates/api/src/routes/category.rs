//! Route definitions for categories, mounted at `/categories`.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// ```text
/// POST   /add-category          -> add_category
/// GET    /get-categories        -> list_categories
/// GET    /get-category/{id}     -> get_category
/// PATCH  /update-category/{id}  -> update_category
/// DELETE /delete-category/{id}  -> delete_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add-category", post(category::add_category))
        .route("/get-categories", get(category::list_categories))
        .route("/get-category/{id}", get(category::get_category))
        .route("/update-category/{id}", patch(category::update_category))
        .route("/delete-category/{id}", delete(category::delete_category))
}
