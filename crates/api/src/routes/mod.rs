pub mod category;
pub mod contact;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /contacts/new-contact                 create (POST)
/// /contacts/get-contacts                list with filters (GET)
/// /contacts/get-contact/{id}            get (GET)
/// /contacts/update-contact/{id}         partial update (PATCH)
/// /contacts/delete-contact/{id}         delete (DELETE)
///
/// /categories/add-category              create (POST)
/// /categories/get-categories            list (GET)
/// /categories/get-category/{id}         get (GET)
/// /categories/update-category/{id}      rename (PATCH)
/// /categories/delete-category/{id}      delete (DELETE)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .nest("/contacts", contact::router())
        .nest("/categories", category::router())
}
