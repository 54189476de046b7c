//! Route definitions for contacts, mounted at `/contacts`.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// ```text
/// POST   /new-contact           -> create_contact
/// GET    /get-contacts          -> list_contacts
/// GET    /get-contact/{id}      -> get_contact
/// PATCH  /update-contact/{id}   -> update_contact
/// DELETE /delete-contact/{id}   -> delete_contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new-contact", post(contact::create_contact))
        .route("/get-contacts", get(contact::list_contacts))
        .route("/get-contact/{id}", get(contact::get_contact))
        .route("/update-contact/{id}", patch(contact::update_contact))
        .route("/delete-contact/{id}", delete(contact::delete_contact))
}
