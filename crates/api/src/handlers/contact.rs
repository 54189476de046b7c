//! Handlers for the `/contacts` resource.
//!
//! Contacts reference their category by label on the way in and expose both
//! `category_id` and the joined `category` label on the way out.

use axum::extract::State;
use axum::Json;
use rolodex_core::error::CoreError;
use rolodex_core::validation::{validate_contact_field, validate_email, validate_label};
use rolodex_db::models::contact::{CreateContact, UpdateContact};
use rolodex_db::repositories::ContactRepo;

use crate::error::AppResult;
use crate::extract::{IdPath, JsonBody, QueryParams};
use crate::query::ContactListParams;
use crate::response::{ContactListResponse, ContactResponse, IdResponse, SuccessResponse};
use crate::state::AppState;

/// POST /contacts/new-contact
///
/// Create a contact in the category named by `label`. Returns 404 when no
/// such category exists and 409 when the email is already in use.
pub async fn create_contact(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateContact>,
) -> AppResult<Json<IdResponse>> {
    validate_create(&input).map_err(CoreError::Validation)?;

    let contact = ContactRepo::create(&state.pool, &input).await?;

    tracing::info!(
        contact_id = contact.id,
        category_id = ?contact.category_id,
        "Contact created",
    );

    Ok(Json(IdResponse { id: contact.id }))
}

/// GET /contacts/get-contact/{id}
pub async fn get_contact(
    State(state): State<AppState>,
    IdPath(contact_id): IdPath,
) -> AppResult<Json<ContactResponse>> {
    let contact = ContactRepo::get(&state.pool, contact_id).await?;
    Ok(Json(ContactResponse { contact }))
}

/// GET /contacts/get-contacts
///
/// Query parameters: `limit`, `offset`, `name`, `email`, `category`,
/// `sortDir`. Text filters are case-insensitive substring matches.
pub async fn list_contacts(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ContactListParams>,
) -> AppResult<Json<ContactListResponse>> {
    let query = params.into_query()?;
    let contacts = ContactRepo::list(&state.pool, &query).await?;
    Ok(Json(ContactListResponse { contacts }))
}

/// PATCH /contacts/update-contact/{id}
///
/// Partial update: omitted fields are left unchanged.
pub async fn update_contact(
    State(state): State<AppState>,
    IdPath(contact_id): IdPath,
    JsonBody(input): JsonBody<UpdateContact>,
) -> AppResult<Json<SuccessResponse>> {
    validate_update(&input).map_err(CoreError::Validation)?;

    let contact = ContactRepo::update(&state.pool, contact_id, &input).await?;

    tracing::info!(
        contact_id,
        category_id = ?contact.category_id,
        "Contact updated",
    );

    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /contacts/delete-contact/{id}
pub async fn delete_contact(
    State(state): State<AppState>,
    IdPath(contact_id): IdPath,
) -> AppResult<Json<SuccessResponse>> {
    ContactRepo::delete(&state.pool, contact_id).await?;

    tracing::info!(contact_id, "Contact deleted");

    Ok(Json(SuccessResponse::ok()))
}

// ---------------------------------------------------------------------------
// Input validation
// ---------------------------------------------------------------------------

fn validate_create(input: &CreateContact) -> Result<(), String> {
    validate_contact_field("name", &input.name)?;
    validate_contact_field("phone", &input.phone)?;
    validate_contact_field("address", &input.address)?;
    validate_email(&input.email)?;
    validate_label(&input.label)
}

/// Email and label may be omitted, but not blanked.
fn validate_update(input: &UpdateContact) -> Result<(), String> {
    let free_text = [
        ("name", &input.name),
        ("phone", &input.phone),
        ("address", &input.address),
    ];
    for (field, value) in free_text {
        if let Some(value) = value {
            validate_contact_field(field, value)?;
        }
    }
    if let Some(email) = &input.email {
        validate_email(email)?;
    }
    if let Some(label) = &input.label {
        validate_label(label)?;
    }
    Ok(())
}
