use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{middleware, Json, Router};

use super::Contact;
use crate::extract::RecordInput;
use crate::handler::{CreateOutcome, RecordHandler};
use crate::middleware::{require_auth, AuthState};
use crate::resource::Stored;
use crate::AResult;

pub fn router(handler: RecordHandler<Contact>, auth: AuthState) -> Router {
    Router::new()
        .route("/", get(list).post(create))
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
        .with_state(handler)
}

#[utoipa::path(
    get, path = "/api/v1/contact", tag = "contact",
    responses(
        (status = 200, description = "All contacts in creation order", body = [crate::openapi::StoredContact]),
        (status = 401, description = "Missing or wrong bearer token", body = crate::openapi::DetailDoc)
    )
)]
pub(crate) async fn list(
    State(handler): State<RecordHandler<Contact>>,
) -> AResult<(StatusCode, Json<Vec<Stored<Contact>>>)> {
    handler.handle_list().await
}

#[utoipa::path(
    post, path = "/api/v1/contact", tag = "contact",
    request_body = Contact,
    responses(
        (status = 201, description = "Contact created", body = crate::openapi::StoredContact),
        (status = 400, description = "Field errors, or the contact could not be saved"),
        (status = 401, description = "Missing or wrong bearer token", body = crate::openapi::DetailDoc)
    )
)]
pub(crate) async fn create(
    State(handler): State<RecordHandler<Contact>>,
    RecordInput(input): RecordInput,
) -> CreateOutcome<Contact> {
    handler.handle_create(&input).await
}
