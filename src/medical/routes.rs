use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};

use super::Medical;
use crate::extract::RecordInput;
use crate::handler::{create_record, list_records, CreateOutcome};
use crate::resource::Stored;
use crate::store::RecordStore;
use crate::AResult;

type MedicalStore = Arc<dyn RecordStore<Medical>>;

pub fn router(store: MedicalStore) -> Router {
    Router::new()
        .route("/", get(get_medical).post(save_medical))
        .route("/get_medical", get(get_medical))
        .route("/save_medical", post(save_medical))
        .layer(Extension(store))
}

#[utoipa::path(
    get, path = "/api/v1/medical", tag = "medical",
    responses(
        (status = 200, description = "All medical records in creation order", body = [crate::openapi::StoredMedical])
    )
)]
pub(crate) async fn get_medical(
    Extension(store): Extension<MedicalStore>,
) -> AResult<(StatusCode, Json<Vec<Stored<Medical>>>)> {
    list_records(store.as_ref()).await
}

#[utoipa::path(
    post, path = "/api/v1/medical", tag = "medical",
    request_body = Medical,
    responses(
        (status = 201, description = "Medical record created", body = crate::openapi::StoredMedical),
        (status = 400, description = "Field errors, or the record could not be saved")
    )
)]
pub(crate) async fn save_medical(
    Extension(store): Extension<MedicalStore>,
    RecordInput(input): RecordInput,
) -> CreateOutcome<Medical> {
    create_record(store.as_ref(), &input).await
}
