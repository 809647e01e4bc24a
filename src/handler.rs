use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Map, Value};

use crate::resource::{Resource, Stored};
use crate::store::RecordStore;
use crate::validation::{validate, ValidationErrors};
use crate::AResult;

pub const SAVE_FAILED: &str = "Unable to save record.";

/// Result of a create request.
#[derive(Debug)]
pub enum CreateOutcome<R> {
    Created(Stored<R>),
    Rejected(ValidationErrors),
    /// The store failed to persist a valid record. Reported to the caller as a
    /// bad request with a generic message; the cause only goes to the log.
    Failed,
}

impl<R> CreateOutcome<R> {
    pub fn status(&self) -> StatusCode {
        match self {
            CreateOutcome::Created(_) => StatusCode::CREATED,
            CreateOutcome::Rejected(_) | CreateOutcome::Failed => StatusCode::BAD_REQUEST,
        }
    }
}

impl<R: Resource> IntoResponse for CreateOutcome<R> {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            CreateOutcome::Created(stored) => (status, Json(json!(stored))).into_response(),
            CreateOutcome::Rejected(errors) => (status, Json(json!(errors))).into_response(),
            CreateOutcome::Failed => (status, Json(json!({ "detail": SAVE_FAILED }))).into_response(),
        }
    }
}

pub async fn list_records<R: Resource>(
    store: &dyn RecordStore<R>,
) -> AResult<(StatusCode, Json<Vec<Stored<R>>>)> {
    let records = store.list_all().await?;
    tracing::info!(resource = R::NAME, count = records.len(), "listed records");
    Ok((StatusCode::OK, Json(records)))
}

/// Validates `input` and, if it is well formed, persists it.
/// Invalid input never reaches the store.
pub async fn create_record<R: Resource>(
    store: &dyn RecordStore<R>,
    input: &Map<String, Value>,
) -> CreateOutcome<R> {
    let record = match validate::<R>(input) {
        Ok(record) => record,
        Err(errors) => {
            tracing::info!(resource = R::NAME, %errors, "rejected record");
            return CreateOutcome::Rejected(errors);
        }
    };

    match store.insert(record).await {
        Ok(stored) => {
            tracing::info!(resource = R::NAME, id = stored.id, "created record");
            CreateOutcome::Created(stored)
        }
        Err(err) => {
            tracing::error!(resource = R::NAME, error = %err, "failed to save record");
            CreateOutcome::Failed
        }
    }
}

/// Handler object bound to one store; the "class-based" way of serving a resource.
pub struct RecordHandler<R: Resource> {
    store: Arc<dyn RecordStore<R>>,
}

impl<R: Resource> Clone for RecordHandler<R> {
    fn clone(&self) -> Self {
        RecordHandler {
            store: self.store.clone(),
        }
    }
}

impl<R: Resource> RecordHandler<R> {
    pub fn new(store: Arc<dyn RecordStore<R>>) -> Self {
        RecordHandler { store }
    }

    pub async fn handle_list(&self) -> AResult<(StatusCode, Json<Vec<Stored<R>>>)> {
        list_records(self.store.as_ref()).await
    }

    pub async fn handle_create(&self, input: &Map<String, Value>) -> CreateOutcome<R> {
        create_record(self.store.as_ref(), input).await
    }
}
