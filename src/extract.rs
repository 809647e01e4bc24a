use std::collections::HashMap;

use async_trait::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde_json::{json, Map, Value};

pub const NOT_A_DICTIONARY: &str = "Invalid data. Expected a dictionary.";

/// Untyped create payload. Accepts a JSON object or an urlencoded form.
///
/// Bodies that cannot be read as a field map are rejected with 400 and
/// `{"non_field_errors": [...]}`.
#[derive(Debug)]
pub struct RecordInput(pub Map<String, Value>);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

fn bad_request(message: impl Into<String>) -> Response {
    let message = message.into();
    tracing::info!(%message, "rejected request body");
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "non_field_errors": [message] })),
    )
        .into_response()
}

fn json_rejection_message(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::JsonDataError(_) => NOT_A_DICTIONARY.to_string(),
        JsonRejection::JsonSyntaxError(err) => format!("JSON parse error - {}", err.body_text()),
        JsonRejection::MissingJsonContentType(_) => {
            "Expected a JSON object or an urlencoded form.".to_string()
        }
        other => other.body_text(),
    }
}

#[async_trait]
impl<S> FromRequest<S> for RecordInput
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|rejection| bad_request(rejection.body_text()))?;
            let map = fields
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect();
            return Ok(RecordInput(map));
        }

        let Json(map) = Json::<Map<String, Value>>::from_request(req, state)
            .await
            .map_err(|rejection| bad_request(json_rejection_message(&rejection)))?;
        Ok(RecordInput(map))
    }
}
