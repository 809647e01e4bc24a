use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub type AResult<T> = core::result::Result<T, AError>;

#[derive(Debug)]
pub struct AError(pub anyhow::Error);

impl IntoResponse for AError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = ?self.0, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "statusCode": StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                "message": format!("Something went wrong: {}", self.0)
            })),
        )
            .into_response()
    }
}

impl<E> From<E> for AError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Faults raised by a record store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("record (de)serialization failed: {0}")]
    Serialization(#[from] serde_dynamo::Error),
    #[error("identifier counter for {0} returned no value")]
    MissingCounter(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}
