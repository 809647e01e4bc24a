use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::contact::{self, Contact};
use crate::handler::RecordHandler;
use crate::medical::{self, Medical};
use crate::middleware::AuthState;
use crate::openapi::ApiDoc;
use crate::store::{MemoryStore, RecordStore};

/// Store handles for every resource, built once at startup.
#[derive(Clone)]
pub struct Stores {
    pub contact: Arc<dyn RecordStore<Contact>>,
    pub medical: Arc<dyn RecordStore<Medical>>,
}

impl Stores {
    pub fn in_memory() -> Self {
        Stores {
            contact: Arc::new(MemoryStore::<Contact>::new()),
            medical: Arc::new(MemoryStore::<Medical>::new()),
        }
    }
}

pub fn router(stores: Stores, auth: AuthState, docs_enabled: bool) -> Router {
    let app = Router::new()
        .route("/health", get(health))
        .nest(
            "/api/v1/contact",
            contact::router(RecordHandler::new(stores.contact), auth),
        )
        .nest("/api/v1/medical", medical::router(stores.medical));

    if docs_enabled {
        app.route("/api-docs/openapi.json", get(openapi_json))
    } else {
        app
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up")))]
pub(crate) async fn health() -> StatusCode {
    StatusCode::OK
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
