use crate::render::RenderError;
use crate::schema_model::SchemaModelError;
use std::sync::Arc;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum ExecuteError {
    #[error("HTTP request to `{url}` failed: {err}")]
    Http {
        url: String,
        err: Arc<reqwest::Error>,
    },

    #[error("Failed to encode or decode a GraphQL request body: {0}")]
    Json(Arc<serde_json::Error>),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    SchemaModel(#[from] SchemaModelError),

    /// The server answered, but reported errors. `data` holds whatever partial
    /// result came alongside them.
    #[error("The GraphQL server responded with errors: {errors}")]
    TransportFailure {
        data: serde_json::Value,
        errors: serde_json::Value,
    },
}
