use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"status": 404, "message": "Film not found"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, message: message.into(), detail }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, None)
    }
}

/// HTTP status a service failure maps to.
pub fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Validation(_) | ServiceError::Model(ModelError::Validation(_)) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Db(_) | ServiceError::Model(ModelError::Db(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let status = status_for(&e);
        match e {
            ServiceError::Validation(msg) | ServiceError::Model(ModelError::Validation(msg)) => Self::new(status, msg, None),
            ServiceError::NotFound(msg) => Self::new(status, msg, None),
            other => Self::new(status, "Internal Server Error", Some(other.to_string())),
        }
    }
}

impl From<tera::Error> for JsonApiError {
    fn from(e: tera::Error) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Template Error", Some(e.to_string()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), message = %self.message, detail = ?self.detail, "request failed");
        }
        let mut body = serde_json::json!({ "status": self.status.as_u16(), "message": self.message });
        if let Some(detail) = self.detail {
            body["detail"] = serde_json::Value::String(detail);
        }
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("template loading failed: {0}")]
    Templates(#[from] tera::Error),
}
