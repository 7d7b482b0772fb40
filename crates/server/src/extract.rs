use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts},
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::errors::JsonApiError;

/// Body extractor accepting `application/json` or
/// `application/x-www-form-urlencoded`, picked by `Content-Type`.
///
/// Anything that is not a form is parsed as JSON. Rejections become a 400
/// JSON error instead of axum's plain-text rejection.
pub struct JsonOrForm<T>(pub T);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send + 'static,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| JsonApiError::bad_request(e.body_text()))?;
            return Ok(Self(value));
        }
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| JsonApiError::bad_request(e.body_text()))?;
        Ok(Self(value))
    }
}

/// `Path` with the same 400 JSON rejection as [`JsonOrForm`], so a
/// non-numeric id is reported like any other bad input.
pub struct PathParam<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| JsonApiError::bad_request(e.body_text()))?;
        Ok(Self(value))
    }
}
