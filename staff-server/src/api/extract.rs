//! Request body extraction
//!
//! Bodies are parsed only when they are declared as JSON. A missing or
//! non-JSON body is read as an empty object, so every field is absent.
//! Bodies that claim to be JSON but fail to parse are rejected as
//! [`ErrorCode::InvalidRequest`](shared::ErrorCode::InvalidRequest); a body
//! that cannot be read at all is an internal error. Both surface as a
//! generic 500.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use http::HeaderMap;
use http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use shared::AppError;

/// JSON body extractor with the service's error shape
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = is_json(req.headers());
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            AppError::internal(format!("Failed to read request body: {}", e.body_text()))
        })?;

        let raw: &[u8] = if declared_json && !bytes.is_empty() {
            &bytes[..]
        } else {
            b"{}"
        };

        serde_json::from_slice(raw)
            .map(JsonBody)
            .map_err(|e| AppError::invalid_request(format!("Malformed JSON body: {e}")))
    }
}

/// `application/json` or any `+json` media type
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
