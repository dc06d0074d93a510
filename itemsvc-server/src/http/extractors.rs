//! Custom Axum extractors
//!
//! Both reject with `ApiError` so clients always get a JSON error body.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::models::ValidationError;
use super::error::ApiError;

/// Raw item id from the path.
///
/// Parsing is deferred to the handler: an id the store could never accept
/// fails like any other store error, with the handler's own message.
pub struct ItemId(String);

impl ItemId {
    /// Parse as an `i32`, reporting failure as a 500 carrying `message`.
    pub fn parse_or(self, message: &'static str) -> Result<i32, ApiError> {
        self.0.parse::<i32>().map_err(|e| ApiError::Internal {
            message,
            detail: format!("invalid item id '{}': {}", self.0, e),
        })
    }
}

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                resource: "item",
                id: String::new(),
            })?;

        Ok(Self(raw))
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// JSON body whose rejection is a 400 `ApiError` instead of axum's plain-text one.
///
/// A body that is empty or not labelled `application/json` decodes as
/// `T::default()`, so required-field checks still run and report the field.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json(req.headers());
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(reason = %rejection.body_text(), "unreadable request body");
            ApiError::Validation(ValidationError::MalformedBody)
        })?;

        if !json || bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        match Json::<T>::from_bytes(&bytes) {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "rejected request body");
                Err(ApiError::Validation(ValidationError::MalformedBody))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn json_content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(!is_json(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json; charset=utf-8"));
        assert!(is_json(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert!(!is_json(&headers));
    }

    #[test]
    fn out_of_range_id_is_internal() {
        let err = ItemId("3000000000".into()).parse_or("failed to delete item").unwrap_err();
        assert!(matches!(err, ApiError::Internal { message: "failed to delete item", .. }));
        assert_eq!(ItemId("42".into()).parse_or("unused").unwrap(), 42);
    }
}
