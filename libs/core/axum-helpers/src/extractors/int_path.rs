//! Integer path parameter extractor with automatic validation.

use crate::errors::{AppError, FieldError};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for integer `{id}` path parameters.
///
/// Parses the path segment as an `i32`, rejecting anything else with a 400
/// and a field error naming `id` — before the handler (and any store access)
/// runs.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::IntPath;
///
/// async fn get_product(IntPath(id): IntPath) -> String {
///     format!("Product ID: {}", id)
/// }
/// ```
pub struct IntPath(pub i32);

impl<S> FromRequestParts<S> for IntPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        raw.parse::<i32>().map(IntPath).map_err(|_| {
            AppError::Validation(vec![FieldError::new(
                "id",
                format!("ID '{}' is not a valid integer", raw),
            )])
            .into_response()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::{body::Body, Router};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        async fn handler(IntPath(id): IntPath) -> String {
            id.to_string()
        }

        Router::new().route("/{id}", get(handler))
    }

    #[tokio::test]
    async fn parses_integer_ids() {
        let response = app()
            .oneshot(Request::get("/42").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"42");
    }

    #[tokio::test]
    async fn rejects_non_integer_ids_naming_the_id_field() {
        let response = app()
            .oneshot(Request::get("/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["errors"][0]["field"], "id");
        assert!(json["errors"][0]["message"]
            .as_str()
            .unwrap()
            .contains("abc"));
    }
}
