use std::borrow::Cow;

use axum::body::Body;
use axum::http::Response;
use axum::response::IntoResponse;
use axum::Json;
use hyper::StatusCode;
use serde::Serialize;

/// Numeric code carried in the body of a request-level rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ApiErrorCode(pub u16);

impl ApiErrorCode {
    pub const ROUTE_NOT_FOUND: Self = Self(404);
    pub const INVALID_PAGE: Self = Self(1000);
}

/// Rejections decided by the HTTP layer before anything goes upstream.
///
/// Upstream failures never become an `ApiError`; they travel as a 500
/// envelope instead.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status_code: StatusCode,
    pub error_code: ApiErrorCode,
    pub error: Cow<'static, str>,
}

impl ApiError {
    pub fn invalid_page(param: &str) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            error_code: ApiErrorCode::INVALID_PAGE,
            error: format!("{param} must be a positive integer").into(),
        }
    }

    pub fn route_not_found() -> Self {
        Self {
            status_code: StatusCode::NOT_FOUND,
            error_code: ApiErrorCode::ROUTE_NOT_FOUND,
            error: "route not found".into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response<Body> {
        (self.status_code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_of(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn invalid_page_names_the_parameter() {
        let (status, body) = body_of(ApiError::invalid_page("pageSize")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_code"], 1000);
        assert_eq!(body["error"], "pageSize must be a positive integer");
        assert!(body.get("status_code").is_none());
    }

    #[tokio::test]
    async fn missing_route_is_a_404_body() {
        let (status, body) = body_of(ApiError::route_not_found()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error_code"], 404);
    }
}
