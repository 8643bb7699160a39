//! Validating extractors for Web API requests.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::request::PageQuery;
use crate::board::Page;
use crate::web::error::ApiError;

/// A JSON extractor that validates the request body.
///
/// The body is deserialized as JSON and then checked with the `validator`
/// crate. Malformed JSON, missing fields and failed checks are all
/// rejected with 422.
///
/// # Example
///
/// ```ignore
/// use postboard::web::dto::ValidatedJson;
///
/// async fn create_post(
///     ValidatedJson(payload): ValidatedJson<PostRequest>,
/// ) -> Result<Json<MessageResponse>, ApiError> {
///     // payload is already validated
///     // ...
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::unprocessable(format!("Invalid JSON: {}", e.body_text())))?;

        value.validate().map_err(ApiError::from_validation_errors)?;

        Ok(ValidatedJson(value))
    }
}

/// Extracts and validates the `page` query parameter.
///
/// A missing parameter selects page 1; anything below 1 or not an integer
/// is rejected with 422.
#[derive(Debug, Clone, Copy)]
pub struct PageParam(pub Page);

#[async_trait]
impl<S> FromRequestParts<S> for PageParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PageQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::unprocessable(format!("Invalid page: {}", e.body_text())))?;

        let page = match query.page {
            Some(number) => Page::new(number)?,
            None => Page::first(),
        };

        Ok(PageParam(page))
    }
}

/// Path parameters whose parse failures are reported as 422 JSON errors.
///
/// `/api/posts/abc` is rejected here instead of by axum's plain-text 400.
#[derive(Debug, Clone)]
pub struct PathParam<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::unprocessable(format!("Invalid path: {}", e.body_text())))?;

        Ok(PathParam(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::error::ErrorCode;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode};
    use axum::{routing::get, Router};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn extract_page(uri: &str) -> Result<PageParam, ApiError> {
        let request = HttpRequest::builder().uri(uri).body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        PageParam::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_page_defaults_to_first() {
        let PageParam(page) = extract_page("/api/posts").await.unwrap();
        assert_eq!(page.number(), 1);
    }

    #[tokio::test]
    async fn test_page_parsed() {
        let PageParam(page) = extract_page("/api/posts?page=3").await.unwrap();
        assert_eq!(page.number(), 3);
        assert_eq!(page.offset(), 200);
    }

    #[tokio::test]
    async fn test_page_below_one_rejected() {
        for uri in ["/api/posts?page=0", "/api/posts?page=-1"] {
            let err = extract_page(uri).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::UnprocessableEntity);
        }
    }

    #[tokio::test]
    async fn test_page_not_a_number_rejected() {
        let err = extract_page("/api/posts?page=abc").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnprocessableEntity);
    }

    fn item_router() -> Router {
        Router::new().route(
            "/items/:id",
            get(|PathParam(id): PathParam<i64>| async move { id.to_string() }),
        )
    }

    #[tokio::test]
    async fn test_path_id_parsed() {
        let response = item_router()
            .oneshot(HttpRequest::get("/items/42").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"42");
    }

    #[tokio::test]
    async fn test_path_id_not_a_number_rejected() {
        let response = item_router()
            .oneshot(HttpRequest::get("/items/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "UNPROCESSABLE_ENTITY");
        assert!(body["detail"].as_str().unwrap().starts_with("Invalid path"));
    }
}
