//! Front-end page routes.
//!
//! `GET /` re-reads `index.html` on every request so edits to the page show
//! up without a restart. `GET /favicon.ico` is served by `ServeFile`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};
use tower_http::services::ServeFile;

use crate::error::AppError;

pub const INDEX_FILE: &str = "index.html";
pub const FAVICON_FILE: &str = "favicon.ico";

/// Shared state for the page routes: the static asset directory.
pub type PagesState = Arc<PathBuf>;

pub fn create_pages_router(static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index))
        .route_service("/favicon.ico", ServeFile::new(static_dir.join(FAVICON_FILE)))
        .with_state(Arc::new(static_dir.to_path_buf()))
}

/// `GET /`
pub async fn index(State(static_dir): State<PagesState>) -> Result<Html<String>, AppError> {
    let page = tokio::fs::read_to_string(static_dir.join(INDEX_FILE)).await?;
    Ok(Html(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn index_serves_page_as_html() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(INDEX_FILE), "<h1>Papers</h1>").unwrap();

        let response = create_pages_router(dir.path())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"<h1>Papers</h1>");
    }

    #[tokio::test]
    async fn index_is_read_per_request() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_pages_router(dir.path());
        std::fs::write(dir.path().join(INDEX_FILE), "v1").unwrap();

        let first = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(&to_bytes(first.into_body(), usize::MAX).await.unwrap()[..], b"v1");

        std::fs::write(dir.path().join(INDEX_FILE), "v2").unwrap();
        let second = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(&to_bytes(second.into_body(), usize::MAX).await.unwrap()[..], b"v2");
    }

    #[tokio::test]
    async fn missing_index_is_server_error() {
        let dir = tempfile::tempdir().unwrap();

        let response = create_pages_router(dir.path())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(!body.contains(INDEX_FILE), "path leaked in body: {}", body);
    }

    #[tokio::test]
    async fn favicon_is_served_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let icon = [0u8, 0, 1, 0, 1, 0, 16, 16];
        std::fs::write(dir.path().join(FAVICON_FILE), icon).unwrap();

        let response = create_pages_router(dir.path())
            .oneshot(
                Request::builder()
                    .uri("/favicon.ico")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], &icon[..]);
    }
}
