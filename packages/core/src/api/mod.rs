pub mod health;
pub mod pages;
pub mod papers;

use std::path::Path;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::error::AppError;
use papers::PapersState;

/// CORS for the listed origins: any method, any header, credentials allowed.
///
/// Methods and headers are mirrored from the preflight request because
/// tower-http refuses `*` together with credentials.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, AppError> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| AppError::Config(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Assemble the full application router.
pub fn build_router(store: PapersState, static_dir: &Path, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .merge(papers::create_papers_router(store))
        .merge(pages::create_pages_router(static_dir))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
