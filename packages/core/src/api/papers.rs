//! Paper metadata endpoints.
//!
//! Routes:
//! - `GET /country-data`               — entry counts per (country, year)
//! - `GET /papers?country=..&year=..`  — entries for one (country, year)

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::repository::{CountryCount, EntryRepository, Paper};

/// Read access to the entries table, as seen by the handlers.
#[async_trait]
pub trait EntryStore {
    async fn country_counts(&self) -> Result<Vec<CountryCount>, AppError>;

    async fn papers(&self, country: &str, year: i64) -> Result<Vec<Paper>, AppError>;
}

#[async_trait]
impl EntryStore for EntryRepository {
    async fn country_counts(&self) -> Result<Vec<CountryCount>, AppError> {
        Ok(EntryRepository::country_counts(self).await?)
    }

    async fn papers(&self, country: &str, year: i64) -> Result<Vec<Paper>, AppError> {
        Ok(self.papers_by_country_and_year(country, year).await?)
    }
}

/// Shared state for the paper routes.
pub type PapersState = Arc<dyn EntryStore + Send + Sync>;

#[derive(Debug, Deserialize)]
pub struct PapersQuery {
    pub country: String,
    pub year: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountryDataResponse {
    pub data: Vec<CountryCount>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PapersResponse {
    pub papers: Vec<Paper>,
}

pub fn create_papers_router(store: PapersState) -> Router {
    Router::new()
        .route("/country-data", get(country_data))
        .route("/papers", get(fetch_papers))
        .with_state(store)
}

/// `GET /country-data`
pub async fn country_data(
    State(store): State<PapersState>,
) -> Result<Json<CountryDataResponse>, AppError> {
    let data = store.country_counts().await?;
    Ok(Json(CountryDataResponse { data }))
}

/// `GET /papers` — both query parameters are required; axum's `Query`
/// rejection answers 400 when either is missing or `year` is not an integer.
pub async fn fetch_papers(
    State(store): State<PapersState>,
    Query(params): Query<PapersQuery>,
) -> Result<Json<PapersResponse>, AppError> {
    let papers = store.papers(&params.country, params.year).await?;
    Ok(Json(PapersResponse { papers }))
}
