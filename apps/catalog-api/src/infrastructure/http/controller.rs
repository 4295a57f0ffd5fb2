//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the record use cases.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::ManageRecordsUseCase;
use crate::domain::catalog::{Category, Record, RecordRepository, Vendor};
use crate::domain::shared::RecordId;

use super::error::ApiError;
use super::request::{OneOrMany, parse_optional_body};
use super::response::HealthResponse;

/// Base path of the vendor collection.
pub const VENDORS_BASE_URL: &str = "/api/v1/vendors";

/// Base path of the category collection.
pub const CATEGORIES_BASE_URL: &str = "/api/v1/categories";

/// Application state shared across handlers.
pub struct AppState<V, C>
where
    V: RecordRepository<Vendor>,
    C: RecordRepository<Category>,
{
    /// Use case for the vendor collection.
    pub vendors: Arc<ManageRecordsUseCase<Vendor, V>>,
    /// Use case for the category collection.
    pub categories: Arc<ManageRecordsUseCase<Category, C>>,
    /// Application version.
    pub version: String,
}

impl<V, C> Clone for AppState<V, C>
where
    V: RecordRepository<Vendor>,
    C: RecordRepository<Category>,
{
    fn clone(&self) -> Self {
        Self {
            vendors: Arc::clone(&self.vendors),
            categories: Arc::clone(&self.categories),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<V, C>(state: AppState<V, C>) -> Router
where
    V: RecordRepository<Vendor> + 'static,
    C: RecordRepository<Category> + 'static,
{
    let vendors = record_routes(VENDORS_BASE_URL, Arc::clone(&state.vendors));
    let categories = record_routes(CATEGORIES_BASE_URL, Arc::clone(&state.categories));

    Router::new()
        .route("/health", get(health_check))
        .with_state(state.version)
        .merge(vendors)
        .merge(categories)
        .layer(TraceLayer::new_for_http())
}

/// Routes for one collection mounted at `base`.
fn record_routes<T, R>(base: &str, use_case: Arc<ManageRecordsUseCase<T, R>>) -> Router
where
    T: Record,
    R: RecordRepository<T> + 'static,
{
    let item = format!("{base}/{{id}}");

    Router::new()
        .route(base, get(list_records::<T, R>).post(create_records::<T, R>))
        .route(
            &item,
            get(get_record::<T, R>)
                .put(replace_record::<T, R>)
                .patch(patch_record::<T, R>),
        )
        .with_state(use_case)
}

/// Health check endpoint.
async fn health_check(State(version): State<String>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version,
    })
}

/// `GET /`: every record of the collection.
async fn list_records<T, R>(
    State(use_case): State<Arc<ManageRecordsUseCase<T, R>>>,
) -> Result<Json<Vec<T>>, ApiError>
where
    T: Record,
    R: RecordRepository<T>,
{
    Ok(Json(use_case.list().await?))
}

/// `GET /{id}`: the record, or `200` with an empty body when absent.
async fn get_record<T, R>(
    State(use_case): State<Arc<ManageRecordsUseCase<T, R>>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError>
where
    T: Record,
    R: RecordRepository<T>,
{
    let record = use_case.get(&RecordId::new(id)).await?;
    Ok(match record {
        Some(record) => Json(record).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

/// `POST /`: create one record or an array of records.
async fn create_records<T, R>(
    State(use_case): State<Arc<ManageRecordsUseCase<T, R>>>,
    body: Bytes,
) -> Result<StatusCode, ApiError>
where
    T: Record,
    R: RecordRepository<T>,
{
    let candidates = parse_optional_body::<OneOrMany<T>>(&body)?
        .map(OneOrMany::into_vec)
        .unwrap_or_default();

    use_case.create(candidates).await?;
    Ok(StatusCode::CREATED)
}

/// `PUT /{id}`: replace the record stored under the path id.
async fn replace_record<T, R>(
    State(use_case): State<Arc<ManageRecordsUseCase<T, R>>>,
    Path(id): Path<String>,
    Json(record): Json<T>,
) -> Result<Json<T>, ApiError>
where
    T: Record,
    R: RecordRepository<T>,
{
    Ok(Json(use_case.replace(RecordId::new(id), record).await?))
}

/// `PATCH /{id}`: merge a partial record into the stored one.
async fn patch_record<T, R>(
    State(use_case): State<Arc<ManageRecordsUseCase<T, R>>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<T>, ApiError>
where
    T: Record,
    R: RecordRepository<T>,
{
    let patch = parse_optional_body::<T>(&body)?;
    Ok(Json(use_case.patch(&RecordId::new(id), patch).await?))
}
