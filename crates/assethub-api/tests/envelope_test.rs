//! Integration tests for the envelope-to-response flow: an in-memory
//! repository stands in for the database, services wrap outcomes into
//! envelopes, and handlers map envelopes to HTTP responses.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::routing::get;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use assethub_api::error::ApiError;
use assethub_api::extractors::PaginationParams;
use assethub_api::{respond, respond_page};
use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::traits::Repository;
use assethub_core::types::pagination::PageRequest;
use assethub_core::types::response::{ApiResponse, PagedResponse};
use assethub_core::types::sorting::SortField;

#[derive(Debug, Clone, Serialize)]
struct Asset {
    id: Uuid,
    name: String,
    acquired_at: DateTime<Utc>,
}

impl Asset {
    fn named(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            acquired_at: Utc::now(),
        }
    }
}

/// In-memory stand-in for the database-backed asset repository.
struct InMemoryAssets {
    rows: Vec<Asset>,
}

#[async_trait]
impl Repository<Asset, Uuid> for InMemoryAssets {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Asset>> {
        Ok(self.rows.iter().find(|a| a.id == *id).cloned())
    }

    async fn list(&self, page: &PageRequest, _sort: Option<&SortField>) -> AppResult<Vec<Asset>> {
        Ok(self
            .rows
            .iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.len() as u64)
    }

    async fn insert(&self, entity: &Asset) -> AppResult<Asset> {
        Ok(entity.clone())
    }

    async fn update(&self, entity: &Asset) -> AppResult<Asset> {
        Ok(entity.clone())
    }

    async fn delete(&self, _id: &Uuid) -> AppResult<bool> {
        Ok(false)
    }
}

/// GET /assets
async fn list_assets(
    State(repo): State<Arc<InMemoryAssets>>,
    Query(params): Query<PaginationParams>,
) -> Response {
    let page = params.page_request();
    let sort = params.sort_field();
    let outcome = repo.fetch_page(&page, sort.as_ref()).await;
    respond_page(PagedResponse::from_rows(outcome, &page))
}

/// GET /assets/{id}
async fn get_asset(
    State(repo): State<Arc<InMemoryAssets>>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    match repo.find_by_id(&id).await? {
        Some(asset) => Ok(respond(ApiResponse::ok(asset))),
        None => Err(AppError::not_found("Asset not found").into()),
    }
}

/// GET /reports/weekly — a service whose collaborator always fails.
async fn weekly_report() -> Response {
    let outcome: AppResult<Vec<Asset>> = Err(AppError::database("DB timeout"));
    respond(ApiResponse::from(outcome))
}

fn app(rows: Vec<Asset>) -> Router {
    Router::new()
        .route("/assets", get(list_assets))
        .route("/assets/{id}", get(get_asset))
        .route("/reports/weekly", get(weekly_report))
        .with_state(Arc::new(InMemoryAssets { rows }))
}

async fn send(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_list_success_envelope() {
    let rows = vec![Asset::named("laptop"), Asset::named("desk"), Asset::named("van")];
    let (status, body) = send(app(rows), "/assets?page=1&pageSize=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(body["message"], "OK");
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["totalCount"], 3);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["hasNext"], Value::Bool(false));
}

#[tokio::test]
async fn test_list_last_page_navigation() {
    let rows = (0..25).map(|i| Asset::named(&format!("asset-{i}"))).collect();
    let (status, body) = send(app(rows), "/assets?page=3&pageSize=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["hasPrevious"], Value::Bool(true));
    assert_eq!(body["hasNext"], Value::Bool(false));
}

#[tokio::test]
async fn test_oversized_page_size_is_clamped() {
    let (status, body) = send(app(Vec::new()), "/assets?pageSize=5000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pageSize"], 100);
    assert_eq!(body["totalPages"], 0);
}

#[tokio::test]
async fn test_failed_service_maps_to_400() {
    let (status, body) = send(app(Vec::new()), "/reports/weekly").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], Value::Bool(false));
    assert_eq!(body["message"], "DB timeout");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_missing_asset_maps_to_404_outside_envelope() {
    let uri = format!("/assets/{}", Uuid::new_v4());
    let (status, body) = send(app(Vec::new()), &uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "Asset not found");
}

#[tokio::test]
async fn test_found_asset_returns_full_envelope() {
    let asset = Asset::named("forklift");
    let uri = format!("/assets/{}", asset.id);
    let (status, body) = send(app(vec![asset.clone()]), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(body["data"]["name"], "forklift");
}

#[tokio::test]
async fn test_mapping_is_idempotent() {
    let envelope: ApiResponse<&str> = ApiResponse::fail("DB timeout");

    let first = respond(envelope.clone());
    let second = respond(envelope);

    assert_eq!(first.status(), second.status());
    let first_bytes = axum::body::to_bytes(first.into_body(), usize::MAX)
        .await
        .unwrap();
    let second_bytes = axum::body::to_bytes(second.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(first_bytes, second_bytes);
}
