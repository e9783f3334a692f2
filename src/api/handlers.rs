//! HTTP request handlers for the savings-group API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::export::{cycle_report_columns, payment_history_columns, to_csv};
use crate::models::PersonalStatsData;
use crate::views::{CycleReportsView, load_cycle_reports, load_personal_stats};

use super::response::ApiErrorResponse;
use super::state::AppState;

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/groups/:group_id/reports", get(reports_handler))
        .route("/groups/:group_id/reports.csv", get(reports_csv_handler))
        .route(
            "/groups/:group_id/members/:user_id/stats",
            get(stats_handler),
        )
        .route(
            "/groups/:group_id/members/:user_id/history.csv",
            get(history_csv_handler),
        )
        .with_state(state)
}

/// Logs a failed request and converts the error into a response.
fn failure(correlation_id: Uuid, error: EngineError) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    error.into()
}

fn csv_response(filename: String, body: String) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
}

/// Handler for GET /groups/:group_id/reports.
async fn reports_handler(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<CycleReportsView>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, group_id = %group_id, "Processing report request");

    let start_time = Instant::now();
    let view = load_cycle_reports(state.store(), &group_id)
        .await
        .map_err(|e| failure(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        group_id = %group_id,
        cycles = view.reports.len(),
        total_collected = %view.totals.total_collected,
        collection_rate = view.totals.collection_rate,
        duration_us = start_time.elapsed().as_micros(),
        "Cycle reports built"
    );
    Ok(Json(view))
}

/// Handler for GET /groups/:group_id/reports.csv.
async fn reports_csv_handler(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, group_id = %group_id, "Processing report export");

    let view = load_cycle_reports(state.store(), &group_id)
        .await
        .map_err(|e| failure(correlation_id, e))?;
    let body = to_csv(&view.reports, &cycle_report_columns())
        .map_err(|e| failure(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        rows = view.reports.len(),
        "Report export completed"
    );
    Ok(csv_response(format!("{}-reports.csv", group_id), body))
}

/// Handler for GET /groups/:group_id/members/:user_id/stats.
async fn stats_handler(
    State(state): State<AppState>,
    Path((group_id, user_id)): Path<(String, String)>,
) -> Result<Json<PersonalStatsData>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        group_id = %group_id,
        user_id = %user_id,
        "Processing personal stats request"
    );

    let start_time = Instant::now();
    let stats = load_personal_stats(state.store(), &group_id, &user_id)
        .await
        .map_err(|e| failure(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        verified_payments = stats.total_verified_payments,
        total_contributed = %stats.total_contributed,
        duration_us = start_time.elapsed().as_micros(),
        "Personal stats built"
    );
    Ok(Json(stats))
}

/// Handler for GET /groups/:group_id/members/:user_id/history.csv.
async fn history_csv_handler(
    State(state): State<AppState>,
    Path((group_id, user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        group_id = %group_id,
        user_id = %user_id,
        "Processing history export"
    );

    let stats = load_personal_stats(state.store(), &group_id, &user_id)
        .await
        .map_err(|e| failure(correlation_id, e))?;
    let body = to_csv(&stats.payment_history, &payment_history_columns())
        .map_err(|e| failure(correlation_id, e))?;

    Ok(csv_response(
        format!("{}-{}-history.csv", group_id, user_id),
        body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::config::DatasetLoader;
    use crate::store::InMemoryStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/demo");
        let dataset = DatasetLoader::load(dir).expect("Failed to load dataset");
        AppState::new(InMemoryStore::new(dataset))
    }

    async fn fetch(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = create_router(create_test_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_reports_returns_200() {
        let (status, body) = fetch("/groups/grp_001/reports").await;
        assert_eq!(status, StatusCode::OK);

        let view: CycleReportsView = serde_json::from_slice(&body).unwrap();
        assert_eq!(view.reports.len(), 4);
        assert_eq!(view.totals.collection_rate, 63);
    }

    #[tokio::test]
    async fn test_unknown_group_returns_404() {
        let (status, body) = fetch("/groups/grp_404/reports").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "GROUP_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_stats_returns_200() {
        let (status, body) = fetch("/groups/grp_001/members/usr_002/stats").await;
        assert_eq!(status, StatusCode::OK);

        let stats: PersonalStatsData = serde_json::from_slice(&body).unwrap();
        assert_eq!(stats.queue_position, 2);
        assert_eq!(stats.total_verified_payments, 3);
    }

    #[tokio::test]
    async fn test_stats_for_non_member_returns_404() {
        let (status, body) = fetch("/groups/grp_001/members/usr_005/stats").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MEMBER_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_reports_csv_has_header_and_rows() {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .uri("/groups/grp_001/reports.csv")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert!(text.starts_with("\"Due Date\""));
    }
}
