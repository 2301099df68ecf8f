//! System endpoints: health check and plan-type catalog.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::domain::deposit::{PLAN_BASIC, PLAN_PREMIUM, PLAN_STUDENT};

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status string.
    status: String,
    /// Current server timestamp (RFC 3339).
    timestamp: String,
    /// Crate version.
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Supported plan type info.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlanTypeInfo {
    /// Plan type string as stored on accounts.
    plan_type: &'static str,
    /// Annual interest rate in basis points.
    annual_rate_bps: u32,
    /// First day (exclusive window start) on which interest accrues.
    earns_after_day: i32,
    /// Last day on which interest accrues, if the plan has a cutoff.
    earns_until_day: Option<i32>,
    /// Human-readable description.
    description: &'static str,
}

/// `GET /config/plan-types` — List supported plan types.
#[utoipa::path(
    get,
    path = "/config/plan-types",
    tag = "System",
    summary = "List supported plan types",
    description = "Returns the rate and eligibility window for every plan type that earns interest. Any other plan string is accepted but earns nothing.",
    responses(
        (status = 200, description = "Plan type catalog", body = Vec<PlanTypeInfo>),
    )
)]
pub async fn plan_types_handler() -> impl IntoResponse {
    let types = vec![
        PlanTypeInfo {
            plan_type: PLAN_BASIC,
            annual_rate_bps: 100,
            earns_after_day: 30,
            earns_until_day: None,
            description: "1% annual, accrues monthly once the account is older than 30 days",
        },
        PlanTypeInfo {
            plan_type: PLAN_STUDENT,
            annual_rate_bps: 300,
            earns_after_day: 30,
            earns_until_day: Some(365),
            description: "3% annual, accrues monthly during the first year only",
        },
        PlanTypeInfo {
            plan_type: PLAN_PREMIUM,
            annual_rate_bps: 500,
            earns_after_day: 45,
            earns_until_day: None,
            description: "5% annual, accrues monthly once the account is older than 45 days",
        },
    ];
    (StatusCode::OK, Json(types))
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/plan-types", get(plan_types_handler))
}
