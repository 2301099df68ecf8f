//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Deposit endpoints are mounted under `/api/v1`; system endpoints live
//! at the root.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes())
}

/// OpenAPI document for all REST endpoints.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Time Deposit API",
        description = "REST API for managing time deposits and calculating interest"
    ),
    paths(
        handlers::deposits::update_all_balances,
        handlers::deposits::list_time_deposits,
        handlers::system::health_handler,
        handlers::system::plan_types_handler,
    ),
    components(schemas(
        dto::TimeDepositResponse,
        dto::WithdrawalResponse,
        dto::UpdateBalancesResponse,
        handlers::system::HealthResponse,
        handlers::system::PlanTypeInfo,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "TimeDeposits", description = "Balance accrual and listing"),
        (name = "System", description = "Health and configuration"),
    )
)]
pub struct ApiDoc;
