//! Time-deposit handlers: batch balance update and listing.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};

use crate::api::dto::{TimeDepositResponse, UpdateBalancesResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `PUT /time-deposits/updateBalances` — Apply interest to all deposits.
///
/// # Errors
///
/// Returns [`GatewayError`] if loading or persisting the batch fails.
#[utoipa::path(
    put,
    path = "/api/v1/time-deposits/updateBalances",
    tag = "TimeDeposits",
    summary = "Update all time deposit balances",
    description = "Loads every deposit in storage order, applies one period of interest accrual to the whole batch, and persists the new balances.",
    responses(
        (status = 200, description = "Balances updated", body = UpdateBalancesResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn update_all_balances(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let outcome = state.deposit_service.update_all_balances().await?;

    Ok(Json(UpdateBalancesResponse {
        message: outcome.message,
        updated_count: outcome.updated_count,
        status: "success".to_string(),
    }))
}

/// `GET /time-deposits` — List all deposits with withdrawal history.
///
/// # Errors
///
/// Returns [`GatewayError`] if loading fails.
#[utoipa::path(
    get,
    path = "/api/v1/time-deposits",
    tag = "TimeDeposits",
    summary = "Get all time deposits",
    description = "Returns every time deposit with its withdrawal history, ordered by id.",
    responses(
        (status = 200, description = "All time deposits", body = Vec<TimeDepositResponse>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_time_deposits(
    State(state): State<AppState>,
) -> Result<Json<Vec<TimeDepositResponse>>, GatewayError> {
    let deposits = state.deposit_service.list_deposits().await?;
    Ok(Json(deposits.into_iter().map(Into::into).collect()))
}

/// Time-deposit routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/time-deposits", get(list_time_deposits))
        .route("/time-deposits/updateBalances", put(update_all_balances))
}
