//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::DepositService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Deposit service for all business logic.
    pub deposit_service: Arc<DepositService>,
}
