//! Service layer: orchestrates batch accrual and listing.

pub mod deposit_service;

pub use deposit_service::{DepositService, UpdateOutcome};
