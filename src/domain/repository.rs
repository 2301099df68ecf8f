//! Storage boundary for time deposits.
//!
//! The service layer depends on this trait rather than on a concrete
//! database, which keeps the calculator's batch semantics testable with an
//! in-memory double. The PostgreSQL implementation lives in
//! [`crate::persistence::postgres`].

use async_trait::async_trait;

use super::deposit::{DepositWithWithdrawals, TimeDeposit};
use crate::error::GatewayError;

/// Async repository over the `timeDeposits` and `withdrawals` tables.
#[async_trait]
pub trait DepositRepository: std::fmt::Debug + Send + Sync {
    /// Loads every deposit, primary-key ascending.
    ///
    /// The order is load-bearing: the interest calculator's accumulator
    /// makes batch output order-dependent, so implementations must return
    /// rows in their natural storage order.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on storage failure.
    async fn load_all(&self) -> Result<Vec<TimeDeposit>, GatewayError>;

    /// Loads every deposit in the same order as [`Self::load_all`], each
    /// joined with its withdrawals (oldest row first).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on storage failure.
    async fn load_all_with_withdrawals(
        &self,
    ) -> Result<Vec<DepositWithWithdrawals>, GatewayError>;

    /// Persists the `balance` column for every deposit in the batch, in
    /// one transaction. All other columns are assumed unchanged by the
    /// calculator and are not written.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on storage failure.
    async fn save_balances(&self, deposits: &[TimeDeposit]) -> Result<(), GatewayError>;

    /// Inserts demo deposits and withdrawals when storage is empty.
    /// Idempotent: does nothing if any deposit already exists.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on storage failure.
    async fn seed_sample_data(&self) -> Result<(), GatewayError>;
}
