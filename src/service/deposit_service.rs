//! Deposit service: loads snapshot batches, runs the calculator, persists
//! the results.

use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::domain::{DepositRepository, DepositWithWithdrawals, InterestCalculator};
use crate::error::GatewayError;

/// Result of one balance-update run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Number of deposits whose balance actually changed.
    pub updated_count: u64,
    /// Human-readable summary for the API response.
    pub message: String,
}

/// Orchestration layer for deposit operations.
///
/// Every update run follows the pattern: take the update lock → load the
/// full batch in storage order → run the calculator → persist balances.
/// The lock serializes concurrent update requests so two batches are never
/// computed from the same stale snapshot set; the calculator itself is
/// order-dependent and assumes an exclusively-owned batch.
#[derive(Debug)]
pub struct DepositService {
    repository: Arc<dyn DepositRepository>,
    calculator: InterestCalculator,
    update_lock: Mutex<()>,
}

impl DepositService {
    /// Creates a new `DepositService`.
    #[must_use]
    pub fn new(repository: Arc<dyn DepositRepository>) -> Self {
        Self {
            repository,
            calculator: InterestCalculator::new(),
            update_lock: Mutex::new(()),
        }
    }

    /// Applies one period of interest to every stored deposit and persists
    /// the new balances.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if loading or saving fails. The
    /// calculation itself never fails.
    pub async fn update_all_balances(&self) -> Result<UpdateOutcome, GatewayError> {
        let _guard = self.update_lock.lock().await;

        let mut deposits = self.repository.load_all().await?;
        if deposits.is_empty() {
            tracing::warn!("no time deposits found to update");
            return Ok(UpdateOutcome {
                updated_count: 0,
                message: "No time deposits found to update".to_string(),
            });
        }

        let before: Vec<Decimal> = deposits.iter().map(|d| d.balance).collect();
        tracing::info!(count = deposits.len(), "running interest accrual batch");

        self.calculator.update_balances(&mut deposits);
        self.repository.save_balances(&deposits).await?;

        let updated_count = deposits
            .iter()
            .zip(&before)
            .filter(|(deposit, original)| deposit.balance != **original)
            .count() as u64;

        tracing::info!(updated_count, "balance update complete");
        Ok(UpdateOutcome {
            updated_count,
            message: format!("Successfully updated {updated_count} time deposit balances"),
        })
    }

    /// Returns every deposit with its withdrawal history, in storage order.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if loading fails.
    pub async fn list_deposits(&self) -> Result<Vec<DepositWithWithdrawals>, GatewayError> {
        self.repository.load_all_with_withdrawals().await
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use tokio::sync::RwLock;

    use super::*;
    use crate::domain::{TimeDeposit, Withdrawal};

    #[derive(Debug, Default)]
    struct InMemoryRepository {
        deposits: RwLock<Vec<TimeDeposit>>,
        withdrawals: HashMap<i32, Vec<Withdrawal>>,
    }

    #[async_trait]
    impl DepositRepository for InMemoryRepository {
        async fn load_all(&self) -> Result<Vec<TimeDeposit>, GatewayError> {
            Ok(self.deposits.read().await.clone())
        }

        async fn load_all_with_withdrawals(
            &self,
        ) -> Result<Vec<DepositWithWithdrawals>, GatewayError> {
            let deposits = self.deposits.read().await.clone();
            Ok(deposits
                .into_iter()
                .map(|deposit| DepositWithWithdrawals {
                    withdrawals: self.withdrawals.get(&deposit.id).cloned().unwrap_or_default(),
                    deposit,
                })
                .collect())
        }

        async fn save_balances(&self, updated: &[TimeDeposit]) -> Result<(), GatewayError> {
            let mut deposits = self.deposits.write().await;
            for saved in updated {
                for stored in deposits.iter_mut() {
                    if stored.id == saved.id {
                        stored.balance = saved.balance;
                    }
                }
            }
            Ok(())
        }

        async fn seed_sample_data(&self) -> Result<(), GatewayError> {
            Ok(())
        }
    }

    fn dec(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    fn deposit(id: i32, plan: &str, days: i32, balance_cents: i64) -> TimeDeposit {
        TimeDeposit::new(id, plan.to_string(), dec(balance_cents), days)
    }

    fn service_with(deposits: Vec<TimeDeposit>) -> (DepositService, Arc<InMemoryRepository>) {
        let repository = Arc::new(InMemoryRepository {
            deposits: RwLock::new(deposits),
            withdrawals: HashMap::new(),
        });
        let service = DepositService::new(Arc::<InMemoryRepository>::clone(&repository));
        (service, repository)
    }

    #[tokio::test]
    async fn update_persists_accrued_balances() {
        let (service, repository) = service_with(vec![deposit(1, "basic", 45, 1_000_000)]);

        let outcome = service.update_all_balances().await;
        let Ok(outcome) = outcome else {
            panic!("update failed");
        };
        assert_eq!(outcome.updated_count, 1);

        let stored = repository.deposits.read().await;
        assert_eq!(stored[0].balance, dec(1_000_833));
    }

    #[tokio::test]
    async fn update_counts_only_changed_balances() {
        let (service, _) = service_with(vec![
            deposit(1, "basic", 45, 1_000_000),
            deposit(2, "basic", 30, 1_000_000), // too young, unchanged
        ]);

        let outcome = service.update_all_balances().await;
        let Ok(outcome) = outcome else {
            panic!("update failed");
        };
        assert_eq!(outcome.updated_count, 1);
    }

    #[tokio::test]
    async fn later_deposits_absorb_earlier_contributions() {
        let (service, repository) = service_with(vec![
            deposit(1, "basic", 45, 1_000_000),
            deposit(2, "student", 100, 2_000_000),
        ]);

        let result = service.update_all_balances().await;
        assert!(result.is_ok());

        let stored = repository.deposits.read().await;
        assert_eq!(stored[0].balance, dec(1_000_833));
        assert_eq!(stored[1].balance, dec(2_005_833));
    }

    #[tokio::test]
    async fn empty_storage_is_a_successful_noop() {
        let (service, _) = service_with(Vec::new());

        let outcome = service.update_all_balances().await;
        let Ok(outcome) = outcome else {
            panic!("update failed");
        };
        assert_eq!(outcome.updated_count, 0);
        assert_eq!(outcome.message, "No time deposits found to update");
    }

    #[tokio::test]
    async fn list_includes_withdrawal_history() {
        let Some(date) = NaiveDate::from_ymd_opt(2024, 3, 15) else {
            panic!("valid date");
        };
        let repository = Arc::new(InMemoryRepository {
            deposits: RwLock::new(vec![deposit(1, "premium", 50, 2_000_000)]),
            withdrawals: HashMap::from([(
                1,
                vec![Withdrawal {
                    id: 10,
                    amount: dec(25_000),
                    date,
                }],
            )]),
        });
        let service = DepositService::new(repository);

        let listed = service.list_deposits().await;
        let Ok(listed) = listed else {
            panic!("list failed");
        };
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].withdrawals.len(), 1);
        assert_eq!(listed[0].withdrawals[0].amount, dec(25_000));
    }
}
