//! PostgreSQL implementation of the deposit repository.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::{DepositRepository, DepositWithWithdrawals, TimeDeposit, Withdrawal};
use crate::error::GatewayError;

/// PostgreSQL-backed repository using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresDepositRepository {
    pool: PgPool,
}

impl PostgresDepositRepository {
    /// Creates a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Loads all withdrawals grouped by deposit ID, ordered by row ID
    /// within each group.
    async fn load_withdrawals_by_deposit(
        &self,
    ) -> Result<HashMap<i32, Vec<Withdrawal>>, GatewayError> {
        let rows = sqlx::query_as::<_, (i32, i32, Decimal, NaiveDate)>(
            "SELECT id, \"timeDepositId\", amount, date FROM withdrawals \
             ORDER BY \"timeDepositId\" ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        let mut grouped: HashMap<i32, Vec<Withdrawal>> = HashMap::new();
        for (id, deposit_id, amount, date) in rows {
            grouped
                .entry(deposit_id)
                .or_default()
                .push(Withdrawal { id, amount, date });
        }
        Ok(grouped)
    }
}

#[async_trait]
impl DepositRepository for PostgresDepositRepository {
    async fn load_all(&self) -> Result<Vec<TimeDeposit>, GatewayError> {
        let rows = sqlx::query_as::<_, (i32, String, i32, Decimal)>(
            "SELECT id, \"planType\", days, balance FROM \"timeDeposits\" ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, plan_type, days, balance)| TimeDeposit::new(id, plan_type, balance, days))
            .collect())
    }

    async fn load_all_with_withdrawals(
        &self,
    ) -> Result<Vec<DepositWithWithdrawals>, GatewayError> {
        let deposits = self.load_all().await?;
        let mut withdrawals = self.load_withdrawals_by_deposit().await?;

        Ok(deposits
            .into_iter()
            .map(|deposit| DepositWithWithdrawals {
                withdrawals: withdrawals.remove(&deposit.id).unwrap_or_default(),
                deposit,
            })
            .collect())
    }

    async fn save_balances(&self, deposits: &[TimeDeposit]) -> Result<(), GatewayError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        for deposit in deposits {
            sqlx::query("UPDATE \"timeDeposits\" SET balance = $1 WHERE id = $2")
                .bind(deposit.balance)
                .bind(deposit.id)
                .execute(&mut *tx)
                .await
                .map_err(|e| GatewayError::Persistence(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        Ok(())
    }

    async fn seed_sample_data(&self) -> Result<(), GatewayError> {
        let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM \"timeDeposits\"")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        if existing > 0 {
            tracing::debug!(existing, "deposits already present, skipping seed");
            return Ok(());
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        let samples: [(&str, i32, Decimal); 3] = [
            ("basic", 45, Decimal::new(1_000_000, 2)),
            ("student", 100, Decimal::new(500_000, 2)),
            ("premium", 50, Decimal::new(2_000_000, 2)),
        ];
        let mut deposit_ids = Vec::with_capacity(samples.len());
        for (plan_type, days, balance) in samples {
            let id = sqlx::query_scalar::<_, i32>(
                "INSERT INTO \"timeDeposits\" (\"planType\", days, balance) \
                 VALUES ($1, $2, $3) RETURNING id",
            )
            .bind(plan_type)
            .bind(days)
            .bind(balance)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| GatewayError::Persistence(e.to_string()))?;
            deposit_ids.push(id);
        }

        if let Some(first_id) = deposit_ids.first() {
            sqlx::query(
                "INSERT INTO withdrawals (\"timeDepositId\", amount, date) \
                 VALUES ($1, $2, $3)",
            )
            .bind(first_id)
            .bind(Decimal::new(25_000, 2))
            .bind(NaiveDate::from_ymd_opt(2024, 3, 15))
            .execute(&mut *tx)
            .await
            .map_err(|e| GatewayError::Persistence(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        tracing::info!(count = deposit_ids.len(), "seeded sample deposits");
        Ok(())
    }
}
