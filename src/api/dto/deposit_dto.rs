//! Deposit-related DTOs for the listing and update endpoints.
//!
//! Wire field names are part of the public contract consumed by existing
//! clients: `planType` and `updatedCount` stay camelCase even though the
//! Rust fields are snake_case.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{DepositWithWithdrawals, Withdrawal};

/// One withdrawal in a deposit's history.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WithdrawalResponse {
    /// Withdrawal identifier.
    pub id: i32,
    /// Amount withdrawn.
    pub amount: Decimal,
    /// Date of the withdrawal.
    pub date: NaiveDate,
}

/// One time deposit with its withdrawal history, for `GET /time-deposits`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TimeDepositResponse {
    /// Deposit identifier.
    pub id: i32,
    /// Account tier string.
    #[serde(rename = "planType")]
    pub plan_type: String,
    /// Current balance.
    pub balance: Decimal,
    /// Elapsed days since account opening.
    pub days: i32,
    /// Withdrawal history, oldest row first.
    pub withdrawals: Vec<WithdrawalResponse>,
}

/// Response body for `PUT /time-deposits/updateBalances`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UpdateBalancesResponse {
    /// Human-readable summary.
    pub message: String,
    /// Number of deposits whose balance changed.
    #[serde(rename = "updatedCount")]
    pub updated_count: u64,
    /// `"success"` on completion; failures surface as error responses.
    pub status: String,
}

impl From<Withdrawal> for WithdrawalResponse {
    fn from(withdrawal: Withdrawal) -> Self {
        Self {
            id: withdrawal.id,
            amount: withdrawal.amount,
            date: withdrawal.date,
        }
    }
}

impl From<DepositWithWithdrawals> for TimeDepositResponse {
    fn from(entry: DepositWithWithdrawals) -> Self {
        Self {
            id: entry.deposit.id,
            plan_type: entry.deposit.plan_type,
            balance: entry.deposit.balance,
            days: entry.deposit.days,
            withdrawals: entry.withdrawals.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::TimeDeposit;

    #[test]
    fn deposit_serializes_with_camel_case_contract_fields() {
        let response = TimeDepositResponse {
            id: 1,
            plan_type: "basic".to_string(),
            balance: Decimal::new(1_000_833, 2),
            days: 45,
            withdrawals: Vec::new(),
        };
        let Ok(json) = serde_json::to_value(&response) else {
            panic!("serialization failed");
        };
        assert!(json.get("planType").is_some());
        assert!(json.get("plan_type").is_none());
        assert_eq!(
            json.get("balance").and_then(|v| v.as_str()),
            Some("10008.33")
        );
    }

    #[test]
    fn update_response_uses_camel_case_count() {
        let response = UpdateBalancesResponse {
            message: "Successfully updated 3 time deposit balances".to_string(),
            updated_count: 3,
            status: "success".to_string(),
        };
        let Ok(json) = serde_json::to_value(&response) else {
            panic!("serialization failed");
        };
        assert_eq!(json.get("updatedCount").and_then(|v| v.as_u64()), Some(3));
    }

    #[test]
    fn conversion_preserves_all_fields() {
        let Some(date) = NaiveDate::from_ymd_opt(2024, 3, 15) else {
            panic!("valid date");
        };
        let entry = DepositWithWithdrawals {
            deposit: TimeDeposit::new(2, "premium".to_string(), Decimal::new(2_000_000, 2), 50),
            withdrawals: vec![Withdrawal {
                id: 10,
                amount: Decimal::new(25_000, 2),
                date,
            }],
        };
        let response = TimeDepositResponse::from(entry);
        assert_eq!(response.id, 2);
        assert_eq!(response.plan_type, "premium");
        assert_eq!(response.days, 50);
        assert_eq!(response.withdrawals.len(), 1);
    }
}
