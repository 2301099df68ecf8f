//! Withdrawal record associated with a time deposit.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single withdrawal from a time-deposit account.
///
/// Read-only: the gateway serves withdrawal history but never creates or
/// modifies it, and the interest calculator never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withdrawal {
    /// Storage primary key.
    pub id: i32,
    /// Amount withdrawn.
    pub amount: Decimal,
    /// Date of the withdrawal.
    pub date: NaiveDate,
}
