//! Time-deposit account snapshot.
//!
//! [`TimeDeposit`] is an in-memory snapshot of one account's persisted row,
//! materialized immediately before a calculator run and discarded once the
//! updated balance has been written back.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::withdrawal::Withdrawal;

/// Plan type string for the basic tier (1% annual).
pub const PLAN_BASIC: &str = "basic";
/// Plan type string for the student tier (3% annual, first year only).
pub const PLAN_STUDENT: &str = "student";
/// Plan type string for the premium tier (5% annual, after day 45).
pub const PLAN_PREMIUM: &str = "premium";

/// A point-in-time snapshot of one time-deposit account.
///
/// `plan_type` stays a free string rather than an enum: unknown values are
/// valid input that simply earns no interest, and they must round-trip to
/// storage unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeDeposit {
    /// Storage primary key.
    pub id: i32,
    /// Account tier (`"basic"`, `"student"`, `"premium"`, or anything else).
    pub plan_type: String,
    /// Current balance. The only field the calculator ever writes.
    pub balance: Decimal,
    /// Elapsed days since the account was opened, supplied by the caller.
    pub days: i32,
}

impl TimeDeposit {
    /// Creates a new snapshot.
    #[must_use]
    pub fn new(id: i32, plan_type: String, balance: Decimal, days: i32) -> Self {
        Self {
            id,
            plan_type,
            balance,
            days,
        }
    }
}

/// A deposit joined with its withdrawal history, as served by the
/// listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositWithWithdrawals {
    /// The account snapshot.
    pub deposit: TimeDeposit,
    /// Withdrawals recorded against the account, oldest row first.
    pub withdrawals: Vec<Withdrawal>,
}
