//! Batch interest accrual over time-deposit snapshots.
//!
//! This is the one piece of real business logic in the gateway. Everything
//! else exists to feed it a batch and persist what comes back.

use rust_decimal::Decimal;

use super::deposit::{PLAN_BASIC, PLAN_PREMIUM, PLAN_STUDENT, TimeDeposit};

/// Applies one period of interest to a batch of deposits.
///
/// A single accumulator is shared across the whole batch: every deposit's
/// balance absorbs the contributions of all deposits processed before it,
/// and the last deposit in the batch receives the full cross-account sum.
/// Downstream balance reconciliation depends on this exact arithmetic, so
/// the accumulator must NOT be reset per deposit. Batch order is therefore
/// significant; callers load deposits in primary-key order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterestCalculator;

impl InterestCalculator {
    /// Creates a new calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Updates every balance in the batch, in the given order.
    ///
    /// Total over its input: an empty batch is a no-op, unknown plan types
    /// earn nothing, and out-of-range values flow through the same
    /// arithmetic. Only `balance` is ever written; balances are rounded to
    /// two decimal places (banker's rounding).
    pub fn update_balances(&self, deposits: &mut [TimeDeposit]) {
        let mut interest = Decimal::ZERO;
        for deposit in deposits.iter_mut() {
            interest += Self::monthly_contribution(deposit);
            deposit.balance = (deposit.balance + interest).round_dp(2);
        }
    }

    /// One month of interest for a single deposit, or zero when the
    /// deposit is outside its plan's eligibility window.
    ///
    /// Plan matching is exact: case variants and unknown strings earn
    /// nothing.
    fn monthly_contribution(deposit: &TimeDeposit) -> Decimal {
        if deposit.days <= 30 {
            return Decimal::ZERO;
        }
        let annual_rate = match deposit.plan_type.as_str() {
            PLAN_STUDENT if deposit.days < 366 => Decimal::new(3, 2),
            PLAN_PREMIUM if deposit.days > 45 => Decimal::new(5, 2),
            PLAN_BASIC => Decimal::new(1, 2),
            _ => return Decimal::ZERO,
        };
        deposit.balance * annual_rate / Decimal::new(12, 0)
    }
}
