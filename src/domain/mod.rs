//! Domain layer: account snapshots, withdrawals, and the interest calculator.

pub mod calculator;
pub mod deposit;
pub mod repository;
pub mod withdrawal;

pub use calculator::InterestCalculator;
pub use deposit::{DepositWithWithdrawals, TimeDeposit};
pub use repository::DepositRepository;
pub use withdrawal::Withdrawal;
