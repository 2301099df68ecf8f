//! Persistence layer: PostgreSQL storage for deposits and withdrawals.
//!
//! The schema keeps the camelCase identifiers (`"timeDeposits"`,
//! `"planType"`, `"timeDepositId"`) that downstream tooling already
//! queries, so all SQL quotes them explicitly.

pub mod postgres;

pub use postgres::PostgresDepositRepository;
