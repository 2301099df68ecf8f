//! # deposit-gateway
//!
//! REST API for time-deposit accounts with periodic interest accrual.
//!
//! The interest arithmetic lives in [`domain::InterestCalculator`]; everything
//! else in this crate is a coordination layer that loads account snapshots
//! from PostgreSQL, runs the calculator over the whole batch, and persists
//! the updated balances.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── DepositService (service/)
//!     │
//!     ├── InterestCalculator (domain/)
//!     │
//!     └── PostgreSQL Persistence (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
