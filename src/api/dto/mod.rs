//! Response DTOs for the REST endpoints.

pub mod deposit_dto;

pub use deposit_dto::{TimeDepositResponse, UpdateBalancesResponse, WithdrawalResponse};
