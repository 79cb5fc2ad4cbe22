//! Core domain types and calculations.

pub mod calc;
pub mod catalog;
pub mod error;
pub mod ledger;
pub mod trade;
