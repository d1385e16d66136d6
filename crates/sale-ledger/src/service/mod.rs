//! # Service Layer
//!
//! The `SaleApi` implementation and its deployment parameters.

mod ledger;

pub use ledger::{AccessSaleLedger, SaleDeployment};
