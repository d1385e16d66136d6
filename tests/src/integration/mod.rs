//! # Integration Tests
//!
//! End-to-end scenarios against a deployed ledger, a funded bank, and
//! the fixed-rate oracle.
