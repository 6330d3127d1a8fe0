//! Recurring sequence detection over account/counterparty transactions.
//!
//! Transactions of each (account, counterparty) pair are split into
//! sequences by amount, then every sequence is scored for monthly
//! periodicity. [`analysis::annotate`] is the synchronous transform and
//! [`engine::AsyncEngine`] runs the same transform partitioned per pair.

pub mod actors;
pub mod analysis;
pub mod config;
pub mod engine;
pub mod models;
pub mod storage;
pub mod types;
