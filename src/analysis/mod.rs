//! The two-stage recurring sequence transform.
//!
//! [`SequenceSplitter`] partitions each (account, counterparty) pair into
//! amount-based sequences, then [`PeriodicityDetector`] scores each sequence
//! for monthly periodicity. Both stages are pure and keep row order.

mod detector;
mod errors;
mod grouping;
mod splitter;
mod statistics;

pub use detector::{detect_monthly_periodicity, Periodicity, PeriodicityDetector};
pub use errors::AnalysisError;
pub use grouping::{group_indices, pair_key, sequence_key, PairKey};
pub use splitter::{split_based_on_amount, SequenceSplitter};
pub use statistics::{dense_rank, median, ratio, StatisticsError};

use crate::config::EngineConfig;
use crate::models::{AnnotatedTransaction, Transaction};

/// Runs the splitter then the detector over `transactions`.
pub fn annotate(transactions: Vec<Transaction>, config: &EngineConfig) -> Result<Vec<AnnotatedTransaction>, AnalysisError> {
    let sequenced = SequenceSplitter::new(config.threshold_multiplier).split(transactions)?;
    Ok(PeriodicityDetector::new(config.monthly_window).detect(sequenced))
}
