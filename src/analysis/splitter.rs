use rust_decimal::Decimal;
use tracing::trace;

use crate::analysis::errors::AnalysisError;
use crate::analysis::grouping::{group_indices, pair_key};
use crate::analysis::statistics::{dense_rank, median};
use crate::models::{SequencedTransaction, Transaction};
use crate::types::{SequenceId, ThresholdMultiplier};

/// Splits the transactions of every (account, counterparty) pair into
/// sequences by comparing each amount against a multiple of the pair's
/// median amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceSplitter {
    multiplier: ThresholdMultiplier
}

impl SequenceSplitter {
    pub fn new(multiplier: ThresholdMultiplier) -> Self {
        Self { multiplier }
    }

    /// Adds `sequence_id` to every row. Row order is preserved.
    pub fn split(&self, transactions: Vec<Transaction>) -> Result<Vec<SequencedTransaction>, AnalysisError> {
        let sequence_ids = self.assign_sequence_ids(&transactions)?;

        Ok(transactions.into_iter()
            .zip(sequence_ids)
            .map(|(transaction, sequence_id)| transaction.with_sequence(sequence_id))
            .collect())
    }

    /// Computes the `sequence_id` column aligned with `transactions`.
    ///
    /// Within a pair, rows at or below the threshold rank before rows above
    /// it, and ids are dense from 0. A pair whose rows all fall on the same
    /// side of the threshold is a single sequence 0.
    ///
    /// # Errors
    /// Returns `AnalysisError` naming the pair when its median or threshold
    /// does not fit in a `Decimal`.
    pub fn assign_sequence_ids(&self, transactions: &[Transaction]) -> Result<Vec<SequenceId>, AnalysisError> {
        let mut sequence_ids = vec![0; transactions.len()];

        for (key, indices) in group_indices(transactions, pair_key) {
            let mut amounts: Vec<Decimal> = indices.iter()
                .map(|&index| transactions[index].booking_amount)
                .collect();

            let median = median(&mut amounts)
                .map_err(|source| AnalysisError::median(key, source))?;

            let threshold = self.multiplier.threshold(median)
                .ok_or_else(|| AnalysisError::threshold_overflow(key, self.multiplier, median))?;

            let is_high: Vec<bool> = indices.iter()
                .map(|&index| transactions[index].booking_amount > threshold)
                .collect();

            trace!("Pair [{}]:[{}] median [{median}] threshold [{threshold}]", key.0, key.1);

            for (index, rank) in indices.into_iter().zip(dense_rank(&is_high)) {
                sequence_ids[index] = rank;
            }
        }

        Ok(sequence_ids)
    }
}

/// Convenience wrapper over [`SequenceSplitter::split`].
pub fn split_based_on_amount(transactions: Vec<Transaction>, multiplier: ThresholdMultiplier) -> Result<Vec<SequencedTransaction>, AnalysisError> {
    SequenceSplitter::new(multiplier).split(transactions)
}
