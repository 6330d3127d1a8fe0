use tracing::trace;

use crate::analysis::grouping::{group_indices, sequence_key};
use crate::analysis::statistics::ratio;
use crate::config::MonthlyWindow;
use crate::models::{AnnotatedTransaction, SequencedTransaction};

/// Per-row periodicity signals, aligned with the input rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Periodicity {
    /// Whether the gap to the previous row of the same sequence is monthly.
    pub monthly: Vec<Option<bool>>,
    /// Share of monthly gaps in the row's sequence, broadcast to every row.
    pub monthly_consistency_score: Vec<Option<f64>>
}

/// Scores each (account, counterparty, sequence) group for monthly
/// periodicity from the day gaps between its chronologically ordered rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodicityDetector {
    window: MonthlyWindow
}

impl PeriodicityDetector {
    pub fn new(window: MonthlyWindow) -> Self {
        Self { window }
    }

    /// Adds `monthly` and `monthly_consistency_score` to every row. Row order
    /// is preserved.
    pub fn detect(&self, transactions: Vec<SequencedTransaction>) -> Vec<AnnotatedTransaction> {
        let Periodicity { monthly, monthly_consistency_score } = self.compute(&transactions);

        transactions.into_iter()
            .zip(monthly.into_iter().zip(monthly_consistency_score))
            .map(|(transaction, (monthly, score))| transaction.with_periodicity(monthly, score))
            .collect()
    }

    /// Computes the periodicity columns aligned with `transactions`.
    ///
    /// Rows of a group are ordered by date; rows sharing a date keep their
    /// input order. The first row of each group has no gap, so its `monthly`
    /// is `None` and it counts in neither side of the score. The score is
    /// `None` for groups with a single row.
    pub fn compute(&self, transactions: &[SequencedTransaction]) -> Periodicity {
        let mut monthly = vec![None; transactions.len()];
        let mut monthly_consistency_score = vec![None; transactions.len()];

        for (key, mut indices) in group_indices(transactions, sequence_key) {
            indices.sort_by_key(|&index| transactions[index].date);

            let mut hits = 0;

            for pair in indices.windows(2) {
                let (previous, current) = (&transactions[pair[0]], &transactions[pair[1]]);
                let gap = current.date.signed_duration_since(previous.date).num_days();
                let is_monthly = self.window.contains(gap);

                if is_monthly {
                    hits += 1;
                }

                monthly[pair[1]] = Some(is_monthly);
            }

            let score = ratio(hits, indices.len() - 1);

            trace!("Sequence [{}]:[{}]:[{}] score [{score:?}] over [{}] rows", key.0, key.1, key.2, indices.len());

            for index in indices {
                monthly_consistency_score[index] = score;
            }
        }

        Periodicity { monthly, monthly_consistency_score }
    }
}

/// Convenience wrapper over [`PeriodicityDetector::detect`].
pub fn detect_monthly_periodicity(transactions: Vec<SequencedTransaction>, window: MonthlyWindow) -> Vec<AnnotatedTransaction> {
    PeriodicityDetector::new(window).detect(transactions)
}
