use std::collections::HashMap;
use std::hash::Hash;

use crate::models::{SequencedTransaction, Transaction};
use crate::types::{AccountId, CounterpartyId, RowIndex, SequenceId};

/// Owned (account, counterparty) key, used where a partition outlives the
/// borrowed input rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    pub account_id: AccountId,
    pub counterparty_id: CounterpartyId
}

impl PairKey {
    pub fn of(transaction: &Transaction) -> Self {
        Self {
            account_id: transaction.account_id.clone(),
            counterparty_id: transaction.counterparty_id.clone()
        }
    }
}

/// Borrowed splitter key: (account_id, counterparty_id).
pub fn pair_key(transaction: &Transaction) -> (&str, &str) {
    (transaction.account_id.as_str(), transaction.counterparty_id.as_str())
}

/// Borrowed detector key: (account_id, counterparty_id, sequence_id).
pub fn sequence_key(transaction: &SequencedTransaction) -> (&str, &str, SequenceId) {
    (transaction.account_id.as_str(), transaction.counterparty_id.as_str(), transaction.sequence_id)
}

/// Partitions row positions by key.
///
/// Indices within each partition keep their input order, which is what
/// makes same-date tie breaking in later stages deterministic.
pub fn group_indices<'a, T, K, F>(rows: &'a [T], key: F) -> HashMap<K, Vec<RowIndex>>
where
    K: Eq + Hash,
    F: Fn(&'a T) -> K,
{
    let mut groups: HashMap<K, Vec<RowIndex>> = HashMap::new();

    for (index, row) in rows.iter().enumerate() {
        groups.entry(key(row)).or_default().push(index);
    }

    groups
}
