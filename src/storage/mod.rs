mod partition_storage;

use crate::analysis::PairKey;
use crate::models::AnnotatedTransaction;
use crate::types::RowIndex;

pub use partition_storage::PartitionStorage;

/// Annotated rows of one pair, tagged with their position in the input.
pub type AnnotatedPartition = Vec<(RowIndex, AnnotatedTransaction)>;

pub trait Storage: Send + Sync + 'static {
    /// Removes and returns the partition stored under `key`.
    fn take(&self, key: &PairKey) -> Option<AnnotatedPartition>;
    fn save(&self, key: PairKey, rows: AnnotatedPartition);
}
