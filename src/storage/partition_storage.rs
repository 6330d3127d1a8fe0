use crate::analysis::PairKey;
use crate::storage::{AnnotatedPartition, Storage};
use dashmap::DashMap;

/// Concurrent store of finished pair partitions.
pub struct PartitionStorage {
    cache: DashMap<PairKey, AnnotatedPartition>
}

impl PartitionStorage {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Removes every partition and flattens the rows, unordered.
    pub fn drain(&self) -> AnnotatedPartition {
        let keys: Vec<PairKey> = self.cache.iter().map(|entry| entry.key().clone()).collect();

        keys.into_iter()
            .filter_map(|key| self.cache.remove(&key))
            .flat_map(|(_, rows)| rows)
            .collect()
    }
}

impl Default for PartitionStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for PartitionStorage {
    fn take(&self, key: &PairKey) -> Option<AnnotatedPartition> {
        self.cache.remove(key).map(|(_, rows)| rows)
    }

    fn save(&self, key: PairKey, rows: AnnotatedPartition) {
        self.cache.insert(key, rows);
    }
}
