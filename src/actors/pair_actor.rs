use std::sync::Arc;

use tokio::spawn;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::analysis::{annotate, AnalysisError, PairKey};
use crate::config::EngineConfig;
use crate::engine::EngineError;
use crate::models::Transaction;
use crate::storage::Storage;
use crate::types::RowIndex;

/// Owns the rows of one (account, counterparty) pair.
///
/// Rows are buffered until the input is exhausted, then the whole partition
/// runs through the splitter and detector and is saved to storage.
pub struct PairActor {
    key: PairKey,
    sender: mpsc::UnboundedSender<(RowIndex, Transaction)>,
    handle: JoinHandle<Result<(), AnalysisError>>
}

impl PairActor {
    /// Spawns a new actor for `key`.
    pub fn new<S: Storage>(key: PairKey, config: EngineConfig, storage: Arc<S>) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<(RowIndex, Transaction)>();
        let partition_key = key.clone();

        let handle = spawn(async move {
            let mut indices = Vec::new();
            let mut rows = Vec::new();

            while let Some((index, transaction)) = receiver.recv().await {
                indices.push(index);
                rows.push(transaction);
            }

            let annotated = annotate(rows, &config)?;

            debug!("Pair [{}]:[{}] annotated [{}] rows", partition_key.account_id, partition_key.counterparty_id, annotated.len());

            storage.save(partition_key, indices.into_iter().zip(annotated).collect());

            Ok(())
        });

        Self { key, sender, handle }
    }

    pub fn key(&self) -> &PairKey {
        &self.key
    }

    /// Queues a row. Returns `false` if the actor is no longer running.
    pub fn accept(&self, index: RowIndex, transaction: Transaction) -> bool {
        self.sender.send((index, transaction)).is_ok()
    }

    /// Closes the input and waits for the partition to be stored.
    pub async fn despawn(self) -> Result<(), EngineError> {
        drop(self.sender);

        match self.handle.await {
            Ok(result) => Ok(result?),
            Err(error) => Err(EngineError::Worker {
                account_id: self.key.account_id,
                counterparty_id: self.key.counterparty_id,
                reason: error.to_string()
            })
        }
    }
}
