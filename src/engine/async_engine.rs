use crate::actors::PairActor;
use crate::analysis::PairKey;
use crate::config::EngineConfig;
use crate::engine::EngineError;
use crate::models::{read_transactions_with, AnnotatedTable, AnnotatedTransaction, SchemaError, Transaction, TransactionTable};
use crate::storage::PartitionStorage;
use crate::types::RowIndex;
use futures::future::join_all;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, info};

/// Partitioned transform driver.
///
/// Every (account, counterparty) pair is processed by its own actor, so
/// pairs are annotated concurrently and merged back in input order.
pub struct AsyncEngine {
    config: EngineConfig
}

impl AsyncEngine {
    /// Creates a new engine instance with the provided configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Reads, validates and annotates the transactions of a CSV file.
    ///
    /// The first malformed row aborts the run and no rows are returned.
    pub async fn run(&self, path: &str) -> Result<AnnotatedTable, EngineError> {
        let file = File::open(path).map_err(|source| EngineError::Io { path: path.to_string(), source })?;

        let (sender, receiver) = mpsc::channel::<(RowIndex, Transaction)>(self.config.backpressure);
        let csv_handle = self.spawn_csv_reader(file, sender);
        let processing_result = self.process_transactions(receiver).await;

        let (extra_columns, row_count) = match csv_handle.await {
            Ok(Ok(summary)) => summary,
            Ok(Err(error)) => {
                error!("CSV ingestion failed: {error}");
                return Err(error.into());
            }
            Err(error) => return Err(EngineError::Reader(error.to_string()))
        };

        let rows = processing_result?;

        if rows.len() != row_count {
            return Err(EngineError::RowCountMismatch { expected: row_count, actual: rows.len() });
        }

        Ok(AnnotatedTable { extra_columns, rows })
    }

    /// Annotates an in-memory table.
    pub async fn process(&self, table: TransactionTable) -> Result<AnnotatedTable, EngineError> {
        let storage = Arc::new(PartitionStorage::new());
        let mut actors = HashMap::<PairKey, PairActor>::new();
        let expected = table.transactions.len();

        for (index, transaction) in table.transactions.into_iter().enumerate() {
            self.route(&mut actors, &storage, index, transaction);
        }

        let rows = self.merge(actors, storage).await?;

        if rows.len() != expected {
            return Err(EngineError::RowCountMismatch { expected, actual: rows.len() });
        }

        Ok(AnnotatedTable { extra_columns: table.extra_columns, rows })
    }

    fn spawn_csv_reader(&self, file: File, sender: mpsc::Sender<(RowIndex, Transaction)>) -> JoinHandle<Result<(Vec<String>, usize), SchemaError>> {
        spawn_blocking(move || {
            read_transactions_with(BufReader::new(file), |index, transaction| {
                sender.blocking_send((index, transaction)).is_ok()
            })
        })
    }

    async fn process_transactions(&self, mut receiver: mpsc::Receiver<(RowIndex, Transaction)>) -> Result<Vec<AnnotatedTransaction>, EngineError> {
        let storage = Arc::new(PartitionStorage::new());
        let mut actors = HashMap::<PairKey, PairActor>::new();

        while let Some((index, transaction)) = receiver.recv().await {
            self.route(&mut actors, &storage, index, transaction);
        }

        self.merge(actors, storage).await
    }

    fn route(&self, actors: &mut HashMap<PairKey, PairActor>, storage: &Arc<PartitionStorage>, index: RowIndex, transaction: Transaction) {
        let key = PairKey::of(&transaction);
        let actor = actors.entry(key.clone()).or_insert_with(|| {
            PairActor::new(key, self.config, storage.clone())
        });

        if !actor.accept(index, transaction) {
            error!("Pair actor [{}]:[{}] could not accept row [{index}]", actor.key().account_id, actor.key().counterparty_id);
        }
    }

    async fn merge(&self, actors: HashMap<PairKey, PairActor>, storage: Arc<PartitionStorage>) -> Result<Vec<AnnotatedTransaction>, EngineError> {
        let pair_count = actors.len();
        let despawns = actors.into_iter().map(|(key, actor)| async move {
            (key, actor.despawn().await)
        });

        for (key, result) in join_all(despawns).await {
            if let Err(error) = result {
                error!("Pair actor [{}]:[{}] did not despawn gracefully: {error}", key.account_id, key.counterparty_id);
                return Err(error);
            }
        }

        let mut rows = storage.drain();
        rows.sort_unstable_by_key(|(index, _)| *index);

        info!("Annotated [{}] rows across [{pair_count}] pairs", rows.len());
        debug!("Threshold multiplier [{}], monthly window [{}, {}]", self.config.threshold_multiplier, self.config.monthly_window.min_days(), self.config.monthly_window.max_days());

        Ok(rows.into_iter().map(|(_, row)| row).collect())
    }
}
