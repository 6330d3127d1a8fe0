use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::models::SchemaError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Error opening CSV at path: {path} | {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error
    },
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error("Partition worker for pair [{account_id}]:[{counterparty_id}] failed: {reason}")]
    Worker {
        account_id: String,
        counterparty_id: String,
        reason: String
    },
    #[error("CSV reader task failed: {0}")]
    Reader(String),
    #[error("Expected [{expected}] annotated rows but assembled [{actual}]")]
    RowCountMismatch {
        expected: usize,
        actual: usize
    }
}
