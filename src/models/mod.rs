mod errors;
mod record;
mod transaction;

pub use errors::SchemaError;
pub use record::{read_transactions, read_transactions_with, CsvLayout, TransactionRecord, DATE_FORMAT, REQUIRED_COLUMNS};
pub use transaction::{AnnotatedTable, AnnotatedTransaction, Extras, SequencedTransaction, Transaction, TransactionTable};
