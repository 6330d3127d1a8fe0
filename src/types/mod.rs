mod errors;
mod multiplier;

pub use errors::ConfigError;
pub use multiplier::ThresholdMultiplier;

pub type AccountId = String;
pub type CounterpartyId = String;
pub type SequenceId = u32;
/// Zero-based position of a row in the input table.
pub type RowIndex = usize;
