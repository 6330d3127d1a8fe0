use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Config error: invalid threshold multiplier: {0}")]
    InvalidMultiplier(String),
    #[error("Config error: threshold multiplier must not be negative: {0}")]
    NegativeMultiplier(String),
    #[error("Config error: monthly window [{min_days}, {max_days}] is empty")]
    InvalidWindow {
        min_days: i64,
        max_days: i64
    }
}
