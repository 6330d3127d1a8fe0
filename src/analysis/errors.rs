use thiserror::Error;

use crate::analysis::statistics::StatisticsError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Median of [booking_amount] failed for pair [{account_id}]:[{counterparty_id}]: {source}")]
    Median {
        account_id: String,
        counterparty_id: String,
        #[source]
        source: StatisticsError
    },
    #[error("Threshold [{multiplier} x {median}] overflowed for pair [{account_id}]:[{counterparty_id}]")]
    ThresholdOverflow {
        account_id: String,
        counterparty_id: String,
        multiplier: String,
        median: String
    }
}

impl AnalysisError {
    pub fn median(pair: (&str, &str), source: StatisticsError) -> Self {
        Self::Median {
            account_id: pair.0.to_string(),
            counterparty_id: pair.1.to_string(),
            source
        }
    }

    pub fn threshold_overflow(pair: (&str, &str), multiplier: impl ToString, median: impl ToString) -> Self {
        Self::ThresholdOverflow {
            account_id: pair.0.to_string(),
            counterparty_id: pair.1.to_string(),
            multiplier: multiplier.to_string(),
            median: median.to_string()
        }
    }
}
