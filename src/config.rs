use crate::types::{ConfigError, ThresholdMultiplier};

const DEFAULT_BACKPRESSURE: usize = 256;

/// Inclusive range of day gaps counted as monthly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyWindow {
    min_days: i64,
    max_days: i64
}

impl MonthlyWindow {
    pub const DEFAULT_MIN_DAYS: i64 = 25;
    pub const DEFAULT_MAX_DAYS: i64 = 35;

    pub fn new(min_days: i64, max_days: i64) -> Result<Self, ConfigError> {
        if min_days > max_days {
            return Err(ConfigError::InvalidWindow { min_days, max_days });
        }

        Ok(Self { min_days, max_days })
    }

    pub fn min_days(&self) -> i64 {
        self.min_days
    }

    pub fn max_days(&self) -> i64 {
        self.max_days
    }

    pub fn contains(&self, gap_days: i64) -> bool {
        self.min_days <= gap_days && gap_days <= self.max_days
    }
}

impl Default for MonthlyWindow {
    fn default() -> Self {
        Self {
            min_days: Self::DEFAULT_MIN_DAYS,
            max_days: Self::DEFAULT_MAX_DAYS
        }
    }
}

/// Settings shared by the synchronous transform and the async engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub threshold_multiplier: ThresholdMultiplier,
    pub monthly_window: MonthlyWindow,
    /// Capacity of the channel between the CSV reader and the partitioner.
    pub backpressure: usize
}

impl EngineConfig {
    pub fn with_threshold_multiplier(mut self, threshold_multiplier: ThresholdMultiplier) -> Self {
        self.threshold_multiplier = threshold_multiplier;
        self
    }

    pub fn with_monthly_window(mut self, monthly_window: MonthlyWindow) -> Self {
        self.monthly_window = monthly_window;
        self
    }

    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threshold_multiplier: ThresholdMultiplier::default(),
            monthly_window: MonthlyWindow::default(),
            backpressure: DEFAULT_BACKPRESSURE
        }
    }
}
