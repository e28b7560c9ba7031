//! Configuration for batch requests
//!
//! This module provides configuration types for controlling how batches are
//! drawn, including the batch-size range and concurrency settings.

use crate::core::errors::FactoryError;

/// Smallest batch drawn per factory by default
pub const DEFAULT_MIN_BATCH: usize = 5;
/// Largest batch drawn per factory by default
pub const DEFAULT_MAX_BATCH: usize = 10;

/// Enumeration of supported concurrency modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConcurrencyMode {
    /// Sequential execution mode - factories are asked in order within a single thread
    #[default]
    Sequential,
    /// Parallel execution mode using Rayon - each factory's sub-batch runs on the pool
    Rayon,
}

/// Configuration for batch requests
///
/// Holds the inclusive range batch sizes are drawn from and the concurrency
/// settings used when several factories are asked at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Smallest number of products drawn per factory (inclusive)
    pub min_batch: usize,
    /// Largest number of products drawn per factory (inclusive)
    pub max_batch: usize,
    /// The concurrency mode to use for execution
    pub concurrency_mode: ConcurrencyMode,
    /// The size of a dedicated thread pool for parallel execution
    /// Only relevant when concurrency_mode is Rayon; `None` uses the global pool
    pub thread_pool_size: Option<usize>,
}

impl BatchConfig {
    /// Create a new batch configuration with default values
    ///
    /// Default configuration draws 5 to 10 products per factory, sequentially
    pub fn new() -> Self {
        Self {
            min_batch: DEFAULT_MIN_BATCH,
            max_batch: DEFAULT_MAX_BATCH,
            concurrency_mode: ConcurrencyMode::default(),
            thread_pool_size: None,
        }
    }

    /// Set the inclusive batch-size range
    pub fn with_batch_range(mut self, min_batch: usize, max_batch: usize) -> Self {
        self.min_batch = min_batch;
        self.max_batch = max_batch;
        self
    }

    /// Set the concurrency mode
    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency_mode = mode;
        self
    }

    /// Set the thread pool size for parallel execution
    ///
    /// # Note
    /// This setting only affects execution when concurrency_mode is Rayon
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }

    /// Check the configuration before use
    pub fn validate(&self) -> Result<(), FactoryError> {
        if self.min_batch > self.max_batch {
            return Err(FactoryError::InvalidRequest(format!(
                "batch range {}..={} is empty",
                self.min_batch, self.max_batch
            )));
        }
        if self.thread_pool_size == Some(0) {
            return Err(FactoryError::InvalidRequest(
                "thread pool size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BatchConfig::default();
        assert_eq!(config.min_batch, 5);
        assert_eq!(config.max_batch, 10);
        assert_eq!(config.concurrency_mode, ConcurrencyMode::Sequential);
        assert_eq!(config.thread_pool_size, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = BatchConfig::new()
            .with_batch_range(1, 3)
            .with_concurrency(ConcurrencyMode::Rayon)
            .with_thread_pool_size(4);

        assert_eq!(config.min_batch, 1);
        assert_eq!(config.max_batch, 3);
        assert_eq!(config.concurrency_mode, ConcurrencyMode::Rayon);
        assert_eq!(config.thread_pool_size, Some(4));
    }

    #[test]
    fn test_inverted_range_is_invalid() {
        let config = BatchConfig::new().with_batch_range(8, 2);
        assert!(matches!(config.validate(), Err(FactoryError::InvalidRequest(_))));
    }

    #[test]
    fn test_zero_threads_is_invalid() {
        let config = BatchConfig::new().with_thread_pool_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_fixed_batch_size_is_valid() {
        let config = BatchConfig::new().with_batch_range(3, 3);
        assert!(config.validate().is_ok());
    }
}
