/// Runtime configuration
///
/// The original tool hardcoded the slot count and data file as globals.
/// Here both are explicit values handed to the store and the file layer.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{LotError, Result};

/// Default number of parking slots
pub const DEFAULT_CAPACITY: usize = 20;

/// Default data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "parking_data.txt";

/// Configuration for one parking lot instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotConfig {
    /// Fixed slot count, decided at startup and never changed
    pub capacity: usize,
    /// Where the occupancy snapshot lives
    pub data_file: PathBuf,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl LotConfig {
    pub fn new(capacity: usize, data_file: impl Into<PathBuf>) -> Result<Self> {
        if capacity == 0 {
            return Err(LotError::Config(
                "capacity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            capacity,
            data_file: data_file.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LotConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.data_file, PathBuf::from("parking_data.txt"));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = LotConfig::new(0, "lot.txt");
        assert!(matches!(result, Err(LotError::Config(_))));
    }

    #[test]
    fn test_custom_config() {
        let config = LotConfig::new(10, "/tmp/lot.txt").unwrap();
        assert_eq!(config.capacity, 10);
    }
}
