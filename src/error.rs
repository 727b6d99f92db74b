/// Error types for lotkeeper
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for lotkeeper operations
#[derive(Error, Debug)]
pub enum LotError {
    /// I/O errors (data file reads/writes)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No occupied slot holds this plate
    #[error("Plate not found: {0}")]
    PlateNotFound(String),

    /// Every slot is occupied
    #[error("Parking lot is full ({0} slots)")]
    LotFull(usize),

    /// Plate input that can't be stored (empty, reserved sentinel)
    #[error("Invalid plate: {0}")]
    InvalidPlate(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for lotkeeper operations
pub type Result<T> = std::result::Result<T, LotError>;

/// Convert LotError to a user-friendly error message
impl LotError {
    pub fn user_message(&self) -> String {
        match self {
            LotError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            LotError::PlateNotFound(plate) => {
                format!("No vehicle with plate '{}' is parked here", plate)
            }
            LotError::LotFull(capacity) => {
                format!("Parking full. All {} slots are taken.", capacity)
            }
            LotError::InvalidPlate(reason) => {
                format!("Invalid plate: {}", reason)
            }
            LotError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            LotError::Generic(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = LotError::PlateNotFound("KHI-404".to_string());
        assert!(err.user_message().contains("KHI-404"));

        let err = LotError::LotFull(20);
        assert!(err.user_message().contains("20"));
    }

    #[test]
    fn test_error_display() {
        let err = LotError::InvalidPlate("empty plate".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Invalid plate"));
    }
}
