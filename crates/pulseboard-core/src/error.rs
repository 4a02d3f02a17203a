//! Error types for the Pulseboard model

use thiserror::Error;

/// Main error type for Pulseboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Interpolation input range is empty or not finite
    #[error("Invalid interpolation range: {0}")]
    InvalidRange(String),

    /// Content document parsed but breaks a layout rule
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// Content document is not valid JSON for the content schema
    #[error("Content parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using DashboardError
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::InvalidContent("stats row needs 3 tiles".to_string());
        assert_eq!(format!("{}", err), "Invalid content: stats row needs 3 tiles");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DashboardError = io_err.into();
        assert!(matches!(err, DashboardError::Io(_)));
    }
}
