//! Error types for the portfolio

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Identifier does not name any page section
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Settings parsed but hold values the page cannot use
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings file is not valid JSON for [`crate::SiteSettings`]
    #[error("Settings parse error: {0}")]
    SettingsParse(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Viewport observer stopped delivering entries
    #[error("Viewport observer error: {0}")]
    Observer(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::UnknownSection("pricing".to_string());
        assert_eq!(format!("{}", err), "Unknown section: pricing");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PortfolioError = json_err.into();
        assert!(matches!(err, PortfolioError::SettingsParse(_)));
    }
}
