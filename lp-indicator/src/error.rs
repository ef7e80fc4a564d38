/// Error types for the loading indicator
use thiserror::Error;

/// Main error type for indicator setup and DOM operations
#[derive(Error, Debug)]
pub enum IndicatorError {
    /// No element on the page matched the form selector
    #[error("Form not found: {0}")]
    FormNotFound(String),

    /// Configuration failed validation
    #[error("Invalid indicator config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed
    #[error("Failed to parse indicator config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The host document rejected an operation
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Type alias for Results using IndicatorError
pub type Result<T> = std::result::Result<T, IndicatorError>;
