//! Error types for template storage and theme extraction

use thiserror::Error;

/// Errors that can occur while reading or writing persisted catalog state
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error from a file-backed store
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend refused the operation
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Errors that abort a theme extraction call
#[derive(Debug, Error)]
pub enum ExtractError {
    /// IO error while reading the uploaded package
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Package is not a readable ZIP archive
    #[error("Not a valid presentation package: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML parsing error inside a package part
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// The package has no theme part
    #[error("no theme found in package (expected {0})")]
    NoTheme(String),

    /// The theme part declares no color scheme
    #[error("no color scheme found in theme")]
    NoColorScheme,

    /// A package part is not valid UTF-8
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl From<quick_xml::Error> for ExtractError {
    fn from(err: quick_xml::Error) -> Self {
        ExtractError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for ExtractError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        ExtractError::Xml(format!("Attribute error: {}", err))
    }
}

/// Result type for extraction operations
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;
