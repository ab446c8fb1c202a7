//! Unified application error types for SiteHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Each [`ErrorKind`] carries the HTTP
//! status code the outer layers report for it.

use std::fmt;
use thiserror::Error;

/// Generic message reported for every internal failure.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested document or entry was not found.
    NotFound,
    /// Another entry already uses the English title/name.
    DuplicateEnglishField,
    /// Another entry already uses the German title/name.
    DuplicateGermanField,
    /// Another entry already uses a language-neutral unique value.
    DuplicateField,
    /// An edit request carried no applicable changes.
    NoChanges,
    /// An image could not be stored.
    ImageStorage,
    /// Input validation failed.
    Validation,
    /// The caller is not authenticated as an administrator.
    Unauthorized,
    /// An internal server error occurred.
    Internal,
    /// A database error occurred.
    Database,
    /// A storage I/O error occurred.
    Storage,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
}

impl ErrorKind {
    /// HTTP status code reported for this kind.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::DuplicateEnglishField
            | Self::DuplicateGermanField
            | Self::DuplicateField
            | Self::NoChanges => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::Validation => 422,
            Self::ImageStorage
            | Self::Internal
            | Self::Database
            | Self::Storage
            | Self::Configuration
            | Self::Serialization => 500,
        }
    }

    /// Whether this kind describes an infrastructure failure that must not
    /// reach callers verbatim.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::Database | Self::Storage | Self::Configuration | Self::Serialization
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::DuplicateEnglishField => write!(f, "DUPLICATE_ENGLISH_FIELD"),
            Self::DuplicateGermanField => write!(f, "DUPLICATE_GERMAN_FIELD"),
            Self::DuplicateField => write!(f, "DUPLICATE_FIELD"),
            Self::NoChanges => write!(f, "NO_CHANGES"),
            Self::ImageStorage => write!(f, "IMAGE_STORAGE_FAILED"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Database => write!(f, "DATABASE"),
            Self::Storage => write!(f, "STORAGE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
        }
    }
}

/// The unified application error used throughout SiteHub.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a duplicate English title/name error.
    pub fn duplicate_english(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateEnglishField, message)
    }

    /// Create a duplicate German title/name error.
    pub fn duplicate_german(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateGermanField, message)
    }

    /// Create a duplicate language-neutral value error.
    pub fn duplicate_field(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateField, message)
    }

    /// Create a no-changes error.
    pub fn no_changes() -> Self {
        Self::new(ErrorKind::NoChanges, "There are no changes to apply")
    }

    /// Create an image storage failure.
    pub fn image_storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ImageStorage, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Whether this is one of the duplicate-value kinds.
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::DuplicateEnglishField
                | ErrorKind::DuplicateGermanField
                | ErrorKind::DuplicateField
        )
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
