//! Errors raised by pure domain checks (templates, patches).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Template '{name}' has no content")]
    EmptyTemplate { name: String },

    #[error("Invalid source patch: {0}")]
    InvalidPatch(String),
}

impl DomainError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyTemplate { name } => vec![
                format!("Template '{}' is empty", name),
                "Check the template override directory for truncated files".into(),
            ],
            Self::InvalidPatch(msg) => vec![
                format!("Patch definition rejected: {}", msg),
                "This appears to be a bug in Kickstart".into(),
            ],
            Self::InvalidTemplate(msg) => vec![format!("Details: {}", msg)],
        }
    }

    /// A bad patch definition is our bug; a bad template may be the user's
    /// override file.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTemplate(_) | Self::EmptyTemplate { .. } => ErrorCategory::Validation,
            Self::InvalidPatch(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
