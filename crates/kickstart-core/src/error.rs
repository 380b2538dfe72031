//! The one error type the core hands to its callers.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, ErrorCategory as DomainCategory};

pub type KickstartResult<T> = Result<T, KickstartError>;

#[derive(Debug, Error, Clone)]
pub enum KickstartError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Displayed as-is; these messages are already user-facing.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// A broken invariant inside an adapter, e.g. a poisoned lock.
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl KickstartError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => {
                vec!["Please report this with the output of `kickstart -vvv`".into()]
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                DomainCategory::Validation => ErrorCategory::Validation,
                DomainCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Coarse classification the CLI turns into exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}
