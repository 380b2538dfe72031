//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Step of a multi-file operation, named in `GenerationFailed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    TreeBuilding,
    FileGeneration,
    MigrationSetup,
    TestSetup,
    DockerSetup,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::TreeBuilding => "tree building",
            Self::FileGeneration => "file generation",
            Self::MigrationSetup => "migration setup",
            Self::TestSetup => "test setup",
            Self::DockerSetup => "docker setup",
        };
        f.write_str(s)
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No template with this name in the store.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// Template rendering failed (syntax error or unresolved placeholder).
    #[error("Template '{template}' failed to render: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A render or write failed while producing `path`.
    #[error("Error during {phase} ({path}): {reason}")]
    GenerationFailed {
        phase: Phase,
        path: PathBuf,
        reason: String,
    },

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },

    /// The package-availability query could not be answered.
    #[error("Could not query package '{package}': {reason}")]
    PackageQueryFailed { package: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { name } => vec![
                format!("No built-in or override template is named '{}'", name),
                "Try: kickstart templates".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("Check the placeholders used in '{}'", template),
                "Only {{ project_name }} is defined when rendering".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::GenerationFailed { phase, path, .. } => vec![
                format!("The {} step stopped at {}", phase, path.display()),
                "Files written before the failure are left in place".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::PackageQueryFailed { .. } => vec![
                "Check that the configured Python interpreter is on PATH".into(),
                "Set checker.python in the config file to override it".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![format!(
                "Remove the partially created directory manually: {}",
                path.display()
            )],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::RenderingFailed { .. } | Self::GenerationFailed { .. } => {
                ErrorCategory::Internal
            }
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Internal,
            Self::PackageQueryFailed { .. } => ErrorCategory::Configuration,
        }
    }
}
