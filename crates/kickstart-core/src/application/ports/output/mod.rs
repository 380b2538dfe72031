//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `kickstart-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{RenderContext, Template};
use crate::error::KickstartResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kickstart_adapters::filesystem::LocalFilesystem` (production)
/// - `kickstart_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories. Existing ones are fine.
    fn create_dir_all(&self, path: &Path) -> KickstartResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> KickstartResult<()>;

    /// Create an empty file if missing. Never truncates.
    fn touch(&self, path: &Path) -> KickstartResult<()>;

    fn read_to_string(&self, path: &Path) -> KickstartResult<String>;

    /// Every file below `root`, relative to it, sorted.
    fn list_files(&self, root: &Path) -> KickstartResult<Vec<PathBuf>>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> KickstartResult<()>;
}

/// Port for template storage and retrieval.
///
/// Implemented by `kickstart_adapters::template_store::InMemoryStore`
/// (built-in templates plus optional on-disk overrides).
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Look up one template by name.
    ///
    /// # Errors
    /// `TemplateNotFound` when no entry has this name.
    fn get(&self, name: &str) -> KickstartResult<Template>;

    /// All templates, sorted by name.
    fn list(&self) -> KickstartResult<Vec<Template>>;
}

/// Port for placeholder substitution.
///
/// Implemented by `kickstart_adapters::renderer::MiniJinjaRenderer`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `source` (registered under `name` for error messages).
    ///
    /// # Errors
    /// `RenderingFailed` on syntax errors or unresolved placeholders.
    fn render(&self, name: &str, source: &str, context: &RenderContext)
    -> KickstartResult<String>;
}

/// Port answering "is package X installed in the target environment".
///
/// Implemented by:
/// - `kickstart_adapters::checker::PipPackageChecker` (shells out to pip)
/// - `kickstart_adapters::checker::StaticPackageChecker` (fixed answers)
#[cfg_attr(test, mockall::automock)]
pub trait PackageAvailabilityChecker: Send + Sync {
    /// # Errors
    /// `PackageQueryFailed` when the query itself could not run.
    fn is_available(&self, package: &str) -> KickstartResult<bool>;
}
