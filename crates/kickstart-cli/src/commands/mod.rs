//! Command handlers, one module per subcommand family.
//!
//! Handlers translate arguments into service calls and print results; the
//! adapters are wired here because only the binary picks concrete types.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use kickstart_adapters::{InMemoryStore, LocalFilesystem, MiniJinjaRenderer};
use kickstart_core::application::{Filesystem, TemplateService};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod addon;
pub mod completions;
pub mod config;
pub mod config_init;
pub mod init;
pub mod inspect;
pub mod report;
pub mod setup;
pub mod templates;

/// Built-in templates plus the configured override directory, rendered by
/// MiniJinja.
pub fn template_service(config: &AppConfig) -> CliResult<TemplateService> {
    let store = match &config.templates.override_dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "Loading template overrides");
            InMemoryStore::with_overrides(dir)?
        }
        None => InMemoryStore::with_builtin()?,
    };

    Ok(TemplateService::new(
        Arc::new(store),
        Arc::new(MiniJinjaRenderer::new()),
    ))
}

pub fn local_filesystem() -> Arc<dyn Filesystem> {
    Arc::new(LocalFilesystem::new())
}

/// Resolve `--path` to an absolute, existing directory.
///
/// Canonicalising matters: the project name used when rendering into an
/// existing project is the directory name, and `.` has none.
pub fn project_root(path: &Path) -> CliResult<PathBuf> {
    let root = path
        .canonicalize()
        .map_err(|_| CliError::ProjectNotFound {
            path: path.to_path_buf(),
        })?;

    if !root.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("'{}' is not a directory", path.display()),
        });
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_root_is_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let root = project_root(dir.path()).unwrap();
        assert!(root.is_absolute());
        assert!(root.file_name().is_some());
    }

    #[test]
    fn missing_project_root_is_not_found() {
        let err = project_root(Path::new("/definitely/not/here")).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn file_as_project_root_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "").unwrap();
        assert!(matches!(
            project_root(&file),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn missing_override_dir_is_reported() {
        let mut config = AppConfig::default();
        config.templates.override_dir = Some(PathBuf::from("/definitely/not/here"));
        assert!(template_service(&config).is_err());
    }
}
