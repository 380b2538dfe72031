//! Inspect Service - environment and async checks on an existing project.
//!
//! Nothing here fails on the project's contents: unreadable files and failed
//! package queries become findings, not errors.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::{
    application::ports::{Filesystem, PackageAvailabilityChecker},
    domain::{
        AsyncFinding, async_lint,
        layout::{ENTRY_POINT, ENV_FILE, MANIFEST, SOURCE_EXTENSION},
        manifest,
    },
};

pub const NO_ENV_FILE: &str = "No .env file found. Consider creating one for environment variables.";

pub const NO_ENTRY_POINT: &str =
    "No app/main.py file found. This is required for a FastAPI application.";

#[derive(Clone)]
pub struct InspectService {
    filesystem: Arc<dyn Filesystem>,
    checker: Arc<dyn PackageAvailabilityChecker>,
}

impl InspectService {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        checker: Arc<dyn PackageAvailabilityChecker>,
    ) -> Self {
        Self {
            filesystem,
            checker,
        }
    }

    /// Missing dependencies followed by configuration issues.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn check(&self, root: &Path) -> Vec<String> {
        let mut issues = self.missing_dependencies(root);
        issues.extend(self.configuration_issues(root));
        issues
    }

    /// Declared requirements the checker does not find installed.
    pub fn missing_dependencies(&self, root: &Path) -> Vec<String> {
        let path = root.join(MANIFEST);
        if !self.filesystem.exists(&path) {
            debug!("No manifest, skipping dependency check");
            return Vec::new();
        }

        let content = match self.filesystem.read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Manifest unreadable, skipping dependency check");
                return Vec::new();
            }
        };

        manifest::parse_manifest(&content)
            .into_iter()
            .filter(|spec| !self.is_available(spec))
            .map(|spec| format!("Missing dependency: {spec}"))
            .collect()
    }

    pub fn configuration_issues(&self, root: &Path) -> Vec<String> {
        let mut issues = Vec::new();
        if !self.filesystem.exists(&root.join(ENV_FILE)) {
            issues.push(NO_ENV_FILE.to_string());
        }
        if !self.filesystem.exists(&root.join(ENTRY_POINT)) {
            issues.push(NO_ENTRY_POINT.to_string());
        }
        issues
    }

    /// Async pitfalls per `.py` file, in path order. Clean files are omitted.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn analyze_async(&self, root: &Path) -> Vec<AsyncFinding> {
        let files = match self.filesystem.list_files(root) {
            Ok(files) => files,
            Err(e) => {
                warn!(error = %e, "Could not list project files");
                return Vec::new();
            }
        };

        files
            .into_iter()
            .filter(|f| f.extension().is_some_and(|ext| ext == SOURCE_EXTENSION))
            .filter_map(|relative| {
                let path = root.join(&relative);
                let issues = match self.filesystem.read_to_string(&path) {
                    Ok(code) => async_lint::analyze_source(&code),
                    Err(e) => vec![format!("Error reading file {}: {}", path.display(), e)],
                };
                (!issues.is_empty()).then(|| AsyncFinding {
                    file: relative.to_string_lossy().replace('\\', "/"),
                    issues,
                })
            })
            .collect()
    }

    fn is_available(&self, spec: &str) -> bool {
        let name = manifest::requirement_name(spec);
        match self.checker.is_available(name) {
            Ok(available) => available,
            Err(e) => {
                debug!(package = name, error = %e, "Package query failed, counting as missing");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockFilesystem, MockPackageAvailabilityChecker},
    };
    use mockall::predicate::eq;

    fn fs_with_manifest(manifest: &'static str) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|p| p.ends_with(MANIFEST));
        fs.expect_read_to_string()
            .returning(move |_| Ok(manifest.to_string()));
        fs
    }

    #[test]
    fn missing_packages_and_config_are_reported_in_order() {
        let fs = fs_with_manifest("# deps\n\nfastapi\nuvicorn[standard]==0.24.0\n");
        let mut checker = MockPackageAvailabilityChecker::new();
        checker
            .expect_is_available()
            .with(eq("fastapi"))
            .returning(|_| Ok(true));
        checker
            .expect_is_available()
            .with(eq("uvicorn"))
            .returning(|_| Ok(false));

        let service = InspectService::new(Arc::new(fs), Arc::new(checker));
        let issues = service.check(Path::new("/p"));
        assert_eq!(
            issues,
            vec![
                "Missing dependency: uvicorn[standard]==0.24.0".to_string(),
                NO_ENV_FILE.to_string(),
                NO_ENTRY_POINT.to_string(),
            ]
        );
    }

    #[test]
    fn checker_failure_counts_as_missing() {
        let fs = fs_with_manifest("sqlalchemy\n");
        let mut checker = MockPackageAvailabilityChecker::new();
        checker.expect_is_available().returning(|p| {
            Err(ApplicationError::PackageQueryFailed {
                package: p.into(),
                reason: "python not found".into(),
            }
            .into())
        });

        let service = InspectService::new(Arc::new(fs), Arc::new(checker));
        assert_eq!(
            service.missing_dependencies(Path::new("/p")),
            vec!["Missing dependency: sqlalchemy"]
        );
    }

    #[test]
    fn unreadable_file_becomes_a_finding() {
        let mut fs = MockFilesystem::new();
        fs.expect_list_files()
            .returning(|_| Ok(vec![PathBuf::from("app/main.py"), PathBuf::from("README.md")]));
        fs.expect_read_to_string().returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        let service = InspectService::new(Arc::new(fs), Arc::new(MockPackageAvailabilityChecker::new()));
        let findings = service.analyze_async(Path::new("/p"));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].file, "app/main.py");
        assert!(findings[0].issues[0].starts_with("Error reading file /p/app/main.py"));
    }
}
