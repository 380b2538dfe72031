//! Report Service - builds and writes the onboarding report.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{ports::Filesystem, services::project_name_of},
    domain::{
        ReportData, Route, StructureSection,
        entities::report::{DEFAULT_DEPENDENCIES, PYPROJECT_NOTE},
        layout::{
            APP_DIR, CONTAINER_FILE, ENTRY_POINT, ENV_EXAMPLE, HEALTH_ROUTE, MANIFEST, PYPROJECT,
            README, REPORT_FILE, SOURCE_EXTENSION, TESTS_DIR,
        },
        manifest,
    },
    error::KickstartResult,
};

/// Existence checks, in report order.
const ISSUE_CHECKS: &[(&str, &str)] = &[
    (ENTRY_POINT, "No app/main.py file found"),
    (MANIFEST, "No requirements.txt file found"),
    (ENV_EXAMPLE, "No .env.example file found"),
    (CONTAINER_FILE, "No Dockerfile found"),
    (README, "No README.md file found"),
];

#[derive(Clone)]
pub struct ReportService {
    filesystem: Arc<dyn Filesystem>,
}

impl ReportService {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Build the report and write it to `ONBOARDING_REPORT.md`, replacing
    /// any previous one. Returns the report path.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn generate(&self, root: &Path) -> KickstartResult<PathBuf> {
        let data = self.collect(root)?;
        let path = root.join(REPORT_FILE);
        self.filesystem.write_file(&path, &data.to_markdown())?;
        info!(path = %path.display(), issues = data.issues.len(), "Onboarding report written");
        Ok(path)
    }

    /// Gather report data without writing anything.
    pub fn collect(&self, root: &Path) -> KickstartResult<ReportData> {
        Ok(ReportData {
            project_name: project_name_of(root),
            project_path: root.display().to_string(),
            routes: self.routes(root),
            dependencies: self.dependencies(root)?,
            structure: self.structure(root)?,
            issues: self.issues(root),
        })
    }

    fn routes(&self, root: &Path) -> Vec<Route> {
        let mut routes = Vec::new();
        if self.filesystem.exists(&root.join(ENTRY_POINT)) {
            routes.push(Route::get("/", "Root endpoint"));
            routes.push(Route::get("/docs", "Interactive API documentation"));
            routes.push(Route::get("/redoc", "ReDoc documentation"));
        }
        if self.filesystem.exists(&root.join(HEALTH_ROUTE)) {
            routes.push(Route::get("/api/v1/health/", "Health check endpoint"));
        }
        routes
    }

    fn dependencies(&self, root: &Path) -> KickstartResult<Vec<String>> {
        let mut deps = Vec::new();

        let manifest_path = root.join(MANIFEST);
        if self.filesystem.exists(&manifest_path) {
            deps = manifest::parse_manifest(&self.filesystem.read_to_string(&manifest_path)?);
        }
        if self.filesystem.exists(&root.join(PYPROJECT)) {
            deps.push(PYPROJECT_NOTE.to_string());
        }

        if deps.is_empty() {
            deps = DEFAULT_DEPENDENCIES.iter().map(|d| d.to_string()).collect();
        }
        Ok(deps)
    }

    fn structure(&self, root: &Path) -> KickstartResult<Vec<StructureSection>> {
        let mut sections = Vec::new();

        for folder in [APP_DIR, TESTS_DIR] {
            let dir = root.join(folder);
            if !self.filesystem.exists(&dir) {
                continue;
            }
            let files = self
                .filesystem
                .list_files(&dir)?
                .into_iter()
                .filter(|f| f.extension().is_some_and(|ext| ext == SOURCE_EXTENSION))
                .map(|f| f.to_string_lossy().replace('\\', "/"));
            sections.push(StructureSection::new(folder, files));
        }

        if sections.is_empty() {
            sections = ReportData::fallback_structure();
        }
        Ok(sections)
    }

    fn issues(&self, root: &Path) -> Vec<String> {
        ISSUE_CHECKS
            .iter()
            .filter(|(path, _)| !self.filesystem.exists(&root.join(path)))
            .map(|(_, message)| message.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;

    fn fs_with(existing: &'static [&'static str]) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(move |p| existing.iter().any(|e| p.ends_with(e)));
        fs
    }

    #[test]
    fn empty_tree_reports_five_issues_in_order() {
        let service = ReportService::new(Arc::new(fs_with(&[])));
        let data = service.collect(Path::new("/p/demo")).unwrap();
        assert_eq!(
            data.issues,
            vec![
                "No app/main.py file found",
                "No requirements.txt file found",
                "No .env.example file found",
                "No Dockerfile found",
                "No README.md file found",
            ]
        );
        assert_eq!(data.dependencies, vec!["fastapi", "uvicorn"]);
        assert_eq!(data.structure, ReportData::fallback_structure());
        assert!(data.routes.is_empty());
    }

    #[test]
    fn health_file_alone_yields_health_route_only() {
        let mut fs = fs_with(&[HEALTH_ROUTE, APP_DIR]);
        fs.expect_list_files()
            .returning(|_| Ok(vec![PathBuf::from("api/v1/health.py")]));
        let service = ReportService::new(Arc::new(fs));
        let data = service.collect(Path::new("/p/demo")).unwrap();
        assert_eq!(data.routes, vec![Route::get("/api/v1/health/", "Health check endpoint")]);
    }

    #[test]
    fn entry_point_without_health_yields_docs_routes() {
        let mut fs = fs_with(&[ENTRY_POINT, APP_DIR]);
        fs.expect_list_files()
            .returning(|_| Ok(vec![PathBuf::from("main.py")]));
        let service = ReportService::new(Arc::new(fs));
        let paths: Vec<String> = service
            .collect(Path::new("/p/demo"))
            .unwrap()
            .routes
            .into_iter()
            .map(|r| r.path)
            .collect();
        assert_eq!(paths, vec!["/", "/docs", "/redoc"]);
    }

    #[test]
    fn pyproject_adds_manual_check_note() {
        let mut fs = fs_with(&[MANIFEST, PYPROJECT]);
        fs.expect_read_to_string()
            .returning(|_| Ok("fastapi==0.104.1\n# dev\n".into()));
        let service = ReportService::new(Arc::new(fs));
        let data = service.collect(Path::new("/p/demo")).unwrap();
        assert_eq!(data.dependencies, vec!["fastapi==0.104.1", PYPROJECT_NOTE]);
    }

    #[test]
    fn generate_writes_report_at_root() {
        let mut fs = fs_with(&[]);
        fs.expect_write_file()
            .withf(|p, content| {
                p == Path::new("/p/demo/ONBOARDING_REPORT.md")
                    && content.starts_with("# Onboarding Report for demo")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let service = ReportService::new(Arc::new(fs));
        let path = service.generate(Path::new("/p/demo")).unwrap();
        assert_eq!(path, PathBuf::from("/p/demo/ONBOARDING_REPORT.md"));
    }
}
