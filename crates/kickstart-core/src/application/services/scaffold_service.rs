//! Project scaffolding: skeleton, file emission and the later setup steps.
//!
//! `create` runs, in order:
//! 1. Check that the project root does not exist yet
//! 2. Build the directory skeleton with package markers
//! 3. Emit every file of the file mapping
//! 4. Write the Alembic migration files
//!
//! The later add-on operations (`setup_tests`, `setup_docker`,
//! `setup_migrations` on an existing project) reuse the same emitter.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        error::Phase,
        ports::Filesystem,
        services::TemplateService,
    },
    domain::{
        FileMapping, RenderContext,
        layout::{
            self, CONTAINER_FILE, DOCKER_FILES, FILE_MAPPING, MIGRATION_FILES, PACKAGE_MARKER,
            PROJECT_DIRECTORIES, TEST_SUITE_FILES,
        },
    },
    error::{KickstartError, KickstartResult},
};

/// What `create` would write, for dry runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Result of `setup_docker`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockerSetup {
    Created(Vec<PathBuf>),
    /// A `Dockerfile` was already there; nothing written.
    AlreadyPresent(PathBuf),
}

/// Main scaffolding service.
#[derive(Clone)]
pub struct ScaffoldService {
    templates: TemplateService,
    filesystem: Arc<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(templates: TemplateService, filesystem: Arc<dyn Filesystem>) -> Self {
        Self {
            templates,
            filesystem,
        }
    }

    /// Create a new project at `parent/project_name`.
    ///
    /// Fails with `ProjectExists` before touching the disk when the root is
    /// already there. If a later step fails the freshly created root is
    /// removed on a best-effort basis and the original error returned.
    #[instrument(
        skip_all,
        fields(
            project = %project_name,
            parent = %parent.display()
        )
    )]
    pub fn create(&self, parent: &Path, project_name: &str) -> KickstartResult<PathBuf> {
        let root = parent.join(project_name);

        if self.filesystem.exists(&root) {
            return Err(ApplicationError::ProjectExists { path: root }.into());
        }

        let context = RenderContext::new(project_name);

        match self.create_all(&root, &context) {
            Ok(()) => {
                info!(path = %root.display(), "Project created");
                Ok(root)
            }
            Err(e) => {
                warn!("Scaffold failed, attempting rollback");
                self.rollback(&root);
                Err(e)
            }
        }
    }

    /// Everything `create` would produce, without writing.
    pub fn plan(&self, parent: &Path, project_name: &str) -> ScaffoldPlan {
        let root = parent.join(project_name);

        let directories = PROJECT_DIRECTORIES
            .iter()
            .map(|d| root.join(d))
            .collect();

        let markers = PROJECT_DIRECTORIES
            .iter()
            .filter(|d| layout::needs_package_marker(d))
            .map(|d| root.join(d).join(PACKAGE_MARKER));

        let files = markers
            .chain(
                FILE_MAPPING
                    .iter()
                    .chain(MIGRATION_FILES)
                    .map(|m| root.join(m.destination)),
            )
            .collect();

        ScaffoldPlan {
            root,
            directories,
            files,
        }
    }

    /// Tree Builder: create `root`, the fixed skeleton and package markers.
    ///
    /// Existing directories are accepted. Markers are never truncated.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn build_tree(&self, root: &Path) -> KickstartResult<()> {
        self.filesystem
            .create_dir_all(root)
            .map_err(|e| phase_error(Phase::TreeBuilding, root, e))?;

        for dir in PROJECT_DIRECTORIES {
            let path = root.join(dir);
            self.filesystem
                .create_dir_all(&path)
                .map_err(|e| phase_error(Phase::TreeBuilding, &path, e))?;

            if layout::needs_package_marker(dir) {
                let marker = path.join(PACKAGE_MARKER);
                self.filesystem
                    .touch(&marker)
                    .map_err(|e| phase_error(Phase::TreeBuilding, &marker, e))?;
            }
        }

        debug!(directories = PROJECT_DIRECTORIES.len(), "Skeleton created");
        Ok(())
    }

    /// File Emitter: render and write every entry of the file mapping.
    ///
    /// Stops at the first failure. Files written before it stay on disk.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn emit(&self, root: &Path, context: &RenderContext) -> KickstartResult<Vec<PathBuf>> {
        self.write_mappings(root, FILE_MAPPING, context, Phase::FileGeneration)
    }

    /// Migration Scaffolder: `alembic.ini`, `migrations/env.py` and the
    /// literal `migrations/script.py.mako`.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn setup_migrations(
        &self,
        root: &Path,
        context: &RenderContext,
    ) -> KickstartResult<Vec<PathBuf>> {
        let versions = root.join("migrations").join("versions");
        self.filesystem
            .create_dir_all(&versions)
            .map_err(|e| phase_error(Phase::MigrationSetup, &versions, e))?;

        self.write_mappings(root, MIGRATION_FILES, context, Phase::MigrationSetup)
    }

    /// Write the example async test suite, replacing existing files.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn setup_tests(&self, root: &Path, context: &RenderContext) -> KickstartResult<Vec<PathBuf>> {
        for dir in [layout::TESTS_DIR, "tests/api"] {
            let marker = root.join(dir).join(PACKAGE_MARKER);
            self.filesystem
                .create_dir_all(&root.join(dir))
                .and_then(|()| self.filesystem.touch(&marker))
                .map_err(|e| phase_error(Phase::TestSetup, &marker, e))?;
        }

        self.write_mappings(root, TEST_SUITE_FILES, context, Phase::TestSetup)
    }

    /// Write the container files unless a `Dockerfile` already exists.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn setup_docker(&self, root: &Path, context: &RenderContext) -> KickstartResult<DockerSetup> {
        let dockerfile = root.join(CONTAINER_FILE);
        if self.filesystem.exists(&dockerfile) {
            info!("Dockerfile already present, leaving container setup alone");
            return Ok(DockerSetup::AlreadyPresent(dockerfile));
        }

        let written = self.write_mappings(root, DOCKER_FILES, context, Phase::DockerSetup)?;
        Ok(DockerSetup::Created(written))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn create_all(&self, root: &Path, context: &RenderContext) -> KickstartResult<()> {
        self.build_tree(root)?;
        let emitted = self.emit(root, context)?;
        let migrations = self.setup_migrations(root, context)?;
        debug!(
            files = emitted.len() + migrations.len(),
            "All files written"
        );
        Ok(())
    }

    fn write_mappings(
        &self,
        root: &Path,
        mappings: &[FileMapping],
        context: &RenderContext,
        phase: Phase,
    ) -> KickstartResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(mappings.len());

        for mapping in mappings {
            let path = root.join(mapping.destination);

            let content = self
                .templates
                .render(mapping.template, context)
                .map_err(|e| phase_error(phase, &path, e))?;

            if let Some(parent) = path.parent() {
                self.filesystem
                    .create_dir_all(parent)
                    .map_err(|e| phase_error(phase, &path, e))?;
            }

            self.filesystem
                .write_file(&path, &content)
                .map_err(|e| phase_error(phase, &path, e))?;

            debug!(template = mapping.template, path = %path.display(), "Wrote file");
            written.push(path);
        }

        Ok(written)
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if !self.filesystem.exists(root) {
            return;
        }
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            let failure = ApplicationError::RollbackFailed {
                path: root.to_path_buf(),
                reason: e.to_string(),
            };
            warn!(error = %failure, "Rollback failed");
        } else {
            info!("Rollback successful");
        }
    }
}

fn phase_error(phase: Phase, path: &Path, source: KickstartError) -> KickstartError {
    ApplicationError::GenerationFailed {
        phase,
        path: path.to_path_buf(),
        reason: source.to_string(),
    }
    .into()
}
