//! The fixed shape of a generated FastAPI project.
//!
//! Everything here is static data: which directories exist, which template
//! lands at which relative path, and the well-known files the inspector and
//! report generator look for.

/// Empty file that marks a directory as a Python package.
pub const PACKAGE_MARKER: &str = "__init__.py";

/// Directories created under the project root, parents before children.
pub const PROJECT_DIRECTORIES: &[&str] = &[
    "app",
    "app/api",
    "app/api/v1",
    "app/core",
    "app/models",
    "app/schemas",
    "app/services",
    "app/utils",
    "tests",
    "tests/api",
    "tests/utils",
    "tests/core",
    "tests/models",
    "scripts",
    "docs",
    "logs",
    "migrations",
    "migrations/versions",
];

/// Whether a directory gets a [`PACKAGE_MARKER`].
///
/// The check is a plain prefix test on the relative path.
pub fn needs_package_marker(relative_dir: &str) -> bool {
    relative_dir.starts_with("app") || relative_dir.starts_with("tests")
}

/// One (template name → destination) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMapping {
    pub template: &'static str,
    pub destination: &'static str,
}

const fn map(template: &'static str, destination: &'static str) -> FileMapping {
    FileMapping {
        template,
        destination,
    }
}

/// Files written by the emitter, in emission order.
pub const FILE_MAPPING: &[FileMapping] = &[
    map("main.py", "app/main.py"),
    map("config.py", "app/core/config.py"),
    map("database.py", "app/core/database.py"),
    map("auth.py", "app/core/auth.py"),
    map("logging.py", "app/core/logging.py"),
    map("middleware.py", "app/core/middleware.py"),
    map("models.py", "app/models/models.py"),
    map("schemas.py", "app/schemas/schemas.py"),
    map("router.py", "app/api/v1/router.py"),
    map("health.py", "app/api/v1/health.py"),
    map("auth_router.py", "app/api/v1/auth_router.py"),
    map("requirements.txt", "requirements.txt"),
    map("README.md", "README.md"),
    map("Dockerfile", "Dockerfile"),
    map("docker-compose.yml", "docker-compose.yml"),
    map(".env.example", ".env.example"),
    map("pytest.ini", "pytest.ini"),
    map(".gitignore", ".gitignore"),
    map("Makefile", "Makefile"),
    map("requirements-dev.txt", "requirements-dev.txt"),
    map(".pre-commit-config.yaml", ".pre-commit-config.yaml"),
];

/// Alembic files written by the migration scaffolder.
pub const MIGRATION_FILES: &[FileMapping] = &[
    map("alembic.ini", "alembic.ini"),
    map("alembic_env.py", "migrations/env.py"),
    map("script.py.mako", "migrations/script.py.mako"),
];

/// Test suite written by `test-init`.
pub const TEST_SUITE_FILES: &[FileMapping] = &[
    map("conftest.py", "tests/conftest.py"),
    map("test_main.py", "tests/test_main.py"),
    map("test_health.py", "tests/api/test_health.py"),
    map("pytest.ini", "pytest.ini"),
];

/// Container files written by `docker-setup`.
pub const DOCKER_FILES: &[FileMapping] = &[
    map("Dockerfile", "Dockerfile"),
    map("docker-compose.yml", "docker-compose.yml"),
];

// ── well-known paths ─────────────────────────────────────────────────────────

pub const APP_DIR: &str = "app";
pub const TESTS_DIR: &str = "tests";
pub const ENTRY_POINT: &str = "app/main.py";
pub const HEALTH_ROUTE: &str = "app/api/v1/health.py";
pub const MANIFEST: &str = "requirements.txt";
pub const PYPROJECT: &str = "pyproject.toml";
pub const ENV_FILE: &str = ".env";
pub const ENV_EXAMPLE: &str = ".env.example";
pub const CONTAINER_FILE: &str = "Dockerfile";
pub const README: &str = "README.md";
pub const REPORT_FILE: &str = "ONBOARDING_REPORT.md";

/// Extension of the source files listed and linted.
pub const SOURCE_EXTENSION: &str = "py";
