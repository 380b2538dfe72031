//! `test-init`, `setup-database` and `docker-setup` on an existing project.
//!
//! The project name used for rendering is the project directory's name.

use std::path::{Path, PathBuf};

use tracing::instrument;

use kickstart_core::{
    application::{DockerSetup, ScaffoldService, project_name_of},
    domain::RenderContext,
};

use crate::{
    cli::GlobalArgs, commands, config::AppConfig, error::CliResult, output::OutputManager,
};

struct Project {
    root: PathBuf,
    context: RenderContext,
    service: ScaffoldService,
}

impl Project {
    fn open(global: &GlobalArgs, config: &AppConfig) -> CliResult<Self> {
        let root = commands::project_root(&global.path)?;
        Ok(Self {
            context: RenderContext::new(project_name_of(&root)),
            service: ScaffoldService::new(
                commands::template_service(config)?,
                commands::local_filesystem(),
            ),
            root,
        })
    }
}

#[instrument(skip_all)]
pub fn test_init(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let project = Project::open(&global, &config)?;
    let written = project.service.setup_tests(&project.root, &project.context)?;

    output.success("Async test support and example tests set up.")?;
    list_written(&project.root, &written, &output)?;
    output.print("Run 'pytest' to execute the suite.")?;
    Ok(())
}

#[instrument(skip_all)]
pub fn setup_database(
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let project = Project::open(&global, &config)?;
    let written = project
        .service
        .setup_migrations(&project.root, &project.context)?;

    output.success("Database setup completed successfully.")?;
    list_written(&project.root, &written, &output)?;
    output.print("Run 'alembic upgrade head' to apply migrations.")?;
    Ok(())
}

#[instrument(skip_all)]
pub fn docker_setup(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let project = Project::open(&global, &config)?;

    match project
        .service
        .setup_docker(&project.root, &project.context)?
    {
        DockerSetup::AlreadyPresent(path) => {
            output.warning(&format!("Dockerfile already exists at {}.", path.display()))?;
        }
        DockerSetup::Created(written) => {
            output.success("Docker configuration created successfully.")?;
            list_written(&project.root, &written, &output)?;
            output.print("Run 'docker build -t app .' to build the image.")?;
            output.print("Run 'docker-compose up' to start the services.")?;
        }
    }
    Ok(())
}

fn list_written(root: &Path, written: &[PathBuf], output: &OutputManager) -> CliResult<()> {
    for path in written {
        let shown = path.strip_prefix(root).unwrap_or(path);
        output.print(&format!("  {}", shown.display()))?;
    }
    Ok(())
}
