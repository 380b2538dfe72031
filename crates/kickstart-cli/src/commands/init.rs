//! `kickstart init <name>`: scaffold a fresh project under `--path`.

use tracing::{debug, info, instrument};

use kickstart_core::application::{ScaffoldPlan, ScaffoldService};

use crate::{
    cli::{GlobalArgs, InitArgs},
    commands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// With `--dry-run` only the plan is printed. Otherwise the user confirms
/// (unless `--yes`) and the tree is written under a spinner.
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    validate_project_name(&args.name)?;
    let parent = commands::project_root(&global.path)?;

    let service = ScaffoldService::new(
        commands::template_service(&config)?,
        commands::local_filesystem(),
    );

    let plan = service.plan(&parent, &args.name);
    debug!(
        directories = plan.directories.len(),
        files = plan.files.len(),
        "Scaffold planned"
    );

    if args.dry_run {
        show_plan(&plan, &output)?;
        return Ok(());
    }

    if !args.yes {
        output.info(&format!(
            "Creating '{}' at {}",
            args.name,
            plan.root.display()
        ))?;
        if !output.confirm("Continue?")? {
            return Err(CliError::Cancelled);
        }
    }

    info!(path = %plan.root.display(), "Scaffold started");
    let spinner = output.spinner(&format!("Creating '{}'...", args.name));
    let result = service.create(&parent, &args.name);
    spinner.finish_and_clear();
    let project_path = result?;

    output.success(&format!("Project created at: {}", project_path.display()))?;

    let features = feature_descriptions(&args);
    if !features.is_empty() {
        output.print("Enhanced features included:")?;
        for feature in features {
            output.print(&format!("  - {feature}"))?;
        }
    }

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", args.name))?;
    output.print("  pip install -r requirements.txt")?;
    output.print("  uvicorn app.main:app --reload")?;

    Ok(())
}

/// The name becomes exactly one directory under `--path`.
fn validate_project_name(name: &str) -> CliResult<()> {
    let reason = if name.is_empty() {
        "name cannot be empty"
    } else if name.starts_with('.') {
        "name cannot start with '.'"
    } else if name.contains(['/', '\\']) {
        "name cannot contain path separators"
    } else {
        return Ok(());
    };

    Err(CliError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    })
}

fn feature_descriptions(args: &InitArgs) -> Vec<&'static str> {
    args.features()
        .into_iter()
        .map(|feature| match feature {
            "database" => "Database setup with SQLAlchemy and Alembic",
            "auth" => "JWT authentication system",
            "docker" => "Docker and Docker Compose configuration",
            _ => "Comprehensive test setup",
        })
        .collect()
}

fn show_plan(plan: &ScaffoldPlan, out: &OutputManager) -> CliResult<()> {
    out.info(&format!("Dry run: would create {}", plan.root.display()))?;

    out.header("Directories")?;
    for dir in &plan.directories {
        out.print(&format!("  {}", relative(plan, dir)))?;
    }

    out.header("Files")?;
    for file in &plan.files {
        out.print(&format!("  {}", relative(plan, file)))?;
    }
    Ok(())
}

fn relative(plan: &ScaffoldPlan, path: &std::path::Path) -> String {
    path.strip_prefix(&plan.root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_args(name: &str) -> InitArgs {
        InitArgs {
            name: name.into(),
            with_database: false,
            with_auth: false,
            with_docker: false,
            with_tests: false,
            yes: true,
            dry_run: false,
        }
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            validate_project_name(""),
            Err(CliError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn dotfile_name_is_invalid() {
        assert!(matches!(
            validate_project_name(".hidden"),
            Err(CliError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn path_separator_in_name_is_invalid() {
        assert!(validate_project_name("a/b").is_err());
        assert!(validate_project_name("a\\b").is_err());
    }

    #[test]
    fn valid_names_pass() {
        for name in &["my-project", "my_app", "project123", "MyApp", "kickstart"] {
            assert!(validate_project_name(name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn no_flags_means_no_features() {
        assert!(feature_descriptions(&init_args("demo")).is_empty());
    }

    #[test]
    fn feature_descriptions_follow_flag_order() {
        let mut args = init_args("demo");
        args.with_tests = true;
        args.with_auth = true;
        assert_eq!(
            feature_descriptions(&args),
            vec!["JWT authentication system", "Comprehensive test setup"]
        );
    }
}
