//! `env-check` and `async-check`: read-only project inspections.
//!
//! Findings are informational; both commands exit 0 whatever they find.

use std::sync::Arc;

use serde::Serialize;
use tracing::instrument;

use kickstart_adapters::PipPackageChecker;
use kickstart_core::application::InspectService;

use crate::{
    cli::GlobalArgs, commands, config::AppConfig, error::CliResult, output::OutputManager,
};

#[derive(Debug, Serialize)]
struct EnvCheckOutput<'a> {
    path: String,
    issues: &'a [String],
}

fn service(config: &AppConfig) -> InspectService {
    InspectService::new(
        commands::local_filesystem(),
        Arc::new(PipPackageChecker::new(config.checker.python.clone())),
    )
}

#[instrument(skip_all)]
pub fn env_check(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = commands::project_root(&global.path)?;
    let issues = service(&config).check(&root);

    if output.is_json() {
        return output.json(&EnvCheckOutput {
            path: root.display().to_string(),
            issues: &issues,
        });
    }

    if issues.is_empty() {
        output.success("No issues found in the environment.")?;
    } else {
        output.warning("Issues found in the environment:")?;
        for issue in &issues {
            output.print(&format!("- {issue}"))?;
        }
    }
    Ok(())
}

#[instrument(skip_all)]
pub fn async_check(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = commands::project_root(&global.path)?;
    let findings = service(&config).analyze_async(&root);

    if output.is_json() {
        return output.json(&findings);
    }

    if findings.is_empty() {
        output.success("No async issues found.")?;
        return Ok(());
    }

    output.warning("Async issues found:")?;
    for finding in &findings {
        output.header(&finding.file)?;
        for issue in &finding.issues {
            output.print(&format!("  - {issue}"))?;
        }
    }
    Ok(())
}
