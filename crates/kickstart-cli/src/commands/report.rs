//! `kickstart onboarding-report`.

use tracing::instrument;

use kickstart_core::application::ReportService;

use crate::{cli::GlobalArgs, commands, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let root = commands::project_root(&global.path)?;
    let path = ReportService::new(commands::local_filesystem()).generate(&root)?;

    output.success(&format!(
        "Onboarding report generated at: {}",
        path.display()
    ))?;
    Ok(())
}
