//! `add-error-middleware`, `add-rate-limiting` and `add-monitoring`.

use tracing::instrument;

use kickstart_core::{
    application::{AddonReport, EntryPointStatus, PatchService},
    domain::{Addon, PatchOutcome},
};

use crate::{
    cli::GlobalArgs, commands, config::AppConfig, error::CliResult, output::OutputManager,
};

#[instrument(skip_all, fields(addon = %addon))]
pub fn execute(
    addon: Addon,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = commands::project_root(&global.path)?;
    let service = PatchService::new(
        commands::template_service(&config)?,
        commands::local_filesystem(),
    );

    let report = service.add(&root, addon)?;
    print_report(&report, &output)
}

fn print_report(report: &AddonReport, output: &OutputManager) -> CliResult<()> {
    output.success(&format!("{} added.", label(report.addon)))?;
    output.info(&format!("Module written to {}", report.definition.display()))?;

    match report.entry_point {
        EntryPointStatus::Patched(PatchOutcome::Applied) => {
            output.info("app/main.py updated.")?;
        }
        EntryPointStatus::Patched(PatchOutcome::AlreadyApplied) => {
            output.info("app/main.py already wires it in; left unchanged.")?;
        }
        EntryPointStatus::Patched(PatchOutcome::AnchorNotFound) => {
            output.warning(&format!(
                "Could not find an insertion point in app/main.py. {}",
                manual_hint(report.addon)
            ))?;
        }
        EntryPointStatus::Missing => {
            output.warning(&format!("No app/main.py found. {}", manual_hint(report.addon)))?;
        }
    }
    Ok(())
}

fn label(addon: Addon) -> &'static str {
    match addon {
        Addon::ErrorMiddleware => "Error middleware",
        Addon::RateLimiting => "Rate limiting middleware",
        Addon::Monitoring => "Monitoring configuration",
    }
}

fn manual_hint(addon: Addon) -> &'static str {
    match addon {
        Addon::ErrorMiddleware => "Add app.add_middleware(ErrorMiddleware) to your main.py",
        Addon::RateLimiting => "Import and use setup_rate_limiting() in your main.py",
        Addon::Monitoring => "Import and use setup_monitoring() in your main.py",
    }
}
