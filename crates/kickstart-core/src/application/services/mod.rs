//! One service per family of commands: scaffolding, patching, inspection,
//! reports. Template lookup and rendering sit in [`TemplateService`].

use std::path::Path;

pub mod inspect_service;
pub mod patch_service;
pub mod report_service;
pub mod scaffold_service;
pub mod template_service;

pub use inspect_service::InspectService;
pub use patch_service::{AddonReport, EntryPointStatus, PatchService};
pub use report_service::ReportService;
pub use scaffold_service::{DockerSetup, ScaffoldPlan, ScaffoldService};
pub use template_service::{TemplateInfo, TemplateService};

/// Project name used when rendering into an existing project: the root's
/// directory name.
pub fn project_name_of(root: &Path) -> String {
    root.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("app")
        .to_string()
}
