//! Use cases. Each service drives domain logic through the ports; nothing
//! here touches the disk or a subprocess directly.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    AddonReport, DockerSetup, EntryPointStatus, InspectService, PatchService, ReportService,
    ScaffoldPlan, ScaffoldService, TemplateInfo, TemplateService, project_name_of,
};

pub use ports::{Filesystem, PackageAvailabilityChecker, TemplateRenderer, TemplateStore};

pub use error::{ApplicationError, Phase};
