//! Domain and use cases of the Kickstart FastAPI scaffolder.
//!
//! Ports and adapters: the CLI drives the services, the services reach the
//! disk, the template engine and `pip` only through traits.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          kickstart-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Scaffold, Patch, Inspect, Report)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Store, Renderer, Filesystem, Checker)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    kickstart-adapters (Infrastructure)  │
//! │ (InMemoryStore, MiniJinjaRenderer, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Layout, SourcePatch, ReportData, ...)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::{path::Path, sync::Arc};
//! use kickstart_core::prelude::*;
//!
//! let templates = TemplateService::new(store, renderer);
//! let service = ScaffoldService::new(templates, filesystem);
//! let root = service.create(Path::new("."), "demo")?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// What the CLI and the adapters import.
pub mod prelude {
    pub use crate::application::{
        InspectService, PatchService, ReportService, ScaffoldService, TemplateService,
        ports::{Filesystem, PackageAvailabilityChecker, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        Addon, PatchOutcome, RenderContext, ReportData, SourcePatch, Template, TemplateContent,
        TemplateSource,
    };
    pub use crate::error::{KickstartError, KickstartResult};
}
