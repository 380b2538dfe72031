//! Core domain layer for Kickstart.
//!
//! Pure data and logic with no I/O. Filesystem access, rendering and
//! package queries go through the ports defined in the application layer.
//!
//! - [`layout`]: directory skeleton and template-to-path mappings
//! - [`patch`]: anchor/guard line patcher
//! - [`addons`]: middleware add-ons expressed as patches
//! - [`manifest`]: `requirements.txt` parsing
//! - [`async_lint`]: async pitfall heuristics
//! - [`entities`]: templates, render context, report model
pub mod addons;
pub mod async_lint;
pub mod entities;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod patch;

pub use addons::Addon;
pub use async_lint::AsyncFinding;
pub use entities::{
    report::{ReportData, Route, StructureSection},
    template::{RenderContext, Template, TemplateContent, TemplateSource},
};
pub use error::{DomainError, ErrorCategory};
pub use layout::FileMapping;
pub use patch::{PatchOutcome, PatchResult, SourcePatch};
