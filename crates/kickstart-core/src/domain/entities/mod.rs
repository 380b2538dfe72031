pub mod report;
pub mod template;

pub use crate::domain::DomainError;
pub use report::{ReportData, Route, StructureSection};
pub use template::{RenderContext, Template, TemplateContent, TemplateSource};
