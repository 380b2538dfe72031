//! Template Service - lookup plus rendering.
//!
//! Wraps the template store and the renderer: given a template name and a
//! render context it returns the final file text. Literal templates bypass
//! the renderer entirely.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::ports::{TemplateRenderer, TemplateStore},
    domain::{RenderContext, Template},
    error::KickstartResult,
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub name: String,
    pub kind: &'static str,
    pub bytes: usize,
}

impl From<&Template> for TemplateInfo {
    fn from(t: &Template) -> Self {
        Self {
            name: t.name().to_string(),
            kind: if t.is_literal() { "literal" } else { "rendered" },
            bytes: t.text().len(),
        }
    }
}

/// Service for template operations.
#[derive(Clone)]
pub struct TemplateService {
    store: Arc<dyn TemplateStore>,
    renderer: Arc<dyn TemplateRenderer>,
}

impl TemplateService {
    pub fn new(store: Arc<dyn TemplateStore>, renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self { store, renderer }
    }

    /// Render the template called `name`.
    ///
    /// # Errors
    /// - `TemplateNotFound` if the store has no such entry
    /// - `RenderingFailed` if substitution fails
    #[instrument(skip(self, context), fields(project = %context.project_name()))]
    pub fn render(&self, name: &str, context: &RenderContext) -> KickstartResult<String> {
        let template = self.store.get(name)?;

        if template.is_literal() {
            debug!("Literal template, copied verbatim");
            return Ok(template.text().to_string());
        }

        self.renderer.render(template.name(), template.text(), context)
    }

    /// List all templates, sorted by name.
    pub fn list(&self) -> KickstartResult<Vec<TemplateInfo>> {
        Ok(self.store.list()?.iter().map(TemplateInfo::from).collect())
    }
}
