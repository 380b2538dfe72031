//! In-memory template store with built-in templates.

use std::{collections::HashMap, path::Path, sync::Arc};

use tracing::info;

use kickstart_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::Template,
    error::{KickstartError, KickstartResult},
};

use crate::{builtin_templates, template_loader};

/// Immutable name → template map, shared cheaply between services.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    inner: Arc<HashMap<String, Template>>,
}

impl InMemoryStore {
    /// Build a store from explicit templates. Later duplicates win.
    pub fn from_templates(templates: impl IntoIterator<Item = Template>) -> KickstartResult<Self> {
        let mut map = HashMap::new();
        for template in templates {
            template.validate().map_err(KickstartError::Domain)?;
            map.insert(template.name().to_string(), template);
        }
        Ok(Self {
            inner: Arc::new(map),
        })
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> KickstartResult<Self> {
        Self::from_templates(builtin_templates::all_templates())
    }

    /// Built-ins, with files from `dir` replacing those of the same name.
    pub fn with_overrides(dir: &Path) -> KickstartResult<Self> {
        let mut map: HashMap<String, Template> = builtin_templates::all_templates()
            .into_iter()
            .map(|t| (t.name().to_string(), t))
            .collect();

        let applied = template_loader::apply_overrides(&mut map, dir)?;
        info!(dir = %dir.display(), applied, "Template overrides loaded");

        Self::from_templates(map.into_values())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, name: &str) -> KickstartResult<Template> {
        self.inner.get(name).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    fn list(&self) -> KickstartResult<Vec<Template>> {
        let mut templates: Vec<Template> = self.inner.values().cloned().collect();
        templates.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(templates)
    }
}
