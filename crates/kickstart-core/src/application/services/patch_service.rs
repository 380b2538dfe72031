//! Patch Service - wires middleware add-ons into an existing project.
//!
//! Two independent outputs per add-on: the module file is always written,
//! and `app/main.py` is patched only if it exists. The entry point is
//! written back only when the patch actually changed it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::Filesystem,
        services::{TemplateService, project_name_of},
    },
    domain::{Addon, PatchOutcome, RenderContext, SourcePatch, layout::ENTRY_POINT},
    error::KickstartResult,
};

/// What happened to the entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPointStatus {
    Missing,
    Patched(PatchOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonReport {
    pub addon: Addon,
    pub definition: PathBuf,
    pub entry_point: EntryPointStatus,
}

#[derive(Clone)]
pub struct PatchService {
    templates: TemplateService,
    filesystem: Arc<dyn Filesystem>,
}

impl PatchService {
    pub fn new(templates: TemplateService, filesystem: Arc<dyn Filesystem>) -> Self {
        Self {
            templates,
            filesystem,
        }
    }

    /// Write the add-on module and hook it into `app/main.py`.
    #[instrument(skip_all, fields(addon = %addon, root = %root.display()))]
    pub fn add(&self, root: &Path, addon: Addon) -> KickstartResult<AddonReport> {
        let context = RenderContext::new(project_name_of(root));

        let definition = root.join(addon.definition_path());
        let content = self.templates.render(addon.definition_template(), &context)?;
        if let Some(parent) = definition.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&definition, &content)?;
        debug!(path = %definition.display(), "Add-on module written");

        let entry_point = root.join(ENTRY_POINT);
        let status = if self.filesystem.is_file(&entry_point) {
            EntryPointStatus::Patched(self.inject(&entry_point, &addon.patch()?)?)
        } else {
            info!("No entry point, skipping patch");
            EntryPointStatus::Missing
        };

        Ok(AddonReport {
            addon,
            definition,
            entry_point: status,
        })
    }

    /// Apply `patch` to the file at `path`, writing only on change.
    #[instrument(skip_all, fields(path = %path.display(), anchor = patch.anchor()))]
    pub fn inject(&self, path: &Path, patch: &SourcePatch) -> KickstartResult<PatchOutcome> {
        let source = self.filesystem.read_to_string(path)?;
        let result = patch.apply(&source);

        if result.outcome.changed() {
            self.filesystem.write_file(path, &result.content)?;
        }

        info!(outcome = ?result.outcome, "Patch evaluated");
        Ok(result.outcome)
    }
}
