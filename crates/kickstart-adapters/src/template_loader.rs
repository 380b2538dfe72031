//! Filesystem-based template overrides.
//!
//! An override directory holds files named after built-in templates. Each
//! file found replaces the built-in text of the same name; the built-in's
//! literal/rendered kind is kept. Files with names no built-in uses are
//! skipped with a warning.
//!
//! # Directory layout expected
//!
//! ```text
//! my-templates/
//! ├── main.py
//! ├── README.md
//! └── Dockerfile
//! ```
//!
//! Only the top level is read; subdirectories are ignored.

use std::{collections::HashMap, fs, path::Path};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use kickstart_core::domain::{DomainError, Template, TemplateSource};

/// Apply every override found in `dir` to `templates`.
///
/// # Errors
/// `InvalidTemplate` if the directory cannot be walked or a file cannot be
/// read as UTF-8.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn apply_overrides(
    templates: &mut HashMap<String, Template>,
    dir: &Path,
) -> Result<usize, DomainError> {
    if !dir.is_dir() {
        return Err(DomainError::InvalidTemplate(format!(
            "override directory '{}' does not exist",
            dir.display()
        )));
    }

    let mut applied = 0;

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry =
            entry.map_err(|e| DomainError::InvalidTemplate(format!("directory walk error: {e}")))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let Some(builtin) = templates.get(&name) else {
            warn!(file = %name, "No built-in template with this name, skipping");
            continue;
        };

        let text = fs::read_to_string(entry.path()).map_err(|e| {
            DomainError::InvalidTemplate(format!("failed to read '{}': {e}", entry.path().display()))
        })?;

        let replaced = builtin.with_source(TemplateSource::Owned(text));
        replaced.validate()?;
        debug!(template = %name, "Override applied");
        templates.insert(name, replaced);
        applied += 1;
    }

    Ok(applied)
}
