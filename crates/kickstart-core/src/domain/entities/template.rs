//! Template entries and the render context.
//!
//! A [`Template`] is a named piece of text that becomes one generated file.
//! Most templates carry `{{ variable }}` placeholders and are rendered against
//! a [`RenderContext`]; a few (Alembic's `script.py.mako`) contain syntax that
//! looks like placeholders but belongs to another engine, so they are marked
//! [`TemplateContent::Literal`] and emitted byte-for-byte.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::error::DomainError;

/// The variable every template may reference.
pub const PROJECT_NAME_VAR: &str = "project_name";

/// Where a template's text lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compiled into the binary.
    Static(&'static str),
    /// Loaded at startup from an override directory.
    Owned(String),
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s.as_str(),
        }
    }
}

/// How the template text becomes file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateContent {
    /// Written unchanged. Never handed to the renderer.
    Literal(TemplateSource),
    /// Rendered against a [`RenderContext`].
    Parameterized(TemplateSource),
}

impl TemplateContent {
    pub fn source(&self) -> &TemplateSource {
        match self {
            Self::Literal(s) | Self::Parameterized(s) => s,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

/// A named template held by the template store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    content: TemplateContent,
}

impl Template {
    /// A template whose text goes through the renderer.
    pub fn parameterized(name: impl Into<String>, source: TemplateSource) -> Self {
        Self {
            name: name.into(),
            content: TemplateContent::Parameterized(source),
        }
    }

    /// A template whose text is copied verbatim.
    pub fn literal(name: impl Into<String>, source: TemplateSource) -> Self {
        Self {
            name: name.into(),
            content: TemplateContent::Literal(source),
        }
    }

    /// Same kind of template, different text. Used when an override replaces
    /// a built-in: a literal built-in stays literal.
    pub fn with_source(&self, source: TemplateSource) -> Self {
        let content = match self.content {
            TemplateContent::Literal(_) => TemplateContent::Literal(source),
            TemplateContent::Parameterized(_) => TemplateContent::Parameterized(source),
        };
        Self {
            name: self.name.clone(),
            content,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &TemplateContent {
        &self.content
    }

    pub fn text(&self) -> &str {
        self.content.source().as_str()
    }

    pub fn is_literal(&self) -> bool {
        self.content.is_literal()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidTemplate(
                "template name cannot be empty".into(),
            ));
        }
        if self.name.contains('/') || self.name.contains('\\') {
            return Err(DomainError::InvalidTemplate(format!(
                "template name '{}' must not contain path separators",
                self.name
            )));
        }
        if self.text().trim().is_empty() {
            return Err(DomainError::EmptyTemplate {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_literal() { "literal" } else { "rendered" };
        write!(f, "{} ({})", self.name, kind)
    }
}

/// Variables available to a render.
///
/// `project_name` is always present. Further variables can be attached with
/// [`RenderContext::with_variable`]:
///
/// ```rust
/// use kickstart_core::domain::RenderContext;
///
/// let ctx = RenderContext::new("demo").with_variable("python_version", "3.11");
/// assert_eq!(ctx.get("project_name"), Some("demo"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        let mut variables = BTreeMap::new();
        variables.insert(PROJECT_NAME_VAR.to_string(), project_name.into());
        Self { variables }
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn project_name(&self) -> &str {
        self.get(PROJECT_NAME_VAR).unwrap_or_default()
    }

    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }
}
