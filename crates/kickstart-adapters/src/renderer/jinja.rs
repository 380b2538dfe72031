//! MiniJinja-backed renderer.

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use tracing::{instrument, trace};

use kickstart_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::KickstartResult,
};

/// Renderer using MiniJinja with strict undefined handling.
///
/// Any placeholder missing from the context is an error, template trailing
/// newlines are kept and nothing is auto-escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiniJinjaRenderer;

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        Self
    }

    fn environment<'s>() -> Environment<'s> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    #[instrument(skip(self, source, context))]
    fn render(&self, name: &str, source: &str, context: &RenderContext) -> KickstartResult<String> {
        let failed = |e: minijinja::Error| ApplicationError::RenderingFailed {
            template: name.to_string(),
            reason: e.to_string(),
        };

        let mut env = Self::environment();
        env.add_template(name, source).map_err(failed)?;
        let template = env.get_template(name).map_err(failed)?;
        let rendered = template.render(context.variables()).map_err(failed)?;

        trace!(bytes = rendered.len(), "Rendered");
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use kickstart_core::error::KickstartError;

    use super::*;

    fn render(source: &str) -> KickstartResult<String> {
        MiniJinjaRenderer::new().render("t.txt", source, &RenderContext::new("demo"))
    }

    #[test]
    fn substitutes_project_name() {
        assert_eq!(render("# {{ project_name }}").unwrap(), "# demo");
    }

    #[test]
    fn keeps_trailing_newline() {
        assert_eq!(render("name={{ project_name }}\n").unwrap(), "name=demo\n");
    }

    #[test]
    fn unknown_placeholder_is_an_error() {
        let err = render("{{ database_url }}").unwrap_err();
        match err {
            KickstartError::Application(ApplicationError::RenderingFailed { template, .. }) => {
                assert_eq!(template, "t.txt");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn html_like_names_are_not_escaped() {
        let out = MiniJinjaRenderer::new()
            .render(
                "index.html",
                "{{ project_name }}",
                &RenderContext::new("<demo>"),
            )
            .unwrap();
        assert_eq!(out, "<demo>");
    }

    #[test]
    fn python_braces_pass_through() {
        let src = "logger.error(f\"Unhandled exception: {exc}\")\n";
        assert_eq!(render(src).unwrap(), src);
    }
}
