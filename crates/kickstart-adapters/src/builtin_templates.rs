//! Built-in templates compiled into the binary.
//!
//! The texts live under `crates/kickstart-adapters/templates/` and are pulled
//! in with `include_str!`, so the release binary needs nothing on disk.
//! Every template is rendered except Alembic's `script.py.mako`, whose
//! `${...}` expressions belong to Mako and must reach disk unchanged.

use kickstart_core::domain::{Template, TemplateSource};

struct Builtin {
    name: &'static str,
    text: &'static str,
    literal: bool,
}

macro_rules! builtin {
    (literal $name:literal) => {
        Builtin {
            name: $name,
            text: include_str!(concat!("../templates/", $name)),
            literal: true,
        }
    };
    ($name:literal) => {
        Builtin {
            name: $name,
            text: include_str!(concat!("../templates/", $name)),
            literal: false,
        }
    };
}

const BUILTINS: &[Builtin] = &[
    // application package
    builtin!("main.py"),
    builtin!("config.py"),
    builtin!("database.py"),
    builtin!("auth.py"),
    builtin!("logging.py"),
    builtin!("middleware.py"),
    builtin!("models.py"),
    builtin!("schemas.py"),
    builtin!("router.py"),
    builtin!("health.py"),
    builtin!("auth_router.py"),
    // project files
    builtin!("requirements.txt"),
    builtin!("README.md"),
    builtin!("Dockerfile"),
    builtin!("docker-compose.yml"),
    builtin!(".env.example"),
    builtin!("pytest.ini"),
    builtin!(".gitignore"),
    builtin!("Makefile"),
    builtin!("requirements-dev.txt"),
    builtin!(".pre-commit-config.yaml"),
    // migrations
    builtin!("alembic.ini"),
    builtin!("alembic_env.py"),
    builtin!(literal "script.py.mako"),
    // add-ons
    builtin!("rate_limit.py"),
    builtin!("monitoring.py"),
    // test suite
    builtin!("conftest.py"),
    builtin!("test_main.py"),
    builtin!("test_health.py"),
];

/// All built-in templates, in declaration order.
pub fn all_templates() -> Vec<Template> {
    BUILTINS
        .iter()
        .map(|b| {
            let source = TemplateSource::Static(b.text);
            if b.literal {
                Template::literal(b.name, source)
            } else {
                Template::parameterized(b.name, source)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use kickstart_core::domain::{
        Addon,
        layout::{DOCKER_FILES, FILE_MAPPING, MIGRATION_FILES, TEST_SUITE_FILES},
    };

    use super::*;

    fn names() -> HashSet<&'static str> {
        BUILTINS.iter().map(|b| b.name).collect()
    }

    #[test]
    fn every_mapped_template_exists() {
        let names = names();
        for m in FILE_MAPPING
            .iter()
            .chain(MIGRATION_FILES)
            .chain(TEST_SUITE_FILES)
            .chain(DOCKER_FILES)
        {
            assert!(names.contains(m.template), "missing template {}", m.template);
        }
        for addon in Addon::ALL {
            assert!(names.contains(addon.definition_template()));
        }
    }

    #[test]
    fn names_are_unique_and_templates_valid() {
        assert_eq!(names().len(), BUILTINS.len());
        for t in all_templates() {
            t.validate().unwrap();
        }
    }

    #[test]
    fn only_the_mako_script_is_literal() {
        let literal: Vec<_> = all_templates()
            .into_iter()
            .filter(|t| t.is_literal())
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(literal, vec!["script.py.mako"]);
    }

    #[test]
    fn rendered_templates_use_only_project_name() {
        for t in all_templates().iter().filter(|t| !t.is_literal()) {
            let text = t.text();
            assert!(!text.contains("{%"), "{} has a block tag", t.name());
            assert!(!text.contains("{#"), "{} has a comment tag", t.name());
            for (i, _) in text.match_indices("{{") {
                assert!(
                    text[i..].starts_with("{{ project_name }}"),
                    "{} has an unexpected placeholder",
                    t.name()
                );
            }
        }
    }
}
