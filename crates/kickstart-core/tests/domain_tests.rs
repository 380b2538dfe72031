//! Cross-module checks on the pure domain layer.

use std::collections::HashSet;

use kickstart_core::domain::{Addon, PatchOutcome, async_lint, layout, manifest};

const MAIN: &str = "from fastapi import FastAPI\n\
from app.api.v1.router import api_router\n\
\n\
app = FastAPI(title=\"demo\")\n\
app.include_router(api_router, prefix=\"/api/v1\")\n";

fn line_of(text: &str, needle: &str) -> usize {
    text.lines()
        .position(|l| l.contains(needle))
        .unwrap_or_else(|| panic!("'{needle}' not found in:\n{text}"))
}

#[test]
fn all_addons_stack_on_one_entry_point() {
    let mut source = MAIN.to_string();
    for addon in Addon::ALL {
        let result = addon.patch().unwrap().apply(&source);
        assert_eq!(result.outcome, PatchOutcome::Applied, "{addon}");
        source = result.content;
    }

    assert_eq!(
        line_of(&source, "app.add_middleware(ErrorMiddleware)"),
        line_of(&source, "app = FastAPI(") + 1
    );
    assert_eq!(source.matches("setup_rate_limiting(app)").count(), 1);
    assert_eq!(source.matches("setup_monitoring(app)").count(), 1);
    assert!(source.starts_with("from fastapi import FastAPI\n"));
    assert!(source.ends_with('\n'));

    // a second pass is a no-op for every add-on
    for addon in Addon::ALL {
        let again = addon.patch().unwrap().apply(&source);
        assert_eq!(again.outcome, PatchOutcome::AlreadyApplied);
        assert_eq!(again.content, source);
    }
}

#[test]
fn addons_without_anchor_leave_text_alone() {
    let source = "print('not a fastapi app')\n";
    for addon in Addon::ALL {
        let result = addon.patch().unwrap().apply(source);
        assert_eq!(result.outcome, PatchOutcome::AnchorNotFound);
        assert_eq!(result.content, source);
    }
}

#[test]
fn mapped_files_land_in_known_directories() {
    let dirs: HashSet<&str> = layout::PROJECT_DIRECTORIES.iter().copied().collect();

    for mapping in layout::FILE_MAPPING
        .iter()
        .chain(layout::MIGRATION_FILES)
        .chain(layout::TEST_SUITE_FILES)
    {
        if let Some((parent, _)) = mapping.destination.rsplit_once('/') {
            assert!(dirs.contains(parent), "{} has no directory", mapping.destination);
        }
    }
}

#[test]
fn mapped_destinations_are_unique() {
    let mut seen = HashSet::new();
    for mapping in layout::FILE_MAPPING {
        assert!(seen.insert(mapping.destination), "duplicate {}", mapping.destination);
    }
}

#[test]
fn directories_are_listed_parents_first() {
    for (i, dir) in layout::PROJECT_DIRECTORIES.iter().enumerate() {
        if let Some((parent, _)) = dir.rsplit_once('/') {
            let parent_at = layout::PROJECT_DIRECTORIES
                .iter()
                .position(|d| *d == parent)
                .unwrap();
            assert!(parent_at < i, "{dir} listed before {parent}");
        }
    }
}

#[test]
fn addon_modules_live_under_app_core() {
    for addon in Addon::ALL {
        assert!(addon.definition_path().starts_with("app/core/"));
        assert!(addon.definition_path().ends_with(addon.definition_template()));
    }
}

#[test]
fn manifest_names_resolve() {
    let specs = manifest::parse_manifest(
        "fastapi>=0.100.0\n# server\nuvicorn[standard]==0.24.0\n\npython-jose[cryptography]\n",
    );
    let names: Vec<&str> = specs
        .iter()
        .map(|spec| manifest::requirement_name(spec))
        .collect();

    assert_eq!(names, vec!["fastapi", "uvicorn", "python-jose"]);
}

#[test]
fn async_lint_reports_both_pitfalls() {
    let issues = async_lint::analyze_source("import time\n\ndef job():\n    time.sleep(1)\n");
    assert_eq!(
        issues,
        vec![async_lint::BLOCKING_SLEEP, async_lint::SYNC_FUNCTION]
    );
    assert!(async_lint::analyze_source("async def ok():\n    pass\n").is_empty());
}
