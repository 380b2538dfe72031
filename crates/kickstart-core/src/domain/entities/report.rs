//! Onboarding report data and its Markdown rendering.

use serde::Serialize;

/// Dependencies listed when a project declares none.
pub const DEFAULT_DEPENDENCIES: &[&str] = &["fastapi", "uvicorn"];

/// Appended to the dependency list when a `pyproject.toml` is present.
pub const PYPROJECT_NOTE: &str = "pyproject.toml dependencies (check manually)";

/// An HTTP route the report believes the project exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub method: String,
    pub path: String,
    pub description: String,
}

impl Route {
    pub fn get(path: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            method: "GET".into(),
            path: path.into(),
            description: description.into(),
        }
    }
}

/// Source files found under one top-level folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureSection {
    pub folder: String,
    pub files: Vec<String>,
}

impl StructureSection {
    pub fn new<I, S>(folder: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            folder: folder.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

/// Everything the onboarding report shows, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportData {
    pub project_name: String,
    pub project_path: String,
    pub routes: Vec<Route>,
    pub dependencies: Vec<String>,
    pub structure: Vec<StructureSection>,
    pub issues: Vec<String>,
}

impl ReportData {
    /// Structure shown when neither `app/` nor `tests/` exists.
    pub fn fallback_structure() -> Vec<StructureSection> {
        vec![
            StructureSection::new("app", ["main.py", "api", "core", "models", "schemas"]),
            StructureSection::new("tests", ["test_main.py", "test_health.py"]),
        ]
    }

    /// Render the report as Markdown.
    ///
    /// Lines are joined with `\n` and the result has no trailing newline.
    pub fn to_markdown(&self) -> String {
        let mut lines: Vec<String> = vec![
            format!("# Onboarding Report for {}", self.project_name),
            format!("**Project Path:** {}", self.project_path),
            String::new(),
            "## Routes".into(),
        ];

        lines.extend(
            self.routes
                .iter()
                .map(|r| format!("- `{} {}`: {}", r.method, r.path, r.description)),
        );

        lines.push(String::new());
        lines.push("## Dependencies".into());
        lines.extend(self.dependencies.iter().map(|d| format!("- {d}")));

        lines.push(String::new());
        lines.push("## Project Structure".into());
        for section in &self.structure {
            lines.push(format!("### {}", section.folder));
            lines.extend(section.files.iter().map(|f| format!("- {f}")));
        }

        lines.push(String::new());
        lines.push("## Issues".into());
        if self.issues.is_empty() {
            lines.push("- No issues found".into());
        } else {
            lines.extend(self.issues.iter().map(|i| format!("- {i}")));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReportData {
        ReportData {
            project_name: "demo".into(),
            project_path: "/work/demo".into(),
            routes: vec![Route::get("/", "Root endpoint")],
            dependencies: vec!["fastapi".into()],
            structure: vec![StructureSection::new("app", ["main.py"])],
            issues: vec![],
        }
    }

    #[test]
    fn markdown_has_fixed_section_order() {
        let md = sample().to_markdown();
        let expected = "# Onboarding Report for demo\n\
                        **Project Path:** /work/demo\n\
                        \n\
                        ## Routes\n\
                        - `GET /`: Root endpoint\n\
                        \n\
                        ## Dependencies\n\
                        - fastapi\n\
                        \n\
                        ## Project Structure\n\
                        ### app\n\
                        - main.py\n\
                        \n\
                        ## Issues\n\
                        - No issues found";
        assert_eq!(md, expected);
    }

    #[test]
    fn issues_are_listed_when_present() {
        let mut data = sample();
        data.issues = vec!["No Dockerfile found".into()];
        let md = data.to_markdown();
        assert!(md.ends_with("## Issues\n- No Dockerfile found"));
        assert!(!md.contains("No issues found"));
    }

    #[test]
    fn fallback_structure_lists_app_then_tests() {
        let s = ReportData::fallback_structure();
        assert_eq!(s[0].folder, "app");
        assert_eq!(s[1].folder, "tests");
        assert_eq!(s[1].files, vec!["test_main.py", "test_health.py"]);
    }
}
