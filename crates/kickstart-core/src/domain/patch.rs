//! Idempotent, line-oriented source patching.
//!
//! A [`SourcePatch`] is an anchor (first line containing it is the insertion
//! point), a guard (if present anywhere, the patch counts as applied), the
//! lines to insert after the anchor, and an optional import line placed right
//! after the first line of the file.
//!
//! Applying is a pure `&str -> PatchResult` transformation. Lines are split on
//! `\n` and rejoined with `\n`. Existing lines and a trailing newline are kept
//! as they are; in a file that uses CRLF the new lines end in CRLF too.

use std::borrow::Cow;

use serde::Serialize;

use crate::domain::error::DomainError;

/// What [`SourcePatch::apply`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchOutcome {
    /// Lines were inserted.
    Applied,
    /// The guard was already present; text untouched.
    AlreadyApplied,
    /// No line contains the anchor; text untouched.
    AnchorNotFound,
}

impl PatchOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchResult {
    pub content: String,
    pub outcome: PatchOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePatch {
    anchor: String,
    guard: String,
    insertion: Vec<String>,
    import: Option<String>,
}

impl SourcePatch {
    pub fn builder(anchor: impl Into<String>) -> SourcePatchBuilder {
        SourcePatchBuilder {
            anchor: anchor.into(),
            guard: None,
            insertion: Vec::new(),
            import: None,
        }
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    pub fn guard(&self) -> &str {
        &self.guard
    }

    pub fn insertion(&self) -> &[String] {
        &self.insertion
    }

    pub fn import(&self) -> Option<&str> {
        self.import.as_deref()
    }

    pub fn is_applied(&self, source: &str) -> bool {
        source.contains(self.guard.as_str())
    }

    pub fn apply(&self, source: &str) -> PatchResult {
        if self.is_applied(source) {
            return PatchResult {
                content: source.to_string(),
                outcome: PatchOutcome::AlreadyApplied,
            };
        }

        let lines: Vec<&str> = source.split('\n').collect();
        let Some(anchor_at) = lines.iter().position(|l| l.contains(self.anchor.as_str())) else {
            return PatchResult {
                content: source.to_string(),
                outcome: PatchOutcome::AnchorNotFound,
            };
        };

        let crlf = source.contains("\r\n");
        let anchor_is_last = anchor_at + 1 == lines.len();

        let mut out: Vec<Cow<'_, str>> =
            Vec::with_capacity(lines.len() + self.insertion.len() + 1);
        out.extend(lines[..anchor_at].iter().map(|l| Cow::Borrowed(*l)));
        out.push(terminated(lines[anchor_at], crlf));
        for (i, line) in self.insertion.iter().enumerate() {
            if anchor_is_last && i + 1 == self.insertion.len() {
                out.push(Cow::Borrowed(line.as_str()));
            } else {
                out.push(terminated(line, crlf));
            }
        }
        out.extend(lines[anchor_at + 1..].iter().map(|l| Cow::Borrowed(*l)));

        if let Some(import) = self.import.as_deref() {
            if !source.contains(import) {
                out.insert(1, terminated(import, crlf));
            }
        }

        PatchResult {
            content: out.join("\n"),
            outcome: PatchOutcome::Applied,
        }
    }
}

/// `line` with a `\r` appended when the file uses CRLF and it lacks one.
fn terminated(line: &str, crlf: bool) -> Cow<'_, str> {
    if crlf && !line.ends_with('\r') {
        Cow::Owned(format!("{line}\r"))
    } else {
        Cow::Borrowed(line)
    }
}

/// Builder for [`SourcePatch`].
///
/// `build` refuses a patch that could never be detected as applied: the
/// guard must appear in the inserted lines or the import.
#[derive(Debug, Clone)]
pub struct SourcePatchBuilder {
    anchor: String,
    guard: Option<String>,
    insertion: Vec<String>,
    import: Option<String>,
}

impl SourcePatchBuilder {
    pub fn guard(mut self, guard: impl Into<String>) -> Self {
        self.guard = Some(guard.into());
        self
    }

    pub fn insert_line(mut self, line: impl Into<String>) -> Self {
        self.insertion.push(line.into());
        self
    }

    /// Import line placed after the first line. Also the default guard.
    pub fn import(mut self, line: impl Into<String>) -> Self {
        self.import = Some(line.into());
        self
    }

    pub fn build(self) -> Result<SourcePatch, DomainError> {
        if self.anchor.is_empty() {
            return Err(DomainError::InvalidPatch("anchor cannot be empty".into()));
        }
        if self.insertion.is_empty() {
            return Err(DomainError::InvalidPatch(
                "at least one line must be inserted".into(),
            ));
        }
        if self.insertion.iter().any(|l| l.contains('\n')) {
            return Err(DomainError::InvalidPatch(
                "inserted lines must not contain newlines".into(),
            ));
        }

        let guard = match (self.guard, &self.import) {
            (Some(g), _) => g,
            (None, Some(import)) => import.clone(),
            (None, None) => self.insertion[0].clone(),
        };
        if guard.is_empty() {
            return Err(DomainError::InvalidPatch("guard cannot be empty".into()));
        }

        let guarded = self.insertion.iter().any(|l| l.contains(guard.as_str()))
            || self.import.as_deref().is_some_and(|i| i.contains(guard.as_str()));
        if !guarded {
            return Err(DomainError::InvalidPatch(format!(
                "guard '{guard}' does not occur in the inserted text"
            )));
        }

        Ok(SourcePatch {
            anchor: self.anchor,
            guard,
            insertion: self.insertion,
            import: self.import,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAIN: &str = "from fastapi import FastAPI\n\napp = FastAPI(title=\"demo\")\n\n@app.get(\"/\")\nasync def root():\n    return {}\n";

    fn error_patch() -> SourcePatch {
        SourcePatch::builder("app = FastAPI(")
            .import("from app.core.middleware import ErrorMiddleware")
            .insert_line("app.add_middleware(ErrorMiddleware)")
            .build()
            .unwrap()
    }

    #[test]
    fn inserts_after_anchor_and_import_after_first_line() {
        let result = error_patch().apply(MAIN);
        assert_eq!(result.outcome, PatchOutcome::Applied);

        let lines: Vec<&str> = result.content.split('\n').collect();
        assert_eq!(lines[0], "from fastapi import FastAPI");
        assert_eq!(lines[1], "from app.core.middleware import ErrorMiddleware");
        let anchor = lines.iter().position(|l| l.starts_with("app = FastAPI(")).unwrap();
        assert_eq!(lines[anchor + 1], "app.add_middleware(ErrorMiddleware)");
    }

    #[test]
    fn applying_twice_equals_applying_once() {
        let patch = error_patch();
        let once = patch.apply(MAIN);
        let twice = patch.apply(&once.content);
        assert_eq!(twice.outcome, PatchOutcome::AlreadyApplied);
        assert_eq!(once.content, twice.content);
        assert_eq!(
            twice.content.matches("app.add_middleware(ErrorMiddleware)").count(),
            1
        );
    }

    #[test]
    fn only_first_anchor_is_used() {
        let src = "a\nanchor one\nanchor two";
        let patch = SourcePatch::builder("anchor").insert_line("x").build().unwrap();
        let result = patch.apply(src);
        assert_eq!(result.content, "a\nanchor one\nx\nanchor two");
    }

    #[test]
    fn missing_anchor_leaves_text_untouched() {
        let result = error_patch().apply("print('hello')\n");
        assert_eq!(result.outcome, PatchOutcome::AnchorNotFound);
        assert_eq!(result.content, "print('hello')\n");
        assert!(!result.outcome.changed());
    }

    #[test]
    fn newline_structure_is_preserved() {
        let src = "first\r\napp = FastAPI()\r\nlast\r\n";
        let result = error_patch().apply(src);
        assert_eq!(
            result.content,
            "first\r\nfrom app.core.middleware import ErrorMiddleware\r\napp = FastAPI()\r\napp.add_middleware(ErrorMiddleware)\r\nlast\r\n"
        );
    }

    #[test]
    fn crlf_anchor_on_last_line_gets_a_crlf_break() {
        let src = "import os\r\napp = FastAPI()";
        let result = error_patch().apply(src);
        assert_eq!(
            result.content,
            "import os\r\nfrom app.core.middleware import ErrorMiddleware\r\napp = FastAPI()\r\napp.add_middleware(ErrorMiddleware)"
        );
    }

    #[test]
    fn lf_file_gets_no_carriage_returns() {
        let result = error_patch().apply(MAIN);
        assert!(!result.content.contains('\r'));
    }

    #[test]
    fn existing_import_is_not_duplicated() {
        let patch = SourcePatch::builder("app.include_router(")
            .guard("setup_monitoring(app)")
            .import("from app.core.monitoring import setup_monitoring")
            .insert_line("setup_monitoring(app)")
            .build()
            .unwrap();
        let src = "import os\nfrom app.core.monitoring import setup_monitoring\napp.include_router(r)";
        let result = patch.apply(src);
        assert_eq!(
            result.content.matches("from app.core.monitoring").count(),
            1
        );
        assert!(result.content.ends_with("app.include_router(r)\nsetup_monitoring(app)"));
    }

    #[test]
    fn anchor_on_first_line_still_gets_import() {
        let patch = SourcePatch::builder("anchor")
            .import("import x")
            .insert_line("x.run()")
            .build()
            .unwrap();
        let result = patch.apply("anchor");
        assert_eq!(result.content, "anchor\nimport x\nx.run()");
    }

    #[test]
    fn unguarded_patch_is_rejected() {
        let err = SourcePatch::builder("anchor")
            .guard("something else")
            .insert_line("x")
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidPatch(_)));
    }

    #[test]
    fn empty_anchor_is_rejected() {
        assert!(SourcePatch::builder("").insert_line("x").build().is_err());
    }
}
