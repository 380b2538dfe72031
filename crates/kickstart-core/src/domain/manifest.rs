//! Dependency manifest (`requirements.txt`) parsing.

/// Declared dependency specifiers, in file order.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
pub fn parse_manifest(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Distribution name of a requirement specifier.
///
/// `"uvicorn[standard]==0.24.0"` → `"uvicorn"`.
pub fn requirement_name(spec: &str) -> &str {
    let spec = spec.trim();
    let end = spec
        .find(|c: char| matches!(c, '[' | '<' | '>' | '=' | '!' | '~' | ';' | '@') || c.is_whitespace())
        .unwrap_or(spec.len());
    &spec[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blanks_are_skipped() {
        let deps = parse_manifest("# comment\n\nfoo\nbar==1.0\n");
        assert_eq!(deps, vec!["foo", "bar==1.0"]);
    }

    #[test]
    fn lines_are_trimmed() {
        assert_eq!(parse_manifest("  fastapi  \r\n\t# pinned\n"), vec!["fastapi"]);
    }

    #[test]
    fn requirement_name_strips_extras_and_versions() {
        assert_eq!(requirement_name("uvicorn[standard]==0.24.0"), "uvicorn");
        assert_eq!(requirement_name("pydantic>=2"), "pydantic");
        assert_eq!(requirement_name("httpx ; python_version>'3.8'"), "httpx");
        assert_eq!(requirement_name("pkg @ https://example.com/pkg.whl"), "pkg");
        assert_eq!(requirement_name("fastapi"), "fastapi");
    }
}
