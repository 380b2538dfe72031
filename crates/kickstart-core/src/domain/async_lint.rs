//! Textual async pitfall checks for Python sources.
//!
//! These are substring heuristics, not a parser.

use serde::Serialize;

pub const BLOCKING_SLEEP: &str = "Blocking call 'time.sleep' found in async function. Consider using 'await asyncio.sleep' instead.";

pub const SYNC_FUNCTION: &str =
    "Synchronous function defined in async context. Ensure proper usage of async functions.";

/// Issues found in one source text.
pub fn analyze_source(code: &str) -> Vec<String> {
    let mut issues = Vec::new();

    if code.contains("time.sleep") {
        issues.push(BLOCKING_SLEEP.to_string());
    }
    if code.contains("def ") && !code.contains("async def") {
        issues.push(SYNC_FUNCTION.to_string());
    }

    issues
}

/// Issues for one file, path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AsyncFinding {
    pub file: String,
    pub issues: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocking_sleep_is_flagged() {
        let issues = analyze_source("import time\nasync def f():\n    time.sleep(1)\n");
        assert_eq!(issues, vec![BLOCKING_SLEEP]);
    }

    #[test]
    fn sync_only_module_is_flagged() {
        let issues = analyze_source("def helper():\n    return 1\n");
        assert_eq!(issues, vec![SYNC_FUNCTION]);
    }

    #[test]
    fn mixed_module_is_clean() {
        assert!(analyze_source("def a(): pass\nasync def b(): pass\n").is_empty());
    }

    #[test]
    fn both_rules_can_fire() {
        let issues = analyze_source("import time\ndef f():\n    time.sleep(2)\n");
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0], BLOCKING_SLEEP);
    }
}
