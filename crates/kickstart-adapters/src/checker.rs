//! Package availability checkers.

use std::{
    collections::HashSet,
    process::{Command, Stdio},
};

use tracing::{debug, instrument};

use kickstart_core::{
    application::{ApplicationError, ports::PackageAvailabilityChecker},
    error::KickstartResult,
};

/// Asks pip whether a distribution is installed in the target interpreter.
///
/// `python -m pip show <package>` exits 0 only when the package is installed.
#[derive(Debug, Clone)]
pub struct PipPackageChecker {
    python: String,
}

impl PipPackageChecker {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    pub fn python(&self) -> &str {
        &self.python
    }
}

impl Default for PipPackageChecker {
    fn default() -> Self {
        Self::new("python3")
    }
}

impl PackageAvailabilityChecker for PipPackageChecker {
    #[instrument(skip(self), fields(python = %self.python))]
    fn is_available(&self, package: &str) -> KickstartResult<bool> {
        let status = Command::new(&self.python)
            .args(["-m", "pip", "show", "--quiet", package])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ApplicationError::PackageQueryFailed {
                package: package.to_string(),
                reason: format!("failed to execute {}: {e}", self.python),
            })?;

        debug!(success = status.success(), "pip show finished");
        Ok(status.success())
    }
}

/// Fixed set of installed packages. Names compare case-insensitively with
/// `-` and `_` treated alike, as pip does.
#[derive(Debug, Clone, Default)]
pub struct StaticPackageChecker {
    installed: HashSet<String>,
}

impl StaticPackageChecker {
    pub fn new<I, S>(installed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            installed: installed
                .into_iter()
                .map(|s| normalize(s.as_ref()))
                .collect(),
        }
    }
}

impl PackageAvailabilityChecker for StaticPackageChecker {
    fn is_available(&self, package: &str) -> KickstartResult<bool> {
        Ok(self.installed.contains(&normalize(package)))
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('_', "-")
}
