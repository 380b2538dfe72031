//! Middleware add-ons that can be wired into an existing project.

use std::fmt;

use serde::Serialize;

use crate::domain::{error::DomainError, patch::SourcePatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Addon {
    ErrorMiddleware,
    RateLimiting,
    Monitoring,
}

impl Addon {
    pub const ALL: [Addon; 3] = [Self::ErrorMiddleware, Self::RateLimiting, Self::Monitoring];

    /// Template holding the add-on's module.
    pub fn definition_template(&self) -> &'static str {
        match self {
            Self::ErrorMiddleware => "middleware.py",
            Self::RateLimiting => "rate_limit.py",
            Self::Monitoring => "monitoring.py",
        }
    }

    /// Where the module is written, relative to the project root.
    pub fn definition_path(&self) -> &'static str {
        match self {
            Self::ErrorMiddleware => "app/core/middleware.py",
            Self::RateLimiting => "app/core/rate_limit.py",
            Self::Monitoring => "app/core/monitoring.py",
        }
    }

    fn anchor(&self) -> &'static str {
        match self {
            Self::ErrorMiddleware => "app = FastAPI(",
            Self::RateLimiting | Self::Monitoring => "app.include_router(",
        }
    }

    fn import_line(&self) -> &'static str {
        match self {
            Self::ErrorMiddleware => "from app.core.middleware import ErrorMiddleware",
            Self::RateLimiting => "from app.core.rate_limit import setup_rate_limiting",
            Self::Monitoring => "from app.core.monitoring import setup_monitoring",
        }
    }

    fn call_line(&self) -> &'static str {
        match self {
            Self::ErrorMiddleware => "app.add_middleware(ErrorMiddleware)",
            Self::RateLimiting => "setup_rate_limiting(app)",
            Self::Monitoring => "setup_monitoring(app)",
        }
    }

    /// Patch wiring the add-on into `app/main.py`. The import doubles as guard.
    pub fn patch(&self) -> Result<SourcePatch, DomainError> {
        SourcePatch::builder(self.anchor())
            .import(self.import_line())
            .insert_line(self.call_line())
            .build()
    }
}

impl fmt::Display for Addon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ErrorMiddleware => "error middleware",
            Self::RateLimiting => "rate limiting",
            Self::Monitoring => "monitoring",
        };
        f.write_str(s)
    }
}
