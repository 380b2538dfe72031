//! Traits the services need from the outside world.
//!
//! Only driven ports exist; the CLI calls services directly.
//! `kickstart-adapters` provides the implementations.

pub mod output;

pub use output::{Filesystem, PackageAvailabilityChecker, TemplateRenderer, TemplateStore};

#[cfg(test)]
pub use output::{
    MockFilesystem, MockPackageAvailabilityChecker, MockTemplateRenderer, MockTemplateStore,
};
