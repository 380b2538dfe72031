//! Implementations of the core ports: embedded templates, the MiniJinja
//! renderer, real and in-memory filesystems, and `pip`-backed package checks.

pub mod builtin_templates;
pub mod checker;
pub mod filesystem;
pub mod renderer;
pub mod template_loader;
pub mod template_store;

pub use checker::{PipPackageChecker, StaticPackageChecker};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::MiniJinjaRenderer;
pub use template_store::InMemoryStore;
