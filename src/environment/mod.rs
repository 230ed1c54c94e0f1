//! Environment records and the sources that produce them.
//!
//! - [`record`] - The [`EnvironmentRecord`] data model and version parsing
//! - [`source`] - The [`EnvironmentSource`] contract consumed by the pipeline
//! - [`manifest`] - A YAML manifest-backed source used by the CLI
//! - [`snapshot`] - The on-disk snapshot behind cached manifest reads

pub mod manifest;
pub mod record;
pub mod snapshot;
pub mod source;

pub use manifest::ManifestSource;
pub use record::{Architecture, EnvironmentKind, EnvironmentRecord, PythonVersion, ReleaseLevel};
pub use snapshot::SnapshotStore;
pub use source::{EnvironmentSource, GetInterpretersOptions};
