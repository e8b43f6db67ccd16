pub mod builder;
pub mod error;
pub mod manifest;
pub mod registry;

pub use builder::{build_manifest, ManifestBuilder};
pub use error::{ManifestError, RegistryError};
pub use manifest::{ExampleRecord, Manifest};
pub use registry::{ExampleEntry, ExampleRegistry, BUILTIN_EXAMPLES};
