//! Example Registry
//!
//! Fixed, ordered mapping from example name to its entrypoint file.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::RegistryError;

/// Examples bundled into the manifest, in output order.
pub const BUILTIN_EXAMPLES: &[(&str, &str)] = &[
    ("crystal-hello", "main.cr"),
    ("go-hello", "main.go"),
    ("node-micro", "server.js"),
    ("php-7-hello-world", "index.php"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleEntry {
    pub name: String,
    pub entrypoint: String,
}

/// Immutable registry shared read-only by every read task.
#[derive(Debug, Clone)]
pub struct ExampleRegistry {
    entries: Arc<[ExampleEntry]>,
}

impl ExampleRegistry {
    pub fn builtin() -> Self {
        let entries: Vec<ExampleEntry> = BUILTIN_EXAMPLES
            .iter()
            .map(|(name, entrypoint)| ExampleEntry {
                name: (*name).to_string(),
                entrypoint: (*entrypoint).to_string(),
            })
            .collect();

        Self {
            entries: entries.into(),
        }
    }

    /// Build a registry from `(name, entrypoint)` pairs, keeping their order.
    pub fn from_entries<I, N, E>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (N, E)>,
        N: Into<String>,
        E: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        for (name, entrypoint) in entries {
            let name = name.into();
            let entrypoint = entrypoint.into();

            if name.is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if entrypoint.is_empty() {
                return Err(RegistryError::EmptyEntrypoint(name));
            }
            if !seen.insert(name.clone()) {
                return Err(RegistryError::DuplicateExample(name));
            }

            out.push(ExampleEntry { name, entrypoint });
        }

        Ok(Self {
            entries: out.into(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExampleEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
