use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One example: its entrypoint plus every file in its directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleRecord {
    pub main: String,
    pub files: BTreeMap<String, String>,
}

impl ExampleRecord {
    pub fn new(main: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            files: BTreeMap::new(),
        }
    }

    pub fn file(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// The entrypoint is copied from the registry, so it may name a file
    /// that was never found on disk.
    pub fn has_entrypoint(&self) -> bool {
        self.files.contains_key(&self.main)
    }
}

/// Complete manifest. Serializes as a JSON object whose keys follow the
/// registry order the records were inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    examples: Vec<(String, ExampleRecord)>,
}

impl Manifest {
    pub(crate) fn from_records(examples: Vec<(String, ExampleRecord)>) -> Self {
        Self { examples }
    }

    pub fn get(&self, name: &str) -> Option<&ExampleRecord> {
        self.examples
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, record)| record)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExampleRecord)> {
        self.examples.iter().map(|(n, r)| (n.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// JSON text with two-space indentation, without a trailing newline.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for Manifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.examples.len()))?;
        for (name, record) in &self.examples {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}
