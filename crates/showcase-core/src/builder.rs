//! Manifest Builder
//!
//! Reads every registered example directory concurrently and assembles the
//! manifest. One task per example, one nested task per file; the first
//! failure drops the join sets, which aborts whatever is still in flight.

use std::path::{Path, PathBuf};

use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::error::ManifestError;
use crate::manifest::{ExampleRecord, Manifest};
use crate::registry::{ExampleEntry, ExampleRegistry};

pub struct ManifestBuilder {
    root: PathBuf,
    registry: ExampleRegistry,
}

impl ManifestBuilder {
    /// Builder over `root` using the built-in example registry.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            registry: ExampleRegistry::builtin(),
        }
    }

    pub fn with_registry(mut self, registry: ExampleRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub async fn build(&self) -> Result<Manifest, ManifestError> {
        let meta = tokio::fs::metadata(&self.root)
            .await
            .map_err(|source| ManifestError::RootUnreadable {
                path: self.root.clone(),
                source,
            })?;
        if !meta.is_dir() {
            return Err(ManifestError::RootNotADirectory(self.root.clone()));
        }

        let mut tasks = JoinSet::new();
        for (index, entry) in self.registry.iter().enumerate() {
            let dir = self.root.join(&entry.name);
            let entry = entry.clone();
            tasks.spawn(async move {
                let record = collect_example(&entry, dir).await?;
                Ok::<_, ManifestError>((index, entry.name, record))
            });
        }

        // Slots are indexed by registry position so completion order never
        // leaks into the output.
        let mut slots: Vec<Option<(String, ExampleRecord)>> =
            (0..self.registry.len()).map(|_| None).collect();

        while let Some(joined) = tasks.join_next().await {
            let (index, name, record) = joined??;
            slots[index] = Some((name, record));
        }

        let examples: Vec<(String, ExampleRecord)> = slots.into_iter().flatten().collect();
        info!(
            "Collected {} examples from {}",
            examples.len(),
            self.root.display()
        );

        Ok(Manifest::from_records(examples))
    }
}

/// Build a manifest of the built-in examples under `root`.
pub async fn build_manifest(root: impl AsRef<Path>) -> Result<Manifest, ManifestError> {
    ManifestBuilder::new(root.as_ref()).build().await
}

async fn collect_example(entry: &ExampleEntry, dir: PathBuf) -> Result<ExampleRecord, ManifestError> {
    let list_err = |source: std::io::Error| ManifestError::ReadDir {
        example: entry.name.clone(),
        path: dir.clone(),
        source,
    };

    let mut listing = tokio::fs::read_dir(&dir).await.map_err(list_err)?;
    let mut reads = JoinSet::new();

    while let Some(dirent) = listing.next_entry().await.map_err(list_err)? {
        let path = dirent.path();
        let name = dirent
            .file_name()
            .into_string()
            .map_err(|_| ManifestError::InvalidFileName(path.clone()))?;
        reads.spawn(read_text_file(name, path));
    }

    let mut record = ExampleRecord::new(entry.entrypoint.clone());
    while let Some(joined) = reads.join_next().await {
        let (name, contents) = joined??;
        record.files.insert(name, contents);
    }

    if !record.has_entrypoint() {
        info!("entrypoint {} not found in {}", entry.entrypoint, dir.display());
    }
    debug!("Example {}: {} files", entry.name, record.file_count());

    Ok(record)
}

async fn read_text_file(name: String, path: PathBuf) -> Result<(String, String), ManifestError> {
    let meta = tokio::fs::metadata(&path)
        .await
        .map_err(|source| ManifestError::ReadFile {
            path: path.clone(),
            source,
        })?;
    if !meta.is_file() {
        return Err(ManifestError::NotAFile(path));
    }

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| ManifestError::ReadFile {
            path: path.clone(),
            source,
        })?;
    let contents =
        String::from_utf8(bytes).map_err(|source| ManifestError::InvalidUtf8 { path: path.clone(), source })?;

    debug!("Read {} ({} bytes)", path.display(), contents.len());
    Ok((name, contents))
}
