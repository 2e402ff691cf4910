//! Export bundles with a tamper-evident manifest.
//!
//! # Workflow
//!
//! 1. Render CSV, Markdown and the automation skeleton (optionally the
//!    feature file) into an [`ExportBundle`].
//! 2. [`ExportBundle::write_bundle`] writes each file plus `bundle.manifest.json`,
//!    recording a Blake3 hash and byte size per file.
//! 3. [`verify_bundle`] re-hashes every listed file; any edit after export
//!    surfaces as [`QaForgeError::HashMismatch`].

use crate::artifact::Artifact;
use crate::error::{QaForgeError, Result};
use crate::framework::Framework;
use crate::model::TestCase;
use crate::tabular::iso_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Manifest file name inside a bundle directory.
pub const MANIFEST_FILE: &str = "bundle.manifest.json";

/// One file recorded in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// File name relative to the bundle directory
    pub path: String,
    /// MIME type
    pub mime: String,
    /// Blake3 hash of the contents
    pub hash: String,
    /// Size in bytes
    pub bytes: usize,
}

/// Manifest written alongside bundle files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleManifest {
    /// Version of manifest format
    pub manifest_version: u32,
    /// Producing tool and version
    pub tool: String,
    /// Framework key of the automation skeleton
    pub framework: Framework,
    /// Number of test cases in the batch
    pub case_count: usize,
    /// ISO-8601 export time
    pub generated_at: String,
    /// Files in write order
    pub entries: Vec<ManifestEntry>,
}

impl BundleManifest {
    /// Current manifest format version.
    pub const VERSION: u32 = 1;

    /// Write manifest to `dir`.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written.
    pub fn write(&self, dir: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(dir.join(MANIFEST_FILE), json)?;
        Ok(())
    }

    /// Read manifest from `dir`.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn read(dir: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(dir.join(MANIFEST_FILE))?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Compute Blake3 hash of file contents.
#[must_use]
pub fn hash_contents(contents: &str) -> String {
    hash_bytes(contents.as_bytes())
}

/// Compute Blake3 hash of raw bytes.
#[must_use]
pub fn hash_bytes(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Manifest paths must stay inside the bundle directory.
fn entry_path(dir: &Path, entry: &ManifestEntry) -> Result<PathBuf> {
    let relative = Path::new(&entry.path);
    let contained = relative.components().next().is_some()
        && relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    if !contained {
        return Err(QaForgeError::ManifestError {
            path: entry.path.clone(),
            reason: "entry path leaves the bundle directory".to_string(),
        });
    }
    Ok(dir.join(relative))
}

/// The set of files exported for one batch.
#[derive(Debug, Clone)]
pub struct ExportBundle {
    framework: Framework,
    case_count: usize,
    generated_at: DateTime<Utc>,
    artifacts: Vec<Artifact>,
    feature: Artifact,
    with_feature: bool,
}

impl ExportBundle {
    /// Render CSV, Markdown and the `framework` skeleton for `cases`,
    /// stamped with the current time.
    #[must_use]
    pub fn new(cases: &[TestCase], framework: Framework) -> Self {
        Self::new_at(cases, framework, Utc::now())
    }

    /// Same as [`Self::new`] with a fixed export time.
    #[must_use]
    pub fn new_at(cases: &[TestCase], framework: Framework, generated_at: DateTime<Utc>) -> Self {
        Self {
            framework,
            case_count: cases.len(),
            generated_at,
            artifacts: vec![
                Artifact::csv(cases),
                Artifact::markdown(cases, generated_at),
                Artifact::automation(cases, framework),
            ],
            feature: Artifact::feature(cases),
            with_feature: false,
        }
    }

    /// Include `test-cases.feature` in the bundle.
    #[must_use]
    pub fn with_feature(mut self, include: bool) -> Self {
        self.with_feature = include;
        self
    }

    /// Files that will be written, in order.
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts
            .iter()
            .chain(std::iter::once(&self.feature).filter(|_| self.with_feature))
    }

    /// Manifest describing [`Self::artifacts`].
    #[must_use]
    pub fn manifest(&self) -> BundleManifest {
        BundleManifest {
            manifest_version: BundleManifest::VERSION,
            tool: format!("qaforge {}", env!("CARGO_PKG_VERSION")),
            framework: self.framework,
            case_count: self.case_count,
            generated_at: iso_timestamp(self.generated_at),
            entries: self
                .artifacts()
                .map(|a| ManifestEntry {
                    path: a.filename.clone(),
                    mime: a.mime.clone(),
                    hash: hash_contents(&a.contents),
                    bytes: a.len(),
                })
                .collect(),
        }
    }

    /// Write every file and the manifest into `dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the directory or any file cannot be written.
    pub fn write_bundle(&self, dir: &Path) -> Result<BundleManifest> {
        std::fs::create_dir_all(dir)?;
        for artifact in self.artifacts() {
            std::fs::write(dir.join(&artifact.filename), &artifact.contents)?;
        }

        let manifest = self.manifest();
        manifest.write(dir)?;
        tracing::info!(
            dir = %dir.display(),
            files = manifest.entries.len(),
            framework = %self.framework,
            "bundle written"
        );
        Ok(manifest)
    }
}

/// Verify every file listed in `dir`'s manifest.
///
/// # Errors
///
/// Returns error if:
/// - The manifest is missing or cannot be parsed
/// - A listed file is missing, or its path is absolute or uses `..`
/// - A file's hash differs from the manifest (it was modified)
pub fn verify_bundle(dir: &Path) -> Result<BundleManifest> {
    let manifest = BundleManifest::read(dir).map_err(|e| QaForgeError::ManifestError {
        path: dir.display().to_string(),
        reason: format!("cannot load {MANIFEST_FILE}: {e}"),
    })?;

    for entry in &manifest.entries {
        let path = entry_path(dir, entry)?;
        let contents = std::fs::read(&path).map_err(|e| QaForgeError::ManifestError {
            path: entry.path.clone(),
            reason: e.to_string(),
        })?;

        let actual = hash_bytes(&contents);
        if actual != entry.hash {
            return Err(QaForgeError::HashMismatch {
                path: entry.path.clone(),
                expected: entry.hash.clone(),
                actual,
            });
        }
    }

    tracing::info!(dir = %dir.display(), files = manifest.entries.len(), "bundle verified");
    Ok(manifest)
}
