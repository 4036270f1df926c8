//! Loading and saving the recipe document
//!
//! Where the bytes live is up to the [`RecordSource`]; the store only picks
//! the primary source, falls back when it cannot be read, and runs the
//! record codec.

use std::io;
use std::path::{Path, PathBuf};

use shared::error::{AppError, AppResult};
use shared::models::Recipe;

use crate::catalog::RecipeCatalog;
use crate::config::StoreConfig;
use crate::records::{DocumentIssue, DocumentReport, parse_document, to_document};

/// Byte source for the `{"recipes": [...]}` document
pub trait RecordSource {
    /// Human-readable location, used in logs and errors
    fn describe(&self) -> String;

    fn read(&self) -> io::Result<Vec<u8>>;

    fn write(&self, _bytes: &[u8]) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("{} is read-only", self.describe()),
        ))
    }
}

/// Document stored as a file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }

    /// Writes through a sibling temp file so a failed write leaves the old document intact
    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, bytes)?;
        std::fs::rename(&tmp, &self.path)
    }
}

/// Read-only document shipped with the application
#[derive(Debug, Clone)]
pub struct BundledSource {
    name: String,
    bytes: Vec<u8>,
}

impl BundledSource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl RecordSource for BundledSource {
    fn describe(&self) -> String {
        format!("bundled:{}", self.name)
    }

    fn read(&self) -> io::Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

/// Outcome of a successful load
#[derive(Debug, Clone)]
pub struct LoadSummary {
    /// Source the document was read from
    pub source: String,
    pub recipes: usize,
    pub issues: Vec<DocumentIssue>,
}

/// Primary source plus an optional read-only fallback
pub struct RecipeStore {
    primary: Box<dyn RecordSource>,
    fallback: Option<Box<dyn RecordSource>>,
}

impl RecipeStore {
    pub fn new(primary: impl RecordSource + 'static) -> Self {
        Self {
            primary: Box::new(primary),
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: impl RecordSource + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// File-backed store using the configured paths
    pub fn from_config(config: &StoreConfig) -> Self {
        let store = Self::new(FileSource::new(config.data_path.clone()));
        match &config.fallback_path {
            Some(path) => store.with_fallback(FileSource::new(path.clone())),
            None => store,
        }
    }

    /// Read and decode the document without touching a catalog.
    ///
    /// The fallback is only tried when the primary cannot be read. A source
    /// that reads but is not JSON fails the load.
    pub fn read_document(&self) -> AppResult<(String, DocumentReport)> {
        let (source, bytes) = self.read_first_available()?;
        let document: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::invalid_document(format!("{} is not a JSON document: {}", source, e))
                .with_detail("source", source.clone())
        })?;
        Ok((source, parse_document(&document)))
    }

    /// Load the document into `catalog`.
    ///
    /// On failure the catalog is left as it was and stays not loaded.
    pub fn load_into(&self, catalog: &mut RecipeCatalog) -> AppResult<LoadSummary> {
        let (source, report) = self.read_document().inspect_err(|e| {
            tracing::error!(code = %e.code, "recipe load failed: {}", e);
        })?;

        let summary = LoadSummary {
            source,
            recipes: report.recipes.len(),
            issues: report.issues,
        };
        if summary.issues.is_empty() {
            tracing::info!(source = %summary.source, recipes = summary.recipes, "recipes loaded");
        } else {
            tracing::warn!(
                source = %summary.source,
                recipes = summary.recipes,
                issues = summary.issues.len(),
                "recipes loaded with repaired records"
            );
        }

        catalog.load(report.recipes);
        Ok(summary)
    }

    /// Write `recipes` to the primary source in the legacy record shape.
    ///
    /// Returns the ingredients that could not be encoded and were left out.
    pub fn save(&self, recipes: &[Recipe]) -> AppResult<Vec<DocumentIssue>> {
        let (document, issues) = to_document(recipes);
        let bytes = serde_json::to_vec_pretty(&document)
            .map_err(|e| AppError::internal(format!("failed to serialize recipes: {}", e)))?;

        let target = self.primary.describe();
        self.primary.write(&bytes).map_err(|e| {
            AppError::storage(format!("failed to write {}: {}", target, e))
                .with_detail("source", target.clone())
        })?;

        tracing::info!(target = %target, recipes = recipes.len(), "recipes saved");
        Ok(issues)
    }

    fn read_first_available(&self) -> AppResult<(String, Vec<u8>)> {
        let primary = self.primary.describe();
        let primary_err = match self.primary.read() {
            Ok(bytes) => return Ok((primary, bytes)),
            Err(e) => e,
        };
        tracing::debug!(source = %primary, "primary recipe source unreadable: {}", primary_err);

        let Some(fallback) = &self.fallback else {
            return Err(AppError::source_unavailable(format!(
                "cannot read {}: {}",
                primary, primary_err
            ))
            .with_detail("primary", primary));
        };

        let name = fallback.describe();
        match fallback.read() {
            Ok(bytes) => Ok((name, bytes)),
            Err(e) => Err(AppError::source_unavailable(format!(
                "cannot read {} ({}) or fallback {} ({})",
                primary, primary_err, name, e
            ))
            .with_detail("primary", primary)
            .with_detail("fallback", name)),
        }
    }
}
