//! # Data Ingestion Module
//!
//! ## Purpose
//! Produces the startup record set for the case store. Sources are
//! swappable behind the `CaseSource` trait: the built-in seed dataset for
//! demonstrations, a JSON file for real deployments.
//!
//! ## Input/Output Specification
//! - **Input**: Source configuration (optional data file path)
//! - **Output**: A validated, ordered `CaseStore`
//! - **Policy**: Invalid records are logged with the failing rule and
//!   skipped; the store is built from the survivors in source order
//!
//! ## Key Features
//! - Async source abstraction, ready for remote backends
//! - Per-record rule validation before the store is built

pub mod validation;

use crate::config::DataConfig;
use crate::errors::{Result, SearchError};
use crate::store::{seed_records, CaseStore};
use crate::CaseRecord;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{info, warn};
use validation::RecordValidator;

/// A source of case records.
///
/// Implementations may perform I/O; a cancelled fetch should surface
/// `SearchError::Cancelled` so callers can tell it apart from an empty
/// source.
#[async_trait]
pub trait CaseSource: Send + Sync {
    /// Source name for logs
    fn name(&self) -> &str;

    /// Fetch every record, in source order
    async fn fetch_all(&self) -> Result<Vec<CaseRecord>>;
}

/// Built-in demonstration dataset
pub struct SeedSource;

#[async_trait]
impl CaseSource for SeedSource {
    fn name(&self) -> &str {
        "seed"
    }

    async fn fetch_all(&self) -> Result<Vec<CaseRecord>> {
        Ok(seed_records())
    }
}

/// JSON file containing an array of case records
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CaseSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn fetch_all(&self) -> Result<Vec<CaseRecord>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SearchError::DataFile {
                path: self.path.display().to_string(),
                details: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| SearchError::DataFile {
            path: self.path.display().to_string(),
            details: format!("not a JSON array of case records: {}", e),
        })
    }
}

/// Fetch from a source, validate each record, and build the store.
///
/// Records failing a validation rule are logged and skipped; source order is
/// preserved for the survivors.
pub async fn build_store(source: &dyn CaseSource) -> Result<CaseStore> {
    let validator = RecordValidator::new()?;
    let fetched = source.fetch_all().await?;
    let fetched_count = fetched.len();

    let mut records = Vec::with_capacity(fetched_count);
    for record in fetched {
        match validator.validate(&record) {
            Ok(()) => records.push(record),
            Err(e) => warn!("Skipping record from source '{}': {}", source.name(), e),
        }
    }

    let rejected = fetched_count - records.len();
    info!(
        "Ingested {} case records from source '{}' ({} rejected)",
        records.len(),
        source.name(),
        rejected
    );

    Ok(CaseStore::new(records))
}

/// Build the store from the configured source: the JSON file when a path is
/// set, the seed dataset otherwise.
pub async fn load_cases(config: &DataConfig) -> Result<CaseStore> {
    match &config.cases_path {
        Some(path) => build_store(&JsonFileSource::new(path)).await,
        None => build_store(&SeedSource).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_source_builds_full_store() {
        let store = build_store(&SeedSource).await.unwrap();
        assert_eq!(store.len(), 6);
        assert_eq!(store.all_records()[0].case_number, "123/2024");
    }

    #[tokio::test]
    async fn test_json_source_skips_invalid_records() {
        let mut records = seed_records();
        records[1].case_number = "not-a-case-number".to_string();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.json");
        std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

        let store = build_store(&JsonFileSource::new(&path)).await.unwrap();
        assert_eq!(store.len(), 5);
        assert!(store
            .all_records()
            .iter()
            .all(|r| r.case_number != "not-a-case-number"));
    }

    #[tokio::test]
    async fn test_missing_data_file_is_an_error() {
        let result = build_store(&JsonFileSource::new("/nonexistent/cases.json")).await;
        match result {
            Err(SearchError::DataFile { path, .. }) => {
                assert!(path.contains("cases.json"));
            }
            other => panic!("expected DataFile error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_cases_defaults_to_seed() {
        let config = DataConfig { cases_path: None };
        let store = load_cases(&config).await.unwrap();
        assert_eq!(store.len(), 6);
    }
}
