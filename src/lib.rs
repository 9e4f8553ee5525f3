//! # Lexi Consumer Court Case Search
//!
//! ## Overview
//! This library implements a search engine for Indian District Consumer Court
//! (DCDRC) case records: a pure query engine that validates search requests,
//! dispatches them to per-category field matchers, and returns deterministic,
//! ordered result sets over an immutable in-memory record store.
//!
//! ## Architecture
//! The system is composed of several key modules:
//! - `ingestion`: Startup data sources and record validation
//! - `text`: Query and field folding for case-insensitive matching
//! - `category`: Search categories and their presentation metadata
//! - `reference`: Static state and commission lookup tables
//! - `store`: Ordered, read-only case record store
//! - `matcher`: Per-category match predicates
//! - `engine`: Request validation, dispatch, and result policies
//! - `api`: REST API endpoints
//! - `config`: Configuration management and settings
//! - `errors`: Centralized error handling and types
//!
//! ## Input/Output Specification
//! - **Input**: Search requests (state, commission, free-text query, category)
//! - **Output**: Ordered case records with a total count and request echo
//! - **Guarantees**: Deterministic results, store iteration order preserved
//!
//! ## Usage
//! ```rust,no_run
//! use lexi_case_search::{Config, QueryEngine, SearchCategory, SearchRequest};
//! use lexi_case_search::reference::ReferenceData;
//! use lexi_case_search::store::{seed_records, CaseStore};
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(Config::default());
//!     let store = Arc::new(CaseStore::new(seed_records()));
//!     let reference = Arc::new(ReferenceData::seed());
//!     let engine = QueryEngine::new(config, store, reference);
//!
//!     let response = engine.search(&SearchRequest {
//!         state: "KA".to_string(),
//!         commission: "KA001".to_string(),
//!         query: "123/2024".to_string(),
//!         category: SearchCategory::CaseNumber,
//!     })?;
//!     println!("Found {} cases", response.total_count);
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod errors;
pub mod ingestion;
pub mod text;
pub mod category;
pub mod reference;
pub mod store;
pub mod matcher;
pub mod engine;
pub mod api;

// Utilities
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use errors::{Result, SearchError};
pub use category::SearchCategory;
pub use engine::{CaseSearchResponse, QueryEngine, SearchRequest};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Lifecycle phase of a consumer court case.
///
/// Stage names arrive as free-form strings from data sources; anything
/// outside the four known phases folds into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CaseStage {
    Hearing,
    Evidence,
    Judgment,
    Closed,
    Other,
}

impl CaseStage {
    /// Canonical display name of the stage
    pub fn name(&self) -> &'static str {
        match self {
            CaseStage::Hearing => "Hearing",
            CaseStage::Evidence => "Evidence",
            CaseStage::Judgment => "Judgment",
            CaseStage::Closed => "Closed",
            CaseStage::Other => "Other",
        }
    }
}

impl From<String> for CaseStage {
    fn from(value: String) -> Self {
        match value.trim() {
            s if s.eq_ignore_ascii_case("hearing") => CaseStage::Hearing,
            s if s.eq_ignore_ascii_case("evidence") => CaseStage::Evidence,
            s if s.eq_ignore_ascii_case("judgment") => CaseStage::Judgment,
            s if s.eq_ignore_ascii_case("closed") => CaseStage::Closed,
            _ => CaseStage::Other,
        }
    }
}

impl From<CaseStage> for String {
    fn from(stage: CaseStage) -> Self {
        stage.name().to_string()
    }
}

impl fmt::Display for CaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One consumer court case record.
///
/// Records are created by ingestion and never mutated afterwards; the query
/// engine only ever hands out copies. The field set is the wire contract:
/// `filing_date` serializes as an ISO 8601 date string and `case_stage` as
/// its stage name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Case number in `<digits>/<year>` format, e.g. "123/2024"
    pub case_number: String,
    /// Current lifecycle stage
    pub case_stage: CaseStage,
    /// Date the complaint was filed
    pub filing_date: NaiveDate,
    /// Complainant name
    pub complainant: String,
    /// Advocate representing the complainant
    pub complainant_advocate: String,
    /// Respondent name or company
    pub respondent: String,
    /// Advocate representing the respondent
    pub respondent_advocate: String,
    /// Link to the case documents
    pub document_link: String,
}

/// Application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Config>,
    pub engine: Arc<engine::QueryEngine>,
    pub store: Arc<store::CaseStore>,
    pub reference: Arc<reference::ReferenceData>,
    pub started_at: Instant,
}
