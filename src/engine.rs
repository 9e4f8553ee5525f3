//! # Query Engine Module
//!
//! ## Purpose
//! The core of the service: validates search requests, dispatches them to
//! the field matcher for the requested category, applies the result
//! policies, and returns a deterministic, ordered response.
//!
//! ## Input/Output Specification
//! - **Input**: `SearchRequest` (state, commission, query, category)
//! - **Output**: `CaseSearchResponse` (ordered cases, total count, echo)
//! - **Guarantees**: Validation completes before any store access;
//!   identical requests against an unchanged store yield identical
//!   responses
//!
//! ## Result Policies
//! - **Judge placeholder**: the judge category is not backed by any stored
//!   field; the engine returns the first `judge_placeholder_limit` store
//!   records instead of matching.
//! - **Zero-match fallback**: when a field-backed category matches nothing,
//!   the first `fallback_limit` store records are substituted so the caller
//!   always has something to show. Both policies are deliberate reproductions
//!   of the reference behavior and are counted separately in stats.

use crate::category::SearchCategory;
use crate::config::Config;
use crate::errors::{Result, SearchError};
use crate::matcher;
use crate::reference::ReferenceData;
use crate::store::CaseStore;
use crate::text::fold;
use crate::{validation_error, CaseRecord};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// One search invocation, passed by value into the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Region code, e.g. "KA"
    pub state: String,
    /// Commission code, must belong to `state`
    pub commission: String,
    /// Free-text search term
    pub query: String,
    /// Field group to match against
    pub category: SearchCategory,
}

/// Echo of the originating request, serialized in the wire shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub state: String,
    pub commission: String,
    #[serde(rename = "searchValue")]
    pub search_value: String,
}

impl From<&SearchRequest> for SearchParams {
    fn from(request: &SearchRequest) -> Self {
        Self {
            state: request.state.clone(),
            commission: request.commission.clone(),
            search_value: request.query.clone(),
        }
    }
}

/// Ordered result set for one search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseSearchResponse {
    /// Matching records, store iteration order, no secondary sort
    pub cases: Vec<CaseRecord>,
    /// Always equals `cases.len()`
    pub total_count: usize,
    /// Echo of the originating request
    pub search_params: SearchParams,
}

/// Engine counters, exposed on the stats endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub total_searches: u64,
    pub validation_failures: u64,
    /// Searches answered by the zero-match fallback set
    pub fallback_served: u64,
    /// Searches answered by the judge placeholder set
    pub placeholder_served: u64,
}

/// Main query engine
pub struct QueryEngine {
    config: Arc<Config>,
    store: Arc<CaseStore>,
    reference: Arc<ReferenceData>,
    stats: RwLock<SearchStats>,
}

impl QueryEngine {
    /// Create a new engine over an immutable store and reference tables
    pub fn new(config: Arc<Config>, store: Arc<CaseStore>, reference: Arc<ReferenceData>) -> Self {
        Self {
            config,
            store,
            reference,
            stats: RwLock::new(SearchStats::default()),
        }
    }

    /// Execute one search.
    ///
    /// Fails with `ValidationFailed` naming the offending field when state,
    /// commission, or query is empty, when the query length is out of
    /// bounds, when the state code is unknown, or when the commission does
    /// not belong to the state. Validation performs no store access.
    pub fn search(&self, request: &SearchRequest) -> Result<CaseSearchResponse> {
        let folded_query = match self.validate_request(request) {
            Ok(folded) => folded,
            Err(e) => {
                self.stats.write().validation_failures += 1;
                return Err(e);
            }
        };

        let cases = self.execute(request.category, &folded_query);

        self.stats.write().total_searches += 1;
        debug!(
            category = %request.category,
            state = %request.state,
            commission = %request.commission,
            matched = cases.len(),
            "search executed"
        );

        Ok(CaseSearchResponse {
            total_count: cases.len(),
            search_params: SearchParams::from(request),
            cases,
        })
    }

    /// Apply the matcher and the result policies for one category
    fn execute(&self, category: SearchCategory, folded_query: &str) -> Vec<CaseRecord> {
        if !category.is_field_backed() {
            // Judge placeholder: no stored field carries a judge name, so a
            // bounded store prefix stands in for real matches.
            // TODO: match on a judge field once the record schema grows one.
            self.stats.write().placeholder_served += 1;
            return self.store.prefix(self.config.search.judge_placeholder_limit);
        }

        let matched: Vec<CaseRecord> = self
            .store
            .all_records()
            .iter()
            .filter(|record| matcher::matches(record, category, folded_query))
            .cloned()
            .collect();

        if matched.is_empty() {
            self.stats.write().fallback_served += 1;
            return self.store.prefix(self.config.search.fallback_limit);
        }

        matched
    }

    /// Validate the request and return the folded query.
    ///
    /// Touches only the configuration and the reference tables, never the
    /// store.
    fn validate_request(&self, request: &SearchRequest) -> Result<String> {
        if request.state.trim().is_empty() {
            return Err(validation_error!("state", "state must not be empty"));
        }
        if request.commission.trim().is_empty() {
            return Err(validation_error!(
                "commission",
                "commission must not be empty"
            ));
        }

        let trimmed = request.query.trim();
        if trimmed.is_empty() {
            return Err(validation_error!(
                "searchValue",
                "search term must not be empty"
            ));
        }
        if trimmed.len() < self.config.search.min_query_length {
            return Err(validation_error!(
                "searchValue",
                format!(
                    "search term shorter than minimum {} characters",
                    self.config.search.min_query_length
                )
            ));
        }
        if trimmed.len() > self.config.search.max_query_length {
            return Err(validation_error!(
                "searchValue",
                format!(
                    "search term longer than maximum {} characters",
                    self.config.search.max_query_length
                )
            ));
        }

        if !self.reference.has_state(&request.state) {
            return Err(validation_error!(
                "state",
                format!("unknown state code '{}'", request.state)
            ));
        }
        if !self
            .reference
            .commission_belongs_to_state(&request.state, &request.commission)
        {
            return Err(validation_error!(
                "commission",
                format!(
                    "commission '{}' does not belong to state '{}'",
                    request.commission, request.state
                )
            ));
        }

        Ok(fold(trimmed))
    }

    /// Health check: the engine is healthy when its store and reference
    /// tables are reachable
    pub fn health_check(&self) -> Result<()> {
        if self.reference.states().is_empty() {
            return Err(SearchError::Internal {
                message: "reference data has no states".to_string(),
            });
        }
        // An empty store is valid; touching it proves the snapshot is live
        let _ = self.store.len();
        Ok(())
    }

    /// Snapshot of the engine counters
    pub fn get_stats(&self) -> SearchStats {
        self.stats.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_records;

    fn engine() -> QueryEngine {
        QueryEngine::new(
            Arc::new(Config::default()),
            Arc::new(CaseStore::new(seed_records())),
            Arc::new(ReferenceData::seed()),
        )
    }

    fn request(category: SearchCategory, query: &str) -> SearchRequest {
        SearchRequest {
            state: "KA".to_string(),
            commission: "KA001".to_string(),
            query: query.to_string(),
            category,
        }
    }

    #[test]
    fn test_case_number_search_end_to_end() {
        let engine = engine();
        let response = engine
            .search(&request(SearchCategory::CaseNumber, "123/2024"))
            .unwrap();

        assert_eq!(response.total_count, 1);
        assert_eq!(response.cases[0].case_number, "123/2024");
        assert_eq!(response.search_params.search_value, "123/2024");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let engine = engine();
        let response = engine
            .search(&request(SearchCategory::Complainant, "RAJESH"))
            .unwrap();

        assert_eq!(response.total_count, 1);
        assert_eq!(response.cases[0].complainant, "Rajesh Kumar");
    }

    #[test]
    fn test_advocate_matches_either_field() {
        let engine = engine();
        let response = engine
            .search(&request(SearchCategory::Advocate, "singh"))
            .unwrap();

        let numbers: Vec<&str> = response
            .cases
            .iter()
            .map(|r| r.case_number.as_str())
            .collect();
        // 456/2024 matches only on respondent_advocate "Adv. Singh"
        assert!(numbers.contains(&"456/2024"));
        assert!(numbers.contains(&"303/2024"));
    }

    #[test]
    fn test_zero_match_fallback_is_bounded_prefix() {
        let engine = engine();
        let response = engine
            .search(&request(SearchCategory::Complainant, "nonexistent person"))
            .unwrap();

        assert!(response.total_count <= 2);
        assert_eq!(response.cases[0].case_number, "123/2024");
        assert_eq!(response.cases[1].case_number, "456/2024");
        assert_eq!(engine.get_stats().fallback_served, 1);
    }

    #[test]
    fn test_judge_placeholder_returns_store_prefix() {
        let engine = engine();
        let response = engine
            .search(&request(SearchCategory::Judge, "Justice Rao"))
            .unwrap();

        assert_eq!(response.total_count, 3);
        assert_eq!(response.cases[0].case_number, "123/2024");
        assert_eq!(engine.get_stats().placeholder_served, 1);
    }

    #[test]
    fn test_total_count_equals_cases_len() {
        let engine = engine();
        for category in SearchCategory::ALL {
            let response = engine.search(&request(category, "a")).unwrap();
            assert_eq!(response.total_count, response.cases.len());
        }
    }

    #[test]
    fn test_missing_fields_fail_validation() {
        let engine = engine();
        let cases = [
            (
                SearchRequest {
                    state: "".to_string(),
                    commission: "KA001".to_string(),
                    query: "x".to_string(),
                    category: SearchCategory::CaseNumber,
                },
                "state",
            ),
            (
                SearchRequest {
                    state: "KA".to_string(),
                    commission: "".to_string(),
                    query: "x".to_string(),
                    category: SearchCategory::CaseNumber,
                },
                "commission",
            ),
            (
                SearchRequest {
                    state: "KA".to_string(),
                    commission: "KA001".to_string(),
                    query: "   ".to_string(),
                    category: SearchCategory::CaseNumber,
                },
                "searchValue",
            ),
        ];

        for (request, expected_field) in cases {
            match engine.search(&request) {
                Err(SearchError::ValidationFailed { field, .. }) => {
                    assert_eq!(field, expected_field);
                }
                other => panic!("expected ValidationFailed, got {:?}", other),
            }
        }
        assert_eq!(engine.get_stats().validation_failures, 3);
        assert_eq!(engine.get_stats().total_searches, 0);
    }

    #[test]
    fn test_commission_must_belong_to_state() {
        let engine = engine();
        let mut bad = request(SearchCategory::CaseNumber, "123");
        bad.commission = "MH001".to_string();

        match engine.search(&bad) {
            Err(SearchError::ValidationFailed { field, .. }) => {
                assert_eq!(field, "commission");
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_state_fails_validation() {
        let engine = engine();
        let mut bad = request(SearchCategory::CaseNumber, "123");
        bad.state = "XX".to_string();
        bad.commission = "XX001".to_string();

        match engine.search(&bad) {
            Err(SearchError::ValidationFailed { field, .. }) => {
                assert_eq!(field, "state");
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_query_is_trimmed_before_matching() {
        let engine = engine();
        let response = engine
            .search(&request(SearchCategory::CaseNumber, "  123/2024  "))
            .unwrap();
        assert_eq!(response.total_count, 1);
    }

    #[test]
    fn test_identical_searches_are_idempotent() {
        let engine = engine();
        let req = request(SearchCategory::Respondent, "bank");
        let first = engine.search(&req).unwrap();
        let second = engine.search(&req).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fallback_bounded_by_store_size() {
        let single = vec![seed_records().remove(0)];
        let engine = QueryEngine::new(
            Arc::new(Config::default()),
            Arc::new(CaseStore::new(single)),
            Arc::new(ReferenceData::seed()),
        );

        let response = engine
            .search(&request(SearchCategory::Complainant, "nobody"))
            .unwrap();
        assert_eq!(response.total_count, 1);
    }

    #[test]
    fn test_empty_store_yields_empty_results() {
        let engine = QueryEngine::new(
            Arc::new(Config::default()),
            Arc::new(CaseStore::default()),
            Arc::new(ReferenceData::seed()),
        );

        let response = engine
            .search(&request(SearchCategory::Judge, "anyone"))
            .unwrap();
        assert_eq!(response.total_count, 0);
        assert!(response.cases.is_empty());
    }

    #[test]
    fn test_wire_shape_of_search_params() {
        let engine = engine();
        let response = engine
            .search(&request(SearchCategory::CaseNumber, "123/2024"))
            .unwrap();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["total_count"], 1);
        assert_eq!(json["search_params"]["searchValue"], "123/2024");
        assert_eq!(json["search_params"]["state"], "KA");
    }
}
