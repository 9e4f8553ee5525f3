//! # Case Record Store Module
//!
//! ## Purpose
//! The in-memory, ordered, read-only collection of case records the query
//! engine searches over. Built once at startup by ingestion; a real database
//! behind the same read contract can replace it without touching the engine.
//!
//! ## Input/Output Specification
//! - **Input**: Validated case records, in source order
//! - **Output**: Immutable record slices, deterministic iteration order
//! - **Failure**: None; an empty store is valid and yields empty results

use crate::{CaseRecord, CaseStage};
use chrono::NaiveDate;

/// Ordered, immutable case record store
#[derive(Debug, Clone, Default)]
pub struct CaseStore {
    records: Vec<CaseRecord>,
}

impl CaseStore {
    /// Build a store from records, preserving their order
    pub fn new(records: Vec<CaseRecord>) -> Self {
        Self { records }
    }

    /// All records, in insertion order
    pub fn all_records(&self) -> &[CaseRecord] {
        &self.records
    }

    /// Copies of the first `limit` records, used by the fallback and judge
    /// placeholder policies
    pub fn prefix(&self, limit: usize) -> Vec<CaseRecord> {
        self.records.iter().take(limit).cloned().collect()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// Built-in demonstration dataset: six cases across e-commerce, banking,
/// telecom, and food delivery respondents.
pub fn seed_records() -> Vec<CaseRecord> {
    vec![
        CaseRecord {
            case_number: "123/2024".to_string(),
            case_stage: CaseStage::Hearing,
            filing_date: date(2024, 3, 15),
            complainant: "Rajesh Kumar".to_string(),
            complainant_advocate: "Adv. Reddy".to_string(),
            respondent: "Flipkart India Pvt Ltd".to_string(),
            respondent_advocate: "Adv. Mehta".to_string(),
            document_link: "#case-123-2024".to_string(),
        },
        CaseRecord {
            case_number: "456/2024".to_string(),
            case_stage: CaseStage::Evidence,
            filing_date: date(2024, 5, 20),
            complainant: "Priya Sharma".to_string(),
            complainant_advocate: "Adv. Kumar".to_string(),
            respondent: "Amazon Seller Services".to_string(),
            respondent_advocate: "Adv. Singh".to_string(),
            document_link: "#case-456-2024".to_string(),
        },
        CaseRecord {
            case_number: "789/2024".to_string(),
            case_stage: CaseStage::Judgment,
            filing_date: date(2024, 1, 10),
            complainant: "Suresh Reddy".to_string(),
            complainant_advocate: "Adv. Reddy".to_string(),
            respondent: "Samsung India Electronics".to_string(),
            respondent_advocate: "Adv. Patel".to_string(),
            document_link: "#case-789-2024".to_string(),
        },
        CaseRecord {
            case_number: "101/2024".to_string(),
            case_stage: CaseStage::Closed,
            filing_date: date(2023, 12, 5),
            complainant: "Meera Patel".to_string(),
            complainant_advocate: "Adv. Kumar".to_string(),
            respondent: "ICICI Bank Ltd".to_string(),
            respondent_advocate: "Adv. Joshi".to_string(),
            document_link: "#case-101-2024".to_string(),
        },
        CaseRecord {
            case_number: "202/2024".to_string(),
            case_stage: CaseStage::Hearing,
            filing_date: date(2024, 4, 12),
            complainant: "Anil Gupta".to_string(),
            complainant_advocate: "Adv. Mehta".to_string(),
            respondent: "Airtel Payments Bank".to_string(),
            respondent_advocate: "Adv. Sharma".to_string(),
            document_link: "#case-202-2024".to_string(),
        },
        CaseRecord {
            case_number: "303/2024".to_string(),
            case_stage: CaseStage::Evidence,
            filing_date: date(2024, 6, 8),
            complainant: "Kavita Singh".to_string(),
            complainant_advocate: "Adv. Singh".to_string(),
            respondent: "Zomato Ltd".to_string(),
            respondent_advocate: "Adv. Agarwal".to_string(),
            document_link: "#case-303-2024".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_preserves_insertion_order() {
        let store = CaseStore::new(seed_records());
        let numbers: Vec<&str> = store
            .all_records()
            .iter()
            .map(|r| r.case_number.as_str())
            .collect();

        assert_eq!(
            numbers,
            vec!["123/2024", "456/2024", "789/2024", "101/2024", "202/2024", "303/2024"]
        );
    }

    #[test]
    fn test_prefix_is_bounded() {
        let store = CaseStore::new(seed_records());
        assert_eq!(store.prefix(2).len(), 2);
        assert_eq!(store.prefix(100).len(), store.len());
        assert!(CaseStore::default().prefix(3).is_empty());
    }

    #[test]
    fn test_empty_store_is_valid() {
        let store = CaseStore::default();
        assert!(store.is_empty());
        assert!(store.all_records().is_empty());
    }
}
