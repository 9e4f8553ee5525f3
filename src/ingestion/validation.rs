//! # Record Validation Module
//!
//! ## Purpose
//! Validates case records during ingestion, before the store is built, so
//! the query engine only ever sees well-formed data.
//!
//! ## Input/Output Specification
//! - **Input**: `CaseRecord` values from any data source
//! - **Output**: Pass, or `InvalidRecord` naming the failing rule
//! - **Validation Rules**: Case number format, required fields, filing date
//!
//! ## Key Features
//! - Rule-trait design; adding a rule does not touch the pipeline
//! - First failing rule wins, with field-level detail in the error

use crate::errors::{Result, SearchError};
use crate::CaseRecord;
use regex::Regex;

/// Trait for validation rules
pub trait ValidationRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn validate(&self, record: &CaseRecord) -> std::result::Result<(), String>;
}

/// Case data validator aggregating all rules
pub struct RecordValidator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl RecordValidator {
    /// Create a validator with the standard rule set
    pub fn new() -> Result<Self> {
        let rules: Vec<Box<dyn ValidationRule>> = vec![
            Box::new(CaseNumberFormat::new()?),
            Box::new(RequiredFields),
            Box::new(FilingDateRange),
        ];

        Ok(Self { rules })
    }

    /// Validate a record against all rules; the first failure is returned
    pub fn validate(&self, record: &CaseRecord) -> Result<()> {
        for rule in &self.rules {
            if let Err(details) = rule.validate(record) {
                return Err(SearchError::InvalidRecord {
                    case_number: record.case_number.clone(),
                    rule: rule.name().to_string(),
                    details,
                });
            }
        }
        Ok(())
    }
}

/// Case numbers follow `<digits>/<year>`, e.g. "123/2024"
struct CaseNumberFormat {
    pattern: Regex,
}

impl CaseNumberFormat {
    fn new() -> Result<Self> {
        let pattern = Regex::new(r"^\d+/\d{4}$").map_err(|e| SearchError::Internal {
            message: format!("Invalid case number pattern: {}", e),
        })?;
        Ok(Self { pattern })
    }
}

impl ValidationRule for CaseNumberFormat {
    fn name(&self) -> &'static str {
        "case_number_format"
    }

    fn validate(&self, record: &CaseRecord) -> std::result::Result<(), String> {
        if record.case_number.is_empty() {
            return Err("case_number is empty".to_string());
        }
        if !self.pattern.is_match(&record.case_number) {
            return Err(format!(
                "case_number '{}' does not match <digits>/<year>",
                record.case_number
            ));
        }
        Ok(())
    }
}

/// Party, advocate, and document fields must be present
struct RequiredFields;

impl ValidationRule for RequiredFields {
    fn name(&self) -> &'static str {
        "required_fields"
    }

    fn validate(&self, record: &CaseRecord) -> std::result::Result<(), String> {
        let fields = [
            ("complainant", &record.complainant),
            ("complainant_advocate", &record.complainant_advocate),
            ("respondent", &record.respondent),
            ("respondent_advocate", &record.respondent_advocate),
            ("document_link", &record.document_link),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(format!("{} is empty", name));
            }
        }
        Ok(())
    }
}

/// Filing dates must fall between the Consumer Protection Act (1986) and the
/// near future
struct FilingDateRange;

impl ValidationRule for FilingDateRange {
    fn name(&self) -> &'static str {
        "filing_date_range"
    }

    fn validate(&self, record: &CaseRecord) -> std::result::Result<(), String> {
        use chrono::Datelike;

        let year = record.filing_date.year();
        let max_year = chrono::Utc::now().year() + 1;

        if year < 1986 || year > max_year {
            return Err(format!(
                "filing_date year {} outside {}..={}",
                year, 1986, max_year
            ));
        }
        Ok(())
    }
}
