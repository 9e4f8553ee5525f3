//! # Search Category Module
//!
//! ## Purpose
//! The closed enumeration of search categories, the record field group each
//! one matches against, and the presentation metadata (title, description,
//! input placeholder) the front end renders for each category.
//!
//! ## Input/Output Specification
//! - **Input**: Category selection from routes or callers
//! - **Output**: Category metadata and wire endpoint paths
//! - **Invariant**: The enumeration is closed; adding a category is an API change

use serde::{Deserialize, Serialize};
use std::fmt;

/// The field group a query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchCategory {
    CaseNumber,
    Complainant,
    Respondent,
    /// Matches either advocate field; both advocate wire endpoints dispatch
    /// this category.
    Advocate,
    /// Proxied on the respondent field; the record schema has no dedicated
    /// industry field.
    Industry,
    /// Not backed by any stored field; the engine serves a bounded
    /// placeholder instead of matching.
    Judge,
}

/// Presentation metadata for one search category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
}

impl SearchCategory {
    /// All categories in landing-page display order
    pub const ALL: [SearchCategory; 6] = [
        SearchCategory::CaseNumber,
        SearchCategory::Complainant,
        SearchCategory::Respondent,
        SearchCategory::Advocate,
        SearchCategory::Industry,
        SearchCategory::Judge,
    ];

    /// Route slug used by front ends, e.g. "case-number"
    pub fn slug(&self) -> &'static str {
        match self {
            SearchCategory::CaseNumber => "case-number",
            SearchCategory::Complainant => "complainant",
            SearchCategory::Respondent => "respondent",
            SearchCategory::Advocate => "advocate",
            SearchCategory::Industry => "industry",
            SearchCategory::Judge => "judge",
        }
    }

    /// Wire endpoint paths that dispatch this category
    pub fn endpoint_paths(&self) -> &'static [&'static str] {
        match self {
            SearchCategory::CaseNumber => &["/api/cases/by-case-number"],
            SearchCategory::Complainant => &["/api/cases/by-complainant"],
            SearchCategory::Respondent => &["/api/cases/by-respondent"],
            SearchCategory::Advocate => &[
                "/api/cases/by-complainant-advocate",
                "/api/cases/by-respondent-advocate",
            ],
            SearchCategory::Industry => &["/api/cases/by-industry-type"],
            SearchCategory::Judge => &["/api/cases/by-judge"],
        }
    }

    /// Whether matching reads a stored record field. False only for the
    /// judge placeholder.
    pub fn is_field_backed(&self) -> bool {
        !matches!(self, SearchCategory::Judge)
    }

    /// Presentation metadata for forms and the index page
    pub fn info(&self) -> CategoryInfo {
        match self {
            SearchCategory::CaseNumber => CategoryInfo {
                title: "Case Number Search",
                description: "Find cases by specific case number",
                placeholder: "Enter case number (e.g., 123/2025)",
            },
            SearchCategory::Complainant => CategoryInfo {
                title: "Complainant Search",
                description: "Search cases by complainant name",
                placeholder: "Enter complainant name",
            },
            SearchCategory::Respondent => CategoryInfo {
                title: "Respondent Search",
                description: "Find cases by respondent details",
                placeholder: "Enter respondent name or company",
            },
            SearchCategory::Advocate => CategoryInfo {
                title: "Advocate Search",
                description: "Search by complainant or respondent advocate",
                placeholder: "Enter advocate name",
            },
            SearchCategory::Industry => CategoryInfo {
                title: "Industry Type Search",
                description: "Find cases by specific industry category",
                placeholder: "Enter industry type",
            },
            SearchCategory::Judge => CategoryInfo {
                title: "Judge Search",
                description: "Search cases by presiding judge",
                placeholder: "Enter judge name",
            },
        }
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<&str> = SearchCategory::ALL.iter().map(|c| c.slug()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), SearchCategory::ALL.len());
    }

    #[test]
    fn test_advocate_has_two_endpoints() {
        assert_eq!(SearchCategory::Advocate.endpoint_paths().len(), 2);
        for category in SearchCategory::ALL {
            assert!(!category.endpoint_paths().is_empty());
        }
    }

    #[test]
    fn test_only_judge_is_not_field_backed() {
        for category in SearchCategory::ALL {
            assert_eq!(
                category.is_field_backed(),
                category != SearchCategory::Judge
            );
        }
    }
}
