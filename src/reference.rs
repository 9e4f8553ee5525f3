//! # Reference Data Module
//!
//! ## Purpose
//! Static lookup tables for states and district commissions. Loaded once at
//! startup and read-only afterwards; the query engine consults them to check
//! that a requested commission belongs to the requested state.
//!
//! ## Input/Output Specification
//! - **Input**: State codes and commission ids
//! - **Output**: Ordered state and commission sequences
//! - **Policy**: Unknown state id is `NotFound`; a known state with no listed
//!   commissions yields an empty sequence
//!
//! ## Key Features
//! - Deterministic iteration order (insertion order)
//! - Commission-to-state ownership checks for request validation

use crate::errors::{Result, SearchError};
use serde::{Deserialize, Serialize};

/// A state covered by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Region code, e.g. "KA"
    pub id: String,
    /// Display name, e.g. "KARNATAKA"
    pub name: String,
}

/// A district consumer court commission, owned by one state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commission {
    /// Commission code, e.g. "KA001"
    pub id: String,
    /// Display name
    pub name: String,
    /// Owning state code
    pub state_id: String,
}

/// Load-once container for states and commissions
#[derive(Debug, Clone)]
pub struct ReferenceData {
    states: Vec<State>,
    commissions: Vec<Commission>,
}

impl ReferenceData {
    /// Build reference data from explicit tables
    pub fn new(states: Vec<State>, commissions: Vec<Commission>) -> Self {
        Self {
            states,
            commissions,
        }
    }

    /// Built-in reference tables covering the demonstration dataset.
    ///
    /// TN and UP are listed states without commissions; lookups for them
    /// return an empty sequence rather than an error.
    pub fn seed() -> Self {
        let states = vec![
            State { id: "KA".into(), name: "KARNATAKA".into() },
            State { id: "MH".into(), name: "MAHARASHTRA".into() },
            State { id: "DL".into(), name: "DELHI".into() },
            State { id: "TN".into(), name: "TAMIL NADU".into() },
            State { id: "UP".into(), name: "UTTAR PRADESH".into() },
        ];

        let commissions = vec![
            Commission {
                id: "KA001".into(),
                name: "Bangalore 1st & Rural Additional".into(),
                state_id: "KA".into(),
            },
            Commission {
                id: "KA002".into(),
                name: "Bangalore 2nd Additional".into(),
                state_id: "KA".into(),
            },
            Commission {
                id: "KA003".into(),
                name: "Mysore District".into(),
                state_id: "KA".into(),
            },
            Commission {
                id: "MH001".into(),
                name: "Mumbai District".into(),
                state_id: "MH".into(),
            },
            Commission {
                id: "MH002".into(),
                name: "Pune District".into(),
                state_id: "MH".into(),
            },
            Commission {
                id: "MH003".into(),
                name: "Nagpur District".into(),
                state_id: "MH".into(),
            },
            Commission {
                id: "DL001".into(),
                name: "Delhi Central".into(),
                state_id: "DL".into(),
            },
            Commission {
                id: "DL002".into(),
                name: "Delhi North".into(),
                state_id: "DL".into(),
            },
            Commission {
                id: "DL003".into(),
                name: "Delhi South".into(),
                state_id: "DL".into(),
            },
        ];

        Self::new(states, commissions)
    }

    /// All states, in load order
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Whether the state code is known
    pub fn has_state(&self, state_id: &str) -> bool {
        self.states.iter().any(|s| s.id == state_id)
    }

    /// Commissions belonging to the given state, in load order.
    ///
    /// Fails with `NotFound` for an unknown state id; a known state with no
    /// commissions yields an empty vector.
    pub fn commissions_for_state(&self, state_id: &str) -> Result<Vec<Commission>> {
        if !self.has_state(state_id) {
            return Err(SearchError::not_found("state", state_id));
        }

        Ok(self
            .commissions
            .iter()
            .filter(|c| c.state_id == state_id)
            .cloned()
            .collect())
    }

    /// Check that a commission exists and is owned by the given state
    pub fn commission_belongs_to_state(&self, state_id: &str, commission_id: &str) -> bool {
        self.commissions
            .iter()
            .any(|c| c.id == commission_id && c.state_id == state_id)
    }
}
