//! Line item model for trip-service.

use serde::{Deserialize, Serialize};

/// A single labeled monetary entry belonging to a trip's income or expense
/// list. Amounts are whole currency units; there are no fractional sub-units.
/// Immutable once recorded into a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub amount: i64,
}

impl LineItem {
    pub fn new(description: impl Into<String>, amount: i64) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}
