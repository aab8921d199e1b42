//! Parsed bill draft - the transient output of the bill text parser.

use serde::{Deserialize, Serialize};

use crate::models::LineItem;

/// Structured fields extracted from one bill text block. Lives only between
/// parse time and user confirmation; never persisted. Every field degrades
/// to its empty value when the source text lacks a match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedBillDraft {
    pub bill_no: String,
    pub date: String,
    pub vehicle_no: String,
    pub driver_name: String,
    pub income_items: Vec<LineItem>,
    pub expense_items: Vec<LineItem>,
    pub total_income: i64,
    pub total_expense: i64,
    pub remaining: i64,
}
