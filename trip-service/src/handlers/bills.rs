//! Bill processing: raw text parsing and the simulated OCR scan.

use axum::{extract::State, Json};

use crate::dtos::bill::ParseBillRequest;
use crate::models::ParsedBillDraft;
use crate::services::metrics::BILL_PARSES_TOTAL;
use crate::services::parse_bill_text;
use crate::utils::ValidatedJson;
use crate::AppState;

/// Parse a submitted bill text block into a draft. Unmatched fields degrade
/// to their empty values; this endpoint does not fail on messy input.
pub async fn parse_bill(ValidatedJson(req): ValidatedJson<ParseBillRequest>) -> Json<ParsedBillDraft> {
    BILL_PARSES_TOTAL.with_label_values(&["text"]).inc();
    Json(parse_bill_text(&req.text))
}

/// Run the simulated OCR scan and parse its output. One scan per session at
/// a time is the caller's contract; requests are served independently here.
pub async fn scan_bill(State(state): State<AppState>) -> Json<ParsedBillDraft> {
    let text = state.scanner.scan().await;
    BILL_PARSES_TOTAL.with_label_values(&["scan"]).inc();
    Json(parse_bill_text(&text))
}
