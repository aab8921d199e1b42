//! Simulated OCR capture.
//!
//! There is no real OCR engine behind the scan endpoint: every scan yields
//! the same canned bill text after a configurable delay, mimicking the
//! latency of a hosted OCR call.

use std::time::Duration;

/// Text block produced by every simulated scan.
const SCANNED_BILL_TEXT: &str = "G3 TRANSPORT - TRIP EXPENSE BILL\n\
3/93, Kalaignar Street, Vellalagundam, Salem - 636111.\n\
Mobile: 94882 89991\n\
Bill No: 01 Date: 07/03/2025\n\
Vehicle No: TN77AY3006 Driver Name: Murugan\n\
Trip Details:\n\
S.NO | Description | Amount\n\
1 | Salem - Chennai | 16000\n\
2 | Chennai - Salem | 31700\n\
Total Income | 47700\n\
3 | Pooja Expense | 50\n\
4 | Salem Commission | 900\n\
5 | Unloading Charges | 8756\n\
6 | Police Charge | 300\n\
7 | Parking Fee | 850\n\
8 | Tarpaulin Rent | 500\n\
9 | Driver Batta | 4800\n\
10 | Toll Charges | 1800\n\
11 | Fuel |\n\
12 | Other |\n\
Total Expenses | 17956\n\
Advance Paid:\n\
Balance to Settle:";

/// Fixed-latency stand-in for an OCR engine.
#[derive(Debug, Clone)]
pub struct OcrScanner {
    scan_delay: Duration,
}

impl OcrScanner {
    pub fn new(scan_delay: Duration) -> Self {
        Self { scan_delay }
    }

    /// "Scan" an uploaded bill. Completes after the configured delay and
    /// cannot be cancelled; callers are expected to run at most one scan at
    /// a time per session.
    pub async fn scan(&self) -> String {
        tokio::time::sleep(self.scan_delay).await;
        SCANNED_BILL_TEXT.to_string()
    }
}
