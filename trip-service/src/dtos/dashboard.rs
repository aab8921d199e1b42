use serde::Serialize;

/// Aggregate figures folded from the stored trips. "Active" counts cover the
/// trailing 30 days.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_trips: i64,
    pub total_income: i64,
    pub total_expenses: i64,
    pub total_profit: i64,
    pub active_drivers: i64,
    pub active_vehicles: i64,
}
