//! Dashboard aggregates folded from stored trips.

use std::collections::HashSet;

use axum::{extract::State, Json};
use chrono::{Days, Utc};

use crate::dtos::dashboard::DashboardSummary;
use crate::error::AppError;
use crate::AppState;

/// Totals across all trips plus driver/vehicle activity over the trailing
/// 30 days. Computation happens here, on already-derived per-trip figures.
pub async fn summary(State(state): State<AppState>) -> Result<Json<DashboardSummary>, AppError> {
    let trips = state.db.list_trips().await?;

    let total_income: i64 = trips.iter().map(|t| t.revenue).sum();
    let total_expenses: i64 = trips.iter().map(|t| t.total_expense).sum();

    let cutoff = Utc::now().date_naive() - Days::new(30);
    let mut active_drivers: HashSet<&str> = HashSet::new();
    let mut active_vehicles: HashSet<&str> = HashSet::new();
    for trip in trips.iter().filter(|t| t.date > cutoff) {
        if !trip.driver_name.is_empty() {
            active_drivers.insert(trip.driver_name.as_str());
        }
        if !trip.vehicle_no.is_empty() {
            active_vehicles.insert(trip.vehicle_no.as_str());
        }
    }

    Ok(Json(DashboardSummary {
        total_trips: trips.len() as i64,
        total_income,
        total_expenses,
        total_profit: total_income - total_expenses,
        active_drivers: active_drivers.len() as i64,
        active_vehicles: active_vehicles.len() as i64,
    }))
}
