//! Dashboard aggregation tests for trip-service.

mod common;

use chrono::{Days, Utc};
use common::{sample_trip_payload, TestApp};

#[tokio::test]
async fn summary_of_an_empty_store_is_all_zeroes() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/dashboard/summary").await;

    assert_eq!(response.status(), 200);
    let summary: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(summary["totalTrips"], 0);
    assert_eq!(summary["totalIncome"], 0);
    assert_eq!(summary["totalExpenses"], 0);
    assert_eq!(summary["totalProfit"], 0);
    assert_eq!(summary["activeDrivers"], 0);
    assert_eq!(summary["activeVehicles"], 0);
}

#[tokio::test]
async fn summary_folds_totals_and_counts_recent_activity() {
    let app = TestApp::spawn().await;

    // One trip well inside the 30-day activity window, one far outside it.
    let recent_date = (Utc::now().date_naive() - Days::new(5)).to_string();
    let mut recent = sample_trip_payload("BILL-RECENT");
    recent["date"] = serde_json::json!(recent_date);

    let mut old = sample_trip_payload("BILL-OLD");
    old["date"] = serde_json::json!("2020-01-01");
    old["driverName"] = serde_json::json!("Karthik");
    old["vehicle_no"] = serde_json::json!("AP29AY4288");

    assert_eq!(app.post_json("/api/trips", &recent).await.status(), 201);
    assert_eq!(app.post_json("/api/trips", &old).await.status(), 201);

    let summary: serde_json::Value = app
        .get("/api/dashboard/summary")
        .await
        .json()
        .await
        .expect("Invalid JSON");

    assert_eq!(summary["totalTrips"], 2);
    assert_eq!(summary["totalIncome"], 47700 * 2);
    assert_eq!(summary["totalExpenses"], 15050 * 2);
    assert_eq!(summary["totalProfit"], (47700 - 15050) * 2);
    // Only the recent trip's driver and vehicle count as active.
    assert_eq!(summary["activeDrivers"], 1);
    assert_eq!(summary["activeVehicles"], 1);
}
