use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{LineItem, Trip};
use crate::services::{calculate_trip_metrics, TripFinancials};

/// Trip as submitted by a client: everything but the derived financial
/// fields, which the server always computes itself. Unknown fields
/// (including client-supplied `total_expense`/`profit`) are ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTripRequest {
    #[validate(length(min = 1, message = "Trip id is required"))]
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub vehicle_no: String,
    #[serde(default, rename = "driverName")]
    pub driver_name: String,
    #[serde(default)]
    pub from_city: String,
    #[serde(default)]
    pub to_city: String,
    #[serde(default)]
    pub revenue: Option<i64>,
    #[serde(default, rename = "incomeItems")]
    pub income_items: Vec<LineItem>,
    #[serde(default, rename = "expenseItems")]
    pub expense_items: Vec<LineItem>,
    #[serde(default)]
    pub fuel_cost: Option<i64>,
    #[serde(default)]
    pub toll_cost: Option<i64>,
    #[serde(default)]
    pub driver_wage: Option<i64>,
    #[serde(default)]
    pub commission: Option<i64>,
    #[serde(default)]
    pub other_expenses: Option<i64>,
    #[serde(default)]
    pub notes: String,
}

impl CreateTripRequest {
    /// Build the persistable trip, deriving `total_expense` and `profit`
    /// from the submitted line items (or the flat legacy expense fields).
    pub fn into_trip(self) -> Trip {
        let financials = calculate_trip_metrics(TripFinancials {
            revenue: self.revenue,
            expense_items: self.expense_items.clone(),
            fuel_cost: self.fuel_cost,
            toll_cost: self.toll_cost,
            driver_wage: self.driver_wage,
            commission: self.commission,
            other_expenses: self.other_expenses,
            ..TripFinancials::default()
        });

        Trip {
            id: self.id,
            date: self.date,
            vehicle_no: self.vehicle_no,
            driver_name: self.driver_name,
            from_city: self.from_city,
            to_city: self.to_city,
            revenue: self.revenue.unwrap_or(0),
            total_expense: financials.total_expense,
            profit: financials.profit,
            income_items: self.income_items,
            expense_items: self.expense_items,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTripResponse {
    pub message: String,
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteTripResponse {
    pub message: String,
    pub changes: u64,
}
