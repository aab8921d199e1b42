//! Derivation of trip financial figures from line items.

use serde::{Deserialize, Serialize};

use crate::models::LineItem;

/// Trip-shaped financial record: itemized expenses when available, flat
/// legacy expense fields otherwise. `total_expense` and `profit` carry the
/// derived figures after [`calculate_trip_metrics`] has run; any values
/// already present are overwritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripFinancials {
    #[serde(default)]
    pub revenue: Option<i64>,
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
    pub total_expense: i64,
    #[serde(default)]
    pub profit: i64,
}

/// Recompute `total_expense` and `profit` for a trip.
///
/// When expense line items are present they are the single source of truth;
/// otherwise the flat legacy expense fields are summed, each missing field
/// counting as zero. `profit = revenue - total_expense` and may be negative.
/// Pure and idempotent: the derived fields are always recomputed from their
/// inputs, never read back.
pub fn calculate_trip_metrics(mut trip: TripFinancials) -> TripFinancials {
    let total_expense = if trip.expense_items.is_empty() {
        trip.fuel_cost.unwrap_or(0)
            + trip.toll_cost.unwrap_or(0)
            + trip.driver_wage.unwrap_or(0)
            + trip.commission.unwrap_or(0)
            + trip.other_expenses.unwrap_or(0)
    } else {
        trip.expense_items.iter().map(|item| item.amount).sum()
    };

    trip.total_expense = total_expense;
    trip.profit = trip.revenue.unwrap_or(0) - total_expense;
    trip
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn itemized_expenses_drive_the_totals() {
        let result = calculate_trip_metrics(TripFinancials {
            revenue: Some(500),
            expense_items: vec![
                LineItem::new("Fuel", 100),
                LineItem::new("Toll Charges", 250),
            ],
            ..TripFinancials::default()
        });

        assert_eq!(result.total_expense, 350);
        assert_eq!(result.profit, 150);
    }

    #[test]
    fn legacy_fields_are_summed_when_no_items_exist() {
        let result = calculate_trip_metrics(TripFinancials {
            revenue: Some(500),
            fuel_cost: Some(100),
            toll_cost: Some(50),
            driver_wage: Some(200),
            commission: Some(20),
            other_expenses: Some(10),
            ..TripFinancials::default()
        });

        assert_eq!(result.total_expense, 380);
        assert_eq!(result.profit, 120);
    }

    #[test]
    fn items_take_precedence_over_legacy_fields() {
        let result = calculate_trip_metrics(TripFinancials {
            revenue: Some(500),
            expense_items: vec![LineItem::new("Parking Fee", 75)],
            fuel_cost: Some(9999),
            ..TripFinancials::default()
        });

        assert_eq!(result.total_expense, 75);
        assert_eq!(result.profit, 425);
    }

    #[test]
    fn recomputing_is_idempotent() {
        let once = calculate_trip_metrics(TripFinancials {
            revenue: Some(500),
            expense_items: vec![
                LineItem::new("Fuel", 100),
                LineItem::new("Toll Charges", 250),
            ],
            // Stale derived values that must be overwritten, not trusted.
            total_expense: 1,
            profit: -1,
            ..TripFinancials::default()
        });
        let twice = calculate_trip_metrics(once.clone());

        assert_eq!(once.total_expense, twice.total_expense);
        assert_eq!(once.profit, twice.profit);
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_revenue_counts_as_zero_and_profit_goes_negative() {
        let result = calculate_trip_metrics(TripFinancials {
            expense_items: vec![LineItem::new("Driver Batta", 700)],
            ..TripFinancials::default()
        });

        assert_eq!(result.total_expense, 700);
        assert_eq!(result.profit, -700);
    }

    #[test]
    fn empty_input_yields_zeroes() {
        let result = calculate_trip_metrics(TripFinancials::default());

        assert_eq!(result.total_expense, 0);
        assert_eq!(result.profit, 0);
    }
}
