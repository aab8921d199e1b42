//! Trip model for trip-service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::LineItem;

/// One logistics job with its income and expense line items.
///
/// `total_expense` and `profit` are derived fields: they are recomputed from
/// `revenue` and the line items on every write and are never accepted from
/// the outside. Wire names keep the original API shape, which mixes
/// snake_case and camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub date: NaiveDate,
    pub vehicle_no: String,
    #[serde(rename = "driverName")]
    pub driver_name: String,
    pub from_city: String,
    pub to_city: String,
    pub revenue: i64,
    pub total_expense: i64,
    pub profit: i64,
    #[serde(rename = "incomeItems", default)]
    pub income_items: Vec<LineItem>,
    #[serde(rename = "expenseItems", default)]
    pub expense_items: Vec<LineItem>,
    #[serde(default)]
    pub notes: String,
}

/// Raw trip row as stored: line items are serialized JSON text columns.
#[derive(Debug, FromRow)]
pub struct TripRow {
    pub id: String,
    pub date: NaiveDate,
    pub vehicle_no: String,
    pub driver_name: String,
    pub from_city: String,
    pub to_city: String,
    pub revenue: i64,
    pub total_expense: i64,
    pub profit: i64,
    pub income_items: Option<String>,
    pub expense_items: Option<String>,
    pub notes: String,
}

impl From<TripRow> for Trip {
    fn from(row: TripRow) -> Self {
        Trip {
            id: row.id,
            date: row.date,
            vehicle_no: row.vehicle_no,
            driver_name: row.driver_name,
            from_city: row.from_city,
            to_city: row.to_city,
            revenue: row.revenue,
            total_expense: row.total_expense,
            profit: row.profit,
            income_items: parse_items(row.income_items.as_deref()),
            expense_items: parse_items(row.expense_items.as_deref()),
            notes: row.notes,
        }
    }
}

/// Absent or malformed stored item text degrades to an empty list.
fn parse_items(raw: Option<&str>) -> Vec<LineItem> {
    raw.and_then(|text| serde_json::from_str(text).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(income: Option<&str>, expense: Option<&str>) -> TripRow {
        TripRow {
            id: "BILL-042".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 13).unwrap(),
            vehicle_no: "TN54Q1234".to_string(),
            driver_name: "Suresh".to_string(),
            from_city: "Salem".to_string(),
            to_city: "Chennai".to_string(),
            revenue: 500,
            total_expense: 350,
            profit: 150,
            income_items: income.map(str::to_string),
            expense_items: expense.map(str::to_string),
            notes: String::new(),
        }
    }

    #[test]
    fn stored_item_text_deserializes_to_line_items() {
        let trip: Trip = row(
            Some(r#"[{"description":"Salem - Chennai","amount":500}]"#),
            Some(r#"[{"description":"Fuel","amount":100},{"description":"Toll Charges","amount":250}]"#),
        )
        .into();

        assert_eq!(trip.income_items, vec![LineItem::new("Salem - Chennai", 500)]);
        assert_eq!(
            trip.expense_items,
            vec![LineItem::new("Fuel", 100), LineItem::new("Toll Charges", 250)]
        );
    }

    #[test]
    fn null_item_columns_become_empty_lists() {
        let trip: Trip = row(None, None).into();
        assert!(trip.income_items.is_empty());
        assert!(trip.expense_items.is_empty());
    }

    #[test]
    fn malformed_item_text_becomes_empty_list() {
        let trip: Trip = row(Some("not json"), Some("[{\"description\":")).into();
        assert!(trip.income_items.is_empty());
        assert!(trip.expense_items.is_empty());
    }
}
