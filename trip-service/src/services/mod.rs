//! Business logic services for trip-service.

pub mod auth;
pub mod bill_parser;
pub mod database;
pub mod metrics;
pub mod ocr;
pub mod trip_metrics;

pub use auth::AuthService;
pub use bill_parser::parse_bill_text;
pub use database::Database;
pub use ocr::OcrScanner;
pub use trip_metrics::{calculate_trip_metrics, TripFinancials};
