//! Request/response types for the REST surface.

pub mod auth;
pub mod bill;
pub mod dashboard;
pub mod trip;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
