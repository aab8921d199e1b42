use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ParseBillRequest {
    #[validate(length(min = 1, message = "Bill text is required"))]
    pub text: String,
}
