use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{Extra, ProductRef};
use crate::enums::ReviewStatus;
use crate::ids::RecordId;

/// A customer review of a product, subject to moderation.
///
/// `status` and `rating` are kept as stored. The table's own constraints
/// decide what is valid; rows the server does not recognise pass through.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProductReview {
    pub id: RecordId,
    pub product_id: RecordId,
    pub status: String,
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub rating: Option<Number>,
    #[serde(default)]
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Embedded product projection (`products(id,title)`), present on joined queries.
    #[serde(default)]
    pub products: Option<ProductRef>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl ProductReview {
    /// The stored status, if it is one of the moderation states.
    #[must_use]
    pub fn review_status(&self) -> Option<ReviewStatus> {
        self.status.parse().ok()
    }

    #[must_use]
    pub fn rating_value(&self) -> Option<f64> {
        self.rating.as_ref().and_then(Number::as_f64)
    }
}
