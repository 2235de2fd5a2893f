use std::cmp::Ordering;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::Extra;
use crate::ids::RecordId;

/// A promotional banner shown on the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Banner {
    pub id: RecordId,
    pub is_active: bool,
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub display_order: Option<Number>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Banner {
    #[must_use]
    pub fn display_position(&self) -> Option<f64> {
        self.display_order.as_ref().and_then(Number::as_f64)
    }

    /// `display_order` ascending with unset positions last, as the database
    /// sorts `order=display_order.asc`.
    #[must_use]
    pub fn cmp_display_order(&self, other: &Self) -> Ordering {
        match (self.display_position(), other.display_position()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}
