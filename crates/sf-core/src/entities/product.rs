use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Extra;
use crate::ids::RecordId;

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Product {
    pub id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// The `{ id, title }` projection embedded into review rows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProductRef {
    pub id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
}

impl From<&Product> for ProductRef {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
        }
    }
}
