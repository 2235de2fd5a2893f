//! Table names and column projections in the hosted database.

pub const PRODUCT_REVIEWS: &str = "product_reviews";
pub const BANNERS: &str = "banners";

/// Review rows with the owning product's id and title embedded.
pub const REVIEW_WITH_PRODUCT: &str = "*,products(id,title)";
