//! Entity structs for records owned by the hosted backend.
//!
//! The application holds no authoritative copy of this data. Each struct types
//! the columns the server reads and keeps every other column in a flattened
//! `extra` map, so pass-through responses never drop fields.

mod auth;
mod banner;
mod product;
mod review;

pub use auth::{AuthSession, AuthUser, VerifiedOtp};
pub use banner::Banner;
pub use product::{Product, ProductRef};
pub use review::ProductReview;

/// Unknown columns carried through untouched.
pub type Extra = serde_json::Map<String, serde_json::Value>;
