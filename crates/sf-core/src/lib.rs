//! # sf-core
//!
//! Core types shared across the storefront crates:
//! - Entity structs for records owned by the hosted backend (reviews, products,
//!   banners, auth users and sessions)
//! - Record identifiers (integer or UUID keys)
//! - Status enums with their wire representations
//! - Cross-cutting error types
//! - JSON response bodies returned by the HTTP API

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod tables;
