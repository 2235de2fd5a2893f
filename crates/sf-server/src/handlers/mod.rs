//! Route handlers.
//!
//! Each handler is a thin adapter: validate input, make one [`Backend`]
//! call, shape the JSON body. Failures propagate as [`AppError`].
//!
//! [`Backend`]: sf_backend::Backend
//! [`AppError`]: crate::error::AppError

pub mod auth;
pub mod banners;
pub mod health;
pub mod products;
pub mod reviews;
pub mod widgets;
