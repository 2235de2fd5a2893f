//! # sf-ui
//!
//! Stateless presentational components rendered to HTML fragments.
//!
//! Each component maps a handful of props (variant, size, rating value) to
//! markup with utility class names; none of them hold state or perform I/O.
//! Text props are escaped. Props documented as HTML (card body and footer)
//! are trusted fragments, normally the output of other components.

mod badge;
mod button;
mod card;
mod html;
mod star_rating;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::Card;
pub use html::escape;
pub use star_rating::StarRating;

/// Anything that renders to an HTML fragment.
pub trait Component {
    fn render(&self) -> String;
}
