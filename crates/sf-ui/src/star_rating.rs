use sf_core::responses::StarCounts;

use crate::Component;

const DEFAULT_MAX: u8 = 5;

/// A row of stars showing a numeric rating.
///
/// The rating is clamped to `0..=max` and rounded to the nearest half star.
/// Non-finite ratings display as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRating {
    pub rating: f64,
    pub max: u8,
    pub show_value: bool,
}

impl StarRating {
    #[must_use]
    pub const fn new(rating: f64) -> Self {
        Self {
            rating,
            max: DEFAULT_MAX,
            show_value: false,
        }
    }

    #[must_use]
    pub const fn max(mut self, max: u8) -> Self {
        self.max = max;
        self
    }

    #[must_use]
    pub const fn show_value(mut self, show_value: bool) -> Self {
        self.show_value = show_value;
        self
    }

    /// The rating after clamping to `0..=max`.
    #[must_use]
    pub fn clamped(&self) -> f64 {
        if self.rating.is_finite() {
            self.rating.clamp(0.0, f64::from(self.max))
        } else {
            0.0
        }
    }

    /// Full, half and empty star counts. Always sums to `max`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn counts(&self) -> StarCounts {
        let halves = (self.clamped() * 2.0).round() as u16;
        let full = (halves / 2) as u8;
        let half = (halves % 2) as u8;

        StarCounts {
            full,
            half,
            empty: self.max - full - half,
        }
    }

    fn label(&self) -> String {
        let value = (self.clamped() * 10.0).round() / 10.0;
        if value.fract().abs() < f64::EPSILON {
            format!("{value:.0}")
        } else {
            format!("{value:.1}")
        }
    }
}

impl Component for StarRating {
    fn render(&self) -> String {
        let counts = self.counts();
        let label = self.label();

        let mut html = format!(
            r#"<div class="star-rating" role="img" aria-label="Rated {label} out of {}">"#,
            self.max
        );
        for _ in 0..counts.full {
            html.push_str(r#"<span class="star star-full">★</span>"#);
        }
        for _ in 0..counts.half {
            html.push_str(r#"<span class="star star-half">★</span>"#);
        }
        for _ in 0..counts.empty {
            html.push_str(r#"<span class="star star-empty">☆</span>"#);
        }
        if self.show_value {
            html.push_str(&format!(r#"<span class="star-rating-value">{label}</span>"#));
        }
        html.push_str("</div>");
        html
    }
}
