use sf_core::enums::ReviewStatus;

use crate::Component;
use crate::html::escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Default => "badge-default",
            Self::Success => "badge-success",
            Self::Warning => "badge-warning",
            Self::Danger => "badge-danger",
            Self::Info => "badge-info",
        }
    }
}

impl From<ReviewStatus> for BadgeVariant {
    fn from(status: ReviewStatus) -> Self {
        match status {
            ReviewStatus::Pending => Self::Warning,
            ReviewStatus::Approved => Self::Success,
            ReviewStatus::Rejected => Self::Danger,
        }
    }
}

/// A short pill-shaped label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub variant: BadgeVariant,
}

impl Badge {
    #[must_use]
    pub fn new(label: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            label: label.into(),
            variant,
        }
    }

    /// Badge for a review's moderation status.
    #[must_use]
    pub fn for_status(status: ReviewStatus) -> Self {
        Self::new(status.as_str(), status.into())
    }
}

impl Component for Badge {
    fn render(&self) -> String {
        format!(
            r#"<span class="badge {}">{}</span>"#,
            self.variant.class(),
            escape(&self.label)
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn renders_variant_class() {
        assert_eq!(
            Badge::new("New", BadgeVariant::Info).render(),
            r#"<span class="badge badge-info">New</span>"#
        );
    }

    #[rstest]
    #[case(ReviewStatus::Pending, "badge-warning")]
    #[case(ReviewStatus::Approved, "badge-success")]
    #[case(ReviewStatus::Rejected, "badge-danger")]
    fn status_badges(#[case] status: ReviewStatus, #[case] class: &str) {
        let html = Badge::for_status(status).render();
        assert!(html.contains(class), "{html}");
        assert!(html.contains(&format!(">{status}<")), "{html}");
    }
}
