//! Status enums and auth flavours.
//!
//! All enums use `snake_case` serialization, matching the text values stored by
//! the hosted backend.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ReviewStatus
// ---------------------------------------------------------------------------

/// Moderation status of a product review.
///
/// ```text
/// pending → approved
///         → rejected
/// ```
///
/// Moderators may also re-open or flip a decision, so any status can be set
/// from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    /// Return the string representation used in storage and query filters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parse an optional `?status=` filter.
    ///
    /// Absent, blank, and `all` mean "no filter".
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for any other unknown value.
    pub fn parse_filter(raw: Option<&str>) -> Result<Option<Self>, CoreError> {
        match raw.map(str::trim) {
            None | Some("" | "all") => Ok(None),
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|_| CoreError::Validation(format!("Invalid status filter: {value}"))),
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Invalid review status: {s}")))
    }
}

// ---------------------------------------------------------------------------
// OtpType
// ---------------------------------------------------------------------------

/// One-time code flavours accepted by the auth provider's verify call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OtpType {
    Signup,
    Magiclink,
    Recovery,
    Invite,
    EmailChange,
    Email,
}

impl OtpType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Magiclink => "magiclink",
            Self::Recovery => "recovery",
            Self::Invite => "invite",
            Self::EmailChange => "email_change",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for OtpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("pending", ReviewStatus::Pending)]
    #[case("approved", ReviewStatus::Approved)]
    #[case("rejected", ReviewStatus::Rejected)]
    fn review_status_parses_wire_values(#[case] raw: &str, #[case] expected: ReviewStatus) {
        assert_eq!(raw.parse::<ReviewStatus>().unwrap(), expected);
        assert_eq!(expected.to_string(), raw);
    }

    #[test]
    fn review_status_rejects_unknown() {
        let err = "archived".parse::<ReviewStatus>().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("  "))]
    #[case(Some("all"))]
    fn filter_means_everything(#[case] raw: Option<&str>) {
        assert_eq!(ReviewStatus::parse_filter(raw).unwrap(), None);
    }

    #[test]
    fn filter_parses_known_status() {
        assert_eq!(
            ReviewStatus::parse_filter(Some("approved")).unwrap(),
            Some(ReviewStatus::Approved)
        );
    }

    #[test]
    fn filter_rejects_unknown_status() {
        let err = ReviewStatus::parse_filter(Some("spam")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid status filter: spam");
    }

    #[test]
    fn otp_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&OtpType::EmailChange).unwrap(),
            "\"email_change\""
        );
        assert_eq!(OtpType::Signup.as_str(), "signup");
    }
}
