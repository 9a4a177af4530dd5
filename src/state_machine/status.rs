use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::OrgflowError;

/// Pre-split GM review status still found in older records. Read as
/// [`OrganizationStatus::UnderReviewGm`], never written.
pub const LEGACY_UNDER_REVIEW: &str = "under_review";

/// Onboarding status of a partner organization.
///
/// email_pending → a_pending → b_pending → c_pending → under_review_gm → under_review_coo → finalized,
/// with changes_requested and rejected branching off either review stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationStatus {
    EmailPending,
    APending,
    BPending,
    CPending,
    UnderReviewGm,
    UnderReviewCoo,
    ChangesRequested,
    Rejected,
    Finalized,
}

/// One of the three data-collection sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Section {
    /// Basic information.
    A,
    /// Financial assessment.
    B,
    /// Supporting documents.
    C,
}

/// Which reviewer owns a review stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReviewTier {
    /// Grants Manager, first tier.
    Gm,
    /// Chief Operating Officer, final tier.
    Coo,
}

impl OrganizationStatus {
    /// Every canonical status, in lifecycle order.
    pub const ALL: [OrganizationStatus; 9] = [
        OrganizationStatus::EmailPending,
        OrganizationStatus::APending,
        OrganizationStatus::BPending,
        OrganizationStatus::CPending,
        OrganizationStatus::UnderReviewGm,
        OrganizationStatus::UnderReviewCoo,
        OrganizationStatus::ChangesRequested,
        OrganizationStatus::Rejected,
        OrganizationStatus::Finalized,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrganizationStatus::EmailPending => "email_pending",
            OrganizationStatus::APending => "a_pending",
            OrganizationStatus::BPending => "b_pending",
            OrganizationStatus::CPending => "c_pending",
            OrganizationStatus::UnderReviewGm => "under_review_gm",
            OrganizationStatus::UnderReviewCoo => "under_review_coo",
            OrganizationStatus::ChangesRequested => "changes_requested",
            OrganizationStatus::Rejected => "rejected",
            OrganizationStatus::Finalized => "finalized",
        }
    }

    /// Parse a status read from storage or supplied as the current value.
    ///
    /// Accepts every canonical string plus [`LEGACY_UNDER_REVIEW`], which
    /// folds into `UnderReviewGm`. Returns `None` for anything else.
    pub fn parse_current(s: &str) -> Option<Self> {
        if s == LEGACY_UNDER_REVIEW {
            return Some(OrganizationStatus::UnderReviewGm);
        }
        s.parse().ok()
    }

    /// `rejected` and `finalized` have no outgoing transitions.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            OrganizationStatus::Rejected | OrganizationStatus::Finalized
        )
    }

    pub fn review_tier(self) -> Option<ReviewTier> {
        match self {
            OrganizationStatus::UnderReviewGm => Some(ReviewTier::Gm),
            OrganizationStatus::UnderReviewCoo => Some(ReviewTier::Coo),
            _ => None,
        }
    }

    /// The data-collection section this status is waiting on, if any.
    pub fn section(self) -> Option<Section> {
        match self {
            OrganizationStatus::APending => Some(Section::A),
            OrganizationStatus::BPending => Some(Section::B),
            OrganizationStatus::CPending => Some(Section::C),
            _ => None,
        }
    }
}

impl Section {
    pub const ALL: [Section; 3] = [Section::A, Section::B, Section::C];

    /// Status an organization sits in while this section is open.
    pub fn pending_status(self) -> OrganizationStatus {
        match self {
            Section::A => OrganizationStatus::APending,
            Section::B => OrganizationStatus::BPending,
            Section::C => OrganizationStatus::CPending,
        }
    }
}

impl fmt::Display for OrganizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ReviewTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewTier::Gm => write!(f, "GM"),
            ReviewTier::Coo => write!(f, "COO"),
        }
    }
}

/// Strict parse: canonical values only. The legacy alias is rejected so it
/// can never be chosen as a new status.
impl FromStr for OrganizationStatus {
    type Err = OrgflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrganizationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| OrgflowError::UnknownStatus(s.to_string()))
    }
}

// Stored rows may still carry the legacy alias.
impl<'de> Deserialize<'de> for OrganizationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        OrganizationStatus::parse_current(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown organization status: {raw}")))
    }
}

/// True only for the nine canonical status strings.
pub fn is_valid_status(s: &str) -> bool {
    s.parse::<OrganizationStatus>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_strings_round_trip_through_display() {
        for status in OrganizationStatus::ALL {
            assert_eq!(status.as_str().parse::<OrganizationStatus>().unwrap(), status);
            assert_eq!(status.to_string(), status.as_str());
        }
    }

    #[test]
    fn strict_parse_rejects_legacy_alias_and_unknowns() {
        assert!(matches!(
            "under_review".parse::<OrganizationStatus>(),
            Err(OrgflowError::UnknownStatus(s)) if s == "under_review"
        ));
        assert!("".parse::<OrganizationStatus>().is_err());
        assert!("Finalized".parse::<OrganizationStatus>().is_err());
        assert!(" a_pending".parse::<OrganizationStatus>().is_err());
    }

    #[test]
    fn lenient_parse_folds_legacy_alias_into_gm_review() {
        assert_eq!(
            OrganizationStatus::parse_current("under_review"),
            Some(OrganizationStatus::UnderReviewGm)
        );
        assert_eq!(
            OrganizationStatus::parse_current("c_pending"),
            Some(OrganizationStatus::CPending)
        );
        assert_eq!(OrganizationStatus::parse_current("bogus"), None);
    }

    #[test]
    fn is_valid_status_matches_canonical_set() {
        assert!(is_valid_status("email_pending"));
        assert!(is_valid_status("under_review_coo"));
        assert!(!is_valid_status("under_review"));
        assert!(!is_valid_status("approved"));
    }

    #[test]
    fn serde_writes_canonical_and_reads_legacy() {
        let json = serde_json::to_string(&OrganizationStatus::APending).unwrap();
        assert_eq!(json, "\"a_pending\"");
        let json = serde_json::to_string(&OrganizationStatus::UnderReviewGm).unwrap();
        assert_eq!(json, "\"under_review_gm\"");

        let legacy: OrganizationStatus = serde_json::from_str("\"under_review\"").unwrap();
        assert_eq!(legacy, OrganizationStatus::UnderReviewGm);

        let bad = serde_json::from_str::<OrganizationStatus>("\"approved\"");
        assert!(bad.unwrap_err().to_string().contains("approved"));
    }

    #[test]
    fn terminal_review_and_section_helpers() {
        let terminal: Vec<_> = OrganizationStatus::ALL
            .into_iter()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(
            terminal,
            vec![OrganizationStatus::Rejected, OrganizationStatus::Finalized]
        );

        assert_eq!(
            OrganizationStatus::UnderReviewGm.review_tier(),
            Some(ReviewTier::Gm)
        );
        assert_eq!(
            OrganizationStatus::UnderReviewCoo.review_tier(),
            Some(ReviewTier::Coo)
        );
        assert_eq!(OrganizationStatus::ChangesRequested.review_tier(), None);

        for section in Section::ALL {
            assert_eq!(section.pending_status().section(), Some(section));
        }
        assert_eq!(OrganizationStatus::EmailPending.section(), None);
    }

    #[test]
    fn review_tier_display() {
        assert_eq!(ReviewTier::Gm.to_string(), "GM");
        assert_eq!(ReviewTier::Coo.to_string(), "COO");
    }
}
