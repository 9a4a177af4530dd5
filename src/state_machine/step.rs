use std::fmt;

use serde::{Deserialize, Serialize};

use super::status::{OrganizationStatus, Section};

/// The onboarding screen a partner user should land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnboardingStep {
    SectionA,
    SectionB,
    SectionC,
    Review,
    PartnerDashboard,
}

impl OnboardingStep {
    pub fn as_str(self) -> &'static str {
        match self {
            OnboardingStep::SectionA => "section-a",
            OnboardingStep::SectionB => "section-b",
            OnboardingStep::SectionC => "section-c",
            OnboardingStep::Review => "review",
            OnboardingStep::PartnerDashboard => "partner-dashboard",
        }
    }
}

impl From<Section> for OnboardingStep {
    fn from(section: Section) -> Self {
        match section {
            Section::A => OnboardingStep::SectionA,
            Section::B => OnboardingStep::SectionB,
            Section::C => OnboardingStep::SectionC,
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OrganizationStatus {
    /// Routing for a known status.
    ///
    /// `changes_requested` stays on the review screen until the reviewer
    /// picks which section to reopen. `email_pending` and `rejected` fall
    /// through to section A.
    pub fn next_step(self) -> OnboardingStep {
        match self {
            OrganizationStatus::APending => OnboardingStep::SectionA,
            OrganizationStatus::BPending => OnboardingStep::SectionB,
            OrganizationStatus::CPending => OnboardingStep::SectionC,
            OrganizationStatus::UnderReviewGm
            | OrganizationStatus::UnderReviewCoo
            | OrganizationStatus::ChangesRequested => OnboardingStep::Review,
            OrganizationStatus::Finalized => OnboardingStep::PartnerDashboard,
            OrganizationStatus::EmailPending | OrganizationStatus::Rejected => {
                OnboardingStep::SectionA
            }
        }
    }
}

/// Decide which step to route an organization to. Never fails: anything
/// unrecognized goes to section A.
pub fn next_step_from(status: &str) -> OnboardingStep {
    match OrganizationStatus::parse_current(status) {
        Some(status) => status.next_step(),
        None => OnboardingStep::SectionA,
    }
}

/// [`next_step_from`] for a status column that may be NULL.
pub fn next_step_from_nullable(status: Option<&str>) -> OnboardingStep {
    status.map_or(OnboardingStep::SectionA, next_step_from)
}
