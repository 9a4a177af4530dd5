use crate::error::{OrgflowError, Result};

use super::status::OrganizationStatus::{self, *};

/// The organization onboarding state machine.
///
/// Holds no state: callers read the stored status, validate the proposed
/// change here, and persist it in the same atomic unit.
pub struct StatusMachine;

impl StatusMachine {
    /// Legal targets from `from`.
    ///
    /// - Sections A → B → C advance one at a time.
    /// - C always lands in GM review; GM and COO review are sequential.
    /// - Either review stage may request changes or reject; only COO finalizes.
    /// - `changes_requested` reopens any section, never email verification.
    /// - `rejected` and `finalized` are terminal.
    pub fn allowed_from(from: OrganizationStatus) -> &'static [OrganizationStatus] {
        match from {
            EmailPending => &[APending],
            APending => &[BPending],
            BPending => &[CPending],
            CPending => &[UnderReviewGm],
            UnderReviewGm => &[UnderReviewCoo, ChangesRequested, Rejected],
            UnderReviewCoo => &[Finalized, ChangesRequested, Rejected],
            ChangesRequested => &[APending, BPending, CPending],
            Rejected | Finalized => &[],
        }
    }

    pub fn can_transition(from: OrganizationStatus, to: OrganizationStatus) -> bool {
        Self::allowed_from(from).contains(&to)
    }

    /// Typed validation of a status change.
    pub fn check(from: OrganizationStatus, to: OrganizationStatus) -> Result<()> {
        if Self::can_transition(from, to) {
            Ok(())
        } else {
            tracing::debug!(%from, %to, "rejected organization status transition");
            Err(OrgflowError::invalid_transition(from.as_str(), to.as_str()))
        }
    }
}

/// Legal targets for a raw status string. An unrecognized `from` has no
/// legal targets.
pub fn allowed_transitions(from: &str) -> &'static [OrganizationStatus] {
    match OrganizationStatus::parse_current(from) {
        Some(status) => StatusMachine::allowed_from(status),
        None => &[],
    }
}

/// Validate a proposed change given raw status strings.
///
/// `from` may be the legacy `under_review` alias; `to` must be canonical.
/// Fails closed: an unknown value on either side is an invalid transition,
/// and the error carries both strings exactly as given.
pub fn assert_transition(from: &str, to: &str) -> Result<()> {
    let current = OrganizationStatus::parse_current(from);
    let proposed = to.parse::<OrganizationStatus>().ok();

    match (current, proposed) {
        (Some(current), Some(proposed)) if StatusMachine::can_transition(current, proposed) => {
            Ok(())
        }
        _ => {
            tracing::debug!(from, to, "rejected organization status transition");
            Err(OrgflowError::invalid_transition(from, to))
        }
    }
}

/// Boolean form of [`assert_transition`].
pub fn can_transition(from: &str, to: &str) -> bool {
    assert_transition(from, to).is_ok()
}
