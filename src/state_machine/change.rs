use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{OrgflowError, Result};

use super::machine::{StatusMachine, assert_transition};
use super::status::OrganizationStatus;
use super::step::OnboardingStep;

/// Audit entry for one status change.
///
/// [`StatusChange::record`] only builds one after the transition table
/// accepts `from → to`. Fields are public so rows can be loaded back from
/// storage; values built by hand are not checked. The caller writes a new
/// entry alongside the new status in the same transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    pub id: Uuid,
    pub organization_id: String,
    pub from: OrganizationStatus,
    pub to: OrganizationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub changed_at: DateTime<Utc>,
}

impl StatusChange {
    pub fn record(
        organization_id: impl Into<String>,
        from: OrganizationStatus,
        to: OrganizationStatus,
    ) -> Result<Self> {
        StatusMachine::check(from, to)?;
        Ok(Self {
            id: Uuid::new_v4(),
            organization_id: organization_id.into(),
            from,
            to,
            actor: None,
            note: None,
            changed_at: Utc::now(),
        })
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// In-memory replay of one organization's onboarding.
///
/// Starts at `email_pending` and only moves through [`advance`](Self::advance),
/// so `history` always holds legal changes. A rejected advance leaves the
/// trail untouched.
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingTrail {
    organization_id: String,
    current: OrganizationStatus,
    history: Vec<StatusChange>,
}

impl OnboardingTrail {
    pub fn new(organization_id: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
            current: OrganizationStatus::EmailPending,
            history: Vec::new(),
        }
    }

    /// Resume a trail from a stored status with no recorded history.
    pub fn resume(organization_id: impl Into<String>, current: OrganizationStatus) -> Self {
        Self {
            organization_id: organization_id.into(),
            current,
            history: Vec::new(),
        }
    }

    /// Replay raw status strings from `email_pending`.
    ///
    /// Stops at the first rejected status and returns the trail as it stood
    /// at the last legal one, together with the error.
    pub fn replay<S: AsRef<str>>(
        organization_id: impl Into<String>,
        statuses: &[S],
    ) -> (Self, Option<OrgflowError>) {
        let mut trail = Self::new(organization_id);
        for raw in statuses {
            if let Err(err) = trail.advance_str(raw.as_ref()) {
                return (trail, Some(err));
            }
        }
        (trail, None)
    }

    pub fn organization_id(&self) -> &str {
        &self.organization_id
    }

    pub fn current(&self) -> OrganizationStatus {
        self.current
    }

    pub fn history(&self) -> &[StatusChange] {
        &self.history
    }

    /// [`advance`](Self::advance) for a raw target. The legacy alias and
    /// unknown values are invalid transitions carrying the raw string.
    pub fn advance_str(&mut self, to: &str) -> Result<&StatusChange> {
        assert_transition(self.current.as_str(), to)?;
        let to = to.parse::<OrganizationStatus>()?;
        self.advance(to)
    }

    pub fn advance(&mut self, to: OrganizationStatus) -> Result<&StatusChange> {
        let change = StatusChange::record(self.organization_id.clone(), self.current, to)?;
        tracing::debug!(
            organization_id = %self.organization_id,
            from = %change.from,
            to = %change.to,
            "organization status advanced"
        );
        let index = self.history.len();
        self.current = to;
        self.history.push(change);
        Ok(&self.history[index])
    }

    pub fn next_step(&self) -> OnboardingStep {
        self.current.next_step()
    }

    pub fn is_closed(&self) -> bool {
        self.current.is_terminal()
    }

    /// Every status visited so far, including the current one.
    pub fn visited(&self) -> Vec<OrganizationStatus> {
        let mut statuses: Vec<_> = self.history.iter().map(|c| c.from).collect();
        statuses.push(self.current);
        statuses
    }
}
