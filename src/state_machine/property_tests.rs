//! Property tests for the onboarding status machine.

use proptest::prelude::*;

use super::{
    LEGACY_UNDER_REVIEW, OnboardingStep, OnboardingTrail, OrganizationStatus, StatusMachine,
    allowed_transitions, assert_transition, next_step_from,
};
use crate::error::OrgflowError;

fn any_status() -> impl Strategy<Value = OrganizationStatus> {
    proptest::sample::select(OrganizationStatus::ALL.to_vec())
}

/// Canonical strings, the legacy alias, and arbitrary junk.
fn any_status_str() -> impl Strategy<Value = String> {
    prop_oneof![
        any_status().prop_map(|s| s.as_str().to_string()),
        Just(LEGACY_UNDER_REVIEW.to_string()),
        "[a-z_]{0,20}",
        ".*",
    ]
}

proptest! {
    #[test]
    fn next_step_is_total_and_stable(status in any_status_str()) {
        let first = next_step_from(&status);
        let second = next_step_from(&status);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unknown_strings_route_to_section_a(status in ".*") {
        prop_assume!(OrganizationStatus::parse_current(&status).is_none());
        prop_assert_eq!(next_step_from(&status), OnboardingStep::SectionA);
    }

    #[test]
    fn unknown_from_never_permits_anything(from in ".*", to in any_status_str()) {
        prop_assume!(OrganizationStatus::parse_current(&from).is_none());
        prop_assert!(allowed_transitions(&from).is_empty());
        prop_assert!(assert_transition(&from, &to).is_err());
    }

    #[test]
    fn string_and_typed_checks_agree(from in any_status(), to in any_status()) {
        prop_assert_eq!(
            assert_transition(from.as_str(), to.as_str()).is_ok(),
            StatusMachine::can_transition(from, to)
        );
    }

    #[test]
    fn rejections_name_both_inputs(from in any_status_str(), to in any_status_str()) {
        if let Err(err) = assert_transition(&from, &to) {
            let is_invalid_transition = matches!(err, OrgflowError::InvalidTransition { .. });
            prop_assert!(is_invalid_transition);
            let msg = err.to_string();
            prop_assert!(msg.contains(&from));
            prop_assert!(msg.contains(&to));
        }
    }

    #[test]
    fn terminal_states_are_locked(to in any_status_str()) {
        prop_assert!(assert_transition("rejected", &to).is_err());
        prop_assert!(assert_transition("finalized", &to).is_err());
    }

    #[test]
    fn random_walks_stay_inside_the_table(choices in prop::collection::vec(0usize..3, 0..30)) {
        let mut trail = OnboardingTrail::new("org-prop");
        for choice in choices {
            let allowed = StatusMachine::allowed_from(trail.current());
            if allowed.is_empty() {
                break;
            }
            let to = allowed[choice % allowed.len()];
            prop_assert!(trail.advance(to).is_ok());
            prop_assert_ne!(trail.current(), OrganizationStatus::EmailPending);
        }
        for change in trail.history() {
            prop_assert!(StatusMachine::can_transition(change.from, change.to));
        }
    }
}
