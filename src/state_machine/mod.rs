mod change;
mod machine;
mod status;
mod step;

#[cfg(test)]
mod property_tests;

pub use change::{OnboardingTrail, StatusChange};
pub use machine::{StatusMachine, allowed_transitions, assert_transition, can_transition};
pub use status::{LEGACY_UNDER_REVIEW, OrganizationStatus, ReviewTier, Section, is_valid_status};
pub use step::{OnboardingStep, next_step_from, next_step_from_nullable};
