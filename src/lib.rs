//! Partner organization onboarding workflow.
//!
//! [`state_machine`] owns the status enumeration, the transition table and
//! the onboarding step routing. Everything else in this crate is plumbing
//! for the `orgflow` inspection binary.

pub mod config;
pub mod error;
pub mod state_machine;

pub use error::{OrgflowError, Result};
pub use state_machine::{
    OnboardingStep, OrganizationStatus, StatusMachine, assert_transition, next_step_from,
};
