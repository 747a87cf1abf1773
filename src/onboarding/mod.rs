//! Onboarding wizard
//!
//! A five-step wizard that collects a [`Profile`](crate::models::Profile).
//! [`OnboardingWizard`] is the state machine, [`OnboardingRunner`] drives it
//! from the terminal.

pub mod prompt;
pub mod runner;
pub mod steps;
pub mod validation;
pub mod wizard;

pub use prompt::{Answer, Prompter, BACK_KEYWORD};
pub use runner::{OnboardingResult, OnboardingRunner};
pub use validation::{describe_errors, validate_profile, validate_step, FieldErrors, WizardStep};
pub use wizard::OnboardingWizard;
