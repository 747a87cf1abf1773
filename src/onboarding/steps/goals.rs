//! Goals step
//!
//! The primary goal is asked first so it can be left out of the secondary
//! goal menu.

use std::io::{BufRead, Write};

use crate::error::BodaiResult;
use crate::models::Goal;
use crate::onboarding::prompt::Prompter;
use crate::onboarding::validation::WizardStep;
use crate::onboarding::wizard::OnboardingWizard;

use super::{answer, header, StepOutcome};

/// Fitness goals step
pub struct GoalsStep;

impl GoalsStep {
    /// Run the goals step
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        wizard: &mut OnboardingWizard,
    ) -> BodaiResult<StepOutcome> {
        header(prompter, WizardStep::Goals, "What are you training for?")?;

        let primary = answer!(prompter.choose(
            "Primary goal:",
            Goal::ALL,
            wizard.profile().primary_goal
        ));
        wizard.set_primary_goal(primary);

        prompter.say("")?;
        let candidates = wizard.profile().secondary_goal_candidates();
        let current = wizard.profile().secondary_goals.clone();
        let selected = answer!(prompter.choose_many(
            "Secondary goals (optional):",
            &candidates,
            &current
        ));

        // Toggle the difference so the wizard keeps enforcing the primary-goal rule
        for goal in current.symmetric_difference(&selected) {
            wizard.toggle_secondary_goal(*goal);
        }

        Ok(StepOutcome::Continue)
    }
}
