//! Health & history step

use std::io::{BufRead, Write};

use crate::error::BodaiResult;
use crate::onboarding::prompt::Prompter;
use crate::onboarding::validation::WizardStep;
use crate::onboarding::wizard::OnboardingWizard;

use super::{answer, header, StepOutcome};

/// Health & workout history step
pub struct HealthStep;

impl HealthStep {
    /// Run the health step
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        wizard: &mut OnboardingWizard,
    ) -> BodaiResult<StepOutcome> {
        header(
            prompter,
            WizardStep::HealthHistory,
            "Tell us how long you've been training, what you're familiar with\n\
             and any sports background.",
        )?;

        let history = answer!(prompter.text(
            "Workout experience & history",
            &wizard.profile().workout_history
        ));
        wizard.set_workout_history(history);

        let conditions = answer!(prompter.text(
            "Medical conditions & injuries (optional, 'None' if not applicable)",
            &wizard.profile().medical_conditions
        ));
        wizard.set_medical_conditions(conditions);

        Ok(StepOutcome::Continue)
    }
}
