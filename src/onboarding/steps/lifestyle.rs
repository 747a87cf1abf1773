//! Lifestyle step

use std::io::{BufRead, Write};

use crate::error::BodaiResult;
use crate::models::Lifestyle;
use crate::onboarding::prompt::Prompter;
use crate::onboarding::validation::WizardStep;
use crate::onboarding::wizard::OnboardingWizard;

use super::{answer, header, StepOutcome};

/// Daily lifestyle step
pub struct LifestyleStep;

impl LifestyleStep {
    /// Run the lifestyle step
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        wizard: &mut OnboardingWizard,
    ) -> BodaiResult<StepOutcome> {
        header(
            prompter,
            WizardStep::Lifestyle,
            "How active is a normal day for you?",
        )?;

        let lifestyle = answer!(prompter.choose(
            "Activity level:",
            Lifestyle::ALL,
            wizard.profile().lifestyle
        ));
        wizard.set_lifestyle(lifestyle);

        prompter.say("")?;
        let routines = answer!(prompter.text(
            "Daily routines & schedule (work, sleep, meals, preferred workout times)",
            &wizard.profile().daily_routines
        ));
        wizard.set_daily_routines(routines);

        Ok(StepOutcome::Continue)
    }
}
