//! Basic info step
//!
//! Height, weight and age. All three are free text so users can answer in
//! whatever units they think in.

use std::io::{BufRead, Write};

use crate::error::BodaiResult;
use crate::onboarding::prompt::Prompter;
use crate::onboarding::validation::WizardStep;
use crate::onboarding::wizard::OnboardingWizard;

use super::{answer, header, StepOutcome};

/// Basic info step
pub struct BasicInfoStep;

impl BasicInfoStep {
    /// Run the basic info step
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        wizard: &mut OnboardingWizard,
    ) -> BodaiResult<StepOutcome> {
        header(prompter, WizardStep::BasicInfo, "Let's start with the basics.")?;

        let height = answer!(prompter.text(
            "Height (cm/ft, e.g. 175 cm or 5'9)",
            &wizard.profile().height
        ));
        wizard.set_height(height);

        let weight = answer!(prompter.text(
            "Weight (kg/lbs, e.g. 70 kg or 154 lbs)",
            &wizard.profile().weight
        ));
        wizard.set_weight(weight);

        let age = answer!(prompter.text("Age", &wizard.profile().age));
        wizard.set_age(age);

        Ok(StepOutcome::Continue)
    }
}
