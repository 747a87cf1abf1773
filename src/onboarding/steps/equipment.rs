//! Equipment step

use std::io::{BufRead, Write};

use crate::error::BodaiResult;
use crate::models::{Equipment, WorkoutLocation};
use crate::onboarding::prompt::Prompter;
use crate::onboarding::validation::WizardStep;
use crate::onboarding::wizard::OnboardingWizard;

use super::{answer, header, StepOutcome};

/// Equipment & location step
pub struct EquipmentStep;

impl EquipmentStep {
    /// Run the equipment step
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        wizard: &mut OnboardingWizard,
    ) -> BodaiResult<StepOutcome> {
        header(
            prompter,
            WizardStep::Equipment,
            "What do you have to train with, and where?",
        )?;

        let current = wizard.profile().equipment_availability.clone();
        let selected = answer!(prompter.choose_many(
            "Available equipment (select all that apply):",
            Equipment::ALL,
            &current
        ));
        for equipment in current.symmetric_difference(&selected) {
            wizard.toggle_equipment(*equipment);
        }

        prompter.say("")?;
        let location = answer!(prompter.choose(
            "Primary workout location:",
            WorkoutLocation::ALL,
            wizard.profile().workout_location
        ));
        wizard.set_workout_location(location);

        Ok(StepOutcome::Continue)
    }
}
