//! Interactive onboarding session
//!
//! Walks the user through the wizard steps, shows a summary and hands the
//! finished profile to the profile service.

use std::io::{BufRead, Write};

use crate::display::profile::format_profile;
use crate::error::BodaiResult;
use crate::models::SubmittedProfile;
use crate::services::ProfileService;
use crate::storage::Storage;

use super::prompt::Prompter;
use super::steps::{
    BasicInfoStep, EquipmentStep, GoalsStep, HealthStep, LifestyleStep, StepOutcome,
};
use super::validation::WizardStep;
use super::wizard::OnboardingWizard;

/// Result of an onboarding session
pub struct OnboardingResult {
    /// Whether a profile was submitted
    pub completed: bool,
    /// The stored profile, when one was submitted
    pub submission: Option<SubmittedProfile>,
}

impl OnboardingResult {
    fn cancelled() -> Self {
        Self {
            completed: false,
            submission: None,
        }
    }
}

/// Drives an [`OnboardingWizard`] from terminal prompts
pub struct OnboardingRunner<'a> {
    storage: &'a Storage,
}

impl<'a> OnboardingRunner<'a> {
    /// Create a runner that submits into `storage`
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Run the interactive onboarding session
    pub fn run<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        email: Option<String>,
    ) -> BodaiResult<OnboardingResult> {
        prompter.say("")?;
        prompter.say("===========================================")?;
        prompter.say("  Welcome to BodAI!")?;
        prompter.say("===========================================")?;
        prompter.say("")?;
        prompter.say("Let's personalize your fitness journey in five short steps.")?;
        prompter.say("")?;

        if !prompter.confirm("Ready to begin? (yes/no) [yes]: ", true)? {
            prompter.say("Onboarding cancelled.")?;
            return Ok(OnboardingResult::cancelled());
        }

        let mut wizard = OnboardingWizard::new();
        loop {
            let outcome = run_step(prompter, &mut wizard)?;

            match outcome {
                StepOutcome::Back => {
                    if !wizard.back() {
                        prompter.say("Already at the first step.")?;
                    }
                }
                StepOutcome::Continue if wizard.is_last_step() => {
                    if wizard.validate_current() {
                        break;
                    }
                    report_errors(prompter, &wizard)?;
                }
                StepOutcome::Continue => {
                    if !wizard.next() {
                        report_errors(prompter, &wizard)?;
                    }
                }
            }
        }

        prompter.say("")?;
        prompter.say("===========================================")?;
        prompter.say("  Profile Summary")?;
        prompter.say("===========================================")?;
        prompter.say(format_profile(wizard.profile()))?;

        if !prompter.confirm("Submit this profile? (yes/no) [yes]: ", true)? {
            prompter.say("Onboarding cancelled.")?;
            return Ok(OnboardingResult::cancelled());
        }

        let profile = wizard.submit()?;
        let submission = ProfileService::new(self.storage).submit(profile, email)?;

        prompter.say("")?;
        prompter.say("Profile setup completed successfully! Welcome to BodAI!")?;
        prompter.say(format!("Profile ID: {}", submission.id.as_uuid()))?;
        prompter.say("Run 'bodai track' to log your first workout.")?;

        Ok(OnboardingResult {
            completed: true,
            submission: Some(submission),
        })
    }
}

fn run_step<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    wizard: &mut OnboardingWizard,
) -> BodaiResult<StepOutcome> {
    match wizard.step() {
        WizardStep::BasicInfo => BasicInfoStep::run(prompter, wizard),
        WizardStep::HealthHistory => HealthStep::run(prompter, wizard),
        WizardStep::Lifestyle => LifestyleStep::run(prompter, wizard),
        WizardStep::Goals => GoalsStep::run(prompter, wizard),
        WizardStep::Equipment => EquipmentStep::run(prompter, wizard),
    }
}

fn report_errors<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    wizard: &OnboardingWizard,
) -> BodaiResult<()> {
    prompter.say("")?;
    prompter.say("Please fix the following before continuing:")?;
    for message in wizard.errors().values() {
        prompter.say(format!("  ! {}", message))?;
    }
    Ok(())
}
