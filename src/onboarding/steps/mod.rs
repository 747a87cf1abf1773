//! Onboarding wizard steps
//!
//! Each step prompts for its own fields and writes the answers into the
//! wizard. Whether the step may be left is decided by the wizard, not here.

pub mod basic_info;
pub mod equipment;
pub mod goals;
pub mod health;
pub mod lifestyle;

pub use basic_info::BasicInfoStep;
pub use equipment::EquipmentStep;
pub use goals::GoalsStep;
pub use health::HealthStep;
pub use lifestyle::LifestyleStep;

use std::io::{BufRead, Write};

use crate::error::BodaiResult;

use super::prompt::Prompter;
use super::validation::WizardStep;

/// What the user asked for at the end of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Answers were given; try to move on
    Continue,
    /// The user typed `back`
    Back,
}

/// Unwrap an [`Answer`](super::prompt::Answer), returning `StepOutcome::Back`
/// from the enclosing step when the user asked to go back
macro_rules! answer {
    ($prompt:expr) => {
        match $prompt? {
            $crate::onboarding::prompt::Answer::Value(value) => value,
            $crate::onboarding::prompt::Answer::Back => {
                return Ok($crate::onboarding::steps::StepOutcome::Back)
            }
        }
    };
}
pub(crate) use answer;

/// Print the "Step N of 5" header
pub(crate) fn header<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    step: WizardStep,
    blurb: &str,
) -> BodaiResult<()> {
    let title = format!(
        "Step {} of {}: {}",
        step.index() + 1,
        WizardStep::ALL.len(),
        step.title()
    );
    prompter.say("")?;
    prompter.say(&title)?;
    prompter.say("=".repeat(title.len()))?;
    prompter.say(blurb)?;
    prompter.say("(Press Enter to keep the value in brackets, type 'back' to return.)")?;
    prompter.say("")
}
