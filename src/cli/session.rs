//! Interactive sessions: onboarding and workout tracking

use std::io;

use crate::error::BodaiResult;
use crate::onboarding::{OnboardingRunner, Prompter};
use crate::storage::Storage;
use crate::tracker::TrackerSession;

/// Run the onboarding wizard on the terminal
pub fn handle_onboard_command(storage: &Storage, email: Option<String>) -> BodaiResult<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let result = OnboardingRunner::new(storage).run(&mut prompter, email)?;
    if let Some(submission) = result.submission {
        tracing::debug!(profile_id = %submission.id, "onboarding completed");
    }
    Ok(())
}

/// Run the workout tracker on the terminal
pub fn handle_track_command() -> BodaiResult<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    TrackerSession::new().run(&mut prompter)
}
