//! Profile display formatting

use std::collections::BTreeSet;
use std::fmt::Display;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Profile, SubmittedProfile};

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

fn option_label<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn set_labels<T: Display>(values: &BTreeSet<T>) -> String {
    if values.is_empty() {
        return "-".to_string();
    }
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a profile as labelled lines
pub fn format_profile(profile: &Profile) -> String {
    let rows = [
        ("Height", or_dash(&profile.height).to_string()),
        ("Weight", or_dash(&profile.weight).to_string()),
        ("Age", or_dash(&profile.age).to_string()),
        ("Workout history", or_dash(&profile.workout_history).to_string()),
        ("Medical conditions", or_dash(&profile.medical_conditions).to_string()),
        ("Lifestyle", option_label(profile.lifestyle)),
        ("Daily routines", or_dash(&profile.daily_routines).to_string()),
        ("Primary goal", option_label(profile.primary_goal)),
        ("Secondary goals", set_labels(&profile.secondary_goals)),
        ("Equipment", set_labels(&profile.equipment_availability)),
        ("Workout location", option_label(profile.workout_location)),
    ];

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("  {:<width$}  {}", label, value, width = label_width))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Submitted")]
    submitted: String,
    #[tabled(rename = "Primary goal")]
    goal: String,
    #[tabled(rename = "Location")]
    location: String,
}

/// Format submitted profiles as a table
pub fn format_profile_list(profiles: &[SubmittedProfile]) -> String {
    if profiles.is_empty() {
        return "No profiles found.".to_string();
    }

    let rows = profiles.iter().map(|p| ProfileRow {
        id: p.id.to_string(),
        email: p.email.clone().unwrap_or_else(|| "-".to_string()),
        submitted: p.submitted_at.format("%Y-%m-%d %H:%M").to_string(),
        goal: option_label(p.profile.primary_goal),
        location: option_label(p.profile.workout_location),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Equipment, Goal};

    #[test]
    fn test_format_profile() {
        let mut profile = Profile::new();
        profile.height = "175 cm".into();
        profile.set_primary_goal(Some(Goal::FatLoss));
        profile.toggle_equipment(Equipment::Kettlebells);
        profile.toggle_equipment(Equipment::HomeGym);

        let text = format_profile(&profile);
        assert!(text.contains("Height"));
        assert!(text.contains("175 cm"));
        assert!(text.contains("Fat Loss"));
        assert!(text.contains("Home Gym (Full Equipment), Kettlebells"));
        // Empty answers show as a dash
        assert!(text.lines().any(|l| l.trim_start().starts_with("Age") && l.ends_with('-')));
    }

    #[test]
    fn test_format_profile_list() {
        assert_eq!(format_profile_list(&[]), "No profiles found.");

        let submitted = SubmittedProfile::new(Profile::new(), Some("ada@example.com".into()));
        let table = format_profile_list(&[submitted]);
        assert!(table.contains("Email"));
        assert!(table.contains("ada@example.com"));
    }
}
