//! Profile CLI commands
//!
//! Lists, shows and exports submitted onboarding profiles.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::display::{format_profile, format_profile_list};
use crate::error::{BodaiError, BodaiResult};
use crate::export::{export_profiles_json, export_profiles_yaml, ProfileExport};
use crate::services::ProfileService;
use crate::storage::Storage;

/// Profile export formats
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON (machine-readable)
    Json,
    /// YAML (human-readable)
    Yaml,
}

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// List submitted profiles
    List,
    /// Show a submitted profile
    Show {
        /// Profile ID, or an email to show that user's latest profile
        profile: String,
    },
    /// Export every submitted profile
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a profile command
pub fn handle_profile_command(storage: &Storage, cmd: ProfileCommands) -> BodaiResult<()> {
    let service = ProfileService::new(storage);

    match cmd {
        ProfileCommands::List => {
            let profiles = service.list()?;
            println!("{}", format_profile_list(&profiles));
        }

        ProfileCommands::Show { profile } => {
            let submitted = service.find(&profile)?;
            println!("Profile {}", submitted.id.as_uuid());
            if let Some(email) = &submitted.email {
                println!("  Email:     {}", email);
            }
            println!(
                "  Submitted: {}",
                submitted.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            println!("{}", format_profile(&submitted.profile));
        }

        ProfileCommands::Export { format, output } => {
            let export = ProfileExport::from_storage(storage)?;
            let count = export.profiles.len();

            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        BodaiError::Export(format!(
                            "Failed to create file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    let mut writer = BufWriter::new(file);
                    write_export(&export, format, &mut writer)?;
                    writer.flush()?;
                    println!("Exported {} profiles to: {}", count, path.display());
                }
                None => {
                    let stdout = io::stdout();
                    let mut writer = stdout.lock();
                    write_export(&export, format, &mut writer)?;
                }
            }
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    export: &ProfileExport,
    format: ExportFormat,
    writer: &mut W,
) -> BodaiResult<()> {
    match format {
        ExportFormat::Json => export_profiles_json(export, writer),
        ExportFormat::Yaml => export_profiles_yaml(export, writer),
    }
}
