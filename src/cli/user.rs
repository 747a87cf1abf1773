//! User CLI commands
//!
//! Registers and inspects users without going through the HTTP API.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::crypto::SecureString;
use crate::display::{format_user_details, format_user_list};
use crate::error::{BodaiError, BodaiResult};
use crate::services::{RegisterRequest, RegistrationService};
use crate::storage::Storage;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user
    Register {
        /// Display name
        name: String,
        /// Email address
        email: String,
        /// Password (prompted for when omitted)
        #[arg(long, env = "BODAI_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// List registered users
    List,
    /// Show user details
    Show {
        /// Email or user ID
        user: String,
    },
}

/// Handle a user command
pub fn handle_user_command(
    storage: &Storage,
    settings: &Settings,
    cmd: UserCommands,
) -> BodaiResult<()> {
    let service = RegistrationService::new(storage, &settings.password_hashing);

    match cmd {
        UserCommands::Register {
            name,
            email,
            password,
        } => {
            let password = match password {
                Some(p) => SecureString::new(p),
                None => prompt_password("Password: ")?,
            };

            let request = RegisterRequest::new(name, email, password.as_str());
            let user = service.register(&request)?;

            println!("Registered user: {} <{}>", user.name, user.email);
            println!("  ID: {}", user.id.as_uuid());
        }

        UserCommands::List => {
            let users = service.list()?;
            println!("{}", format_user_list(&users));
        }

        UserCommands::Show { user } => {
            let found = service
                .find(&user)?
                .ok_or_else(|| BodaiError::user_not_found(&user))?;
            println!("{}", format_user_details(&found));
        }
    }

    Ok(())
}

fn prompt_password(prompt: &str) -> BodaiResult<SecureString> {
    rpassword::prompt_password(prompt)
        .map(SecureString::new)
        .map_err(|e| BodaiError::Io(format!("Failed to read password: {}", e)))
}
