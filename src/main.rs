use anyhow::Result;
use clap::{Parser, Subcommand};

use bodai::cli::{
    handle_audit_command, handle_onboard_command, handle_profile_command, handle_serve_command,
    handle_track_command, handle_user_command,
};
use bodai::config::{paths::BodaiPaths, settings::Settings};
use bodai::storage::Storage;

#[derive(Parser)]
#[command(
    name = "bodai",
    version,
    about = "Fitness onboarding, workout tracking and membership tooling",
    long_about = "BodAI collects your fitness profile through a short onboarding \
                  wizard, tracks workouts set by set, and serves a small API for \
                  registration and profile submission."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the onboarding wizard
    Onboard {
        /// Email to attach to the submitted profile
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Start an interactive workout tracking session
    Track,

    /// User management commands
    #[command(subcommand)]
    User(bodai::cli::UserCommands),

    /// Submitted profile commands
    #[command(subcommand)]
    Profile(bodai::cli::ProfileCommands),

    /// Run the HTTP API
    Serve {
        /// Listen address, overriding the configured one
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BodaiPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Onboard { email }) => {
            handle_onboard_command(&storage, email)?;
        }
        Some(Commands::Track) => {
            handle_track_command()?;
        }
        Some(Commands::User(cmd)) => {
            handle_user_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Profile(cmd)) => {
            handle_profile_command(&storage, cmd)?;
        }
        Some(Commands::Serve { bind }) => {
            handle_serve_command(storage, settings, bind)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&storage, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing BodAI at: {}", paths.base_dir().display());
            bodai::storage::initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'bodai onboard' to set up your fitness profile.");
        }
        Some(Commands::Config) => {
            println!("BodAI Configuration");
            println!("===================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Server bind:      {}", settings.server.bind);
            println!(
                "  Allowed origins:  {}",
                settings.server.allowed_origins.join(", ")
            );
            println!("  Membership price: {} ETH", settings.membership.price_eth);
            match &settings.membership.contract_address {
                Some(address) => println!("  Contract address: {}", address),
                None => println!("  Contract address: (not configured)"),
            }
        }
        None => {
            println!("BodAI - fitness onboarding and workout tracking");
            println!();
            println!("Run 'bodai --help' for usage information.");
            println!("Run 'bodai onboard' to get started.");
        }
    }

    Ok(())
}
