//! Profile management commands
//!
//! Profiles are named references to WebDAV storage accounts, including
//! endpoint, credentials and an optional cached capabilities document.

use clap::Subcommand;
use serde::Serialize;

use dk_core::{Profile, ProfileManager};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Profile subcommands for managing storage accounts
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Add or update a profile
    Set(SetArgs),

    /// List all configured profiles
    List(ListArgs),

    /// Remove a profile
    Remove(RemoveArgs),
}

/// Arguments for the `profile set` command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Profile name (e.g., "cloud", "work")
    pub name: String,

    /// Server base URL (e.g., "https://cloud.example.com")
    pub endpoint: String,

    /// Account user name
    pub user: String,

    /// App password / token
    pub app_password: String,

    /// Allow insecure TLS connections
    #[arg(long, default_value = "false")]
    pub insecure: bool,

    /// Path to a cached server capabilities document (JSON)
    #[arg(long, value_name = "FILE")]
    pub caps_file: Option<String>,
}

/// Arguments for the `profile list` command
#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Show full details including endpoints
    #[arg(short, long)]
    pub long: bool,
}

/// Arguments for the `profile remove` command
#[derive(clap::Args, Debug)]
pub struct RemoveArgs {
    /// Name of the profile to remove
    pub name: String,
}

/// JSON output for profile list
#[derive(Serialize)]
struct ProfileListOutput {
    profiles: Vec<ProfileInfo>,
}

/// Profile information for JSON output (without sensitive data)
#[derive(Serialize)]
struct ProfileInfo {
    name: String,
    endpoint: String,
    user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    caps_file: Option<String>,
}

impl From<&Profile> for ProfileInfo {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            endpoint: profile.endpoint.clone(),
            user: profile.user.clone(),
            caps_file: profile.capabilities_file.clone(),
        }
    }
}

/// Execute a profile subcommand
pub fn execute(cmd: ProfileCommands, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let manager = match ProfileManager::new() {
        Ok(m) => m,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::GeneralError;
        }
    };

    match cmd {
        ProfileCommands::Set(args) => execute_set(args, &manager, &formatter),
        ProfileCommands::List(args) => execute_list(args, &manager, &formatter),
        ProfileCommands::Remove(args) => execute_remove(args, &manager, &formatter),
    }
}

fn execute_set(args: SetArgs, manager: &ProfileManager, formatter: &Formatter) -> ExitCode {
    if args.name.is_empty() {
        formatter.error("Profile name cannot be empty");
        return ExitCode::UsageError;
    }

    let mut profile = Profile::new(&args.name, &args.endpoint, &args.user, &args.app_password);
    profile.insecure = args.insecure;
    profile.capabilities_file = args.caps_file;

    if let Err(e) = profile.validate_endpoint() {
        formatter.error(&e.to_string());
        return ExitCode::UsageError;
    }

    match manager.set(profile) {
        Ok(()) => {
            formatter.success(&format!("Profile '{}' configured successfully", args.name));
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&e.to_string());
            ExitCode::from_error(&e)
        }
    }
}

fn execute_list(args: ListArgs, manager: &ProfileManager, formatter: &Formatter) -> ExitCode {
    match manager.list() {
        Ok(profiles) => {
            if formatter.is_json() {
                formatter.json(&ProfileListOutput {
                    profiles: profiles.iter().map(ProfileInfo::from).collect(),
                });
            } else if profiles.is_empty() {
                formatter.line("No profiles configured.");
            } else {
                for p in &profiles {
                    if args.long {
                        formatter.line(&format!(
                            "{}  {}  {}  caps={}",
                            p.name,
                            p.endpoint,
                            p.user,
                            p.capabilities_file.as_deref().unwrap_or("(builtin)")
                        ));
                    } else {
                        formatter.line(&p.name);
                    }
                }
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&e.to_string());
            ExitCode::from_error(&e)
        }
    }
}

fn execute_remove(args: RemoveArgs, manager: &ProfileManager, formatter: &Formatter) -> ExitCode {
    match manager.remove(&args.name) {
        Ok(()) => {
            formatter.success(&format!("Profile '{}' removed", args.name));
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&e.to_string());
            ExitCode::from_error(&e)
        }
    }
}
